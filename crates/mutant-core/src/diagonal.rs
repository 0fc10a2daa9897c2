//! Diagonal enumeration for square grids
//!
//! Two families cover the grid:
//! - down-right (↘): cells where `row - col` is a constant `d`, for
//!   `d` in `-(N-1)..=N-1`, length `N - |d|`
//! - down-left (↙): cells where `row + col` is a constant `s`, for
//!   `s` in `0..=2N-2`, length `s + 1` below the anti-diagonal and
//!   `2N - 1 - s` from it on
//!
//! Each family partitions the grid: every cell lies on exactly one diagonal
//! of each family. Cells are always listed in increasing row order.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Diagonal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum DiagonalFamily {
    #[strum(serialize = "down-right")]
    DownRight,
    #[strum(serialize = "down-left")]
    DownLeft,
}

/// One diagonal of a square grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagonal {
    pub family: DiagonalFamily,
    /// `row - col` for down-right diagonals, `row + col` for down-left ones
    pub key: isize,
    /// (row, col) cells, top row first
    pub cells: Vec<(usize, usize)>,
}

impl Diagonal {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl DiagonalFamily {
    /// Range of keys for a grid of side `side`
    fn keys(self, side: usize) -> core::ops::RangeInclusive<isize> {
        let n = side as isize;
        match self {
            DiagonalFamily::DownRight => -(n - 1)..=(n - 1),
            DiagonalFamily::DownLeft => 0..=(2 * n - 2),
        }
    }

    /// Number of cells on diagonal `key`
    fn length(self, side: usize, key: isize) -> usize {
        let n = side as isize;
        let len = match self {
            DiagonalFamily::DownRight => n - key.abs(),
            DiagonalFamily::DownLeft if key < n => key + 1,
            DiagonalFamily::DownLeft => 2 * n - 1 - key,
        };
        len.max(0) as usize
    }

    /// Cells of diagonal `key`, in increasing row order
    fn cells(self, side: usize, key: isize) -> Vec<(usize, usize)> {
        let n = side as isize;
        let (first_row, first_col, col_step) = match self {
            // (r, r - d): the first row is d when d > 0, else 0
            DiagonalFamily::DownRight => (key.max(0), (-key).max(0), 1),
            // (r, s - r): the first row is s - (N-1) when s > N-1, else 0
            DiagonalFamily::DownLeft => {
                let r0 = (key - (n - 1)).max(0);
                (r0, key - r0, -1)
            }
        };

        (0..self.length(side, key) as isize)
            .map(|i| ((first_row + i) as usize, (first_col + col_step * i) as usize))
            .collect()
    }

    /// Every diagonal of this family, regardless of length
    pub fn diagonals(self, side: usize) -> Vec<Diagonal> {
        self.keys(side)
            .map(|key| Diagonal {
                family: self,
                key,
                cells: self.cells(side, key),
            })
            .collect()
    }
}

/// Every diagonal of both families, `2 * (2N - 1)` in total
pub fn all_diagonals(side: usize) -> Vec<Diagonal> {
    DiagonalFamily::iter()
        .flat_map(|family| family.diagonals(side))
        .collect()
}

/// Diagonals of both families holding at least `min_run` cells
///
/// Short diagonals are skipped before their cells are built.
pub fn enumerate_diagonals(side: usize, min_run: usize) -> Vec<Diagonal> {
    DiagonalFamily::iter()
        .flat_map(|family| {
            family
                .keys(side)
                .filter(move |&key| family.length(side, key) >= min_run)
                .map(move |key| Diagonal {
                    family,
                    key,
                    cells: family.cells(side, key),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_by_six_run_of_four() {
        let diagonals = enumerate_diagonals(6, 4);
        assert_eq!(diagonals.len(), 10);

        let down_right: Vec<_> = diagonals
            .iter()
            .filter(|d| d.family == DiagonalFamily::DownRight)
            .map(|d| d.key)
            .collect();
        assert_eq!(down_right, vec![-2, -1, 0, 1, 2]);

        let down_left: Vec<_> = diagonals
            .iter()
            .filter(|d| d.family == DiagonalFamily::DownLeft)
            .map(|d| d.key)
            .collect();
        assert_eq!(down_left, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_down_right_cells() {
        let diagonals = DiagonalFamily::DownRight.diagonals(4);
        let main = diagonals.iter().find(|d| d.key == 0).unwrap();
        assert_eq!(main.cells, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);

        let below = diagonals.iter().find(|d| d.key == 2).unwrap();
        assert_eq!(below.cells, vec![(2, 0), (3, 1)]);

        let above = diagonals.iter().find(|d| d.key == -3).unwrap();
        assert_eq!(above.cells, vec![(0, 3)]);
    }

    #[test]
    fn test_down_left_cells() {
        let diagonals = DiagonalFamily::DownLeft.diagonals(4);
        let anti = diagonals.iter().find(|d| d.key == 3).unwrap();
        assert_eq!(anti.cells, vec![(0, 3), (1, 2), (2, 1), (3, 0)]);

        let upper = diagonals.iter().find(|d| d.key == 1).unwrap();
        assert_eq!(upper.cells, vec![(0, 1), (1, 0)]);

        let lower = diagonals.iter().find(|d| d.key == 5).unwrap();
        assert_eq!(lower.cells, vec![(2, 3), (3, 2)]);

        let corner = diagonals.iter().find(|d| d.key == 6).unwrap();
        assert_eq!(corner.cells, vec![(3, 3)]);
    }

    #[test]
    fn test_lengths_match_cells() {
        for side in 1..9 {
            for diagonal in all_diagonals(side) {
                let expected = match diagonal.family {
                    DiagonalFamily::DownRight => side - diagonal.key.unsigned_abs(),
                    DiagonalFamily::DownLeft => {
                        let s = diagonal.key as usize;
                        if s < side { s + 1 } else { 2 * side - 1 - s }
                    }
                };
                assert_eq!(diagonal.len(), expected);
            }
        }
    }

    #[test]
    fn test_each_family_partitions_the_grid() {
        for side in 1..10 {
            for family in DiagonalFamily::iter() {
                let mut coverage = vec![0u32; side * side];
                for diagonal in family.diagonals(side) {
                    for &(r, c) in &diagonal.cells {
                        match family {
                            DiagonalFamily::DownRight => {
                                assert_eq!(r as isize - c as isize, diagonal.key)
                            }
                            DiagonalFamily::DownLeft => {
                                assert_eq!((r + c) as isize, diagonal.key)
                            }
                        }
                        coverage[r * side + c] += 1;
                    }
                }
                assert!(coverage.iter().all(|&count| count == 1), "side {side} {family}");
            }
        }
    }

    #[test]
    fn test_filter_never_drops_valid_lengths() {
        for side in 1..10 {
            for min_run in 0..=side + 1 {
                let filtered = enumerate_diagonals(side, min_run);
                let expected: Vec<_> = all_diagonals(side)
                    .into_iter()
                    .filter(|d| d.len() >= min_run)
                    .collect();
                assert_eq!(filtered, expected);
            }
        }
    }

    #[test]
    fn test_min_run_longer_than_side() {
        assert!(enumerate_diagonals(3, 4).is_empty());
        assert!(all_diagonals(0).is_empty());
    }
}
