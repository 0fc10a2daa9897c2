//! Square symbol grid
//!
//! A `Grid` holds N rows of N symbols, stored row-major. The side length is
//! fixed when the grid is built and every constructor rejects ragged or
//! non-square input, so the scanners never see a partial grid.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::GridError;
use crate::nucleotide::Nucleotide;
use crate::rng::SymbolSource;

/// Square matrix of symbols
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<S = Nucleotide> {
    side: usize,
    cells: Vec<S>,
}

impl<S: Copy> Grid<S> {
    /// Build a grid from its rows, taking N from the number of rows
    pub fn from_rows(rows: Vec<Vec<S>>) -> Result<Self, GridError> {
        let side = rows.len();
        Self::with_side(side, rows)
    }

    /// Build a grid that must have exactly `side` rows of `side` symbols
    pub fn with_side(side: usize, rows: Vec<Vec<S>>) -> Result<Self, GridError> {
        let area = Self::area(side)?;
        if rows.len() != side {
            return Err(GridError::dimensions(format!(
                "expected {} rows, found {}",
                side,
                rows.len()
            )));
        }

        let mut cells = Vec::with_capacity(area);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != side {
                return Err(GridError::dimensions(format!(
                    "row {} has {} symbols, expected {}",
                    r,
                    row.len(),
                    side
                )));
            }
            cells.extend(row);
        }

        Ok(Self { side, cells })
    }

    /// A grid with every cell set to `symbol`
    pub fn filled(side: usize, symbol: S) -> Result<Self, GridError> {
        let area = Self::area(side)?;
        Ok(Self {
            side,
            cells: vec![symbol; area],
        })
    }

    /// A grid with every cell drawn from `source`
    pub fn random<R: SymbolSource<S>>(side: usize, source: &mut R) -> Result<Self, GridError> {
        let area = Self::area(side)?;
        Ok(Self::generate(side, area, source))
    }

    /// A fresh random grid with the same side as this one
    pub fn regenerate<R: SymbolSource<S>>(&self, source: &mut R) -> Self {
        Self::generate(self.side, self.cells.len(), source)
    }

    fn generate<R: SymbolSource<S>>(side: usize, area: usize, source: &mut R) -> Self {
        let cells = (0..area).map(|_| source.sample()).collect();
        Self { side, cells }
    }

    /// Number of cells of a `side` x `side` grid, if such a grid can exist
    fn area(side: usize) -> Result<usize, GridError> {
        if side == 0 {
            return Err(GridError::dimensions("grid side must be at least 1"));
        }
        let too_large = || GridError::dimensions(format!("grid side {} is too large", side));
        let area = side.checked_mul(side).ok_or_else(too_large)?;
        let bytes = area
            .checked_mul(size_of::<S>())
            .ok_or_else(too_large)?;
        if bytes > isize::MAX as usize {
            return Err(too_large());
        }
        Ok(area)
    }

    /// Side length N
    pub fn side(&self) -> usize {
        self.side
    }

    /// Symbol at (row, col), if inside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<S> {
        if row < self.side && col < self.side {
            Some(self.cells[row * self.side + col])
        } else {
            None
        }
    }

    /// Overwrite one cell. Callers check bounds first.
    pub(crate) fn set(&mut self, row: usize, col: usize, symbol: S) {
        debug_assert!(row < self.side && col < self.side);
        self.cells[row * self.side + col] = symbol;
    }

    pub fn row(&self, row: usize) -> Option<&[S]> {
        if row < self.side {
            let start = row * self.side;
            Some(&self.cells[start..start + self.side])
        } else {
            None
        }
    }

    pub fn column(&self, col: usize) -> Option<Vec<S>> {
        if col < self.side {
            Some((0..self.side).map(|r| self.cells[r * self.side + col]).collect())
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[S]> {
        self.cells.chunks(self.side)
    }

    /// Column-major view: the transposed rows
    pub fn columns(&self) -> impl Iterator<Item = Vec<S>> + '_ {
        (0..self.side).map(move |c| (0..self.side).map(|r| self.cells[r * self.side + c]).collect())
    }

    /// Gather the symbols at the given coordinates, in order
    ///
    /// Coordinates must lie inside the grid.
    pub(crate) fn cells_at(&self, coords: &[(usize, usize)]) -> Vec<S> {
        coords
            .iter()
            .map(|&(r, c)| self.cells[r * self.side + c])
            .collect()
    }
}

impl Grid<Nucleotide> {
    /// Parse text rows such as `"AGATCA"` into a nucleotide grid
    pub fn parse<R: AsRef<str>>(rows: &[R]) -> Result<Self, GridError> {
        let parsed = rows
            .iter()
            .enumerate()
            .map(|(r, line)| {
                line.as_ref()
                    .trim()
                    .chars()
                    .enumerate()
                    .map(|(c, ch)| {
                        Nucleotide::from_char(ch).ok_or(GridError::InvalidSymbol {
                            symbol: ch,
                            row: r,
                            col: c,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(parsed)
    }

    /// Text rows, one string per row
    pub fn to_strings(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|n| n.as_char()).collect())
            .collect()
    }
}

impl<S: fmt::Display + Copy> fmt::Display for Grid<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for symbol in row {
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

// Serialized as a list of rows; deserialization re-validates the shape
impl<S: Serialize + Copy> Serialize for Grid<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let rows: Vec<&[S]> = self.rows().collect();
        rows.serialize(serializer)
    }
}

impl<'de, S: Deserialize<'de> + Copy> Deserialize<'de> for Grid<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<S>>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
