//! Lesion injection
//!
//! Mutation sources write a run of identical bases into a grid. Radiation
//! writes along a row or a column, a virus writes down-right along a
//! diagonal. Every cell of the run is bounds-checked before anything is
//! written, so a rejected injection leaves the grid untouched.

use core::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::errors::MutationError;
use crate::grid::Grid;
use crate::nucleotide::Nucleotide;

/// Starting cell of an injected run
///
/// Signed so that negative user input can be represented and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    pub row: i64,
    pub col: i64,
}

impl Anchor {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Axis for radiation lesions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Axis {
    #[strum(serialize = "horizontal")]
    Horizontal,
    #[strum(serialize = "vertical")]
    Vertical,
}

/// Direction an injected run is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Orientation {
    #[strum(serialize = "horizontal")]
    Horizontal,
    #[strum(serialize = "vertical")]
    Vertical,
    #[strum(serialize = "diagonal")]
    Diagonal,
}

impl Orientation {
    /// Parse `H`, `V`, `D` or the full name, case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "h" | "horizontal" => Some(Orientation::Horizontal),
            "v" | "vertical" => Some(Orientation::Vertical),
            "d" | "diagonal" => Some(Orientation::Diagonal),
            _ => None,
        }
    }

    /// (row, col) step between consecutive cells of a run
    const fn step(self) -> (i64, i64) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
        }
    }

    /// Cells a run of `min_run` starting at `anchor` would cover
    fn run_cells(
        self,
        side: usize,
        anchor: Anchor,
        min_run: usize,
    ) -> Result<Vec<(usize, usize)>, MutationError> {
        if min_run == 0 {
            return Err(MutationError::EmptyRun);
        }

        let out_of_bounds = || MutationError::OutOfBounds {
            anchor,
            orientation: self,
            min_run,
            side,
        };
        let side_i = i64::try_from(side).map_err(|_| out_of_bounds())?;
        let span = i64::try_from(min_run - 1).map_err(|_| out_of_bounds())?;
        let (dr, dc) = self.step();

        let inside = |v: i64| (0..side_i).contains(&v);
        let end_row = anchor.row.checked_add(dr * span).ok_or_else(out_of_bounds)?;
        let end_col = anchor.col.checked_add(dc * span).ok_or_else(out_of_bounds)?;
        if !inside(anchor.row) || !inside(anchor.col) || !inside(end_row) || !inside(end_col) {
            return Err(out_of_bounds());
        }

        Ok((0..=span)
            .map(|i| ((anchor.row + dr * i) as usize, (anchor.col + dc * i) as usize))
            .collect())
    }
}

impl From<Axis> for Orientation {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Orientation::Horizontal,
            Axis::Vertical => Orientation::Vertical,
        }
    }
}

/// Something that writes a run of one base into a grid
pub trait Mutator<S: Copy> {
    /// Base written by this mutator
    fn base(&self) -> S;

    /// Direction of the written run
    fn orientation(&self) -> Orientation;

    /// Overwrite `min_run` cells starting at `anchor`, in place
    ///
    /// On error the grid is left exactly as it was.
    fn inject(&self, grid: &mut Grid<S>, anchor: Anchor, min_run: usize) -> Result<(), MutationError> {
        let cells = self.orientation().run_cells(grid.side(), anchor, min_run)?;
        let base = self.base();
        for (row, col) in cells {
            grid.set(row, col, base);
        }
        tracing::debug!(
            orientation = %self.orientation(),
            %anchor,
            min_run,
            "lesion injected"
        );
        Ok(())
    }

    /// Copy of `grid` with the run injected
    fn injected(&self, grid: &Grid<S>, anchor: Anchor, min_run: usize) -> Result<Grid<S>, MutationError> {
        let mut mutated = grid.clone();
        self.inject(&mut mutated, anchor, min_run)?;
        Ok(mutated)
    }
}

/// Axis-aligned mutation source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radiation<S = Nucleotide> {
    pub base: S,
    pub axis: Axis,
}

impl<S: Copy> Radiation<S> {
    pub fn new(base: S, axis: Axis) -> Self {
        Self { base, axis }
    }
}

impl<S: Copy> Mutator<S> for Radiation<S> {
    fn base(&self) -> S {
        self.base
    }

    fn orientation(&self) -> Orientation {
        self.axis.into()
    }
}

/// Diagonal mutation source, writing down and to the right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Virus<S = Nucleotide> {
    pub base: S,
}

impl<S: Copy> Virus<S> {
    pub fn new(base: S) -> Self {
        Self { base }
    }
}

impl<S: Copy> Mutator<S> for Virus<S> {
    fn base(&self) -> S {
        self.base
    }

    fn orientation(&self) -> Orientation {
        Orientation::Diagonal
    }
}

/// A mutation source chosen by orientation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lesion<S = Nucleotide> {
    Radiation(Radiation<S>),
    Virus(Virus<S>),
}

impl<S: Copy> Lesion<S> {
    pub fn new(base: S, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Lesion::Radiation(Radiation::new(base, Axis::Horizontal)),
            Orientation::Vertical => Lesion::Radiation(Radiation::new(base, Axis::Vertical)),
            Orientation::Diagonal => Lesion::Virus(Virus::new(base)),
        }
    }
}

impl<S: Copy> Mutator<S> for Lesion<S> {
    fn base(&self) -> S {
        match self {
            Lesion::Radiation(r) => r.base(),
            Lesion::Virus(v) => v.base(),
        }
    }

    fn orientation(&self) -> Orientation {
        match self {
            Lesion::Radiation(r) => r.orientation(),
            Lesion::Virus(v) => v.orientation(),
        }
    }
}

/// Inject a run of `symbol` and return the mutated copy
///
/// The input grid is never modified; on error the caller still holds it.
pub fn mutate<S: Copy>(
    grid: &Grid<S>,
    symbol: S,
    anchor: Anchor,
    orientation: Orientation,
    min_run: usize,
) -> Result<Grid<S>, MutationError> {
    Lesion::new(symbol, orientation).injected(grid, anchor, min_run)
}
