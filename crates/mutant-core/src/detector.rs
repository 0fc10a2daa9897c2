//! Mutant detection
//!
//! Scans every row, every column and every diagonal long enough to hold a
//! run. The boolean answer does not depend on scan order; `find_mutation`
//! stops at the first hit while `scan` visits every line.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::diagonal::{DiagonalFamily, enumerate_diagonals};
use crate::grid::Grid;
use crate::scanner::find_run;

/// Run length that makes a grid mutant
pub const DEFAULT_MIN_RUN: usize = 4;

/// A line of the grid that was scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Row(usize),
    Column(usize),
    Diagonal { family: DiagonalFamily, key: isize },
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {}", r),
            Line::Column(c) => write!(f, "column {}", c),
            Line::Diagonal { family, key } => write!(f, "{} diagonal {}", family, key),
        }
    }
}

/// Where a qualifying run was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding<S> {
    pub line: Line,
    /// (row, col) of the first cell of the run
    pub start: (usize, usize),
    /// Length of the maximal run
    pub len: usize,
    pub symbol: S,
}

impl<S: fmt::Display> fmt::Display for Finding<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{} in {} starting at ({}, {})",
            self.symbol, self.len, self.line, self.start.0, self.start.1
        )
    }
}

/// Mutant detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detector {
    min_run: usize,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_RUN)
    }
}

impl Detector {
    pub fn new(min_run: usize) -> Self {
        Self { min_run }
    }

    pub fn min_run(&self) -> usize {
        self.min_run
    }

    /// True iff some row, column or diagonal holds `min_run` identical symbols
    pub fn is_mutant<S: Copy + Eq>(&self, grid: &Grid<S>) -> bool {
        self.find_mutation(grid).is_some()
    }

    /// First qualifying run, scanning rows, then columns, then diagonals
    pub fn find_mutation<S: Copy + Eq>(&self, grid: &Grid<S>) -> Option<Finding<S>> {
        let finding = self
            .lines(grid.side())
            .find_map(|(line, cells)| self.check_line(grid, line, &cells));
        if let Some(ref f) = finding {
            tracing::debug!(line = %f.line, len = f.len, "mutation found");
        }
        finding
    }

    /// Every line holding a qualifying run, without short-circuiting
    pub fn scan<S: Copy + Eq>(&self, grid: &Grid<S>) -> Vec<Finding<S>> {
        self.lines(grid.side())
            .filter_map(|(line, cells)| self.check_line(grid, line, &cells))
            .collect()
    }

    fn check_line<S: Copy + Eq>(
        &self,
        grid: &Grid<S>,
        line: Line,
        cells: &[(usize, usize)],
    ) -> Option<Finding<S>> {
        let sequence = grid.cells_at(cells);
        let run = find_run(&sequence, self.min_run)?;
        Some(Finding {
            line,
            start: cells[run.start],
            len: run.len,
            symbol: run.symbol,
        })
    }

    /// Every line with at least `min_run` cells, as (line, cells)
    fn lines(&self, side: usize) -> impl Iterator<Item = (Line, Vec<(usize, usize)>)> {
        // A line of a square grid never exceeds `side`
        let long_enough = self.min_run <= side;
        let axis_count = if long_enough { side } else { 0 };

        let rows = (0..axis_count).map(move |r| {
            let cells: Vec<_> = (0..side).map(|c| (r, c)).collect();
            (Line::Row(r), cells)
        });
        let columns = (0..axis_count).map(move |c| {
            let cells: Vec<_> = (0..side).map(|r| (r, c)).collect();
            (Line::Column(c), cells)
        });
        let diagonals = enumerate_diagonals(side, self.min_run).into_iter().map(|d| {
            (
                Line::Diagonal {
                    family: d.family,
                    key: d.key,
                },
                d.cells,
            )
        });

        rows.chain(columns).chain(diagonals)
    }
}

/// Detect with the default run length of 4
pub fn is_mutant<S: Copy + Eq>(grid: &Grid<S>) -> bool {
    Detector::default().is_mutant(grid)
}
