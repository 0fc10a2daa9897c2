//! Interactive session state
//!
//! A `Session` owns the current grid and applies the menu commands to it:
//! detect, mutate, heal. It returns what happened as a [`Report`] and leaves
//! all printing to the front end.

use core::fmt;

use crate::detector::{Detector, Finding};
use crate::errors::{GridError, MutationError};
use crate::grid::Grid;
use crate::healer::{HealStatus, Healer};
use crate::mutator::{Anchor, Orientation, mutate};
use crate::nucleotide::Nucleotide;
use crate::options::MutantOptions;
use crate::rng::GenomeRng;

/// Starting DNA when no grid is given; it holds no mutation
pub const SAMPLE_DNA: [&str; 6] = ["AGATCA", "GATTCA", "CAACAT", "GAGCTA", "ATTGCG", "CTGTTC"];

/// A menu command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Detect,
    Mutate {
        base: Nucleotide,
        anchor: Anchor,
        orientation: Orientation,
    },
    Heal,
    Show,
    Quit,
}

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Detection {
        mutant: bool,
        findings: Vec<Finding<Nucleotide>>,
    },
    Mutated {
        orientation: Orientation,
        anchor: Anchor,
    },
    MutationRejected(MutationError),
    Healed(HealStatus),
    Grid,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Detection { mutant: true, .. } => write!(f, "The DNA contains mutations."),
            Report::Detection { mutant: false, .. } => {
                write!(f, "The DNA does not contain mutations.")
            }
            Report::Mutated {
                orientation,
                anchor,
            } => write!(f, "Applied a {} mutation at {}.", orientation, anchor),
            Report::MutationRejected(err) => write!(f, "Error: {}", err),
            Report::Healed(status) => write!(f, "{}", status),
            Report::Grid => write!(f, "Current DNA:"),
        }
    }
}

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(Report),
    Quit,
}

/// Current grid plus the detector and healer working on it
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    options: MutantOptions,
    detector: Detector,
    healer: Healer<GenomeRng>,
}

impl Session {
    /// Start from an explicit grid
    pub fn new(grid: Grid, options: MutantOptions) -> Self {
        let rng = options.seed.map(GenomeRng::new).unwrap_or_default();
        Self::build(grid, options, rng)
    }

    /// Start from the sample DNA, or from a random grid when the configured
    /// side differs from the sample's
    pub fn with_options(options: MutantOptions) -> Result<Self, GridError> {
        let mut rng = options.seed.map(GenomeRng::new).unwrap_or_default();
        let grid = if options.side == SAMPLE_DNA.len() {
            Grid::parse(&SAMPLE_DNA)?
        } else {
            Grid::random(options.side, &mut rng)?
        };
        Ok(Self::build(grid, options, rng))
    }

    fn build(grid: Grid, options: MutantOptions, rng: GenomeRng) -> Self {
        let detector = options.detector();
        let healer = Healer::new(detector, rng, options.heal_policy());
        Self {
            grid,
            options,
            detector,
            healer,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn options(&self) -> &MutantOptions {
        &self.options
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        let report = match command {
            Command::Quit => return Outcome::Quit,
            Command::Show => Report::Grid,
            Command::Detect => self.detect(),
            Command::Mutate {
                base,
                anchor,
                orientation,
            } => self.mutate(base, anchor, orientation),
            Command::Heal => {
                let outcome = self.healer.heal(self.grid.clone());
                self.grid = outcome.grid;
                Report::Healed(outcome.status)
            }
        };
        Outcome::Continue(report)
    }

    fn detect(&self) -> Report {
        let findings = if self.options.show_findings {
            self.detector.scan(&self.grid)
        } else {
            self.detector.find_mutation(&self.grid).into_iter().collect()
        };
        Report::Detection {
            mutant: !findings.is_empty(),
            findings,
        }
    }

    fn mutate(&mut self, base: Nucleotide, anchor: Anchor, orientation: Orientation) -> Report {
        match mutate(&self.grid, base, anchor, orientation, self.detector.min_run()) {
            Ok(grid) => {
                self.grid = grid;
                Report::Mutated {
                    orientation,
                    anchor,
                }
            }
            Err(err) => {
                tracing::debug!(%err, "mutation rejected");
                Report::MutationRejected(err)
            }
        }
    }
}
