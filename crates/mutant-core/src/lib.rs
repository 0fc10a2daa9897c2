//! mutant-core: Mutation detection engine for square DNA grids
//!
//! A grid is "mutant" when some row, column or diagonal holds a run of
//! `min_run` (4 by default) identical nucleotides. This crate contains the
//! grid model, the run scanner, the diagonal enumeration, the detector, the
//! lesion injectors and the healer. It performs no terminal I/O.

pub mod detector;
pub mod diagonal;
pub mod grid;
pub mod healer;
pub mod mutator;
pub mod options;
pub mod scanner;
pub mod session;

mod errors;
mod nucleotide;
mod rng;

pub use detector::{Detector, Finding, Line, DEFAULT_MIN_RUN, is_mutant};
pub use diagonal::{Diagonal, DiagonalFamily, all_diagonals, enumerate_diagonals};
pub use errors::{GridError, MutationError};
pub use grid::Grid;
pub use healer::{HealOutcome, HealPolicy, HealStatus, Healer};
pub use mutator::{Anchor, Axis, Lesion, Mutator, Orientation, Radiation, Virus, mutate};
pub use nucleotide::Nucleotide;
pub use options::{DEFAULT_SIDE, HealMode, MutantOptions, OptionsError};
pub use rng::{GenomeRng, SymbolSource};
pub use scanner::{Run, find_run, has_repeated_run, longest_run};
pub use session::{Command, Outcome, Report, SAMPLE_DNA, Session};
