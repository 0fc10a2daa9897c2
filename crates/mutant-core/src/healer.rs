//! Healing: replace a mutant grid with a freshly generated one
//!
//! The random source is injected at construction, so a healer built from a
//! fixed seed always produces the same replacement grids.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::detector::Detector;
use crate::grid::Grid;
use crate::rng::SymbolSource;

/// Default bound on regeneration attempts for [`HealPolicy::UntilClean`]
pub const DEFAULT_MAX_HEAL_ATTEMPTS: u32 = 100;

/// How hard the healer tries to produce a normal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealPolicy {
    /// Regenerate once and return the result unchecked
    Once,
    /// Regenerate until the detector reports a normal grid, at most
    /// `max_attempts` times
    UntilClean { max_attempts: u32 },
}

impl Default for HealPolicy {
    fn default() -> Self {
        HealPolicy::UntilClean {
            max_attempts: DEFAULT_MAX_HEAL_ATTEMPTS,
        }
    }
}

/// Result of a healing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealStatus {
    /// No mutation found; the grid was returned unchanged
    Healthy,
    /// A mutation was found and the grid was regenerated
    Healed { attempts: u32 },
    /// Every regenerated grid was itself mutant; the last one is returned
    StillMutant { attempts: u32 },
}

impl fmt::Display for HealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealStatus::Healthy => write!(f, "No mutations detected."),
            HealStatus::Healed { attempts: 1 } => {
                write!(f, "Mutations detected. Generated new DNA.")
            }
            HealStatus::Healed { attempts } => write!(
                f,
                "Mutations detected. Generated new DNA after {} attempts.",
                attempts
            ),
            HealStatus::StillMutant { attempts } => write!(
                f,
                "Mutations detected. New DNA is still mutant after {} attempts.",
                attempts
            ),
        }
    }
}

/// Grid returned by the healer together with what happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealOutcome<S> {
    pub grid: Grid<S>,
    pub status: HealStatus,
}

impl<S> HealOutcome<S> {
    /// True if the input grid was discarded
    pub fn replaced(&self) -> bool {
        !matches!(self.status, HealStatus::Healthy)
    }
}

/// Regenerates mutant grids from an injected random source
#[derive(Debug, Clone)]
pub struct Healer<R> {
    detector: Detector,
    source: R,
    policy: HealPolicy,
}

impl<R> Healer<R> {
    pub fn new(detector: Detector, source: R, policy: HealPolicy) -> Self {
        Self {
            detector,
            source,
            policy,
        }
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    pub fn policy(&self) -> HealPolicy {
        self.policy
    }

    /// Return `grid` unchanged if it is normal, otherwise a regenerated grid
    /// of the same side
    pub fn heal<S>(&mut self, grid: Grid<S>) -> HealOutcome<S>
    where
        S: Copy + Eq,
        R: SymbolSource<S>,
    {
        if !self.detector.is_mutant(&grid) {
            tracing::info!("no mutation found, grid kept");
            return HealOutcome {
                grid,
                status: HealStatus::Healthy,
            };
        }

        let max_attempts = match self.policy {
            HealPolicy::Once => {
                let fresh = grid.regenerate(&mut self.source);
                tracing::info!("mutation found, grid regenerated");
                return HealOutcome {
                    grid: fresh,
                    status: HealStatus::Healed { attempts: 1 },
                };
            }
            HealPolicy::UntilClean { max_attempts } => max_attempts.max(1),
        };

        let mut fresh = grid.regenerate(&mut self.source);
        let mut attempts = 1;
        while self.detector.is_mutant(&fresh) {
            if attempts == max_attempts {
                tracing::warn!(attempts, "regenerated grid is still mutant, giving up");
                return HealOutcome {
                    grid: fresh,
                    status: HealStatus::StillMutant { attempts },
                };
            }
            fresh = grid.regenerate(&mut self.source);
            attempts += 1;
        }

        tracing::info!(attempts, "mutation found, grid regenerated");
        HealOutcome {
            grid: fresh,
            status: HealStatus::Healed { attempts },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nucleotide::Nucleotide;
    use crate::rng::GenomeRng;

    const SAMPLE: [&str; 6] = ["AGATCA", "GATTCA", "CAACAT", "GAGCTA", "ATTGCG", "CTGTTC"];

    /// Always yields the same base
    struct Constant(Nucleotide);

    impl SymbolSource<Nucleotide> for Constant {
        fn sample(&mut self) -> Nucleotide {
            self.0
        }
    }

    #[test]
    fn test_healthy_grid_is_kept() {
        let grid = Grid::parse(&SAMPLE).unwrap();
        let mut healer = Healer::new(Detector::default(), GenomeRng::new(1), HealPolicy::default());
        let outcome = healer.heal(grid.clone());
        assert_eq!(outcome.status, HealStatus::Healthy);
        assert!(!outcome.replaced());
        assert_eq!(outcome.grid, grid);
    }

    #[test]
    fn test_mutant_grid_is_replaced() {
        let grid = Grid::filled(6, Nucleotide::A).unwrap();
        let mut healer = Healer::new(Detector::default(), GenomeRng::new(1), HealPolicy::default());
        let outcome = healer.heal(grid.clone());
        assert!(outcome.replaced());
        assert!(matches!(outcome.status, HealStatus::Healed { .. }));
        assert_eq!(outcome.grid.side(), 6);
        assert!(!healer.detector().is_mutant(&outcome.grid));
    }

    #[test]
    fn test_once_does_not_recheck() {
        let grid = Grid::filled(6, Nucleotide::A).unwrap();
        let mut healer = Healer::new(Detector::default(), Constant(Nucleotide::G), HealPolicy::Once);
        let outcome = healer.heal(grid);
        assert_eq!(outcome.status, HealStatus::Healed { attempts: 1 });
        assert_eq!(outcome.grid, Grid::filled(6, Nucleotide::G).unwrap());
    }

    #[test]
    fn test_until_clean_gives_up() {
        let grid = Grid::filled(5, Nucleotide::A).unwrap();
        let policy = HealPolicy::UntilClean { max_attempts: 3 };
        let mut healer = Healer::new(Detector::default(), Constant(Nucleotide::T), policy);
        let outcome = healer.heal(grid);
        assert_eq!(outcome.status, HealStatus::StillMutant { attempts: 3 });
        assert_eq!(outcome.grid, Grid::filled(5, Nucleotide::T).unwrap());
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let grid = Grid::filled(6, Nucleotide::C).unwrap();
        let mut a = Healer::new(Detector::default(), GenomeRng::new(99), HealPolicy::default());
        let mut b = Healer::new(Detector::default(), GenomeRng::new(99), HealPolicy::default());
        assert_eq!(a.heal(grid.clone()), b.heal(grid));
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(HealStatus::Healthy.to_string(), "No mutations detected.");
        assert_eq!(
            HealStatus::Healed { attempts: 1 }.to_string(),
            "Mutations detected. Generated new DNA."
        );
        assert!(
            HealStatus::StillMutant { attempts: 4 }
                .to_string()
                .contains("4 attempts")
        );
    }
}
