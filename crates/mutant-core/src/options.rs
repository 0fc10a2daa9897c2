//! Detector options and configuration (mutantrc format)
//!
//! Options are written as `OPTIONS=` lines in a mutantrc file, each line
//! holding comma-separated `name`, `!name`, `name:value` or `name=value`
//! entries. The same entries are accepted from the `MUTANTOPTIONS`
//! environment variable and from the command line.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detector::{DEFAULT_MIN_RUN, Detector};
use crate::healer::{DEFAULT_MAX_HEAL_ATTEMPTS, HealPolicy};

/// Default grid side
pub const DEFAULT_SIDE: usize = 6;

/// Healing strategy as written in option files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealMode {
    Once,
    UntilClean,
}

/// User-configurable options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutantOptions {
    /// Side of generated grids
    pub side: usize,
    /// Run length that makes a grid mutant
    pub min_run: usize,
    /// Seed for grid regeneration; random when unset
    pub seed: Option<u64>,
    pub heal: HealMode,
    pub max_heal_attempts: u32,
    /// List every qualifying line after a detection
    pub show_findings: bool,
}

impl Default for MutantOptions {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            min_run: DEFAULT_MIN_RUN,
            seed: None,
            heal: HealMode::UntilClean,
            max_heal_attempts: DEFAULT_MAX_HEAL_ATTEMPTS,
            show_findings: false,
        }
    }
}

/// Options parsing error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}

impl MutantOptions {
    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                options.apply(opts)?;
            }
        }

        Ok(options)
    }

    /// Apply a comma-separated option list on top of the current values
    pub fn apply(&mut self, opts: &str) -> Result<(), OptionsError> {
        for opt in opts.split(',') {
            let opt = opt.trim();
            if !opt.is_empty() {
                self.parse_option(opt)?;
            }
        }
        Ok(())
    }

    /// Parse a single option
    pub fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        // Handle key=value options
        if let Some((key, value)) = opt.split_once(':') {
            return self.set_option(key.trim(), Some(value.trim()));
        }
        if let Some((key, value)) = opt.split_once('=') {
            return self.set_option(key.trim(), Some(value.trim()));
        }

        // Handle negation
        let (negated, opt_name) = if let Some(name) = opt.strip_prefix('!') {
            (true, name)
        } else if let Some(name) = opt.strip_prefix("no").filter(|name| is_negatable(name)) {
            (true, name)
        } else {
            (false, opt)
        };

        self.set_bool_option(opt_name, !negated)
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "show_findings" | "findings" => self.show_findings = value,
            "seed" if !value => self.seed = None,
            "seed" | "side" | "min_run" | "heal" | "max_heal_attempts" => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionsError> {
        let value = value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| OptionsError::MissingValue(name.to_string()))?;
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "show_findings" | "findings" => {
                self.show_findings = match value.to_lowercase().as_str() {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    _ => return Err(invalid()),
                };
            }
            "side" | "dimension" => {
                self.side = value.parse::<usize>().ok().filter(|&n| n > 0).ok_or_else(invalid)?;
            }
            "min_run" | "run" => {
                self.min_run = value.parse::<usize>().ok().filter(|&n| n > 0).ok_or_else(invalid)?;
            }
            "seed" => self.seed = Some(value.parse::<u64>().map_err(|_| invalid())?),
            "heal" => {
                self.heal = match value.to_lowercase().as_str() {
                    "once" | "o" => HealMode::Once,
                    "until_clean" | "clean" | "c" => HealMode::UntilClean,
                    _ => return Err(invalid()),
                };
            }
            "max_heal_attempts" | "attempts" => {
                self.max_heal_attempts =
                    value.parse::<u32>().ok().filter(|&n| n > 0).ok_or_else(invalid)?;
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Convert options to config file format
    pub fn to_config_string(&self) -> String {
        let mut lines = Vec::new();
        lines.push("# mutant configuration file".to_string());
        lines.push(String::new());

        lines.push(format!("OPTIONS=side:{},min_run:{}", self.side, self.min_run));
        if let Some(seed) = self.seed {
            lines.push(format!("OPTIONS=seed:{}", seed));
        }
        let heal = match self.heal {
            HealMode::Once => "once",
            HealMode::UntilClean => "until_clean",
        };
        lines.push(format!(
            "OPTIONS=heal:{},max_heal_attempts:{}",
            heal, self.max_heal_attempts
        ));
        lines.push(format!(
            "OPTIONS={}",
            if self.show_findings {
                "show_findings"
            } else {
                "!show_findings"
            }
        ));

        lines.join("\n")
    }

    pub fn detector(&self) -> Detector {
        Detector::new(self.min_run)
    }

    pub fn heal_policy(&self) -> HealPolicy {
        match self.heal {
            HealMode::Once => HealPolicy::Once,
            HealMode::UntilClean => HealPolicy::UntilClean {
                max_attempts: self.max_heal_attempts,
            },
        }
    }
}

/// Boolean options that also accept the `no` prefix
fn is_negatable(name: &str) -> bool {
    matches!(name, "show_findings" | "findings" | "seed")
}
