//! Parsing of user-supplied values

use strum::{Display, EnumString};

use mutant_core::{Axis, Grid, Nucleotide, Orientation};

use crate::error::CliError;

/// Mutation source picked in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MutationKind {
    /// Horizontal or vertical runs
    #[strum(to_string = "radiation", serialize = "r")]
    Radiation,
    /// Down-right diagonal runs
    #[strum(to_string = "virus", serialize = "v")]
    Virus,
}

impl MutationKind {
    /// Orientation of the run this source writes
    pub fn orientation(self, axis: Option<Axis>) -> Result<Orientation, CliError> {
        match self {
            MutationKind::Radiation => axis.map(Orientation::from).ok_or(CliError::MissingAxis),
            MutationKind::Virus => Ok(Orientation::Diagonal),
        }
    }
}

pub fn parse_kind(s: &str) -> Result<MutationKind, CliError> {
    s.trim()
        .parse()
        .map_err(|_| CliError::UnknownKind(s.trim().to_string()))
}

pub fn parse_base(s: &str) -> Result<Nucleotide, CliError> {
    let mut chars = s.trim().chars();
    let base = match (chars.next(), chars.next()) {
        (Some(c), None) => Nucleotide::from_char(c),
        _ => None,
    };
    base.ok_or_else(|| CliError::InvalidBase(s.trim().to_string()))
}

pub fn parse_axis(s: &str) -> Result<Axis, CliError> {
    match Orientation::from_code(s) {
        Some(Orientation::Horizontal) => Ok(Axis::Horizontal),
        Some(Orientation::Vertical) => Ok(Axis::Vertical),
        _ => Err(CliError::InvalidAxis(s.trim().to_string())),
    }
}

/// Parse `AGATCA,GATTCA,...` or a JSON array of row strings
pub fn parse_grid(text: &str) -> Result<Grid, CliError> {
    let text = text.trim();
    let rows: Vec<String> = if text.starts_with('[') {
        serde_json::from_str(text)?
    } else {
        text.split(',').map(|row| row.trim().to_string()).collect()
    };
    Ok(Grid::parse(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("R").unwrap(), MutationKind::Radiation);
        assert_eq!(parse_kind("virus").unwrap(), MutationKind::Virus);
        assert!(matches!(parse_kind("x"), Err(CliError::UnknownKind(_))));
    }

    #[test]
    fn test_kind_orientation() {
        assert_eq!(
            MutationKind::Radiation.orientation(Some(Axis::Vertical)).unwrap(),
            Orientation::Vertical
        );
        assert!(matches!(
            MutationKind::Radiation.orientation(None),
            Err(CliError::MissingAxis)
        ));
        assert_eq!(
            MutationKind::Virus.orientation(None).unwrap(),
            Orientation::Diagonal
        );
    }

    #[test]
    fn test_parse_base() {
        assert_eq!(parse_base(" g ").unwrap(), Nucleotide::G);
        assert!(matches!(parse_base("GA"), Err(CliError::InvalidBase(_))));
        assert!(matches!(parse_base(""), Err(CliError::InvalidBase(_))));
    }

    #[test]
    fn test_parse_axis() {
        assert_eq!(parse_axis("h").unwrap(), Axis::Horizontal);
        assert!(matches!(parse_axis("D"), Err(CliError::InvalidAxis(_))));
    }

    #[test]
    fn test_parse_grid_formats() {
        let csv = parse_grid("ACGT, CGTA,GTAC,TACG").unwrap();
        let json = parse_grid(r#"["ACGT","CGTA","GTAC","TACG"]"#).unwrap();
        assert_eq!(csv, json);
        assert!(matches!(parse_grid("[\"AC\""), Err(CliError::Json(_))));
        assert!(matches!(parse_grid("ACG,AC,ACG"), Err(CliError::Grid(_))));
    }
}
