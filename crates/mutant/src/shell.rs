//! Interactive numbered menu
//!
//! 1 detects, 2 mutates, 3 heals, 4 exits. Bad answers print a message and
//! return to the menu; end of input exits.

use std::io::{BufRead, Write};

use mutant_core::{Anchor, Command, Outcome, Report, Session};

use crate::error::CliError;
use crate::input::{MutationKind, parse_axis, parse_base, parse_kind};

const MENU: &str = "Select an option:\n1: Detect mutations\n2: Mutate DNA\n3: Heal DNA\n4: Exit";

pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(&mut self, session: &mut Session) -> Result<(), CliError> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Option: ")? else {
                break;
            };

            let command = match choice.as_str() {
                "1" => Command::Detect,
                "2" => match self.read_mutation() {
                    Ok(Some(command)) => command,
                    Ok(None) => break,
                    Err(err @ CliError::Io(_)) => return Err(err),
                    Err(err) => {
                        writeln!(self.output, "Error: {}", err)?;
                        continue;
                    }
                },
                "3" => Command::Heal,
                "4" => Command::Quit,
                _ => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    continue;
                }
            };

            match session.execute(command) {
                Outcome::Quit => {
                    writeln!(self.output, "Exiting.")?;
                    break;
                }
                Outcome::Continue(report) => self.print_report(session, &report)?,
            }
        }
        Ok(())
    }

    /// Ask for the mutation parameters; `None` means end of input
    fn read_mutation(&mut self) -> Result<Option<Command>, CliError> {
        let Some(kind) = self.prompt("Mutation type (R: Radiation, V: Virus): ")? else {
            return Ok(None);
        };
        let kind = parse_kind(&kind)?;
        let Some(base) = self.prompt("Base (A, T, C, G): ")? else {
            return Ok(None);
        };
        let Some(row) = self.prompt("Starting row: ")? else {
            return Ok(None);
        };
        let Some(col) = self.prompt("Starting column: ")? else {
            return Ok(None);
        };
        let axis = match kind {
            MutationKind::Radiation => {
                let Some(axis) = self.prompt("Orientation (H: Horizontal, V: Vertical): ")? else {
                    return Ok(None);
                };
                Some(axis)
            }
            MutationKind::Virus => None,
        };

        build_mutation(kind, &base, &row, &col, axis.as_deref()).map(Some)
    }

    fn print_report(&mut self, session: &Session, report: &Report) -> Result<(), CliError> {
        writeln!(self.output, "{}", report)?;
        match report {
            Report::Detection { findings, .. } if session.options().show_findings => {
                for finding in findings {
                    writeln!(self.output, "  {}", finding)?;
                }
            }
            Report::Mutated { .. } => {
                writeln!(self.output, "DNA after mutation:\n{}", session.grid())?;
            }
            Report::Healed(_) => {
                writeln!(self.output, "DNA after healing:\n{}", session.grid())?;
            }
            Report::Grid => writeln!(self.output, "{}", session.grid())?,
            _ => {}
        }
        Ok(())
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

pub(crate) fn build_mutation(
    kind: MutationKind,
    base: &str,
    row: &str,
    col: &str,
    axis: Option<&str>,
) -> Result<Command, CliError> {
    let base = parse_base(base)?;
    let row = parse_coordinate(row)?;
    let col = parse_coordinate(col)?;
    let axis = axis.map(parse_axis).transpose()?;
    Ok(Command::Mutate {
        base,
        anchor: Anchor::new(row, col),
        orientation: kind.orientation(axis)?,
    })
}

fn parse_coordinate(s: &str) -> Result<i64, CliError> {
    s.trim()
        .parse()
        .map_err(|_| CliError::InvalidCoordinate(s.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mutant_core::{MutantOptions, SAMPLE_DNA};
    use std::io::Cursor;

    fn run(script: &str) -> (Session, String) {
        let options = MutantOptions {
            seed: Some(11),
            ..MutantOptions::default()
        };
        let mut session = Session::with_options(options).unwrap();
        let mut output = Vec::new();
        Shell::new(Cursor::new(script.to_string()), &mut output)
            .run(&mut session)
            .unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_detect_then_exit() {
        let (_, output) = run("1\n4\n");
        assert!(output.contains("The DNA does not contain mutations."));
        assert!(output.contains("Exiting."));
    }

    #[test]
    fn test_radiation_then_detect() {
        let (session, output) = run("2\nR\nG\n0\n0\nV\n1\n4\n");
        assert!(output.contains("Applied a vertical mutation at (0, 0)."));
        assert!(output.contains("The DNA contains mutations."));
        assert_eq!(session.grid().to_strings()[3], "GAGCTA");
    }

    #[test]
    fn test_virus_out_of_range_keeps_grid() {
        let (session, output) = run("2\nV\nT\n3\n3\n4\n");
        assert!(output.contains("Position out of range"));
        assert_eq!(session.grid().to_strings(), SAMPLE_DNA.to_vec());
    }

    #[test]
    fn test_bad_answers_return_to_menu() {
        let (_, output) = run("9\n2\nX\n2\nR\nQ\n0\n0\nH\n4\n");
        assert!(output.contains("Invalid option. Please try again."));
        assert!(output.contains("Unknown mutation type 'X'"));
        assert!(output.contains("Invalid base 'Q'"));
        assert!(output.contains("Exiting."));
    }

    #[test]
    fn test_heal_after_mutation() {
        let (session, output) = run("2\nR\nC\n1\n0\nH\n3\n1\n");
        assert!(output.contains("DNA after healing:"));
        assert!(output.contains("The DNA does not contain mutations."));
        assert!(!session.options().detector().is_mutant(session.grid()));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_, output) = run("2\nR\n");
        assert!(!output.contains("Exiting."));
    }
}
