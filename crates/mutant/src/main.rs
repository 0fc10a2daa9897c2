//! DNA mutant detector
//!
//! Runs one command against a grid given on the command line, or starts the
//! interactive menu.

mod error;
mod input;
mod shell;

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use mutant_core::{Command, GenomeRng, Grid, MutantOptions, Outcome, Report, Session};

use crate::error::CliError;
use crate::input::{parse_grid, parse_kind};
use crate::shell::{Shell, build_mutation};

/// Detect, inject and heal DNA mutations
#[derive(Parser, Debug)]
#[command(name = "mutant")]
#[command(author, version, about = "DNA mutant detector", long_about = None)]
struct Args {
    /// Grid rows, comma separated (AGATCA,GATTCA,...) or a JSON array
    #[arg(short = 'g', long = "grid", global = true)]
    grid: Option<String>,

    /// Seed for grid generation and healing
    #[arg(short = 's', long = "seed", global = true)]
    seed: Option<u64>,

    /// Run length that makes a grid mutant
    #[arg(short = 'm', long = "min-run", global = true)]
    min_run: Option<usize>,

    /// Extra options in mutantrc syntax (e.g. `-O heal:once,show_findings`)
    #[arg(short = 'O', long = "option", global = true)]
    options: Vec<String>,

    /// Verbose logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Report whether the grid is mutant
    Detect {
        /// List every qualifying line
        #[arg(long)]
        report: bool,
    },
    /// Write a run of one base into the grid
    Mutate {
        /// R (radiation) or V (virus)
        #[arg(long)]
        kind: String,
        #[arg(long)]
        base: String,
        #[arg(long, allow_negative_numbers = true)]
        row: String,
        #[arg(long, allow_negative_numbers = true)]
        col: String,
        /// H or V, radiation only
        #[arg(long)]
        axis: Option<String>,
    },
    /// Replace the grid with a new one if it is mutant
    Heal,
    /// Print a random grid
    Random {
        #[arg(long)]
        side: Option<usize>,
    },
    /// Interactive menu
    Shell,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `MUTANT_LOG` overrides the level
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("MUTANT_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Defaults, then `MUTANTOPTIONS`, then `-O` flags, then the dedicated flags
fn load_options(args: &Args) -> Result<MutantOptions, CliError> {
    let mut options = MutantOptions::default();
    if let Ok(env) = std::env::var("MUTANTOPTIONS") {
        options.apply(&env)?;
    }
    for opt in &args.options {
        options.apply(opt)?;
    }
    if let Some(seed) = args.seed {
        options.parse_option(&format!("seed:{}", seed))?;
    }
    if let Some(min_run) = args.min_run {
        options.parse_option(&format!("min_run:{}", min_run))?;
    }
    tracing::debug!(?options, "options loaded");
    Ok(options)
}

fn run(args: Args) -> Result<(), CliError> {
    let mut options = load_options(&args)?;

    if let Some(Cmd::Random { side }) = args.command {
        let side = side.unwrap_or(options.side);
        let mut rng = options.seed.map(GenomeRng::new).unwrap_or_default();
        let grid: Grid = Grid::random(side, &mut rng)?;
        println!("{}", grid);
        return Ok(());
    }
    if let Some(Cmd::Detect { report: true }) = args.command {
        options.show_findings = true;
    }

    let mut session = match &args.grid {
        Some(text) => Session::new(parse_grid(text)?, options),
        None => Session::with_options(options)?,
    };

    let command = match args.command {
        None | Some(Cmd::Shell) => {
            let stdin = io::stdin();
            return Shell::new(stdin.lock(), io::stdout()).run(&mut session);
        }
        Some(Cmd::Random { .. }) => return Ok(()),
        Some(Cmd::Detect { .. }) => Command::Detect,
        Some(Cmd::Heal) => Command::Heal,
        Some(Cmd::Mutate {
            kind,
            base,
            row,
            col,
            axis,
        }) => build_mutation(parse_kind(&kind)?, &base, &row, &col, axis.as_deref())?,
    };

    let Outcome::Continue(report) = session.execute(command) else {
        return Ok(());
    };
    if let Report::MutationRejected(err) = &report {
        return Err(err.clone().into());
    }

    println!("{}", report);
    match &report {
        Report::Detection { findings, .. } => {
            if session.options().show_findings {
                for finding in findings {
                    println!("  {}", finding);
                }
            }
        }
        _ => println!("{}", session.grid()),
    }
    Ok(())
}
