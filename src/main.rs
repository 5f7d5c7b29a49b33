//! Command-line front end for the `json-check` library.
//!
//! `json-check check <PATH>` validates a single document (`-` reads stdin);
//! `json-check suite <DIR>` runs every file in a directory against the
//! pass/fail expectation in its name.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use json_check::harness::{Suite, Verdict};
use json_check::{validate_or_parse_with, LiteralMatch, NumberGrammar, Options};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "json-check")]
#[command(about = "Strict JSON validator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    grammar: GrammarArgs,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GrammarArgs {
    /// Maximum nesting depth of objects and arrays
    #[arg(long, global = true, default_value_t = json_check::options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Recognize true/false/null by their first character only
    #[arg(long, global = true)]
    loose_literals: bool,

    /// Accept a leading '-' on integers
    #[arg(long, global = true)]
    signed_numbers: bool,
}

impl GrammarArgs {
    fn options(&self) -> Options {
        let literals = if self.loose_literals {
            LiteralMatch::Loose
        } else {
            LiteralMatch::Exact
        };
        let numbers = if self.signed_numbers {
            NumberGrammar::Signed
        } else {
            NumberGrammar::Unsigned
        };
        Options::default()
            .with_max_depth(self.max_depth)
            .with_literals(literals)
            .with_numbers(numbers)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one document and print its value tree
    Check {
        /// File to validate, or '-' for stdin
        path: PathBuf,
    },
    /// Validate every file in a directory against its pass/fail name
    Suite {
        /// Directory holding the test inputs
        dir: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        Ok(input)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}

fn check(path: &Path, options: Options) -> Result<ExitCode> {
    let input = read_input(path)?;
    match validate_or_parse_with(&input, options) {
        Ok(value) => {
            println!("Valid JSON");
            println!("{:#?}", value);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("Invalid JSON");
            println!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn suite(dir: PathBuf, options: Options) -> Result<ExitCode> {
    let tally = Suite::new(dir, options).run()?;
    for outcome in &tally.mismatches {
        let verdict = match &outcome.verdict {
            Verdict::Valid => "accepted".to_string(),
            Verdict::Invalid(reason) => format!("rejected ({})", reason),
        };
        println!("MISMATCH {}: {}", outcome.path.display(), verdict);
    }
    println!(
        "passed: {}, failed: {}, unclassified: {}",
        tally.passed, tally.failed, tally.unclassified
    );
    Ok(if tally.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let options = cli.grammar.options();

    let result = match cli.command {
        Commands::Check { path } => check(&path, options),
        Commands::Suite { dir } => suite(dir, options),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
