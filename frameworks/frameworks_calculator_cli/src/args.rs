//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing.

use clap::{ArgAction, Parser};

use crate::error::CliError;

/// bigcalc command-line arguments
#[derive(Parser, Debug)]
#[command(name = "bigcalc")]
#[command(version, about = "Arbitrary-precision integer calculator")]
pub struct CliArgs {
    /// Expression to evaluate once, as three words: <a> <op> <b>.
    /// Omit to start an interactive session.
    #[arg(value_name = "EXPR", allow_negative_numbers = true)]
    pub expression: Vec<String>,

    /// Do not print the banner in interactive mode
    #[arg(long, env = "BIGCALC_NO_BANNER")]
    pub no_banner: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What the binary should do with the parsed arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Prompt loop on stdin/stdout
    Interactive,
    /// Evaluate a single expression and exit
    OneShot {
        left: &'a str,
        op: &'a str,
        right: &'a str,
    },
}

impl CliArgs {
    /// Validate the positional arguments and pick a mode
    ///
    /// Zero words start a session, exactly three evaluate once; any other
    /// count is a usage error.
    pub fn mode(&self) -> Result<Mode<'_>, CliError> {
        match self.expression.as_slice() {
            [] => Ok(Mode::Interactive),
            [left, op, right] => Ok(Mode::OneShot {
                left: left.as_str(),
                op: op.as_str(),
                right: right.as_str(),
            }),
            other => Err(CliError::Usage(format!(
                "expected an expression of the form <a> <op> <b>, got {} argument{}",
                other.len(),
                if other.len() == 1 { "" } else { "s" }
            ))),
        }
    }
}
