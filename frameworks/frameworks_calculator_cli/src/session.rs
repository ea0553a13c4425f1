//! Interactive session
//!
//! The prompt loop behind `bigcalc` with no arguments. Each round asks for
//! a first number (or `exit`), an operation and a second number, prints the
//! result, then asks whether to go again.
//!
//! A bad number aborts the round and starts a new one. Calculator errors
//! (bad operation, zero divisor, negative exponent) are printed in place of
//! the result and the round finishes normally.
//!
//! The session is generic over its input and output so it can be driven
//! from in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{debug, info};
use usecases_calculator::{BigIntegerCalculator, Operation};

use crate::error::CliError;
use crate::evaluate::parse_operand;

const RULE_WIDTH: usize = 50;

/// Session behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub show_banner: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { show_banner: true }
    }
}

/// Counts reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds that produced a number
    pub calculations: usize,
    /// Rounds that ended in an input or calculator error
    pub errors: usize,
}

/// Interactive calculator session over a reader and a writer
pub struct Session<R, W> {
    input: R,
    output: W,
    options: SessionOptions,
}

/// Comma-separated operation symbols, in menu order
fn operation_list() -> String {
    Operation::ALL
        .iter()
        .map(|op| op.symbol())
        .collect::<Vec<_>>()
        .join(", ")
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Give back the writer, e.g. to inspect a buffer in tests
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run rounds until the user exits or input ends
    pub fn run(&mut self) -> Result<SessionSummary, CliError> {
        let mut summary = SessionSummary::default();

        if self.options.show_banner {
            self.print_banner()?;
        }

        loop {
            let Some(first) = self.prompt("\nEnter first number (or \"exit\" to quit): ")? else {
                break;
            };
            if first.eq_ignore_ascii_case("exit") {
                break;
            }
            let a = match parse_operand(&first) {
                Ok(a) => a,
                Err(e) => {
                    self.report_bad_input(&e)?;
                    summary.errors += 1;
                    continue;
                }
            };

            let question = format!("Enter operation ({}): ", operation_list());
            let Some(token) = self.prompt(&question)? else {
                break;
            };

            let Some(second) = self.prompt("Enter second number: ")? else {
                break;
            };
            let b = match parse_operand(&second) {
                Ok(b) => b,
                Err(e) => {
                    self.report_bad_input(&e)?;
                    summary.errors += 1;
                    continue;
                }
            };

            let outcome =
                Operation::from_token(&token).and_then(|op| BigIntegerCalculator::calculate(&a, &b, op));

            let rule = "-".repeat(RULE_WIDTH);
            writeln!(self.output, "\n{}", rule)?;
            match &outcome {
                Ok(result) => {
                    summary.calculations += 1;
                    writeln!(self.output, "Result: {}", result)?;
                }
                Err(e) => {
                    summary.errors += 1;
                    debug!(error = ?e, "calculation failed");
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
            writeln!(self.output, "{}", rule)?;

            let Some(again) = self.prompt("\nCalculate again? (yes/no): ")? else {
                break;
            };
            if !(again.eq_ignore_ascii_case("yes") || again.eq_ignore_ascii_case("y")) {
                break;
            }
        }

        writeln!(self.output, "\nThanks for using the calculator! Goodbye!\n")?;
        self.output.flush()?;
        info!(
            calculations = summary.calculations,
            errors = summary.errors,
            "session ended"
        );
        Ok(summary)
    }

    fn print_banner(&mut self) -> Result<(), CliError> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "BIGCALC - ARBITRARY-PRECISION INTEGER CALCULATOR")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "\nSupports very large numbers!\n")?;
        writeln!(self.output, "Operations: {} (power)", operation_list())?;
        writeln!(self.output, "Type \"exit\" to quit\n")?;
        writeln!(self.output, "{}", rule)?;
        Ok(())
    }

    fn report_bad_input(&mut self, error: &CliError) -> Result<(), CliError> {
        debug!(%error, "round aborted");
        writeln!(self.output, "\nError: {}", error)?;
        writeln!(self.output, "Please enter valid numbers!")?;
        Ok(())
    }

    /// Print `question` and read one line
    ///
    /// Returns None at end of input; otherwise the line with surrounding
    /// whitespace removed.
    fn prompt(&mut self, question: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
