//! bigcalc Binary Entry Point
//!
//! With no arguments, starts an interactive session on stdin/stdout.
//! With `<a> <op> <b>`, prints the result and exits.
//!
//! Exit codes: 0 on success, 1 when the expression cannot be evaluated,
//! 2 on a usage error.

use std::io;
use std::process;

use clap::Parser;
use tracing::error;

use frameworks_calculator_cli::{evaluate, logging, CliArgs, Mode, Session, SessionOptions};

fn main() {
    let args = CliArgs::parse();
    logging::init(args.verbose);

    let mode = match args.mode() {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    match mode {
        Mode::OneShot { left, op, right } => match evaluate(left, op, right) {
            Ok(result) => {
                println!("{}", result);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Mode::Interactive => {
            let options = SessionOptions {
                show_banner: !args.no_banner,
            };
            let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), options);
            if let Err(e) = session.run() {
                error!(error = %e, "session failed");
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}
