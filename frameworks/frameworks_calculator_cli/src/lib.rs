//! Frameworks Layer: Calculator Command Line
//!
//! Provides the `bigcalc` front end over the calculator core. This crate is
//! the only place in the workspace that touches a terminal: it reads text,
//! runs the validators, parses operands, dispatches to
//! [`usecases_calculator::BigIntegerCalculator`] and formats the outcome.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: Command-line argument parsing
//! - **[`logging`](logging/index.html)**: Diagnostic logging setup
//! - **[`evaluate`](evaluate/index.html)**: One-shot `<a> <op> <b>` evaluation
//! - **[`session`](session/index.html)**: Interactive prompt loop
//! - **[`error`](error/index.html)**: Front-end error type
//!
//! ## Modes
//!
//! ```text
//! bigcalc                 # interactive session
//! bigcalc 2 '**' 64       # prints 18446744073709551616
//! bigcalc -- -7 / 2       # prints -3
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

pub mod args;
pub mod error;
pub mod evaluate;
pub mod logging;
pub mod session;

pub use args::{CliArgs, Mode};
pub use error::CliError;
pub use evaluate::{evaluate, parse_operand};
pub use session::{Session, SessionOptions, SessionSummary};
