//! Use Cases Layer: Big Integer Calculator
//!
//! Provides the calculator core: six exact arithmetic operations over
//! arbitrary-precision signed integers, a combined dispatch entry point and
//! the validators a front end runs before parsing user input.
//!
//! ## Overview
//!
//! The `usecases_calculator` crate is pure. It performs no I/O and holds no
//! state; every function is a deterministic function of its arguments and is
//! safe to call from any number of threads at once.
//!
//! ## Modules
//!
//! - **[`operation`](operation/index.html)**: The closed set of operation tags
//!   and their textual tokens
//! - **[`calculator`](calculator/index.html)**: [`BigIntegerCalculator`], the six
//!   operations and dispatch
//! - **[`validation`](validation/index.html)**: Operand and operator validators
//! - **[`error`](error/index.html)**: The [`CalcError`] taxonomy
//!
//! ## Example
//!
//! ```
//! use usecases_calculator::{BigIntegerCalculator, BigInteger, Operation};
//!
//! let a: BigInteger = "999999999999999999".parse().unwrap();
//! let b = BigInteger::from_i64(1);
//! let sum = BigIntegerCalculator::calculate(&a, &b, Operation::Add).unwrap();
//! assert_eq!(sum.to_string(), "1000000000000000000");
//! ```
//!
//! ## See Also
//!
//! - [`entities_big_integer`](../entities_big_integer/index.html): the operand type

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

pub mod calculator;
pub mod error;
pub mod operation;
pub mod validation;

pub use calculator::{BigIntegerCalculator, MAX_POWER_BITS};
pub use error::CalcError;
pub use operation::Operation;
pub use validation::{is_valid_integer_literal, is_valid_operation_token};

// Re-export the operand type so callers need a single dependency
pub use entities_big_integer::{BigInteger, ParseIntegerError};
