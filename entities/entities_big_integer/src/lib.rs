//! Entities Layer: Big Integers
//!
//! Provides the value type every calculator operation works on:
//! - Arbitrary-precision signed integers ([`BigInteger`])
//! - Decimal literal recognition and parsing ([`literal`])
//!
//! ## Overview
//!
//! The `entities_big_integer` crate is the innermost layer of the calculator
//! workspace. It has no knowledge of operations, menus or terminals; it only
//! knows how to hold an integer of unbounded magnitude and how to read one
//! from text.
//!
//! ## See Also
//!
//! - [`usecases_calculator`](../usecases_calculator/index.html): the six arithmetic operations

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

pub mod big;
pub mod literal;

pub use big::BigInteger;
pub use literal::{is_integer_literal, ParseIntegerError};
