// Copyright 2015-2023 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Sum Types
//!
//! A family of closed sum types that exchange values with one another under a total conversion
//! lattice:
//!
//! - [`Option`] (the standard library type, extended by [`OptionExt`]) models presence and absence.
//! - [`Result`] is the standard library result with an [`ErrBox`] as the default error type. With an
//!   explicit error type it is the general `Result<T, E>`.
//! - [`Errable`] models an operation that either succeeds with no value or fails with a payload.
//! - [`CtrlFlow`] distinguishes "keep going" from "stop with a value" in traversals.
//!
//! Failures of any of these can be propagated out of a function returning [`Result`] with the
//! [`Throw`] trait and the `?` operator:
//!
//! ```
//! use gust_sum::{Errable, Result, Throw};
//!
//! fn validate(len: usize) -> Result<usize> {
//!     let check: Errable<&str> = if len < 4 { Errable::Err("too short") } else { Errable::Ok };
//!     check.or_throw()?;
//!     Ok(len)
//! }
//!
//! assert!(validate(8).is_ok());
//! assert_eq!(validate(2).unwrap_err().to_string(), "too short");
//! ```

mod ctrl_flow;
mod errable;
mod errbox;
mod error;
pub mod option;
pub mod result;
mod throw;

#[cfg(feature = "json")]
pub mod json;

pub use ctrl_flow::CtrlFlow;
pub use errable::{non_errable, to_errable, Errable};
pub use errbox::{ErrBox, Payload};
pub use error::NoneError;
pub use option::OptionExt;
pub use result::{ok_void, ret, ret_void, BoxResultExt, Result, ResultExt, Void, VoidResult};
pub use throw::Throw;
