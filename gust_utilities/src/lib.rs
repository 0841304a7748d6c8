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

//! # Gust Utilities
//!
//! Facade over the gust utility crates. The sum-type family is always available; the iterator
//! pipeline, the synchronization primitives and the JSON codec are enabled with the `iter`, `sync`
//! and `json` features (or all of them with `all`).

pub use gust_sum as sum;

pub use gust_sum::{
    CtrlFlow, ErrBox, Errable, OptionExt, Result, ResultExt, Throw, Void, VoidResult,
};

#[cfg(feature = "iter")]
pub use gust_iter as iter;

#[cfg(feature = "sync")]
pub use gust_sync as sync;

#[cfg(feature = "json")]
pub use gust_sum::json;
