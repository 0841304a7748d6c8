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

//! # Synchronization
//!
//! Value-holding locks and internally synchronized containers:
//!
//! - [`Mutex`] and [`RwMutex`] own the value they protect and offer scoped access that releases
//!   the lock on every exit path.
//! - [`SyncMap`] is a concurrent map whose entries are stored type-erased.
//! - [`AtomicValue`] is a cell that can be loaded, stored, swapped and compared-and-swapped.
//! - [`LazyValue`] runs its initializer at most once, storing the resulting [`gust_sum::Result`].

mod atomic;
mod error;
mod lazy;
mod map;
mod mutex;
mod rw_mutex;

pub use atomic::AtomicValue;
pub use error::LazyError;
pub use lazy::LazyValue;
pub use map::SyncMap;
pub use mutex::{Mutex, MutexGuard};
pub use rw_mutex::{RwMutex, RwMutexReadGuard, RwMutexWriteGuard};
