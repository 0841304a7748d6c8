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

use std::iter::FusedIterator;

/// Iterator over a pull-style source. See [`from_pull`].
pub struct Pull<N, S: FnOnce()> {
    next: N,
    stop: Option<S>,
}

/// Adapt a pull-style pair of functions. `next` is called until it returns `None`, at which
/// point `stop` is called. If the iterator is stopped or dropped before that, `stop` is called
/// then instead. In either case `stop` is called exactly once.
pub fn from_pull<T, N, S>(next: N, stop: S) -> Pull<N, S>
where
    N: FnMut() -> Option<T>,
    S: FnOnce(),
{
    Pull {
        next,
        stop: Some(stop),
    }
}

impl<N, S: FnOnce()> Pull<N, S> {
    /// Release the source without consuming the remaining values.
    pub fn stop(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

impl<T, N, S> Iterator for Pull<N, S>
where
    N: FnMut() -> Option<T>,
    S: FnOnce(),
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.stop.as_ref()?;
        let item = (self.next)();
        if item.is_none() {
            self.release();
        }
        item
    }
}

impl<T, N, S> FusedIterator for Pull<N, S>
where
    N: FnMut() -> Option<T>,
    S: FnOnce(),
{
}

impl<N, S: FnOnce()> Drop for Pull<N, S> {
    fn drop(&mut self) {
        self.release();
    }
}
