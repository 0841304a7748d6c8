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

use std::error::Error;
use std::iter::FusedIterator;

use gust_sum::{ErrBox, Result};

/// Maps each item through a fallible function, boxing the errors with their chain of sources. See
/// [`crate::IteratorExt::ret_map`].
#[derive(Debug, Clone)]
pub struct RetMap<I, F> {
    iter: I,
    f: F,
}

impl<I, F> RetMap<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        RetMap { iter, f }
    }
}

impl<I, F, U, E> Iterator for RetMap<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Result<U, E>,
    E: Error + Send + Sync + 'static,
{
    type Item = Result<U>;

    fn next(&mut self) -> Option<Self::Item> {
        let RetMap { iter, f } = self;
        iter.next().map(|item| f(item).map_err(ErrBox::from_error))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, U, E> DoubleEndedIterator for RetMap<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(I::Item) -> Result<U, E>,
    E: Error + Send + Sync + 'static,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let RetMap { iter, f } = self;
        iter.next_back().map(|item| f(item).map_err(ErrBox::from_error))
    }
}

impl<I, F, U, E> FusedIterator for RetMap<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> Result<U, E>,
    E: Error + Send + Sync + 'static,
{
}

/// Calls a function with each error of an iterator of results, passing every item through. See
/// [`crate::ResultIteratorExt::inspect_err`].
#[derive(Debug, Clone)]
pub struct InspectErr<I, F> {
    iter: I,
    f: F,
}

impl<I, F> InspectErr<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        InspectErr { iter, f }
    }
}

impl<I, F, T, E> Iterator for InspectErr<I, F>
where
    I: Iterator<Item = Result<T, E>>,
    F: FnMut(&E),
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let InspectErr { iter, f } = self;
        iter.next().map(|item| item.inspect_err(|err| f(err)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, T, E> DoubleEndedIterator for InspectErr<I, F>
where
    I: DoubleEndedIterator<Item = Result<T, E>>,
    F: FnMut(&E),
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let InspectErr { iter, f } = self;
        iter.next_back().map(|item| item.inspect_err(|err| f(err)))
    }
}

impl<I, F, T, E> FusedIterator for InspectErr<I, F>
where
    I: FusedIterator<Item = Result<T, E>>,
    F: FnMut(&E),
{
}
