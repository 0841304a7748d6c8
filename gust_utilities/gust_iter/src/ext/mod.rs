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
use std::iter::StepBy;

use gust_sum::{Errable, Result};

use crate::adapter::{ArrayChunks, ChunkBy, InspectErr, Intersperse, IntersperseWith, RetMap, Windows};
use crate::IterError;

/// Adapters and consumers for any [`Iterator`].
pub trait IteratorExt: Iterator + Sized {
    /// A lower bound on the number of items left, taken from [`Iterator::size_hint`].
    fn remaining(&self) -> usize {
        self.size_hint().0
    }

    /// Take the next `n` items. If fewer than `n` are left, the items that could be taken are
    /// returned as the error.
    fn next_chunk(&mut self, n: usize) -> Result<Vec<Self::Item>, Vec<Self::Item>> {
        let chunk = self.by_ref().take(n).collect::<Vec<_>>();
        if chunk.len() == n {
            Ok(chunk)
        } else {
            Err(chunk)
        }
    }

    /// Skip the next `n` items. If fewer than `n` items are left, the shortfall is returned as
    /// the error.
    fn advance_by(&mut self, n: usize) -> Errable<usize> {
        for taken in 0..n {
            if self.next().is_none() {
                return Errable::Err(n - taken);
            }
        }
        Errable::Ok
    }

    /// As [`Iterator::step_by`] but reporting a step of zero as an error instead of panicking.
    fn try_step_by(self, step: usize) -> Result<StepBy<Self>, IterError> {
        if step == 0 {
            Err(IterError::ZeroStep)
        } else {
            Ok(self.step_by(step))
        }
    }

    /// Place a clone of `separator` between each pair of adjacent items.
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    /// Place the result of calling `separator` between each pair of adjacent items.
    fn intersperse_with<G>(self, separator: G) -> IntersperseWith<Self, G>
    where
        G: FnMut() -> Self::Item,
    {
        IntersperseWith::new(self, separator)
    }

    /// Every run of `size` consecutive items, in order. Nothing is yielded if there are fewer
    /// than `size` items.
    ///
    /// # Panics
    /// If `size` is zero.
    #[track_caller]
    fn windows(self, size: usize) -> Windows<Self>
    where
        Self::Item: Clone,
    {
        assert!(size != 0, "{}", IterError::ZeroWindowSize);
        Windows::new(self, size)
    }

    fn try_windows(self, size: usize) -> Result<Windows<Self>, IterError>
    where
        Self::Item: Clone,
    {
        if size == 0 {
            Err(IterError::ZeroWindowSize)
        } else {
            Ok(Windows::new(self, size))
        }
    }

    /// Split the items into chunks of exactly `size` items.
    ///
    /// # Panics
    /// If `size` is zero.
    #[track_caller]
    fn array_chunks(self, size: usize) -> ArrayChunks<Self> {
        assert!(size != 0, "{}", IterError::ZeroChunkSize);
        ArrayChunks::new(self, size)
    }

    fn try_array_chunks(self, size: usize) -> Result<ArrayChunks<Self>, IterError> {
        if size == 0 {
            Err(IterError::ZeroChunkSize)
        } else {
            Ok(ArrayChunks::new(self, size))
        }
    }

    /// Group consecutive items into runs, starting a new run whenever `same_chunk` does not hold
    /// for an item and the one before it.
    fn chunk_by<F>(self, same_chunk: F) -> ChunkBy<Self, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        ChunkBy::new(self, same_chunk)
    }

    /// Map each item through a fallible function, boxing any errors.
    fn ret_map<U, E, F>(self, f: F) -> RetMap<Self, F>
    where
        E: Error + Send + Sync + 'static,
        F: FnMut(Self::Item) -> Result<U, E>,
    {
        RetMap::new(self, f)
    }
}

impl<I: Iterator> IteratorExt for I {}

/// Consumers for any [`DoubleEndedIterator`].
pub trait DoubleEndedIteratorExt: DoubleEndedIterator + Sized {
    /// Skip the last `n` items. If fewer than `n` items are left, the shortfall is returned as
    /// the error.
    fn advance_back_by(&mut self, n: usize) -> Errable<usize> {
        for taken in 0..n {
            if self.next_back().is_none() {
                return Errable::Err(n - taken);
            }
        }
        Errable::Ok
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIteratorExt for I {}

/// Adapters for iterators over results.
pub trait ResultIteratorExt<T, E>: Iterator<Item = Result<T, E>> + Sized {
    /// Call a function with each error as it passes through.
    fn inspect_err<F>(self, f: F) -> InspectErr<Self, F>
    where
        F: FnMut(&E),
    {
        InspectErr::new(self, f)
    }
}

impl<I, T, E> ResultIteratorExt<T, E> for I where I: Iterator<Item = Result<T, E>> {}
