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

use std::iter::{Fuse, FusedIterator};

/// Runs of consecutive items in which each adjacent pair satisfies a predicate. See
/// [`crate::IteratorExt::chunk_by`].
pub struct ChunkBy<I: Iterator, F> {
    iter: Fuse<I>,
    pending: Option<I::Item>,
    same_chunk: F,
}

impl<I: Iterator, F> ChunkBy<I, F> {
    pub(crate) fn new(iter: I, same_chunk: F) -> Self {
        ChunkBy {
            iter: iter.fuse(),
            pending: None,
            same_chunk,
        }
    }
}

impl<I, F> Iterator for ChunkBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let ChunkBy {
            iter,
            pending,
            same_chunk,
        } = self;
        let first = pending.take().or_else(|| iter.next())?;
        let mut chunk = vec![first];
        for item in iter.by_ref() {
            if chunk.last().is_some_and(|last| same_chunk(last, &item)) {
                chunk.push(item);
            } else {
                *pending = Some(item);
                break;
            }
        }
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let ChunkBy { iter, pending, .. } = self;
        let held = usize::from(pending.is_some());
        let (lower, upper) = iter.size_hint();
        let lower = if lower > 0 || held > 0 { 1 } else { 0 };
        (lower, upper.and_then(|n| n.checked_add(held)))
    }
}

impl<I, F> FusedIterator for ChunkBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
}
