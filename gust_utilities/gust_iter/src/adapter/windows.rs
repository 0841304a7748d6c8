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

use std::collections::VecDeque;
use std::iter::{Fuse, FusedIterator};

/// Overlapping runs of consecutive items. See [`crate::IteratorExt::windows`].
#[derive(Debug, Clone)]
pub struct Windows<I: Iterator> {
    iter: Fuse<I>,
    size: usize,
    buffer: VecDeque<I::Item>,
}

impl<I: Iterator> Windows<I> {
    pub(crate) fn new(iter: I, size: usize) -> Self {
        Windows {
            iter: iter.fuse(),
            size,
            buffer: VecDeque::with_capacity(size),
        }
    }
}

impl<I> Iterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let Windows { iter, size, buffer } = self;
        if buffer.len() == *size {
            buffer.pop_front();
        }
        while buffer.len() < *size {
            buffer.push_back(iter.next()?);
        }
        Some(buffer.iter().cloned().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Windows { iter, size, buffer } = self;
        let (lower, upper) = iter.size_hint();
        if buffer.len() == *size {
            return (lower, upper);
        }
        let missing = *size - buffer.len();
        let windows = |n: usize| n.saturating_sub(missing - 1);
        (windows(lower), upper.map(windows))
    }
}

impl<I> FusedIterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
