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

/// Non-overlapping chunks of a fixed size. See [`crate::IteratorExt::array_chunks`].
///
/// Only full chunks are yielded. When fewer items than the chunk size are left at the end, they
/// are kept back and can be recovered with [`ArrayChunks::into_remainder`].
#[derive(Debug, Clone)]
pub struct ArrayChunks<I: Iterator> {
    iter: Fuse<I>,
    size: usize,
    remainder: Vec<I::Item>,
}

impl<I: Iterator> ArrayChunks<I> {
    pub(crate) fn new(iter: I, size: usize) -> Self {
        ArrayChunks {
            iter: iter.fuse(),
            size,
            remainder: vec![],
        }
    }

    /// The items left over after the last full chunk, if there were any. This is only populated
    /// once the iterator has been exhausted.
    pub fn into_remainder(self) -> Option<Vec<I::Item>> {
        let ArrayChunks { remainder, .. } = self;
        if remainder.is_empty() {
            None
        } else {
            Some(remainder)
        }
    }
}

impl<I: Iterator> Iterator for ArrayChunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let ArrayChunks {
            iter,
            size,
            remainder,
        } = self;
        let mut chunk = Vec::with_capacity(*size);
        for item in iter.by_ref().take(*size) {
            chunk.push(item);
        }
        if chunk.len() == *size {
            Some(chunk)
        } else {
            remainder.extend(chunk);
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower / self.size, upper.map(|n| n / self.size))
    }
}

impl<I: Iterator> FusedIterator for ArrayChunks<I> {}
