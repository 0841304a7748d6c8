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

use std::iter::{Fuse, FusedIterator, Peekable};

/// The number of items left when `remaining` upstream items are yet to be separated. If a
/// separator is pending, every remaining item is preceded by one.
fn separated_len(remaining: usize, pending_separator: bool) -> Option<usize> {
    if pending_separator {
        remaining.checked_mul(2)
    } else {
        remaining.checked_mul(2).map(|n| n.saturating_sub(1))
    }
}

fn separated_hint(hint: (usize, Option<usize>), pending_separator: bool) -> (usize, Option<usize>) {
    let (lower, upper) = hint;
    let lower = separated_len(lower, pending_separator).unwrap_or(usize::MAX);
    (
        lower,
        upper.and_then(|upper| separated_len(upper, pending_separator)),
    )
}

/// Places a clone of a separator between adjacent items. See
/// [`crate::IteratorExt::intersperse`].
#[derive(Debug, Clone)]
pub struct Intersperse<I: Iterator> {
    iter: Peekable<Fuse<I>>,
    separator: I::Item,
    pending_separator: bool,
}

impl<I: Iterator> Intersperse<I> {
    pub(crate) fn new(iter: I, separator: I::Item) -> Self {
        Intersperse {
            iter: iter.fuse().peekable(),
            separator,
            pending_separator: false,
        }
    }
}

impl<I> Iterator for Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Intersperse {
            iter,
            separator,
            pending_separator,
        } = self;
        if *pending_separator && iter.peek().is_some() {
            *pending_separator = false;
            return Some(separator.clone());
        }
        let item = iter.next()?;
        *pending_separator = true;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        separated_hint(self.iter.size_hint(), self.pending_separator)
    }
}

impl<I> FusedIterator for Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

/// Places the result of calling a function between adjacent items. See
/// [`crate::IteratorExt::intersperse_with`].
pub struct IntersperseWith<I: Iterator, G> {
    iter: Peekable<Fuse<I>>,
    separator: G,
    pending_separator: bool,
}

impl<I: Iterator, G> IntersperseWith<I, G> {
    pub(crate) fn new(iter: I, separator: G) -> Self {
        IntersperseWith {
            iter: iter.fuse().peekable(),
            separator,
            pending_separator: false,
        }
    }
}

impl<I, G> Iterator for IntersperseWith<I, G>
where
    I: Iterator,
    G: FnMut() -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let IntersperseWith {
            iter,
            separator,
            pending_separator,
        } = self;
        if *pending_separator && iter.peek().is_some() {
            *pending_separator = false;
            return Some(separator());
        }
        let item = iter.next()?;
        *pending_separator = true;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        separated_hint(self.iter.size_hint(), self.pending_separator)
    }
}

impl<I, G> FusedIterator for IntersperseWith<I, G>
where
    I: Iterator,
    G: FnMut() -> I::Item,
{
}
