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


mod bitset;
mod pull;
mod seq;

use std::iter::{Cloned, FromFn, Fuse};
use std::ops::{Range, RangeInclusive};

use crossbeam_channel::Receiver;
use either::Either;

pub use bitset::{
    from_bitset, from_bitset_bytes, from_bitset_ones, from_bitset_zeros, BitSetIter, BitSetLike,
};
pub use pull::{from_pull, Pull};
pub use seq::{from_seq, into_seq, SeqIter, SeqStop};
pub use std::iter::{empty, once, repeat};

/// Iterate over clones of the elements of a slice.
pub fn from_slice<T: Clone>(slice: &[T]) -> Cloned<std::slice::Iter<'_, T>> {
    slice.iter().cloned()
}

/// Iterate over the given elements, in order.
pub fn from_elements<T, const N: usize>(elements: [T; N]) -> std::array::IntoIter<T, N> {
    elements.into_iter()
}

/// Iterate over the values from `lo` up to `hi`. The upper bound is included only if `inclusive`
/// is set.
pub fn from_range<T>(lo: T, hi: T, inclusive: bool) -> Either<Range<T>, RangeInclusive<T>> {
    if inclusive {
        Either::Right(lo..=hi)
    } else {
        Either::Left(lo..hi)
    }
}

/// Call a function repeatedly until it returns `None`. The function is not called again after
/// that.
pub fn from_func<T, F>(f: F) -> Fuse<FromFn<F>>
where
    F: FnMut() -> Option<T>,
{
    std::iter::from_fn(f).fuse()
}

/// Receive values from a channel until every sender has been dropped. Advancing the iterator
/// blocks while the channel is empty.
pub fn from_chan<T>(receiver: Receiver<T>) -> crossbeam_channel::IntoIter<T> {
    receiver.into_iter()
}
