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

//! # Iterators
//!
//! Constructors, adapters and consumers that complement [`std::iter`]. Everything here works with
//! the standard [`Iterator`] and [`DoubleEndedIterator`] traits; the extension traits
//! [`IteratorExt`], [`DoubleEndedIteratorExt`] and [`ResultIteratorExt`] add the operations that
//! the standard library does not provide on stable Rust.
//!
//! ```
//! use gust_iter::{from_slice, IteratorExt};
//!
//! let words = from_slice(&["a", "b", "c"]).intersperse("-").collect::<String>();
//! assert_eq!(words, "a-b-c");
//! ```

mod adapter;
mod error;
mod ext;
mod source;


pub use adapter::{ArrayChunks, ChunkBy, InspectErr, Intersperse, IntersperseWith, RetMap, Windows};
pub use error::IterError;
pub use ext::{DoubleEndedIteratorExt, IteratorExt, ResultIteratorExt};
pub use source::{
    empty, from_bitset, from_bitset_bytes, from_bitset_ones, from_bitset_zeros, from_chan,
    from_elements, from_func, from_pull, from_range, from_seq, from_slice, into_seq, once, repeat,
    BitSetIter, BitSetLike, Pull, SeqIter, SeqStop,
};

/// Two values yielded together, as by [`Iterator::zip`].
pub type Pair<A, B> = (A, B);

/// An element of a sequence paired with its index, as by [`Iterator::enumerate`].
pub type VecEntry<T> = (usize, T);

/// A key and value yielded by iterating over a map.
pub type DictEntry<K, V> = (K, V);
