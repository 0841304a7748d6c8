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

/// A fixed-size sequence of bits that can be read by offset.
pub trait BitSetLike {
    /// The number of bits in the set.
    fn size(&self) -> usize;

    /// The value of the bit at `offset`. Only offsets less than [`BitSetLike::size`] are read.
    fn get(&self, offset: usize) -> bool;
}

impl<B: BitSetLike + ?Sized> BitSetLike for &B {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn get(&self, offset: usize) -> bool {
        (**self).get(offset)
    }
}

impl BitSetLike for [bool] {
    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, offset: usize) -> bool {
        self[offset]
    }
}

impl BitSetLike for Vec<bool> {
    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, offset: usize) -> bool {
        self[offset]
    }
}

/// Bytes are read most significant bit first, so offset 0 is the high bit of the first byte.
impl BitSetLike for [u8] {
    fn size(&self) -> usize {
        self.len() * 8
    }

    fn get(&self, offset: usize) -> bool {
        let byte = self[offset / 8];
        byte & (0x80 >> (offset % 8)) != 0
    }
}

/// Iterator over the offsets and values of the bits in a [`BitSetLike`].
#[derive(Debug, Clone)]
pub struct BitSetIter<B> {
    bits: B,
    front: usize,
    back: usize,
}

impl<B: BitSetLike> BitSetIter<B> {
    fn new(bits: B) -> Self {
        let back = bits.size();
        BitSetIter {
            bits,
            front: 0,
            back,
        }
    }
}

impl<B: BitSetLike> Iterator for BitSetIter<B> {
    type Item = (usize, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let BitSetIter { bits, front, back } = self;
        if *front < *back {
            let offset = *front;
            *front += 1;
            Some((offset, bits.get(offset)))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<B: BitSetLike> DoubleEndedIterator for BitSetIter<B> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let BitSetIter { bits, front, back } = self;
        if *front < *back {
            *back -= 1;
            Some((*back, bits.get(*back)))
        } else {
            None
        }
    }
}

impl<B: BitSetLike> ExactSizeIterator for BitSetIter<B> {}

impl<B: BitSetLike> FusedIterator for BitSetIter<B> {}

/// Iterate over every bit of a set as `(offset, value)` pairs.
pub fn from_bitset<B: BitSetLike>(bits: B) -> BitSetIter<B> {
    BitSetIter::new(bits)
}

/// Iterate over the bits of a byte slice, most significant bit of each byte first.
pub fn from_bitset_bytes(bytes: &[u8]) -> BitSetIter<&[u8]> {
    BitSetIter::new(bytes)
}

/// The offsets of the set bits.
pub fn from_bitset_ones<B: BitSetLike>(bits: B) -> impl DoubleEndedIterator<Item = usize> {
    from_bitset(bits).filter_map(|(offset, set)| set.then_some(offset))
}

/// The offsets of the unset bits.
pub fn from_bitset_zeros<B: BitSetLike>(bits: B) -> impl DoubleEndedIterator<Item = usize> {
    from_bitset(bits).filter_map(|(offset, set)| (!set).then_some(offset))
}
