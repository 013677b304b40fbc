// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Ranges with deliberately weak categories, so tests exercise the
//! walking fallbacks and the non-random-access strategies.

use stride_core::category::{Bidirectional, MultiPass};
use stride_core::range::{BidirectionalRange, MultiPassRange, MutRange, Range};

/// A vector that only admits forward traversal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ForwardVec<T> {
    pub(crate) data: Vec<T>,
}

/// A vector that admits forward and backward traversal, but no jumps.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BidiVec<T> {
    pub(crate) data: Vec<T>,
}

impl<T> ForwardVec<T> {
    pub(crate) fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> BidiVec<T> {
    pub(crate) fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

macro_rules! vec_backed {
    ($ty:ident, $category:ty) => {
        impl<T> Range for $ty<T> {
            type Value = T;
            type Position = usize;
            type Category = $category;

            fn begin_pos(&self) -> usize {
                0
            }

            fn is_end_pos(&self, pos: &usize) -> bool {
                *pos >= self.data.len()
            }

            fn inc_pos(&self, pos: &mut usize) {
                *pos += 1;
            }

            fn at_pos<'a>(&'a self, pos: &'a usize) -> &'a T {
                &self.data[*pos]
            }
        }

        impl<T> MultiPassRange for $ty<T> {}

        impl<T> MutRange for $ty<T> {
            fn at_pos_mut(&mut self, pos: &usize) -> &mut T {
                &mut self.data[*pos]
            }

            fn swap_pos(&mut self, a: &usize, b: &usize) {
                self.data.swap(*a, *b);
            }
        }
    };
}

vec_backed!(ForwardVec, MultiPass);
vec_backed!(BidiVec, Bidirectional);

impl<T> BidirectionalRange for BidiVec<T> {
    fn dec_pos(&self, pos: &mut usize) {
        *pos -= 1;
    }
}
