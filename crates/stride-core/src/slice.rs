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

//! # Contiguous Storage as Ranges
//!
//! Slices, arrays and vectors are random-access, mutable ranges whose
//! positions are `SlicePos` offsets. Every provided linear fallback of the
//! range traits is overridden with its constant-time counterpart here, so
//! algorithms written against the weaker traits run at full speed on
//! contiguous storage.
//!
//! Element reads go through ordinary slice indexing; a position that lies
//! outside the storage panics rather than reading out of bounds.

use crate::category::RandomAccess;
use crate::position::SlicePos;
use crate::range::{BidirectionalRange, MultiPassRange, MutRange, RandomAccessRange, Range};

impl<T> Range for [T] {
    type Value = T;
    type Position = SlicePos;
    type Category = RandomAccess;

    #[inline(always)]
    fn begin_pos(&self) -> SlicePos {
        SlicePos::new(0)
    }

    #[inline(always)]
    fn is_end_pos(&self, pos: &SlicePos) -> bool {
        debug_assert!(
            pos.get() <= self.len(),
            "slice position {} lies beyond the end {}",
            pos.get(),
            self.len()
        );
        pos.get() >= self.len()
    }

    #[inline(always)]
    fn inc_pos(&self, pos: &mut SlicePos) {
        *pos += 1;
    }

    #[inline(always)]
    fn at_pos<'a>(&'a self, pos: &'a SlicePos) -> &'a T {
        &self[pos.get()]
    }

    #[inline(always)]
    fn advance_pos(&self, pos: &mut SlicePos, n: usize) {
        *pos += n;
    }
}

impl<T> MultiPassRange for [T] {
    #[inline(always)]
    fn distance_pos(&self, from: &SlicePos, to: &SlicePos) -> usize {
        debug_assert!(from <= to, "called `distance_pos` with `to` before `from`");
        to.get() - from.get()
    }

    #[inline(always)]
    fn end_position(&self) -> SlicePos {
        SlicePos::new(self.len())
    }

    #[inline(always)]
    fn count_elements(&self) -> usize {
        self.len()
    }
}

impl<T> BidirectionalRange for [T] {
    #[inline(always)]
    fn dec_pos(&self, pos: &mut SlicePos) {
        debug_assert!(!pos.is_zero(), "called `dec_pos` on the begin position");
        *pos -= 1;
    }

    #[inline(always)]
    fn retreat_pos(&self, pos: &mut SlicePos, n: usize) {
        *pos -= n;
    }
}

impl<T> RandomAccessRange for [T] {
    #[inline(always)]
    fn offset_pos(&self, pos: &mut SlicePos, n: isize) {
        pos.offset_by(n);
    }

    #[inline(always)]
    fn distance(&self, from: &SlicePos, to: &SlicePos) -> isize {
        from.signed_distance_to(to)
    }

    #[inline(always)]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> MutRange for [T] {
    #[inline(always)]
    fn at_pos_mut(&mut self, pos: &SlicePos) -> &mut T {
        &mut self[pos.get()]
    }

    #[inline(always)]
    fn swap_pos(&mut self, a: &SlicePos, b: &SlicePos) {
        self.swap(a.get(), b.get());
    }
}

macro_rules! forward_to_slice {
    ([$($generics:tt)*], $ty:ty) => {
        impl<$($generics)*> Range for $ty {
            type Value = T;
            type Position = SlicePos;
            type Category = RandomAccess;

            #[inline(always)]
            fn begin_pos(&self) -> SlicePos {
                self.as_slice().begin_pos()
            }

            #[inline(always)]
            fn is_end_pos(&self, pos: &SlicePos) -> bool {
                self.as_slice().is_end_pos(pos)
            }

            #[inline(always)]
            fn inc_pos(&self, pos: &mut SlicePos) {
                self.as_slice().inc_pos(pos)
            }

            #[inline(always)]
            fn at_pos<'a>(&'a self, pos: &'a SlicePos) -> &'a T {
                &self.as_slice()[pos.get()]
            }

            #[inline(always)]
            fn advance_pos(&self, pos: &mut SlicePos, n: usize) {
                self.as_slice().advance_pos(pos, n)
            }
        }

        impl<$($generics)*> MultiPassRange for $ty {
            #[inline(always)]
            fn distance_pos(&self, from: &SlicePos, to: &SlicePos) -> usize {
                self.as_slice().distance_pos(from, to)
            }

            #[inline(always)]
            fn end_position(&self) -> SlicePos {
                SlicePos::new(self.len())
            }

            #[inline(always)]
            fn count_elements(&self) -> usize {
                self.len()
            }
        }

        impl<$($generics)*> BidirectionalRange for $ty {
            #[inline(always)]
            fn dec_pos(&self, pos: &mut SlicePos) {
                self.as_slice().dec_pos(pos)
            }

            #[inline(always)]
            fn retreat_pos(&self, pos: &mut SlicePos, n: usize) {
                self.as_slice().retreat_pos(pos, n)
            }
        }

        impl<$($generics)*> RandomAccessRange for $ty {
            #[inline(always)]
            fn offset_pos(&self, pos: &mut SlicePos, n: isize) {
                pos.offset_by(n);
            }

            #[inline(always)]
            fn distance(&self, from: &SlicePos, to: &SlicePos) -> isize {
                from.signed_distance_to(to)
            }

            #[inline(always)]
            fn length(&self) -> usize {
                self.len()
            }
        }

        impl<$($generics)*> MutRange for $ty {
            #[inline(always)]
            fn at_pos_mut(&mut self, pos: &SlicePos) -> &mut T {
                &mut self.as_mut_slice()[pos.get()]
            }

            #[inline(always)]
            fn swap_pos(&mut self, a: &SlicePos, b: &SlicePos) {
                self.as_mut_slice().swap(a.get(), b.get());
            }
        }
    };
}

forward_to_slice!([T], Vec<T>);
forward_to_slice!([T, const N: usize], [T; N]);
