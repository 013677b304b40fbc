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

//! # Positions
//!
//! Positions are opaque cursors. Algorithms never look inside them; they
//! only hand them back to the range that produced them. This module holds
//! the position type of contiguous storage, `SlicePos`, and free-function
//! spellings of the core cursor operations that return the moved position
//! instead of mutating it in place.
//!
//! ## Usage
//!
//! ```rust
//! use stride_core::position::{advance, next_pos, prev_pos, SlicePos};
//! use stride_core::range::Range;
//!
//! let v = [10, 20, 30, 40];
//! let p = next_pos(&v, v.begin_pos());
//! assert_eq!(*v.at_pos(&p), 20);
//! let q = advance(&v, p, 2);
//! assert_eq!(q, SlicePos::new(3));
//! assert_eq!(prev_pos(&v, q).get(), 2);
//! ```

use crate::range::{BidirectionalRange, MultiPassRange, Range};

/// The position type of slices, arrays and vectors.
///
/// A `SlicePos` is an element offset from the start of the storage it was
/// obtained from. It is only meaningful for that storage; `get` exists for
/// diagnostics and for callers that own the storage and want an index.
///
/// # Examples
///
/// ```rust
/// # use stride_core::position::SlicePos;
///
/// let p = SlicePos::new(5);
/// assert_eq!(p.get(), 5);
/// assert_eq!(format!("{}", p), "SlicePos(5)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlicePos {
    offset: usize,
}

impl SlicePos {
    /// Creates a position at the given element offset.
    #[inline(always)]
    pub const fn new(offset: usize) -> Self {
        Self { offset }
    }

    /// Returns the element offset.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.offset
    }

    /// Returns `true` if this is the first position of the storage.
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.offset == 0
    }

    /// Moves the position by a signed offset.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the result would be negative or overflow.
    #[inline(always)]
    pub fn offset_by(&mut self, n: isize) {
        let next = self.offset.checked_add_signed(n);
        debug_assert!(
            next.is_some(),
            "called `SlicePos::offset_by` with an offset that leaves the address space: {} + {}",
            self.offset,
            n
        );
        self.offset = next.unwrap_or(self.offset.wrapping_add_signed(n));
    }

    /// Returns the signed element count from `self` to `other`.
    #[inline(always)]
    pub const fn signed_distance_to(&self, other: &SlicePos) -> isize {
        (other.offset as isize).wrapping_sub(self.offset as isize)
    }
}

impl std::fmt::Debug for SlicePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SlicePos({})", self.offset)
    }
}

impl std::fmt::Display for SlicePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SlicePos({})", self.offset)
    }
}

impl From<usize> for SlicePos {
    fn from(offset: usize) -> Self {
        Self::new(offset)
    }
}

impl From<SlicePos> for usize {
    fn from(pos: SlicePos) -> Self {
        pos.offset
    }
}

macro_rules! impl_pos_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl std::ops::$trait_name<usize> for SlicePos {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: usize) -> Self::Output {
                Self::new(self.offset $op rhs)
            }
        }
        impl std::ops::$assign_trait<usize> for SlicePos {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: usize) {
                self.offset = self.offset $op rhs;
            }
        }
    };
}

impl_pos_op!(Add, add, AddAssign, add_assign, +);
impl_pos_op!(Sub, sub, SubAssign, sub_assign, -);

/// Returns the position after `pos`.
#[inline]
pub fn next_pos<R>(range: &R, mut pos: R::Position) -> R::Position
where
    R: Range + ?Sized,
{
    range.inc_pos(&mut pos);
    pos
}

/// Returns the position before `pos`.
#[inline]
pub fn prev_pos<R>(range: &R, mut pos: R::Position) -> R::Position
where
    R: BidirectionalRange + ?Sized,
{
    range.dec_pos(&mut pos);
    pos
}

/// Returns `pos` moved by the signed offset `n`.
///
/// Constant time for random-access ranges, `|n|` steps otherwise.
#[inline]
pub fn advance<R>(range: &R, mut pos: R::Position, n: isize) -> R::Position
where
    R: BidirectionalRange + ?Sized,
{
    if n >= 0 {
        range.advance_pos(&mut pos, n.unsigned_abs());
    } else {
        range.retreat_pos(&mut pos, n.unsigned_abs());
    }
    pos
}

/// Returns the number of elements between `from` and `to`.
///
/// `to` must be reachable from `from`.
#[inline]
pub fn distance<R>(range: &R, from: &R::Position, to: &R::Position) -> usize
where
    R: MultiPassRange + ?Sized,
{
    range.distance_pos(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RandomAccessRange;

    #[test]
    fn test_new_and_get() {
        let p = SlicePos::new(10);
        assert_eq!(p.get(), 10);
        assert!(!p.is_zero());
        assert!(SlicePos::default().is_zero());
    }

    #[test]
    fn test_conversions() {
        let p: SlicePos = 42.into();
        assert_eq!(p.get(), 42);
        let v: usize = p.into();
        assert_eq!(v, 42);
    }

    #[test]
    fn test_debug_and_display() {
        let p = SlicePos::new(7);
        assert_eq!(format!("{}", p), "SlicePos(7)");
        assert_eq!(format!("{:?}", p), "SlicePos(7)");
    }

    #[test]
    fn test_arithmetic_ops() {
        let mut p = SlicePos::new(10);
        assert_eq!((p + 5).get(), 15);
        assert_eq!((p - 5).get(), 5);
        p += 3;
        assert_eq!(p.get(), 13);
        p -= 13;
        assert!(p.is_zero());
    }

    #[test]
    fn test_signed_offsets() {
        let mut p = SlicePos::new(4);
        p.offset_by(-3);
        assert_eq!(p.get(), 1);
        p.offset_by(5);
        assert_eq!(p.get(), 6);
        assert_eq!(SlicePos::new(6).signed_distance_to(&SlicePos::new(2)), -4);
        assert_eq!(SlicePos::new(2).signed_distance_to(&SlicePos::new(6)), 4);
    }

    #[test]
    fn test_free_cursor_functions() {
        let v = vec![1, 2, 3, 4, 5];
        let b = v.begin_pos();
        let e = v.end_position();
        assert_eq!(distance(&v, &b, &e), 5);
        let p = advance(&v, b, 4);
        assert_eq!(*v.at_pos(&p), 5);
        let q = advance(&v, p, -2);
        assert_eq!(*v.at_pos(&q), 3);
        assert_eq!(next_pos(&v, q), v.nth_pos(3));
        assert_eq!(prev_pos(&v, q), v.nth_pos(1));
    }
}
