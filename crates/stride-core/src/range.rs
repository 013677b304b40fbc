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

//! # Range Traits
//!
//! A range is anything that can hand out an opaque *position*, tell whether
//! a position is the end, read the element at a position and move a
//! position forward. That is the whole single-pass contract (`Range`). The
//! stronger categories refine it:
//!
//! - `MultiPassRange`: positions are `Clone + PartialEq` and revisiting a
//!   copied position yields the same remainder.
//! - `BidirectionalRange`: adds `dec_pos`.
//! - `RandomAccessRange`: adds signed O(1) jumps and signed distances.
//!
//! Orthogonal to the category chain:
//!
//! - `DelimitedRange`: the extent can be queried and set as an end position.
//! - `CountedRange`: the extent can be queried and set as an element count.
//! - `MutRange`: elements can be written and swapped in place.
//!
//! ## Strategy selection
//!
//! Several operations have a generic, linear fallback provided by the trait
//! (`advance_pos`, `distance_pos`, `end_position`, `retreat_pos`). Random
//! access implementors override them with constant-time versions, so an
//! algorithm written once against `MultiPassRange` picks the cheap
//! implementation statically for every range that has one.
//!
//! ## Lending ranges
//!
//! `&R` and `&mut R` are ranges whenever `R` is. Algorithms take their range
//! by value; callers lend it with `&v` or `&mut v` when they want to keep
//! using it (for example to read the element at a returned position).

use crate::category::{AtLeastBidirectional, AtLeastMultiPass, Category, CategoryKind, RandomAccess};
use crate::error::RangeError;

/// The single-pass range contract.
///
/// `at_pos` ties the returned reference to both the range and the position.
/// This lets generated ranges (whose values live in the position itself)
/// and generator-backed ranges (whose position owns the current value)
/// share the same interface as storage-backed ranges.
pub trait Range {
    /// The element type.
    type Value;
    /// The opaque cursor type.
    type Position;
    /// The strongest traversal guarantee of this range.
    type Category: Category;

    /// Whether this range implements `DelimitedRange`.
    const DELIMITED: bool = false;
    /// Whether this range implements `CountedRange`.
    const COUNTED: bool = false;

    /// Returns the position of the first element (or the end position if
    /// the range is empty).
    fn begin_pos(&self) -> Self::Position;

    /// Returns `true` if `pos` is the end of the range.
    fn is_end_pos(&self, pos: &Self::Position) -> bool;

    /// Moves `pos` forward by one element.
    ///
    /// `pos` must not be the end position.
    fn inc_pos(&self, pos: &mut Self::Position);

    /// Returns the element at `pos`.
    ///
    /// `pos` must not be the end position.
    fn at_pos<'a>(&'a self, pos: &'a Self::Position) -> &'a Self::Value;

    /// Moves `pos` forward by `n` elements.
    ///
    /// The provided implementation increments `n` times; random-access
    /// ranges override it with a constant-time jump.
    #[inline]
    fn advance_pos(&self, pos: &mut Self::Position, n: usize) {
        for _ in 0..n {
            debug_assert!(
                !self.is_end_pos(pos),
                "called `Range::advance_pos` past the end of the range"
            );
            self.inc_pos(pos);
        }
    }
}

/// A range whose positions can be copied and revisited.
pub trait MultiPassRange: Range<Position: Clone + PartialEq, Category: AtLeastMultiPass> {
    /// Returns the number of increments needed to move `from` to `to`.
    ///
    /// `to` must be reachable from `from`. The provided implementation
    /// counts; random-access ranges override it.
    #[inline]
    fn distance_pos(&self, from: &Self::Position, to: &Self::Position) -> usize {
        let mut cur = from.clone();
        let mut n = 0usize;
        while cur != *to {
            debug_assert!(
                !self.is_end_pos(&cur),
                "called `MultiPassRange::distance_pos` with an unreachable target position"
            );
            self.inc_pos(&mut cur);
            n += 1;
        }
        n
    }

    /// Returns the end position of the range.
    ///
    /// The provided implementation walks from the beginning; delimited and
    /// random-access ranges override it.
    #[inline]
    fn end_position(&self) -> Self::Position {
        let mut pos = self.begin_pos();
        while !self.is_end_pos(&pos) {
            self.inc_pos(&mut pos);
        }
        pos
    }

    /// Returns the number of elements in the range.
    #[inline]
    fn count_elements(&self) -> usize {
        self.distance_pos(&self.begin_pos(), &self.end_position())
    }
}

/// A multi-pass range whose positions can also move backward.
pub trait BidirectionalRange: MultiPassRange<Category: AtLeastBidirectional> {
    /// Moves `pos` back by one element.
    ///
    /// `pos` must not be the begin position.
    fn dec_pos(&self, pos: &mut Self::Position);

    /// Moves `pos` back by `n` elements.
    #[inline]
    fn retreat_pos(&self, pos: &mut Self::Position, n: usize) {
        for _ in 0..n {
            self.dec_pos(pos);
        }
    }
}

/// A bidirectional range with constant-time jumps and distances.
///
/// Implementors must also override `Range::advance_pos`,
/// `MultiPassRange::distance_pos`, `MultiPassRange::end_position` and
/// `BidirectionalRange::retreat_pos` with constant-time versions.
pub trait RandomAccessRange: BidirectionalRange<Category = RandomAccess> {
    /// Moves `pos` by the signed offset `n`.
    fn offset_pos(&self, pos: &mut Self::Position, n: isize);

    /// Returns the signed number of elements from `from` to `to`.
    fn distance(&self, from: &Self::Position, to: &Self::Position) -> isize;

    /// Returns the number of elements in the range in constant time.
    #[inline]
    fn length(&self) -> usize {
        let n = self.distance(&self.begin_pos(), &self.end_position());
        debug_assert!(n >= 0, "random-access range with a negative length");
        n.unsigned_abs()
    }

    /// Returns the position `index` elements after the beginning.
    #[inline]
    fn nth_pos(&self, index: usize) -> Self::Position {
        let mut pos = self.begin_pos();
        self.advance_pos(&mut pos, index);
        pos
    }

    /// Returns the position of the element at `index`, or an error if
    /// `index` is not less than the length of the range.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::OutOfRange` if `index >= self.length()`.
    fn checked_pos(&self, index: usize) -> Result<Self::Position, RangeError> {
        let len = self.length();
        if index < len {
            Ok(self.nth_pos(index))
        } else {
            Err(RangeError::OutOfRange { index, len })
        }
    }

    /// Orders two positions of this range.
    #[inline]
    fn compare_pos(&self, a: &Self::Position, b: &Self::Position) -> std::cmp::Ordering {
        0.cmp(&self.distance(a, b))
    }
}

/// A range whose extent is an explicit, settable end position.
pub trait DelimitedRange: Range {
    /// Returns the stored end position.
    fn end_pos(&self) -> Self::Position;

    /// Replaces the end position.
    ///
    /// Positions derived before the call stay valid as long as they do not
    /// lie beyond the new end.
    fn set_end_pos(&mut self, end: Self::Position);
}

/// A range whose extent is an explicit, settable element count.
pub trait CountedRange: Range {
    /// Returns the number of elements in the range.
    fn size(&self) -> usize;

    /// Changes the number of elements in the range.
    fn set_size(&mut self, n: usize);
}

/// A range whose elements can be written in place.
pub trait MutRange: Range {
    /// Returns a mutable reference to the element at `pos`.
    fn at_pos_mut(&mut self, pos: &Self::Position) -> &mut Self::Value;

    /// Exchanges the elements at `a` and `b`.
    fn swap_pos(&mut self, a: &Self::Position, b: &Self::Position);

    /// Stores `value` at `pos` and returns the previous element.
    #[inline]
    fn replace_pos(&mut self, pos: &Self::Position, value: Self::Value) -> Self::Value {
        std::mem::replace(self.at_pos_mut(pos), value)
    }
}

/// Returns the traversal category of `R`.
///
/// # Examples
///
/// ```rust
/// # use stride_core::range::category_of;
/// # use stride_core::category::CategoryKind;
///
/// assert_eq!(category_of::<[u8]>(), CategoryKind::RandomAccess);
/// ```
#[inline]
pub const fn category_of<R>() -> CategoryKind
where
    R: Range + ?Sized,
{
    <R::Category as Category>::KIND
}

/// Returns `true` for every range (all ranges are at least single-pass).
#[inline]
pub const fn is_single_pass<R>() -> bool
where
    R: Range + ?Sized,
{
    category_of::<R>().refines(CategoryKind::SinglePass)
}

/// Returns `true` if `R` can be traversed repeatedly.
#[inline]
pub const fn is_multi_pass<R>() -> bool
where
    R: Range + ?Sized,
{
    category_of::<R>().refines(CategoryKind::MultiPass)
}

/// Returns `true` if positions of `R` can move backward.
#[inline]
pub const fn is_bidirectional<R>() -> bool
where
    R: Range + ?Sized,
{
    category_of::<R>().refines(CategoryKind::Bidirectional)
}

/// Returns `true` if `R` supports constant-time jumps.
#[inline]
pub const fn is_random_access<R>() -> bool
where
    R: Range + ?Sized,
{
    category_of::<R>().refines(CategoryKind::RandomAccess)
}

/// Returns `true` if `R` exposes a settable end position.
#[inline]
pub const fn is_delimited<R>() -> bool
where
    R: Range + ?Sized,
{
    R::DELIMITED
}

/// Returns `true` if `R` exposes a settable element count.
#[inline]
pub const fn is_counted<R>() -> bool
where
    R: Range + ?Sized,
{
    R::COUNTED
}

/// `&R` only reads through the reference, so it cannot re-bound the range
/// and reports neither capability; `&mut R` reports what `R` reports.
macro_rules! forward_range {
    ($delimited:expr, $counted:expr; $($ref:tt)+) => {
        impl<R> Range for $($ref)+ R
        where
            R: Range + ?Sized,
        {
            type Value = R::Value;
            type Position = R::Position;
            type Category = R::Category;

            const DELIMITED: bool = $delimited;
            const COUNTED: bool = $counted;

            #[inline(always)]
            fn begin_pos(&self) -> Self::Position {
                (**self).begin_pos()
            }

            #[inline(always)]
            fn is_end_pos(&self, pos: &Self::Position) -> bool {
                (**self).is_end_pos(pos)
            }

            #[inline(always)]
            fn inc_pos(&self, pos: &mut Self::Position) {
                (**self).inc_pos(pos)
            }

            #[inline(always)]
            fn at_pos<'a>(&'a self, pos: &'a Self::Position) -> &'a Self::Value {
                (**self).at_pos(pos)
            }

            #[inline(always)]
            fn advance_pos(&self, pos: &mut Self::Position, n: usize) {
                (**self).advance_pos(pos, n)
            }
        }

        impl<R> MultiPassRange for $($ref)+ R
        where
            R: MultiPassRange + ?Sized,
        {
            #[inline(always)]
            fn distance_pos(&self, from: &Self::Position, to: &Self::Position) -> usize {
                (**self).distance_pos(from, to)
            }

            #[inline(always)]
            fn end_position(&self) -> Self::Position {
                (**self).end_position()
            }

            #[inline(always)]
            fn count_elements(&self) -> usize {
                (**self).count_elements()
            }
        }

        impl<R> BidirectionalRange for $($ref)+ R
        where
            R: BidirectionalRange + ?Sized,
        {
            #[inline(always)]
            fn dec_pos(&self, pos: &mut Self::Position) {
                (**self).dec_pos(pos)
            }

            #[inline(always)]
            fn retreat_pos(&self, pos: &mut Self::Position, n: usize) {
                (**self).retreat_pos(pos, n)
            }
        }

        impl<R> RandomAccessRange for $($ref)+ R
        where
            R: RandomAccessRange + ?Sized,
        {
            #[inline(always)]
            fn offset_pos(&self, pos: &mut Self::Position, n: isize) {
                (**self).offset_pos(pos, n)
            }

            #[inline(always)]
            fn distance(&self, from: &Self::Position, to: &Self::Position) -> isize {
                (**self).distance(from, to)
            }

            #[inline(always)]
            fn length(&self) -> usize {
                (**self).length()
            }
        }
    };
}

forward_range!(false, false; &);
forward_range!(R::DELIMITED, R::COUNTED; &mut);

impl<R> MutRange for &mut R
where
    R: MutRange + ?Sized,
{
    #[inline(always)]
    fn at_pos_mut(&mut self, pos: &Self::Position) -> &mut Self::Value {
        (**self).at_pos_mut(pos)
    }

    #[inline(always)]
    fn swap_pos(&mut self, a: &Self::Position, b: &Self::Position) {
        (**self).swap_pos(a, b)
    }
}

impl<R> DelimitedRange for &mut R
where
    R: DelimitedRange + ?Sized,
{
    #[inline(always)]
    fn end_pos(&self) -> Self::Position {
        (**self).end_pos()
    }

    #[inline(always)]
    fn set_end_pos(&mut self, end: Self::Position) {
        (**self).set_end_pos(end)
    }
}

impl<R> CountedRange for &mut R
where
    R: CountedRange + ?Sized,
{
    #[inline(always)]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline(always)]
    fn set_size(&mut self, n: usize) {
        (**self).set_size(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iota::Iota;
    use crate::position::SlicePos;

    /// A forward-only view used to exercise the provided linear fallbacks.
    struct Forward<'a>(&'a [i32]);

    impl Range for Forward<'_> {
        type Value = i32;
        type Position = usize;
        type Category = crate::category::MultiPass;

        fn begin_pos(&self) -> usize {
            0
        }

        fn is_end_pos(&self, pos: &usize) -> bool {
            *pos == self.0.len()
        }

        fn inc_pos(&self, pos: &mut usize) {
            *pos += 1;
        }

        fn at_pos<'a>(&'a self, pos: &'a usize) -> &'a i32 {
            &self.0[*pos]
        }
    }

    impl MultiPassRange for Forward<'_> {}

    #[test]
    fn test_capability_queries() {
        assert!(is_single_pass::<Forward<'_>>());
        assert!(is_multi_pass::<Forward<'_>>());
        assert!(!is_bidirectional::<Forward<'_>>());
        assert!(!is_random_access::<Forward<'_>>());

        assert!(is_random_access::<[u8]>());
        assert!(is_random_access::<Vec<u8>>());
        assert!(is_random_access::<&mut Vec<u8>>());
        assert!(is_random_access::<Iota<i32>>());
        assert!(!is_delimited::<[u8]>());
        assert!(!is_counted::<&[u8]>());
    }

    #[test]
    fn test_provided_fallbacks_walk() {
        let data = [1, 2, 3, 4];
        let r = Forward(&data);
        let mut p = r.begin_pos();
        r.advance_pos(&mut p, 2);
        assert_eq!(*r.at_pos(&p), 3);
        assert_eq!(r.distance_pos(&r.begin_pos(), &p), 2);
        assert_eq!(r.end_position(), 4);
        assert_eq!(r.count_elements(), 4);
    }

    #[test]
    fn test_references_forward() {
        let mut v = vec![10, 20, 30];
        {
            let r = &v;
            let p = r.nth_pos(1);
            assert_eq!(*r.at_pos(&p), 20);
            assert_eq!(r.length(), 3);
        }
        let r = &mut v;
        let a = SlicePos::new(0);
        let b = SlicePos::new(2);
        r.swap_pos(&a, &b);
        *r.at_pos_mut(&a) += 1;
        assert_eq!(v, vec![31, 20, 10]);
    }

    #[test]
    fn test_checked_pos() {
        let v = [1, 2, 3];
        assert_eq!(v.checked_pos(2), Ok(SlicePos::new(2)));
        assert_eq!(
            v.checked_pos(3),
            Err(RangeError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_compare_pos() {
        let v = [1, 2, 3];
        let a = v.nth_pos(0);
        let b = v.nth_pos(2);
        assert_eq!(v.compare_pos(&a, &b), std::cmp::Ordering::Less);
        assert_eq!(v.compare_pos(&b, &a), std::cmp::Ordering::Greater);
        assert_eq!(v.compare_pos(&a, &a), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_replace_pos() {
        let mut v = vec![1, 2, 3];
        let p = v.nth_pos(1);
        assert_eq!(v.replace_pos(&p, 9), 2);
        assert_eq!(v, vec![1, 9, 3]);
    }
}
