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

//! # Subranges
//!
//! `SubRange<R>` narrows a multi-pass base range to the window between two
//! of its positions. Positions of the subrange *are* positions of the base,
//! so an algorithm can hand a position found in the window straight back to
//! the caller, who can use it with the base. Only `is_end_pos` differs from
//! the base: it compares against the stored end.
//!
//! A subrange is both delimited (the end can be replaced) and counted (the
//! size can be queried or changed; changing it re-derives the end from the
//! begin in O(1) for random-access bases).

use stride_core::range::{
    BidirectionalRange, CountedRange, DelimitedRange, MultiPassRange, MutRange, RandomAccessRange,
    Range,
};

/// A window `[begin, end)` over a multi-pass base range.
///
/// # Examples
///
/// ```rust
/// # use stride_adapt::subrange::SubRange;
/// # use stride_core::iter::values;
/// # use stride_core::range::RandomAccessRange;
///
/// let v = vec![1, 2, 3, 4, 5];
/// let w = SubRange::new(&v, v.nth_pos(1), v.nth_pos(4));
/// assert_eq!(values(&w).collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct SubRange<R>
where
    R: MultiPassRange,
{
    base: R,
    begin: R::Position,
    end: R::Position,
}

impl<R> SubRange<R>
where
    R: MultiPassRange,
{
    /// Creates the window `[begin, end)` over `base`.
    ///
    /// `end` must be reachable from `begin`.
    #[inline]
    pub fn new(base: R, begin: R::Position, end: R::Position) -> Self {
        Self { base, begin, end }
    }

    /// Creates the window from `begin` to the end of `base`.
    #[inline]
    pub fn from_pos(base: R, begin: R::Position) -> Self {
        let end = base.end_position();
        Self { base, begin, end }
    }

    /// Creates a window covering all of `base`.
    #[inline]
    pub fn whole(base: R) -> Self {
        let begin = base.begin_pos();
        let end = base.end_position();
        Self { base, begin, end }
    }

    /// Returns the first position of the window.
    #[inline]
    pub fn begin(&self) -> &R::Position {
        &self.begin
    }

    /// Returns the end position of the window.
    #[inline]
    pub fn end(&self) -> &R::Position {
        &self.end
    }

    /// Replaces the first position of the window.
    #[inline]
    pub fn set_begin(&mut self, begin: R::Position) {
        self.begin = begin;
    }

    /// Returns a reference to the base range.
    #[inline]
    pub fn base(&self) -> &R {
        &self.base
    }

    /// Returns a mutable reference to the base range.
    #[inline]
    pub fn base_mut(&mut self) -> &mut R {
        &mut self.base
    }

    /// Consumes the window and returns the base range.
    #[inline]
    pub fn into_base(self) -> R {
        self.base
    }

    /// Returns `true` if the window has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

impl<R> Range for SubRange<R>
where
    R: MultiPassRange,
{
    type Value = R::Value;
    type Position = R::Position;
    type Category = R::Category;

    const DELIMITED: bool = true;
    const COUNTED: bool = true;

    #[inline]
    fn begin_pos(&self) -> R::Position {
        self.begin.clone()
    }

    #[inline]
    fn is_end_pos(&self, pos: &R::Position) -> bool {
        *pos == self.end
    }

    #[inline]
    fn inc_pos(&self, pos: &mut R::Position) {
        debug_assert!(*pos != self.end, "called `inc_pos` on the end of a subrange");
        self.base.inc_pos(pos);
    }

    #[inline]
    fn at_pos<'a>(&'a self, pos: &'a R::Position) -> &'a R::Value {
        self.base.at_pos(pos)
    }

    #[inline]
    fn advance_pos(&self, pos: &mut R::Position, n: usize) {
        self.base.advance_pos(pos, n);
    }
}

impl<R> MultiPassRange for SubRange<R>
where
    R: MultiPassRange,
{
    #[inline]
    fn distance_pos(&self, from: &R::Position, to: &R::Position) -> usize {
        self.base.distance_pos(from, to)
    }

    #[inline]
    fn end_position(&self) -> R::Position {
        self.end.clone()
    }

    #[inline]
    fn count_elements(&self) -> usize {
        self.base.distance_pos(&self.begin, &self.end)
    }
}

impl<R> BidirectionalRange for SubRange<R>
where
    R: BidirectionalRange,
{
    #[inline]
    fn dec_pos(&self, pos: &mut R::Position) {
        debug_assert!(*pos != self.begin, "called `dec_pos` on the begin of a subrange");
        self.base.dec_pos(pos);
    }

    #[inline]
    fn retreat_pos(&self, pos: &mut R::Position, n: usize) {
        self.base.retreat_pos(pos, n);
    }
}

impl<R> RandomAccessRange for SubRange<R>
where
    R: RandomAccessRange,
{
    #[inline]
    fn offset_pos(&self, pos: &mut R::Position, n: isize) {
        self.base.offset_pos(pos, n);
    }

    #[inline]
    fn distance(&self, from: &R::Position, to: &R::Position) -> isize {
        self.base.distance(from, to)
    }

    #[inline]
    fn length(&self) -> usize {
        self.base.distance(&self.begin, &self.end).unsigned_abs()
    }
}

impl<R> MutRange for SubRange<R>
where
    R: MultiPassRange + MutRange,
{
    #[inline]
    fn at_pos_mut(&mut self, pos: &R::Position) -> &mut R::Value {
        self.base.at_pos_mut(pos)
    }

    #[inline]
    fn swap_pos(&mut self, a: &R::Position, b: &R::Position) {
        self.base.swap_pos(a, b);
    }
}

impl<R> DelimitedRange for SubRange<R>
where
    R: MultiPassRange,
{
    #[inline]
    fn end_pos(&self) -> R::Position {
        self.end.clone()
    }

    #[inline]
    fn set_end_pos(&mut self, end: R::Position) {
        self.end = end;
    }
}

impl<R> CountedRange for SubRange<R>
where
    R: MultiPassRange,
{
    #[inline]
    fn size(&self) -> usize {
        self.count_elements()
    }

    #[inline]
    fn set_size(&mut self, n: usize) {
        let mut end = self.begin.clone();
        self.base.advance_pos(&mut end, n);
        self.end = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::iter::values;
    use stride_core::position::SlicePos;
    use stride_core::range::{is_counted, is_delimited, is_random_access};

    #[test]
    fn test_window_reads_only_its_elements() {
        let v = vec![10, 20, 30, 40, 50];
        let w = SubRange::new(&v, v.nth_pos(1), v.nth_pos(3));
        assert_eq!(values(&w).collect::<Vec<_>>(), vec![20, 30]);
        assert_eq!(w.count_elements(), 2);
        assert_eq!(w.length(), 2);
        assert!(!w.is_empty());
    }

    #[test]
    fn test_positions_are_shared_with_base() {
        let v = vec![1, 2, 3, 4];
        let w = SubRange::from_pos(&v, v.nth_pos(2));
        let p = w.begin_pos();
        assert_eq!(p, SlicePos::new(2));
        assert_eq!(*v.at_pos(&p), 3);
        assert_eq!(w.end_position(), v.end_position());
    }

    #[test]
    fn test_capabilities_follow_base() {
        assert!(is_random_access::<SubRange<&Vec<u8>>>());
        assert!(is_delimited::<SubRange<&Vec<u8>>>());
        assert!(is_counted::<SubRange<&Vec<u8>>>());
    }

    #[test]
    fn test_resize_keeps_existing_positions() {
        let v = vec![1, 2, 3, 4, 5, 6];
        let mut w = SubRange::whole(&v);
        let p = w.nth_pos(1);
        w.set_size(3);
        assert_eq!(w.size(), 3);
        assert_eq!(*w.at_pos(&p), 2);
        assert_eq!(values(&w).collect::<Vec<_>>(), vec![1, 2, 3]);
        w.set_end_pos(v.nth_pos(5));
        assert_eq!(w.size(), 5);
    }

    #[test]
    fn test_mutation_through_window() {
        let mut v = vec![1, 2, 3, 4];
        {
            let b = SlicePos::new(1);
            let e = SlicePos::new(3);
            let mut w = SubRange::new(&mut v, b, e);
            let first = w.begin_pos();
            let last = w.nth_pos(1);
            w.swap_pos(&first, &last);
            *w.at_pos_mut(&first) += 100;
        }
        assert_eq!(v, vec![1, 103, 2, 4]);
    }

    #[test]
    fn test_bidirectional_walk() {
        let v = [5, 6, 7];
        let w = SubRange::whole(&v);
        let mut p = w.end_position();
        w.dec_pos(&mut p);
        assert_eq!(*w.at_pos(&p), 7);
        w.retreat_pos(&mut p, 2);
        assert_eq!(p, w.begin_pos());
    }
}
