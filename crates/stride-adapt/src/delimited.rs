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

//! # Delimited Ranges
//!
//! `Delimited<R>` keeps the base's begin but stops at an explicit end
//! position. It is the shape produced when an algorithm finds a cut point
//! and wants to hand back "everything before it" without copying.

use stride_core::range::{
    BidirectionalRange, DelimitedRange, MultiPassRange, MutRange, RandomAccessRange, Range,
};

/// A multi-pass base range cut off at an explicit end position.
#[derive(Debug, Clone)]
pub struct Delimited<R>
where
    R: MultiPassRange,
{
    base: R,
    end: R::Position,
}

impl<R> Delimited<R>
where
    R: MultiPassRange,
{
    /// Creates a range over `base` that ends at `end`.
    #[inline]
    pub fn new(base: R, end: R::Position) -> Self {
        Self { base, end }
    }

    /// Returns a reference to the base range.
    #[inline]
    pub fn base(&self) -> &R {
        &self.base
    }

    /// Consumes the range and returns the base.
    #[inline]
    pub fn into_base(self) -> R {
        self.base
    }
}

impl<R> Range for Delimited<R>
where
    R: MultiPassRange,
{
    type Value = R::Value;
    type Position = R::Position;
    type Category = R::Category;

    const DELIMITED: bool = true;
    const COUNTED: bool = false;

    #[inline]
    fn begin_pos(&self) -> R::Position {
        self.base.begin_pos()
    }

    #[inline]
    fn is_end_pos(&self, pos: &R::Position) -> bool {
        *pos == self.end
    }

    #[inline]
    fn inc_pos(&self, pos: &mut R::Position) {
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

impl<R> MultiPassRange for Delimited<R>
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
        self.base.distance_pos(&self.base.begin_pos(), &self.end)
    }
}

impl<R> BidirectionalRange for Delimited<R>
where
    R: BidirectionalRange,
{
    #[inline]
    fn dec_pos(&self, pos: &mut R::Position) {
        self.base.dec_pos(pos);
    }

    #[inline]
    fn retreat_pos(&self, pos: &mut R::Position, n: usize) {
        self.base.retreat_pos(pos, n);
    }
}

impl<R> RandomAccessRange for Delimited<R>
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
        self.base
            .distance(&self.base.begin_pos(), &self.end)
            .unsigned_abs()
    }
}

impl<R> MutRange for Delimited<R>
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

impl<R> DelimitedRange for Delimited<R>
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

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::iota::Iota;
    use stride_core::iter::values;
    use stride_core::range::is_delimited;

    #[test]
    fn test_prefix_of_slice() {
        let v = vec![3, 1, 4, 1, 5];
        let d = Delimited::new(&v, v.nth_pos(3));
        assert_eq!(values(&d).collect::<Vec<_>>(), vec![3, 1, 4]);
        assert_eq!(d.length(), 3);
        assert!(is_delimited::<Delimited<&Vec<i32>>>());
    }

    #[test]
    fn test_prefix_of_generated_range() {
        let r = Iota::new(0u32, 100);
        let end = r.nth_pos(4);
        let d = Delimited::new(r, end);
        assert_eq!(values(&d).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(d.count_elements(), 4);
    }

    #[test]
    fn test_moving_the_end() {
        let v = [1, 2, 3, 4];
        let mut d = Delimited::new(&v, v.nth_pos(1));
        assert_eq!(d.count_elements(), 1);
        d.set_end_pos(v.end_position());
        assert_eq!(d.count_elements(), 4);
        assert_eq!(d.end_pos(), v.end_position());
    }
}
