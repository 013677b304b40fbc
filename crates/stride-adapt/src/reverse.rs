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

//! # Reversed Traversal
//!
//! `Reverse<R>` walks a bidirectional base range back to front. A reverse
//! position refers to the element it reads: it holds that element's own
//! base position, not the position one past it. The end of the reversed
//! range cannot be expressed as a base position (there is nothing before the
//! base's begin), so positions carry a `past_end` flag; the end is always
//! `(base begin, past_end = true)`, which keeps position equality total.
//!
//! Every navigation step forwards to the base's provided methods, so a
//! random-access base yields a random-access reversal with constant-time
//! jumps.

use stride_core::range::{
    BidirectionalRange, MultiPassRange, MutRange, RandomAccessRange, Range,
};

/// A position of a [`Reverse`] range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversePos<P> {
    base: P,
    past_end: bool,
}

impl<P> ReversePos<P> {
    /// Returns the base position of the element this position reads.
    ///
    /// For the end position this is the base's begin.
    #[inline]
    pub fn base(&self) -> &P {
        &self.base
    }

    /// Returns `true` if this is the end of the reversed range.
    #[inline]
    pub fn is_past_end(&self) -> bool {
        self.past_end
    }
}

/// A bidirectional base range traversed from back to front.
///
/// # Examples
///
/// ```rust
/// # use stride_adapt::reverse::Reverse;
/// # use stride_core::iter::values;
///
/// let v = vec![1, 2, 3];
/// assert_eq!(values(Reverse::new(&v)).collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Reverse<R>
where
    R: BidirectionalRange,
{
    base: R,
    base_begin: R::Position,
}

impl<R> Reverse<R>
where
    R: BidirectionalRange,
{
    /// Creates the reversal of `base`.
    #[inline]
    pub fn new(base: R) -> Self {
        let base_begin = base.begin_pos();
        Self { base, base_begin }
    }

    /// Returns a reference to the base range.
    #[inline]
    pub fn base(&self) -> &R {
        &self.base
    }

    /// Consumes the reversal and returns the base.
    #[inline]
    pub fn into_base(self) -> R {
        self.base
    }

    #[inline]
    fn past_end(&self) -> ReversePos<R::Position> {
        ReversePos {
            base: self.base_begin.clone(),
            past_end: true,
        }
    }

    /// Number of reverse steps from `pos` to the reversed end.
    #[inline]
    fn steps_left(&self, pos: &ReversePos<R::Position>) -> usize {
        if pos.past_end {
            0
        } else {
            self.base.distance_pos(&self.base_begin, &pos.base) + 1
        }
    }
}

impl<R> Range for Reverse<R>
where
    R: BidirectionalRange,
{
    type Value = R::Value;
    type Position = ReversePos<R::Position>;
    type Category = R::Category;

    const DELIMITED: bool = false;
    const COUNTED: bool = false;

    #[inline]
    fn begin_pos(&self) -> Self::Position {
        let mut last = self.base.end_position();
        if last == self.base_begin {
            return self.past_end();
        }
        self.base.dec_pos(&mut last);
        ReversePos {
            base: last,
            past_end: false,
        }
    }

    #[inline]
    fn is_end_pos(&self, pos: &Self::Position) -> bool {
        pos.past_end
    }

    #[inline]
    fn inc_pos(&self, pos: &mut Self::Position) {
        debug_assert!(!pos.past_end, "called `inc_pos` on the end of a reversed range");
        if pos.base == self.base_begin {
            pos.past_end = true;
        } else {
            self.base.dec_pos(&mut pos.base);
        }
    }

    #[inline]
    fn at_pos<'a>(&'a self, pos: &'a Self::Position) -> &'a R::Value {
        debug_assert!(!pos.past_end, "read through the end of a reversed range");
        self.base.at_pos(&pos.base)
    }

    #[inline]
    fn advance_pos(&self, pos: &mut Self::Position, n: usize) {
        if n == 0 {
            return;
        }
        let before_begin = self.steps_left(pos) - 1;
        if n <= before_begin {
            self.base.retreat_pos(&mut pos.base, n);
        } else {
            debug_assert_eq!(n, before_begin + 1, "advanced past the end of a reversed range");
            self.base.retreat_pos(&mut pos.base, before_begin);
            pos.past_end = true;
        }
    }
}

impl<R> MultiPassRange for Reverse<R>
where
    R: BidirectionalRange,
{
    #[inline]
    fn distance_pos(&self, from: &Self::Position, to: &Self::Position) -> usize {
        self.steps_left(from) - self.steps_left(to)
    }

    #[inline]
    fn end_position(&self) -> Self::Position {
        self.past_end()
    }

    #[inline]
    fn count_elements(&self) -> usize {
        self.base.count_elements()
    }
}

impl<R> BidirectionalRange for Reverse<R>
where
    R: BidirectionalRange,
{
    #[inline]
    fn dec_pos(&self, pos: &mut Self::Position) {
        if pos.past_end {
            pos.past_end = false;
        } else {
            self.base.inc_pos(&mut pos.base);
        }
    }

    #[inline]
    fn retreat_pos(&self, pos: &mut Self::Position, mut n: usize) {
        if n == 0 {
            return;
        }
        if pos.past_end {
            pos.past_end = false;
            n -= 1;
        }
        self.base.advance_pos(&mut pos.base, n);
    }
}

impl<R> RandomAccessRange for Reverse<R>
where
    R: RandomAccessRange,
{
    #[inline]
    fn offset_pos(&self, pos: &mut Self::Position, n: isize) {
        if n >= 0 {
            self.advance_pos(pos, n as usize);
        } else {
            self.retreat_pos(pos, n.unsigned_abs());
        }
    }

    #[inline]
    fn distance(&self, from: &Self::Position, to: &Self::Position) -> isize {
        self.steps_left(from) as isize - self.steps_left(to) as isize
    }

    #[inline]
    fn length(&self) -> usize {
        self.base.length()
    }
}

impl<R> MutRange for Reverse<R>
where
    R: BidirectionalRange + MutRange,
{
    #[inline]
    fn at_pos_mut(&mut self, pos: &Self::Position) -> &mut R::Value {
        debug_assert!(!pos.past_end, "wrote through the end of a reversed range");
        self.base.at_pos_mut(&pos.base)
    }

    #[inline]
    fn swap_pos(&mut self, a: &Self::Position, b: &Self::Position) {
        self.base.swap_pos(&a.base, &b.base);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::iota::Iota;
    use stride_core::iter::values;
    use stride_core::range::is_random_access;

    #[test]
    fn test_reads_back_to_front() {
        let v = vec![1, 2, 3, 4];
        let r = Reverse::new(&v);
        assert_eq!(values(&r).collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        assert_eq!(r.count_elements(), 4);
        assert!(is_random_access::<Reverse<&Vec<i32>>>());
    }

    #[test]
    fn test_empty_base() {
        let v: Vec<i32> = Vec::new();
        let r = Reverse::new(&v);
        assert!(r.is_end_pos(&r.begin_pos()));
        assert_eq!(r.begin_pos(), r.end_position());
        assert_eq!(r.length(), 0);
    }

    #[test]
    fn test_position_reads_its_own_element() {
        let v = [10, 20, 30];
        let r = Reverse::new(&v);
        let p = r.begin_pos();
        assert_eq!(p.base().get(), 2);
        assert_eq!(*r.at_pos(&p), 30);
    }

    #[test]
    fn test_random_access_jumps() {
        let r = Reverse::new(Iota::new(0u8, 10));
        let mut p = r.begin_pos();
        r.offset_pos(&mut p, 3);
        assert_eq!(*r.at_pos(&p), 6);
        r.offset_pos(&mut p, 7);
        assert!(r.is_end_pos(&p));
        assert_eq!(p, r.end_position());
        r.offset_pos(&mut p, -1);
        assert_eq!(*r.at_pos(&p), 0);
        r.offset_pos(&mut p, -9);
        assert_eq!(p, r.begin_pos());
        assert_eq!(r.distance(&r.begin_pos(), &r.end_position()), 10);
        assert_eq!(*r.at_pos(&r.nth_pos(4)), 5);
    }

    #[test]
    fn test_bidirectional_steps_around_end() {
        let v = vec!['a', 'b'];
        let r = Reverse::new(&v);
        let mut p = r.end_position();
        r.dec_pos(&mut p);
        assert_eq!(*r.at_pos(&p), 'a');
        r.dec_pos(&mut p);
        assert_eq!(*r.at_pos(&p), 'b');
        assert_eq!(p, r.begin_pos());
    }

    #[test]
    fn test_swap_through_reversal() {
        let mut v = vec![1, 2, 3];
        {
            let mut r = Reverse::new(&mut v);
            let a = r.begin_pos();
            let b = r.nth_pos(1);
            r.swap_pos(&a, &b);
            *r.at_pos_mut(&a) += 10;
        }
        assert_eq!(v, vec![1, 3, 12]);
    }
}
