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

//! # Counted Ranges
//!
//! `Counted<R>` limits a base range to its first `n` elements. Unlike a
//! delimited window it needs no end position up front, which makes it the
//! way to bound a single-pass source ("the next 16 bytes of this stream").
//!
//! Positions carry the number of steps taken from the begin. The end test is
//! `index >= n || base reached its end`, so shrinking or growing the count
//! after positions were handed out keeps them meaningful: a position at
//! index 3 is past the end of a 2-element window and inside a 5-element one.

use stride_core::range::{
    BidirectionalRange, CountedRange, MultiPassRange, MutRange, RandomAccessRange, Range,
    is_random_access,
};

/// A position of a [`Counted`] range: the base position plus its index
/// from the begin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedPos<P> {
    base: P,
    index: usize,
}

impl<P> CountedPos<P> {
    /// Returns the wrapped base position.
    #[inline]
    pub fn base(&self) -> &P {
        &self.base
    }

    /// Unwraps the base position.
    #[inline]
    pub fn into_base(self) -> P {
        self.base
    }

    /// Returns the number of steps from the begin of the counted range.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// The first `count` elements of a base range.
///
/// # Examples
///
/// ```rust
/// # use stride_adapt::counted::Counted;
/// # use stride_core::iter::values;
/// # use stride_core::range::CountedRange;
///
/// let v = vec![9, 8, 7, 6];
/// let mut c = Counted::new(&v, 2);
/// assert_eq!(values(&c).collect::<Vec<_>>(), vec![9, 8]);
/// c.set_size(3);
/// assert_eq!(values(&c).collect::<Vec<_>>(), vec![9, 8, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct Counted<R> {
    base: R,
    count: usize,
}

impl<R> Counted<R>
where
    R: Range,
{
    /// Creates a range over the first `count` elements of `base`.
    #[inline]
    pub fn new(base: R, count: usize) -> Self {
        Self { base, count }
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

impl<R> Range for Counted<R>
where
    R: Range,
{
    type Value = R::Value;
    type Position = CountedPos<R::Position>;
    type Category = R::Category;

    const DELIMITED: bool = false;
    const COUNTED: bool = true;

    #[inline]
    fn begin_pos(&self) -> Self::Position {
        CountedPos {
            base: self.base.begin_pos(),
            index: 0,
        }
    }

    #[inline]
    fn is_end_pos(&self, pos: &Self::Position) -> bool {
        pos.index >= self.count || self.base.is_end_pos(&pos.base)
    }

    #[inline]
    fn inc_pos(&self, pos: &mut Self::Position) {
        self.base.inc_pos(&mut pos.base);
        pos.index += 1;
    }

    #[inline]
    fn at_pos<'a>(&'a self, pos: &'a Self::Position) -> &'a R::Value {
        self.base.at_pos(&pos.base)
    }

    #[inline]
    fn advance_pos(&self, pos: &mut Self::Position, n: usize) {
        self.base.advance_pos(&mut pos.base, n);
        pos.index += n;
    }
}

impl<R> MultiPassRange for Counted<R>
where
    R: MultiPassRange,
{
    #[inline]
    fn distance_pos(&self, from: &Self::Position, to: &Self::Position) -> usize {
        debug_assert!(from.index <= to.index, "called `distance_pos` with `to` before `from`");
        to.index - from.index
    }

    /// Jumps for random-access bases; otherwise walks at most `count`
    /// steps of the base instead of measuring all of it.
    #[inline]
    fn end_position(&self) -> Self::Position {
        let mut pos = self.begin_pos();
        if is_random_access::<R>() {
            self.advance_pos(&mut pos, self.count.min(self.base.count_elements()));
        } else {
            while !self.is_end_pos(&pos) {
                self.inc_pos(&mut pos);
            }
        }
        pos
    }

    #[inline]
    fn count_elements(&self) -> usize {
        if is_random_access::<R>() {
            self.count.min(self.base.count_elements())
        } else {
            self.end_position().index
        }
    }
}

impl<R> BidirectionalRange for Counted<R>
where
    R: BidirectionalRange,
{
    #[inline]
    fn dec_pos(&self, pos: &mut Self::Position) {
        debug_assert!(pos.index > 0, "called `dec_pos` on the begin of a counted range");
        self.base.dec_pos(&mut pos.base);
        pos.index -= 1;
    }

    #[inline]
    fn retreat_pos(&self, pos: &mut Self::Position, n: usize) {
        self.base.retreat_pos(&mut pos.base, n);
        pos.index -= n;
    }
}

impl<R> RandomAccessRange for Counted<R>
where
    R: RandomAccessRange,
{
    #[inline]
    fn offset_pos(&self, pos: &mut Self::Position, n: isize) {
        debug_assert!(
            n >= 0 || n.unsigned_abs() <= pos.index,
            "called `offset_pos` past the begin of a counted range"
        );
        self.base.offset_pos(&mut pos.base, n);
        pos.index = pos.index.wrapping_add_signed(n);
    }

    #[inline]
    fn distance(&self, from: &Self::Position, to: &Self::Position) -> isize {
        to.index as isize - from.index as isize
    }
}

impl<R> MutRange for Counted<R>
where
    R: MutRange,
{
    #[inline]
    fn at_pos_mut(&mut self, pos: &Self::Position) -> &mut R::Value {
        self.base.at_pos_mut(&pos.base)
    }

    #[inline]
    fn swap_pos(&mut self, a: &Self::Position, b: &Self::Position) {
        self.base.swap_pos(&a.base, &b.base);
    }
}

impl<R> CountedRange for Counted<R>
where
    R: Range,
{
    /// Returns the declared window size.
    ///
    /// This is the element count whenever the base holds at least that many
    /// elements; a shorter base ends the range early.
    #[inline]
    fn size(&self) -> usize {
        self.count
    }

    #[inline]
    fn set_size(&mut self, n: usize) {
        self.count = n;
    }
}
