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

//! # Delegated Termination
//!
//! `Delegated<R, F>` ends where a caller-supplied predicate says so (or at
//! the base's own end, whichever comes first). The predicate sees the base
//! range and a position, so it can look at the element, at the position
//! itself, or at both. A NUL-terminated buffer is
//! `Delegated::new(&buf, |r, p| *r.at_pos(p) == 0)`.
//!
//! Nothing is cached: computing the end position or the length walks the
//! range and evaluates the predicate once per position.

use stride_core::range::{
    BidirectionalRange, MultiPassRange, MutRange, RandomAccessRange, Range,
};

/// A base range whose end is decided by a predicate.
#[derive(Clone)]
pub struct Delegated<R, F> {
    base: R,
    is_end: F,
}

impl<R, F> std::fmt::Debug for Delegated<R, F>
where
    R: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Delegated")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl<R, F> Delegated<R, F>
where
    R: Range,
    F: Fn(&R, &R::Position) -> bool,
{
    /// Creates a range over `base` that ends at the first position for which
    /// `is_end` returns `true`.
    #[inline]
    pub fn new(base: R, is_end: F) -> Self {
        Self { base, is_end }
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

impl<R, F> Range for Delegated<R, F>
where
    R: Range,
    F: Fn(&R, &R::Position) -> bool,
{
    type Value = R::Value;
    type Position = R::Position;
    type Category = R::Category;

    #[inline]
    fn begin_pos(&self) -> R::Position {
        self.base.begin_pos()
    }

    #[inline]
    fn is_end_pos(&self, pos: &R::Position) -> bool {
        self.base.is_end_pos(pos) || (self.is_end)(&self.base, pos)
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

// `end_position` and `count_elements` keep their walking defaults: the
// base's answers ignore the predicate.
impl<R, F> MultiPassRange for Delegated<R, F>
where
    R: MultiPassRange,
    F: Fn(&R, &R::Position) -> bool,
{
    #[inline]
    fn distance_pos(&self, from: &R::Position, to: &R::Position) -> usize {
        self.base.distance_pos(from, to)
    }
}

impl<R, F> BidirectionalRange for Delegated<R, F>
where
    R: BidirectionalRange,
    F: Fn(&R, &R::Position) -> bool,
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

impl<R, F> RandomAccessRange for Delegated<R, F>
where
    R: RandomAccessRange,
    F: Fn(&R, &R::Position) -> bool,
{
    #[inline]
    fn offset_pos(&self, pos: &mut R::Position, n: isize) {
        self.base.offset_pos(pos, n);
    }

    #[inline]
    fn distance(&self, from: &R::Position, to: &R::Position) -> isize {
        self.base.distance(from, to)
    }
}

impl<R, F> MutRange for Delegated<R, F>
where
    R: MutRange,
    F: Fn(&R, &R::Position) -> bool,
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
