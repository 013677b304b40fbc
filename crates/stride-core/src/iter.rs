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

//! # Iterator Bridges
//!
//! Ranges and `std` iterators serve different audiences: algorithms in this
//! workspace speak positions, the rest of the Rust ecosystem speaks
//! `Iterator`. The adapters here convert in the range-to-iterator direction.
//!
//! - `Values<R>` yields clones of the elements of any range (single-pass
//!   included), so a range can be `collect`ed or fed into iterator chains.
//! - `Positions<'a, R>` yields the positions of a multi-pass range, which is
//!   handy when an algorithm needs to remember where every element lives.
//!
//! Both adapters are fused: once the end position is reached they keep
//! returning `None`.
//!
//! ```rust
//! use stride_core::iter::{positions, values};
//!
//! let v = vec![3, 1, 2];
//! assert_eq!(values(&v).collect::<Vec<_>>(), vec![3, 1, 2]);
//! assert_eq!(positions(&v).map(|p| p.get()).collect::<Vec<_>>(), vec![0, 1, 2]);
//! ```

use crate::range::{MultiPassRange, Range};
use std::iter::FusedIterator;

/// An iterator yielding clones of the elements of a range.
#[derive(Debug, Clone)]
pub struct Values<R>
where
    R: Range,
{
    range: R,
    pos: R::Position,
}

impl<R> Values<R>
where
    R: Range,
{
    /// Creates an iterator starting at the beginning of `range`.
    #[inline]
    pub fn new(range: R) -> Self {
        let pos = range.begin_pos();
        Self { range, pos }
    }

    /// Creates an iterator starting at `pos`.
    #[inline]
    pub fn from_pos(range: R, pos: R::Position) -> Self {
        Self { range, pos }
    }

    /// Returns the current position of the iterator.
    #[inline]
    pub fn position(&self) -> &R::Position {
        &self.pos
    }

    /// Consumes the iterator, returning the range and the current position.
    #[inline]
    pub fn into_parts(self) -> (R, R::Position) {
        (self.range, self.pos)
    }
}

impl<R> Iterator for Values<R>
where
    R: Range,
    R::Value: Clone,
{
    type Item = R::Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.range.is_end_pos(&self.pos) {
            return None;
        }
        let value = self.range.at_pos(&self.pos).clone();
        self.range.inc_pos(&mut self.pos);
        Some(value)
    }
}

impl<R> FusedIterator for Values<R>
where
    R: Range,
    R::Value: Clone,
{
}

/// Returns an iterator over clones of the elements of `range`.
#[inline]
pub fn values<R>(range: R) -> Values<R>
where
    R: Range,
{
    Values::new(range)
}

/// An iterator yielding every position of a multi-pass range, front to back.
#[derive(Debug)]
pub struct Positions<'a, R>
where
    R: MultiPassRange + ?Sized,
{
    range: &'a R,
    pos: R::Position,
}

impl<R> Clone for Positions<'_, R>
where
    R: MultiPassRange + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            range: self.range,
            pos: self.pos.clone(),
        }
    }
}

impl<R> Iterator for Positions<'_, R>
where
    R: MultiPassRange + ?Sized,
{
    type Item = R::Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.range.is_end_pos(&self.pos) {
            return None;
        }
        let current = self.pos.clone();
        self.range.inc_pos(&mut self.pos);
        Some(current)
    }
}

impl<R> FusedIterator for Positions<'_, R> where R: MultiPassRange + ?Sized {}

/// Returns an iterator over the positions of `range`.
#[inline]
pub fn positions<R>(range: &R) -> Positions<'_, R>
where
    R: MultiPassRange + ?Sized,
{
    Positions {
        range,
        pos: range.begin_pos(),
    }
}

/// Returns an iterator over the positions from `first` up to the end of `range`.
#[inline]
pub fn positions_from<R>(range: &R, first: R::Position) -> Positions<'_, R>
where
    R: MultiPassRange + ?Sized,
{
    Positions { range, pos: first }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iota::Iota;
    use crate::range::RandomAccessRange;
    use std::iter::FusedIterator;

    #[test]
    fn test_values_from_slice() {
        let data = [1, 2, 3];
        let mut it = values(&data[..]);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_values_from_generated_sequence() {
        let total: u64 = values(Iota::new(1u64, 101)).sum();
        assert_eq!(total, 5050);
    }

    #[test]
    fn test_values_resume_and_into_parts() {
        let v = vec!['a', 'b', 'c'];
        let mut it = Values::from_pos(&v, v.nth_pos(1));
        assert_eq!(it.next(), Some('b'));
        let (_, pos) = it.into_parts();
        assert_eq!(pos.get(), 2);
    }

    #[test]
    fn test_positions_cover_range() {
        let v = vec![5, 6, 7, 8];
        let ps: Vec<_> = positions(&v).collect();
        assert_eq!(ps.len(), 4);
        assert_eq!(ps[3].get(), 3);
        let tail: Vec<_> = positions_from(&v, ps[2]).map(|p| v[p.get()]).collect();
        assert_eq!(tail, vec![7, 8]);
    }

    #[test]
    fn test_fused() {
        fn assert_fused<I: FusedIterator>(_: &I) {}
        let v = vec![1];
        let mut it = values(&v);
        assert_fused(&it);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
