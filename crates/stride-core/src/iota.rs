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

//! # Generated Integer Sequences
//!
//! `Iota<T>` is the half-open integer interval `[start, end)` viewed as a
//! random-access range. It stores no elements: the position *is* the
//! value, and `at_pos` hands back a reference into the position itself.
//! It is the canonical example of a range that is not backed by storage.
//!
//! ```rust
//! use stride_core::iota::Iota;
//! use stride_core::range::{RandomAccessRange, Range};
//!
//! let r = Iota::new(5u32, 9);
//! let p = r.nth_pos(2);
//! assert_eq!(*r.at_pos(&p), 7);
//! assert_eq!(r.length(), 4);
//! assert_eq!(r.iter().collect::<Vec<_>>(), vec![5, 6, 7, 8]);
//! ```

use crate::category::RandomAccess;
use crate::range::{BidirectionalRange, MultiPassRange, RandomAccessRange, Range};
use num_traits::PrimInt;
use std::iter::FusedIterator;

/// Moves `pos` by `n` steps. The arithmetic runs in 128 bits, so a jump
/// wider than `T::MAX` is fine as long as the result fits in `T`.
#[inline(always)]
fn shift_value<T>(pos: T, n: usize, forward: bool) -> T
where
    T: PrimInt,
{
    let moved = match pos.to_i128() {
        Some(p) => {
            let n = n as i128;
            let wide = if forward { p.checked_add(n) } else { p.checked_sub(n) };
            wide.and_then(|v| T::from(v))
        }
        // Only unsigned values above `i128::MAX` end up here.
        None => {
            let p = pos.to_u128().unwrap_or(u128::MAX);
            let n = n as u128;
            let wide = if forward { p.checked_add(n) } else { p.checked_sub(n) };
            wide.and_then(|v| T::from(v))
        }
    };
    moved.expect("Iota: position moved outside the value type")
}

/// Number of steps from `from` to `to`, computed without overflowing `T`.
#[inline(always)]
fn value_distance<T>(from: T, to: T) -> usize
where
    T: PrimInt,
{
    debug_assert!(from <= to, "Iota: target position precedes the origin");
    let span = match (from.to_i128(), to.to_i128()) {
        (Some(f), Some(t)) => match t.checked_sub(f) {
            Some(d) => d as u128,
            // `f < 0 <= t` at the extremes of `i128`.
            None => t as u128 + f.unsigned_abs(),
        },
        _ => {
            let f = from.to_u128().unwrap_or(0);
            let t = to.to_u128().unwrap_or(u128::MAX);
            t - f
        }
    };
    usize::try_from(span).expect("Iota: distance exceeds usize::MAX")
}

/// A half-open integer interval `[start, end)` viewed as a range.
///
/// # Invariants
///
/// `start` is always less than or equal to `end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iota<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

impl<T> Iota<T>
where
    T: PrimInt,
{
    /// Creates the sequence `start, start + 1, ..., end - 1`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::iota::Iota;
    ///
    /// let r = Iota::new(0, 10);
    /// assert_eq!(r.len(), 10);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid sequence: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates the sequence if `start <= end`, otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::iota::Iota;
    ///
    /// assert!(Iota::try_new(0, 10).is_some());
    /// assert!(Iota::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Returns the first value of the sequence.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive upper bound of the sequence.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns the number of values in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        value_distance(self.start, self.end)
    }

    /// Returns `true` if the sequence has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `value` is part of the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::iota::Iota;
    ///
    /// let r = Iota::new(0, 10);
    /// assert!(r.contains(0));
    /// assert!(r.contains(9));
    /// assert!(!r.contains(10));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value < self.end
    }

    /// Returns an iterator over the values of the sequence.
    #[inline]
    pub fn iter(&self) -> IotaIter<T> {
        IotaIter {
            current: self.start,
            end: self.end,
        }
    }
}

impl<T> std::fmt::Debug for Iota<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Iota({:?}..{:?})", self.start, self.end)
    }
}

impl<T> std::fmt::Display for Iota<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<T> From<std::ops::Range<T>> for Iota<T>
where
    T: PrimInt,
{
    /// # Panics
    ///
    /// Panics if `range.start > range.end`.
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T> Range for Iota<T>
where
    T: PrimInt,
{
    type Value = T;
    type Position = T;
    type Category = RandomAccess;

    #[inline(always)]
    fn begin_pos(&self) -> T {
        self.start
    }

    #[inline(always)]
    fn is_end_pos(&self, pos: &T) -> bool {
        *pos >= self.end
    }

    #[inline(always)]
    fn inc_pos(&self, pos: &mut T) {
        *pos = *pos + T::one();
    }

    #[inline(always)]
    fn at_pos<'a>(&'a self, pos: &'a T) -> &'a T {
        pos
    }

    #[inline(always)]
    fn advance_pos(&self, pos: &mut T, n: usize) {
        *pos = shift_value(*pos, n, true);
    }
}

impl<T> MultiPassRange for Iota<T>
where
    T: PrimInt,
{
    #[inline(always)]
    fn distance_pos(&self, from: &T, to: &T) -> usize {
        value_distance(*from, *to)
    }

    #[inline(always)]
    fn end_position(&self) -> T {
        self.end
    }

    #[inline(always)]
    fn count_elements(&self) -> usize {
        self.len()
    }
}

impl<T> BidirectionalRange for Iota<T>
where
    T: PrimInt,
{
    #[inline(always)]
    fn dec_pos(&self, pos: &mut T) {
        debug_assert!(*pos > self.start, "called `dec_pos` on the begin position");
        *pos = *pos - T::one();
    }

    #[inline(always)]
    fn retreat_pos(&self, pos: &mut T, n: usize) {
        *pos = shift_value(*pos, n, false);
    }
}

impl<T> RandomAccessRange for Iota<T>
where
    T: PrimInt,
{
    #[inline(always)]
    fn offset_pos(&self, pos: &mut T, n: isize) {
        if n >= 0 {
            self.advance_pos(pos, n.unsigned_abs());
        } else {
            self.retreat_pos(pos, n.unsigned_abs());
        }
    }

    #[inline(always)]
    fn distance(&self, from: &T, to: &T) -> isize {
        if from <= to {
            value_distance(*from, *to) as isize
        } else {
            -(value_distance(*to, *from) as isize)
        }
    }

    #[inline(always)]
    fn length(&self) -> usize {
        self.len()
    }
}

/// An iterator over the values of an `Iota`.
#[derive(Debug, Clone)]
pub struct IotaIter<T>
where
    T: PrimInt,
{
    current: T,
    end: T,
}

impl<T> Iterator for IotaIter<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.end {
            let result = self.current;
            self.current = self.current + T::one();
            Some(result)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IotaIter<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current < self.end {
            self.end = self.end - T::one();
            Some(self.end)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IotaIter<T>
where
    T: PrimInt,
{
    fn len(&self) -> usize {
        if self.end <= self.current {
            return 0;
        }
        value_distance(self.current, self.end)
    }
}

impl<T> FusedIterator for IotaIter<T> where T: PrimInt {}

impl<T> IntoIterator for Iota<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IotaIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let r = Iota::new(2i64, 6);
        assert_eq!(r.start(), 2);
        assert_eq!(r.end(), 6);
        assert_eq!(r.len(), 4);
        assert!(!r.is_empty());
        assert!(Iota::new(3u8, 3).is_empty());
    }

    #[test]
    #[should_panic(expected = "Invalid sequence")]
    fn test_new_panics_on_reversed_bounds() {
        let _ = Iota::new(5, 1);
    }

    #[test]
    fn test_positions_are_values() {
        let r = Iota::new(-3i32, 3);
        let mut p = r.begin_pos();
        let mut seen = Vec::new();
        while !r.is_end_pos(&p) {
            seen.push(*r.at_pos(&p));
            r.inc_pos(&mut p);
        }
        assert_eq!(seen, vec![-3, -2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_random_access_on_unsigned() {
        let r = Iota::new(10u16, 20);
        let mut p = r.begin_pos();
        r.offset_pos(&mut p, 7);
        assert_eq!(p, 17);
        r.offset_pos(&mut p, -5);
        assert_eq!(p, 12);
        assert_eq!(r.distance(&p, &r.end_position()), 8);
        assert_eq!(r.distance(&r.end_position(), &p), -8);
        assert_eq!(r.distance_pos(&r.begin_pos(), &p), 2);
        r.dec_pos(&mut p);
        assert_eq!(p, 11);
    }

    #[test]
    fn test_signed_span_wider_than_max() {
        let r = Iota::new(-100i8, 100);
        assert_eq!(r.len(), 200);
        assert_eq!(r.count_elements(), 200);
        assert_eq!(r.length(), 200);

        let mut p = r.begin_pos();
        r.advance_pos(&mut p, 150);
        assert_eq!(p, 50);
        assert_eq!(r.distance(&r.begin_pos(), &p), 150);
        assert_eq!(r.distance(&p, &r.begin_pos()), -150);
        r.retreat_pos(&mut p, 140);
        assert_eq!(p, -90);
        assert_eq!(r.nth_pos(199), 99);
    }

    #[test]
    fn test_full_width_i32() {
        let r = Iota::new(i32::MIN, i32::MAX);
        assert_eq!(r.count_elements(), u32::MAX as usize);
        assert_eq!(r.nth_pos(u32::MAX as usize - 1), i32::MAX - 1);
        assert_eq!(r.distance_pos(&r.begin_pos(), &0), 1usize << 31);
    }

    #[test]
    fn test_extreme_widths() {
        let r = Iota::new(i128::MIN, i128::MIN + 5);
        assert_eq!(r.len(), 5);
        let r = Iota::new(u128::MAX - 3, u128::MAX);
        let mut p = r.begin_pos();
        r.advance_pos(&mut p, 2);
        assert_eq!(p, u128::MAX - 1);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn test_iterator_both_ends() {
        let mut it = Iota::new(0, 5).iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.len(), 3);
        assert_eq!(it.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_from_std_range_and_display() {
        let r: Iota<u32> = (1..4).into();
        assert_eq!(format!("{}", r), "[1, 4)");
        assert_eq!(format!("{:?}", r), "Iota(1..4)");
        assert_eq!(r.into_iter().sum::<u32>(), 6);
    }
}
