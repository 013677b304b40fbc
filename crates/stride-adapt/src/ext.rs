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

//! Builder methods that wrap a range in an adapter.
//!
//! `RangeExt` is implemented for every sized range, so adapters compose by
//! chaining: `(&mut v).sub_range(b, e).reversed()`.

use crate::counted::Counted;
use crate::delegated::Delegated;
use crate::delimited::Delimited;
use crate::reverse::Reverse;
use crate::subrange::SubRange;
use stride_core::range::{BidirectionalRange, MultiPassRange, Range};

/// Adapter constructors available on every range.
pub trait RangeExt: Range + Sized {
    /// The window `[begin, end)` of this range.
    #[inline]
    fn sub_range(self, begin: Self::Position, end: Self::Position) -> SubRange<Self>
    where
        Self: MultiPassRange,
    {
        SubRange::new(self, begin, end)
    }

    /// Everything from `begin` to the end of this range.
    #[inline]
    fn tail_from(self, begin: Self::Position) -> SubRange<Self>
    where
        Self: MultiPassRange,
    {
        SubRange::from_pos(self, begin)
    }

    /// Everything from the begin of this range up to `end`.
    #[inline]
    fn delimited(self, end: Self::Position) -> Delimited<Self>
    where
        Self: MultiPassRange,
    {
        Delimited::new(self, end)
    }

    /// The first `n` elements.
    #[inline]
    fn counted(self, n: usize) -> Counted<Self> {
        Counted::new(self, n)
    }

    /// The `n` elements starting at `begin`.
    #[inline]
    fn counted_from(self, begin: Self::Position, n: usize) -> Counted<SubRange<Self>>
    where
        Self: MultiPassRange,
    {
        Counted::new(SubRange::from_pos(self, begin), n)
    }

    /// This range, ending at the first position where `is_end` holds.
    #[inline]
    fn delegated<F>(self, is_end: F) -> Delegated<Self, F>
    where
        F: Fn(&Self, &Self::Position) -> bool,
    {
        Delegated::new(self, is_end)
    }

    /// This range, traversed back to front.
    #[inline]
    fn reversed(self) -> Reverse<Self>
    where
        Self: BidirectionalRange,
    {
        Reverse::new(self)
    }
}

impl<R> RangeExt for R where R: Range {}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::iter::values;
    use stride_core::position::SlicePos;
    use stride_core::range::{
        CountedRange, DelimitedRange, RandomAccessRange, is_counted, is_delimited,
    };

    type Window = SubRange<&'static Vec<i32>>;
    type Cutoff = fn(&Window, &SlicePos) -> bool;

    fn delimited_by_impl<R: DelimitedRange>() -> bool {
        is_delimited::<R>()
    }

    fn counted_by_impl<R: CountedRange>() -> bool {
        is_counted::<R>()
    }

    #[test]
    fn test_capability_queries_match_impls() {
        assert!(delimited_by_impl::<Window>());
        assert!(counted_by_impl::<Window>());
        assert!(delimited_by_impl::<&mut Window>());
        assert!(counted_by_impl::<&mut Window>());
        assert!(!is_delimited::<&Window>());
        assert!(!is_counted::<&Window>());

        assert!(delimited_by_impl::<Delimited<Window>>());
        assert!(!is_counted::<Delimited<Window>>());
        assert!(counted_by_impl::<Counted<Window>>());
        assert!(!is_delimited::<Counted<Window>>());
        assert!(!is_delimited::<Reverse<Window>>());
        assert!(!is_counted::<Reverse<Window>>());
        assert!(!is_delimited::<Delegated<Window, Cutoff>>());
        assert!(!is_counted::<Delegated<Window, Cutoff>>());
    }

    #[test]
    fn test_chained_adapters() {
        let v = vec![1, 2, 3, 4, 5, 6];
        let w = (&v).sub_range(v.nth_pos(1), v.nth_pos(5)).reversed();
        assert_eq!(values(&w).collect::<Vec<_>>(), vec![5, 4, 3, 2]);
    }

    #[test]
    fn test_counted_from_middle() {
        let v = vec![1, 2, 3, 4, 5, 6];
        let mut c = (&v).counted_from(v.nth_pos(2), 2);
        assert_eq!(values(&c).collect::<Vec<_>>(), vec![3, 4]);
        c.set_size(10);
        assert_eq!(values(&c).collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_tail_and_prefix() {
        let v = [9, 8, 7];
        assert_eq!(values((&v).tail_from(v.nth_pos(1))).collect::<Vec<_>>(), vec![8, 7]);
        assert_eq!(values((&v).delimited(v.nth_pos(1))).collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn test_delegated_then_counted() {
        let v = vec![2, 4, 6, 7, 8];
        let r = (&v).delegated(|r, p| *r.at_pos(p) % 2 == 1).counted(2);
        assert_eq!(values(&r).collect::<Vec<_>>(), vec![2, 4]);
    }
}
