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

//! # Partitioning
//!
//! `partition` picks its strategy from the range's category at compile
//! time. The strategies are implementations of [`PartitionStrategy`] on the
//! category marker types, parameterized by the range, so each one can demand
//! exactly the traversal it needs:
//!
//! - `MultiPass`: one forward scan swapping out-of-place elements to the
//!   front (Lomuto style).
//! - `Bidirectional` and `RandomAccess`: two positions closing in from both
//!   ends (Hoare style), which performs at most half as many swaps.
//!
//! Neither is stable; see [`stable_partition`](crate::stable::stable_partition)
//! for the order-preserving variant.

use crate::search::find_if_not;
use stride_core::category::{Bidirectional, MultiPass, RandomAccess};
use stride_core::range::{BidirectionalRange, MultiPassRange, MutRange, Range};

/// A partition strategy for ranges of one category.
pub trait PartitionStrategy<R>
where
    R: MultiPassRange + MutRange,
{
    /// Moves the elements satisfying `pred` in front of the others and
    /// returns the first position of the second group.
    fn partition<P>(range: &mut R, pred: P) -> R::Position
    where
        P: FnMut(&R::Value) -> bool;
}

/// Forward scan.
impl<R> PartitionStrategy<R> for MultiPass
where
    R: MultiPassRange + MutRange,
{
    fn partition<P>(range: &mut R, mut pred: P) -> R::Position
    where
        P: FnMut(&R::Value) -> bool,
    {
        log::trace!("partition: forward strategy");
        forward_partition(range, &mut pred)
    }
}

impl<R> PartitionStrategy<R> for Bidirectional
where
    R: BidirectionalRange + MutRange,
{
    fn partition<P>(range: &mut R, mut pred: P) -> R::Position
    where
        P: FnMut(&R::Value) -> bool,
    {
        log::trace!("partition: two-ended strategy");
        two_ended_partition(range, &mut pred)
    }
}

impl<R> PartitionStrategy<R> for RandomAccess
where
    R: BidirectionalRange + MutRange,
{
    fn partition<P>(range: &mut R, mut pred: P) -> R::Position
    where
        P: FnMut(&R::Value) -> bool,
    {
        log::trace!("partition: two-ended strategy");
        two_ended_partition(range, &mut pred)
    }
}

fn forward_partition<R, P>(range: &mut R, pred: &mut P) -> R::Position
where
    R: MultiPassRange + MutRange + ?Sized,
    P: FnMut(&R::Value) -> bool,
{
    let mut first = find_if_not(&*range, &mut *pred);
    if range.is_end_pos(&first) {
        return first;
    }
    let mut next = first.clone();
    range.inc_pos(&mut next);
    while !range.is_end_pos(&next) {
        if pred(range.at_pos(&next)) {
            range.swap_pos(&first, &next);
            range.inc_pos(&mut first);
        }
        range.inc_pos(&mut next);
    }
    first
}

fn two_ended_partition<R, P>(range: &mut R, pred: &mut P) -> R::Position
where
    R: BidirectionalRange + MutRange + ?Sized,
    P: FnMut(&R::Value) -> bool,
{
    let mut first = range.begin_pos();
    let mut last = range.end_position();
    loop {
        loop {
            if first == last {
                return first;
            }
            if !pred(range.at_pos(&first)) {
                break;
            }
            range.inc_pos(&mut first);
        }
        loop {
            range.dec_pos(&mut last);
            if first == last {
                return first;
            }
            if pred(range.at_pos(&last)) {
                break;
            }
        }
        range.swap_pos(&first, &last);
        range.inc_pos(&mut first);
    }
}

/// Moves the elements satisfying `pred` in front of the others and returns
/// the first position of the second group. Relative order is not kept.
///
/// # Examples
///
/// ```rust
/// # use stride_algo::partition::{is_partitioned, partition};
///
/// let mut v = vec![1, 2, 3, 4, 5, 6];
/// let split = partition(&mut v, |x| x % 2 == 0);
/// assert_eq!(split.get(), 3);
/// assert!(is_partitioned(&v, |x| x % 2 == 0));
/// ```
#[inline]
pub fn partition<R, P>(mut range: R, pred: P) -> R::Position
where
    R: MultiPassRange + MutRange,
    R::Category: PartitionStrategy<R>,
    P: FnMut(&R::Value) -> bool,
{
    <R::Category as PartitionStrategy<R>>::partition(&mut range, pred)
}

/// Returns `true` if every element satisfying `pred` precedes every element
/// that does not.
pub fn is_partitioned<R, P>(range: R, mut pred: P) -> bool
where
    R: Range,
    P: FnMut(&R::Value) -> bool,
{
    let mut pos = range.begin_pos();
    while !range.is_end_pos(&pos) && pred(range.at_pos(&pos)) {
        range.inc_pos(&mut pos);
    }
    while !range.is_end_pos(&pos) {
        if pred(range.at_pos(&pos)) {
            return false;
        }
        range.inc_pos(&mut pos);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{BidiVec, ForwardVec};
    use stride_adapt::ext::RangeExt;
    use stride_core::range::RandomAccessRange;

    fn sorted(mut v: Vec<i32>) -> Vec<i32> {
        v.sort();
        v
    }

    #[test]
    fn test_random_access_partition() {
        let mut v = vec![1, 2, 3, 4, 5, 6, 7];
        let split = partition(&mut v, |x| x % 3 == 0);
        assert_eq!(split.get(), 2);
        assert!(is_partitioned(&v, |x| x % 3 == 0));
        assert_eq!(sorted(v), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_forward_partition() {
        let mut f = ForwardVec::new(vec![5, 2, 8, 1, 4, 7]);
        let split = partition(&mut f, |x| *x < 5);
        assert_eq!(split, 3);
        assert!(is_partitioned(&f, |x| *x < 5));
        assert_eq!(sorted(f.data), vec![1, 2, 4, 5, 7, 8]);
    }

    #[test]
    fn test_bidirectional_partition() {
        let mut b = BidiVec::new(vec![9, 8, 7, 1, 2, 3]);
        let split = partition(&mut b, |x| *x < 5);
        assert_eq!(split, 3);
        assert!(is_partitioned(&b, |x| *x < 5));
    }

    #[test]
    fn test_degenerate_inputs() {
        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(partition(&mut empty, |_| true).get(), 0);

        let mut all = vec![2, 4];
        assert_eq!(partition(&mut all, |x| x % 2 == 0).get(), 2);
        let mut none = ForwardVec::new(vec![1, 3]);
        assert_eq!(partition(&mut none, |x| x % 2 == 0), 0);
    }

    #[test]
    fn test_partition_window() {
        let mut v = vec![0, 9, 1, 8, 2, 0];
        let (b, e) = (v.nth_pos(1), v.nth_pos(5));
        let split = partition((&mut v).sub_range(b, e), |x| *x < 5);
        assert_eq!(split.get(), 3);
        assert_eq!(v[0], 0);
        assert_eq!(v[5], 0);
        assert!(is_partitioned(&v[1..5], |x| *x < 5));
    }

    #[test]
    fn test_is_partitioned() {
        assert!(is_partitioned(&[2, 4, 1, 3], |x| x % 2 == 0));
        assert!(!is_partitioned(&[2, 1, 4], |x| x % 2 == 0));
        assert!(is_partitioned(&[0u8; 0], |_| false));
    }
}
