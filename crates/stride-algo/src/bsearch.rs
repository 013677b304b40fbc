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

//! # Binary Search
//!
//! Bisection over multi-pass ranges whose elements are partitioned by the
//! search predicate (for the bound searches: sorted by the comparator).
//!
//! The search halves an element *count*, never a pair of positions, so it
//! needs nothing beyond `advance_pos`. Random-access ranges override that
//! with a constant-time jump and get O(log n) overall; other multi-pass
//! ranges walk O(n) positions but still perform only O(log n) comparisons.

use std::cmp::Ordering;
use stride_core::range::MultiPassRange;

/// Returns the first position in `[first, first + len)` whose element does
/// not satisfy `pred`.
pub(crate) fn partition_point_n<R, P>(
    range: &R,
    mut first: R::Position,
    mut len: usize,
    mut pred: P,
) -> R::Position
where
    R: MultiPassRange + ?Sized,
    P: FnMut(&R::Value) -> bool,
{
    while len > 0 {
        let half = len >> 1;
        let mut mid = first.clone();
        range.advance_pos(&mut mid, half);
        if pred(range.at_pos(&mid)) {
            range.inc_pos(&mut mid);
            first = mid;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    first
}

/// Returns the first position whose element does not satisfy `pred`.
///
/// `range` must be partitioned: every element satisfying `pred` precedes
/// every element that does not.
///
/// # Examples
///
/// ```rust
/// # use stride_algo::bsearch::partition_point;
///
/// let v = [2, 4, 6, 1, 3];
/// assert_eq!(partition_point(&v, |x| x % 2 == 0).get(), 3);
/// ```
#[inline]
pub fn partition_point<R, P>(range: R, pred: P) -> R::Position
where
    R: MultiPassRange,
    P: FnMut(&R::Value) -> bool,
{
    let len = range.count_elements();
    partition_point_n(&range, range.begin_pos(), len, pred)
}

/// Returns the first position whose element is not less than `value`.
#[inline]
pub fn lower_bound<R>(range: R, value: &R::Value) -> R::Position
where
    R: MultiPassRange,
    R::Value: Ord,
{
    lower_bound_by(range, value, Ord::cmp)
}

/// [`lower_bound`] ordered by `cmp`.
#[inline]
pub fn lower_bound_by<R, F>(range: R, value: &R::Value, mut cmp: F) -> R::Position
where
    R: MultiPassRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    partition_point(range, |x| cmp(x, value) == Ordering::Less)
}

/// [`lower_bound`] over keys extracted by `f`.
#[inline]
pub fn lower_bound_by_key<R, K, F>(range: R, key: &K, mut f: F) -> R::Position
where
    R: MultiPassRange,
    K: Ord,
    F: FnMut(&R::Value) -> K,
{
    partition_point(range, |x| f(x) < *key)
}

/// Returns the first position whose element is greater than `value`.
#[inline]
pub fn upper_bound<R>(range: R, value: &R::Value) -> R::Position
where
    R: MultiPassRange,
    R::Value: Ord,
{
    upper_bound_by(range, value, Ord::cmp)
}

/// [`upper_bound`] ordered by `cmp`.
#[inline]
pub fn upper_bound_by<R, F>(range: R, value: &R::Value, mut cmp: F) -> R::Position
where
    R: MultiPassRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    partition_point(range, |x| cmp(value, x) != Ordering::Less)
}

/// [`upper_bound`] over keys extracted by `f`.
#[inline]
pub fn upper_bound_by_key<R, K, F>(range: R, key: &K, mut f: F) -> R::Position
where
    R: MultiPassRange,
    K: Ord,
    F: FnMut(&R::Value) -> K,
{
    partition_point(range, |x| f(x) <= *key)
}

/// Returns `(lower_bound, upper_bound)` for `value` in one descent.
#[inline]
pub fn equal_range<R>(range: R, value: &R::Value) -> (R::Position, R::Position)
where
    R: MultiPassRange,
    R::Value: Ord,
{
    equal_range_by(range, value, Ord::cmp)
}

/// [`equal_range`] ordered by `cmp`.
pub fn equal_range_by<R, F>(range: R, value: &R::Value, mut cmp: F) -> (R::Position, R::Position)
where
    R: MultiPassRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut first = range.begin_pos();
    let mut len = range.count_elements();
    while len > 0 {
        let half = len >> 1;
        let mut mid = first.clone();
        range.advance_pos(&mut mid, half);
        if cmp(range.at_pos(&mid), value) == Ordering::Less {
            range.inc_pos(&mut mid);
            first = mid;
            len -= half + 1;
        } else if cmp(value, range.at_pos(&mid)) == Ordering::Less {
            len = half;
        } else {
            let lower = partition_point_n(&range, first, half, |x| {
                cmp(x, value) == Ordering::Less
            });
            let mut after_mid = mid;
            range.inc_pos(&mut after_mid);
            let upper = partition_point_n(&range, after_mid, len - half - 1, |x| {
                cmp(value, x) != Ordering::Less
            });
            return (lower, upper);
        }
    }
    (first.clone(), first)
}

/// Searches a sorted range for `value`.
///
/// Returns `Ok` with the position of a matching element, or `Err` with the
/// position where `value` could be inserted to keep the range sorted.
#[inline]
pub fn binary_search<R>(range: R, value: &R::Value) -> Result<R::Position, R::Position>
where
    R: MultiPassRange,
    R::Value: Ord,
{
    binary_search_by(range, |x| x.cmp(value))
}

/// Searches a range sorted consistently with `f`, which reports how an
/// element orders relative to the target.
///
/// On success the returned position is the first matching element.
pub fn binary_search_by<R, F>(range: R, mut f: F) -> Result<R::Position, R::Position>
where
    R: MultiPassRange,
    F: FnMut(&R::Value) -> Ordering,
{
    let len = range.count_elements();
    let pos = partition_point_n(&range, range.begin_pos(), len, |x| f(x) == Ordering::Less);
    if !range.is_end_pos(&pos) && f(range.at_pos(&pos)) == Ordering::Equal {
        Ok(pos)
    } else {
        Err(pos)
    }
}

/// [`binary_search`] over keys extracted by `f`.
#[inline]
pub fn binary_search_by_key<R, K, F>(range: R, key: &K, mut f: F) -> Result<R::Position, R::Position>
where
    R: MultiPassRange,
    K: Ord,
    F: FnMut(&R::Value) -> K,
{
    binary_search_by(range, |x| f(x).cmp(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ForwardVec;
    use stride_core::iota::Iota;
    use stride_core::position::SlicePos;

    #[test]
    fn test_bounds_on_slice() {
        let v = [1, 3, 3, 5, 7];
        assert_eq!(lower_bound(&v, &3).get(), 1);
        assert_eq!(upper_bound(&v, &3).get(), 3);
        assert_eq!(lower_bound(&v, &0).get(), 0);
        assert_eq!(upper_bound(&v, &7).get(), 5);
        assert_eq!(lower_bound(&v, &4).get(), 3);
    }

    #[test]
    fn test_bounds_on_forward_range() {
        let v = ForwardVec::new(vec![1, 3, 3, 5, 7]);
        assert_eq!(lower_bound(&v, &3), 1);
        assert_eq!(upper_bound(&v, &3), 3);
        assert_eq!(equal_range(&v, &5), (3, 4));
        assert_eq!(binary_search(&v, &6), Err(4));
    }

    #[test]
    fn test_equal_range() {
        let v = vec![1, 2, 2, 2, 3, 4];
        let (lo, hi) = equal_range(&v, &2);
        assert_eq!((lo.get(), hi.get()), (1, 4));
        let (lo, hi) = equal_range(&v, &9);
        assert_eq!((lo.get(), hi.get()), (6, 6));
        let empty: Vec<i32> = Vec::new();
        let (lo, hi) = equal_range(&empty, &1);
        assert_eq!(lo, hi);
    }

    #[test]
    fn test_binary_search_finds_first_match() {
        let v = [1, 2, 2, 2, 3];
        assert_eq!(binary_search(&v, &2), Ok(SlicePos::new(1)));
        assert_eq!(binary_search(&v, &0), Err(SlicePos::new(0)));
        assert_eq!(binary_search(&v, &4), Err(SlicePos::new(5)));
    }

    #[test]
    fn test_by_key_variants() {
        let people = [("ann", 21), ("bob", 30), ("cid", 30), ("dan", 44)];
        assert_eq!(lower_bound_by_key(&people, &30, |p| p.1).get(), 1);
        assert_eq!(upper_bound_by_key(&people, &30, |p| p.1).get(), 3);
        assert_eq!(binary_search_by_key(&people, &44, |p| p.1).map(|p| p.get()), Ok(3));
    }

    #[test]
    fn test_descending_comparator() {
        let v = [9, 7, 7, 2];
        let desc = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(lower_bound_by(&v, &7, desc).get(), 1);
        assert_eq!(upper_bound_by(&v, &7, desc).get(), 3);
    }

    #[test]
    fn test_partition_point_on_generated_range() {
        let r = Iota::new(0u64, 1_000_000);
        assert_eq!(partition_point(r, |x| x * x < 500_000), 708);
    }
}
