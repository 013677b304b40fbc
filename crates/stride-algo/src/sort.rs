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

//! # Sorting and Selection
//!
//! An unstable quicksort for multi-pass ranges, selection built on the same
//! partition step, and sortedness checks.
//!
//! ## Partition step
//!
//! The pivot is chosen as the median of the first, middle and last element
//! once a subrange holds at least
//! [`median_of_three_threshold`](crate::config::AlgorithmConfig::median_of_three_threshold)
//! elements, and as the middle element below that. It is swapped to the
//! front, where it stays while two forward passes split the rest into
//! `less`, `equal` and `greater` groups; finally it is swapped between the
//! first two groups. Equal keys are therefore handled in one step no matter
//! how many there are, and only forward traversal is needed.
//!
//! ## Recursion
//!
//! Only the smaller of the `less` and `greater` groups is sorted
//! recursively; the larger one is handled by the loop. Recursion depth is
//! O(log n) for every input.

use crate::config::AlgorithmConfig;
use std::cmp::Ordering;
use stride_core::range::{MultiPassRange, MutRange};

/// Result of a three-way partition of `[first, first + len)`.
struct Split<P> {
    less_len: usize,
    equal_len: usize,
    greater: P,
    greater_len: usize,
}

#[inline]
pub(crate) fn is_less<V, F>(cmp: &mut F, a: &V, b: &V) -> bool
where
    F: FnMut(&V, &V) -> Ordering,
{
    cmp(a, b) == Ordering::Less
}

fn median_of_three<R, F>(range: &R, a: R::Position, b: R::Position, c: R::Position, cmp: &mut F) -> R::Position
where
    R: MultiPassRange + ?Sized,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let (va, vb, vc) = (range.at_pos(&a), range.at_pos(&b), range.at_pos(&c));
    if is_less(cmp, va, vb) {
        if is_less(cmp, vb, vc) {
            b
        } else if is_less(cmp, va, vc) {
            c
        } else {
            a
        }
    } else if is_less(cmp, va, vc) {
        a
    } else if is_less(cmp, vb, vc) {
        c
    } else {
        b
    }
}

/// Three-way partitions `[first, first + len)`, `len >= 2`, around a pivot.
///
/// Afterwards the range holds `less_len` elements ordered before the pivot,
/// then `equal_len` elements equivalent to it, then `greater_len` elements
/// starting at `greater`.
fn partition3<R, F>(
    range: &mut R,
    first: &R::Position,
    len: usize,
    config: &AlgorithmConfig,
    cmp: &mut F,
) -> Split<R::Position>
where
    R: MultiPassRange + MutRange + ?Sized,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    debug_assert!(len >= 2);
    let mut mid = first.clone();
    range.advance_pos(&mut mid, len / 2);
    let pivot = if len >= config.median_of_three_threshold() {
        let mut last = mid.clone();
        range.advance_pos(&mut last, len - 1 - len / 2);
        median_of_three(&*range, first.clone(), mid, last, cmp)
    } else {
        mid
    };
    if pivot != *first {
        range.swap_pos(first, &pivot);
    }

    // Pass 1: elements less than the pivot to the front of the rest.
    let mut write = first.clone();
    range.inc_pos(&mut write);
    let mut read = write.clone();
    let mut last_less = None;
    let mut less_len = 0;
    for _ in 1..len {
        if is_less(cmp, range.at_pos(&read), range.at_pos(first)) {
            if write != read {
                range.swap_pos(&write, &read);
            }
            last_less = Some(write.clone());
            range.inc_pos(&mut write);
            less_len += 1;
        }
        range.inc_pos(&mut read);
    }

    // Pass 2: elements equivalent to the pivot right after them.
    let mut read = write.clone();
    let mut equal_len = 1;
    for _ in (less_len + 1)..len {
        if !is_less(cmp, range.at_pos(first), range.at_pos(&read)) {
            if write != read {
                range.swap_pos(&write, &read);
            }
            range.inc_pos(&mut write);
            equal_len += 1;
        }
        range.inc_pos(&mut read);
    }

    // The pivot closes the gap between the two groups.
    if let Some(last_less) = last_less {
        range.swap_pos(first, &last_less);
    }

    Split {
        less_len,
        equal_len,
        greater: write,
        greater_len: len - less_len - equal_len,
    }
}

pub(crate) fn quicksort<R, F>(
    range: &mut R,
    mut first: R::Position,
    mut len: usize,
    config: &AlgorithmConfig,
    cmp: &mut F,
) where
    R: MultiPassRange + MutRange + ?Sized,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    while len > 1 {
        let split = partition3(range, &first, len, config, cmp);
        if split.less_len <= split.greater_len {
            quicksort(range, first, split.less_len, config, cmp);
            first = split.greater;
            len = split.greater_len;
        } else {
            quicksort(range, split.greater, split.greater_len, config, cmp);
            len = split.less_len;
        }
    }
}

fn select<R, F>(
    range: &mut R,
    mut first: R::Position,
    mut len: usize,
    mut k: usize,
    config: &AlgorithmConfig,
    cmp: &mut F,
) where
    R: MultiPassRange + MutRange + ?Sized,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    while len > 1 {
        let split = partition3(range, &first, len, config, cmp);
        if k < split.less_len {
            len = split.less_len;
        } else if k < split.less_len + split.equal_len {
            return;
        } else {
            k -= split.less_len + split.equal_len;
            first = split.greater;
            len = split.greater_len;
        }
    }
}

/// Sorts the range in ascending order. Not stable.
///
/// # Examples
///
/// ```rust
/// # use stride_algo::sort::sort;
///
/// let mut v = vec![5, 3, 1, 4, 1, 5, 9, 2, 6];
/// sort(&mut v);
/// assert_eq!(v, vec![1, 1, 2, 3, 4, 5, 5, 6, 9]);
/// ```
#[inline]
pub fn sort<R>(range: R)
where
    R: MultiPassRange + MutRange,
    R::Value: Ord,
{
    sort_by_with(range, &AlgorithmConfig::default(), Ord::cmp);
}

/// [`sort`] with an explicit configuration.
#[inline]
pub fn sort_with<R>(range: R, config: &AlgorithmConfig)
where
    R: MultiPassRange + MutRange,
    R::Value: Ord,
{
    sort_by_with(range, config, Ord::cmp);
}

/// Sorts the range by `cmp`. Not stable.
#[inline]
pub fn sort_by<R, F>(range: R, cmp: F)
where
    R: MultiPassRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    sort_by_with(range, &AlgorithmConfig::default(), cmp);
}

/// [`sort_by`] with an explicit configuration.
pub fn sort_by_with<R, F>(mut range: R, config: &AlgorithmConfig, mut cmp: F)
where
    R: MultiPassRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let len = range.count_elements();
    log::trace!(
        "sort: quicksort over {} elements, median-of-three from {}",
        len,
        config.median_of_three_threshold()
    );
    let first = range.begin_pos();
    quicksort(&mut range, first, len, config, &mut cmp);
}

/// Sorts the range by the key `f` extracts. Not stable.
#[inline]
pub fn sort_by_key<R, K, F>(range: R, f: F)
where
    R: MultiPassRange + MutRange,
    K: Ord,
    F: FnMut(&R::Value) -> K,
{
    sort_by_key_with(range, &AlgorithmConfig::default(), f);
}

/// [`sort_by_key`] with an explicit configuration.
#[inline]
pub fn sort_by_key_with<R, K, F>(range: R, config: &AlgorithmConfig, mut f: F)
where
    R: MultiPassRange + MutRange,
    K: Ord,
    F: FnMut(&R::Value) -> K,
{
    sort_by_with(range, config, |a, b| f(a).cmp(&f(b)));
}

/// Rearranges the range so that the element at `nth` is the one a full sort
/// would put there, with no greater element before it and no smaller one
/// after it.
#[inline]
pub fn nth_element<R>(range: R, nth: R::Position)
where
    R: MultiPassRange + MutRange,
    R::Value: Ord,
{
    nth_element_by_with(range, nth, &AlgorithmConfig::default(), Ord::cmp);
}

/// [`nth_element`] ordered by `cmp`.
#[inline]
pub fn nth_element_by<R, F>(range: R, nth: R::Position, cmp: F)
where
    R: MultiPassRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    nth_element_by_with(range, nth, &AlgorithmConfig::default(), cmp);
}

/// [`nth_element_by`] with an explicit configuration.
pub fn nth_element_by_with<R, F>(mut range: R, nth: R::Position, config: &AlgorithmConfig, mut cmp: F)
where
    R: MultiPassRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    if range.is_end_pos(&nth) {
        return;
    }
    let first = range.begin_pos();
    let k = range.distance_pos(&first, &nth);
    let len = range.count_elements();
    select(&mut range, first, len, k, config, &mut cmp);
}

/// Sorts the elements before `middle` so they are the smallest of the range
/// in ascending order. The order of the rest is unspecified.
#[inline]
pub fn partial_sort<R>(range: R, middle: R::Position)
where
    R: MultiPassRange + MutRange,
    R::Value: Ord,
{
    partial_sort_by(range, middle, Ord::cmp);
}

/// [`partial_sort`] ordered by `cmp`.
pub fn partial_sort_by<R, F>(mut range: R, middle: R::Position, mut cmp: F)
where
    R: MultiPassRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let config = AlgorithmConfig::default();
    let first = range.begin_pos();
    let k = range.distance_pos(&first, &middle);
    let len = range.count_elements();
    if k < len {
        select(&mut range, first.clone(), len, k, &config, &mut cmp);
    }
    quicksort(&mut range, first, k.min(len), &config, &mut cmp);
}

/// Returns `true` if the range is in ascending order.
#[inline]
pub fn is_sorted<R>(range: R) -> bool
where
    R: MultiPassRange,
    R::Value: Ord,
{
    is_sorted_by(range, Ord::cmp)
}

/// Returns `true` if the range is ordered by `cmp`.
#[inline]
pub fn is_sorted_by<R, F>(range: R, cmp: F) -> bool
where
    R: MultiPassRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let until = is_sorted_until_by(&range, cmp);
    range.is_end_pos(&until)
}

/// Returns the first position whose element is less than its predecessor,
/// or the end.
#[inline]
pub fn is_sorted_until<R>(range: R) -> R::Position
where
    R: MultiPassRange,
    R::Value: Ord,
{
    is_sorted_until_by(range, Ord::cmp)
}

/// [`is_sorted_until`] ordered by `cmp`.
pub fn is_sorted_until_by<R, F>(range: R, mut cmp: F) -> R::Position
where
    R: MultiPassRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut prev = range.begin_pos();
    if range.is_end_pos(&prev) {
        return prev;
    }
    let mut next = prev.clone();
    range.inc_pos(&mut next);
    while !range.is_end_pos(&next) {
        if is_less(&mut cmp, range.at_pos(&next), range.at_pos(&prev)) {
            return next;
        }
        prev = next.clone();
        range.inc_pos(&mut next);
    }
    next
}
