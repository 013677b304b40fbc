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

//! # Order-Preserving Algorithms
//!
//! `stable_sort`, `stable_partition` and `inplace_merge` each have two
//! strategies that produce identical results:
//!
//! - **Buffered**: record the positions of the range, compute the final
//!   arrangement as a permutation of indices (insertion-sorted runs merged
//!   bottom-up for the sort), then apply it with swaps. O(n log n)
//!   comparisons for the sort, O(n) for the other two.
//! - **In place**: divide and conquer with rotations. Merging splits the
//!   longer half at its midpoint, binary-searches the cut in the other half
//!   and rotates the middle pieces. O(n log² n) for the sort.
//!
//! The buffered strategy is used whenever the configured
//! [`ScratchPolicy`](crate::config::ScratchPolicy) allows it and the
//! allocation succeeds; otherwise the in-place strategy runs and a `debug`
//! message records why.

use crate::bsearch::partition_point_n;
use crate::config::AlgorithmConfig;
use crate::copy::rotate_positions;
use crate::scratch::{IndexBuf, apply_permutation, record_positions, reserve_indices};
use crate::sort::is_less;
use std::cmp::Ordering;
use stride_core::range::{MultiPassRange, MutRange};

fn insertion_sort_indices<R, F>(range: &R, positions: &[R::Position], run: &mut [usize], cmp: &mut F)
where
    R: MultiPassRange + ?Sized,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    for i in 1..run.len() {
        let mut j = i;
        while j > 0
            && is_less(
                cmp,
                range.at_pos(&positions[run[j]]),
                range.at_pos(&positions[run[j - 1]]),
            )
        {
            run.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Merges two index runs into `out`, taking from `left` on ties.
fn merge_indices<R, F>(
    range: &R,
    positions: &[R::Position],
    left: &[usize],
    right: &[usize],
    out: &mut IndexBuf,
    cmp: &mut F,
) where
    R: MultiPassRange + ?Sized,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if is_less(
            cmp,
            range.at_pos(&positions[right[j]]),
            range.at_pos(&positions[left[i]]),
        ) {
            out.push(right[j]);
            j += 1;
        } else {
            out.push(left[i]);
            i += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}

fn stable_sort_buffered<R, F>(
    range: &mut R,
    first: &R::Position,
    len: usize,
    config: &AlgorithmConfig,
    cmp: &mut F,
) -> bool
where
    R: MultiPassRange + MutRange + ?Sized,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let Some(positions) = record_positions(&*range, first, len, config, "stable_sort") else {
        return false;
    };
    let Some(mut order) = reserve_indices(config, len, "stable_sort") else {
        return false;
    };
    let Some(mut merged) = reserve_indices(config, len, "stable_sort") else {
        return false;
    };
    log::trace!("stable_sort: buffered merge over {} elements", len);

    order.extend(0..len);
    let run_len = config.insertion_run_len().max(1);
    for run in order.chunks_mut(run_len) {
        insertion_sort_indices(&*range, &positions, run, cmp);
    }
    let mut width = run_len;
    while width < len {
        merged.clear();
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge_indices(&*range, &positions, &order[start..mid], &order[mid..end], &mut merged, cmp);
            start = end;
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }
    apply_permutation(range, &positions, &order);
    true
}

/// Stable merge of the adjacent sorted runs `[first, middle)` (`len1`
/// elements) and `[middle, middle + len2)` without extra memory.
pub(crate) fn merge_without_buffer<R, F>(
    range: &mut R,
    first: R::Position,
    middle: R::Position,
    len1: usize,
    len2: usize,
    cmp: &mut F,
) where
    R: MultiPassRange + MutRange + ?Sized,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    if len1 == 0 || len2 == 0 {
        return;
    }
    if len1 + len2 == 2 {
        if is_less(cmp, range.at_pos(&middle), range.at_pos(&first)) {
            range.swap_pos(&first, &middle);
        }
        return;
    }
    let (first_cut, second_cut, len11, len22);
    if len1 > len2 {
        len11 = len1 / 2;
        let mut cut = first.clone();
        range.advance_pos(&mut cut, len11);
        let key = range.at_pos(&cut);
        second_cut = partition_point_n(&*range, middle.clone(), len2, |x| is_less(cmp, x, key));
        len22 = range.distance_pos(&middle, &second_cut);
        first_cut = cut;
    } else {
        len22 = len2 / 2;
        let mut cut = middle.clone();
        range.advance_pos(&mut cut, len22);
        let key = range.at_pos(&cut);
        first_cut = partition_point_n(&*range, first.clone(), len1, |x| !is_less(cmp, key, x));
        len11 = range.distance_pos(&first, &first_cut);
        second_cut = cut;
    }
    let new_middle = rotate_positions(range, first_cut.clone(), middle, second_cut.clone());
    merge_without_buffer(range, first, first_cut, len11, len22, cmp);
    merge_without_buffer(range, new_middle, second_cut, len1 - len11, len2 - len22, cmp);
}

fn merge_sort_in_place<R, F>(range: &mut R, first: R::Position, len: usize, cmp: &mut F)
where
    R: MultiPassRange + MutRange + ?Sized,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    if len < 2 {
        return;
    }
    let half = len / 2;
    let mut middle = first.clone();
    range.advance_pos(&mut middle, half);
    merge_sort_in_place(range, first.clone(), half, cmp);
    merge_sort_in_place(range, middle.clone(), len - half, cmp);
    merge_without_buffer(range, first, middle, half, len - half, cmp);
}

/// Sorts the range in ascending order, keeping equal elements in their
/// original order.
///
/// # Examples
///
/// ```rust
/// # use stride_algo::stable::stable_sort_by_key;
///
/// let mut v = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// stable_sort_by_key(&mut v, |p| p.0);
/// assert_eq!(v, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
#[inline]
pub fn stable_sort<R>(range: R)
where
    R: MultiPassRange + MutRange,
    R::Value: Ord,
{
    stable_sort_by_with(range, &AlgorithmConfig::default(), Ord::cmp);
}

/// [`stable_sort`] with an explicit configuration.
#[inline]
pub fn stable_sort_with<R>(range: R, config: &AlgorithmConfig)
where
    R: MultiPassRange + MutRange,
    R::Value: Ord,
{
    stable_sort_by_with(range, config, Ord::cmp);
}

/// Sorts the range by `cmp`, keeping equivalent elements in their original order.
#[inline]
pub fn stable_sort_by<R, F>(range: R, cmp: F)
where
    R: MultiPassRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    stable_sort_by_with(range, &AlgorithmConfig::default(), cmp);
}

/// [`stable_sort_by`] with an explicit configuration.
pub fn stable_sort_by_with<R, F>(mut range: R, config: &AlgorithmConfig, mut cmp: F)
where
    R: MultiPassRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let len = range.count_elements();
    let first = range.begin_pos();
    if len < 2 || stable_sort_buffered(&mut range, &first, len, config, &mut cmp) {
        return;
    }
    log::trace!("stable_sort: in-place merge sort over {} elements", len);
    merge_sort_in_place(&mut range, first, len, &mut cmp);
}

/// Sorts the range by the key `f` extracts, keeping equal keys in order.
#[inline]
pub fn stable_sort_by_key<R, K, F>(range: R, f: F)
where
    R: MultiPassRange + MutRange,
    K: Ord,
    F: FnMut(&R::Value) -> K,
{
    stable_sort_by_key_with(range, &AlgorithmConfig::default(), f);
}

/// [`stable_sort_by_key`] with an explicit configuration.
#[inline]
pub fn stable_sort_by_key_with<R, K, F>(range: R, config: &AlgorithmConfig, mut f: F)
where
    R: MultiPassRange + MutRange,
    K: Ord,
    F: FnMut(&R::Value) -> K,
{
    stable_sort_by_with(range, config, |a, b| f(a).cmp(&f(b)));
}

fn stable_partition_buffered<R, P>(
    range: &mut R,
    first: &R::Position,
    len: usize,
    config: &AlgorithmConfig,
    pred: &mut P,
) -> Option<R::Position>
where
    R: MultiPassRange + MutRange + ?Sized,
    P: FnMut(&R::Value) -> bool,
{
    let positions = record_positions(&*range, first, len, config, "stable_partition")?;
    let mut order = reserve_indices(config, len, "stable_partition")?;
    let mut rejected = reserve_indices(config, len, "stable_partition")?;
    log::trace!("stable_partition: buffered over {} elements", len);

    for (index, pos) in positions.iter().enumerate() {
        if pred(range.at_pos(pos)) {
            order.push(index);
        } else {
            rejected.push(index);
        }
    }
    let split = order.len();
    order.extend_from_slice(&rejected);
    apply_permutation(range, &positions, &order);

    let mut boundary = first.clone();
    range.advance_pos(&mut boundary, split);
    Some(boundary)
}

fn stable_partition_in_place<R, P>(range: &mut R, first: R::Position, len: usize, pred: &mut P) -> R::Position
where
    R: MultiPassRange + MutRange + ?Sized,
    P: FnMut(&R::Value) -> bool,
{
    if len == 0 {
        return first;
    }
    if len == 1 {
        let mut end = first.clone();
        if pred(range.at_pos(&first)) {
            range.inc_pos(&mut end);
        }
        return end;
    }
    let half = len / 2;
    let mut middle = first.clone();
    range.advance_pos(&mut middle, half);
    let left_end = stable_partition_in_place(range, first, half, pred);
    let right_end = stable_partition_in_place(range, middle.clone(), len - half, pred);
    rotate_positions(range, left_end, middle, right_end)
}

/// Moves the elements satisfying `pred` in front of the others, keeping the
/// relative order within both groups, and returns the first position of the
/// second group. `pred` is called exactly once per element.
#[inline]
pub fn stable_partition<R, P>(range: R, pred: P) -> R::Position
where
    R: MultiPassRange + MutRange,
    P: FnMut(&R::Value) -> bool,
{
    stable_partition_with(range, &AlgorithmConfig::default(), pred)
}

/// [`stable_partition`] with an explicit configuration.
pub fn stable_partition_with<R, P>(mut range: R, config: &AlgorithmConfig, mut pred: P) -> R::Position
where
    R: MultiPassRange + MutRange,
    P: FnMut(&R::Value) -> bool,
{
    let len = range.count_elements();
    let first = range.begin_pos();
    if let Some(boundary) = stable_partition_buffered(&mut range, &first, len, config, &mut pred) {
        return boundary;
    }
    log::trace!("stable_partition: in-place over {} elements", len);
    stable_partition_in_place(&mut range, first, len, &mut pred)
}

fn inplace_merge_buffered<R, F>(
    range: &mut R,
    first: &R::Position,
    len1: usize,
    len: usize,
    config: &AlgorithmConfig,
    cmp: &mut F,
) -> bool
where
    R: MultiPassRange + MutRange + ?Sized,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let Some(positions) = record_positions(&*range, first, len, config, "inplace_merge") else {
        return false;
    };
    let Some(mut runs) = reserve_indices(config, len, "inplace_merge") else {
        return false;
    };
    let Some(mut order) = reserve_indices(config, len, "inplace_merge") else {
        return false;
    };
    log::trace!("inplace_merge: buffered over {} elements", len);

    runs.extend(0..len);
    merge_indices(&*range, &positions, &runs[..len1], &runs[len1..], &mut order, cmp);
    apply_permutation(range, &positions, &order);
    true
}

/// Merges the sorted runs `[begin, middle)` and `[middle, end)` into one
/// sorted range. On ties elements of the first run come first.
#[inline]
pub fn inplace_merge<R>(range: R, middle: R::Position)
where
    R: MultiPassRange + MutRange,
    R::Value: Ord,
{
    inplace_merge_by_with(range, middle, &AlgorithmConfig::default(), Ord::cmp);
}

/// [`inplace_merge`] with an explicit configuration.
#[inline]
pub fn inplace_merge_with<R>(range: R, middle: R::Position, config: &AlgorithmConfig)
where
    R: MultiPassRange + MutRange,
    R::Value: Ord,
{
    inplace_merge_by_with(range, middle, config, Ord::cmp);
}

/// [`inplace_merge`] ordered by `cmp`.
#[inline]
pub fn inplace_merge_by<R, F>(range: R, middle: R::Position, cmp: F)
where
    R: MultiPassRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    inplace_merge_by_with(range, middle, &AlgorithmConfig::default(), cmp);
}

/// [`inplace_merge_by`] with an explicit configuration.
pub fn inplace_merge_by_with<R, F>(mut range: R, middle: R::Position, config: &AlgorithmConfig, mut cmp: F)
where
    R: MultiPassRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let first = range.begin_pos();
    let len1 = range.distance_pos(&first, &middle);
    let len = range.count_elements();
    if len1 == 0 || len1 == len || inplace_merge_buffered(&mut range, &first, len1, len, config, &mut cmp) {
        return;
    }
    log::trace!("inplace_merge: rotation merge over {} elements", len);
    merge_without_buffer(&mut range, first, middle, len1, len - len1, &mut cmp);
}
