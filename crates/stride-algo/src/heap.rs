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

//! Binary max-heaps laid out in place over a random-access range.
//!
//! The element at index `i` has its children at `2i + 1` and `2i + 2`. With
//! the default ordering the largest element sits at the begin position.
//! Elements are only ever swapped, never cloned.

use crate::sort::is_less;
use std::cmp::Ordering;
use stride_core::range::{MutRange, RandomAccessRange};

/// Whether the element at index `a` orders before the one at index `b`.
#[inline]
fn less_at<R, F>(range: &R, a: usize, b: usize, cmp: &mut F) -> bool
where
    R: RandomAccessRange + ?Sized,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let (pa, pb) = (range.nth_pos(a), range.nth_pos(b));
    is_less(cmp, range.at_pos(&pa), range.at_pos(&pb))
}

#[inline]
fn swap_at<R>(range: &mut R, a: usize, b: usize)
where
    R: RandomAccessRange + MutRange + ?Sized,
{
    let (pa, pb) = (range.nth_pos(a), range.nth_pos(b));
    range.swap_pos(&pa, &pb);
}

fn sift_up<R, F>(range: &mut R, mut hole: usize, cmp: &mut F)
where
    R: RandomAccessRange + MutRange + ?Sized,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    while hole > 0 {
        let parent = (hole - 1) / 2;
        if !less_at(&*range, parent, hole, cmp) {
            break;
        }
        swap_at(range, parent, hole);
        hole = parent;
    }
}

fn sift_down<R, F>(range: &mut R, mut hole: usize, len: usize, cmp: &mut F)
where
    R: RandomAccessRange + MutRange + ?Sized,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    loop {
        let mut child = 2 * hole + 1;
        if child >= len {
            return;
        }
        if child + 1 < len && less_at(&*range, child, child + 1, cmp) {
            child += 1;
        }
        if !less_at(&*range, hole, child, cmp) {
            return;
        }
        swap_at(range, hole, child);
        hole = child;
    }
}

/// Adds the last element of the range to the heap formed by the elements
/// before it.
#[inline]
pub fn push_heap<R>(range: R)
where
    R: RandomAccessRange + MutRange,
    R::Value: Ord,
{
    push_heap_by(range, Ord::cmp);
}

/// [`push_heap`] ordered by `cmp`.
pub fn push_heap_by<R, F>(mut range: R, mut cmp: F)
where
    R: RandomAccessRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let len = range.length();
    if len > 1 {
        sift_up(&mut range, len - 1, &mut cmp);
    }
}

/// Moves the largest element to the end of the range and restores the heap
/// over the elements before it.
///
/// # Examples
///
/// ```rust
/// # use stride_algo::heap::{make_heap, pop_heap};
///
/// let mut v = vec![3, 1, 4, 1, 5];
/// make_heap(&mut v);
/// pop_heap(&mut v);
/// assert_eq!(v.last(), Some(&5));
/// ```
#[inline]
pub fn pop_heap<R>(range: R)
where
    R: RandomAccessRange + MutRange,
    R::Value: Ord,
{
    pop_heap_by(range, Ord::cmp);
}

/// [`pop_heap`] ordered by `cmp`.
pub fn pop_heap_by<R, F>(mut range: R, mut cmp: F)
where
    R: RandomAccessRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let len = range.length();
    if len > 1 {
        swap_at(&mut range, 0, len - 1);
        sift_down(&mut range, 0, len - 1, &mut cmp);
    }
}

/// Rearranges the range into a max-heap in O(n).
#[inline]
pub fn make_heap<R>(range: R)
where
    R: RandomAccessRange + MutRange,
    R::Value: Ord,
{
    make_heap_by(range, Ord::cmp);
}

/// [`make_heap`] ordered by `cmp`.
pub fn make_heap_by<R, F>(mut range: R, mut cmp: F)
where
    R: RandomAccessRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let len = range.length();
    for hole in (0..len / 2).rev() {
        sift_down(&mut range, hole, len, &mut cmp);
    }
}

/// Turns a heap into a range sorted in ascending order.
#[inline]
pub fn sort_heap<R>(range: R)
where
    R: RandomAccessRange + MutRange,
    R::Value: Ord,
{
    sort_heap_by(range, Ord::cmp);
}

/// [`sort_heap`] ordered by `cmp`.
pub fn sort_heap_by<R, F>(mut range: R, mut cmp: F)
where
    R: RandomAccessRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut len = range.length();
    while len > 1 {
        swap_at(&mut range, 0, len - 1);
        len -= 1;
        sift_down(&mut range, 0, len, &mut cmp);
    }
}

/// Returns `true` if the whole range is a max-heap.
#[inline]
pub fn is_heap<R>(range: R) -> bool
where
    R: RandomAccessRange,
    R::Value: Ord,
{
    is_heap_by(range, Ord::cmp)
}

/// [`is_heap`] ordered by `cmp`.
#[inline]
pub fn is_heap_by<R, F>(range: R, cmp: F) -> bool
where
    R: RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let until = is_heap_until_by(&range, cmp);
    range.is_end_pos(&until)
}

/// Returns the first position whose element is greater than its parent,
/// or the end if the whole range is a heap.
#[inline]
pub fn is_heap_until<R>(range: R) -> R::Position
where
    R: RandomAccessRange,
    R::Value: Ord,
{
    is_heap_until_by(range, Ord::cmp)
}

/// [`is_heap_until`] ordered by `cmp`.
pub fn is_heap_until_by<R, F>(range: R, mut cmp: F) -> R::Position
where
    R: RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let len = range.length();
    for child in 1..len {
        if less_at(&range, (child - 1) / 2, child, &mut cmp) {
            return range.nth_pos(child);
        }
    }
    range.nth_pos(len)
}
