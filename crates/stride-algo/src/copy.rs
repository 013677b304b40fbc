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

//! # Copying, Transforming and Rearranging
//!
//! Algorithms that produce output write it through a
//! [`Consumer`](stride_bridge::consumer::Consumer): a `&mut Vec`, a
//! [`RangeSink`](stride_bridge::consumer::RangeSink) over a slice, or a byte
//! writer. When the consumer rejects a value the algorithm stops and returns
//! the input position of the rejected element; otherwise it returns the end.
//!
//! The in-place algorithms (`remove`, `unique`, `reverse`, `rotate`) move
//! elements only with `swap_pos`, so they work for any element type.

use crate::search::find_if;
use stride_bridge::consumer::Consumer;
use stride_core::range::{BidirectionalRange, MultiPassRange, MutRange, Range};

/// Feeds clones of every element to `out`.
///
/// # Examples
///
/// ```rust
/// # use stride_algo::copy::copy;
/// # use stride_bridge::consumer::Bounded;
///
/// let mut out = Vec::new();
/// let stop = copy(&[1, 2, 3, 4], Bounded::new(&mut out, 2));
/// assert_eq!(out, vec![1, 2]);
/// assert_eq!(stop.get(), 2);
/// ```
pub fn copy<R, C>(range: R, mut out: C) -> R::Position
where
    R: Range,
    R::Value: Clone,
    C: Consumer<R::Value>,
{
    let mut pos = range.begin_pos();
    while !range.is_end_pos(&pos) {
        if !out.accept(range.at_pos(&pos).clone()) {
            return pos;
        }
        range.inc_pos(&mut pos);
    }
    pos
}

/// Feeds clones of the elements satisfying `pred` to `out`.
pub fn copy_if<R, C, P>(range: R, mut out: C, mut pred: P) -> R::Position
where
    R: Range,
    R::Value: Clone,
    C: Consumer<R::Value>,
    P: FnMut(&R::Value) -> bool,
{
    let mut pos = range.begin_pos();
    while !range.is_end_pos(&pos) {
        let value = range.at_pos(&pos);
        if pred(value) && !out.accept(value.clone()) {
            return pos;
        }
        range.inc_pos(&mut pos);
    }
    pos
}

/// Feeds clones of at most the first `n` elements to `out`.
pub fn copy_n<R, C>(range: R, n: usize, mut out: C) -> R::Position
where
    R: Range,
    R::Value: Clone,
    C: Consumer<R::Value>,
{
    let mut pos = range.begin_pos();
    for _ in 0..n {
        if range.is_end_pos(&pos) || !out.accept(range.at_pos(&pos).clone()) {
            break;
        }
        range.inc_pos(&mut pos);
    }
    pos
}

/// Moves every element into `out`, leaving `Default` values behind.
pub fn move_values<R, C>(mut range: R, mut out: C) -> R::Position
where
    R: MutRange,
    R::Value: Default,
    C: Consumer<R::Value>,
{
    let mut pos = range.begin_pos();
    while !range.is_end_pos(&pos) {
        let value = std::mem::take(range.at_pos_mut(&pos));
        if !out.accept(value) {
            return pos;
        }
        range.inc_pos(&mut pos);
    }
    pos
}

/// Feeds `f(element)` for every element to `out`.
pub fn transform<R, C, F, U>(range: R, mut out: C, mut f: F) -> R::Position
where
    R: Range,
    C: Consumer<U>,
    F: FnMut(&R::Value) -> U,
{
    let mut pos = range.begin_pos();
    while !range.is_end_pos(&pos) {
        if !out.accept(f(range.at_pos(&pos))) {
            return pos;
        }
        range.inc_pos(&mut pos);
    }
    pos
}

/// Feeds `f(a_element, b_element)` for elements taken pairwise from `a` and
/// `b` to `out`, until either range ends.
pub fn transform_binary<A, B, C, F, U>(a: A, b: B, mut out: C, mut f: F) -> (A::Position, B::Position)
where
    A: Range,
    B: Range,
    C: Consumer<U>,
    F: FnMut(&A::Value, &B::Value) -> U,
{
    let mut pa = a.begin_pos();
    let mut pb = b.begin_pos();
    while !a.is_end_pos(&pa) && !b.is_end_pos(&pb) {
        if !out.accept(f(a.at_pos(&pa), b.at_pos(&pb))) {
            break;
        }
        a.inc_pos(&mut pa);
        b.inc_pos(&mut pb);
    }
    (pa, pb)
}

/// Overwrites every element equal to `old` with a clone of `new`.
///
/// Returns the number of replaced elements.
#[inline]
pub fn replace<R>(range: R, old: &R::Value, new: &R::Value) -> usize
where
    R: MutRange,
    R::Value: PartialEq + Clone,
{
    replace_if(range, |x| x == old, new)
}

/// Overwrites every element satisfying `pred` with a clone of `new`.
///
/// Returns the number of replaced elements.
pub fn replace_if<R, P>(mut range: R, mut pred: P, new: &R::Value) -> usize
where
    R: MutRange,
    R::Value: Clone,
    P: FnMut(&R::Value) -> bool,
{
    let mut replaced = 0;
    let mut pos = range.begin_pos();
    while !range.is_end_pos(&pos) {
        if pred(range.at_pos(&pos)) {
            *range.at_pos_mut(&pos) = new.clone();
            replaced += 1;
        }
        range.inc_pos(&mut pos);
    }
    replaced
}

/// Overwrites every element with a clone of `value`.
#[inline]
pub fn fill<R>(range: R, value: &R::Value)
where
    R: MutRange,
    R::Value: Clone,
{
    generate(range, || value.clone());
}

/// Overwrites at most the first `n` elements with clones of `value`.
///
/// Returns the position after the last written element.
#[inline]
pub fn fill_n<R>(range: R, n: usize, value: &R::Value) -> R::Position
where
    R: MutRange,
    R::Value: Clone,
{
    generate_n(range, n, || value.clone())
}

/// Overwrites every element with successive results of `g`.
pub fn generate<R, G>(mut range: R, mut g: G)
where
    R: MutRange,
    G: FnMut() -> R::Value,
{
    let mut pos = range.begin_pos();
    while !range.is_end_pos(&pos) {
        *range.at_pos_mut(&pos) = g();
        range.inc_pos(&mut pos);
    }
}

/// Overwrites at most the first `n` elements with successive results of `g`.
///
/// Returns the position after the last written element.
pub fn generate_n<R, G>(mut range: R, n: usize, mut g: G) -> R::Position
where
    R: MutRange,
    G: FnMut() -> R::Value,
{
    let mut pos = range.begin_pos();
    for _ in 0..n {
        if range.is_end_pos(&pos) {
            break;
        }
        *range.at_pos_mut(&pos) = g();
        range.inc_pos(&mut pos);
    }
    pos
}

/// Moves the elements not equal to `value` to the front, keeping their
/// order, and returns the new logical end.
///
/// Elements from the returned position onwards are the removed ones in
/// unspecified order.
#[inline]
pub fn remove<R>(range: R, value: &R::Value) -> R::Position
where
    R: MultiPassRange + MutRange,
    R::Value: PartialEq,
{
    remove_if(range, |x| x == value)
}

/// Moves the elements not satisfying `pred` to the front, keeping their
/// order, and returns the new logical end.
pub fn remove_if<R, P>(mut range: R, mut pred: P) -> R::Position
where
    R: MultiPassRange + MutRange,
    P: FnMut(&R::Value) -> bool,
{
    let mut write = find_if(&range, &mut pred);
    if range.is_end_pos(&write) {
        return write;
    }
    let mut read = write.clone();
    range.inc_pos(&mut read);
    while !range.is_end_pos(&read) {
        if !pred(range.at_pos(&read)) {
            range.swap_pos(&write, &read);
            range.inc_pos(&mut write);
        }
        range.inc_pos(&mut read);
    }
    write
}

/// Collapses every run of equal elements to its first element and returns
/// the new logical end.
#[inline]
pub fn unique<R>(range: R) -> R::Position
where
    R: MultiPassRange + MutRange,
    R::Value: PartialEq,
{
    unique_by(range, |a, b| a == b)
}

/// Collapses runs of elements equivalent under `eq` to their first element
/// and returns the new logical end.
///
/// Each element is compared with the last element kept, called as
/// `eq(kept, candidate)`.
pub fn unique_by<R, F>(mut range: R, mut eq: F) -> R::Position
where
    R: MultiPassRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> bool,
{
    let mut kept = range.begin_pos();
    if range.is_end_pos(&kept) {
        return kept;
    }
    let mut read = kept.clone();
    range.inc_pos(&mut read);
    while !range.is_end_pos(&read) {
        if !eq(range.at_pos(&kept), range.at_pos(&read)) {
            range.inc_pos(&mut kept);
            if kept != read {
                range.swap_pos(&kept, &read);
            }
        }
        range.inc_pos(&mut read);
    }
    range.inc_pos(&mut kept);
    kept
}

/// Reverses the order of the elements.
pub fn reverse<R>(mut range: R)
where
    R: BidirectionalRange + MutRange,
{
    let first = range.begin_pos();
    let last = range.end_position();
    reverse_positions(&mut range, first, last);
}

/// Reverses `[first, last)`.
pub(crate) fn reverse_positions<R>(range: &mut R, mut first: R::Position, mut last: R::Position)
where
    R: BidirectionalRange + MutRange + ?Sized,
{
    loop {
        if first == last {
            return;
        }
        range.dec_pos(&mut last);
        if first == last {
            return;
        }
        range.swap_pos(&first, &last);
        range.inc_pos(&mut first);
    }
}

/// Rotates `[first, last)` so that the element at `middle` becomes the first
/// one, and returns the new position of the element that was at `first`.
pub(crate) fn rotate_positions<R>(
    range: &mut R,
    mut first: R::Position,
    mut middle: R::Position,
    last: R::Position,
) -> R::Position
where
    R: MultiPassRange + MutRange + ?Sized,
{
    if first == middle {
        return last;
    }
    if middle == last {
        return first;
    }
    let mut next = middle.clone();
    loop {
        range.swap_pos(&first, &next);
        range.inc_pos(&mut first);
        range.inc_pos(&mut next);
        if first == middle {
            middle = next.clone();
        }
        if next == last {
            break;
        }
    }
    let rotated = first.clone();
    next = middle.clone();
    while next != last {
        range.swap_pos(&first, &next);
        range.inc_pos(&mut first);
        range.inc_pos(&mut next);
        if first == middle {
            middle = next.clone();
        } else if next == last {
            next = middle.clone();
        }
    }
    rotated
}

/// Rotates the range left so that `middle` becomes the first element.
///
/// Returns the new position of the element that was first.
///
/// # Examples
///
/// ```rust
/// # use stride_algo::copy::rotate;
/// # use stride_core::range::RandomAccessRange;
///
/// let mut v = vec![1, 2, 3, 4, 5];
/// let middle = v.nth_pos(2);
/// let moved = rotate(&mut v, middle);
/// assert_eq!(v, vec![3, 4, 5, 1, 2]);
/// assert_eq!(moved.get(), 3);
/// ```
#[inline]
pub fn rotate<R>(mut range: R, middle: R::Position) -> R::Position
where
    R: MultiPassRange + MutRange,
{
    let first = range.begin_pos();
    let last = range.end_position();
    rotate_positions(&mut range, first, middle, last)
}

/// Exchanges elements pairwise between `a` and `b` until either ends.
pub fn swap_ranges<A, B>(mut a: A, mut b: B) -> (A::Position, B::Position)
where
    A: MutRange,
    B: MutRange<Value = A::Value>,
{
    let mut pa = a.begin_pos();
    let mut pb = b.begin_pos();
    while !a.is_end_pos(&pa) && !b.is_end_pos(&pb) {
        std::mem::swap(a.at_pos_mut(&pa), b.at_pos_mut(&pb));
        a.inc_pos(&mut pa);
        b.inc_pos(&mut pb);
    }
    (pa, pb)
}

/// Feeds clones of the elements satisfying `pred` to `out_true` and the rest
/// to `out_false`.
pub fn partition_copy<R, T, F, P>(range: R, mut out_true: T, mut out_false: F, mut pred: P) -> R::Position
where
    R: Range,
    R::Value: Clone,
    T: Consumer<R::Value>,
    F: Consumer<R::Value>,
    P: FnMut(&R::Value) -> bool,
{
    let mut pos = range.begin_pos();
    while !range.is_end_pos(&pos) {
        let value = range.at_pos(&pos);
        let accepted = if pred(value) {
            out_true.accept(value.clone())
        } else {
            out_false.accept(value.clone())
        };
        if !accepted {
            return pos;
        }
        range.inc_pos(&mut pos);
    }
    pos
}

/// Feeds clones of the first element of every run of equal elements to `out`.
#[inline]
pub fn unique_copy<R, C>(range: R, out: C) -> R::Position
where
    R: Range,
    R::Value: Clone + PartialEq,
    C: Consumer<R::Value>,
{
    unique_copy_by(range, out, |a, b| a == b)
}

/// [`unique_copy`] with a custom equivalence, called as
/// `eq(last_emitted, candidate)`.
pub fn unique_copy_by<R, C, F>(range: R, mut out: C, mut eq: F) -> R::Position
where
    R: Range,
    R::Value: Clone,
    C: Consumer<R::Value>,
    F: FnMut(&R::Value, &R::Value) -> bool,
{
    let mut last: Option<R::Value> = None;
    let mut pos = range.begin_pos();
    while !range.is_end_pos(&pos) {
        let value = range.at_pos(&pos);
        let fresh = match &last {
            Some(prev) => !eq(prev, value),
            None => true,
        };
        if fresh {
            let emitted = value.clone();
            last = Some(value.clone());
            if !out.accept(emitted) {
                return pos;
            }
        }
        range.inc_pos(&mut pos);
    }
    pos
}
