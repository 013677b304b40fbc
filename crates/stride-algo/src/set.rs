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

//! # Merging and Set Algebra
//!
//! Operations over two ranges sorted by the same ordering. The inputs only
//! need to be single-pass, so either side may be a
//! [`GeneratorRange`](stride_bridge::range::GeneratorRange). Output is
//! written through a [`Consumer`]; each function returns the positions
//! reached in both inputs, which are the ends unless the consumer rejected
//! a value.
//!
//! Ties always resolve towards the first range: `merge` emits the element
//! of `a` before an equivalent element of `b`, and the set operations emit
//! `a`'s copy of an element present in both.

use crate::sort::is_less;
use std::cmp::Ordering;
use stride_bridge::consumer::Consumer;
use stride_core::range::Range;

/// Emits the rest of `range`. Returns `false` if `out` rejected a value.
fn drain<R, C>(range: &R, pos: &mut R::Position, out: &mut C) -> bool
where
    R: Range,
    R::Value: Clone,
    C: Consumer<R::Value>,
{
    while !range.is_end_pos(pos) {
        if !out.accept(range.at_pos(pos).clone()) {
            return false;
        }
        range.inc_pos(pos);
    }
    true
}

/// Merges two sorted ranges into one sorted sequence.
///
/// # Examples
///
/// ```rust
/// # use stride_algo::set::merge;
///
/// let mut out = Vec::new();
/// merge(&[1, 3, 5], &[2, 3, 4], &mut out);
/// assert_eq!(out, vec![1, 2, 3, 3, 4, 5]);
/// ```
#[inline]
pub fn merge<A, B, C>(a: A, b: B, out: C) -> (A::Position, B::Position)
where
    A: Range,
    B: Range<Value = A::Value>,
    A::Value: Ord + Clone,
    C: Consumer<A::Value>,
{
    merge_by(a, b, out, Ord::cmp)
}

/// [`merge`] ordered by `cmp`.
pub fn merge_by<A, B, C, F>(a: A, b: B, mut out: C, mut cmp: F) -> (A::Position, B::Position)
where
    A: Range,
    B: Range<Value = A::Value>,
    A::Value: Clone,
    C: Consumer<A::Value>,
    F: FnMut(&A::Value, &A::Value) -> Ordering,
{
    let (mut pa, mut pb) = (a.begin_pos(), b.begin_pos());
    while !a.is_end_pos(&pa) && !b.is_end_pos(&pb) {
        let (x, y) = (a.at_pos(&pa), b.at_pos(&pb));
        if is_less(&mut cmp, y, x) {
            if !out.accept(y.clone()) {
                return (pa, pb);
            }
            b.inc_pos(&mut pb);
        } else {
            if !out.accept(x.clone()) {
                return (pa, pb);
            }
            a.inc_pos(&mut pa);
        }
    }
    if drain(&a, &mut pa, &mut out) {
        drain(&b, &mut pb, &mut out);
    }
    (pa, pb)
}

/// Emits every element present in either range, once per occurrence in
/// the range holding more copies of it.
#[inline]
pub fn set_union<A, B, C>(a: A, b: B, out: C) -> (A::Position, B::Position)
where
    A: Range,
    B: Range<Value = A::Value>,
    A::Value: Ord + Clone,
    C: Consumer<A::Value>,
{
    set_union_by(a, b, out, Ord::cmp)
}

/// [`set_union`] ordered by `cmp`.
pub fn set_union_by<A, B, C, F>(a: A, b: B, mut out: C, mut cmp: F) -> (A::Position, B::Position)
where
    A: Range,
    B: Range<Value = A::Value>,
    A::Value: Clone,
    C: Consumer<A::Value>,
    F: FnMut(&A::Value, &A::Value) -> Ordering,
{
    let (mut pa, mut pb) = (a.begin_pos(), b.begin_pos());
    while !a.is_end_pos(&pa) && !b.is_end_pos(&pb) {
        let (x, y) = (a.at_pos(&pa), b.at_pos(&pb));
        if is_less(&mut cmp, y, x) {
            if !out.accept(y.clone()) {
                return (pa, pb);
            }
            b.inc_pos(&mut pb);
        } else {
            let both = !is_less(&mut cmp, x, y);
            if !out.accept(x.clone()) {
                return (pa, pb);
            }
            a.inc_pos(&mut pa);
            if both {
                b.inc_pos(&mut pb);
            }
        }
    }
    if drain(&a, &mut pa, &mut out) {
        drain(&b, &mut pb, &mut out);
    }
    (pa, pb)
}

/// Emits the elements of `a` that have an equivalent in `b`.
#[inline]
pub fn set_intersection<A, B, C>(a: A, b: B, out: C) -> (A::Position, B::Position)
where
    A: Range,
    B: Range<Value = A::Value>,
    A::Value: Ord + Clone,
    C: Consumer<A::Value>,
{
    set_intersection_by(a, b, out, Ord::cmp)
}

/// [`set_intersection`] ordered by `cmp`.
pub fn set_intersection_by<A, B, C, F>(a: A, b: B, mut out: C, mut cmp: F) -> (A::Position, B::Position)
where
    A: Range,
    B: Range<Value = A::Value>,
    A::Value: Clone,
    C: Consumer<A::Value>,
    F: FnMut(&A::Value, &A::Value) -> Ordering,
{
    let (mut pa, mut pb) = (a.begin_pos(), b.begin_pos());
    while !a.is_end_pos(&pa) && !b.is_end_pos(&pb) {
        let (x, y) = (a.at_pos(&pa), b.at_pos(&pb));
        if is_less(&mut cmp, x, y) {
            a.inc_pos(&mut pa);
        } else if is_less(&mut cmp, y, x) {
            b.inc_pos(&mut pb);
        } else {
            if !out.accept(x.clone()) {
                return (pa, pb);
            }
            a.inc_pos(&mut pa);
            b.inc_pos(&mut pb);
        }
    }
    (pa, pb)
}

/// Emits the elements of `a` that have no equivalent in `b`.
#[inline]
pub fn set_difference<A, B, C>(a: A, b: B, out: C) -> (A::Position, B::Position)
where
    A: Range,
    B: Range<Value = A::Value>,
    A::Value: Ord + Clone,
    C: Consumer<A::Value>,
{
    set_difference_by(a, b, out, Ord::cmp)
}

/// [`set_difference`] ordered by `cmp`.
pub fn set_difference_by<A, B, C, F>(a: A, b: B, mut out: C, mut cmp: F) -> (A::Position, B::Position)
where
    A: Range,
    B: Range<Value = A::Value>,
    A::Value: Clone,
    C: Consumer<A::Value>,
    F: FnMut(&A::Value, &A::Value) -> Ordering,
{
    let (mut pa, mut pb) = (a.begin_pos(), b.begin_pos());
    while !a.is_end_pos(&pa) && !b.is_end_pos(&pb) {
        let (x, y) = (a.at_pos(&pa), b.at_pos(&pb));
        if is_less(&mut cmp, x, y) {
            if !out.accept(x.clone()) {
                return (pa, pb);
            }
            a.inc_pos(&mut pa);
        } else if is_less(&mut cmp, y, x) {
            b.inc_pos(&mut pb);
        } else {
            a.inc_pos(&mut pa);
            b.inc_pos(&mut pb);
        }
    }
    drain(&a, &mut pa, &mut out);
    (pa, pb)
}

/// Emits the elements found in exactly one of the two ranges.
#[inline]
pub fn set_symmetric_difference<A, B, C>(a: A, b: B, out: C) -> (A::Position, B::Position)
where
    A: Range,
    B: Range<Value = A::Value>,
    A::Value: Ord + Clone,
    C: Consumer<A::Value>,
{
    set_symmetric_difference_by(a, b, out, Ord::cmp)
}

/// [`set_symmetric_difference`] ordered by `cmp`.
pub fn set_symmetric_difference_by<A, B, C, F>(
    a: A,
    b: B,
    mut out: C,
    mut cmp: F,
) -> (A::Position, B::Position)
where
    A: Range,
    B: Range<Value = A::Value>,
    A::Value: Clone,
    C: Consumer<A::Value>,
    F: FnMut(&A::Value, &A::Value) -> Ordering,
{
    let (mut pa, mut pb) = (a.begin_pos(), b.begin_pos());
    while !a.is_end_pos(&pa) && !b.is_end_pos(&pb) {
        let (x, y) = (a.at_pos(&pa), b.at_pos(&pb));
        if is_less(&mut cmp, x, y) {
            if !out.accept(x.clone()) {
                return (pa, pb);
            }
            a.inc_pos(&mut pa);
        } else if is_less(&mut cmp, y, x) {
            if !out.accept(y.clone()) {
                return (pa, pb);
            }
            b.inc_pos(&mut pb);
        } else {
            a.inc_pos(&mut pa);
            b.inc_pos(&mut pb);
        }
    }
    if drain(&a, &mut pa, &mut out) {
        drain(&b, &mut pb, &mut out);
    }
    (pa, pb)
}

/// Returns `true` if every element of `b` has an equivalent in `a`,
/// counting multiplicity.
#[inline]
pub fn includes<A, B>(a: A, b: B) -> bool
where
    A: Range,
    B: Range<Value = A::Value>,
    A::Value: Ord,
{
    includes_by(a, b, Ord::cmp)
}

/// [`includes`] ordered by `cmp`.
pub fn includes_by<A, B, F>(a: A, b: B, mut cmp: F) -> bool
where
    A: Range,
    B: Range<Value = A::Value>,
    F: FnMut(&A::Value, &A::Value) -> Ordering,
{
    let (mut pa, mut pb) = (a.begin_pos(), b.begin_pos());
    while !b.is_end_pos(&pb) {
        if a.is_end_pos(&pa) {
            return false;
        }
        let (x, y) = (a.at_pos(&pa), b.at_pos(&pb));
        if is_less(&mut cmp, y, x) {
            return false;
        }
        if !is_less(&mut cmp, x, y) {
            b.inc_pos(&mut pb);
        }
        a.inc_pos(&mut pa);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_bridge::consumer::Bounded;
    use stride_bridge::range::GeneratorRange;
    use stride_bridge::sources::IterGenerator;

    #[test]
    fn test_set_algebra_examples() {
        let (a, b) = ([1, 2, 4], [2, 3, 4]);

        let mut union = Vec::new();
        set_union(&a, &b, &mut union);
        assert_eq!(union, vec![1, 2, 3, 4]);

        let mut intersection = Vec::new();
        set_intersection(&a, &b, &mut intersection);
        assert_eq!(intersection, vec![2, 4]);

        let mut difference = Vec::new();
        set_difference(&a, &b, &mut difference);
        assert_eq!(difference, vec![1]);

        let mut symmetric = Vec::new();
        set_symmetric_difference(&a, &b, &mut symmetric);
        assert_eq!(symmetric, vec![1, 3]);
    }

    #[test]
    fn test_merge_prefers_first_range_on_ties() {
        let a = [(1, 'a'), (2, 'a'), (2, 'a')];
        let b = [(0, 'b'), (2, 'b'), (3, 'b')];
        let mut out = Vec::new();
        merge_by(&a, &b, &mut out, |x, y| x.0.cmp(&y.0));
        assert_eq!(
            out,
            vec![(0, 'b'), (1, 'a'), (2, 'a'), (2, 'a'), (2, 'b'), (3, 'b')]
        );
    }

    #[test]
    fn test_union_takes_first_range_copy() {
        let a = [(1, 'a'), (2, 'a')];
        let b = [(2, 'b'), (2, 'b')];
        let mut out = Vec::new();
        set_union_by(&a, &b, &mut out, |x, y| x.0.cmp(&y.0));
        assert_eq!(out, vec![(1, 'a'), (2, 'a'), (2, 'b')]);
    }

    #[test]
    fn test_multiset_semantics() {
        let (a, b) = ([1, 1, 2, 2, 2], [1, 2, 2, 3]);
        let mut out = Vec::new();
        set_intersection(&a, &b, &mut out);
        assert_eq!(out, vec![1, 2, 2]);
        out.clear();
        set_difference(&a, &b, &mut out);
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn test_generator_inputs() {
        let a = GeneratorRange::new(IterGenerator::new([1, 4, 6].into_iter()));
        let b = GeneratorRange::new(IterGenerator::new([2, 4, 5].into_iter()));
        let mut out = Vec::new();
        merge(&a, &b, &mut out);
        assert_eq!(out, vec![1, 2, 4, 4, 5, 6]);
    }

    #[test]
    fn test_rejection_stops_with_positions() {
        let (a, b) = ([1, 3, 5], [2, 4, 6]);
        let mut out = Vec::new();
        let (pa, pb) = merge(&a, &b, Bounded::new(&mut out, 3));
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!((pa.get(), pb.get()), (2, 1));
    }

    #[test]
    fn test_includes() {
        assert!(includes(&[1, 2, 2, 3, 5], &[2, 2, 5]));
        assert!(!includes(&[1, 2, 3], &[2, 2]));
        assert!(!includes(&[1, 2, 3], &[4]));
        assert!(includes(&[1, 2, 3], &[] as &[i32]));
    }
}
