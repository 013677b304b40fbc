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

//! Extremes, lexicographic comparison and permutation stepping.

use crate::copy::reverse_positions;
use crate::sort::is_less;
use std::cmp::Ordering;
use stride_core::range::{BidirectionalRange, MultiPassRange, MutRange, Range};

/// Returns the position of the first smallest element, or the end if the
/// range is empty.
#[inline]
pub fn min_element<R>(range: R) -> R::Position
where
    R: MultiPassRange,
    R::Value: Ord,
{
    min_element_by(range, Ord::cmp)
}

/// [`min_element`] ordered by `cmp`.
pub fn min_element_by<R, F>(range: R, mut cmp: F) -> R::Position
where
    R: MultiPassRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut best = range.begin_pos();
    if range.is_end_pos(&best) {
        return best;
    }
    let mut pos = best.clone();
    range.inc_pos(&mut pos);
    while !range.is_end_pos(&pos) {
        if is_less(&mut cmp, range.at_pos(&pos), range.at_pos(&best)) {
            best = pos.clone();
        }
        range.inc_pos(&mut pos);
    }
    best
}

/// Returns the position of the first largest element, or the end if the
/// range is empty.
#[inline]
pub fn max_element<R>(range: R) -> R::Position
where
    R: MultiPassRange,
    R::Value: Ord,
{
    max_element_by(range, Ord::cmp)
}

/// [`max_element`] ordered by `cmp`.
pub fn max_element_by<R, F>(range: R, mut cmp: F) -> R::Position
where
    R: MultiPassRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut best = range.begin_pos();
    if range.is_end_pos(&best) {
        return best;
    }
    let mut pos = best.clone();
    range.inc_pos(&mut pos);
    while !range.is_end_pos(&pos) {
        if is_less(&mut cmp, range.at_pos(&best), range.at_pos(&pos)) {
            best = pos.clone();
        }
        range.inc_pos(&mut pos);
    }
    best
}

/// Returns the positions of the first smallest and the first largest
/// element in one pass. Both are the end if the range is empty.
///
/// # Examples
///
/// ```rust
/// # use stride_algo::order::minmax_element;
///
/// let v = [3, 1, 4, 1, 5, 9, 2, 9];
/// let (min, max) = minmax_element(&v);
/// assert_eq!((min.get(), max.get()), (1, 5));
/// ```
#[inline]
pub fn minmax_element<R>(range: R) -> (R::Position, R::Position)
where
    R: MultiPassRange,
    R::Value: Ord,
{
    minmax_element_by(range, Ord::cmp)
}

/// [`minmax_element`] ordered by `cmp`.
pub fn minmax_element_by<R, F>(range: R, mut cmp: F) -> (R::Position, R::Position)
where
    R: MultiPassRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut min = range.begin_pos();
    if range.is_end_pos(&min) {
        return (min.clone(), min);
    }
    let mut max = min.clone();
    let mut pos = min.clone();
    range.inc_pos(&mut pos);
    while !range.is_end_pos(&pos) {
        let value = range.at_pos(&pos);
        if is_less(&mut cmp, value, range.at_pos(&min)) {
            min = pos.clone();
        } else if is_less(&mut cmp, range.at_pos(&max), value) {
            max = pos.clone();
        }
        range.inc_pos(&mut pos);
    }
    (min, max)
}

/// Returns `true` if `a` orders strictly before `b` element by element,
/// a proper prefix ordering first.
#[inline]
pub fn lexicographical_compare<A, B>(a: A, b: B) -> bool
where
    A: Range,
    B: Range<Value = A::Value>,
    A::Value: Ord,
{
    lexicographical_compare_by(a, b, Ord::cmp)
}

/// [`lexicographical_compare`] ordered by `cmp`.
pub fn lexicographical_compare_by<A, B, F>(a: A, b: B, mut cmp: F) -> bool
where
    A: Range,
    B: Range<Value = A::Value>,
    F: FnMut(&A::Value, &A::Value) -> Ordering,
{
    let (mut pa, mut pb) = (a.begin_pos(), b.begin_pos());
    loop {
        if b.is_end_pos(&pb) {
            return false;
        }
        if a.is_end_pos(&pa) {
            return true;
        }
        match cmp(a.at_pos(&pa), b.at_pos(&pb)) {
            Ordering::Less => return true,
            Ordering::Greater => return false,
            Ordering::Equal => {}
        }
        a.inc_pos(&mut pa);
        b.inc_pos(&mut pb);
    }
}

/// Rearranges the range into the next greater permutation. Returns `false`
/// after wrapping from the greatest permutation to the smallest one.
///
/// # Examples
///
/// ```rust
/// # use stride_algo::order::next_permutation;
///
/// let mut v = vec![1, 2, 3];
/// assert!(next_permutation(&mut v));
/// assert_eq!(v, vec![1, 3, 2]);
/// ```
#[inline]
pub fn next_permutation<R>(range: R) -> bool
where
    R: BidirectionalRange + MutRange,
    R::Value: Ord,
{
    next_permutation_by(range, Ord::cmp)
}

/// [`next_permutation`] ordered by `cmp`.
#[inline]
pub fn next_permutation_by<R, F>(range: R, mut cmp: F) -> bool
where
    R: BidirectionalRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    step_permutation(range, |a, b| is_less(&mut cmp, a, b))
}

/// Rearranges the range into the next smaller permutation. Returns `false`
/// after wrapping from the smallest permutation to the greatest one.
#[inline]
pub fn prev_permutation<R>(range: R) -> bool
where
    R: BidirectionalRange + MutRange,
    R::Value: Ord,
{
    prev_permutation_by(range, Ord::cmp)
}

/// [`prev_permutation`] ordered by `cmp`.
#[inline]
pub fn prev_permutation_by<R, F>(range: R, mut cmp: F) -> bool
where
    R: BidirectionalRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    step_permutation(range, |a, b| is_less(&mut cmp, b, a))
}

/// Steps to the next permutation under the strict order `before`.
fn step_permutation<R, F>(mut range: R, mut before: F) -> bool
where
    R: BidirectionalRange + MutRange,
    F: FnMut(&R::Value, &R::Value) -> bool,
{
    let first = range.begin_pos();
    let last = range.end_position();
    if first == last {
        return false;
    }
    let mut i = last.clone();
    range.dec_pos(&mut i);
    if i == first {
        return false;
    }
    loop {
        let next = i.clone();
        range.dec_pos(&mut i);
        if before(range.at_pos(&i), range.at_pos(&next)) {
            let mut j = last.clone();
            loop {
                range.dec_pos(&mut j);
                if before(range.at_pos(&i), range.at_pos(&j)) {
                    break;
                }
            }
            range.swap_pos(&i, &j);
            reverse_positions(&mut range, next, last);
            return true;
        }
        if i == first {
            reverse_positions(&mut range, first, last);
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::BidiVec;

    #[test]
    fn test_extremes_first_occurrence() {
        let v = [3, 1, 4, 1, 5, 9, 2, 9];
        assert_eq!(min_element(&v).get(), 1);
        assert_eq!(max_element(&v).get(), 5);
        let (min, max) = minmax_element(&v);
        assert_eq!((min.get(), max.get()), (1, 5));
    }

    #[test]
    fn test_extremes_empty_and_single() {
        let empty: [i32; 0] = [];
        assert_eq!(min_element(&empty).get(), 0);
        let (min, max) = minmax_element(&empty);
        assert_eq!((min.get(), max.get()), (0, 0));

        let single = [7];
        let (min, max) = minmax_element(&single);
        assert_eq!((min.get(), max.get()), (0, 0));
    }

    #[test]
    fn test_extremes_by_key() {
        let words = ["pear", "fig", "banana", "kiwi", "plum"];
        assert_eq!(min_element_by(&words, |a, b| a.len().cmp(&b.len())).get(), 1);
        let (min, max) = minmax_element_by(&words, |a, b| a.len().cmp(&b.len()));
        assert_eq!((min.get(), max.get()), (1, 2));
    }

    #[test]
    fn test_lexicographical_compare() {
        assert!(lexicographical_compare(&[1, 2, 3], &[1, 2, 4]));
        assert!(!lexicographical_compare(&[1, 2, 4], &[1, 2, 3]));
        assert!(lexicographical_compare(&[1, 2], &[1, 2, 3]));
        assert!(!lexicographical_compare(&[1, 2, 3], &[1, 2, 3]));
        assert!(!lexicographical_compare(&[] as &[i32], &[] as &[i32]));
        assert!(lexicographical_compare_by(&[3, 2], &[1, 2], |a, b| b.cmp(a)));
    }

    #[test]
    fn test_next_permutation_cycles() {
        let mut v = vec![1, 2, 3];
        assert!(next_permutation(&mut v));
        assert_eq!(v, vec![1, 3, 2]);

        let mut seen = vec![vec![1, 2, 3], v.clone()];
        while next_permutation(&mut v) {
            seen.push(v.clone());
        }
        assert_eq!(v, vec![1, 2, 3]);
        assert_eq!(
            seen,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_prev_permutation_wraps() {
        let mut v = vec![1, 2, 3];
        assert!(!prev_permutation(&mut v));
        assert_eq!(v, vec![3, 2, 1]);
        assert!(prev_permutation(&mut v));
        assert_eq!(v, vec![3, 1, 2]);
    }

    #[test]
    fn test_permutation_with_duplicates_on_bidirectional_range() {
        let mut b = BidiVec::new(vec![1, 1, 2]);
        let mut count = 1;
        while next_permutation(&mut b) {
            count += 1;
        }
        assert_eq!(count, 3);
        assert_eq!(b.data, vec![1, 1, 2]);
    }

    #[test]
    fn test_permutation_trivial_ranges() {
        let mut empty: Vec<i32> = Vec::new();
        assert!(!next_permutation(&mut empty));
        let mut one = vec![5];
        assert!(!next_permutation(&mut one));
        assert_eq!(one, vec![5]);
    }
}
