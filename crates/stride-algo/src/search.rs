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

//! # Linear Search
//!
//! Single forward scans. Everything here that inspects one element at a
//! time accepts single-pass ranges, so a `GeneratorRange` over a stream is
//! a valid haystack. Functions that must look at a position twice (pairs of
//! neighbours, restarting a match) require multi-pass ranges.
//!
//! Functions returning a position return the end position when nothing
//! matched; for single-pass ranges that position owns whatever state the
//! traversal had, so a caller can keep reading from it.

use fixedbitset::FixedBitSet;
use stride_adapt::subrange::SubRange;
use stride_core::range::{MultiPassRange, MutRange, Range};

/// Returns the first position whose element equals `value`.
#[inline]
pub fn find<R>(range: R, value: &R::Value) -> R::Position
where
    R: Range,
    R::Value: PartialEq,
{
    find_if(range, |x| x == value)
}

/// Returns the first position whose element satisfies `pred`.
pub fn find_if<R, P>(range: R, mut pred: P) -> R::Position
where
    R: Range,
    P: FnMut(&R::Value) -> bool,
{
    let mut pos = range.begin_pos();
    while !range.is_end_pos(&pos) && !pred(range.at_pos(&pos)) {
        range.inc_pos(&mut pos);
    }
    pos
}

/// Returns the first position whose element does not satisfy `pred`.
#[inline]
pub fn find_if_not<R, P>(range: R, mut pred: P) -> R::Position
where
    R: Range,
    P: FnMut(&R::Value) -> bool,
{
    find_if(range, |x| !pred(x))
}

/// Returns `true` if every element satisfies `pred` (vacuously for an empty range).
#[inline]
pub fn all_of<R, P>(range: R, pred: P) -> bool
where
    R: Range,
    P: FnMut(&R::Value) -> bool,
{
    let pos = find_if_not(&range, pred);
    range.is_end_pos(&pos)
}

/// Returns `true` if some element satisfies `pred`.
#[inline]
pub fn any_of<R, P>(range: R, pred: P) -> bool
where
    R: Range,
    P: FnMut(&R::Value) -> bool,
{
    let pos = find_if(&range, pred);
    !range.is_end_pos(&pos)
}

/// Returns `true` if no element satisfies `pred`.
#[inline]
pub fn none_of<R, P>(range: R, pred: P) -> bool
where
    R: Range,
    P: FnMut(&R::Value) -> bool,
{
    !any_of(range, pred)
}

/// Counts the elements equal to `value`.
#[inline]
pub fn count<R>(range: R, value: &R::Value) -> usize
where
    R: Range,
    R::Value: PartialEq,
{
    count_if(range, |x| x == value)
}

/// Counts the elements satisfying `pred`.
pub fn count_if<R, P>(range: R, mut pred: P) -> usize
where
    R: Range,
    P: FnMut(&R::Value) -> bool,
{
    let mut n = 0;
    let mut pos = range.begin_pos();
    while !range.is_end_pos(&pos) {
        if pred(range.at_pos(&pos)) {
            n += 1;
        }
        range.inc_pos(&mut pos);
    }
    n
}

/// Calls `f` on every element in order.
pub fn for_each<R, F>(range: R, mut f: F)
where
    R: Range,
    F: FnMut(&R::Value),
{
    let mut pos = range.begin_pos();
    while !range.is_end_pos(&pos) {
        f(range.at_pos(&pos));
        range.inc_pos(&mut pos);
    }
}

/// Calls `f` on every element in order, with write access.
pub fn for_each_mut<R, F>(mut range: R, mut f: F)
where
    R: MutRange,
    F: FnMut(&mut R::Value),
{
    let mut pos = range.begin_pos();
    while !range.is_end_pos(&pos) {
        f(range.at_pos_mut(&pos));
        range.inc_pos(&mut pos);
    }
}

/// Returns the first pair of positions whose elements differ, walking both
/// ranges in lockstep. Either position may be an end.
#[inline]
pub fn mismatch<A, B>(a: A, b: B) -> (A::Position, B::Position)
where
    A: Range,
    B: Range,
    A::Value: PartialEq<B::Value>,
{
    mismatch_by(a, b, |x, y| x == y)
}

/// [`mismatch`] with a custom equivalence, called as `eq(a_value, b_value)`.
pub fn mismatch_by<A, B, F>(a: A, b: B, mut eq: F) -> (A::Position, B::Position)
where
    A: Range,
    B: Range,
    F: FnMut(&A::Value, &B::Value) -> bool,
{
    let mut pa = a.begin_pos();
    let mut pb = b.begin_pos();
    while !a.is_end_pos(&pa) && !b.is_end_pos(&pb) && eq(a.at_pos(&pa), b.at_pos(&pb)) {
        a.inc_pos(&mut pa);
        b.inc_pos(&mut pb);
    }
    (pa, pb)
}

/// Returns `true` if both ranges have the same length and equal elements.
#[inline]
pub fn equal<A, B>(a: A, b: B) -> bool
where
    A: Range,
    B: Range,
    A::Value: PartialEq<B::Value>,
{
    equal_by(a, b, |x, y| x == y)
}

/// [`equal`] with a custom equivalence, called as `eq(a_value, b_value)`.
#[inline]
pub fn equal_by<A, B, F>(a: A, b: B, eq: F) -> bool
where
    A: Range,
    B: Range,
    F: FnMut(&A::Value, &B::Value) -> bool,
{
    let (pa, pb) = mismatch_by(&a, &b, eq);
    a.is_end_pos(&pa) && b.is_end_pos(&pb)
}

/// Returns the first position whose element equals its successor.
#[inline]
pub fn adjacent_find<R>(range: R) -> R::Position
where
    R: MultiPassRange,
    R::Value: PartialEq,
{
    adjacent_find_by(range, |x, y| x == y)
}

/// Returns the first position `p` for which `eq(value at p, value after p)`
/// holds, or the end.
pub fn adjacent_find_by<R, F>(range: R, mut eq: F) -> R::Position
where
    R: MultiPassRange,
    F: FnMut(&R::Value, &R::Value) -> bool,
{
    let mut pos = range.begin_pos();
    if range.is_end_pos(&pos) {
        return pos;
    }
    let mut next = pos.clone();
    range.inc_pos(&mut next);
    while !range.is_end_pos(&next) {
        if eq(range.at_pos(&pos), range.at_pos(&next)) {
            return pos;
        }
        pos = next.clone();
        range.inc_pos(&mut next);
    }
    next
}

/// Returns the first position whose element equals any element of `needles`.
#[inline]
pub fn find_first_of<R, N>(range: R, needles: N) -> R::Position
where
    R: Range,
    N: MultiPassRange,
    R::Value: PartialEq<N::Value>,
{
    find_first_of_by(range, needles, |x, y| x == y)
}

/// [`find_first_of`] with a custom equivalence, called as `eq(value, needle)`.
pub fn find_first_of_by<R, N, F>(range: R, needles: N, mut eq: F) -> R::Position
where
    R: Range,
    N: MultiPassRange,
    F: FnMut(&R::Value, &N::Value) -> bool,
{
    find_if(range, |x| {
        let mut n = needles.begin_pos();
        while !needles.is_end_pos(&n) {
            if eq(x, needles.at_pos(&n)) {
                return true;
            }
            needles.inc_pos(&mut n);
        }
        false
    })
}

/// Returns the first position at which `needle` occurs as a contiguous run,
/// or the end. An empty needle matches at the begin.
#[inline]
pub fn search<H, N>(haystack: H, needle: N) -> H::Position
where
    H: MultiPassRange,
    N: MultiPassRange,
    H::Value: PartialEq<N::Value>,
{
    search_by(haystack, needle, |x, y| x == y)
}

/// [`search`] with a custom equivalence, called as `eq(haystack_value, needle_value)`.
pub fn search_by<H, N, F>(haystack: H, needle: N, mut eq: F) -> H::Position
where
    H: MultiPassRange,
    N: MultiPassRange,
    F: FnMut(&H::Value, &N::Value) -> bool,
{
    let mut candidate = haystack.begin_pos();
    let end = haystack.end_position();
    loop {
        let window = SubRange::new(&haystack, candidate.clone(), end.clone());
        let (in_window, in_needle) = mismatch_by(&window, &needle, &mut eq);
        if needle.is_end_pos(&in_needle) {
            return candidate;
        }
        if window.is_end_pos(&in_window) {
            // The rest of the haystack is shorter than the needle.
            return end;
        }
        haystack.inc_pos(&mut candidate);
    }
}

/// Returns the first position starting `n` consecutive elements equal to
/// `value`, or the end. `n == 0` matches at the begin.
#[inline]
pub fn search_n<R>(range: R, n: usize, value: &R::Value) -> R::Position
where
    R: MultiPassRange,
    R::Value: PartialEq,
{
    search_n_by(range, n, |x| x == value)
}

/// Returns the first position starting `n` consecutive elements that
/// satisfy `pred`, or the end.
pub fn search_n_by<R, P>(range: R, n: usize, mut pred: P) -> R::Position
where
    R: MultiPassRange,
    P: FnMut(&R::Value) -> bool,
{
    let mut pos = range.begin_pos();
    if n == 0 {
        return pos;
    }
    let mut run_start = pos.clone();
    let mut run_len = 0;
    while !range.is_end_pos(&pos) {
        if pred(range.at_pos(&pos)) {
            if run_len == 0 {
                run_start = pos.clone();
            }
            run_len += 1;
            if run_len == n {
                return run_start;
            }
        } else {
            run_len = 0;
        }
        range.inc_pos(&mut pos);
    }
    pos
}

/// Returns `true` if `b` is a rearrangement of `a`.
#[inline]
pub fn is_permutation<A, B>(a: A, b: B) -> bool
where
    A: MultiPassRange,
    B: MultiPassRange,
    A::Value: PartialEq<B::Value>,
{
    is_permutation_by(a, b, |x, y| x == y)
}

/// Returns `true` if the elements of `b` can be matched one-to-one with
/// those of `a` under `eq`, which is always called as `eq(a_value, b_value)`.
///
/// Runs in O(n * m) comparisons and needs no ordering or hashing.
pub fn is_permutation_by<A, B, F>(a: A, b: B, mut eq: F) -> bool
where
    A: MultiPassRange,
    B: MultiPassRange,
    F: FnMut(&A::Value, &B::Value) -> bool,
{
    let len = a.count_elements();
    if len != b.count_elements() {
        return false;
    }
    let mut matched = FixedBitSet::with_capacity(len);
    let mut pa = a.begin_pos();
    while !a.is_end_pos(&pa) {
        let left = a.at_pos(&pa);
        let mut pb = b.begin_pos();
        let mut index = 0;
        let mut found = false;
        while !b.is_end_pos(&pb) {
            if !matched.contains(index) && eq(left, b.at_pos(&pb)) {
                matched.insert(index);
                found = true;
                break;
            }
            b.inc_pos(&mut pb);
            index += 1;
        }
        if !found {
            return false;
        }
        a.inc_pos(&mut pa);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ForwardVec;
    use stride_bridge::range::GeneratorRange;
    use stride_bridge::sources::IterGenerator;
    use stride_core::iota::Iota;
    use stride_core::range::RandomAccessRange;

    #[test]
    fn test_find_and_find_if() {
        let v = [4, 8, 15, 16, 23, 42];
        assert_eq!(find(&v, &16).get(), 3);
        assert_eq!(find(&v, &99), v.end_position());
        assert_eq!(find_if(&v, |x| x % 2 == 1).get(), 2);
        assert_eq!(find_if_not(&v, |x| *x < 10).get(), 2);
    }

    #[test]
    fn test_find_on_stream_keeps_reading_position() {
        let r = GeneratorRange::new(IterGenerator::new(1..10));
        let mut pos = find_if(&r, |x| *x > 3);
        assert_eq!(*r.at_pos(&pos), 4);
        r.inc_pos(&mut pos);
        assert_eq!(pos.take_current(), Some(5));
    }

    #[test]
    fn test_quantifiers() {
        let v = vec![2, 4, 6];
        assert!(all_of(&v, |x| x % 2 == 0));
        assert!(!any_of(&v, |x| x % 2 == 1));
        assert!(none_of(&v, |x| *x > 6));
        let empty: Vec<i32> = Vec::new();
        assert!(all_of(&empty, |_| false));
        assert!(!any_of(&empty, |_| true));
    }

    #[test]
    fn test_counting() {
        let v = [1, 2, 1, 3, 1];
        assert_eq!(count(&v, &1), 3);
        assert_eq!(count_if(&v, |x| *x > 1), 2);
        assert_eq!(count_if(Iota::new(0, 100), |x| x % 10 == 0), 10);
    }

    #[test]
    fn test_for_each_variants() {
        let mut v = vec![1, 2, 3];
        let mut sum = 0;
        for_each(&v, |x| sum += x);
        assert_eq!(sum, 6);
        for_each_mut(&mut v, |x| *x *= 2);
        assert_eq!(v, vec![2, 4, 6]);
    }

    #[test]
    fn test_mismatch_and_equal() {
        let a = [1, 2, 3, 4];
        let b = vec![1, 2, 9];
        let (pa, pb) = mismatch(&a, &b);
        assert_eq!((pa.get(), pb.get()), (2, 2));
        assert!(equal(&a, &[1, 2, 3, 4]));
        assert!(!equal(&a, &[1, 2, 3]));
        assert!(!equal(&a[..3], &a));
        assert!(equal_by(&a, Iota::new(1, 5), |x, y| x == y));
    }

    #[test]
    fn test_adjacent_find() {
        let v = [1, 2, 3, 3, 4, 4];
        assert_eq!(adjacent_find(&v).get(), 2);
        assert_eq!(adjacent_find(&[1, 2, 3]).get(), 3);
        assert_eq!(adjacent_find(&[0u8; 0]).get(), 0);
        assert_eq!(adjacent_find_by(&v, |x, y| y < x).get(), 6);
    }

    #[test]
    fn test_find_first_of() {
        let text = b"hello, world";
        assert_eq!(find_first_of(text, b" ,").get(), 5);
        assert_eq!(find_first_of(text, b"xyz").get(), text.len());
    }

    #[test]
    fn test_search() {
        let hay = [1, 2, 1, 2, 3, 1];
        assert_eq!(search(&hay, &[1, 2, 3]).get(), 2);
        assert_eq!(search(&hay, &[2, 3, 1]).get(), 3);
        assert_eq!(search(&hay, &[3, 1, 4]), hay.end_position());
        assert_eq!(search(&hay, &[0i32; 0]).get(), 0);
        assert_eq!(search(&[1, 2], &[1, 2, 3]).get(), 2);
    }

    #[test]
    fn test_search_on_forward_range() {
        let hay = ForwardVec::new(b"abracadabra".to_vec());
        assert_eq!(search(&hay, b"cad"), 4);
        assert_eq!(search_by(&hay, b"CAD", |x, y| x.eq_ignore_ascii_case(y)), 4);
    }

    #[test]
    fn test_search_n() {
        let v = [0, 1, 1, 0, 1, 1, 1];
        assert_eq!(search_n(&v, 3, &1).get(), 4);
        assert_eq!(search_n(&v, 2, &1).get(), 1);
        assert_eq!(search_n(&v, 4, &1), v.end_position());
        assert_eq!(search_n(&v, 0, &7).get(), 0);
        assert_eq!(search_n_by(&v, 2, |x| *x == 0), v.end_position());
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[1, 2, 3, 2], &[2, 3, 2, 1]));
        assert!(!is_permutation(&[1, 2, 2], &[1, 1, 2]));
        assert!(!is_permutation(&[1, 2], &[1, 2, 3]));
        let nums = [1, 2, 3];
        let words = ["three", "one", "two"];
        let names = ["zero", "one", "two", "three"];
        assert!(is_permutation_by(&nums, &words, |n, w| names[*n] == *w));
    }

    #[test]
    fn test_nth_position_roundtrip() {
        let v = vec![5, 6, 7];
        assert_eq!(find(&v, &7), v.nth_pos(2));
    }
}
