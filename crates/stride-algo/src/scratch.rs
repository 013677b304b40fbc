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

//! Scratch buffers for the buffered algorithm strategies.
//!
//! Buffered strategies never move elements into the buffer. They record the
//! positions of the range in a vector, compute where every element has to go
//! as a permutation of indices, and then apply that permutation with swaps.
//! This works for element types that are neither `Clone` nor `Default` and
//! for every multi-pass category, since looking up the k-th recorded
//! position is constant time regardless of how the range navigates.
//!
//! Requests go through the configured [`ScratchPolicy`](crate::config::ScratchPolicy)
//! and `try_reserve_exact`; a refused or failed request returns `None` and
//! the caller runs its in-place strategy instead.

use crate::config::AlgorithmConfig;
use fixedbitset::FixedBitSet;
use smallvec::SmallVec;
use stride_core::range::{MultiPassRange, MutRange};

/// Index buffer; short inputs stay on the stack.
pub(crate) type IndexBuf = SmallVec<[usize; 32]>;

/// Reserves a vector for `len` elements, or `None` if the policy refuses or
/// the allocation fails.
pub(crate) fn reserve<T>(config: &AlgorithmConfig, len: usize, algorithm: &str) -> Option<Vec<T>> {
    if !config.scratch().allows(len) {
        log::debug!(
            "{}: scratch policy ({}) refuses {} elements, running in place",
            algorithm,
            config.scratch(),
            len
        );
        return None;
    }
    let mut buf = Vec::new();
    match buf.try_reserve_exact(len) {
        Ok(()) => Some(buf),
        Err(e) => {
            log::debug!(
                "{}: scratch allocation for {} elements failed ({}), running in place",
                algorithm,
                len,
                e
            );
            None
        }
    }
}

/// Reserves an index buffer for `len` indices under the same rules as [`reserve`].
pub(crate) fn reserve_indices(
    config: &AlgorithmConfig,
    len: usize,
    algorithm: &str,
) -> Option<IndexBuf> {
    if !config.scratch().allows(len) {
        log::debug!(
            "{}: scratch policy ({}) refuses {} indices, running in place",
            algorithm,
            config.scratch(),
            len
        );
        return None;
    }
    let mut buf = IndexBuf::new();
    match buf.try_reserve_exact(len) {
        Ok(()) => Some(buf),
        Err(e) => {
            log::debug!(
                "{}: index buffer for {} entries failed ({:?}), running in place",
                algorithm,
                len,
                e
            );
            None
        }
    }
}

/// Reserves and fills a buffer with the positions `[first, first + len)`.
pub(crate) fn record_positions<R>(
    range: &R,
    first: &R::Position,
    len: usize,
    config: &AlgorithmConfig,
    algorithm: &str,
) -> Option<Vec<R::Position>>
where
    R: MultiPassRange + ?Sized,
{
    let mut positions = reserve(config, len, algorithm)?;
    let mut pos = first.clone();
    for _ in 0..len {
        positions.push(pos.clone());
        range.inc_pos(&mut pos);
    }
    Some(positions)
}

/// Rearranges the elements at `positions` so that slot `k` receives the
/// element that was at slot `order[k]`.
///
/// `order` must be a permutation of `0..positions.len()`.
pub(crate) fn apply_permutation<R>(range: &mut R, positions: &[R::Position], order: &[usize])
where
    R: MultiPassRange + MutRange + ?Sized,
{
    debug_assert_eq!(positions.len(), order.len());
    let mut placed = FixedBitSet::with_capacity(order.len());
    for start in 0..order.len() {
        if placed.put(start) {
            continue;
        }
        let mut cur = start;
        loop {
            let next = order[cur];
            if next == start {
                break;
            }
            range.swap_pos(&positions[cur], &positions[next]);
            placed.insert(next);
            cur = next;
        }
    }
}
