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

//! # Stride Algorithms
//!
//! Generic algorithms over [`stride_core`] ranges. Every function states the
//! weakest capability it needs in its bounds, and picks a better strategy
//! at compile time when the range offers more:
//!
//! | Family | Module | Needs |
//! |---|---|---|
//! | linear search, counting, comparison | [`search`] | single-pass |
//! | copy, transform, fill, remove, unique | [`copy`] | single-pass / mutable |
//! | partition | [`partition`] | multi-pass, two-ended when bidirectional |
//! | quicksort, selection | [`sort`] | multi-pass |
//! | stable sort, stable partition, in-place merge | [`stable`] | multi-pass |
//! | binary search | [`bsearch`] | multi-pass, O(1) jumps when random-access |
//! | heaps | [`heap`] | random-access |
//! | merge and set algebra | [`set`] | single-pass |
//! | extremes, permutations | [`order`] | multi-pass / bidirectional |
//!
//! Algorithms that may use scratch memory take an [`AlgorithmConfig`]
//! through their `_with` variants. When scratch is refused or cannot be
//! allocated they run an in-place strategy with the same result.

pub mod bsearch;
pub mod config;
pub mod copy;
pub mod heap;
pub mod order;
pub mod partition;
pub mod search;
pub mod set;
pub mod sort;
pub mod stable;

pub(crate) mod scratch;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod tests;

pub use config::{AlgorithmConfig, AlgorithmConfigBuilder, ScratchPolicy};
pub use partition::PartitionStrategy;
