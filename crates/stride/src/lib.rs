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

//! # Stride
//!
//! Generic ranges and the algorithms that run on them.
//!
//! This crate bundles the workspace into one dependency:
//!
//! - [`stride_core`]: the range capability model, slices and integer
//!   sequences.
//! - [`stride_adapt`]: windows, counted and reversed views of other ranges.
//! - [`stride_bridge`]: generators, consumers and byte streams.
//! - [`stride_algo`]: search, copy, partition, sort, heap, set and order
//!   algorithms.
//!
//! Most code only needs the [`prelude`].
//!
//! ```rust
//! use stride::prelude::*;
//!
//! let mut v = vec![5, 3, 1, 4, 1, 5, 9, 2, 6];
//! sort(&mut v);
//! assert_eq!(v, vec![1, 1, 2, 3, 4, 5, 5, 6, 9]);
//!
//! let pos = lower_bound(&v, &5);
//! assert_eq!(pos.get(), 5);
//! ```

pub use stride_adapt;
pub use stride_algo;
pub use stride_bridge;
pub use stride_core;

/// The range traits, the common adapters and the algorithm entry points.
pub mod prelude {
    pub use stride_adapt::{Counted, Delegated, Delimited, RangeExt, Reverse, SubRange};
    pub use stride_algo::bsearch::{
        binary_search, equal_range, lower_bound, lower_bound_by, partition_point, upper_bound,
        upper_bound_by,
    };
    pub use stride_algo::copy::{
        copy, copy_if, fill, remove_if, replace, reverse, rotate, transform, unique,
    };
    pub use stride_algo::heap::{is_heap, make_heap, pop_heap, push_heap, sort_heap};
    pub use stride_algo::order::{
        lexicographical_compare, max_element, min_element, minmax_element, next_permutation,
        prev_permutation,
    };
    pub use stride_algo::partition::{is_partitioned, partition};
    pub use stride_algo::search::{
        all_of, any_of, count, count_if, equal, find, find_if, mismatch, none_of, search,
    };
    pub use stride_algo::set::{
        includes, merge, set_difference, set_intersection, set_symmetric_difference, set_union,
    };
    pub use stride_algo::sort::{is_sorted, nth_element, partial_sort, sort, sort_by, sort_by_key};
    pub use stride_algo::stable::{inplace_merge, stable_partition, stable_sort, stable_sort_by_key};
    pub use stride_algo::{AlgorithmConfig, ScratchPolicy};
    pub use stride_bridge::{Consumer, Generator, GeneratorRange};
    pub use stride_core::iota::Iota;
    pub use stride_core::iter::values;
    pub use stride_core::{
        BidirectionalRange, MultiPassRange, MutRange, RandomAccessRange, Range, SlicePos,
    };
}
