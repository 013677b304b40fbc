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

//! # Stride Core
//!
//! The range capability model that the rest of the Stride workspace is
//! built on. A *range* hands out opaque *positions*, answers whether a
//! position is the end, reads the element at a position and moves
//! positions around; how much it can move them is its *category*.
//!
//! ## Modules
//!
//! - `category`: The four traversal categories (`SinglePass`, `MultiPass`,
//!   `Bidirectional`, `RandomAccess`) as zero-sized markers with an ordered
//!   `CategoryKind`, plus refinement marker traits.
//! - `range`: The range traits (`Range`, `MultiPassRange`,
//!   `BidirectionalRange`, `RandomAccessRange`, `DelimitedRange`,
//!   `CountedRange`, `MutRange`), compile-time capability queries, and the
//!   forwarding implementations for `&R` and `&mut R`.
//! - `position`: `SlicePos` and free-function cursor helpers.
//! - `slice`: Slices, arrays and vectors as random-access mutable ranges.
//! - `iota`: Half-open integer sequences as storage-free ranges.
//! - `error`: `RangeError` and the checked element accessors.
//! - `iter`: Bridges from ranges to `std::iter::Iterator`.
//!
//! ## Contract
//!
//! Positions are only meaningful for the range that produced them, and the
//! core operations do not validate their preconditions outside of debug
//! builds. The checked accessors in `error` are the single exception.

pub mod category;
pub mod error;
pub mod iota;
pub mod iter;
pub mod position;
pub mod range;
mod slice;

pub use category::{Bidirectional, Category, CategoryKind, MultiPass, RandomAccess, SinglePass};
pub use error::RangeError;
pub use position::SlicePos;
pub use range::{
    BidirectionalRange, CountedRange, DelimitedRange, MultiPassRange, MutRange, RandomAccessRange,
    Range,
};
