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

//! # Stride Bridge
//!
//! The producer/consumer boundary between ranges and everything else.
//!
//! - [`generator::Generator`] is the pull side: `has_next` peeks, `pull`
//!   takes. [`sources`] has generators over ranges, functions, iterators,
//!   constants and `io::Read`.
//! - [`consumer::Consumer`] is the push side: `accept` returns `false` to
//!   stop. Vectors, mutable ranges and `io::Write` are consumers.
//! - [`range::GeneratorRange`] turns any generator into a single-pass range,
//!   so single-pass algorithms read streams without further adapters.
//!
//! I/O errors never cross this boundary as panics or return values of the
//! protocol methods: the byte bridges end the stream and keep the first
//! error for the caller to inspect.

pub mod consumer;
pub mod generator;
pub mod range;
pub mod sources;

pub use consumer::{Bounded, Consumer, FnConsumer, RangeSink, WriteConsumer};
pub use generator::{Generator, Pulled};
pub use range::{GeneratorPos, GeneratorRange};
pub use sources::{CursorGenerator, FnGenerator, IterGenerator, ReadGenerator, Repeat, Until};
