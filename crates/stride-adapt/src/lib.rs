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

//! # Stride Adapters
//!
//! Ranges built on top of other ranges. Each adapter owns (or borrows,
//! when given `&R`/`&mut R`) a base range and changes one thing about it:
//!
//! - [`subrange::SubRange`]: a `[begin, end)` window.
//! - [`delimited::Delimited`]: the base's begin with an explicit end.
//! - [`counted::Counted`]: the first `n` elements.
//! - [`delegated::Delegated`]: ends where a predicate says so.
//! - [`reverse::Reverse`]: back to front.
//!
//! Adapters keep the base's category and forward mutation, so every
//! algorithm that runs on a slice also runs on a window of it. Narrowing
//! never lets a traversal move past the base's own bounds.

pub mod counted;
pub mod delegated;
pub mod delimited;
pub mod ext;
pub mod reverse;
pub mod subrange;

pub use counted::{Counted, CountedPos};
pub use delegated::Delegated;
pub use delimited::Delimited;
pub use ext::RangeExt;
pub use reverse::{Reverse, ReversePos};
pub use subrange::SubRange;
