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

//! # Generator Ranges
//!
//! `GeneratorRange<G>` presents a generator as a single-pass range, which
//! is all it takes for linear search, copy, merge and set algorithms to
//! read from a stream.
//!
//! The position owns the generator together with the value it currently
//! points at. `begin_pos` therefore moves the generator out of the range
//! (through a `Cell`, since `begin_pos` takes `&self`); asking for the begin
//! a second time yields an exhausted position. That is exactly the
//! single-pass contract: a range may be traversed once.

use crate::generator::Generator;
use std::cell::Cell;
use stride_core::category::SinglePass;
use stride_core::range::Range;

/// A single-pass range over the values of a generator.
///
/// # Examples
///
/// ```rust
/// # use stride_bridge::range::GeneratorRange;
/// # use stride_bridge::sources::IterGenerator;
/// # use stride_core::iter::values;
///
/// let r = GeneratorRange::new(IterGenerator::new(1..=3));
/// assert_eq!(values(&r).collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub struct GeneratorRange<G> {
    source: Cell<Option<G>>,
}

impl<G> std::fmt::Debug for GeneratorRange<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRange").finish_non_exhaustive()
    }
}

impl<G> GeneratorRange<G>
where
    G: Generator,
{
    /// Wraps `generator`.
    #[inline]
    pub fn new(generator: G) -> Self {
        Self {
            source: Cell::new(Some(generator)),
        }
    }

    /// Returns the generator if no traversal has started.
    #[inline]
    pub fn into_generator(self) -> Option<G> {
        self.source.into_inner()
    }
}

/// A position of a [`GeneratorRange`]: the generator and its current value.
pub struct GeneratorPos<G>
where
    G: Generator,
{
    generator: Option<G>,
    current: Option<G::Item>,
}

impl<G> std::fmt::Debug for GeneratorPos<G>
where
    G: Generator,
    G::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorPos")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<G> GeneratorPos<G>
where
    G: Generator,
{
    /// Returns the generator, positioned after the current value.
    ///
    /// The current value is dropped. Use [`take_current`](Self::take_current)
    /// first to keep it.
    #[inline]
    pub fn into_generator(self) -> Option<G> {
        self.generator
    }

    /// Moves the current value out, leaving the position at the end.
    #[inline]
    pub fn take_current(&mut self) -> Option<G::Item> {
        self.current.take()
    }
}

impl<G> Range for GeneratorRange<G>
where
    G: Generator,
{
    type Value = G::Item;
    type Position = GeneratorPos<G>;
    type Category = SinglePass;

    fn begin_pos(&self) -> GeneratorPos<G> {
        let mut generator = self.source.take();
        let current = generator.as_mut().and_then(Generator::pull);
        GeneratorPos { generator, current }
    }

    #[inline]
    fn is_end_pos(&self, pos: &GeneratorPos<G>) -> bool {
        pos.current.is_none()
    }

    #[inline]
    fn inc_pos(&self, pos: &mut GeneratorPos<G>) {
        pos.current = pos.generator.as_mut().and_then(Generator::pull);
    }

    #[inline]
    fn at_pos<'a>(&'a self, pos: &'a GeneratorPos<G>) -> &'a G::Item {
        pos.current
            .as_ref()
            .expect("read through the end of a generator range")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{FnGenerator, IterGenerator};
    use stride_core::range::{is_multi_pass, is_single_pass};

    #[test]
    fn test_single_pass_category() {
        type R = GeneratorRange<IterGenerator<std::ops::Range<u8>>>;
        assert!(is_single_pass::<R>());
        assert!(!is_multi_pass::<R>());
    }

    #[test]
    fn test_walks_generated_values() {
        let mut n = 0;
        let r = GeneratorRange::new(FnGenerator::new(|| {
            n += 1;
            (n <= 3).then_some(n * 10)
        }));
        let mut pos = r.begin_pos();
        let mut seen = Vec::new();
        while !r.is_end_pos(&pos) {
            seen.push(*r.at_pos(&pos));
            r.inc_pos(&mut pos);
        }
        assert_eq!(seen, vec![10, 20, 30]);
    }

    #[test]
    fn test_second_traversal_is_empty() {
        let r = GeneratorRange::new(IterGenerator::new(0..2));
        let first = r.begin_pos();
        assert!(!r.is_end_pos(&first));
        let second = r.begin_pos();
        assert!(r.is_end_pos(&second));
    }

    #[test]
    fn test_recover_generator_after_partial_read() {
        let r = GeneratorRange::new(IterGenerator::new(0..5));
        let mut pos = r.begin_pos();
        r.inc_pos(&mut pos);
        assert_eq!(pos.take_current(), Some(1));
        let mut rest = pos.into_generator().expect("generator should still be owned");
        assert_eq!(rest.pull(), Some(2));
    }

    #[test]
    fn test_untouched_range_returns_generator() {
        let r = GeneratorRange::new(IterGenerator::new(0..1));
        assert!(r.into_generator().is_some());
    }
}
