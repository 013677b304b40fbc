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

//! # Generators
//!
//! A generator is a pull-based producer. It can be asked whether another
//! value exists without giving that value up (`has_next`), and it can be
//! pulled (`pull`), which yields the value and advances. Asking twice in a
//! row returns the same answer; a generator that reported `false` stays
//! exhausted.
//!
//! Generators are the producer half of the bridge between algorithms and
//! I/O. Wrapping one in a [`GeneratorRange`](crate::range::GeneratorRange)
//! makes it a single-pass range; the [`Consumer`](crate::consumer::Consumer)
//! trait is the matching sink.

use crate::consumer::Consumer;

/// A pull-based producer of values.
pub trait Generator {
    /// The produced value type.
    type Item;

    /// Returns `true` if a call to `pull` would yield a value.
    ///
    /// This never consumes a value, though it may buffer one internally.
    fn has_next(&mut self) -> bool;

    /// Yields the next value, or `None` once the generator is exhausted.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Moves values into `sink` until either side stops.
    ///
    /// Returns the number of values the sink accepted. A value the sink
    /// rejects has already been pulled and is dropped.
    fn feed<C>(&mut self, sink: &mut C) -> usize
    where
        C: Consumer<Self::Item> + ?Sized,
        Self: Sized,
    {
        let mut accepted = 0;
        while let Some(value) = self.pull() {
            if !sink.accept(value) {
                break;
            }
            accepted += 1;
        }
        accepted
    }
}

impl<G> Generator for &mut G
where
    G: Generator + ?Sized,
{
    type Item = G::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn pull(&mut self) -> Option<G::Item> {
        (**self).pull()
    }
}

impl<G> Generator for Box<G>
where
    G: Generator + ?Sized,
{
    type Item = G::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn pull(&mut self) -> Option<G::Item> {
        (**self).pull()
    }
}

/// Adapts a generator into a standard iterator.
#[derive(Debug, Clone)]
pub struct Pulled<G> {
    generator: G,
}

impl<G> Pulled<G> {
    /// Wraps `generator`.
    #[inline]
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Returns the wrapped generator.
    #[inline]
    pub fn into_inner(self) -> G {
        self.generator
    }
}

impl<G> Iterator for Pulled<G>
where
    G: Generator,
{
    type Item = G::Item;

    #[inline]
    fn next(&mut self) -> Option<G::Item> {
        self.generator.pull()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{IterGenerator, Repeat};

    #[test]
    fn test_has_next_does_not_consume() {
        let mut g = IterGenerator::new(vec![1, 2].into_iter());
        assert!(g.has_next());
        assert!(g.has_next());
        assert_eq!(g.pull(), Some(1));
        assert_eq!(g.pull(), Some(2));
        assert!(!g.has_next());
        assert_eq!(g.pull(), None);
    }

    #[test]
    fn test_feed_stops_at_generator_end() {
        let mut g = Repeat::bounded('x', 3);
        let mut out = Vec::new();
        assert_eq!(g.feed(&mut out), 3);
        assert_eq!(out, vec!['x', 'x', 'x']);
    }

    #[test]
    fn test_by_reference_and_boxed() {
        let mut g = IterGenerator::new(0..3);
        assert_eq!((&mut g).pull(), Some(0));
        let mut boxed: Box<dyn Generator<Item = i32>> = Box::new(g);
        assert!(boxed.has_next());
        assert_eq!(Pulled::new(boxed).collect::<Vec<_>>(), vec![1, 2]);
    }
}
