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

//! # Standard Generators
//!
//! Ready-made producers: reading a range through a cursor, calling a
//! function, repeating a value, draining an iterator, reading bytes from an
//! `io::Read`, and cutting another generator short at a sentinel.

use crate::generator::Generator;
use std::io::{self, BufRead, BufReader, Read};
use std::iter::Peekable;
use stride_core::range::Range;

/// Produces clones of the elements of a range, starting at a position.
#[derive(Debug, Clone)]
pub struct CursorGenerator<R>
where
    R: Range,
{
    range: R,
    pos: R::Position,
}

impl<R> CursorGenerator<R>
where
    R: Range,
{
    /// Creates a generator over every element of `range`.
    #[inline]
    pub fn new(range: R) -> Self {
        let pos = range.begin_pos();
        Self { range, pos }
    }

    /// Creates a generator that starts at `pos`.
    #[inline]
    pub fn from_pos(range: R, pos: R::Position) -> Self {
        Self { range, pos }
    }

    /// Returns the position of the next value.
    #[inline]
    pub fn position(&self) -> &R::Position {
        &self.pos
    }

    /// Splits the generator into its range and cursor.
    #[inline]
    pub fn into_parts(self) -> (R, R::Position) {
        (self.range, self.pos)
    }
}

impl<R> Generator for CursorGenerator<R>
where
    R: Range,
    R::Value: Clone,
{
    type Item = R::Value;

    #[inline]
    fn has_next(&mut self) -> bool {
        !self.range.is_end_pos(&self.pos)
    }

    #[inline]
    fn pull(&mut self) -> Option<R::Value> {
        if self.range.is_end_pos(&self.pos) {
            return None;
        }
        let value = self.range.at_pos(&self.pos).clone();
        self.range.inc_pos(&mut self.pos);
        Some(value)
    }
}

/// Produces the values returned by a function until it returns `None`.
///
/// `has_next` calls the function ahead of time and holds the value until it
/// is pulled. Once the function has returned `None` it is not called again.
pub struct FnGenerator<F, T> {
    f: F,
    peeked: Option<T>,
    done: bool,
}

impl<F, T> std::fmt::Debug for FnGenerator<F, T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnGenerator")
            .field("peeked", &self.peeked)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<F, T> FnGenerator<F, T>
where
    F: FnMut() -> Option<T>,
{
    /// Wraps `f`.
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            peeked: None,
            done: false,
        }
    }
}

impl<F, T> Generator for FnGenerator<F, T>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        if self.peeked.is_none() && !self.done {
            self.peeked = (self.f)();
            self.done = self.peeked.is_none();
        }
        self.peeked.is_some()
    }

    fn pull(&mut self) -> Option<T> {
        if let Some(value) = self.peeked.take() {
            return Some(value);
        }
        if self.done {
            return None;
        }
        let value = (self.f)();
        self.done = value.is_none();
        value
    }
}

/// Produces the same value over and over, optionally a fixed number of times.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    remaining: Option<usize>,
}

impl<T> Repeat<T>
where
    T: Clone,
{
    /// Repeats `value` without end.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            remaining: None,
        }
    }

    /// Repeats `value` exactly `count` times.
    #[inline]
    pub fn bounded(value: T, count: usize) -> Self {
        Self {
            value,
            remaining: Some(count),
        }
    }
}

impl<T> Generator for Repeat<T>
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.remaining != Some(0)
    }

    #[inline]
    fn pull(&mut self) -> Option<T> {
        match &mut self.remaining {
            Some(0) => None,
            Some(n) => {
                *n -= 1;
                Some(self.value.clone())
            }
            None => Some(self.value.clone()),
        }
    }
}

/// Produces the items of an iterator.
pub struct IterGenerator<I>
where
    I: Iterator,
{
    iter: Peekable<I>,
}

impl<I> std::fmt::Debug for IterGenerator<I>
where
    I: Iterator + std::fmt::Debug,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterGenerator")
            .field("iter", &self.iter)
            .finish()
    }
}

impl<I> Clone for IterGenerator<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<I> IterGenerator<I>
where
    I: Iterator,
{
    /// Wraps `iter`.
    #[inline]
    pub fn new(iter: I) -> Self {
        Self {
            iter: iter.peekable(),
        }
    }
}

impl<I> Generator for IterGenerator<I>
where
    I: Iterator,
{
    type Item = I::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.iter.peek().is_some()
    }

    #[inline]
    fn pull(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}

/// Produces the bytes of a buffered reader.
///
/// Interrupted reads are retried. Any other I/O error ends the generator;
/// the first such error is kept and can be retrieved with
/// [`take_error`](ReadGenerator::take_error).
#[derive(Debug)]
pub struct ReadGenerator<B> {
    reader: B,
    error: Option<io::Error>,
    failed: bool,
}

impl<R> ReadGenerator<BufReader<R>>
where
    R: Read,
{
    /// Wraps an unbuffered reader in a `BufReader`.
    #[inline]
    pub fn from_reader(reader: R) -> Self {
        Self::new(BufReader::new(reader))
    }
}

impl<B> ReadGenerator<B>
where
    B: BufRead,
{
    /// Wraps a buffered reader.
    #[inline]
    pub fn new(reader: B) -> Self {
        Self {
            reader,
            error: None,
            failed: false,
        }
    }

    /// Takes the I/O error that ended the generator, if any.
    #[inline]
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Returns `true` if reading stopped because of an I/O error.
    #[inline]
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Returns the wrapped reader.
    #[inline]
    pub fn into_inner(self) -> B {
        self.reader
    }

    /// Returns the next buffered byte without consuming it.
    fn peek_byte(&mut self) -> Option<u8> {
        if self.failed {
            return None;
        }
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::debug!("byte generator stopped on I/O error: {e}");
                    self.error = Some(e);
                    self.failed = true;
                    return None;
                }
            }
        }
    }
}

impl<B> Generator for ReadGenerator<B>
where
    B: BufRead,
{
    type Item = u8;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.peek_byte().is_some()
    }

    #[inline]
    fn pull(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        self.reader.consume(1);
        Some(byte)
    }
}

/// Ends another generator at the first value matching a predicate.
///
/// The matching value is pulled from the inner generator but not yielded.
pub struct Until<G, P>
where
    G: Generator,
{
    inner: G,
    is_end: P,
    peeked: Option<G::Item>,
    done: bool,
}

impl<G, P> std::fmt::Debug for Until<G, P>
where
    G: Generator + std::fmt::Debug,
    G::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Until")
            .field("inner", &self.inner)
            .field("peeked", &self.peeked)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<G, P> Until<G, P>
where
    G: Generator,
    P: FnMut(&G::Item) -> bool,
{
    /// Wraps `inner`, stopping at the first value for which `is_end` holds.
    #[inline]
    pub fn new(inner: G, is_end: P) -> Self {
        Self {
            inner,
            is_end,
            peeked: None,
            done: false,
        }
    }

    /// Returns the inner generator.
    ///
    /// After the sentinel was seen the inner generator is positioned just
    /// past it.
    #[inline]
    pub fn into_inner(self) -> G {
        self.inner
    }

    fn fill(&mut self) {
        if self.peeked.is_some() || self.done {
            return;
        }
        match self.inner.pull() {
            Some(value) if !(self.is_end)(&value) => self.peeked = Some(value),
            _ => self.done = true,
        }
    }
}

impl<G, P> Generator for Until<G, P>
where
    G: Generator,
    P: FnMut(&G::Item) -> bool,
{
    type Item = G::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.fill();
        self.peeked.is_some()
    }

    #[inline]
    fn pull(&mut self) -> Option<G::Item> {
        self.fill();
        self.peeked.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cursor_generator_reads_slice() {
        let v = vec![1, 2, 3];
        let mut g = CursorGenerator::new(&v);
        assert!(g.has_next());
        assert_eq!(g.pull(), Some(1));
        assert_eq!(g.position().get(), 1);
        assert_eq!(g.pull(), Some(2));
        assert_eq!(g.pull(), Some(3));
        assert!(!g.has_next());
        assert_eq!(g.pull(), None);
    }

    #[test]
    fn test_fn_generator_stops_calling_after_none() {
        let mut calls = 0;
        let mut g = FnGenerator::new(|| {
            calls += 1;
            if calls <= 2 { Some(calls) } else { None }
        });
        assert!(g.has_next());
        assert_eq!(g.pull(), Some(1));
        assert_eq!(g.pull(), Some(2));
        assert!(!g.has_next());
        assert!(!g.has_next());
        assert_eq!(g.pull(), None);
        drop(g);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_repeat() {
        let mut g = Repeat::new(7);
        for _ in 0..100 {
            assert_eq!(g.pull(), Some(7));
        }
        assert!(g.has_next());

        let mut g = Repeat::bounded("a", 1);
        assert_eq!(g.pull(), Some("a"));
        assert!(!g.has_next());
        assert_eq!(g.pull(), None);
    }

    #[test]
    fn test_read_generator_yields_bytes() {
        let mut g = ReadGenerator::new(Cursor::new(b"abc".to_vec()));
        assert_eq!(g.pull(), Some(b'a'));
        assert!(g.has_next());
        assert_eq!(g.pull(), Some(b'b'));
        assert_eq!(g.pull(), Some(b'c'));
        assert!(!g.has_next());
        assert!(g.take_error().is_none());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn test_read_generator_keeps_first_error() {
        let mut g = ReadGenerator::from_reader(FailingReader);
        assert!(!g.has_next());
        assert!(g.has_failed());
        assert_eq!(g.pull(), None);
        let err = g.take_error().expect("error should be stored");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(g.take_error().is_none());
    }

    #[test]
    fn test_until_drops_sentinel() {
        let mut g = Until::new(IterGenerator::new(b"key=value".iter().copied()), |b| *b == b'=');
        let mut key = Vec::new();
        while let Some(b) = g.pull() {
            key.push(b);
        }
        assert_eq!(key, b"key");
        assert!(!g.has_next());
        let mut rest = g.into_inner();
        assert_eq!(rest.pull(), Some(b'v'));
    }
}
