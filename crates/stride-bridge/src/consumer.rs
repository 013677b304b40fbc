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

//! # Consumers
//!
//! A consumer is a push-based sink: it is handed one value at a time and
//! answers whether it took it. `false` means "stop"; the producer must not
//! offer further values, and the rejected value is dropped. Copy-style
//! algorithms write all of their output through this trait, which lets the
//! same `copy_if` fill a vector, overwrite a slice, or stream to a file.

use std::io::{self, Write};
use stride_core::range::{MutRange, Range};

/// A push-based sink of values.
pub trait Consumer<T> {
    /// Offers `value` to the sink. Returns `false` if it was not accepted.
    fn accept(&mut self, value: T) -> bool;
}

impl<T, C> Consumer<T> for &mut C
where
    C: Consumer<T> + ?Sized,
{
    #[inline]
    fn accept(&mut self, value: T) -> bool {
        (**self).accept(value)
    }
}

/// A vector accepts everything by appending.
impl<T> Consumer<T> for Vec<T> {
    #[inline]
    fn accept(&mut self, value: T) -> bool {
        self.push(value);
        true
    }
}

/// Forwards values to a function that reports acceptance.
#[derive(Debug, Clone)]
pub struct FnConsumer<F> {
    f: F,
}

impl<F> FnConsumer<F> {
    /// Wraps `f`.
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> Consumer<T> for FnConsumer<F>
where
    F: FnMut(T) -> bool,
{
    #[inline]
    fn accept(&mut self, value: T) -> bool {
        (self.f)(value)
    }
}

/// Writes values into successive positions of a mutable range.
///
/// Rejects once the range is full. The write cursor can be recovered with
/// [`position`](RangeSink::position) or [`into_parts`](RangeSink::into_parts)
/// to learn where the output ended.
#[derive(Debug)]
pub struct RangeSink<R>
where
    R: Range,
{
    range: R,
    pos: R::Position,
    written: usize,
}

impl<R> RangeSink<R>
where
    R: MutRange,
{
    /// Creates a sink writing from the begin of `range`.
    #[inline]
    pub fn new(range: R) -> Self {
        let pos = range.begin_pos();
        Self::from_pos(range, pos)
    }

    /// Creates a sink writing from `pos`.
    #[inline]
    pub fn from_pos(range: R, pos: R::Position) -> Self {
        Self {
            range,
            pos,
            written: 0,
        }
    }

    /// Returns the position the next value would be written to.
    #[inline]
    pub fn position(&self) -> &R::Position {
        &self.pos
    }

    /// Returns the number of values written so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Returns `true` if no further value fits.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.range.is_end_pos(&self.pos)
    }

    /// Splits the sink into its range and write cursor.
    #[inline]
    pub fn into_parts(self) -> (R, R::Position) {
        (self.range, self.pos)
    }
}

impl<R> Consumer<R::Value> for RangeSink<R>
where
    R: MutRange,
{
    #[inline]
    fn accept(&mut self, value: R::Value) -> bool {
        if self.range.is_end_pos(&self.pos) {
            return false;
        }
        *self.range.at_pos_mut(&self.pos) = value;
        self.range.inc_pos(&mut self.pos);
        self.written += 1;
        true
    }
}

/// Limits another consumer to a fixed number of values.
#[derive(Debug, Clone)]
pub struct Bounded<C> {
    inner: C,
    remaining: usize,
}

impl<C> Bounded<C> {
    /// Lets at most `capacity` values through to `inner`.
    #[inline]
    pub fn new(inner: C, capacity: usize) -> Self {
        Self {
            inner,
            remaining: capacity,
        }
    }

    /// Returns how many more values may pass.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns the inner consumer.
    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> Consumer<T> for Bounded<C>
where
    C: Consumer<T>,
{
    #[inline]
    fn accept(&mut self, value: T) -> bool {
        if self.remaining == 0 || !self.inner.accept(value) {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Writes bytes to an `io::Write`.
///
/// Each byte is passed to `write_all`, so wrap unbuffered writers in a
/// `BufWriter`. The first I/O error makes the consumer reject everything
/// from then on; retrieve it with [`take_error`](WriteConsumer::take_error).
#[derive(Debug)]
pub struct WriteConsumer<W> {
    writer: W,
    error: Option<io::Error>,
    failed: bool,
}

impl<W> WriteConsumer<W>
where
    W: Write,
{
    /// Wraps `writer`.
    #[inline]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
            failed: false,
        }
    }

    /// Takes the I/O error that stopped the consumer, if any.
    #[inline]
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Returns `true` if a write failed.
    #[inline]
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Flushes the writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Returns the wrapped writer.
    #[inline]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_byte(&mut self, byte: u8) -> bool {
        if self.failed {
            return false;
        }
        match self.writer.write_all(&[byte]) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("byte consumer stopped on I/O error: {e}");
                self.error = Some(e);
                self.failed = true;
                false
            }
        }
    }
}

impl<W> Consumer<u8> for WriteConsumer<W>
where
    W: Write,
{
    #[inline]
    fn accept(&mut self, value: u8) -> bool {
        self.write_byte(value)
    }
}

impl<W> Consumer<&u8> for WriteConsumer<W>
where
    W: Write,
{
    #[inline]
    fn accept(&mut self, value: &u8) -> bool {
        self.write_byte(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::range::RandomAccessRange;

    #[test]
    fn test_vec_accepts_everything() {
        let mut out = Vec::new();
        assert!(out.accept(1));
        assert!((&mut out).accept(2));
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn test_range_sink_rejects_when_full() {
        let mut buf = [0; 3];
        let mut sink = RangeSink::new(&mut buf);
        assert!(sink.accept(7));
        assert!(sink.accept(8));
        assert!(!sink.is_full());
        assert!(sink.accept(9));
        assert!(sink.is_full());
        assert!(!sink.accept(10));
        assert_eq!(sink.written(), 3);
        drop(sink);
        assert_eq!(buf, [7, 8, 9]);
    }

    #[test]
    fn test_range_sink_from_middle() {
        let mut v = vec![0; 4];
        let start = v.nth_pos(2);
        let mut sink = RangeSink::from_pos(&mut v, start);
        assert!(sink.accept(5));
        let (_, end) = sink.into_parts();
        assert_eq!(end.get(), 3);
        assert_eq!(v, vec![0, 0, 5, 0]);
    }

    #[test]
    fn test_bounded() {
        let mut b = Bounded::new(Vec::new(), 2);
        assert!(b.accept('a'));
        assert!(b.accept('b'));
        assert!(!b.accept('c'));
        assert_eq!(b.remaining(), 0);
        assert_eq!(b.into_inner(), vec!['a', 'b']);
    }

    #[test]
    fn test_fn_consumer_can_stop() {
        let mut seen = Vec::new();
        let mut c = FnConsumer::new(|x: i32| {
            seen.push(x);
            x < 2
        });
        assert!(c.accept(1));
        assert!(!c.accept(2));
        drop(c);
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_write_consumer() {
        let mut w = WriteConsumer::new(Vec::new());
        assert!(w.accept(b'o'));
        assert!(w.accept(&b'k'));
        assert!(w.flush().is_ok());
        assert_eq!(w.into_inner(), b"ok".to_vec());
    }

    #[test]
    fn test_write_consumer_keeps_error() {
        let mut slot = [0u8; 1];
        let mut w = WriteConsumer::new(&mut slot[..]);
        assert!(w.accept(1u8));
        assert!(!w.accept(2u8));
        assert!(w.has_failed());
        assert!(!w.accept(3u8));
        assert_eq!(w.take_error().map(|e| e.kind()), Some(io::ErrorKind::WriteZero));
    }
}
