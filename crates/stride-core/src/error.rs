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

//! # Checked Access Errors
//!
//! The core range operations never check their preconditions outside of
//! debug builds. The checked accessors in this module are the one explicit,
//! user-facing exception: they validate an index against the length of a
//! random-access range and report `RangeError::OutOfRange` instead of
//! proceeding.

use crate::range::{MutRange, RandomAccessRange};

/// The error type for checked range access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeError {
    /// The requested index is not less than the length of the range.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the range at the time of the request.
        len: usize,
    },
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, len } => write!(
                f,
                "Index {} is out of range for a range of length {}",
                index, len
            ),
        }
    }
}

impl std::error::Error for RangeError {}

/// Returns a copy of the element at `index`.
///
/// # Errors
///
/// Returns `RangeError::OutOfRange` if `index` is not less than the length
/// of the range.
///
/// # Examples
///
/// ```rust
/// # use stride_core::error::{at_checked, RangeError};
///
/// let v = vec![1, 2, 3];
/// assert_eq!(at_checked(&v, 1), Ok(2));
/// assert_eq!(at_checked(&v, 3), Err(RangeError::OutOfRange { index: 3, len: 3 }));
/// ```
pub fn at_checked<R>(range: &R, index: usize) -> Result<R::Value, RangeError>
where
    R: RandomAccessRange + ?Sized,
    R::Value: Clone,
{
    let pos = range.checked_pos(index)?;
    Ok(range.at_pos(&pos).clone())
}

/// Returns a mutable reference to the element at `index`.
///
/// # Errors
///
/// Returns `RangeError::OutOfRange` if `index` is not less than the length
/// of the range.
pub fn at_checked_mut<R>(range: &mut R, index: usize) -> Result<&mut R::Value, RangeError>
where
    R: RandomAccessRange + MutRange + ?Sized,
{
    let pos = range.checked_pos(index)?;
    Ok(range.at_pos_mut(&pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iota::Iota;

    #[test]
    fn test_display() {
        let e = RangeError::OutOfRange { index: 7, len: 3 };
        assert_eq!(
            format!("{}", e),
            "Index 7 is out of range for a range of length 3"
        );
    }

    #[test]
    fn test_at_checked_on_generated_values() {
        let r = Iota::new(10u32, 13);
        assert_eq!(at_checked(&r, 0), Ok(10));
        assert_eq!(at_checked(&r, 2), Ok(12));
        assert_eq!(
            at_checked(&r, 3),
            Err(RangeError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_at_checked_mut_writes_through() {
        let mut v = vec![1, 2, 3];
        *at_checked_mut(&mut v, 2).unwrap() = 30;
        assert_eq!(v, vec![1, 2, 30]);
        assert!(at_checked_mut(&mut v, 5).is_err());
    }

    #[test]
    fn test_empty_range_rejects_every_index() {
        let v: Vec<u8> = Vec::new();
        assert_eq!(
            at_checked(&v, 0),
            Err(RangeError::OutOfRange { index: 0, len: 0 })
        );
    }
}
