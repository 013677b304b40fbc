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

//! # Algorithm Configuration
//!
//! Tunables shared by the sorting, partitioning and merging algorithms.
//! Every algorithm with a buffered strategy or a tuning knob has a `_with`
//! variant taking an [`AlgorithmConfig`]; the plain variant uses
//! `AlgorithmConfig::default()`.
//!
//! | Field | Default | Effect |
//! | :--- | :--- | :--- |
//! | `scratch` | `ScratchPolicy::Unbounded` | Whether buffered strategies may allocate, and how much. |
//! | `median_of_three_threshold` | `16` | Minimum subrange length for median-of-three pivot selection. |
//! | `insertion_run_len` | `16` | Run length insertion-sorted before merging in the buffered stable sort. |

/// How much scratch memory buffered algorithms may allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScratchPolicy {
    /// Allocate whatever the algorithm needs; fall back only if the
    /// allocation itself fails.
    #[default]
    Unbounded,
    /// Allocate for inputs of at most this many elements.
    Limited(usize),
    /// Never allocate; always run the in-place strategy.
    Disabled,
}

impl ScratchPolicy {
    /// Returns `true` if a buffer for `len` elements may be requested.
    #[inline]
    pub fn allows(&self, len: usize) -> bool {
        match *self {
            ScratchPolicy::Unbounded => true,
            ScratchPolicy::Limited(max) => len <= max,
            ScratchPolicy::Disabled => false,
        }
    }
}

impl std::fmt::Display for ScratchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScratchPolicy::Unbounded => write!(f, "unbounded"),
            ScratchPolicy::Limited(max) => write!(f, "limited to {} elements", max),
            ScratchPolicy::Disabled => write!(f, "disabled"),
        }
    }
}

/// Configuration for the tunable algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlgorithmConfig {
    scratch: ScratchPolicy,
    median_of_three_threshold: usize,
    insertion_run_len: usize,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            scratch: ScratchPolicy::Unbounded,
            median_of_three_threshold: 16,
            insertion_run_len: 16,
        }
    }
}

impl AlgorithmConfig {
    /// Returns a builder starting from the defaults.
    #[inline]
    pub fn builder() -> AlgorithmConfigBuilder {
        AlgorithmConfigBuilder::new()
    }

    /// Returns the scratch memory policy.
    #[inline]
    pub fn scratch(&self) -> ScratchPolicy {
        self.scratch
    }

    /// Returns the minimum length for median-of-three pivot selection.
    #[inline]
    pub fn median_of_three_threshold(&self) -> usize {
        self.median_of_three_threshold
    }

    /// Returns the insertion-sorted run length of the buffered stable sort.
    #[inline]
    pub fn insertion_run_len(&self) -> usize {
        self.insertion_run_len
    }
}

/// Builder for [`AlgorithmConfig`].
///
/// # Examples
///
/// ```rust
/// # use stride_algo::config::{AlgorithmConfig, ScratchPolicy};
///
/// let config = AlgorithmConfig::builder()
///     .scratch(ScratchPolicy::Disabled)
///     .median_of_three_threshold(32)
///     .build();
/// assert_eq!(config.scratch(), ScratchPolicy::Disabled);
/// assert_eq!(config.median_of_three_threshold(), 32);
/// assert_eq!(config.insertion_run_len(), 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AlgorithmConfigBuilder {
    config: AlgorithmConfig,
}

impl AlgorithmConfigBuilder {
    /// Creates a builder holding the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scratch memory policy.
    #[inline]
    pub fn scratch(mut self, policy: ScratchPolicy) -> Self {
        self.config.scratch = policy;
        self
    }

    /// Sets the minimum length for median-of-three pivot selection.
    #[inline]
    pub fn median_of_three_threshold(mut self, len: usize) -> Self {
        self.config.median_of_three_threshold = len;
        self
    }

    /// Sets the insertion-sorted run length. Values below 1 are treated as 1.
    #[inline]
    pub fn insertion_run_len(mut self, len: usize) -> Self {
        self.config.insertion_run_len = len.max(1);
        self
    }

    /// Finishes the configuration.
    #[inline]
    pub fn build(self) -> AlgorithmConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = AlgorithmConfig::default();
        assert_eq!(c.scratch(), ScratchPolicy::Unbounded);
        assert_eq!(c.median_of_three_threshold(), 16);
        assert_eq!(c.insertion_run_len(), 16);
        assert_eq!(AlgorithmConfigBuilder::new().build(), c);
    }

    #[test]
    fn test_policy_limits() {
        assert!(ScratchPolicy::Unbounded.allows(usize::MAX));
        assert!(ScratchPolicy::Limited(8).allows(8));
        assert!(!ScratchPolicy::Limited(8).allows(9));
        assert!(!ScratchPolicy::Disabled.allows(0));
    }

    #[test]
    fn test_run_len_is_at_least_one() {
        let c = AlgorithmConfig::builder().insertion_run_len(0).build();
        assert_eq!(c.insertion_run_len(), 1);
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(format!("{}", ScratchPolicy::Limited(4)), "limited to 4 elements");
        assert_eq!(format!("{}", ScratchPolicy::Disabled), "disabled");
    }
}
