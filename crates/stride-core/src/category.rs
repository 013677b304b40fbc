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

//! # Traversal Categories
//!
//! Every range declares, through an associated marker type, the strongest
//! traversal guarantee it offers. The four markers form a strict chain:
//!
//! - `SinglePass`: positions move forward once; re-reading is not stable.
//! - `MultiPass`: positions can be copied and revisited.
//! - `Bidirectional`: positions can additionally move backward.
//! - `RandomAccess`: positions can jump by an offset and be measured in O(1).
//!
//! The markers are zero-sized and only ever used at the type level. Each
//! carries a `CategoryKind` constant, which gives the chain an explicit,
//! ordered, `const`-evaluable representation. The refinement traits
//! `AtLeastMultiPass` and `AtLeastBidirectional` are implemented only by
//! the markers that satisfy them, so a range cannot claim a category
//! stronger than the range traits it implements.

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::SinglePass {}
    impl Sealed for super::MultiPass {}
    impl Sealed for super::Bidirectional {}
    impl Sealed for super::RandomAccess {}
}

/// The explicit, ordered capability level of a range category.
///
/// # Examples
///
/// ```rust
/// # use stride_core::category::CategoryKind;
///
/// assert!(CategoryKind::RandomAccess > CategoryKind::Bidirectional);
/// assert!(CategoryKind::MultiPass.refines(CategoryKind::SinglePass));
/// assert!(!CategoryKind::SinglePass.refines(CategoryKind::MultiPass));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CategoryKind {
    SinglePass = 0,
    MultiPass = 1,
    Bidirectional = 2,
    RandomAccess = 3,
}

impl CategoryKind {
    /// Returns `true` if `self` offers at least the guarantees of `other`.
    #[inline]
    pub const fn refines(self, other: CategoryKind) -> bool {
        self as u8 >= other as u8
    }

    /// Returns the human readable name of the category.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            CategoryKind::SinglePass => "SinglePass",
            CategoryKind::MultiPass => "MultiPass",
            CategoryKind::Bidirectional => "Bidirectional",
            CategoryKind::RandomAccess => "RandomAccess",
        }
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A type-level traversal category.
///
/// This trait is sealed; the four markers in this module are the only
/// implementors.
pub trait Category: sealed::Sealed + Copy + Default + std::fmt::Debug + 'static {
    /// The capability level this marker stands for.
    const KIND: CategoryKind;
}

/// Categories that allow positions to be copied and revisited.
pub trait AtLeastMultiPass: Category {}

/// Categories that allow positions to move backward.
pub trait AtLeastBidirectional: AtLeastMultiPass {}

/// One-time forward traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SinglePass;

/// Repeatable forward traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MultiPass;

/// Repeatable traversal in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bidirectional;

/// Constant-time jumps and distance measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomAccess;

macro_rules! impl_category {
    ($marker:ident, $kind:ident) => {
        impl Category for $marker {
            const KIND: CategoryKind = CategoryKind::$kind;
        }

        impl std::fmt::Display for $marker {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", CategoryKind::$kind)
            }
        }
    };
}

impl_category!(SinglePass, SinglePass);
impl_category!(MultiPass, MultiPass);
impl_category!(Bidirectional, Bidirectional);
impl_category!(RandomAccess, RandomAccess);

impl AtLeastMultiPass for MultiPass {}
impl AtLeastMultiPass for Bidirectional {}
impl AtLeastMultiPass for RandomAccess {}

impl AtLeastBidirectional for Bidirectional {}
impl AtLeastBidirectional for RandomAccess {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ordering_is_a_chain() {
        let kinds = [
            CategoryKind::SinglePass,
            CategoryKind::MultiPass,
            CategoryKind::Bidirectional,
            CategoryKind::RandomAccess,
        ];
        for w in kinds.windows(2) {
            assert!(w[0] < w[1]);
            assert!(w[1].refines(w[0]));
            assert!(!w[0].refines(w[1]));
        }
        for k in kinds {
            assert!(k.refines(k));
        }
    }

    #[test]
    fn test_marker_kinds() {
        assert_eq!(SinglePass::KIND, CategoryKind::SinglePass);
        assert_eq!(MultiPass::KIND, CategoryKind::MultiPass);
        assert_eq!(Bidirectional::KIND, CategoryKind::Bidirectional);
        assert_eq!(RandomAccess::KIND, CategoryKind::RandomAccess);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", RandomAccess), "RandomAccess");
        assert_eq!(format!("{}", CategoryKind::MultiPass), "MultiPass");
    }
}
