//! Value categories and access modes.
//!
//! A dispatcher must hand the active alternative to an operation with the
//! same ownership the caller used: a shared borrow stays read-only, an
//! exclusive borrow stays mutable, and an owned container is consumed.
//! [`Classify`] recovers that mode from the container expression's type.

use std::fmt;

/// How a value is accessed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueCategory {
    /// Consumed by value; the callee may move out of it.
    Owned,
    /// Borrowed through `&mut`.
    Exclusive,
    /// Borrowed through `&`.
    Shared,
}

impl ValueCategory {
    /// Whether the value is reached through a reference.
    #[inline]
    pub const fn is_borrowed(self) -> bool {
        !matches!(self, ValueCategory::Owned)
    }

    /// Whether the callee may mutate the value in place.
    #[inline]
    pub const fn is_mutable(self) -> bool {
        matches!(self, ValueCategory::Owned | ValueCategory::Exclusive)
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueCategory::Owned => write!(f, "owned"),
            ValueCategory::Exclusive => write!(f, "exclusive borrow"),
            ValueCategory::Shared => write!(f, "shared borrow"),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Owned {}
    impl Sealed for super::Exclusive {}
    impl Sealed for super::Shared {}
}

/// Type-level access mode. Implemented only by [`Owned`], [`Exclusive`] and
/// [`Shared`].
pub trait AccessMode: sealed::Sealed {
    const CATEGORY: ValueCategory;
}

/// Access by value.
pub enum Owned {}

/// Access through `&mut`.
pub enum Exclusive {}

/// Access through `&`.
pub enum Shared {}

impl AccessMode for Owned {
    const CATEGORY: ValueCategory = ValueCategory::Owned;
}

impl AccessMode for Exclusive {
    const CATEGORY: ValueCategory = ValueCategory::Exclusive;
}

impl AccessMode for Shared {
    const CATEGORY: ValueCategory = ValueCategory::Shared;
}

/// Maps an expression type to the access mode it carries.
///
/// References are classified here. Owning container types implement it
/// themselves with [`Owned`].
pub trait Classify {
    type Mode: AccessMode;

    const CATEGORY: ValueCategory = <Self::Mode as AccessMode>::CATEGORY;
}

impl<T: ?Sized> Classify for &T {
    type Mode = Shared;
}

impl<T: ?Sized> Classify for &mut T {
    type Mode = Exclusive;
}

/// Category of `value`'s type.
#[inline]
pub fn category_of<C: Classify>(value: &C) -> ValueCategory {
    let _ = value;
    C::CATEGORY
}
