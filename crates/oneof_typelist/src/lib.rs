//! Type-list utilities for `oneof`.
//!
//! A list of alternative types is written as a tuple: `(i32, f64, String)`.
//! This crate answers questions about such lists entirely at compile time:
//!
//! - **Position**: [`Contains`] / [`index_of`] locate a type in the list.
//! - **Head**: [`Head`] names the first type of the list.
//! - **Value category**: [`Classify`] maps an expression type to the access
//!   mode (owned, exclusive borrow, shared borrow) a dispatcher must forward.
//!
//! Nothing here has a runtime footprint. A position is a type
//! ([`Here`], [`There`]) whose [`Index::VALUE`] is the integer tag, so an
//! unknown type is a missing impl rather than a runtime failure.
//!
//! # Arity
//!
//! Tuples of 1 through 12 elements are lists. The empty tuple is not: a
//! list must name at least one alternative.
//!
//! ```
//! use oneof_typelist::{index_of, Head, TypeList};
//!
//! type Scalars = (u8, u16, u32);
//!
//! assert_eq!(<Scalars as TypeList>::LEN, 3);
//! assert_eq!(index_of::<Scalars, u16, _>(), 1);
//! let first: Head<Scalars> = 7_u8;
//! assert_eq!(first, 7);
//! ```
//!
//! ```compile_fail
//! use oneof_typelist::index_of;
//!
//! // `i64` is not part of the list.
//! let _ = index_of::<(u8, u16), i64, _>();
//! ```

mod category;
mod index;
mod list;

pub use category::{category_of, AccessMode, Classify, Exclusive, Owned, Shared, ValueCategory};
pub use index::{
    Here, Index, There, I0, I1, I10, I11, I2, I3, I4, I5, I6, I7, I8, I9,
};
pub use list::{index_of, Contains, Head, TypeList};

/// Largest tuple arity implemented as a type list.
pub const MAX_ALTERNATIVES: usize = 12;
