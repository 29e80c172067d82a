//! Visit dispatch.
//!
//! Applying an operation to "whichever alternative is active" is a single
//! indexed call: for each visitor type `F`, output `R` and access mode there
//! is one generated [`DispatchTable`] with an entry per alternative, and the
//! container's tag picks the entry.
//!
//! # Design
//!
//! An operation is a [`Visitor`]. Overloading is expressed by implementing
//! `Visitor` for several argument types; a generic operation implements it
//! once for every `T` satisfying some bound. Every implementation used by a
//! dispatch must agree on `Output`, otherwise the call does not compile.
//!
//! The access mode follows the container expression. Each of the three
//! container forms has its own [`Visitable`] impl bound to the matching
//! table, and reports the same mode through [`Classify`]:
//!
//! | container          | table       | visitor receives |
//! |--------------------|-------------|------------------|
//! | `&Variant<L>`      | `SHARED`    | `&T`             |
//! | `&mut Variant<L>`  | `EXCLUSIVE` | `&mut T`         |
//! | `Variant<L>`       | `OWNED`     | `T`              |
//!
//! # Example
//!
//! ```
//! use oneof::{visit, visit_with, Variant, Visitor};
//!
//! /// Doubles numbers in place.
//! struct Double;
//!
//! impl<'a> Visitor<&'a mut i64> for Double {
//!     type Output = ();
//!     fn visit(&mut self, value: &'a mut i64) {
//!         *value *= 2;
//!     }
//! }
//!
//! impl<'a> Visitor<&'a mut f64> for Double {
//!     type Output = ();
//!     fn visit(&mut self, value: &'a mut f64) {
//!         *value *= 2.0;
//!     }
//! }
//!
//! let mut a: Variant<(i64, f64)> = Variant::new(21_i64);
//! let mut b: Variant<(i64, f64)> = Variant::new(0.25_f64);
//!
//! visit(Double, &mut a);
//!
//! let mut double = visit_with(Double);
//! double.apply(&mut b);
//! double.apply(&mut b);
//!
//! assert_eq!(a.get::<i64, _>(), Ok(&42));
//! assert_eq!(b.get::<f64, _>(), Ok(&1.0));
//! ```

use oneof_typelist::Classify;

use crate::variant::Variant;

mod table;

pub use table::{
    DispatchTable, ExclusiveEntry, OwnedEntry, SharedEntry, VisitExclusive, VisitOwned,
    VisitShared,
};

/// An operation applicable to a value of type `Arg`.
///
/// `Arg` carries the access mode: `&T`, `&mut T` or `T`.
pub trait Visitor<Arg> {
    type Output;

    fn visit(&mut self, value: Arg) -> Self::Output;
}

impl<V, Arg> Visitor<Arg> for &mut V
where
    V: Visitor<Arg> + ?Sized,
{
    type Output = V::Output;

    #[inline]
    fn visit(&mut self, value: Arg) -> Self::Output {
        (**self).visit(value)
    }
}

/// A container expression a visitor can be dispatched over.
///
/// Implemented once per container form: `&Variant<L>` dispatches through
/// `SHARED`, `&mut Variant<L>` through `EXCLUSIVE` and `Variant<L>` through
/// `OWNED`. The [`Classify`] supertrait reports the same mode at the type
/// level. A borrowed container lends its borrow to the output, so a visitor
/// may return a reference into the held value.
pub trait Visitable<F, R>: Classify {
    fn accept(self, op: &mut F) -> R;
}

impl<'v, F, R, L> Visitable<F, R> for &'v Variant<L>
where
    L: VisitShared<'v, F, R>,
{
    #[inline]
    fn accept(self, op: &mut F) -> R {
        L::dispatch(op, self)
    }
}

impl<'v, F, R, L> Visitable<F, R> for &'v mut Variant<L>
where
    L: VisitExclusive<'v, F, R>,
{
    #[inline]
    fn accept(self, op: &mut F) -> R {
        L::dispatch(op, self)
    }
}

impl<F, R, L> Visitable<F, R> for Variant<L>
where
    L: VisitOwned<F, R>,
{
    #[inline]
    fn accept(self, op: &mut F) -> R {
        L::dispatch(op, self)
    }
}

/// Apply `op` to the active alternative of `container`.
///
/// `op` is invoked exactly once, with the alternative borrowed or moved the
/// same way `container` was passed.
#[inline]
pub fn visit<F, C, R>(mut op: F, container: C) -> R
where
    C: Visitable<F, R>,
{
    container.accept(&mut op)
}

/// Curry `op`: the returned [`Visiting`] applies it to any number of
/// containers.
#[inline]
pub fn visit_with<F>(op: F) -> Visiting<F> {
    Visiting { op }
}

/// A visitor bound once and applied to many containers.
pub struct Visiting<F> {
    op: F,
}

impl<F> Visiting<F> {
    /// Apply the bound visitor to the active alternative of `container`.
    #[inline]
    pub fn apply<C, R>(&mut self, container: C) -> R
    where
        C: Visitable<F, R>,
    {
        container.accept(&mut self.op)
    }

    /// The bound visitor, with whatever state it accumulated.
    pub fn into_inner(self) -> F {
        self.op
    }
}
