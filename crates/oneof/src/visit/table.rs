//! Generated dispatch tables.
//!
//! For a visitor `F` with output `R` over the list `L = (T0, .., Tn-1)`,
//! [`DispatchTable<F, R, L>`] holds three constant arrays, one per access
//! mode. Entry `i` of each array takes the container in that mode, views it
//! as `Ti` and calls the visitor. Dispatch is `TABLE[tag](op, container)`.
//!
//! A table only exists when `F` accepts every alternative with the same
//! `Output = R`; the bounds on each table's impl are that requirement. The
//! borrowed tables carry the container's borrow `'v`, so `R` may itself
//! borrow from the held value.

use std::marker::PhantomData;

use oneof_typelist::{Contains, I0, I1, I10, I11, I2, I3, I4, I5, I6, I7, I8, I9};

use super::Visitor;
use crate::storage::Alternatives;
use crate::variant::Variant;

/// Shared-access entry: receives `&'v Variant<L>`.
pub type SharedEntry<'v, F, R, L> = fn(&mut F, &'v Variant<L>) -> R;

/// Exclusive-access entry: receives `&'v mut Variant<L>`.
pub type ExclusiveEntry<'v, F, R, L> = fn(&mut F, &'v mut Variant<L>) -> R;

/// Owned entry: consumes `Variant<L>`.
pub type OwnedEntry<F, R, L> = fn(&mut F, Variant<L>) -> R;

/// Namespace for the constant tables of visitor `F`, output `R`, list `L`,
/// for containers borrowed for `'v`.
///
/// Never instantiated; the tables are associated constants:
/// `DispatchTable::<F, R, L>::SHARED`, `EXCLUSIVE` and `OWNED`.
pub struct DispatchTable<'v, F, R, L>(PhantomData<(&'v (), fn(&mut F) -> R, L)>);

/// Lists whose shared-access table exists for `F` and `R` at borrow `'v`.
pub trait VisitShared<'v, F, R>: Alternatives {
    fn dispatch(op: &mut F, variant: &'v Variant<Self>) -> R;
}

/// Lists whose exclusive-access table exists for `F` and `R` at borrow `'v`.
pub trait VisitExclusive<'v, F, R>: Alternatives {
    fn dispatch(op: &mut F, variant: &'v mut Variant<Self>) -> R;
}

/// Lists whose owned table exists for `F` and `R`.
pub trait VisitOwned<F, R>: Alternatives {
    fn dispatch(op: &mut F, variant: Variant<Self>) -> R;
}

fn shared_entry<'v, F, R, L, T: 'v, I>(op: &mut F, variant: &'v Variant<L>) -> R
where
    L: Alternatives + Contains<T, I>,
    F: Visitor<&'v T, Output = R>,
{
    // SAFETY: this entry sits at position `I` and is only reached through a
    // tag equal to it.
    op.visit(unsafe { variant.get_unchecked::<T, I>() })
}

fn exclusive_entry<'v, F, R, L, T: 'v, I>(op: &mut F, variant: &'v mut Variant<L>) -> R
where
    L: Alternatives + Contains<T, I>,
    F: Visitor<&'v mut T, Output = R>,
{
    // SAFETY: as for `shared_entry`.
    op.visit(unsafe { variant.get_unchecked_mut::<T, I>() })
}

fn owned_entry<F, R, L, T, I>(op: &mut F, variant: Variant<L>) -> R
where
    L: Alternatives + Contains<T, I>,
    F: Visitor<T, Output = R>,
{
    // SAFETY: as for `shared_entry`.
    op.visit(unsafe { variant.into_unchecked::<T, I>() })
}

macro_rules! impl_dispatch {
    (@tables $len:literal; $list:ty; $($T:ident : $I:ident),+) => {
        impl<'v, F, R, $($T: 'v),+> DispatchTable<'v, F, R, $list>
        where
            $(F: Visitor<&'v $T, Output = R>,)+
        {
            /// Shared-access entries, indexed by tag.
            pub const SHARED: [SharedEntry<'v, F, R, $list>; $len] =
                [$(shared_entry::<F, R, $list, $T, $I>),+];
        }

        impl<'v, F, R, $($T: 'v),+> DispatchTable<'v, F, R, $list>
        where
            $(F: Visitor<&'v mut $T, Output = R>,)+
        {
            /// Exclusive-access entries, indexed by tag.
            pub const EXCLUSIVE: [ExclusiveEntry<'v, F, R, $list>; $len] =
                [$(exclusive_entry::<F, R, $list, $T, $I>),+];
        }

        impl<F, R, $($T),+> DispatchTable<'static, F, R, $list>
        where
            $(F: Visitor<$T, Output = R>,)+
        {
            /// Owned entries, indexed by tag.
            pub const OWNED: [OwnedEntry<F, R, $list>; $len] =
                [$(owned_entry::<F, R, $list, $T, $I>),+];
        }

        impl<'v, F, R, $($T: 'v),+> VisitShared<'v, F, R> for $list
        where
            $(F: Visitor<&'v $T, Output = R>,)+
        {
            #[inline]
            fn dispatch(op: &mut F, variant: &'v Variant<Self>) -> R {
                let tag = variant.tag();
                debug_assert!(tag < $len);
                // SAFETY: the container keeps its tag below the list length.
                let entry =
                    unsafe { *DispatchTable::<'v, F, R, Self>::SHARED.get_unchecked(tag) };
                entry(op, variant)
            }
        }

        impl<'v, F, R, $($T: 'v),+> VisitExclusive<'v, F, R> for $list
        where
            $(F: Visitor<&'v mut $T, Output = R>,)+
        {
            #[inline]
            fn dispatch(op: &mut F, variant: &'v mut Variant<Self>) -> R {
                let tag = variant.tag();
                debug_assert!(tag < $len);
                // SAFETY: the container keeps its tag below the list length.
                let entry =
                    unsafe { *DispatchTable::<'v, F, R, Self>::EXCLUSIVE.get_unchecked(tag) };
                entry(op, variant)
            }
        }

        impl<F, R, $($T),+> VisitOwned<F, R> for $list
        where
            $(F: Visitor<$T, Output = R>,)+
        {
            #[inline]
            fn dispatch(op: &mut F, variant: Variant<Self>) -> R {
                let tag = variant.tag();
                debug_assert!(tag < $len);
                // SAFETY: the container keeps its tag below the list length.
                let entry =
                    unsafe { *DispatchTable::<'static, F, R, Self>::OWNED.get_unchecked(tag) };
                entry(op, variant)
            }
        }
    };
    ($len:literal; $($T:ident : $I:ident),+) => {
        impl_dispatch!(@tables $len; ($($T,)+); $($T : $I),+);
    };
}

for_each_arity!(impl_dispatch);
