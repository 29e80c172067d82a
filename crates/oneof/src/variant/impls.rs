//! Standard trait impls for `Variant`, one set per tuple arity.
//!
//! Each impl requires the trait of every alternative and is carried out by
//! dispatching a private visitor through the shared-access table, so none of
//! them branches on the tag.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;

use super::Variant;
use crate::storage::{Alternatives, Storage};
use crate::visit::{visit, Visitor};

/// Writes a clone of the visited alternative into an uninitialized region.
struct PlaceClone<U> {
    region: *mut U,
}

impl<'v, T: Clone, U> Visitor<&'v T> for PlaceClone<U> {
    type Output = ();

    fn visit(&mut self, value: &'v T) {
        // SAFETY: only dispatched over the list whose union is `U`; every
        // alternative of that list fits at offset zero of the region.
        unsafe { self.region.cast::<T>().write(value.clone()) }
    }
}

struct DebugActive<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    tag: usize,
}

impl<'v, T: fmt::Debug> Visitor<&'v T> for DebugActive<'_, '_> {
    type Output = fmt::Result;

    fn visit(&mut self, value: &'v T) -> fmt::Result {
        self.f
            .debug_tuple("Variant")
            .field(&self.tag)
            .field(value)
            .finish()
    }
}

/// Compares the visited alternative with the same alternative in `other`.
struct EqActive<'o, L: Alternatives> {
    other: &'o Storage<L>,
}

impl<'v, T: PartialEq, L: Alternatives> Visitor<&'v T> for EqActive<'_, L> {
    type Output = bool;

    fn visit(&mut self, value: &'v T) -> bool {
        // SAFETY: `eq` only dispatches once both tags are equal, so `other`
        // holds a live `T` as well.
        let other = unsafe { &*self.other.as_ptr::<T>() };
        value == other
    }
}

struct HashActive<'a, H> {
    state: &'a mut H,
}

impl<'v, T: Hash, H: Hasher> Visitor<&'v T> for HashActive<'_, H> {
    type Output = ();

    fn visit(&mut self, value: &'v T) {
        value.hash(self.state);
    }
}

macro_rules! impl_variant_traits {
    ($len:literal; $($T:ident : $I:ident),+) => {
        impl<$($T: Clone),+> Clone for Variant<($($T,)+)> {
            fn clone(&self) -> Self {
                let mut region = MaybeUninit::<<($($T,)+) as Alternatives>::Union>::uninit();
                visit(PlaceClone { region: region.as_mut_ptr() }, self);
                // SAFETY: the visitor placed a clone of alternative `self.tag()`.
                Self::from_storage(unsafe { Storage::from_raw_parts(region, self.tag()) })
            }
        }

        impl<$($T: fmt::Debug),+> fmt::Debug for Variant<($($T,)+)> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                visit(DebugActive { f, tag: self.tag() }, self)
            }
        }

        impl<$($T: PartialEq),+> PartialEq for Variant<($($T,)+)> {
            fn eq(&self, other: &Self) -> bool {
                self.tag() == other.tag() && visit(EqActive { other: other.storage() }, self)
            }
        }

        impl<$($T: Eq),+> Eq for Variant<($($T,)+)> {}

        impl<$($T: Hash),+> Hash for Variant<($($T,)+)> {
            fn hash<S: Hasher>(&self, state: &mut S) {
                self.tag().hash(state);
                visit(HashActive { state }, self);
            }
        }
    };
}

for_each_arity!(impl_variant_traits);
