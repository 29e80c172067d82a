//! Storage and destruction engine.
//!
//! A [`Storage<L>`] is a raw region able to hold any one alternative of `L`
//! plus the tag of the alternative currently placed in it. The region is
//! `MaybeUninit<L::Union>`, where `L::Union` nests every alternative in a
//! `#[repr(C)]` [`Slot`] union:
//!
//! ```text
//! (A, B, C)  =>  Slot<A, Slot<B, Slot<C, ()>>>
//! ```
//!
//! `#[repr(C)]` unions place every field at offset zero and take the largest
//! size and strictest alignment of their fields, so a pointer to the region
//! is a valid, aligned pointer to any alternative.
//!
//! # Destruction
//!
//! [`Alternatives::DROP_TABLE`] holds one [`DropFn`] per alternative, each
//! dropping the region in place as that alternative. Dropping a `Storage`
//! calls `DROP_TABLE[tag]` exactly once. When no alternative needs drop glue
//! ([`Alternatives::NEEDS_DROP`] is false) the table is never consulted.
//!
//! The table is indexed without a bounds check: the tag invariant belongs to
//! the container and is not re-validated here.

use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ptr::{self, NonNull};

use oneof_typelist::{Contains, TypeList};

/// Drops the region in place as one specific alternative.
pub type DropFn = unsafe fn(NonNull<u8>);

/// One layer of the nested union backing a region.
#[repr(C)]
pub union Slot<H, T> {
    pub head: ManuallyDrop<H>,
    pub tail: ManuallyDrop<T>,
}

/// A tuple list that can back a [`Storage`].
///
/// # Safety
///
/// `Union` must be at least as large and as aligned as every alternative,
/// with every alternative at offset zero. `DROP_TABLE[i]` must drop the
/// region as alternative `i`, and `NEEDS_DROP` must be true whenever any
/// alternative needs drop glue. Implemented for tuples of arity 1 to 12 by
/// this crate; there is no reason to implement it elsewhere.
pub unsafe trait Alternatives: TypeList + Sized {
    /// Region type: size and alignment are the maxima over the list.
    type Union;

    /// Whether any alternative has drop glue.
    const NEEDS_DROP: bool;

    /// Per-alternative in-place destructors, indexed by tag.
    const DROP_TABLE: &'static [DropFn];
}

unsafe fn drop_slot<T>(region: NonNull<u8>) {
    // SAFETY: the caller guarantees the region holds a live `T`.
    unsafe { ptr::drop_in_place(region.cast::<T>().as_ptr()) }
}

macro_rules! slot_union {
    ($head:ident) => { Slot<$head, ()> };
    ($head:ident, $($tail:ident),+) => { Slot<$head, slot_union!($($tail),+)> };
}

macro_rules! impl_alternatives {
    ($len:literal; $($T:ident : $I:ident),+) => {
        // SAFETY: `slot_union!` nests every alternative in `#[repr(C)]` unions
        // and the table lists one `drop_slot` per alternative in list order.
        unsafe impl<$($T),+> Alternatives for ($($T,)+) {
            type Union = slot_union!($($T),+);

            const NEEDS_DROP: bool = false $(|| mem::needs_drop::<$T>())+;

            const DROP_TABLE: &'static [DropFn] = &[$(drop_slot::<$T> as DropFn),+];
        }
    };
}

for_each_arity!(impl_alternatives);

/// Raw region plus the tag of the alternative living in it.
pub struct Storage<L: Alternatives> {
    region: MaybeUninit<L::Union>,
    tag: usize,
}

impl<L: Alternatives> Storage<L> {
    /// Place `value` in a fresh region.
    #[inline]
    pub fn new<T, I>(value: T) -> Self
    where
        L: Contains<T, I>,
    {
        let mut region = MaybeUninit::<L::Union>::uninit();
        // SAFETY: every alternative sits at offset zero of `L::Union`, which
        // is large and aligned enough for it.
        unsafe { region.as_mut_ptr().cast::<T>().write(value) };
        Self {
            region,
            tag: <L as Contains<T, I>>::INDEX,
        }
    }

    /// Adopt a region initialized elsewhere.
    ///
    /// # Safety
    ///
    /// `region` must hold a live value of alternative `tag`, and
    /// `tag < L::LEN`.
    #[inline]
    pub unsafe fn from_raw_parts(region: MaybeUninit<L::Union>, tag: usize) -> Self {
        debug_assert!(tag < L::LEN);
        Self { region, tag }
    }

    /// Tag of the live alternative.
    #[inline]
    pub fn tag(&self) -> usize {
        self.tag
    }

    /// Region viewed as alternative `T`. Only meaningful while `T` is live.
    #[inline]
    pub fn as_ptr<T>(&self) -> *const T {
        self.region.as_ptr().cast::<T>()
    }

    /// Mutable region viewed as alternative `T`.
    #[inline]
    pub fn as_mut_ptr<T>(&mut self) -> *mut T {
        self.region.as_mut_ptr().cast::<T>()
    }

    /// Move the live `T` out, releasing the region without running the drop
    /// table.
    ///
    /// # Safety
    ///
    /// The live alternative must be `T`.
    #[inline]
    pub unsafe fn into_value<T>(self) -> T {
        let this = ManuallyDrop::new(self);
        // SAFETY: the caller guarantees `T` is live; `this` is never dropped,
        // so the value is read out exactly once.
        unsafe { this.as_ptr::<T>().read() }
    }
}

impl<L: Alternatives> Drop for Storage<L> {
    #[inline]
    fn drop(&mut self) {
        if !L::NEEDS_DROP {
            return;
        }
        debug_assert!(self.tag < L::DROP_TABLE.len());
        // SAFETY: the tag names the live alternative and is always in range.
        unsafe {
            let destroy = *L::DROP_TABLE.get_unchecked(self.tag);
            destroy(NonNull::from(&mut self.region).cast::<u8>());
        }
    }
}
