//! The `Variant` container.
//!
//! A `Variant<L>` always holds exactly one alternative of `L`; there is no
//! empty or default state. Replacement is wholesale: `set`, plain
//! assignment and `clone_from` all drop the previous occupant before the new
//! one takes its place.

use std::any::type_name;

use oneof_typelist::{Classify, Contains, Owned};

use crate::error::AccessError;
use crate::storage::{Alternatives, Storage};

mod impls;

/// A value holding exactly one alternative of the tuple list `L`.
///
/// ```
/// use oneof::Variant;
///
/// let mut value: Variant<(i32, f64, String)> = Variant::new(3.5_f64);
/// assert_eq!(value.tag(), 1);
/// assert_eq!(value.get::<f64, _>(), Ok(&3.5));
///
/// value.set(String::from("text"));
/// assert_eq!(value.tag(), 2);
/// assert!(!value.holds_alternative::<f64, _>());
/// ```
pub struct Variant<L: Alternatives> {
    storage: Storage<L>,
}

impl<L: Alternatives> Variant<L> {
    /// Number of alternatives.
    pub const LEN: usize = L::LEN;

    /// Hold `value`, tagging it with its position in `L`.
    #[inline]
    pub fn new<T, I>(value: T) -> Self
    where
        L: Contains<T, I>,
    {
        Self {
            storage: Storage::new(value),
        }
    }

    /// Adopt existing storage. Used by the dispatch-driven `Clone`.
    #[inline]
    pub(crate) fn from_storage(storage: Storage<L>) -> Self {
        Self { storage }
    }

    #[inline]
    pub(crate) fn storage(&self) -> &Storage<L> {
        &self.storage
    }

    /// Position of `T` in `L`.
    #[inline]
    pub const fn index_of<T, I>() -> usize
    where
        L: Contains<T, I>,
    {
        <L as Contains<T, I>>::INDEX
    }

    /// Tag of the active alternative, in `0..Self::LEN`.
    #[inline]
    pub fn tag(&self) -> usize {
        self.storage.tag()
    }

    /// Whether `T` is the active alternative.
    #[inline]
    pub fn holds_alternative<T, I>(&self) -> bool
    where
        L: Contains<T, I>,
    {
        self.tag() == Self::index_of::<T, I>()
    }

    /// Replace the held value with `value`.
    ///
    /// The previous occupant is dropped before `value` takes its place.
    pub fn set<T, I>(&mut self, value: T)
    where
        L: Contains<T, I>,
    {
        let previous = self.tag();
        *self = Self::new(value);
        tracing::trace!(
            previous,
            current = self.tag(),
            alternative = type_name::<T>(),
            "variant alternative replaced"
        );
    }

    /// Shared access to the held `T`.
    pub fn get<T, I>(&self) -> Result<&T, AccessError>
    where
        L: Contains<T, I>,
    {
        self.check::<T, I>()?;
        // SAFETY: the tag was just checked against `T`'s position.
        Ok(unsafe { self.get_unchecked::<T, I>() })
    }

    /// Exclusive access to the held `T`.
    pub fn get_mut<T, I>(&mut self) -> Result<&mut T, AccessError>
    where
        L: Contains<T, I>,
    {
        self.check::<T, I>()?;
        // SAFETY: the tag was just checked against `T`'s position.
        Ok(unsafe { self.get_unchecked_mut::<T, I>() })
    }

    /// Move the held `T` out, consuming the container.
    ///
    /// On a bad access the container is dropped.
    pub fn into_inner<T, I>(self) -> Result<T, AccessError>
    where
        L: Contains<T, I>,
    {
        self.check::<T, I>()?;
        // SAFETY: the tag was just checked against `T`'s position.
        Ok(unsafe { self.into_unchecked::<T, I>() })
    }

    /// Shared access without checking the tag.
    ///
    /// # Safety
    ///
    /// `T` must be the active alternative.
    #[inline]
    pub unsafe fn get_unchecked<T, I>(&self) -> &T
    where
        L: Contains<T, I>,
    {
        debug_assert!(self.holds_alternative::<T, I>());
        // SAFETY: the caller guarantees `T` is live in the region.
        unsafe { &*self.storage.as_ptr::<T>() }
    }

    /// Exclusive access without checking the tag.
    ///
    /// # Safety
    ///
    /// `T` must be the active alternative.
    #[inline]
    pub unsafe fn get_unchecked_mut<T, I>(&mut self) -> &mut T
    where
        L: Contains<T, I>,
    {
        debug_assert!(self.holds_alternative::<T, I>());
        // SAFETY: the caller guarantees `T` is live in the region.
        unsafe { &mut *self.storage.as_mut_ptr::<T>() }
    }

    /// Move the held value out without checking the tag.
    ///
    /// # Safety
    ///
    /// `T` must be the active alternative.
    #[inline]
    pub unsafe fn into_unchecked<T, I>(self) -> T
    where
        L: Contains<T, I>,
    {
        debug_assert!(self.holds_alternative::<T, I>());
        // SAFETY: the caller guarantees `T` is live in the region.
        unsafe { self.storage.into_value::<T>() }
    }

    fn check<T, I>(&self) -> Result<(), AccessError>
    where
        L: Contains<T, I>,
    {
        let requested = Self::index_of::<T, I>();
        let active = self.tag();
        if requested == active {
            return Ok(());
        }
        tracing::debug!(
            requested,
            active,
            alternative = type_name::<T>(),
            "bad variant access"
        );
        Err(AccessError::bad_access::<T>(requested, active))
    }
}

impl<L: Alternatives> Classify for Variant<L> {
    type Mode = Owned;
}

/// Whether `T` is the active alternative of `variant`.
#[inline]
pub fn holds_alternative<T, L, I>(variant: &Variant<L>) -> bool
where
    L: Alternatives + Contains<T, I>,
{
    variant.holds_alternative::<T, I>()
}

/// Shared access to the `T` held by `variant`.
#[inline]
pub fn get<T, L, I>(variant: &Variant<L>) -> Result<&T, AccessError>
where
    L: Alternatives + Contains<T, I>,
{
    variant.get::<T, I>()
}

/// Exclusive access to the `T` held by `variant`.
#[inline]
pub fn get_mut<T, L, I>(variant: &mut Variant<L>) -> Result<&mut T, AccessError>
where
    L: Alternatives + Contains<T, I>,
{
    variant.get_mut::<T, I>()
}

/// Move the `T` out of `variant`.
#[inline]
pub fn into_inner<T, L, I>(variant: Variant<L>) -> Result<T, AccessError>
where
    L: Alternatives + Contains<T, I>,
{
    variant.into_inner::<T, I>()
}
