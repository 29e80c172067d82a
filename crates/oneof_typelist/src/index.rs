//! Type-level positions.
//!
//! A position is a Peano number: [`Here`] is zero and [`There<I>`] is the
//! successor of `I`. Keeping the position in the type lets the compiler pick
//! the one `Contains` impl that matches, so callers can write `_` for it.

use std::marker::PhantomData;

/// Position zero.
pub enum Here {}

/// The position after `I`.
pub struct There<I>(PhantomData<I>);

/// Runtime value of a type-level position.
pub trait Index {
    const VALUE: usize;
}

impl Index for Here {
    const VALUE: usize = 0;
}

impl<I: Index> Index for There<I> {
    const VALUE: usize = I::VALUE + 1;
}

pub type I0 = Here;
pub type I1 = There<I0>;
pub type I2 = There<I1>;
pub type I3 = There<I2>;
pub type I4 = There<I3>;
pub type I5 = There<I4>;
pub type I6 = There<I5>;
pub type I7 = There<I6>;
pub type I8 = There<I7>;
pub type I9 = There<I8>;
pub type I10 = There<I9>;
pub type I11 = There<I10>;
