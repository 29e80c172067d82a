//! Tuple lists, their head, and membership.

use crate::index::{Index, I0, I1, I10, I11, I2, I3, I4, I5, I6, I7, I8, I9};

/// A non-empty, ordered list of alternative types.
pub trait TypeList {
    /// Number of alternatives.
    const LEN: usize;

    /// The first alternative.
    type Head;
}

/// First alternative of `L`.
pub type Head<L> = <L as TypeList>::Head;

mod sealed {
    pub trait Member<T, I> {}
}

/// `T` occurs in the list at position `I`.
///
/// Implemented once per element of every tuple list. When `T` occurs
/// exactly once, `I` is inferred; when it does not occur at all there is no
/// impl and the use site fails to compile. Sealed: storage code relies on
/// `INDEX` naming the element that really is `T`.
pub trait Contains<T, I>: TypeList + sealed::Member<T, I> {
    /// Zero-based position of `T`, equal to the tag of that alternative.
    const INDEX: usize;
}

/// Zero-based position of `T` in `L`.
#[inline]
pub const fn index_of<L, T, I>() -> usize
where
    L: Contains<T, I>,
{
    <L as Contains<T, I>>::INDEX
}

macro_rules! type_list {
    (@list $len:literal; $head:ident $(, $tail:ident)*) => {
        impl<$head $(, $tail)*> TypeList for ($head, $($tail,)*) {
            const LEN: usize = $len;
            type Head = $head;
        }
    };
    (@members $all:tt $($T:ident : $I:ident),+) => {
        $( type_list!(@member $all $T : $I); )+
    };
    (@member [$($A:ident),+] $T:ident : $I:ident) => {
        impl<$($A),+> sealed::Member<$T, $I> for ($($A,)+) {}

        impl<$($A),+> Contains<$T, $I> for ($($A,)+) {
            const INDEX: usize = <$I as Index>::VALUE;
        }
    };
    ($len:literal; $($T:ident : $I:ident),+) => {
        type_list!(@list $len; $($T),+);
        type_list!(@members [$($T),+] $($T : $I),+);
    };
}

type_list!(1; T0: I0);
type_list!(2; T0: I0, T1: I1);
type_list!(3; T0: I0, T1: I1, T2: I2);
type_list!(4; T0: I0, T1: I1, T2: I2, T3: I3);
type_list!(5; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4);
type_list!(6; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5);
type_list!(7; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5, T6: I6);
type_list!(8; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5, T6: I6, T7: I7);
type_list!(9; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5, T6: I6, T7: I7, T8: I8);
type_list!(10; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5, T6: I6, T7: I7, T8: I8, T9: I9);
type_list!(
    11; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5, T6: I6, T7: I7, T8: I8, T9: I9,
    T10: I10
);
type_list!(
    12; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5, T6: I6, T7: I7, T8: I8, T9: I9,
    T10: I10, T11: I11
);
