//! `oneof` - a closed tagged union over a fixed list of types.
//!
//! A [`Variant<L>`] holds exactly one value whose type is one of the
//! alternatives in the tuple `L`, together with a tag naming which one.
//!
//! # Layers
//!
//! - **Type lists** ([`oneof_typelist`]): positions, head and value
//!   categories, all computed at compile time.
//! - **Storage** ([`storage`]): a region sized and aligned for the largest
//!   alternative, plus a drop table indexed by the tag.
//! - **Variant** ([`Variant`]): construction, replacement, typed access.
//! - **Visit** ([`visit`](mod@visit)): one generated dispatch table per visitor and
//!   access mode, so applying an operation is a single indexed call.
//!
//! Every per-alternative table is expanded once per tuple arity (1 to 12) by
//! the macros in this crate; no code branches on the tag by hand.
//!
//! # Example
//!
//! ```
//! use oneof::{visit, Variant, Visitor};
//!
//! struct Describe;
//!
//! impl<'a> Visitor<&'a i32> for Describe {
//!     type Output = String;
//!     fn visit(&mut self, value: &'a i32) -> String {
//!         format!("int: {value}")
//!     }
//! }
//!
//! impl<'a> Visitor<&'a String> for Describe {
//!     type Output = String;
//!     fn visit(&mut self, value: &'a String) -> String {
//!         format!("string: {value}")
//!     }
//! }
//!
//! let mut value: Variant<(i32, String)> = Variant::new(7_i32);
//! assert_eq!(visit(Describe, &value), "int: 7");
//!
//! value.set(String::from("seven"));
//! assert!(value.holds_alternative::<String, _>());
//! assert_eq!(value.get::<String, _>().map(String::as_str), Ok("seven"));
//! assert!(value.get::<i32, _>().is_err());
//! ```
//!
//! # Compile-time rejections
//!
//! Constructing from a type outside the list does not compile:
//!
//! ```compile_fail
//! use oneof::Variant;
//!
//! let value: Variant<(i32, f64)> = Variant::new("not an alternative");
//! ```
//!
//! Neither does typed access to such a type:
//!
//! ```compile_fail
//! use oneof::Variant;
//!
//! let value: Variant<(i32, f64)> = Variant::new(1_i32);
//! let _ = value.get::<String, _>();
//! ```
//!
//! A list needs at least one alternative:
//!
//! ```compile_fail
//! use oneof::Variant;
//!
//! fn empty(_: Variant<()>) {}
//! ```
//!
//! There is no default (valueless) container:
//!
//! ```compile_fail
//! use oneof::Variant;
//!
//! let value: Variant<(i32, f64)> = Default::default();
//! ```
//!
//! A visitor must produce one output type for every alternative:
//!
//! ```compile_fail
//! use oneof::{visit, Variant, Visitor};
//!
//! struct Mixed;
//!
//! impl<'a> Visitor<&'a i32> for Mixed {
//!     type Output = i32;
//!     fn visit(&mut self, value: &'a i32) -> i32 {
//!         *value
//!     }
//! }
//!
//! impl<'a> Visitor<&'a f64> for Mixed {
//!     type Output = f64;
//!     fn visit(&mut self, value: &'a f64) -> f64 {
//!         *value
//!     }
//! }
//!
//! let value: Variant<(i32, f64)> = Variant::new(1_i32);
//! let _ = visit(Mixed, &value);
//! ```
//!
//! # Tracing
//!
//! The crate emits `tracing` events: `debug` for bad accesses and `trace`
//! when a container switches alternatives. Enable them with e.g.
//! `RUST_LOG=oneof=trace` in a binary that installs a subscriber.

#![allow(
    unsafe_code,
    reason = "the storage engine places and drops alternatives in a raw union region"
)]

/// Invoke `$callback!` once per supported tuple arity with the alternative
/// type parameters and their type-level positions.
macro_rules! for_each_arity {
    ($callback:ident) => {
        $callback!(1; T0: I0);
        $callback!(2; T0: I0, T1: I1);
        $callback!(3; T0: I0, T1: I1, T2: I2);
        $callback!(4; T0: I0, T1: I1, T2: I2, T3: I3);
        $callback!(5; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4);
        $callback!(6; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5);
        $callback!(7; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5, T6: I6);
        $callback!(8; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5, T6: I6, T7: I7);
        $callback!(
            9; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5, T6: I6, T7: I7, T8: I8
        );
        $callback!(
            10; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5, T6: I6, T7: I7, T8: I8,
            T9: I9
        );
        $callback!(
            11; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5, T6: I6, T7: I7, T8: I8,
            T9: I9, T10: I10
        );
        $callback!(
            12; T0: I0, T1: I1, T2: I2, T3: I3, T4: I4, T5: I5, T6: I6, T7: I7, T8: I8,
            T9: I9, T10: I10, T11: I11
        );
    };
}

mod error;
pub mod storage;
mod variant;
pub mod visit;

pub use error::AccessError;
pub use storage::Alternatives;
pub use variant::{get, get_mut, holds_alternative, into_inner, Variant};
pub use visit::{visit, visit_with, Visitable, Visiting, Visitor};

pub use oneof_typelist::{
    category_of, index_of, Classify, Contains, Head, Index, TypeList, ValueCategory,
    MAX_ALTERNATIVES,
};
