//! Walk-through of the `oneof` container.
//!
//! [`run`] builds a `Variant<(i32, f64, String, *mut ())>` from a double,
//! moves and copies it, replaces its alternative with a string and visits it
//! along the way, writing one line per visit:
//!
//! ```text
//! double: 3.5
//! text
//! other
//! ```

use std::io::{self, Write};
use std::sync::Once;

use oneof::{category_of, visit, Classify, Variant, ValueCategory, Visitor};

/// The alternatives exercised by the walk-through.
pub type Value = Variant<(i32, f64, String, *mut ())>;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the walk-through.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=oneof=debug` or `RUST_LOG=oneof=trace,oneof_demo=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Names numbers precisely and everything else as "other".
pub struct Describe;

impl<'a> Visitor<&'a i32> for Describe {
    type Output = String;
    fn visit(&mut self, value: &'a i32) -> String {
        format!("int: {value}")
    }
}

impl<'a> Visitor<&'a f64> for Describe {
    type Output = String;
    fn visit(&mut self, value: &'a f64) -> String {
        format!("double: {value}")
    }
}

macro_rules! describe_as_other {
    ($($ty:ty),+) => {
        $(
            impl<'a> Visitor<&'a $ty> for Describe {
                type Output = String;
                fn visit(&mut self, _: &'a $ty) -> String {
                    String::from("other")
                }
            }
        )+
    };
}

describe_as_other!(String, *mut ());

/// Text form of a single alternative.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for i32 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for f64 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Render for *mut () {
    fn render(&self) -> String {
        format!("{:p}", *self)
    }
}

/// Prints whatever alternative is active.
pub struct Print;

impl<'a, T: Render> Visitor<&'a T> for Print {
    type Output = String;
    fn visit(&mut self, value: &'a T) -> String {
        value.render()
    }
}

/// How a container expression of type `C` will be handed to a visitor.
pub fn access_note<C: Classify>(container: &C) -> &'static str {
    let category: ValueCategory = category_of(container);
    match (category.is_borrowed(), category.is_mutable()) {
        (false, _) => "moved into the visitor",
        (true, true) => "lent mutably",
        (true, false) => "lent read-only",
    }
}

/// Run the walk-through, writing its lines to `out`.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let original = Value::new(3.5_f64);
    let moved = original;
    let copied = moved.clone();

    let mut value = Value::new(0_i32);
    value.clone_from(&copied);
    tracing::debug!(tag = value.tag(), "copy-assigned from a moved double");

    let double = value.get::<f64, _>().map_err(io::Error::other)?;
    tracing::debug!(double, "double is active");
    tracing::debug!(
        category = %category_of(&&value),
        access = access_note(&&value),
        "describing"
    );
    writeln!(out, "{}", visit(Describe, &value))?;

    value.set(String::from("text"));
    writeln!(out, "{}", visit(Print, &value))?;
    writeln!(out, "{}", visit(Describe, &value))?;

    Ok(())
}
