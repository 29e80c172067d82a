//! `oneof-demo`: runs the container walk-through on stdout.
//!
//! Set `RUST_LOG=oneof=trace,oneof_demo=debug` to see the container events.

use std::io;

fn main() {
    oneof_demo::init_tracing();

    let stdout = io::stdout();
    if let Err(err) = oneof_demo::run(&mut stdout.lock()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
