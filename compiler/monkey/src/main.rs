//! Monkey CLI
//!
//! Interactive token printer: type a line, see its tokens.

use std::io;

use monkey::{init_tracing, start, ReplConfig};

fn main() {
    init_tracing();

    let config = ReplConfig::from_env();
    if let Err(err) = start(io::stdin().lock(), io::stdout().lock(), &config) {
        eprintln!("monkey: {err}");
        std::process::exit(1);
    }
}
