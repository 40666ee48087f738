//! Monkey - interactive token printer and process setup.
//!
//! The library half of the `monkey` binary, split out so the read loop can
//! be driven from tests with in-memory readers and writers.

pub mod config;
pub mod repl;
mod tracing_setup;

pub use config::ReplConfig;
pub use repl::{start, ReplError};
pub use tracing_setup::init_tracing;
