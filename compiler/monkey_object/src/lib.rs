//! Monkey Object - runtime values and variable environments.
//!
//! This crate provides the object model a tree-walking evaluator works
//! against:
//! - `Value`: the closed set of runtime values (integer, boolean, null,
//!   error, return wrapper, function)
//! - `Environment`: shared, mutable name bindings chained to an enclosing
//!   scope
//! - `errors`: the runtime error messages, produced as `Value::Error`
//! - `control`: the short-circuit helpers for errors and early returns
//!
//! # Sentinel Propagation
//!
//! Failures and early returns travel through the ordinary result channel.
//! An evaluator checks every intermediate `Value`: an `Error` aborts the
//! surrounding construct, a `ReturnValue` unwinds to the nearest call
//! boundary where it is unwrapped. There is no panic or `Result`-based
//! side channel for language-level control flow.
//!
//! # Single-Threaded
//!
//! Environments are `Rc<RefCell<_>>` handles, so `Value` is neither `Send`
//! nor `Sync`. Embedders that need threads must add their own isolation.

pub mod control;
mod environment;
pub mod errors;
mod value;

pub use control::{apply_function, eval_block, eval_operands, eval_program};
pub use environment::{Environment, LocalScope};
pub use errors::RuntimeError;
pub use value::{FunctionValue, Value, ValueKind, FALSE, NULL, TRUE};
