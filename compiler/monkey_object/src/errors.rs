//! Runtime errors for the Monkey interpreter.
//!
//! Errors are values: every failure an evaluator detects becomes a
//! `Value::Error` carrying one of the messages below. `RuntimeError` gives
//! those messages a typed home so callers can match on the category before
//! flattening it into a value. Factory functions (e.g. `division_by_zero()`)
//! are the usual entry point and return the `Value` directly.

use monkey_ir::{InfixOp, PrefixOp};
use thiserror::Error;

use crate::{Value, ValueKind};

/// Typed runtime error category.
///
/// `Display` produces the exact message stored in the error value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("identifier not found: {name}")]
    UnknownIdentifier { name: String },

    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: ValueKind,
        op: InfixOp,
        right: ValueKind,
    },

    #[error("unknown operator: {op}{right}")]
    UnknownPrefixOperator { op: PrefixOp, right: ValueKind },

    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: ValueKind,
        op: InfixOp,
        right: ValueKind,
    },

    #[error("not a function: {kind}")]
    NotAFunction { kind: ValueKind },

    #[error("wrong number of arguments: want={want}, got={got}")]
    WrongArgumentCount { want: usize, got: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow: {left} {op} {right}")]
    IntegerOverflow { left: i64, op: InfixOp, right: i64 },
}

impl From<RuntimeError> for Value {
    fn from(err: RuntimeError) -> Self {
        Value::Error(err.to_string())
    }
}

// Factory functions

#[cold]
pub fn unknown_identifier(name: &str) -> Value {
    RuntimeError::UnknownIdentifier {
        name: name.to_string(),
    }
    .into()
}

/// Operands of an infix expression have different kinds.
#[cold]
pub fn type_mismatch(left: ValueKind, op: InfixOp, right: ValueKind) -> Value {
    RuntimeError::TypeMismatch { left, op, right }.into()
}

#[cold]
pub fn unknown_prefix_operator(op: PrefixOp, right: ValueKind) -> Value {
    RuntimeError::UnknownPrefixOperator { op, right }.into()
}

/// Operands share a kind that does not support `op`.
#[cold]
pub fn unknown_infix_operator(left: ValueKind, op: InfixOp, right: ValueKind) -> Value {
    RuntimeError::UnknownInfixOperator { left, op, right }.into()
}

#[cold]
pub fn not_a_function(kind: ValueKind) -> Value {
    RuntimeError::NotAFunction { kind }.into()
}

#[cold]
pub fn wrong_argument_count(want: usize, got: usize) -> Value {
    RuntimeError::WrongArgumentCount { want, got }.into()
}

#[cold]
pub fn division_by_zero() -> Value {
    RuntimeError::DivisionByZero.into()
}

/// Checked integer arithmetic overflowed.
#[cold]
pub fn integer_overflow(left: i64, op: InfixOp, right: i64) -> Value {
    RuntimeError::IntegerOverflow { left, op, right }.into()
}
