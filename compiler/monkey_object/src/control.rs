//! Short-circuit helpers for statement sequences, operands and calls.
//!
//! Each helper takes the per-node evaluation as a closure, so the same
//! propagation rules apply whatever evaluator drives them:
//! - an `Error` stops everything and is passed through unchanged
//! - a `ReturnValue` stops a block and is unwrapped at a call boundary or
//!   at the top of a program

use monkey_ir::BlockStatement;

use crate::errors::not_a_function;
use crate::{Environment, Value, NULL};

/// Evaluate statements of a nested block in order.
///
/// Stops at the first `Error` or `ReturnValue` and returns it still
/// wrapped, so the enclosing call can see the return. An empty block
/// evaluates to `NULL`.
pub fn eval_block<S, F>(statements: impl IntoIterator<Item = S>, mut eval_fn: F) -> Value
where
    F: FnMut(S) -> Value,
{
    let mut result = NULL;
    for stmt in statements {
        let value = eval_fn(stmt);
        if value.short_circuits() {
            return value;
        }
        result = value;
    }
    result
}

/// Evaluate the top-level statements of a program.
///
/// Like [`eval_block`], but a `ReturnValue` is unwrapped here since there
/// is no call boundary above the program.
pub fn eval_program<S, F>(statements: impl IntoIterator<Item = S>, mut eval_fn: F) -> Value
where
    F: FnMut(S) -> Value,
{
    let mut result = NULL;
    for stmt in statements {
        match eval_fn(stmt) {
            Value::ReturnValue(inner) => return *inner,
            err @ Value::Error(_) => return err,
            value => result = value,
        }
    }
    result
}

/// Evaluate call arguments left to right.
///
/// The first `Error` aborts the rest and is returned as `Err`.
pub fn eval_operands<E, F>(exprs: impl IntoIterator<Item = E>, mut eval_fn: F) -> Result<Vec<Value>, Value>
where
    F: FnMut(E) -> Value,
{
    let exprs = exprs.into_iter();
    let mut values = Vec::with_capacity(exprs.size_hint().0);
    for expr in exprs {
        let value = eval_fn(expr);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }
    Ok(values)
}

/// Call `callee` with already-evaluated arguments.
///
/// `eval_body` runs the function body in the prepared call environment.
/// The result has any `ReturnValue` wrapper removed so a `return` never
/// escapes its own function.
#[tracing::instrument(level = "debug", skip_all, fields(callee = %callee.kind(), args = args.len()))]
pub fn apply_function<F>(callee: &Value, args: Vec<Value>, eval_body: F) -> Value
where
    F: FnOnce(&BlockStatement, &Environment) -> Value,
{
    let func = match callee {
        Value::Function(func) => func,
        Value::Error(_) => return callee.clone(),
        other => return not_a_function(other.kind()),
    };

    let env = match func.bind_arguments(args) {
        Ok(env) => env,
        Err(err) => return err,
    };
    eval_body(&func.body, &env).unwrap_return()
}

#[cfg(test)]
mod tests;
