use super::*;
use crate::errors::division_by_zero;
use crate::{FALSE, TRUE};
use monkey_ir::{Expression, Identifier, Statement};
use pretty_assertions::assert_eq;
use std::rc::Rc;

#[test]
fn test_eval_block_empty_is_null() {
    assert_eq!(eval_block(Vec::<Value>::new(), |v| v), NULL);
    assert_eq!(eval_program(Vec::<Value>::new(), |v| v), NULL);
}

#[test]
fn test_eval_block_yields_last_value() {
    let values = vec![Value::integer(1), TRUE, Value::integer(3)];
    assert_eq!(eval_block(values, |v| v), Value::integer(3));
}

#[test]
fn test_eval_block_keeps_return_wrapped() {
    let mut seen = 0;
    let values = vec![
        Value::integer(1),
        Value::return_value(Value::integer(10)),
        Value::integer(3),
    ];
    let result = eval_block(values, |v| {
        seen += 1;
        v
    });
    assert_eq!(result, Value::return_value(Value::integer(10)));
    assert_eq!(seen, 2);
}

#[test]
fn test_eval_program_unwraps_return() {
    let values = vec![
        Value::integer(1),
        Value::return_value(Value::integer(10)),
        Value::integer(3),
    ];
    assert_eq!(eval_program(values, |v| v), Value::integer(10));
}

#[test]
fn test_error_stops_block_and_program() {
    let values = || vec![division_by_zero(), Value::return_value(TRUE), FALSE];
    assert_eq!(eval_block(values(), |v| v), division_by_zero());
    assert_eq!(eval_program(values(), |v| v), division_by_zero());
}

#[test]
fn test_eval_operands_collects_in_order() {
    let mut order = Vec::new();
    let result = eval_operands([1, 2, 3], |n| {
        order.push(n);
        Value::integer(n * 10)
    });
    assert_eq!(
        result,
        Ok(vec![Value::integer(10), Value::integer(20), Value::integer(30)])
    );
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn test_eval_operands_stops_at_first_error() {
    let mut evaluated = 0;
    let result = eval_operands([1, 0, 2], |n| {
        evaluated += 1;
        if n == 0 {
            division_by_zero()
        } else {
            Value::integer(n)
        }
    });
    assert_eq!(result, Err(division_by_zero()));
    assert_eq!(evaluated, 2);
}

fn identity_function(env: &Environment) -> Value {
    let body = Rc::new(BlockStatement::new(vec![Statement::Return(
        Expression::ident("x"),
    )]));
    Value::function(vec![Identifier::new("x")], body, env.clone())
}

#[test]
fn test_apply_function_binds_and_unwraps() {
    let func = identity_function(&Environment::new());
    let result = apply_function(&func, vec![Value::integer(7)], |body, env| {
        assert_eq!(body.statements.len(), 1);
        Value::return_value(env.lookup("x").unwrap_or(NULL))
    });
    assert_eq!(result, Value::integer(7));
}

#[test]
fn test_apply_function_not_a_function() {
    let result = apply_function(&Value::integer(1), Vec::new(), |_, _| NULL);
    assert_eq!(result, Value::error("not a function: INTEGER"));
}

#[test]
fn test_apply_function_passes_error_through() {
    let err = Value::error("identifier not found: f");
    assert_eq!(apply_function(&err, Vec::new(), |_, _| NULL), err);
}

#[test]
fn test_apply_function_arity_error_skips_body() {
    let func = identity_function(&Environment::new());
    let mut ran = false;
    let result = apply_function(&func, Vec::new(), |_, _| {
        ran = true;
        NULL
    });
    assert_eq!(
        result,
        Value::error("wrong number of arguments: want=1, got=0")
    );
    assert!(!ran);
}

#[test]
fn test_apply_function_call_env_is_fresh() {
    let captured = Environment::new();
    let func = identity_function(&captured);
    let first = apply_function(&func, vec![Value::integer(1)], |_, env| {
        env.set("local", TRUE);
        NULL
    });
    assert_eq!(first, NULL);
    assert!(!captured.contains("local"));
    assert!(!captured.contains("x"));
}
