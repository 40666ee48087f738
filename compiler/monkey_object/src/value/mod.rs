//! Runtime values for the Monkey interpreter.
//!
//! `Value` is a closed sum type: adding a new kind of value is a compile
//! error everywhere a `match` forgets it.
//!
//! # Interned Booleans and Null
//!
//! `TRUE`, `FALSE` and `NULL` are the canonical instances. Build booleans
//! through [`Value::boolean`] so an evaluator can compare against the
//! constants directly. Equality never depends on that: it is always by
//! logical value.

mod function;

use std::fmt;
use std::rc::Rc;

use monkey_ir::{BlockStatement, Identifier};

use crate::Environment;

pub use function::FunctionValue;

/// Discriminator tag for runtime type checks and error messages.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    Integer,
    Boolean,
    Null,
    ReturnValue,
    Error,
    Function,
}

impl ValueKind {
    /// The stable tag (`INTEGER`, `RETURN_VALUE`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Integer => "INTEGER",
            ValueKind::Boolean => "BOOLEAN",
            ValueKind::Null => "NULL",
            ValueKind::ReturnValue => "RETURN_VALUE",
            ValueKind::Error => "ERROR",
            ValueKind::Function => "FUNCTION",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical `true`.
pub const TRUE: Value = Value::Boolean(true);
/// The canonical `false`.
pub const FALSE: Value = Value::Boolean(false);
/// The canonical `null`.
pub const NULL: Value = Value::Null;

/// Runtime value in the Monkey interpreter.
#[derive(Clone)]
pub enum Value {
    /// 64-bit signed integer.
    Integer(i64),
    /// Boolean value.
    Boolean(bool),
    /// The absence of a value.
    Null,
    /// Runtime failure carrying a free-form message.
    Error(String),
    /// Wrapper marking a value that is being returned early.
    ///
    /// Only exists while unwinding to a call boundary; never stored.
    ReturnValue(Box<Value>),
    /// Function value (closure).
    Function(FunctionValue),
}

// Constructors

impl Value {
    #[inline]
    pub fn integer(n: i64) -> Self {
        Value::Integer(n)
    }

    /// Map a native bool to the canonical `TRUE`/`FALSE`.
    #[inline]
    pub fn boolean(b: bool) -> Self {
        if b {
            TRUE
        } else {
            FALSE
        }
    }

    /// Create an error value.
    ///
    /// # Example
    ///
    /// ```text
    /// let err = Value::error("identifier not found: x");
    /// assert_eq!(err.inspect(), "ERROR: identifier not found: x");
    /// ```
    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    /// Wrap a value that a `return` statement produced.
    #[inline]
    pub fn return_value(value: Value) -> Self {
        Value::ReturnValue(Box::new(value))
    }

    /// Create a closure capturing `env` by reference.
    #[inline]
    pub fn function(params: Vec<Identifier>, body: Rc<BlockStatement>, env: Environment) -> Self {
        Value::Function(FunctionValue::new(params, body, env))
    }
}

// Value Methods

impl Value {
    /// The discriminator tag.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
            Value::Error(_) => ValueKind::Error,
            Value::ReturnValue(_) => ValueKind::ReturnValue,
            Value::Function(_) => ValueKind::Function,
        }
    }

    /// Human-readable rendering. One-way: not meant to be parsed back.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn is_return(&self) -> bool {
        matches!(self, Value::ReturnValue(_))
    }

    /// Check if this value must stop the enclosing block (error or return).
    #[inline]
    pub fn short_circuits(&self) -> bool {
        matches!(self, Value::Error(_) | Value::ReturnValue(_))
    }

    /// `null` and `false` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Boolean(b) => *b,
            _ => true,
        }
    }

    /// Strip one `ReturnValue` layer; other values pass through unchanged.
    #[must_use]
    pub fn unwrap_return(self) -> Value {
        match self {
            Value::ReturnValue(inner) => *inner,
            other => other,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The message of an `Error` value.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Value::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }
}

// Trait Implementations

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::boolean(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Error(msg) => write!(f, "ERROR: {msg}"),
            Value::ReturnValue(inner) => write!(f, "{inner}"),
            Value::Function(func) => write!(f, "{func}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "Integer({n})"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::Null => write!(f, "Null"),
            Value::Error(msg) => write!(f, "Error({msg:?})"),
            Value::ReturnValue(inner) => write!(f, "ReturnValue({inner:?})"),
            Value::Function(func) => write!(f, "Function({func:?})"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::ReturnValue(a), Value::ReturnValue(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}
