//! Function values (closures).

use std::fmt;
use std::rc::Rc;

use monkey_ir::{BlockStatement, Identifier};

use crate::errors::wrong_argument_count;
use crate::{Environment, Value};

/// A user-defined function together with the environment it was created in.
///
/// The environment is captured by reference: bindings added to it after the
/// function was created (including the function's own name) are visible
/// when the body runs. This is what makes recursion through `let` work.
#[derive(Clone)]
pub struct FunctionValue {
    pub params: Vec<Identifier>,
    /// Shared with the AST node; cloning a function never copies its body.
    pub body: Rc<BlockStatement>,
    pub env: Environment,
}

impl FunctionValue {
    pub fn new(params: Vec<Identifier>, body: Rc<BlockStatement>, env: Environment) -> Self {
        FunctionValue { params, body, env }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Build the call environment: a fresh scope enclosed by the captured
    /// one, with each parameter bound to its argument.
    ///
    /// Returns the `wrong number of arguments` error value on arity mismatch.
    #[tracing::instrument(level = "debug", skip_all, fields(want = self.params.len(), got = args.len()))]
    pub fn bind_arguments(&self, args: Vec<Value>) -> Result<Environment, Value> {
        if args.len() != self.params.len() {
            tracing::debug!("arity mismatch");
            return Err(wrong_argument_count(self.params.len(), args.len()));
        }

        let env = Environment::enclosed(&self.env);
        for (param, arg) in self.params.iter().zip(args) {
            env.set(param.as_str(), arg);
        }
        Ok(env)
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") {{\n{}\n}}", self.body)
    }
}

// The captured environment may contain this very function, so Debug goes
// through Environment's shallow formatting.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("params", &self.params)
            .field("body", &self.body.to_string())
            .field("env", &self.env)
            .finish()
    }
}

/// Identity equality: same body node and same captured environment.
impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
            && self.env.ptr_eq(&other.env)
            && self.params == other.params
    }
}

impl Eq for FunctionValue {}
