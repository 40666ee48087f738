//! Environment for variable scoping in the interpreter.
//!
//! An `Environment` is a shared handle: cloning it yields another handle
//! onto the same bindings, so a closure and the scope that created it see
//! each other's writes. Nested scopes link to their enclosing scope through
//! `outer`; only [`Environment::lookup`] follows that link.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Value;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through [`LocalScope::new`]. Uses `Rc`, so it
/// cannot cross threads.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Check if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

/// Bindings of one scope plus the link to the enclosing scope.
#[derive(Default)]
struct Scope {
    store: FxHashMap<String, Value>,
    outer: Option<Environment>,
}

/// Mutable name-to-value bindings with an optional enclosing scope.
#[derive(Clone, Default)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// Create an empty top-level environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Create an empty environment whose enclosing scope is `outer`.
    pub fn enclosed(outer: &Environment) -> Self {
        tracing::trace!(depth = outer.depth() + 1, "enclosed environment");
        Environment(LocalScope::new(Scope {
            store: FxHashMap::default(),
            outer: Some(outer.clone()),
        }))
    }

    /// Look up `name` in this scope only.
    ///
    /// The enclosing scope is not consulted; use [`Environment::lookup`]
    /// for chained resolution.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.0.borrow().store.get(name).cloned()
    }

    /// Bind `name` in this scope, replacing any previous binding.
    ///
    /// Returns the stored value.
    pub fn set(&self, name: impl Into<String>, value: Value) -> Value {
        self.0.borrow_mut().store.insert(name.into(), value.clone());
        value
    }

    /// Resolve `name` here, then in each enclosing scope outward.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let scope = self.0.borrow();
        if let Some(value) = scope.store.get(name) {
            return Some(value.clone());
        }
        scope.outer.as_ref().and_then(|outer| outer.lookup(name))
    }

    /// The enclosing scope, if any.
    pub fn outer(&self) -> Option<Environment> {
        self.0.borrow().outer.clone()
    }

    /// Number of enclosing scopes (0 for a top-level environment).
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.outer();
        while let Some(env) = current {
            depth += 1;
            current = env.outer();
        }
        depth
    }

    /// Number of bindings in this scope.
    pub fn len(&self) -> usize {
        self.0.borrow().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().store.is_empty()
    }

    /// Check if `name` is bound in this scope.
    pub fn contains(&self, name: &str) -> bool {
        self.0.borrow().store.contains_key(name)
    }

    /// Names bound in this scope, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.borrow().store.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Check if both handles refer to the same environment.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

// Shallow: a binding may be a closure capturing this environment.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .field("names", &self.names())
            .finish()
    }
}
