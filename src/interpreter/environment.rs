use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{error::RuntimeError, interpreter::value::core::Value, util::stack::ensure_sufficient_stack};

/// One lexical scope: a set of bindings and an optional enclosing scope.
///
/// Scopes are shared through `Rc<RefCell<_>>` because a closure keeps its
/// defining scope alive after the block that created it has exited.
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    parent: Option<Rc<RefCell<Self>>>,
}

impl Environment {
    /// Creates a root scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scope nested in `parent`.
    #[must_use]
    pub fn with_parent(parent: Rc<RefCell<Self>>) -> Self {
        Self { values: HashMap::new(),
               parent: Some(parent), }
    }

    /// Binds `name` in this scope, replacing any binding it already has here.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Looks `name` up in this scope, then in each enclosing scope.
    ///
    /// # Errors
    /// `UndefinedVariable` at `line` if no scope binds `name`.
    ///
    /// ## Example
    /// ```
    /// use std::{cell::RefCell, rc::Rc};
    ///
    /// use treelox::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let globals = Rc::new(RefCell::new(Environment::new()));
    /// globals.borrow_mut().define("a", Value::Number(1.0));
    ///
    /// let local = Environment::with_parent(Rc::clone(&globals));
    ///
    /// assert_eq!(local.get("a", 1), Ok(Value::Number(1.0)));
    /// assert!(local.get("b", 1).is_err());
    /// ```
    pub fn get(&self, name: &str, line: usize) -> Result<Value, RuntimeError> {
        if let Some(value) = self.values.get(name) {
            return Ok(value.clone());
        }

        match &self.parent {
            Some(parent) => ensure_sufficient_stack(|| parent.borrow().get(name, line)),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }

    /// Overwrites the nearest existing binding of `name`.
    ///
    /// Never creates a binding.
    ///
    /// # Errors
    /// `UndefinedVariable` at `line` if no scope binds `name`.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> Result<(), RuntimeError> {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
            return Ok(());
        }

        match &self.parent {
            Some(parent) => ensure_sufficient_stack(|| parent.borrow_mut().assign(name, value, line)),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn shared(environment: Environment) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(environment))
    }

    #[test]
    fn define_replaces_in_the_same_scope() {
        let mut scope = Environment::new();
        scope.define("a", Value::Number(1.0));
        scope.define("a", Value::from("two"));

        assert_eq!(scope.get("a", 1), Ok(Value::from("two")));
    }

    #[test]
    fn define_shadows_without_touching_the_parent() {
        let globals = shared(Environment::new());
        globals.borrow_mut().define("a", Value::Number(1.0));

        let mut local = Environment::with_parent(Rc::clone(&globals));
        local.define("a", Value::Number(2.0));

        assert_eq!(local.get("a", 1), Ok(Value::Number(2.0)));
        assert_eq!(globals.borrow().get("a", 1), Ok(Value::Number(1.0)));
    }

    #[test]
    fn assign_updates_the_nearest_binding() {
        let globals = shared(Environment::new());
        globals.borrow_mut().define("a", Value::Number(1.0));
        let middle = shared(Environment::with_parent(Rc::clone(&globals)));
        let mut inner = Environment::with_parent(Rc::clone(&middle));

        inner.assign("a", Value::Bool(true), 3).unwrap();

        assert_eq!(globals.borrow().get("a", 3), Ok(Value::Bool(true)));
        assert_eq!(inner.get("a", 3), Ok(Value::Bool(true)));
    }

    #[test]
    fn assign_never_creates_a_binding() {
        let mut scope = Environment::new();

        assert_eq!(scope.assign("x", Value::Nil, 7),
                   Err(RuntimeError::UndefinedVariable { name: "x".to_string(),
                                                         line: 7, }));
        assert!(scope.get("x", 7).is_err());
    }
}
