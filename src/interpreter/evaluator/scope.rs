use std::collections::HashMap;

use crate::interpreter::{evaluator::core::Interpreter, value::Value};

impl<W> Interpreter<W> {
    /// Pushes a new local scope.
    ///
    /// A fresh empty scope is added on top of the scope stack.
    /// This is used for blocks, `for` loops, and function bodies.
    ///
    /// # Example
    /// ```
    /// use ggscript::interpreter::evaluator::core::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new(std::io::sink());
    /// let initial = interpreter.scope_stack.len();
    ///
    /// interpreter.push_scope();
    ///
    /// assert_eq!(interpreter.scope_stack.len(), initial + 1);
    /// ```
    pub fn push_scope(&mut self) {
        self.scope_stack.push(HashMap::new());
    }

    /// Removes the innermost local scope.
    ///
    /// This is called when leaving a block, loop, or function body. Callers
    /// pair every push with exactly one pop on every exit path, so the
    /// global scope at the bottom of the stack is never removed.
    pub fn pop_scope(&mut self) {
        self.scope_stack.pop();
    }

    /// Retrieves a variable from the visible scopes.
    ///
    /// Lookup begins at the innermost scope and proceeds outward. Inside a
    /// function body only the scopes of the current activation are searched,
    /// plus the global scope; caller-local scopes are invisible. Returns
    /// `None` if the variable is not defined in any visible scope.
    ///
    /// # Example
    /// ```
    /// use ggscript::interpreter::{evaluator::core::Interpreter, value::Value};
    ///
    /// let mut interpreter = Interpreter::new(std::io::sink());
    /// interpreter.define_local("x", Value::Integer(5));
    ///
    /// assert_eq!(interpreter.get_variable("x"), Some(&Value::Integer(5)));
    /// assert_eq!(interpreter.get_variable("y"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        for scope in self.scope_stack[self.frame_base..].iter().rev() {
            if let Some(value) = scope.get(name) {
                return Some(value);
            }
        }
        if self.frame_base > 0 {
            return self.scope_stack[0].get(name);
        }
        None
    }

    /// Defines a variable in the current (innermost) scope.
    ///
    /// Inserts the variable into the topmost scope, shadowing any outer
    /// binding of the same name. Used for `let` declarations and parameter
    /// binding.
    ///
    /// # Panics
    /// Panics if no scope exists, which indicates an internal error; the
    /// global scope is created at construction and never popped.
    pub fn define_local(&mut self, name: &str, value: Value) {
        self.scope_stack
            .last_mut()
            .expect("at least global")
            .insert(name.to_string(), value);
    }

    /// Assigns a value to the nearest visible scope containing the variable.
    ///
    /// Search proceeds from the innermost visible scope outward, then the
    /// global scope. If the variable is not found anywhere, it is created in
    /// the current innermost scope rather than the global one, so a binding
    /// made this way disappears when the enclosing scope exits.
    ///
    /// # Example
    /// ```
    /// use ggscript::interpreter::{evaluator::core::Interpreter, value::Value};
    ///
    /// let mut interpreter = Interpreter::new(std::io::sink());
    /// interpreter.define_local("y", Value::Integer(1));
    ///
    /// interpreter.assign_nearest("y", Value::Integer(5));
    ///
    /// assert_eq!(interpreter.get_variable("y"), Some(&Value::Integer(5)));
    /// ```
    pub fn assign_nearest(&mut self, name: &str, value: Value) {
        for scope in self.scope_stack[self.frame_base..].iter_mut().rev() {
            if scope.contains_key(name) {
                scope.insert(name.to_string(), value);
                return;
            }
        }
        if self.frame_base > 0 && self.scope_stack[0].contains_key(name) {
            self.scope_stack[0].insert(name.to_string(), value);
            return;
        }
        self.scope_stack
            .last_mut()
            .expect("at least global")
            .insert(name.to_string(), value);
    }
}
