use std::{collections::HashMap, io::Write};

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary, value::Value},
};

/// Result type used by expression evaluation.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Result type used by statement execution.
///
/// Successful execution yields a [`Flow`] describing how control leaves the
/// statement.
pub type ExecResult = Result<Flow, RuntimeError>;

/// Describes how control leaves a statement.
///
/// A `return` statement does not unwind; it produces `Flow::Return`, which
/// every enclosing block and loop passes upward (popping its scope on the
/// way) until a function call absorbs it. The run loop reports a signal that
/// escapes every call as a return outside a function.
#[derive(Debug, PartialEq)]
pub enum Flow {
    /// The statement completed and execution continues normally.
    Normal,
    /// A `return` statement is transferring this value to the nearest
    /// enclosing call.
    Return(Value),
}

/// Stores the runtime state of a script.
///
/// This struct holds the scope stack, the table of user-defined functions,
/// and the output stream `print` writes to. One `Interpreter` is created per
/// run and dropped afterwards, so independent runs cannot interfere.
///
/// ## Usage
///
/// `Interpreter` is created once and reused for executing statements. All
/// execution methods (like [`exec`](Self::exec) and [`eval`](Self::eval))
/// access this state to resolve variables and functions.
pub struct Interpreter<W> {
    /// The stack of lexical scopes, innermost last. The global scope sits at
    /// the bottom and is never popped.
    pub scope_stack:   Vec<HashMap<String, Value>>,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Populated by `func` statements; a redefinition silently replaces the
    /// prior entry.
    pub functions:     HashMap<String, FunctionDef>,
    /// Index of the first scope belonging to the innermost function call in
    /// progress. Variable lookup sees only `scope_stack[frame_base..]` plus
    /// the global scope, so a function body cannot observe caller-local
    /// variables.
    pub(crate) frame_base: usize,
    /// The append-only output stream written by `print`.
    pub(crate) out:        W,
}

impl<W: Write> Interpreter<W> {
    /// Creates a new interpreter with an empty global scope, no user-defined
    /// functions, and the given output stream.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { scope_stack: vec![HashMap::new()],
               functions: HashMap::new(),
               frame_base: 0,
               out }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// variables, binary operations, assignments, and function calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] for undefined variables or functions,
    /// operand type mismatches, division by zero, or arithmetic overflow.
    ///
    /// # Example
    /// ```
    /// use ggscript::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new(std::io::sink());
    /// let expr = Expr::Integer { value: 10,
    ///                            line:  1, };
    ///
    /// assert_eq!(interpreter.eval(&expr).unwrap(), Value::Integer(10));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Integer { value, .. } => Ok(Value::Integer(*value)),
            Expr::Str { value, .. } => Ok(Value::Text(value.clone())),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left_value = self.eval(left)?;
                let right_value = self.eval(right)?;
                eval_binary(*op, &left_value, &right_value, *line)
            },
            Expr::Assign { name, value, .. } => self.eval_assign(name, value),
            Expr::Call { name,
                         arguments,
                         line, } => self.eval_call(name, arguments, *line),
        }
    }

    /// Looks up a variable and returns a copy of its value.
    ///
    /// Lookup walks the visible scopes from innermost to outermost; see
    /// [`get_variable`](Self::get_variable) for what is visible inside a
    /// function body.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if no visible scope defines
    /// the name.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Evaluates an assignment and returns the assigned value.
    ///
    /// The value expression is evaluated first; the nearest visible binding
    /// of the name is then updated in place. If no visible scope holds the
    /// name, the binding is created in the innermost scope, which is how an
    /// unbound name comes to life on first assignment.
    ///
    /// # Errors
    /// Propagates errors from evaluating the value expression.
    pub fn eval_assign(&mut self, name: &str, value: &Expr) -> EvalResult<Value> {
        let value = self.eval(value)?;
        self.assign_nearest(name, value.clone());
        Ok(value)
    }
}
