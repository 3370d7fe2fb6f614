use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a call to a user-defined function.
    ///
    /// The call protocol, in order:
    /// 1. Look up the function in the global table.
    /// 2. Check the argument count against the parameter count exactly; there
    ///    are no default values and no varargs.
    /// 3. Evaluate all argument expressions left to right, before any scope
    ///    change, so argument side effects happen in the caller's scopes.
    /// 4. Mark the current stack height as the new frame base, push one scope,
    ///    and bind each parameter to its evaluated argument.
    /// 5. Execute the body, then pop the scope and restore the frame base
    ///    unconditionally.
    ///
    /// A return signal produced anywhere inside the body, however deeply
    /// nested, is absorbed here and becomes the call's value. A body that
    /// completes without returning yields the integer 0.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions, in source order.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function's result value.
    ///
    /// # Errors
    /// - `UnknownFunction` if the name is not in the table.
    /// - `ArgumentCountMismatch` if the arity differs.
    /// - Any error raised while evaluating arguments or the body.
    ///
    /// # Example
    /// ```
    /// use ggscript::run_program;
    ///
    /// let mut out = Vec::new();
    /// run_program("func double(n) { return n * 2; } print double(21);",
    ///             &mut out).unwrap();
    ///
    /// assert_eq!(out, b"42\n");
    /// ```
    pub fn eval_call(&mut self, name: &str, arguments: &[Expr], line: usize) -> EvalResult<Value> {
        let function = self.functions
                           .get(name)
                           .cloned()
                           .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                          line })?;

        if arguments.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { line });
        }

        let mut arg_values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            arg_values.push(self.eval(argument)?);
        }

        let saved_base = self.frame_base;
        self.frame_base = self.scope_stack.len();
        self.push_scope();
        for (param, value) in function.params.iter().zip(arg_values) {
            self.define_local(param, value);
        }

        let outcome = self.exec(&function.body);

        self.pop_scope();
        self.frame_base = saved_base;

        match outcome? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Integer(0)),
        }
    }
}
