use std::io::Write;

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, ExecResult, Flow, Interpreter},
        value::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes a single statement.
    ///
    /// Handles blocks, `print`, declarations, conditionals, loops,
    /// assignments, function definitions, `return`, and expression
    /// statements. Statements may modify the interpreter state and write to
    /// the output stream.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// [`Flow::Normal`] when execution continues, or [`Flow::Return`] when a
    /// `return` statement is propagating toward its call site.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] describing the first evaluation failure.
    ///
    /// # Example
    /// ```
    /// use ggscript::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::tokenize,
    ///     parser::statement::parse_statement,
    /// };
    ///
    /// let tokens = tokenize("print 1 + 2;").unwrap();
    /// let statement = parse_statement(&mut tokens.iter().peekable()).unwrap();
    ///
    /// let mut out = Vec::new();
    /// let mut interpreter = Interpreter::new(&mut out);
    /// interpreter.exec(&statement).unwrap();
    ///
    /// assert_eq!(out, b"3\n");
    /// ```
    pub fn exec(&mut self, statement: &Stmt) -> ExecResult {
        match statement {
            Stmt::Block { statements, .. } => self.exec_block(statements),
            Stmt::Print { exprs, line } => self.exec_print(exprs, *line),
            Stmt::Let { name, value, .. } => {
                let value = self.eval(value)?;
                self.define_local(name, value);
                Ok(Flow::Normal)
            },
            Stmt::If { condition,
                       then_branch,
                       else_branch,
                       line, } => {
                self.exec_if(condition, then_branch, else_branch.as_deref(), *line)
            },
            Stmt::For { init,
                        condition,
                        step,
                        body,
                        .. } => self.exec_for(init, condition, step, body),
            Stmt::Assignment { name, value, .. } => {
                self.eval_assign(name, value)?;
                Ok(Flow::Normal)
            },
            Stmt::Function(def) => {
                self.functions.insert(def.name.clone(), def.clone());
                Ok(Flow::Normal)
            },
            Stmt::Return { expr, .. } => {
                let value = self.eval(expr)?;
                Ok(Flow::Return(value))
            },
            Stmt::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Flow::Normal)
            },
        }
    }

    /// Executes a block in a fresh scope.
    ///
    /// The scope is pushed before the first statement and popped on every
    /// exit path: normal completion, a propagating return signal, and an
    /// evaluation error.
    pub fn exec_block(&mut self, statements: &[Stmt]) -> ExecResult {
        self.push_scope();
        let outcome = self.run_statements(statements);
        self.pop_scope();
        outcome
    }

    /// Runs statements in order, stopping early on a return signal.
    fn run_statements(&mut self, statements: &[Stmt]) -> ExecResult {
        for statement in statements {
            if let Flow::Return(value) = self.exec(statement)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes an `if` statement.
    ///
    /// The condition must evaluate to an integer; any nonzero value selects
    /// the then-branch.
    fn exec_if(&mut self,
               condition: &Expr,
               then_branch: &Stmt,
               else_branch: Option<&Stmt>,
               line: usize)
               -> ExecResult {
        if self.eval_condition(condition, line)? != 0 {
            self.exec(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.exec(else_branch)
        } else {
            Ok(Flow::Normal)
        }
    }

    /// Executes a counting `for` loop.
    ///
    /// One scope covers the init statement, condition, step, and body for
    /// the whole loop; it is pushed before init runs and popped exactly once
    /// on every exit path. The body statement, if it is a block, still gets
    /// its own nested scope per iteration.
    fn exec_for(&mut self, init: &Stmt, condition: &Expr, step: &Expr, body: &Stmt) -> ExecResult {
        self.push_scope();
        let outcome = self.run_for(init, condition, step, body);
        self.pop_scope();
        outcome
    }

    /// The loop proper: init once, then check-body-step until the condition
    /// turns zero or a return signal passes through.
    fn run_for(&mut self, init: &Stmt, condition: &Expr, step: &Expr, body: &Stmt) -> ExecResult {
        if let Flow::Return(value) = self.exec(init)? {
            return Ok(Flow::Return(value));
        }

        while self.eval_condition(condition, condition.line_number())? != 0 {
            if let Flow::Return(value) = self.exec(body)? {
                return Ok(Flow::Return(value));
            }
            self.eval(step)?;
        }

        Ok(Flow::Normal)
    }

    /// Evaluates a condition expression down to its integer value.
    fn eval_condition(&mut self, condition: &Expr, line: usize) -> EvalResult<i64> {
        match self.eval(condition)? {
            Value::Integer(n) => Ok(n),
            Value::Text(_) => Err(RuntimeError::NonIntegerCondition { line }),
        }
    }

    /// Executes a `print` statement.
    ///
    /// Expressions are evaluated left to right and each rendering is written
    /// as soon as it is produced, separated by single spaces and terminated
    /// by one newline.
    fn exec_print(&mut self, exprs: &[Expr], line: usize) -> ExecResult {
        for (index, expr) in exprs.iter().enumerate() {
            let value = self.eval(expr)?;
            if index > 0 {
                write!(self.out, " ").map_err(|_| RuntimeError::Output { line })?;
            }
            write!(self.out, "{value}").map_err(|_| RuntimeError::Output { line })?;
        }
        writeln!(self.out).map_err(|_| RuntimeError::Output { line })?;

        Ok(Flow::Normal)
    }
}
