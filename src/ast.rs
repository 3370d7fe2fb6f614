/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every expression form in the language: literals, variable
/// references, binary operations, assignments, and function calls. Each
/// variant owns its sub-expressions exclusively; the tree has no sharing and
/// no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal.
    Integer {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal.
    ///
    /// Escape sequences are not interpreted: a backslash inside the literal
    /// only keeps the following character from terminating it, and both
    /// characters are preserved in the value.
    Str {
        /// The literal text, without the surrounding quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An assignment to a plain variable name.
    ///
    /// Compound assignments are desugared by the parser, so `x += 1` arrives
    /// here as `x = x + 1`.
    Assign {
        /// Name of the target variable.
        name:  String,
        /// The value expression.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A function call expression (e.g. `fact(5)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use ggscript::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Integer { line, .. }
            | Self::Str { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Assign { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function definition.
///
/// A function binds an ordered list of parameter names to a body statement.
/// Definitions live in the interpreter's global function table; a later
/// definition with the same name replaces the earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in source order.
    pub params: Vec<String>,
    /// The body statement executed when the function is called.
    pub body:   Box<Stmt>,
    /// Line number in the source code.
    pub line:   usize,
}

/// An abstract syntax tree node representing a statement.
///
/// Statements are the units the parser hands to the evaluator, one per
/// `parse_statement` call.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A brace-delimited block. Executing it introduces a new scope.
    Block {
        /// Statements inside the block, in source order.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A `print` statement with one or more expressions, space-joined on
    /// output.
    Print {
        /// The expressions to print, in source order.
        exprs: Vec<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A variable declaration using `let`. Always binds in the innermost
    /// scope, shadowing any outer binding of the same name.
    Let {
        /// The name of the variable.
        name:  String,
        /// The initializer expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An `if` statement with an optional `else` branch.
    If {
        /// The condition expression; must evaluate to an integer.
        condition:   Expr,
        /// Statement executed when the condition is nonzero.
        then_branch: Box<Self>,
        /// Statement executed when the condition is zero.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A counting `for` loop. Init, condition, step, and body share one
    /// scope that lives for the whole loop.
    For {
        /// The init statement, run once before the first condition check.
        init:      Box<Self>,
        /// The condition expression, checked before every iteration.
        condition: Expr,
        /// The step expression, evaluated after each iteration's body.
        step:      Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An assignment used as a standalone statement.
    Assignment {
        /// Name of the target variable.
        name:  String,
        /// The value expression (already desugared for compound operators).
        value: Box<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A user-defined function declaration.
    Function(FunctionDef),
    /// A `return` statement carrying the function's result value.
    Return {
        /// The result expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A standalone expression evaluated for its side effects; only call
    /// expressions reach this form.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, or string concatenation when either operand is text (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}
