#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that no visible scope defines.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that was never defined.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand had a type the operator does not accept.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `if` or `for` condition evaluated to text instead of an integer.
    NonIntegerCondition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output stream failed.
    Output {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { line } => {
                write!(f, "Error on line {line}: Argument count mismatch.")
            },

            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::NonIntegerCondition { line } => write!(f,
                                                         "Error on line {line}: Condition must evaluate to an integer."),

            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::Output { line } => {
                write!(f, "Error on line {line}: Failed to write output.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}

#[derive(Debug)]
/// Raised when a `return` signal escapes every active function call.
///
/// This is deliberately not a [`RuntimeError`] variant: the run loop reports
/// a top-level `return` as its own condition so callers can tell it apart
/// from ordinary evaluation failures.
pub struct ReturnOutsideFunction;

impl std::fmt::Display for ReturnOutsideFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: Return statement used outside of a function.")
    }
}

impl std::error::Error for ReturnOutsideFunction {}
