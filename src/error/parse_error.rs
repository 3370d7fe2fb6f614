#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that cannot start or continue the current construct.
    UnexpectedToken {
        /// A description of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but not found.
    ExpectedToken {
        /// The source spelling of the expected token.
        expected: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The left-hand side of an assignment was not a plain variable name.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier-led statement reduced to something other than an
    /// assignment or a call.
    BareExpressionStatement {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedToken { expected, line } => {
                write!(f, "Error on line {line}: Expected '{expected}'.")
            },

            Self::InvalidAssignmentTarget { line } => write!(f,
                                                             "Error on line {line}: Left of assignment must be a variable."),

            Self::BareExpressionStatement { line } => write!(f,
                                                             "Error on line {line}: Only assignment and call expressions may be used as statements."),
        }
    }
}

impl std::error::Error for ParseError {}
