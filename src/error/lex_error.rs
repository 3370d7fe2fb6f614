#[derive(Debug)]
/// Represents all errors that can occur while scanning source text.
pub enum LexicalError {
    /// A string literal was still open when the input ended.
    UnterminatedString {
        /// The source line where the literal starts.
        line: usize,
    },
    /// Encountered a character that starts no token.
    UnknownCharacter {
        /// The offending character.
        found: char,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },

            Self::UnknownCharacter { found, line } => {
                write!(f, "Error on line {line}: Unknown character '{found}'.")
            },
        }
    }
}

impl std::error::Error for LexicalError {}
