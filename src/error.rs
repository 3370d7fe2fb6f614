/// Lexical errors.
///
/// Defines the error types that can occur while scanning source text into
/// tokens, such as an unterminated string literal or a character outside the
/// language's alphabet.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree
/// from the token stream. Parse errors include unexpected or missing tokens,
/// invalid assignment targets, and illegal bare-expression statements.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined variables or functions, type mismatches, and division by zero,
/// plus the distinguished condition for a `return` that escapes every
/// function call.
pub mod runtime_error;

pub use lex_error::LexicalError;
pub use parse_error::ParseError;
pub use runtime_error::{ReturnOutsideFunction, RuntimeError};
