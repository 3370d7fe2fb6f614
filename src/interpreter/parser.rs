/// Core expression parsing.
///
/// Contains the expression entry point, the assignment level, and primary
/// expressions (literals, variables, calls, parenthesized expressions).
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence-climbing levels for comparison, additive, and
/// multiplicative operators.
pub mod binary;

/// Statement parsing.
///
/// Dispatches on the leading token and builds one statement per call,
/// covering `print`, `let`, `if`, `for`, `func`, `return`, blocks, and
/// assignment/call statements.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides shared helpers for identifiers, comma-separated lists, and
/// required-token matching.
pub mod utils;
