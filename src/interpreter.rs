/// The evaluator module executes AST nodes against the runtime environment.
///
/// The evaluator traverses the AST, executes statements, evaluates
/// expressions, manages the scope stack and function table, and writes
/// `print` output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes statements and evaluates expressions, performing all supported
///   operations.
/// - Handles variables, user-defined functions, and control flow, including
///   the non-local return signal.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// keywords, identifiers, literals, operators, and punctuation. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source line
///   numbers.
/// - Handles integer and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements, one statement per call, with a single token of lookahead.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Supports arithmetic, comparisons, function calls, assignments, and the
///   statement forms of the language.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution: integers and
/// text. It also provides display formatting and small type-inspection
/// helpers used in error reporting.
///
/// # Responsibilities
/// - Defines the `Value` enum and its two variants.
/// - Implements display formatting for `print`.
pub mod value;
