//! # ggscript
//!
//! ggscript is an interpreter for a small imperative scripting language with
//! integers, strings, variables, conditionals, counting loops, and
//! user-defined functions. It executes a source text end-to-end: read
//! characters, recognize tokens, build a syntax tree, and evaluate that tree
//! against a mutable environment, printing values to a text stream as a side
//! effect.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::ReturnOutsideFunction,
    interpreter::{
        evaluator::core::{Flow, Interpreter},
        lexer::tokenize,
        parser::statement::parse_statement,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Keeps the tree strictly hierarchical: every node owns its children.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while running a script.
/// It standardizes error reporting and carries detailed information about
/// failures, including error kinds, descriptions, and source locations.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Keeps the top-level "return outside a function" condition distinct from
///   ordinary runtime errors.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and error handling to provide a complete runtime for
/// script execution. It exposes the public API for interpreting programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and executing user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a whole script against a fresh interpreter.
///
/// The source is tokenized up front; statements are then parsed and executed
/// one at a time until the token stream is exhausted. All `print` output
/// goes to `out`.
///
/// # Errors
/// Returns the first error raised by any phase: a lexical error, a parse
/// error, a runtime error, or the distinct "return outside a function"
/// condition when a `return` statement executes with no call in progress.
///
/// # Examples
/// ```
/// use ggscript::run_program;
///
/// let mut out = Vec::new();
/// run_program("let x = 2 + 3; print x;", &mut out).unwrap();
/// assert_eq!(out, b"5\n");
///
/// // An intentional error: 'y' is never defined.
/// let mut out = Vec::new();
/// let res = run_program("print y;", &mut out);
/// assert!(res.is_err());
/// ```
pub fn run_program<W: Write>(source: &str,
                             out: &mut W)
                             -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let mut interpreter = Interpreter::new(out);

    while iter.peek().is_some() {
        let statement = parse_statement(&mut iter)?;
        match interpreter.exec(&statement)? {
            Flow::Normal => {},
            Flow::Return(_) => return Err(Box::new(ReturnOutsideFunction)),
        }
    }

    Ok(())
}
