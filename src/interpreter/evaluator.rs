/// Core evaluation state and expression dispatch.
///
/// Defines the interpreter state (scope stack, function table, output
/// stream), the control-flow signal for `return`, and the expression
/// evaluation entry point.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the semantics of all binary operations: addition and string
/// concatenation, integer arithmetic, and comparisons.
pub mod binary;

/// Statement execution.
///
/// Implements logic for executing statements, including blocks, conditionals,
/// loops, assignments, declarations, and `print`.
pub mod statement;

/// Function call evaluation.
///
/// Handles the user-defined function call protocol: lookup, arity checking,
/// argument evaluation, parameter binding, and the default return value.
pub mod function;

/// Scope management.
///
/// Provides the scope-stack helpers: pushing and popping scopes, variable
/// lookup, local definition, and nearest-scope assignment.
pub mod scope;
