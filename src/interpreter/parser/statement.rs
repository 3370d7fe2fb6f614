use std::iter::Peekable;

use crate::{
    ast::{Expr, FunctionDef, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `print` statement,
/// - a `let` declaration,
/// - an `if` statement with optional `else`,
/// - a counting `for` loop,
/// - a function definition,
/// - a `return` statement,
/// - a brace-delimited block,
/// - an identifier-led assignment or call statement,
/// - a lone `;`, tolerated as an empty statement.
///
/// Dispatch looks at the current token only; one token of lookahead is all
/// the grammar needs.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs. The caller
///   is expected to check for end of input before calling; reaching it here
///   is an error.
///
/// # Returns
/// A parsed [`Stmt`] node.
///
/// # Errors
/// Returns a `ParseError` when the current token cannot start a statement or
/// a required token of the chosen form is missing.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Print, line)) => parse_print(tokens, *line),
        Some((Token::Let, line)) => parse_let(tokens, *line),
        Some((Token::If, line)) => parse_if(tokens, *line),
        Some((Token::For, line)) => parse_for(tokens, *line),
        Some((Token::Func, line)) => parse_function_definition(tokens, *line),
        Some((Token::Return, line)) => parse_return(tokens, *line),
        Some((Token::LBrace, line)) => parse_block(tokens, *line),
        Some((Token::Identifier(_), line)) => parse_assignment_or_call(tokens, *line),

        Some((Token::Semicolon, line)) => {
            let line = *line;
            tokens.next();
            Ok(Stmt::Block { statements: Vec::new(),
                             line })
        },

        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),

        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses every remaining statement in the token stream.
///
/// Statements are collected until the iterator is exhausted. The run loop
/// itself parses one statement at a time; this helper exists for callers
/// that want the whole program as a tree before executing anything.
///
/// # Errors
/// Propagates the first `ParseError` encountered.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}

/// Parses a `print` statement.
///
/// Grammar: `print := "print" expression ("," expression)* ";"`
fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let mut exprs = vec![parse_expression(tokens)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        exprs.push(parse_expression(tokens)?);
    }
    expect_token(tokens, &Token::Semicolon, ";", line)?;

    Ok(Stmt::Print { exprs, line })
}

/// Parses a variable declaration.
///
/// Grammar: `let := "let" identifier "=" expression ";"`
fn parse_let<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Equals, "=", line)?;
    let value = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, ";", line)?;

    Ok(Stmt::Let { name, value, line })
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Grammar: `if := "if" "(" expression ")" statement ("else" statement)?`
///
/// The `else` is consumed greedily right after the then-statement, so a
/// dangling `else` binds to the nearest unmatched `if`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    expect_token(tokens, &Token::LParen, "(", line)?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, ")", line)?;

    let then_branch = Box::new(parse_statement(tokens)?);

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Stmt::If { condition,
                  then_branch,
                  else_branch,
                  line })
}

/// Parses a counting `for` loop.
///
/// Grammar: `for := "for" "(" statement expression ";" expression ")" statement`
///
/// The init clause is a full statement and so already carries its own
/// trailing `;`; the middle clause is a bare condition expression followed
/// by an explicit `;`; there is no third `;` before the closing parenthesis.
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    expect_token(tokens, &Token::LParen, "(", line)?;
    let init = Box::new(parse_statement(tokens)?);
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, ";", line)?;
    let step = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, ")", line)?;
    let body = Box::new(parse_statement(tokens)?);

    Ok(Stmt::For { init,
                   condition,
                   step,
                   body,
                   line })
}

/// Parses a function definition.
///
/// Grammar: `func := "func" identifier "(" (identifier ("," identifier)*)? ")" statement`
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::LParen, "(", line)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    let body = Box::new(parse_statement(tokens)?);

    Ok(Stmt::Function(FunctionDef { name,
                                    params,
                                    body,
                                    line }))
}

/// Parses a `return` statement.
///
/// Grammar: `return := "return" expression ";"`
fn parse_return<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, ";", line)?;

    Ok(Stmt::Return { expr, line })
}

/// Parses a block statement delimited by braces.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Errors
/// Returns `ParseError::ExpectedToken` when the input ends before the
/// closing brace.
fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::ExpectedToken { expected: "}",
                                                           line }),
        }
    }

    Ok(Stmt::Block { statements, line })
}

/// Parses an identifier-led statement.
///
/// The expression grammar does the heavy lifting: a full expression is
/// parsed, and the result must reduce to either an assignment (plain or
/// compound) or a call, each terminated by `;`. Any other identifier-led
/// expression is rejected; a bare variable reference is not a statement.
fn parse_assignment_or_call<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;

    match expr {
        Expr::Assign { name,
                       value,
                       line: assign_line, } => {
            expect_token(tokens, &Token::Semicolon, ";", assign_line)?;
            Ok(Stmt::Assignment { name,
                                  value,
                                  line: assign_line })
        },

        expr @ Expr::Call { .. } => {
            expect_token(tokens, &Token::Semicolon, ";", expr.line_number())?;
            Ok(Stmt::Expression { expr, line })
        },

        _ => Err(ParseError::BareExpressionStatement { line }),
    }
}
