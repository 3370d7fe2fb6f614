use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_comparison,
            utils::{expect_token, parse_comma_separated},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assign`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_assign(tokens)
}

/// Parses the assignment level.
///
/// Supported forms, all right-associative:
///
/// - `<identifier> = <expression>`
/// - `<identifier> += <expression>`
/// - `<identifier> -= <expression>`
/// - `<identifier> *= <expression>`
/// - `<identifier> /= <expression>`
///
/// The left-hand side must have parsed as a bare variable reference.
/// Compound operators desugar into a plain assignment whose value is the
/// matching binary operation, so `x += 2` becomes `x = x + 2`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// An `Expr::Assign` node, or the comparison-level expression unchanged when
/// no assignment operator follows it.
///
/// # Errors
/// Returns `ParseError::InvalidAssignmentTarget` if an assignment operator
/// follows anything but a variable reference, and propagates errors from
/// sub-expression parsing.
pub fn parse_assign<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_comparison(tokens)?;

    let (desugared, line) = match tokens.peek() {
        Some((Token::Equals, line)) => (None, *line),
        Some((Token::PlusAssign, line)) => (Some(BinaryOperator::Add), *line),
        Some((Token::MinusAssign, line)) => (Some(BinaryOperator::Sub), *line),
        Some((Token::MulAssign, line)) => (Some(BinaryOperator::Mul), *line),
        Some((Token::DivAssign, line)) => (Some(BinaryOperator::Div), *line),
        _ => return Ok(left),
    };

    let Expr::Variable { name, .. } = left else {
        return Err(ParseError::InvalidAssignmentTarget { line });
    };
    tokens.next();

    let right = parse_assign(tokens)?;
    let value = match desugared {
        Some(op) => Expr::BinaryOp { left: Box::new(Expr::Variable { name: name.clone(),
                                                                     line }),
                                     op,
                                     right: Box::new(right),
                                     line },
        None => right,
    };

    Ok(Expr::Assign { name,
                      value: Box::new(value),
                      line })
}

/// Parses a primary expression.
///
/// A primary is one of:
/// - an integer literal,
/// - a string literal,
/// - a variable reference,
/// - a call `identifier '(' args ')'` with zero or more comma-separated
///   arguments,
/// - a parenthesized sub-expression.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a `ParseError` if the next token cannot start a primary or the
/// input ends unexpectedly.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(value), line)) => Ok(Expr::Integer { value: *value,
                                                                  line:  *line, }),

        Some((Token::Str(value), line)) => Ok(Expr::Str { value: value.clone(),
                                                          line:  *line, }),

        Some((Token::Identifier(name), line)) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                Ok(Expr::Call { name: name.clone(),
                                arguments,
                                line: *line })
            } else {
                Ok(Expr::Variable { name: name.clone(),
                                    line: *line, })
            }
        },

        Some((Token::LParen, line)) => {
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::RParen, ")", *line)?;
            Ok(expr)
        },

        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                              line:  *line, })
        },

        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
