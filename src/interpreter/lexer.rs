use logos::Logos;

use crate::error::LexicalError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `let`
    #[token("let")]
    Let,
    /// `print`
    #[token("print")]
    Print,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `for`
    #[token("for")]
    For,
    /// `func`
    #[token("func")]
    Func,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; variable or function names such as `x` or `fact`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`. No sign, no decimal point.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello"`.
    ///
    /// A backslash keeps the next character from closing the literal but is
    /// not stripped: the value of `"a\nb"` is the four characters `a\nb`.
    #[regex(r#""([^"\\]|\\[\s\S])*""#, trim_quotes)]
    Str(String),
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
}

/// Maps byte offsets in the source text to 1-based line numbers.
///
/// The newline positions are collected once up front; every token's line is
/// then answered with a binary search over them. Line numbers are used only
/// for diagnostics, never for parsing decisions.
pub struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    /// Scans the source once and records the byte offset of every newline.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { newlines: source.bytes()
                               .enumerate()
                               .filter(|&(_, byte)| byte == b'\n')
                               .map(|(offset, _)| offset)
                               .collect(), }
    }

    /// Returns the 1-based line containing the given byte offset.
    ///
    /// # Example
    /// ```
    /// use ggscript::interpreter::lexer::LineIndex;
    ///
    /// let index = LineIndex::new("ab\ncd\nef");
    ///
    /// assert_eq!(index.line_at(0), 1);
    /// assert_eq!(index.line_at(4), 2);
    /// assert_eq!(index.line_at(7), 3);
    /// ```
    #[must_use]
    pub fn line_at(&self, offset: usize) -> usize {
        self.newlines.partition_point(|&newline| newline < offset) + 1
    }
}

/// Scans the whole source text into a list of tokens with line numbers.
///
/// Each token is paired with the 1-based line of its first character. The
/// end of input is represented by the end of the returned list, so a parser
/// driving a [`Peekable`](std::iter::Peekable) over it observes exhaustion
/// instead of a sentinel token.
///
/// # Errors
/// Returns a [`LexicalError`] for an unterminated string literal or a
/// character that starts no token. Lexing stops at the first error.
///
/// # Example
/// ```
/// use ggscript::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let x = 1;").unwrap();
///
/// assert_eq!(tokens[0], (Token::Let, 1));
/// assert_eq!(tokens[1], (Token::Identifier("x".to_string()), 1));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexicalError> {
    let index = LineIndex::new(source);
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let line = index.line_at(lexer.span().start);
        match token {
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => {
                let slice = lexer.slice();
                if slice.starts_with('"') {
                    return Err(LexicalError::UnterminatedString { line });
                }
                return Err(LexicalError::UnknownCharacter { found: slice.chars()
                                                                        .next()
                                                                        .unwrap_or('\0'),
                                                            line });
            },
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the digit run is too large for an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal slice.
///
/// Backslashes inside the literal are preserved verbatim.
fn trim_quotes(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
