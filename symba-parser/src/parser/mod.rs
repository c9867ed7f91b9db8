pub mod ast;
pub mod error;
pub mod token;

use error::{Error, kind};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use symba_error::ErrorKind;

/// The maximum number of nested prefix expressions (parentheses, function calls, vectors, unary
/// operators, and exponents) the parser will descend into before giving up.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The maximum depth of an expression tree the parser will build. Chains of operators, such as
/// `1 + 1 + ... + 1` or `3!!!`, deepen the tree without nesting and are checked against this.
pub const MAX_TREE_DEPTH: usize = 1 << 10;

/// A high-level parser for algebraic expressions. This is the type to use to parse a line of
/// input into an expression tree.
///
/// ```
/// use symba_parser::parser::{ast::Expr, Parser};
///
/// let expr = Parser::new("2x").try_parse_full::<Expr>().unwrap();
/// assert_eq!(expr.to_string(), "2 * x");
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The current nesting depth.
    depth: usize,

    /// The variable used so far, if any. An expression may only use one variable.
    variable: Option<&'source str>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            depth: 0,
            variable: None,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the kind of the current token without moving the cursor.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Moves the cursor past the current token. This function is a no-op if the cursor is at the
    /// end of the stream.
    pub fn advance(&mut self) {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        let token = self.current_token()
            .cloned()
            .ok_or_else(|| self.error(kind::UnexpectedEof))?;
        self.cursor += 1;
        Ok(token)
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.peek_kind() {
            None => Ok(value),
            Some(TokenKind::CloseParen) => Err(self.error(kind::UnclosedParenthesis { opening: false })),
            Some(_) => Err(self.error(kind::ExpectedEof)),
        }
    }

    /// Runs the given parsing function one nesting level deeper, failing instead if the maximum
    /// nesting depth would be exceeded.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(kind::MaxNestingDepth));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Fails if a subtree of the given depth would be deeper than [`MAX_TREE_DEPTH`].
    pub fn check_tree_depth(&self, depth: usize) -> Result<(), Error> {
        if depth > MAX_TREE_DEPTH {
            Err(self.error(kind::MaxNestingDepth))
        } else {
            Ok(())
        }
    }

    /// Records a use of the variable with the given symbol, failing if a different variable was
    /// used earlier in the expression.
    pub fn use_variable(&mut self, symbol: &'source str, span: Range<usize>) -> Result<(), Error> {
        match self.variable {
            Some(first) if first != symbol => Err(Error::new(vec![span], kind::MultipleVariables {
                first: first.to_owned(),
                second: symbol.to_owned(),
            })),
            _ => {
                self.variable = Some(symbol);
                Ok(())
            },
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `a op (b op c)`. For unary
    /// operations, this means `op op a` is evaluated as `op (op a)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of equality (`=`).
    Assign,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and modulo (`%`), which separate factors.
    Factor,

    /// Precedence of division (`/`).
    Div,

    /// Precedence of unary plus (`+`) and minus (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of factorial (`!`).
    Factorial,

    /// Precedence of literals, function calls, and vectors, which never need parentheses.
    Atom,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}
