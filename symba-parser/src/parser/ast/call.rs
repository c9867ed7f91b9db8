use crate::{
    parser::{
        ast::{binary::Binary, expr::{fmt_operand, Expr}, tags::Tags},
        error::{kind, Error},
        token::{CloseParen, CloseSquare, Comma, OpenParen, OpenSquare},
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::fmt;

/// The function applied by a [`Call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    Sqrt,
    Abs,
    Sin,
    Cos,
    Tan,
    Ln,

    /// Builds a vector out of its arguments, written `[a, b, c]`.
    Vec,

    /// The postfix factorial operator, written `n!`.
    Factorial,
}

impl Func {
    /// Returns the name of the function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Vec => "vec",
            Self::Factorial => "factorial",
        }
    }

    /// Returns the function named by the given token kind, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Sqrt => Some(Self::Sqrt),
            TokenKind::Abs => Some(Self::Abs),
            TokenKind::Sin => Some(Self::Sin),
            TokenKind::Cos => Some(Self::Cos),
            TokenKind::Tan => Some(Self::Tan),
            TokenKind::Ln => Some(Self::Ln),
            _ => None,
        }
    }
}

/// A function application, such as `sqrt(x)`, a vector, such as `[1, 2]`, or a factorial, such
/// as `3!`.
///
/// Every function other than [`Func::Vec`] is expected to have exactly one argument.
#[derive(Debug, Clone)]
pub struct Call {
    /// The function being applied.
    pub func: Func,

    /// The arguments to the function.
    pub args: Vec<Expr>,

    /// The atoms found in the arguments, as of the last tagging pass.
    pub tags: Tags,
}

impl Call {
    /// Creates a new, untagged call.
    pub fn new(func: Func, args: Vec<Expr>) -> Self {
        Self { func, args, tags: Tags::empty() }
    }

    /// Parses a named function applied to one parenthesized argument, as in `\sqrt(x + 1)`.
    pub(crate) fn parse_function(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let func = Func::from_token(token.kind).ok_or_else(|| {
            Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                expected: &[
                    TokenKind::Sqrt,
                    TokenKind::Abs,
                    TokenKind::Sin,
                    TokenKind::Cos,
                    TokenKind::Tan,
                    TokenKind::Ln,
                ],
                found: token.kind,
            })
        })?;

        let open = input.try_parse::<OpenParen>()?;
        let arg = Binary::parse_additive(input)?;
        input.try_parse::<CloseParen>()
            .map_err(|_| Error::new(vec![open.span], kind::UnclosedParenthesis { opening: true }))?;

        Ok(Self::new(func, vec![arg]))
    }

    /// Parses a vector literal, as in `[1, 2, x]`.
    pub(crate) fn parse_vector(input: &mut Parser) -> Result<Self, Error> {
        let open = input.try_parse::<OpenSquare>()?;
        if input.peek_kind() == Some(TokenKind::CloseSquare) {
            let span = open.span.start..input.span().end;
            return Err(Error::new(vec![span], kind::EmptyVector));
        }

        let mut args = vec![Binary::parse_additive(input)?];
        while input.try_parse::<Comma>().is_ok() {
            args.push(Binary::parse_additive(input)?);
        }

        input.try_parse::<CloseSquare>()
            .map_err(|_| Error::new(vec![open.span], kind::UnclosedBracket))?;

        Ok(Self::new(Func::Vec, args))
    }

    /// Wraps the expression in a factorial for every `!` that follows it.
    pub(crate) fn parse_factorials(input: &mut Parser, mut expr: Expr) -> Result<Expr, Error> {
        let mut depth = expr.depth();
        while input.peek_kind() == Some(TokenKind::Factorial) {
            depth += 1;
            input.check_tree_depth(depth)?;
            input.advance();
            expr = Expr::call(Func::Factorial, vec![expr]);
        }
        Ok(expr)
    }
}

impl PartialEq for Call {
    fn eq(&self, other: &Self) -> bool {
        self.func == other.func && self.args == other.args
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.func {
            Func::Vec => {
                write!(f, "[")?;
                for (i, arg) in self.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, "]")
            },
            Func::Factorial => {
                for arg in &self.args {
                    fmt_operand(f, arg, arg.precedence() < Precedence::Factorial)?;
                }
                write!(f, "!")
            },
            func => {
                write!(f, "{}(", func.name())?;
                for (i, arg) in self.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            },
        }
    }
}
