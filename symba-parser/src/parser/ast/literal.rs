use crate::{
    parser::{
        ast::tags::Tags,
        error::{kind, Error},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::fmt;

/// An irrational constant that is kept symbolic until evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Irrational {
    /// Euler's number, written `e`.
    E,

    /// The ratio of a circle's circumference to its diameter, written `pi` or `\pi`.
    Pi,
}

impl Irrational {
    /// Returns the name used to print this constant.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::E => "e",
            Self::Pi => "pi",
        }
    }

    /// Returns the value of this constant.
    pub fn value(self) -> f64 {
        match self {
            Self::E => std::f64::consts::E,
            Self::Pi => std::f64::consts::PI,
        }
    }

    /// Returns the tag this constant contributes to its ancestors.
    pub fn tags(self) -> Tags {
        match self {
            Self::E => Tags::E,
            Self::Pi => Tags::PI,
        }
    }
}

/// A leaf of the expression tree.
///
/// Two numbers compare equal if they are equal or if both are NaN, so that a tree containing NaN
/// is still equal to a copy of itself.
#[derive(Debug, Clone)]
pub enum Literal {
    /// A numeric literal, such as `2` or `0.5`.
    Number(f64),

    /// The free variable, such as `x`.
    Variable(String),

    /// An irrational constant, `e` or `pi`.
    Irrational(Irrational),
}

impl Literal {
    /// Returns the implicit tag of this leaf.
    pub fn tags(&self) -> Tags {
        match self {
            Self::Number(_) => Tags::empty(),
            Self::Variable(_) => Tags::VARIABLE,
            Self::Irrational(irrational) => irrational.tags(),
        }
    }

    /// Returns true if this leaf is a symbolic atom, meaning the variable or a constant.
    pub fn is_atom(&self) -> bool {
        matches!(self, Self::Variable(_) | Self::Irrational(_))
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Variable(a), Self::Variable(b)) => a == b,
            (Self::Irrational(a), Self::Irrational(b)) => a == b,
            _ => false,
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Number => token.lexeme
                .parse::<f64>()
                .map(Self::Number)
                .map_err(|_| Error::new(vec![token.span.clone()], kind::InvalidNumber {
                    lexeme: token.lexeme.to_owned(),
                })),
            TokenKind::E => Ok(Self::Irrational(Irrational::E)),
            TokenKind::Pi => Ok(Self::Irrational(Irrational::Pi)),
            TokenKind::Letter => {
                input.use_variable(token.lexeme, token.span)?;
                Ok(Self::Variable(token.lexeme.to_owned()))
            },
            _ => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Number, TokenKind::Letter, TokenKind::E, TokenKind::Pi],
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            // avoid printing `-0`
            Self::Number(value) if *value == 0.0 => write!(f, "0"),
            Self::Number(value) => write!(f, "{}", value),
            Self::Variable(symbol) => write!(f, "{}", symbol),
            Self::Irrational(irrational) => write!(f, "{}", irrational.symbol()),
        }
    }
}
