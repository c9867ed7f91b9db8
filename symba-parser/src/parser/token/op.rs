//! Structs to help parse binary and unary operators.

use crate::{
    parser::{
        error::{kind, Error},
        Associativity,
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::fmt;

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOpKind {
    Plus,
    Minus,
}

impl UnaryOpKind {
    /// Returns the precedence of the unary operation.
    pub fn precedence(self) -> Precedence {
        Precedence::Neg
    }

    /// Returns the associativity of the unary operation.
    pub fn associativity(self) -> Associativity {
        Associativity::Right
    }

    /// Returns the symbol used to write this operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

impl fmt::Display for UnaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Parse for UnaryOpKind {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Add => Ok(Self::Plus),
            TokenKind::Sub => Ok(Self::Minus),
            _ => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Add, TokenKind::Sub],
                found: token.kind,
            })),
        }
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    ///
    /// Division binds tighter than multiplication, so `a * b / c` is `a * (b / c)`.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Mod => Precedence::Factor,
            Self::Div => Precedence::Div,
            Self::Exp => Precedence::Exp,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod => Associativity::Left,
        }
    }

    /// Returns the symbol used to write this operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Exp => "^",
        }
    }

    /// Returns the name of the function this operation applies, such as `pow` for `^`.
    pub fn func_tag(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Exp => "pow",
        }
    }

    /// Returns the operation that undoes this one, if there is one that can be expressed as a
    /// single binary operation.
    pub fn inverse(self) -> Option<Self> {
        match self {
            Self::Add => Some(Self::Sub),
            Self::Sub => Some(Self::Add),
            Self::Mul => Some(Self::Div),
            Self::Div => Some(Self::Mul),
            Self::Mod | Self::Exp => None,
        }
    }

    /// Returns the binary operation matching the given token kind, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Mod => Some(Self::Mod),
            TokenKind::Exp => Some(Self::Exp),
            _ => None,
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Parse for BinOpKind {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        Self::from_token(token.kind).ok_or_else(|| Error::new(vec![token.span], kind::UnexpectedToken {
            expected: &[
                TokenKind::Add,
                TokenKind::Sub,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::Mod,
                TokenKind::Exp,
            ],
            found: token.kind,
        }))
    }
}
