use crate::parser::{
    ast::{binary::Binary, expr::{fmt_operand, Expr}, tags::Tags},
    error::Error,
    token::op::UnaryOpKind,
    Parse,
    Parser,
};
use std::fmt;

/// A unary operation, such as `-x`. The operand of a unary operator is the whole implicit product
/// that follows it, so `-2x` negates `2x`.
#[derive(Debug, Clone)]
pub struct Unary {
    /// The operator of the unary expression.
    pub op: UnaryOpKind,

    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The atoms found in the operand, as of the last tagging pass.
    pub tags: Tags,
}

impl Unary {
    /// Creates a new, untagged unary expression.
    pub fn new(op: UnaryOpKind, operand: Expr) -> Self {
        Self { op, operand: Box::new(operand), tags: Tags::empty() }
    }
}

impl Parse for Unary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let op = UnaryOpKind::parse(input)?;
        let operand = input.nested(Binary::parse_implicit)?;
        Ok(Self::new(op, operand))
    }
}

impl PartialEq for Unary {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.operand == other.operand
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.op)?;
        fmt_operand(f, &self.operand, self.operand.precedence() <= self.op.precedence())
    }
}
