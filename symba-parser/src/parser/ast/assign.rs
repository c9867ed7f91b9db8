use crate::{
    parser::{
        ast::{binary::Binary, expr::Expr, tags::{Tags, VariableSide}},
        error::Error,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::fmt;

/// An equality between two expressions, such as `2x + 1 = 5`.
///
/// This states that both sides are equal; it does not store anything.
#[derive(Debug, Clone)]
pub struct Assign {
    /// The left-hand side of the equality.
    pub lhs: Box<Expr>,

    /// The right-hand side of the equality.
    pub rhs: Box<Expr>,

    /// The atoms found on either side, as of the last tagging pass.
    pub tags: Tags,

    /// The side that contains the variable, as of the last tagging pass.
    pub side: VariableSide,
}

impl Assign {
    /// Creates a new, untagged equality.
    pub fn new(lhs: Expr, rhs: Expr) -> Self {
        Self {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            tags: Tags::empty(),
            side: VariableSide::default(),
        }
    }

    /// Parses `assign := additive ('=' additive)?`, returning the additive expression alone if
    /// there is no `=`.
    pub(crate) fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let lhs = Binary::parse_additive(input)?;
        if input.peek_kind() != Some(TokenKind::Assign) {
            return Ok(lhs);
        }

        input.next_token()?;
        let rhs = Binary::parse_additive(input)?;
        Ok(Expr::Assign(Self::new(lhs, rhs)))
    }
}

impl PartialEq for Assign {
    fn eq(&self, other: &Self) -> bool {
        self.lhs == other.lhs && self.rhs == other.rhs
    }
}

impl fmt::Display for Assign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}
