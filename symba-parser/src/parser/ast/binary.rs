use crate::{
    parser::{
        ast::{expr::{fmt_operand, Expr}, literal::Literal, tags::Tags},
        error::Error,
        token::op::BinOpKind,
        Associativity,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::fmt;

/// A binary operation, such as `1 + 2`. Implicit multiplication, as in `2x`, is also represented
/// as a binary multiplication.
#[derive(Debug, Clone)]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOpKind,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The atoms found in both operands, as of the last tagging pass.
    pub tags: Tags,
}

impl Binary {
    /// Creates a new, untagged binary expression.
    pub fn new(lhs: Expr, op: BinOpKind, rhs: Expr) -> Self {
        Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            tags: Tags::empty(),
        }
    }

    /// Parses `additive := multiplicative (('+' | '-') multiplicative)*`.
    pub(crate) fn parse_additive(input: &mut Parser) -> Result<Expr, Error> {
        Self::parse_left_assoc(input, &[BinOpKind::Add, BinOpKind::Sub], Self::parse_multiplicative)
    }

    /// Parses `multiplicative := divisive (('*' | '%') divisive)*`.
    fn parse_multiplicative(input: &mut Parser) -> Result<Expr, Error> {
        Self::parse_left_assoc(input, &[BinOpKind::Mul, BinOpKind::Mod], Self::parse_divisive)
    }

    /// Parses `divisive := implicit ('/' implicit)*`.
    fn parse_divisive(input: &mut Parser) -> Result<Expr, Error> {
        Self::parse_left_assoc(input, &[BinOpKind::Div], Self::parse_implicit)
    }

    /// Parses one level of left-associative binary operators.
    fn parse_left_assoc(
        input: &mut Parser,
        ops: &[BinOpKind],
        operand: fn(&mut Parser) -> Result<Expr, Error>,
    ) -> Result<Expr, Error> {
        let mut lhs = operand(input)?;
        let mut depth = lhs.depth();
        while let Some(op) = input.peek_kind()
            .and_then(BinOpKind::from_token)
            .filter(|op| ops.contains(op))
        {
            input.next_token()?;
            let rhs = operand(input)?;
            depth = depth.max(rhs.depth()) + 1;
            input.check_tree_depth(depth)?;
            lhs = Expr::binary(lhs, op, rhs);
        }
        Ok(lhs)
    }

    /// Parses a run of juxtaposed factors, such as `2x` or `3(x + 1)`, into left-nested
    /// multiplications.
    ///
    /// A variable standing alone at the start of the run is written as `1 * x`, so that every
    /// occurrence of the variable can be matched as a coefficient times an atom.
    pub(crate) fn parse_implicit(input: &mut Parser) -> Result<Expr, Error> {
        let mut lhs = Self::parse_exponential(input)?;
        if matches!(lhs, Expr::Literal(Literal::Variable(_))) {
            lhs = Expr::binary(Expr::number(1.0), BinOpKind::Mul, lhs);
        }

        let mut depth = lhs.depth();
        while input.peek_kind().map_or(false, TokenKind::starts_implicit_factor) {
            let rhs = Self::parse_exponential(input)?;
            depth = depth.max(rhs.depth()) + 1;
            input.check_tree_depth(depth)?;
            lhs = Expr::binary(lhs, BinOpKind::Mul, rhs);
        }
        Ok(lhs)
    }

    /// Parses `exponential := prefix ('^' exponential)?`, which is right-associative.
    fn parse_exponential(input: &mut Parser) -> Result<Expr, Error> {
        let base = Expr::parse_prefix(input)?;
        if input.peek_kind() != Some(TokenKind::Exp) {
            return Ok(base);
        }

        input.next_token()?;
        let exponent = input.nested(Self::parse_exponential)?;
        Ok(Expr::binary(base, BinOpKind::Exp, exponent))
    }
}

impl PartialEq for Binary {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.lhs == other.lhs && self.rhs == other.rhs
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let precedence = self.op.precedence();
        let (lhs_paren, rhs_paren) = match self.op.associativity() {
            Associativity::Left => (
                self.lhs.precedence() < precedence,
                self.rhs.precedence() <= precedence,
            ),
            Associativity::Right => (
                self.lhs.precedence() <= precedence,
                self.rhs.precedence() < precedence,
            ),
        };

        fmt_operand(f, &self.lhs, lhs_paren)?;
        write!(f, " {} ", self.op)?;
        fmt_operand(f, &self.rhs, rhs_paren)
    }
}
