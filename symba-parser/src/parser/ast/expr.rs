use crate::{
    parser::{
        ast::{
            assign::Assign,
            binary::Binary,
            call::{Call, Func},
            literal::{Irrational, Literal},
            tags::Tags,
            unary::Unary,
        },
        error::{kind, Error},
        token::{op::{BinOpKind, UnaryOpKind}, CloseParen, OpenParen},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::fmt;

/// Represents any node of the expression tree.
///
/// The tree is produced by the parser and then rewritten by the simplifier and the equation
/// solver. Every node exclusively owns its children, so a rewrite is expressed by assigning a new
/// [`Expr`] into the slot of the node it replaces.
///
/// Comparing two expressions with `==` compares their shape only; the cached [`Tags`] and
/// [`VariableSide`](super::tags::VariableSide) of the nodes are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number, the variable, or an irrational constant.
    Literal(Literal),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A function application, a vector, or a factorial.
    Call(Call),

    /// An equality between two expressions, such as `2x = 4`.
    Assign(Assign),
}

impl Expr {
    /// Creates a numeric literal.
    pub fn number(value: f64) -> Self {
        Self::Literal(Literal::Number(value))
    }

    /// Creates a variable literal.
    pub fn variable(symbol: impl Into<String>) -> Self {
        Self::Literal(Literal::Variable(symbol.into()))
    }

    /// Creates an irrational constant.
    pub fn irrational(irrational: Irrational) -> Self {
        Self::Literal(Literal::Irrational(irrational))
    }

    /// Creates a binary operation.
    pub fn binary(lhs: Expr, op: BinOpKind, rhs: Expr) -> Self {
        Self::Binary(Binary::new(lhs, op, rhs))
    }

    /// Creates a unary operation.
    pub fn unary(op: UnaryOpKind, operand: Expr) -> Self {
        Self::Unary(Unary::new(op, operand))
    }

    /// Creates a function application.
    pub fn call(func: Func, args: Vec<Expr>) -> Self {
        Self::Call(Call::new(func, args))
    }

    /// Creates an equality.
    pub fn assign(lhs: Expr, rhs: Expr) -> Self {
        Self::Assign(Assign::new(lhs, rhs))
    }

    /// Creates a canonical fraction, which is a division of two numeric literals.
    pub fn fraction(numerator: f64, denominator: f64) -> Self {
        Self::binary(Self::number(numerator), BinOpKind::Div, Self::number(denominator))
    }

    /// Returns the value of this expression if it is a numeric literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Literal(Literal::Number(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numerator and denominator of this expression if it is a canonical fraction.
    pub fn as_fraction(&self) -> Option<(f64, f64)> {
        match self {
            Self::Binary(Binary { lhs, op: BinOpKind::Div, rhs, .. }) => {
                Some((lhs.as_number()?, rhs.as_number()?))
            },
            _ => None,
        }
    }

    /// Returns the leaf if this expression is a symbolic atom (the variable or a constant).
    pub fn as_atom(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) if literal.is_atom() => Some(literal),
            _ => None,
        }
    }

    /// Returns the coefficient and the atom if this expression is a product whose right operand
    /// is a symbolic atom, such as `2 * x` or `(1 / 2) * pi`.
    pub fn as_product(&self) -> Option<(&Expr, &Literal)> {
        match self {
            Self::Binary(Binary { lhs, op: BinOpKind::Mul, rhs, .. }) => {
                Some((lhs, rhs.as_atom()?))
            },
            _ => None,
        }
    }

    /// Returns the tags of this expression. For leaves, this is their implicit tag. For other
    /// nodes, this is whatever was stored by the last tagging pass.
    pub fn tags(&self) -> Tags {
        match self {
            Self::Literal(literal) => literal.tags(),
            Self::Binary(binary) => binary.tags,
            Self::Unary(unary) => unary.tags,
            Self::Call(call) => call.tags,
            Self::Assign(assign) => assign.tags,
        }
    }

    /// Returns the precedence of the outermost operation of this expression, which decides where
    /// parentheses are needed when printing it.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Literal(Literal::Number(value)) if value.is_sign_negative() && *value != 0.0 => {
                Precedence::Neg
            },
            Self::Literal(_) => Precedence::Atom,
            Self::Binary(binary) => binary.op.precedence(),
            Self::Unary(unary) => unary.op.precedence(),
            Self::Call(Call { func: Func::Factorial, .. }) => Precedence::Factorial,
            Self::Call(_) => Precedence::Atom,
            Self::Assign(_) => Precedence::Assign,
        }
    }

    /// Returns the number of nodes on the longest path from this node to a leaf, counting both
    /// ends. A leaf has a depth of 1.
    ///
    /// This does not recurse, so it is safe to call on trees of any depth.
    pub fn depth(&self) -> usize {
        let mut stack = vec![(self, 1)];
        let mut max = 0;
        while let Some((expr, depth)) = stack.pop() {
            max = max.max(depth);
            match expr {
                Self::Literal(_) => {},
                Self::Binary(binary) => {
                    stack.push((&binary.lhs, depth + 1));
                    stack.push((&binary.rhs, depth + 1));
                },
                Self::Unary(unary) => stack.push((&unary.operand, depth + 1)),
                Self::Call(call) => stack.extend(call.args.iter().map(|arg| (arg, depth + 1))),
                Self::Assign(assign) => {
                    stack.push((&assign.lhs, depth + 1));
                    stack.push((&assign.rhs, depth + 1));
                },
            }
        }
        max
    }

    /// Parses a prefix expression: a literal, a parenthesized expression, a function call, a
    /// vector, or a unary operation. Any postfix `!` operators that follow are applied to the
    /// result, except for unary operations, which end at the implicit product they apply to.
    pub(crate) fn parse_prefix(input: &mut Parser) -> Result<Self, Error> {
        input.nested(|input| {
            let next = input.peek_kind().ok_or_else(|| input.error(kind::UnexpectedEof))?;
            let expr = match next {
                TokenKind::Add | TokenKind::Sub => return Unary::parse(input).map(Self::Unary),
                TokenKind::OpenParen => Self::parse_paren(input)?,
                TokenKind::OpenSquare => Self::Call(Call::parse_vector(input)?),
                TokenKind::CloseParen => {
                    return Err(input.error(kind::UnclosedParenthesis { opening: false }));
                },
                TokenKind::Command => {
                    let token = input.next_token()?;
                    let name = token.lexeme.trim_start_matches('\\');
                    return Err(Error::new(vec![token.span], kind::UnknownFunction::new(name)));
                },
                next if next.is_function() => Self::Call(Call::parse_function(input)?),
                _ => Self::Literal(Literal::parse(input)?),
            };
            Call::parse_factorials(input, expr)
        })
    }

    /// Parses an additive expression surrounded by parentheses.
    fn parse_paren(input: &mut Parser) -> Result<Self, Error> {
        let open = input.try_parse::<OpenParen>()?;
        if input.peek_kind() == Some(TokenKind::CloseParen) {
            let span = open.span.start..input.span().end;
            return Err(Error::new(vec![span], kind::EmptyParenthesis));
        }

        let expr = Binary::parse_additive(input)?;
        input.try_parse::<CloseParen>()
            .map_err(|_| Error::new(vec![open.span], kind::UnclosedParenthesis { opening: true }))?;
        Ok(expr)
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        Assign::parse_or_lower(input)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Literal(literal) => literal.fmt(f),
            Self::Binary(binary) => binary.fmt(f),
            Self::Unary(unary) => unary.fmt(f),
            Self::Call(call) => call.fmt(f),
            Self::Assign(assign) => assign.fmt(f),
        }
    }
}

/// Formats an operand, wrapping it in parentheses if requested.
pub(crate) fn fmt_operand(f: &mut fmt::Formatter, operand: &Expr, paren: bool) -> fmt::Result {
    if paren {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    #[test]
    fn fmt_minimal_parentheses() {
        assert_eq!(parse("3x + 6").to_string(), "3 * x + 6");
        assert_eq!(parse("2(x + 1)").to_string(), "2 * (1 * x + 1)");
        assert_eq!(parse("a - (2 - 3)").to_string(), "1 * a - (2 - 3)");
        assert_eq!(parse("(1 + 2) ^ 3").to_string(), "(1 + 2) ^ 3");
        assert_eq!(parse("2 ^ 3 ^ 2").to_string(), "2 ^ 3 ^ 2");
        assert_eq!(parse("(2 ^ 3) ^ 2").to_string(), "(2 ^ 3) ^ 2");
    }

    #[test]
    fn fmt_calls() {
        assert_eq!(parse("\\sqrt(4) + abs(2)").to_string(), "sqrt(4) + abs(2)");
        assert_eq!(parse("[1, 2, 3]").to_string(), "[1, 2, 3]");
        assert_eq!(parse("(2 + 1)!").to_string(), "(2 + 1)!");
        assert_eq!(parse("3!").to_string(), "3!");
    }

    #[test]
    fn fmt_negatives() {
        let expr = Expr::binary(Expr::number(-2.0), BinOpKind::Exp, Expr::number(2.0));
        assert_eq!(expr.to_string(), "(-2) ^ 2");

        let expr = Expr::unary(UnaryOpKind::Minus, parse("2x"));
        assert_eq!(expr.to_string(), "-(2 * x)");

        assert_eq!(Expr::number(-0.0).to_string(), "0");
    }

    #[test]
    fn shape_helpers() {
        assert_eq!(parse("9/4").as_fraction(), Some((9.0, 4.0)));
        assert_eq!(parse("9/x").as_fraction(), None);

        let product = parse("2pi");
        let (coefficient, atom) = product.as_product().unwrap();
        assert_eq!(coefficient, &Expr::number(2.0));
        assert_eq!(atom, &Literal::Irrational(Irrational::Pi));
    }

    #[test]
    fn depth() {
        assert_eq!(parse("2x + 3").depth(), 3);
        assert_eq!(parse("-(x + 1)!").depth(), 5);
        assert_eq!(Expr::number(1.0).depth(), 1);
    }
}
