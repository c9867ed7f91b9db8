//! Simplification rules for unary plus and minus.

use symba_parser::parser::{
    ast::{Binary, Expr, Unary},
    token::op::{BinOpKind, UnaryOpKind},
};
use crate::symbolic::simplify::{
    rules::{with_unary, Rule},
    step::Step,
};

/// The rules for `plus` nodes.
pub const PLUS_RULES: &[Rule] = &[
    Rule { step: Step::UnaryPlus, applies: is_unary, rewrite: remove_plus },
];

/// The rules for `minus` nodes, in order.
pub const MINUS_RULES: &[Rule] = &[
    Rule { step: Step::NegateConstant, applies: is_negated_constant, rewrite: negate_constant },
    Rule { step: Step::NegateCoefficient, applies: is_negated_product, rewrite: negate_coefficient },
    Rule { step: Step::NegateFraction, applies: is_negated_fraction_product, rewrite: negate_fraction },
    Rule { step: Step::DistributeNegation, applies: is_negated_sum, rewrite: distribute_negation },
    Rule { step: Step::DoubleNegation, applies: is_double_negation, rewrite: remove_double_negation },
];

fn is_unary(expr: &Expr) -> bool {
    matches!(expr, Expr::Unary(_))
}

/// `+a = a`
fn remove_plus(expr: &Expr) -> Expr {
    with_unary(expr, expr.clone(), Expr::clone)
}

fn is_negated_constant(expr: &Expr) -> bool {
    with_unary(expr, false, |operand| operand.as_number().is_some())
}

/// `-(3) = -3`
fn negate_constant(expr: &Expr) -> Expr {
    with_unary(expr, expr.clone(), |operand| match operand.as_number() {
        Some(value) => Expr::number(-value),
        None => expr.clone(),
    })
}

/// Matches the negation of a number times an atom.
fn is_negated_product(expr: &Expr) -> bool {
    with_unary(expr, false, |operand| {
        operand.as_product().map_or(false, |(coefficient, _)| coefficient.as_number().is_some())
    })
}

/// `-(2x) = (-2)x`
fn negate_coefficient(expr: &Expr) -> Expr {
    with_unary(expr, expr.clone(), |operand| match operand.as_product() {
        Some((coefficient, atom)) => match coefficient.as_number() {
            Some(value) => Expr::binary(
                Expr::number(-value),
                BinOpKind::Mul,
                Expr::Literal(atom.clone()),
            ),
            None => expr.clone(),
        },
        None => expr.clone(),
    })
}

/// Matches the negation of a fraction times an atom.
fn is_negated_fraction_product(expr: &Expr) -> bool {
    with_unary(expr, false, |operand| {
        operand.as_product().map_or(false, |(coefficient, _)| coefficient.as_fraction().is_some())
    })
}

/// `-((1/2)x) = (-1/2)x`
fn negate_fraction(expr: &Expr) -> Expr {
    with_unary(expr, expr.clone(), |operand| match operand.as_product() {
        Some((coefficient, atom)) => match coefficient.as_fraction() {
            Some((numerator, denominator)) => Expr::binary(
                Expr::fraction(-numerator, denominator),
                BinOpKind::Mul,
                Expr::Literal(atom.clone()),
            ),
            None => expr.clone(),
        },
        None => expr.clone(),
    })
}

fn is_negated_sum(expr: &Expr) -> bool {
    with_unary(expr, false, |operand| matches!(
        operand,
        Expr::Binary(Binary { op: BinOpKind::Add | BinOpKind::Sub, .. })
    ))
}

/// Moves the negation onto the left operand and flips the operator.
///
/// `-(a + b) = (-a) - b`
/// `-(a - b) = (-a) + b`
fn distribute_negation(expr: &Expr) -> Expr {
    with_unary(expr, expr.clone(), |operand| match operand {
        Expr::Binary(Binary { lhs, op, rhs, .. }) => {
            let op = match op {
                BinOpKind::Add => BinOpKind::Sub,
                BinOpKind::Sub => BinOpKind::Add,
                _ => return expr.clone(),
            };
            Expr::binary(
                Expr::unary(UnaryOpKind::Minus, (**lhs).clone()),
                op,
                (**rhs).clone(),
            )
        },
        _ => expr.clone(),
    })
}

fn is_double_negation(expr: &Expr) -> bool {
    with_unary(expr, false, |operand| matches!(
        operand,
        Expr::Unary(Unary { op: UnaryOpKind::Minus, .. })
    ))
}

/// `-(-a) = a`
fn remove_double_negation(expr: &Expr) -> Expr {
    with_unary(expr, expr.clone(), |operand| match operand {
        Expr::Unary(Unary { operand, .. }) => (**operand).clone(),
        _ => expr.clone(),
    })
}
