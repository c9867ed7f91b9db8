//! Isolation of the variable in an equation.
//!
//! The solver peels operations off the side of the equation that holds the variable, one node at
//! a time. Each peeled node moves its other operand across the `=` by applying the inverse
//! operation to the opposite side, until the variable stands alone:
//!
//! ```text
//! 2x + 3 = 7
//!     2x = 7 - 3
//!      x = (7 - 3) / 2
//! ```

use log::debug;
use symba_error::Error;
use symba_parser::parser::{
    ast::{Assign, Binary, Call, Expr, Func, Irrational, Literal, Unary, VariableSide},
    token::op::{BinOpKind, UnaryOpKind},
};
use crate::error::check_depth;
use super::{
    error::{AmbiguousVariableSide, NotAnEquation, UnsupportedIsolation, VariableInExponent},
    simplify::simplify,
    tag::tag,
};

/// Solves an equation for its variable.
///
/// The equation is simplified first, then the variable is isolated on the left side, and finally
/// the right side is simplified again.
pub fn solve(expr: &Expr) -> Result<Expr, Error> {
    if !matches!(expr, Expr::Assign(_)) {
        return Err(Error::unspanned(NotAnEquation));
    }

    let Expr::Assign(equation) = simplify(expr)? else {
        return Err(Error::unspanned(NotAnEquation));
    };

    let mut isolated = isolate(&equation)?;
    *isolated.rhs = simplify(&isolated.rhs)?;

    let mut solution = Expr::Assign(isolated);
    tag(&mut solution);
    Ok(solution)
}

/// Rearranges an equation so that its left side is the variable alone.
///
/// The equation is tagged before anything else, so it need not have been tagged already. The
/// right side of the result is not simplified; see [`solve`].
///
/// Returns an error if the variable appears on both sides or on neither side, or if it is
/// wrapped in an operation that cannot be inverted here.
pub fn isolate(equation: &Assign) -> Result<Assign, Error> {
    let mut expr = Expr::Assign(equation.clone());
    check_depth(&expr)?;
    tag(&mut expr);

    let Expr::Assign(Assign { lhs, rhs, side, .. }) = expr else {
        return Err(Error::unspanned(NotAnEquation));
    };

    let (mut lhs, mut rhs) = match side {
        VariableSide::Left => (*lhs, *rhs),
        VariableSide::Right => (*rhs, *lhs),
        VariableSide::Both => return Err(Error::unspanned(AmbiguousVariableSide { both: true })),
        VariableSide::Neither => return Err(Error::unspanned(AmbiguousVariableSide { both: false })),
    };

    while !matches!(lhs, Expr::Literal(Literal::Variable(_))) {
        debug!("isolate: {} = {}", lhs, rhs);
        (lhs, rhs) = match lhs {
            Expr::Binary(Binary { lhs: left, op, rhs: right, .. }) => {
                match (left.tags().has_variable(), right.tags().has_variable()) {
                    (true, true) => {
                        return Err(Error::unspanned(AmbiguousVariableSide { both: true }));
                    },
                    (true, false) => (*left, invert_left(op, rhs, *right)?),
                    (false, _) => (*right, invert_right(op, *left, rhs)?),
                }
            },
            Expr::Unary(Unary { op, operand, .. }) => match op {
                UnaryOpKind::Plus => (*operand, rhs),
                UnaryOpKind::Minus => (*operand, Expr::unary(UnaryOpKind::Minus, rhs)),
            },
            Expr::Call(Call { func, mut args, .. }) if args.len() == 1 => match func {
                Func::Sqrt => (args.swap_remove(0), Expr::binary(rhs, BinOpKind::Exp, Expr::number(2.0))),
                Func::Ln => (
                    args.swap_remove(0),
                    Expr::binary(Expr::irrational(Irrational::E), BinOpKind::Exp, rhs),
                ),
                func => return Err(Error::unspanned(UnsupportedIsolation { func: func.name() })),
            },
            Expr::Call(Call { func, .. }) => {
                return Err(Error::unspanned(UnsupportedIsolation { func: func.name() }));
            },
            Expr::Literal(_) | Expr::Assign(_) => {
                return Err(Error::unspanned(AmbiguousVariableSide { both: false }));
            },
        };
    }

    let mut solution = Expr::assign(lhs, rhs);
    tag(&mut solution);
    match solution {
        Expr::Assign(assign) => Ok(assign),
        _ => Err(Error::unspanned(NotAnEquation)),
    }
}

/// Returns true if the expression is the number one, which can be dropped from a product or a
/// quotient.
fn is_one(expr: &Expr) -> bool {
    expr.as_number() == Some(1.0)
}

/// Moves `other` across the equality, where the variable is in the left operand of `op`.
///
/// `x + b = c -> x = c - b`
/// `x ^ b = c -> x = c ^ (1 / b)`
fn invert_left(op: BinOpKind, rhs: Expr, other: Expr) -> Result<Expr, Error> {
    match (op, op.inverse()) {
        (BinOpKind::Mul | BinOpKind::Div, _) if is_one(&other) => Ok(rhs),
        (_, Some(inverse)) => Ok(Expr::binary(rhs, inverse, other)),
        (BinOpKind::Exp, _) => Ok(Expr::binary(
            rhs,
            BinOpKind::Exp,
            Expr::binary(Expr::number(1.0), BinOpKind::Div, other),
        )),
        _ => Err(Error::unspanned(UnsupportedIsolation { func: op.func_tag() })),
    }
}

/// Moves `other` across the equality, where the variable is in the right operand of `op`.
///
/// `a - x = c -> x = a - c`
/// `a / x = c -> x = a / c`
fn invert_right(op: BinOpKind, other: Expr, rhs: Expr) -> Result<Expr, Error> {
    match (op, op.inverse()) {
        (BinOpKind::Mul, _) if is_one(&other) => Ok(rhs),
        (BinOpKind::Add | BinOpKind::Mul, Some(inverse)) => Ok(Expr::binary(rhs, inverse, other)),
        (BinOpKind::Sub | BinOpKind::Div, _) => Ok(Expr::binary(other, op, rhs)),
        (BinOpKind::Exp, _) => Err(Error::unspanned(VariableInExponent)),
        _ => Err(Error::unspanned(UnsupportedIsolation { func: op.func_tag() })),
    }
}
