//! Errors shared by the symbolic and numerical halves of the crate.

use ariadne::Fmt;
use symba_attrs::ErrorKind;
use symba_error::{Error, ErrorKind, EXPR};
use symba_parser::parser::ast::Expr;

/// The maximum depth of an expression tree that the simplifier, the solver, and the evaluator
/// will walk. This is used to prevent stack overflows.
pub const MAX_RECURSION_DEPTH: usize = 1 << 10;

/// The expression is nested too deeply to be processed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "maximum recursion depth exceeded",
    labels = [format!("this expression is {} levels deep", depth)],
    help = format!("the maximum depth is {}", MAX_RECURSION_DEPTH.to_string().fg(EXPR)),
)]
pub struct MaxDepthExceeded {
    /// The depth of the rejected expression.
    pub depth: usize,
}

/// Checks that the expression is shallow enough to be walked recursively.
pub fn check_depth(expr: &Expr) -> Result<(), Error> {
    let depth = expr.depth();
    if depth > MAX_RECURSION_DEPTH {
        Err(Error::unspanned(MaxDepthExceeded { depth }))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symba_parser::parser::token::op::BinOpKind;

    #[test]
    fn deep_tree_rejected() {
        let mut expr = Expr::number(1.0);
        for _ in 0..MAX_RECURSION_DEPTH {
            expr = Expr::binary(expr, BinOpKind::Add, Expr::number(1.0));
        }

        let err = check_depth(&expr).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MaxDepthExceeded>(),
            Some(&MaxDepthExceeded { depth: MAX_RECURSION_DEPTH + 1 }),
        );
        assert!(err.spans.is_empty());
    }

    #[test]
    fn shallow_tree_accepted() {
        let expr = Expr::binary(Expr::number(1.0), BinOpKind::Add, Expr::number(2.0));
        assert!(check_depth(&expr).is_ok());
    }
}
