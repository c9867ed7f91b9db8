mod assign;
mod binary;
mod call;
mod literal;
mod unary;

use symba_parser::parser::ast::Expr;
use crate::error::check_depth;
use super::{ctxt::Ctxt, error::Error, value::Value};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error>;

    /// Evaluate the expression to produce a value, using the default context.
    fn eval_default(&self) -> Result<Value, Error> {
        self.eval(&mut Default::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        if ctxt.depth == 0 {
            check_depth(self)?;
        }

        ctxt.depth += 1;
        let result = match self {
            Expr::Literal(literal) => literal.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Assign(assign) => assign.eval(ctxt),
        };
        ctxt.depth -= 1;
        result
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::{
        error::{MaxDepthExceeded, MAX_RECURSION_DEPTH},
        numerical::error::kind::{
            InvalidBinaryOperation,
            InvalidFunctionOperand,
            InvalidVectorComponent,
            NegativeFactorial,
            NonIntegerFactorial,
            VectorLengthMismatch,
            WrongArgumentCount,
        },
    };
    use symba_parser::parser::{
        ast::Func,
        token::op::{BinOpKind, UnaryOpKind},
        Parser,
    };

    fn eval(source: &str) -> Result<Value, Error> {
        Parser::new(source).try_parse_full::<Expr>().unwrap().eval_default()
    }

    fn scalar(source: &str) -> f64 {
        match eval(source).unwrap() {
            Value::Scalar(value) => value,
            value => panic!("expected a scalar, got {:?}", value),
        }
    }

    #[test]
    fn arithmetic() {
        assert_eq!(scalar("1 + 2"), 3.0);
        assert_eq!(scalar("1 + 2 * 3"), 7.0);
        assert_eq!(scalar("((1 + 9) / 5) * 3"), 6.0);
        assert_eq!(scalar("3 * -5 / 5! + 6"), 5.875);
        assert_eq!(scalar("7 % 4"), 3.0);
        assert_eq!(scalar("2 ^ 3 ^ 2"), 512.0);
        assert_eq!(scalar("-2 ^ 2"), -4.0);
        assert_eq!(scalar("+4"), 4.0);
    }

    #[test]
    fn literals_are_rounded() {
        assert_eq!(scalar("0.123456789"), 0.12345679);
        assert_eq!(scalar("pi"), 3.14159265);
        assert_eq!(scalar("e"), 2.71828183);
    }

    #[test]
    fn binary_results_are_not_rounded() {
        assert_relative_eq!(scalar("1 / 3"), 1.0 / 3.0);
        assert_ne!(scalar("1 / 3"), 0.33333333);
    }

    #[test]
    fn functions() {
        assert_eq!(scalar("\\sqrt(16)"), 4.0);
        assert_eq!(scalar("\\sqrt(2)"), 1.41421356);
        assert_eq!(scalar("abs(-3.5)"), 3.5);
        assert_eq!(scalar("sin(pi)"), 0.0);
        assert_eq!(scalar("cos(0)"), 1.0);
        assert_eq!(scalar("tan(0)"), 0.0);
        assert_eq!(scalar("ln(e)"), 1.0);
        assert!(scalar("ln(0)").is_infinite());
    }

    #[test]
    fn factorial() {
        assert_eq!(scalar("5!"), 120.0);
        assert_eq!(scalar("0!"), 1.0);
        assert_eq!(scalar("3!!"), 720.0);
        assert_eq!(scalar("(2 + 1)!"), 6.0);

        let err = eval("2.5!").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&NonIntegerFactorial { value: 2.5 }));

        let err = eval("(-3)!").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&NegativeFactorial { value: -3.0 }));
    }

    #[test]
    fn factorials_share_the_context() {
        let expr = Parser::new("5! + 6!").try_parse_full::<Expr>().unwrap();
        let mut ctxt = Ctxt::default();
        assert_eq!(expr.eval(&mut ctxt).unwrap(), Value::Scalar(840.0));
        assert_eq!(ctxt.memoized_factorials(), 5);
    }

    #[test]
    fn vectors() {
        assert_eq!(eval("[1, 2 + 3, 2^2]").unwrap(), Value::Vector(vec![1.0, 5.0, 4.0]));
        assert_eq!(eval("[1, 2] + [3, 4]").unwrap(), Value::Vector(vec![4.0, 6.0]));
        assert_eq!(eval("[5, 5] - [1, 2]").unwrap(), Value::Vector(vec![4.0, 3.0]));
        assert_eq!(eval("-[1, 2]").unwrap(), Value::Vector(vec![-1.0, -2.0]));
    }

    #[test]
    fn vectors_of_different_lengths() {
        assert_eq!(eval("[1, 2] + [10, 20, 30]").unwrap(), Value::Vector(vec![11.0, 22.0, 30.0]));
        assert_eq!(eval("[1, 2, 3] - [1, 1]").unwrap(), Value::Vector(vec![0.0, 1.0, 3.0]));
    }

    #[test]
    fn vector_scalar_products() {
        assert_eq!(eval("2 * [1, 2]").unwrap(), Value::Vector(vec![2.0, 4.0]));
        assert_eq!(eval("[1, 2] * 3").unwrap(), Value::Vector(vec![3.0, 6.0]));
        assert_eq!(eval("[5, 10] / 5").unwrap(), Value::Vector(vec![1.0, 2.0]));
        assert_eq!(eval("2 / [4, 8]").unwrap(), Value::Vector(vec![0.5, 0.25]));
    }

    #[test]
    fn dot_product() {
        assert_eq!(eval("[1, 2] * [3, 4]").unwrap(), Value::Scalar(11.0));

        let err = eval("[1, 2] * [3, 4, 5]").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&VectorLengthMismatch { left: 2, right: 3 }));
    }

    #[test]
    fn invalid_vector_operations() {
        let err = eval("[1, 2] + 3").unwrap_err();
        assert_eq!(
            err.downcast_ref(),
            Some(&InvalidBinaryOperation { op: BinOpKind::Add, left: "Vector", right: "Scalar" }),
        );

        let err = eval("[1, 2] ^ 2").unwrap_err();
        assert!(err.is::<InvalidBinaryOperation>());

        let err = eval("\\sqrt([4, 9])").unwrap_err();
        assert_eq!(
            err.downcast_ref(),
            Some(&InvalidFunctionOperand { func: "sqrt", found: "Vector" }),
        );

        let err = eval("[[1, 2], 3]").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&InvalidVectorComponent { found: "Vector" }));
    }

    #[test]
    fn symbolic() {
        assert_eq!(eval("x").unwrap(), Value::Symbolic("1 * x".to_string()));
        assert_eq!(eval("2x + 3").unwrap(), Value::Symbolic("2 * x + 3".to_string()));
        assert_eq!(eval("-x").unwrap(), Value::Symbolic("-(1 * x)".to_string()));
        assert_eq!(eval("\\sqrt(x)").unwrap(), Value::Symbolic("sqrt(1 * x)".to_string()));

        let err = eval("[x, 1]").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&InvalidVectorComponent { found: "Symbolic" }));
    }

    #[test]
    fn equality_is_reported() {
        assert_eq!(eval("1 + 1 = 2").unwrap(), Value::Symbolic("2 = 2".to_string()));
        assert_eq!(eval("2x = 4").unwrap(), Value::Symbolic("2 * x = 4".to_string()));
    }

    #[test]
    fn wrong_argument_count() {
        let expr = Expr::call(Func::Sqrt, vec![Expr::number(1.0), Expr::number(2.0)]);
        let err = expr.eval_default().unwrap_err();
        assert_eq!(
            err.downcast_ref(),
            Some(&WrongArgumentCount { func: "sqrt", expected: 1, found: 2 }),
        );
    }

    #[test]
    fn deep_trees_are_rejected() {
        let mut expr = Expr::number(1.0);
        for _ in 0..MAX_RECURSION_DEPTH {
            expr = Expr::unary(UnaryOpKind::Minus, expr);
        }
        assert!(expr.eval_default().unwrap_err().is::<MaxDepthExceeded>());
    }
}
