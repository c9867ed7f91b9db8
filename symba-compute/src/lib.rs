//! The algebra core of symba: simplification, equation solving, and numerical evaluation of the
//! expression trees produced by [`symba_parser`].
//!
//! # Simplification
//!
//! [`symbolic::simplify`] rewrites an expression toward a canonical form by repeatedly applying
//! a table of rewrite rules until no rule changes the tree:
//!
//! ```
//! use symba_compute::symbolic::simplify;
//! use symba_parser::parser::{ast::Expr, Parser};
//!
//! let expr = Parser::new("2/3 + 5/2").try_parse_full::<Expr>().unwrap();
//! assert_eq!(simplify(&expr).unwrap(), Expr::fraction(19.0, 6.0));
//! ```
//!
//! # Solving
//!
//! [`symbolic::solve`] isolates the variable of an equation:
//!
//! ```
//! use symba_compute::symbolic::solve;
//! use symba_parser::parser::{ast::Expr, Parser};
//!
//! let expr = Parser::new("2x + 3 = 7").try_parse_full::<Expr>().unwrap();
//! assert_eq!(solve(&expr).unwrap().to_string(), "x = 2");
//! ```
//!
//! # Evaluation
//!
//! [`numerical::eval::Eval`] computes the value of an expression:
//!
//! ```
//! use symba_compute::numerical::{eval::Eval, value::Value};
//! use symba_parser::parser::{ast::Expr, Parser};
//!
//! let expr = Parser::new("[1, 2] * [3, 4]").try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.eval_default().unwrap(), Value::Scalar(11.0));
//! ```

pub mod error;
pub mod numerical;
pub mod symbolic;
