//! Algebraic manipulation of expressions.
//!
//! # Tags
//!
//! Before any rule looks at a tree, [`tag()`] walks it and records on each node which symbolic
//! atoms (the variable, `e`, and `pi`) occur somewhere beneath it. Rules use the tags to reject
//! candidates cheaply: two terms cannot be like terms if they share no atoms. Equalities also
//! record which side holds the variable, which tells the solver where to start.
//!
//! # Simplification
//!
//! [`simplify()`] applies the rule table in [`simplify::rules`] bottom-up, pass after pass, until
//! a pass leaves the tree unchanged. The rules fold numbers, keep fractions exact, and combine
//! like terms such as `2x + 3x`. Pass a [`StepCollector`] to [`simplify_with`] to see which rules
//! fired.
//!
//! ```
//! use symba_compute::symbolic::simplify_with_steps;
//! use symba_compute::symbolic::simplify::step::Step;
//! use symba_parser::parser::{ast::Expr, Parser};
//!
//! let expr = Parser::new("2x + 3x").try_parse_full::<Expr>().unwrap();
//! let (result, steps) = simplify_with_steps(&expr).unwrap();
//! assert_eq!(result.to_string(), "5 * x");
//! assert_eq!(steps, vec![Step::CombineLikeTerms, Step::ConstantFold]);
//! ```
//!
//! # Solving
//!
//! [`solve()`] rearranges an equation in one variable so that the variable stands alone on the
//! left, by applying the inverse of each operation wrapped around it.

pub mod error;
pub mod simplify;
pub mod solve;
pub mod step_collector;
pub mod tag;

pub use simplify::{simplify, simplify_with, simplify_with_steps, SimplifyOptions, SimplifyOptionsBuilder};
pub use solve::{isolate, solve};
pub use step_collector::StepCollector;
pub use tag::tag;
