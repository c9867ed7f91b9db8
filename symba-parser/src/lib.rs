//! Tokenizer, parser, and expression tree for the symba algebra engine.
//!
//! Use [`parser::Parser`] to turn a line of input into an [`Expr`](parser::ast::Expr):
//!
//! ```
//! use symba_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("2x + 3 = 7");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "2 * x + 3 = 7");
//! ```

pub mod parser;
pub mod tokenizer;
