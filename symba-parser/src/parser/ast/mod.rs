//! The expression tree produced by the parser.

pub mod assign;
pub mod binary;
pub mod call;
pub mod expr;
pub mod literal;
pub mod tags;
pub mod unary;

pub use assign::Assign;
pub use binary::Binary;
pub use call::{Call, Func};
pub use expr::Expr;
pub use literal::{Irrational, Literal};
pub use tags::{Tags, VariableSide};
pub use unary::Unary;
