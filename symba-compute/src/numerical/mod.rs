//! Numerical evaluation of expressions.
//!
//! An expression evaluates to one of three kinds of [`value::Value`]: a scalar, a vector of
//! scalars, or, when the expression still contains the variable, the text of the part that could
//! not be reduced to a number. Numeric literals, constants, and the results of the built-in
//! functions are rounded to the precision of the [`ctxt::Ctxt`] to hide floating-point noise such
//! as `sin(pi) = 1.2246467991473532e-16`.

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod value;
