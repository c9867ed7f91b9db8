use ariadne::Fmt;
use symba_attrs::ErrorKind;
use symba_error::{ErrorKind, EXPR};
use symba_parser::parser::token::op::BinOpKind;

/// The factorial of a number that is not an integer was requested.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot compute the factorial of a non-integer",
    labels = [format!("this evaluates to {}", value.to_string().fg(EXPR))],
    help = "only integer factorials are supported",
)]
pub struct NonIntegerFactorial {
    /// The value of the operand.
    pub value: f64,
}

/// The factorial of a negative integer was requested.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot compute the factorial of a negative number",
    labels = [format!("this evaluates to {}", value.to_string().fg(EXPR))],
)]
pub struct NegativeFactorial {
    /// The value of the operand.
    pub value: f64,
}

/// The dot product of two vectors of different lengths was requested.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot compute the dot product of vectors of different sizes",
    labels = [format!("these vectors have {} and {} components", left, right)],
)]
pub struct VectorLengthMismatch {
    /// The length of the left vector.
    pub left: usize,

    /// The length of the right vector.
    pub right: usize,
}

/// The given binary operation cannot be applied to the given operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply the `{}` operator to these operands", op),
    labels = [format!("this is `{}` {} `{}`", left, op, right)],
)]
pub struct InvalidBinaryOperation {
    /// The operator that was used.
    pub op: BinOpKind,

    /// The type the left side evaluated to.
    pub left: &'static str,

    /// The type the right side evaluated to.
    pub right: &'static str,
}

/// A function was given an operand it cannot be applied to.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply `{}` to a value of type `{}`", func, found),
    labels = ["this function call"],
    help = format!("`{}` takes a {}", func, "Scalar".fg(EXPR)),
)]
pub struct InvalidFunctionOperand {
    /// The name of the function.
    pub func: &'static str,

    /// The type the operand evaluated to.
    pub found: &'static str,
}

/// A vector component did not evaluate to a scalar.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "vector components must be numbers",
    labels = [format!("a component has type `{}`", found)],
)]
pub struct InvalidVectorComponent {
    /// The type the component evaluated to.
    pub found: &'static str,
}

/// A function was given the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` takes {} argument(s), but {} were given", func, expected, found),
    labels = ["this function call"],
)]
pub struct WrongArgumentCount {
    /// The name of the function.
    pub func: &'static str,

    /// The number of arguments the function takes.
    pub expected: usize,

    /// The number of arguments given.
    pub found: usize,
}
