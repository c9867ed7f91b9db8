//! Errors that can occur while solving an equation.

use ariadne::Fmt;
use symba_attrs::ErrorKind;
use symba_error::{ErrorKind, EXPR};

/// The variable appears in an exponent, which cannot be isolated without logarithms.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot solve for a variable in an exponent",
    labels = ["in this equation"],
    help = format!("try rewriting the equation using {}", "ln(x)".fg(EXPR)),
)]
pub struct VariableInExponent;

/// The solver could not tell which side of the equation holds the variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = if *both {
        "the variable appears more than once"
    } else {
        "there is no variable to solve for"
    },
    labels = ["in this equation"],
    help = if *both {
        "collect every occurrence of the variable on one side first"
    } else {
        "add a variable, such as `x`, to one side of the equation"
    },
)]
pub struct AmbiguousVariableSide {
    /// Whether the variable was found in more than one place. Otherwise, it was not found at all.
    pub both: bool,
}

/// The variable is wrapped in an operation that has no inverse here.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot isolate the variable from `{}`", func),
    labels = ["in this equation"],
)]
pub struct UnsupportedIsolation {
    /// The name of the operation.
    pub func: &'static str,
}

/// Only equations can be solved.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected an equation",
    labels = ["this is not an equation"],
    help = format!("write an equation such as {}", "2x + 3 = 7".fg(EXPR)),
)]
pub struct NotAnEquation;
