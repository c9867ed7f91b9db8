use std::fmt::{Display, Formatter, Result};

/// The result of evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A real number.
    Scalar(f64),

    /// An ordered sequence of real numbers, such as `[1, 2, 3]`.
    Vector(Vec<f64>),

    /// The text of an expression that contains the variable, and so has no numeric value.
    Symbolic(String),
}

impl Value {
    /// Returns the typename of this value.
    pub fn typename(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "Scalar",
            Value::Vector(_) => "Vector",
            Value::Symbolic(_) => "Symbolic",
        }
    }

    /// Returns true if the value is symbolic.
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Value::Symbolic(_))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(value)
    }
}

impl From<Vec<f64>> for Value {
    fn from(value: Vec<f64>) -> Self {
        Value::Vector(value)
    }
}

/// Formats a scalar, printing negative zero as `0`.
fn fmt_scalar(f: &mut Formatter, value: f64) -> Result {
    if value == 0.0 {
        write!(f, "0")
    } else {
        write!(f, "{}", value)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Value::Scalar(value) => fmt_scalar(f, *value),
            Value::Vector(components) => {
                write!(f, "[")?;
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    fmt_scalar(f, *component)?;
                }
                write!(f, "]")
            },
            Value::Symbolic(text) => write!(f, "{}", text),
        }
    }
}
