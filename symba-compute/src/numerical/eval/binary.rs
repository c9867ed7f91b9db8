use symba_parser::parser::{ast::Binary, token::op::BinOpKind};
use crate::numerical::{
    ctxt::Ctxt,
    error::{kind::{InvalidBinaryOperation, VectorLengthMismatch}, Error},
    eval::Eval,
    value::Value,
};

/// Evaluates a binary expression with two scalar operands.
fn eval_scalar_operands(op: BinOpKind, left: f64, right: f64) -> f64 {
    match op {
        BinOpKind::Add => left + right,
        BinOpKind::Sub => left - right,
        BinOpKind::Mul => left * right,
        BinOpKind::Div => left / right,
        BinOpKind::Mod => left % right,
        BinOpKind::Exp => left.powf(right),
    }
}

/// Adds or subtracts two vectors component by component.
///
/// If the vectors have different lengths, only the components they share are combined; the
/// remaining components of the longer vector are kept as they are.
fn eval_componentwise(op: BinOpKind, left: &[f64], right: &[f64]) -> Vec<f64> {
    let shared = left.len().min(right.len());
    let rest = if left.len() > right.len() { &left[shared..] } else { &right[shared..] };
    left.iter()
        .zip(right)
        .map(|(&l, &r)| eval_scalar_operands(op, l, r))
        .chain(rest.iter().copied())
        .collect()
}

/// Computes the dot product of two vectors of the same length.
fn dot(left: &[f64], right: &[f64]) -> Result<f64, Error> {
    if left.len() != right.len() {
        return Err(Error::unspanned(VectorLengthMismatch {
            left: left.len(),
            right: right.len(),
        }));
    }

    Ok(left.iter().zip(right).map(|(l, r)| l * r).sum())
}

/// Evaluates a binary expression with at least one vector operand.
///
/// A vector can be multiplied or divided by a scalar on either side. Dividing a scalar by a
/// vector divides the scalar by each component.
fn eval_vector_operands(op: BinOpKind, left: Value, right: Value) -> Result<Value, Error> {
    let invalid = |left: &Value, right: &Value| Error::unspanned(InvalidBinaryOperation {
        op,
        left: left.typename(),
        right: right.typename(),
    });

    Ok(match (op, left, right) {
        (BinOpKind::Mul, Value::Vector(left), Value::Vector(right)) => Value::Scalar(dot(&left, &right)?),
        (BinOpKind::Add | BinOpKind::Sub, Value::Vector(left), Value::Vector(right)) => {
            Value::Vector(eval_componentwise(op, &left, &right))
        },
        (BinOpKind::Mul | BinOpKind::Div, Value::Vector(vector), Value::Scalar(scalar)) => {
            Value::Vector(vector.into_iter().map(|c| eval_scalar_operands(op, c, scalar)).collect())
        },
        (BinOpKind::Mul | BinOpKind::Div, Value::Scalar(scalar), Value::Vector(vector)) => {
            Value::Vector(vector.into_iter().map(|c| eval_scalar_operands(op, scalar, c)).collect())
        },
        (_, left, right) => return Err(invalid(&left, &right)),
    })
}

impl Eval for Binary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;

        match (left, right) {
            (left, right) if left.is_symbolic() || right.is_symbolic() => {
                Ok(Value::Symbolic(self.to_string()))
            },
            (Value::Scalar(left), Value::Scalar(right)) => {
                Ok(Value::Scalar(eval_scalar_operands(self.op, left, right)))
            },
            (left, right) => eval_vector_operands(self.op, left, right),
        }
    }
}
