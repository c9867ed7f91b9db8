use symba_parser::parser::{ast::Unary, token::op::UnaryOpKind};
use crate::numerical::{ctxt::Ctxt, error::Error, eval::Eval, value::Value};

impl Eval for Unary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let operand = self.operand.eval(ctxt)?;
        Ok(match (self.op, operand) {
            (_, Value::Symbolic(_)) => Value::Symbolic(self.to_string()),
            (UnaryOpKind::Plus, operand) => operand,
            (UnaryOpKind::Minus, Value::Scalar(value)) => Value::Scalar(-value),
            (UnaryOpKind::Minus, Value::Vector(components)) => {
                Value::Vector(components.into_iter().map(|component| -component).collect())
            },
        })
    }
}
