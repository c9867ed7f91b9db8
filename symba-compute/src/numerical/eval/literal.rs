use symba_parser::parser::ast::Literal;
use crate::numerical::{ctxt::Ctxt, error::Error, eval::Eval, value::Value};

impl Eval for Literal {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        Ok(match self {
            Literal::Number(value) => Value::Scalar(ctxt.round(*value)),
            Literal::Irrational(irrational) => Value::Scalar(ctxt.round(irrational.value())),
            Literal::Variable(symbol) => Value::Symbolic(symbol.clone()),
        })
    }
}
