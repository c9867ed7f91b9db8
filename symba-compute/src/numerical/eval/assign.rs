use symba_parser::parser::ast::Assign;
use crate::numerical::{ctxt::Ctxt, error::Error, eval::Eval, value::Value};

/// Evaluates both sides and reports them side by side. The sides are not compared.
impl Eval for Assign {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let lhs = self.lhs.eval(ctxt)?;
        let rhs = self.rhs.eval(ctxt)?;
        Ok(Value::Symbolic(format!("{} = {}", lhs, rhs)))
    }
}
