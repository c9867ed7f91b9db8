use symba_parser::parser::ast::{Call, Func};
use crate::numerical::{
    ctxt::Ctxt,
    error::{
        kind::{
            InvalidFunctionOperand,
            InvalidVectorComponent,
            NegativeFactorial,
            NonIntegerFactorial,
            WrongArgumentCount,
        },
        Error,
    },
    eval::Eval,
    value::Value,
};

/// Evaluates the components of a vector, each of which must be a scalar.
fn eval_vector(call: &Call, ctxt: &mut Ctxt) -> Result<Value, Error> {
    call.args
        .iter()
        .map(|arg| match arg.eval(ctxt)? {
            Value::Scalar(value) => Ok(value),
            value => Err(Error::unspanned(InvalidVectorComponent { found: value.typename() })),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Vector)
}

/// Computes the factorial of a non-negative integer.
fn factorial(ctxt: &mut Ctxt, value: f64) -> Result<f64, Error> {
    if value.fract() != 0.0 || !value.is_finite() {
        return Err(Error::unspanned(NonIntegerFactorial { value }));
    }
    if value < 0.0 {
        return Err(Error::unspanned(NegativeFactorial { value }));
    }

    // saturates for values too large for a `u64`, whose factorial is infinite anyway
    Ok(ctxt.factorial(value as u64))
}

impl Eval for Call {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        if self.func == Func::Vec {
            return eval_vector(self, ctxt);
        }

        let [arg] = self.args.as_slice() else {
            return Err(Error::unspanned(WrongArgumentCount {
                func: self.func.name(),
                expected: 1,
                found: self.args.len(),
            }));
        };

        let value = match arg.eval(ctxt)? {
            Value::Scalar(value) => value,
            Value::Symbolic(_) => return Ok(Value::Symbolic(self.to_string())),
            value => return Err(Error::unspanned(InvalidFunctionOperand {
                func: self.func.name(),
                found: value.typename(),
            })),
        };

        let result = match self.func {
            Func::Sqrt => value.sqrt(),
            Func::Abs => value.abs(),
            Func::Sin => value.sin(),
            Func::Cos => value.cos(),
            Func::Tan => value.tan(),
            Func::Ln => value.ln(),
            Func::Factorial => return factorial(ctxt, value).map(Value::Scalar),
            Func::Vec => return eval_vector(self, ctxt),
        };
        Ok(Value::Scalar(ctxt.round(result)))
    }
}
