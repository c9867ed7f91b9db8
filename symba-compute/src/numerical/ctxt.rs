use std::collections::HashMap;

/// The number of decimal digits that literals and function results are rounded to by default.
pub const DEFAULT_PRECISION: usize = 8;

/// The largest integer whose factorial is finite as an [`f64`].
const MAX_FINITE_FACTORIAL: u64 = 170;

/// A context to use when evaluating an expression.
///
/// The context holds the rounding precision and the factorials computed so far. It is meant to be
/// used for a single evaluation, but nothing breaks if it is reused.
#[derive(Debug, Clone)]
pub struct Ctxt {
    /// The number of decimal digits to round literals and function results to.
    pub precision: usize,

    /// Factorials that have already been computed, keyed by their input.
    factorials: HashMap<u64, f64>,

    /// The depth of the node currently being evaluated. This is zero outside of an evaluation.
    pub(crate) depth: usize,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }
}

impl Ctxt {
    /// Creates a new context with the default precision.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new context that rounds to the given number of decimal digits.
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision,
            factorials: HashMap::new(),
            depth: 0,
        }
    }

    /// Rounds the value to the precision of this context. Values too large to be scaled are
    /// returned unchanged.
    pub fn round(&self, value: f64) -> f64 {
        let exponent = i32::try_from(self.precision).unwrap_or(i32::MAX);
        let scale = 10f64.powi(exponent);
        let scaled = value * scale;
        if !scaled.is_finite() {
            return value;
        }
        scaled.round() / scale
    }

    /// Computes `n!`, reusing and extending the factorials already computed by this context.
    ///
    /// Factorials above `170!` are infinite.
    pub fn factorial(&mut self, n: u64) -> f64 {
        if n > MAX_FINITE_FACTORIAL {
            return f64::INFINITY;
        }
        if let Some(&result) = self.factorials.get(&n) {
            return result;
        }

        // resume from the largest factorial below `n` that is already known
        let (mut k, mut result) = (1..n)
            .rev()
            .find_map(|k| self.factorials.get(&k).map(|&result| (k, result)))
            .unwrap_or((1, 1.0));
        while k < n {
            k += 1;
            result *= k as f64;
            self.factorials.insert(k, result);
        }

        self.factorials.insert(n, result);
        result
    }

    /// Returns the number of factorials computed by this context so far.
    pub fn memoized_factorials(&self) -> usize {
        self.factorials.len()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use super::*;

    #[test]
    fn round_to_precision() {
        let ctxt = Ctxt::default();
        assert_eq!(ctxt.round(std::f64::consts::PI), 3.14159265);
        assert_eq!(ctxt.round(1.2246467991473532e-16), 0.0);
        assert_eq!(ctxt.round(0.1 + 0.2), 0.3);
        assert_eq!(ctxt.round(f64::MAX), f64::MAX);
        assert!(ctxt.round(f64::NAN).is_nan());

        let ctxt = Ctxt::with_precision(2);
        assert_eq!(ctxt.round(2.71828), 2.72);
    }

    #[test]
    fn factorial_is_memoized() {
        let mut ctxt = Ctxt::default();
        assert_eq!(ctxt.factorial(0), 1.0);
        assert_eq!(ctxt.factorial(5), 120.0);
        let memoized = ctxt.memoized_factorials();

        assert_eq!(ctxt.factorial(5), 120.0);
        assert_eq!(ctxt.memoized_factorials(), memoized);

        assert_eq!(ctxt.factorial(7), 5040.0);
        assert_eq!(ctxt.memoized_factorials(), memoized + 2);
    }

    #[test]
    fn large_factorials() {
        let mut ctxt = Ctxt::default();
        assert_relative_eq!(ctxt.factorial(20), 2432902008176640000.0);
        assert!(ctxt.factorial(170).is_finite());
        assert_eq!(ctxt.factorial(171), f64::INFINITY);
    }
}
