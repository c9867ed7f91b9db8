use std::fmt;

/// A rewrite applied by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `2 + 3 = 5`, `2 * 3 = 6`
    ConstantFold,

    /// `1/2 + 1/3 = 5/6`, `1/2 * 2/3 = 2/6`
    FractionFold,

    /// `8 / 10 = 4/5`, `5.5 / 2 = 2.75`
    DivideFold,

    /// `3 / (1/2) = 6`
    DivideByFraction,

    /// `2x + 3` is already simplified
    VariableAndConstant,

    /// `2x + 3x = (2 + 3)x`
    CombineLikeTerms,

    /// `0x = 0`
    MultiplyZero,

    /// `+a = a`
    UnaryPlus,

    /// `-(3) = -3`
    NegateConstant,

    /// `-(2x) = (-2)x`
    NegateCoefficient,

    /// `-((1/2)x) = (-1/2)x`
    NegateFraction,

    /// `-(a + b) = -a - b`
    DistributeNegation,

    /// `-(-a) = a`
    DoubleNegation,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = match self {
            Self::ConstantFold => "fold constants",
            Self::FractionFold => "combine fractions",
            Self::DivideFold => "divide numbers",
            Self::DivideByFraction => "multiply by the reciprocal",
            Self::VariableAndConstant => "keep variable and constant terms apart",
            Self::CombineLikeTerms => "combine like terms",
            Self::MultiplyZero => "multiply by zero",
            Self::UnaryPlus => "remove unary plus",
            Self::NegateConstant => "negate constant",
            Self::NegateCoefficient => "negate coefficient",
            Self::NegateFraction => "negate fractional coefficient",
            Self::DistributeNegation => "distribute negation",
            Self::DoubleNegation => "cancel double negation",
        };
        write!(f, "{}", description)
    }
}
