//! The fixed-point simplification driver.
//!
//! Each pass tags the whole tree, then visits every node in post-order, so that a node is only
//! rewritten after all of its children are. At each node, the first applicable rule from
//! [`rules::rules_for`] replaces the node. Passes repeat until one of them changes nothing, or
//! until [`SimplifyOptions::max_passes`] is reached.

pub mod fraction;
pub mod rules;
pub mod step;

use log::{debug, trace, warn};
use symba_error::Error;
use symba_parser::parser::ast::Expr;
use crate::error::check_depth;
use super::{step_collector::StepCollector, tag::{tag, tag_shallow}};
use step::Step;

/// Options that control the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyOptions {
    /// The maximum number of passes over the tree. If the tree still changes in the last pass,
    /// the simplifier gives up and returns the tree as it is at that point.
    ///
    /// The default is 64.
    pub max_passes: usize,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self { max_passes: 64 }
    }
}

impl SimplifyOptions {
    /// Wraps the given [`SimplifyOptions`] into a builder for further customization.
    pub fn into_builder(self) -> SimplifyOptionsBuilder {
        SimplifyOptionsBuilder(self)
    }
}

/// Helper struct to build a [`SimplifyOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyOptionsBuilder(SimplifyOptions);

impl SimplifyOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of passes. See [`SimplifyOptions::max_passes`] for more
    /// information.
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.0.max_passes = max_passes;
        self
    }

    /// Builds the [`SimplifyOptions`] struct.
    pub fn build(self) -> SimplifyOptions {
        self.0
    }
}

/// Simplifies the given expression with the default options.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    simplify_with(expr, SimplifyOptions::default(), &mut ())
}

/// Simplifies the given expression with the default options, also returning every rule that
/// changed the tree, in the order they were applied.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, SimplifyOptions::default(), &mut steps)?;
    Ok((simplified, steps))
}

/// Simplifies the given expression with the given options, reporting every rule that changed the
/// tree to the step collector.
///
/// Returns an error if the expression is too deep to walk.
pub fn simplify_with(
    expr: &Expr,
    options: SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    check_depth(expr)?;

    let mut expr = expr.clone();
    for pass in 1..=options.max_passes {
        tag(&mut expr);
        let changed = simplify_node(&mut expr, step_collector);
        debug!("simplify pass {}: changed = {}, result = {}", pass, changed, expr);
        if !changed {
            return Ok(expr);
        }
    }

    warn!(
        "simplification did not reach a fixed point after {} passes; returning `{}`",
        options.max_passes,
        expr,
    );
    Ok(expr)
}

/// Simplifies the children of the node, then the node itself. Returns true if anything changed.
///
/// The node's tags are kept up to date with any changes made here.
fn simplify_node(expr: &mut Expr, step_collector: &mut dyn StepCollector<Step>) -> bool {
    let mut changed = match expr {
        Expr::Literal(_) => false,
        Expr::Binary(binary) => {
            let lhs = simplify_node(&mut binary.lhs, step_collector);
            let rhs = simplify_node(&mut binary.rhs, step_collector);
            lhs || rhs
        },
        Expr::Unary(unary) => simplify_node(&mut unary.operand, step_collector),
        Expr::Call(call) => call.args
            .iter_mut()
            .fold(false, |changed, arg| simplify_node(arg, step_collector) || changed),
        Expr::Assign(assign) => {
            let lhs = simplify_node(&mut assign.lhs, step_collector);
            let rhs = simplify_node(&mut assign.rhs, step_collector);
            lhs || rhs
        },
    };

    if changed {
        tag_shallow(expr);
    }

    if let Some(rule) = rules::find_rule(expr) {
        let mut rewritten = (rule.rewrite)(expr);
        if rewritten != *expr {
            trace!("{}: `{}` => `{}`", rule.step, expr, rewritten);
            tag(&mut rewritten);
            *expr = rewritten;
            step_collector.push(rule.step);
            changed = true;
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use symba_parser::parser::{
        ast::{Irrational, VariableSide},
        token::op::{BinOpKind, UnaryOpKind},
        Parser,
    };

    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    fn simplified(source: &str) -> Expr {
        simplify(&parse(source)).unwrap()
    }

    fn product(coefficient: f64, atom: Expr) -> Expr {
        Expr::binary(Expr::number(coefficient), BinOpKind::Mul, atom)
    }

    #[test]
    fn constant_folding() {
        assert_eq!(simplified("3 + 5"), Expr::number(8.0));
        assert_eq!(simplified("-5 + 2"), Expr::number(-3.0));
        assert_eq!(simplified("3 - 5"), Expr::number(-2.0));
        assert_eq!(simplified("3 * 5"), Expr::number(15.0));
        assert_eq!(simplified("1 + 2 * 3 - 4"), Expr::number(3.0));
    }

    #[test]
    fn division() {
        assert_eq!(simplified("8 / 2"), Expr::number(4.0));
        assert_eq!(simplified("0 / 2"), Expr::number(0.0));
        assert_eq!(simplified("9 / 4"), Expr::fraction(9.0, 4.0));
        assert_eq!(simplified("5.5 / 2"), Expr::number(2.75));
        assert_eq!(simplified("5 / 0.2"), Expr::number(25.0));
        assert_eq!(simplified("8 / 10"), Expr::fraction(4.0, 5.0));
        assert_eq!(simplified("6 / -4"), Expr::fraction(-3.0, 2.0));
    }

    #[test]
    fn fractions() {
        assert_eq!(simplified("2/3 + 5/2"), Expr::fraction(19.0, 6.0));
        assert_eq!(simplified("1/2 + 5/2"), Expr::number(3.0));
        assert_eq!(simplified("1/6 + 1/6"), Expr::fraction(1.0, 3.0));
        assert_eq!(simplified("2/3 * 3/4"), Expr::fraction(1.0, 2.0));
        assert_eq!(simplified("3/2 * 2/3"), Expr::number(1.0));
    }

    #[test]
    fn fraction_sum_is_exact() {
        for (a, b, c, d) in [(1.0, 2.0, 1.0, 3.0), (3.0, 4.0, 5.0, 6.0), (7.0, 10.0, 3.0, 10.0), (-1.0, 4.0, 1.0, 4.0)] {
            let sum = Expr::binary(Expr::fraction(a, b), BinOpKind::Add, Expr::fraction(c, d));
            let result = simplify(&sum).unwrap();
            let value = result.as_number()
                .or_else(|| result.as_fraction().map(|(numerator, denominator)| numerator / denominator))
                .unwrap();
            approx::assert_relative_eq!(value, a / b + c / d);
        }
    }

    #[test]
    fn like_terms() {
        assert_eq!(simplified("2e + 2e"), product(4.0, Expr::irrational(Irrational::E)));
        assert_eq!(simplified("2\\pi + 2\\pi"), product(4.0, Expr::irrational(Irrational::Pi)));
        assert_eq!(simplified("2x + 2x"), product(4.0, Expr::variable("x")));
        assert_eq!(simplified("x + 2x"), product(3.0, Expr::variable("x")));
        assert_eq!(simplified("5x - 2x"), product(3.0, Expr::variable("x")));
        assert_eq!(simplified("2x - 2x"), Expr::number(0.0));
    }

    #[test]
    fn unlike_terms_are_left_alone() {
        assert_eq!(simplified("2x + 2e"), parse("2x + 2e"));
    }

    #[test]
    fn variable_and_constant_is_a_fixed_point() {
        let mut steps = Vec::new();
        let expr = parse("2x + 3");
        let result = simplify_with(&expr, SimplifyOptions::default(), &mut steps).unwrap();
        assert_eq!(result, expr);
        assert!(steps.is_empty());
    }

    #[test]
    fn unary() {
        assert_eq!(simplified("+3"), Expr::number(3.0));
        assert_eq!(simplified("-(3)"), Expr::number(-3.0));
        assert_eq!(simplified("-2x"), product(-2.0, Expr::variable("x")));
        assert_eq!(
            simplified("-(1/2)x"),
            Expr::binary(Expr::fraction(-1.0, 2.0), BinOpKind::Mul, Expr::variable("x")),
        );
        assert_eq!(simplified("--4"), Expr::number(4.0));
        assert_eq!(
            simplified("-(2x + 3)"),
            Expr::binary(product(-2.0, Expr::variable("x")), BinOpKind::Sub, Expr::number(3.0)),
        );
    }

    #[test]
    fn idempotent() {
        let sources = ["3 + 5", "9/4", "2x + 2x", "2/3 + 5/2", "-(2x - 3)", "2x + 2e", "x^2 + 1", "\\sqrt(4) * 2"];
        for source in sources {
            let once = simplified(source);
            let twice = simplify(&once).unwrap();
            assert_eq!(once, twice, "{}", source);
        }
    }

    #[test]
    fn steps_are_recorded_in_order() {
        let (result, steps) = simplify_with_steps(&parse("2x + 3x")).unwrap();
        assert_eq!(result, product(5.0, Expr::variable("x")));
        assert_eq!(steps, vec![Step::CombineLikeTerms, Step::ConstantFold]);
    }

    #[test]
    fn simplifies_inside_calls_and_equalities() {
        assert_eq!(
            simplified("\\sqrt(2 + 2) = x + x"),
            Expr::assign(
                Expr::call(symba_parser::parser::ast::Func::Sqrt, vec![Expr::number(4.0)]),
                product(2.0, Expr::variable("x")),
            ),
        );

        let Expr::Assign(assign) = simplified("2x = 4 + 4") else { panic!("expected equality") };
        assert_eq!(*assign.rhs, Expr::number(8.0));
        assert_eq!(assign.side, VariableSide::Left);
    }

    #[test]
    fn pass_cap_returns_partial_result() {
        let options = SimplifyOptionsBuilder::new().max_passes(1).build();
        let result = simplify_with(&parse("2x - 2x"), options, &mut ()).unwrap();
        assert_eq!(
            result,
            Expr::binary(
                Expr::binary(Expr::number(2.0), BinOpKind::Sub, Expr::number(2.0)),
                BinOpKind::Mul,
                Expr::variable("x"),
            ),
        );
    }

    #[test]
    fn deep_trees_are_rejected() {
        let mut expr = Expr::number(1.0);
        for _ in 0..crate::error::MAX_RECURSION_DEPTH {
            expr = Expr::unary(UnaryOpKind::Plus, expr);
        }
        let err = simplify(&expr).unwrap_err();
        assert!(err.is::<crate::error::MaxDepthExceeded>());
    }
}
