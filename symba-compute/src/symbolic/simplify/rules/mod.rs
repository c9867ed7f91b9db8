//! The table of simplification rules.
//!
//! Rules are grouped by the kind of node they rewrite and by the operation that node applies.
//! Within a group, the first rule that applies wins and no other rule is tried. A node whose
//! group has no applicable rule is left as is.

pub mod add;
pub mod multiply;
pub mod unary;

use symba_parser::parser::{
    ast::Expr,
    token::op::{BinOpKind, UnaryOpKind},
};
use super::step::Step;

/// A single rewrite rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// The step reported when this rule changes a node.
    pub step: Step,

    /// Returns true if the rule applies to the given node. This must not have side effects.
    pub applies: fn(&Expr) -> bool,

    /// Rewrites the given node. This is only called if [`Rule::applies`] returned true for the
    /// same node.
    pub rewrite: fn(&Expr) -> Expr,
}

/// Returns the ordered group of rules that can rewrite the given node.
pub fn rules_for(expr: &Expr) -> &'static [Rule] {
    match expr {
        Expr::Binary(binary) => match binary.op {
            BinOpKind::Add | BinOpKind::Sub => add::RULES,
            BinOpKind::Mul => multiply::MUL_RULES,
            BinOpKind::Div => multiply::DIV_RULES,
            BinOpKind::Mod | BinOpKind::Exp => &[],
        },
        Expr::Unary(unary) => match unary.op {
            UnaryOpKind::Plus => unary::PLUS_RULES,
            UnaryOpKind::Minus => unary::MINUS_RULES,
        },
        Expr::Literal(_) | Expr::Call(_) | Expr::Assign(_) => &[],
    }
}

/// Returns the first rule in the node's group that applies to it, if any.
pub fn find_rule(expr: &Expr) -> Option<&'static Rule> {
    rules_for(expr).iter().find(|rule| (rule.applies)(expr))
}

/// Applies `f` to the operator and operands of a binary expression. Returns `default` for any
/// other kind of node.
pub(crate) fn with_binary<T>(
    expr: &Expr,
    default: T,
    f: impl FnOnce(BinOpKind, &Expr, &Expr) -> T,
) -> T {
    match expr {
        Expr::Binary(binary) => f(binary.op, &binary.lhs, &binary.rhs),
        _ => default,
    }
}

/// Applies `f` to the operand of a unary expression. Returns `default` for any other kind of
/// node.
pub(crate) fn with_unary<T>(expr: &Expr, default: T, f: impl FnOnce(&Expr) -> T) -> T {
    match expr {
        Expr::Unary(unary) => f(&unary.operand),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::tag::tag;
    use symba_parser::parser::Parser;

    fn parse(source: &str) -> Expr {
        let mut expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
        tag(&mut expr);
        expr
    }

    #[test]
    fn groups_by_kind_and_operation() {
        assert_eq!(rules_for(&parse("1 + 2")).len(), add::RULES.len());
        assert_eq!(rules_for(&parse("1 - 2")).len(), add::RULES.len());
        assert_eq!(rules_for(&parse("1 / 2")).len(), multiply::DIV_RULES.len());
        assert_eq!(rules_for(&parse("-2")).len(), unary::MINUS_RULES.len());
        assert!(rules_for(&parse("2 ^ 3")).is_empty());
        assert!(rules_for(&parse("\\sqrt(4)")).is_empty());
    }

    #[test]
    fn first_match_wins() {
        let rule = find_rule(&parse("3 + 5")).unwrap();
        assert_eq!(rule.step, Step::ConstantFold);

        let rule = find_rule(&parse("2x + 3x")).unwrap();
        assert_eq!(rule.step, Step::CombineLikeTerms);

        assert!(find_rule(&parse("2x + 2e")).is_none());
    }
}
