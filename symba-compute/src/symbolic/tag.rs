//! Computes which symbolic atoms occur in each subtree of an expression.

use symba_parser::parser::ast::{Expr, Tags, VariableSide};

/// Tags every node of the expression with the union of the tags of its children, returning the
/// tags of the root. Equalities additionally record which side contains the variable.
///
/// Tags are not maintained when a tree is rewritten, so this must be called again after any
/// structural change before the tags are read.
pub fn tag(expr: &mut Expr) -> Tags {
    match expr {
        Expr::Literal(literal) => literal.tags(),
        Expr::Binary(binary) => {
            binary.tags = tag(&mut binary.lhs) | tag(&mut binary.rhs);
            binary.tags
        },
        Expr::Unary(unary) => {
            unary.tags = tag(&mut unary.operand);
            unary.tags
        },
        Expr::Call(call) => {
            call.tags = call.args.iter_mut().fold(Tags::empty(), |tags, arg| tags | tag(arg));
            call.tags
        },
        Expr::Assign(assign) => {
            let lhs = tag(&mut assign.lhs);
            let rhs = tag(&mut assign.rhs);
            assign.tags = lhs | rhs;
            assign.side = VariableSide::from_tags(lhs, rhs);
            assign.tags
        },
    }
}

/// Recomputes the tags of a single node from the tags its children already hold.
pub(crate) fn tag_shallow(expr: &mut Expr) {
    match expr {
        Expr::Literal(_) => {},
        Expr::Binary(binary) => binary.tags = binary.lhs.tags() | binary.rhs.tags(),
        Expr::Unary(unary) => unary.tags = unary.operand.tags(),
        Expr::Call(call) => {
            call.tags = call.args.iter().fold(Tags::empty(), |tags, arg| tags | arg.tags());
        },
        Expr::Assign(assign) => {
            let (lhs, rhs) = (assign.lhs.tags(), assign.rhs.tags());
            assign.tags = lhs | rhs;
            assign.side = VariableSide::from_tags(lhs, rhs);
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use symba_parser::parser::Parser;

    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    #[test]
    fn union_of_both_operands() {
        let mut expr = parse("2x + pi");
        assert_eq!(tag(&mut expr), Tags::VARIABLE | Tags::PI);

        let Expr::Binary(binary) = &expr else { panic!("expected binary") };
        assert_eq!(binary.lhs.tags(), Tags::VARIABLE);
        assert_eq!(binary.rhs.tags(), Tags::PI);
    }

    #[test]
    fn numbers_are_untagged() {
        let mut expr = parse("3 * (4 - 1)");
        assert_eq!(tag(&mut expr), Tags::empty());
    }

    #[test]
    fn calls_and_unary() {
        let mut expr = parse("-\\sqrt(e) + [pi, 2x]");
        assert_eq!(tag(&mut expr), Tags::all());
    }

    #[test]
    fn variable_side() {
        let cases = [
            ("2x + 1 = 5", VariableSide::Left),
            ("5 = 2x + 1", VariableSide::Right),
            ("x = 2x", VariableSide::Both),
            ("e = pi", VariableSide::Neither),
        ];

        for (source, side) in cases {
            let mut expr = parse(source);
            tag(&mut expr);
            let Expr::Assign(assign) = &expr else { panic!("expected equality") };
            assert_eq!(assign.side, side, "{}", source);
        }
    }

    #[test]
    fn shallow_retag() {
        let mut expr = parse("2 + 3");
        tag(&mut expr);
        if let Expr::Binary(binary) = &mut expr {
            *binary.rhs = Expr::variable("x");
        }
        tag_shallow(&mut expr);
        assert_eq!(expr.tags(), Tags::VARIABLE);
    }
}
