use ariadne::Fmt;
use symba_attrs::ErrorKind;
use symba_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A number literal could not be read as a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number: `{}`", lexeme),
    labels = ["here"],
)]
pub struct InvalidNumber {
    /// The text of the literal.
    pub lexeme: String,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// A vector literal was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed vector",
    labels = ["this bracket is not closed"],
    help = "add a closing bracket `]` after the last component",
)]
pub struct UnclosedBracket;

/// A vector literal had no components.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty vector",
    labels = ["this vector has no components"],
    help = format!("write at least one component, as in {}", "[1, 2]".fg(EXPR)),
)]
pub struct EmptyVector;

/// A backslash command did not name a known function or constant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown function or constant `{}`", name),
    labels = ["this name"],
    help = if suggestions.is_empty() {
        format!("the known names are: {}", KNOWN_NAMES.join(", ").fg(EXPR))
    } else {
        format!("did you mean: {}", suggestions.join(", ").fg(EXPR))
    },
)]
pub struct UnknownFunction {
    /// The name that was written, without the leading backslash.
    pub name: String,

    /// Known names that are close to the written one.
    pub suggestions: Vec<&'static str>,
}

/// The functions and constants that can be written with a backslash.
pub const KNOWN_NAMES: [&str; 7] = ["sqrt", "abs", "sin", "cos", "tan", "ln", "pi"];

impl UnknownFunction {
    /// Creates the error for the given name, suggesting known names within a small edit distance
    /// of it.
    pub fn new(name: &str) -> Self {
        let suggestions = KNOWN_NAMES
            .iter()
            .copied()
            .filter(|known| levenshtein::levenshtein(known, name) <= 2)
            .collect();
        Self { name: name.to_owned(), suggestions }
    }
}

/// An expression used more than one distinct variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "only one variable is allowed per expression",
    labels = [format!("`{}` appears here, but `{}` was already used", second, first)],
    help = format!("rewrite the expression using only `{}`", first.fg(EXPR)),
)]
pub struct MultipleVariables {
    /// The variable that appeared first.
    pub first: String,

    /// The other variable.
    pub second: String,
}

/// The input was nested too deeply to parse.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "maximum nesting depth reached",
    labels = ["this expression is nested too deeply"],
    help = "try splitting the expression into smaller pieces",
)]
pub struct MaxNestingDepth;
