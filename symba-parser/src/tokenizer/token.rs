use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Names are tokenized one letter at a time, except for the function names and `pi`, so that
/// implicit multiplication of single-letter symbols (`ex`, `2pix`) falls out of tokenization.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("%")]
    Mod,

    #[token("^")]
    Exp,

    #[token("!")]
    Factorial,

    #[token("=")]
    Assign,

    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("[")]
    OpenSquare,

    #[token("]")]
    CloseSquare,

    #[regex(r"\\?sqrt")]
    Sqrt,

    #[regex(r"\\?abs")]
    Abs,

    #[regex(r"\\?sin")]
    Sin,

    #[regex(r"\\?cos")]
    Cos,

    #[regex(r"\\?tan")]
    Tan,

    #[regex(r"\\?ln", priority = 5)]
    Ln,

    #[regex(r"\\?pi", priority = 5)]
    Pi,

    #[token("e", priority = 3)]
    E,

    /// A backslash followed by a word that is not a known function or constant.
    #[regex(r"\\[a-zA-Z]+")]
    Command,

    #[regex(r"[a-zA-Z]")]
    Letter,

    #[regex(r"[0-9]+(\.[0-9]*)?|\.[0-9]+")]
    Number,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if the token names a function.
    pub fn is_function(self) -> bool {
        matches!(
            self,
            TokenKind::Sqrt | TokenKind::Abs | TokenKind::Sin | TokenKind::Cos | TokenKind::Tan | TokenKind::Ln
        )
    }

    /// Returns true if the token can start an operand of implicit multiplication, such as the `x`
    /// in `2x` or the `(` in `3(x + 1)`.
    pub fn starts_implicit_factor(self) -> bool {
        self.is_function()
            || matches!(
                self,
                TokenKind::Letter | TokenKind::Number | TokenKind::E | TokenKind::Pi | TokenKind::OpenParen
            )
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
