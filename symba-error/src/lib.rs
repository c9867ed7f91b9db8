//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

// lets `#[derive(ErrorKind)]` refer to this crate by name from inside it
extern crate self as symba_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::Rgb(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error as a [`dyn Any`](Any), so that callers can downcast to the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
///
/// Errors produced while manipulating an expression tree do not know where in the source code the
/// offending node came from, and are created with no spans. Use [`Error::or_span`] to point them
/// at the input as a whole before reporting them.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error with no associated source code.
    pub fn unspanned(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// If this error has no spans, points it at the given span instead.
    pub fn or_span(mut self, span: Range<usize>) -> Self {
        if self.spans.is_empty() {
            self.spans.push(span);
        }
        self
    }

    /// Returns a reference to the concrete error kind, if it is of type `T`.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Returns true if the concrete error kind is of type `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        let report = self.build_report(src_id);
        report.eprint((src_id, Source::from(input)))
    }
}

impl<T: ErrorKind + 'static> From<T> for Error {
    fn from(kind: T) -> Self {
        Self::unspanned(kind)
    }
}

#[cfg(test)]
mod tests {
    use symba_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("`{}` went wrong", name),
        labels = ["here"],
        help = "try something else",
    )]
    struct SomethingWrong {
        name: String,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "no fields")]
    struct NoFields;

    #[test]
    fn downcast_kind() {
        let err = Error::from(SomethingWrong { name: "x".to_string() });
        assert!(err.is::<SomethingWrong>());
        assert!(!err.is::<NoFields>());
        assert_eq!(err.downcast_ref::<SomethingWrong>().map(|k| k.name.as_str()), Some("x"));
    }

    #[test]
    fn attach_span() {
        let err = Error::unspanned(NoFields).or_span(0..5);
        assert_eq!(err.spans, vec![0..5]);

        // existing spans are kept
        let err = Error::new(vec![1..2], NoFields).or_span(0..5);
        assert_eq!(err.spans, vec![1..2]);
    }

    #[test]
    fn report_renders() {
        let err = Error::new(vec![0..3], SomethingWrong { name: "abc".to_string() });
        let mut out = Vec::new();
        err.build_report("input")
            .write(("input", Source::from("abc")), &mut out)
            .unwrap();
        let rendered = String::from_utf8_lossy(&out);
        assert!(rendered.contains("`abc` went wrong"));
        assert!(rendered.contains("here"));
        assert!(rendered.contains("try something else"));
    }

    #[test]
    fn report_without_spans_or_help() {
        let mut out = Vec::new();
        Error::unspanned(NoFields)
            .build_report("input")
            .write(("input", Source::from("abc")), &mut out)
            .unwrap();
        let rendered = String::from_utf8_lossy(&out);
        assert!(rendered.contains("no fields"));
        assert!(!rendered.contains("Help"));
    }
}
