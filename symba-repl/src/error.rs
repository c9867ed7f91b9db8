use log::error;
use rustyline::error::ReadlineError;
use std::io;

/// Utility enum to package errors that can occur while reading and running input.
#[derive(Debug)]
pub enum Error {
    /// An error in the expression itself, from parsing, simplifying, solving, or evaluating it.
    Expr(symba_error::Error),

    /// The input could not be read.
    Io(io::Error),

    /// The line editor failed.
    Readline(ReadlineError),
}

impl Error {
    /// Report this error to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Expr(err) => {
                if let Err(io_err) = err.report_to_stderr("input", input) {
                    error!("could not print the error report: {}", io_err);
                }
            },
            Self::Io(err) => eprintln!("{}", err),
            Self::Readline(err) => eprintln!("{}", err),
        }
    }
}

impl From<symba_error::Error> for Error {
    fn from(err: symba_error::Error) -> Self {
        Self::Expr(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}
