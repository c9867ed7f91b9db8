mod error;

use env_logger::Env;
use error::Error;
use log::{debug, info};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}, process::ExitCode};
use symba_compute::{
    numerical::{eval::Eval, value::Value},
    symbolic::{simplify_with_steps, solve},
};
use symba_parser::parser::{ast::Expr, Parser};

/// What to do with a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Evaluate the expression.
    Eval,

    /// Simplify the expression.
    Simplify,

    /// Solve the equation for its variable.
    Solve,

    /// Print the expression tree.
    Tree,
}

impl Command {
    /// Splits the command word off the start of the line, returning the command and the byte
    /// offset of the expression that follows it. Lines without a command word are evaluated.
    fn split(line: &str) -> (Self, usize) {
        let word = line.split_whitespace().next().unwrap_or_default();
        let command = match word {
            "simplify" => Self::Simplify,
            "solve" => Self::Solve,
            "tree" => Self::Tree,
            _ => return (Self::Eval, 0),
        };

        let start = line.len() - line.trim_start().len();
        (command, start + word.len())
    }
}

/// Parses the expression, shifting the spans of any error to match the full line.
fn parse(line: &str, offset: usize) -> Result<Expr, symba_error::Error> {
    Parser::new(&line[offset..]).try_parse_full::<Expr>().map_err(|mut err| {
        for span in &mut err.spans {
            *span = span.start + offset..span.end + offset;
        }
        err
    })
}

/// Runs one line of input, returning the text to print.
fn run(line: &str) -> Result<String, symba_error::Error> {
    let (command, offset) = Command::split(line);
    let expr = parse(line, offset)?;
    let whole = offset..line.len();

    match command {
        Command::Eval => {
            let value = expr.eval_default().map_err(|err| err.or_span(whole))?;
            Ok(value.to_string())
        },
        Command::Simplify => {
            let (simplified, steps) = simplify_with_steps(&expr).map_err(|err| err.or_span(whole))?;
            for step in &steps {
                debug!("applied rule: {}", step);
            }
            info!("simplified in {} step(s)", steps.len());
            Ok(simplified.to_string())
        },
        Command::Solve => {
            let solution = solve(&expr).map_err(|err| err.or_span(whole))?;
            let Expr::Assign(assign) = &solution else {
                return Ok(solution.to_string());
            };

            // show the numeric value too, if the right side is not a plain number already
            match assign.rhs.eval_default() {
                Ok(Value::Scalar(value)) if assign.rhs.as_number().is_none() => {
                    Ok(format!("{}\n{} ≈ {}", solution, assign.lhs, Value::Scalar(value)))
                },
                _ => Ok(solution.to_string()),
            }
        },
        Command::Tree => Ok(format!("{:#?}", expr)),
    }
}

/// Runs every non-empty line of the input, reporting errors as they occur.
fn execute(input: &str) -> bool {
    let mut ok = true;
    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        match run(line) {
            Ok(output) => println!("{}", output),
            Err(err) => {
                Error::from(err).report_to_stderr(line);
                ok = false;
            },
        }
    }
    ok
}

/// Reads the whole file with the given name.
fn read_file(filename: &str) -> Result<String, Error> {
    let mut file = BufReader::new(File::open(filename)?);
    let mut input = String::new();
    file.read_to_string(&mut input)?;
    Ok(input)
}

/// Reads and runs lines until the user quits.
fn repl() -> Result<(), Error> {
    let mut rl = DefaultEditor::new()?;

    fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;
        execute(&input);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl) {
            return match err {
                ReadlineError::Eof | ReadlineError::Interrupted => Ok(()),
                err => Err(err.into()),
            };
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args();
    args.next();

    let result = if let Some(filename) = args.next() {
        // run source file
        read_file(&filename).map(|input| execute(&input))
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)
            .map(|_| execute(&input))
            .map_err(Error::from)
    } else {
        // run the repl / interactive mode
        repl().map(|_| true)
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            err.report_to_stderr("");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn split_command() {
        assert_eq!(Command::split("simplify 2x + 3x"), (Command::Simplify, 8));
        assert_eq!(Command::split("  solve x = 1"), (Command::Solve, 7));
        assert_eq!(Command::split("tree 1"), (Command::Tree, 4));
        assert_eq!(Command::split("2 + 2"), (Command::Eval, 0));
        assert_eq!(Command::split("simplifyx"), (Command::Eval, 0));
    }

    #[test]
    fn run_commands() {
        assert_eq!(run("1 + 2").unwrap(), "3");
        assert_eq!(run("simplify 2x + 3x").unwrap(), "5 * x");
        assert_eq!(run("solve 2x + 3 = 7").unwrap(), "x = 2");
        assert_eq!(run("solve x^2 = 9").unwrap(), "x = 9 ^ (1 / 2)\nx ≈ 3");
    }

    #[test]
    fn errors_point_into_the_line() {
        let err = run("simplify 2x + y").unwrap_err();
        assert_eq!(err.spans, vec![14..15]);

        let err = run("solve 2x").unwrap_err();
        assert_eq!(err.spans, vec![5..8]);
    }
}
