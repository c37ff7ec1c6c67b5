use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tinyspirit::Parser as _;
use tinyspirit::calc::Calculator;
use tinyspirit::text::ch;
use tinyspirit::{Cursor, balanced};

const DEMO_EXPRESSIONS: [&str; 2] = [" 12 + 24 * 4 - 7 * 8 ", "12 + 24 * ( 4 + 7 ) / 8"];
const DEMO_SPAN: &str = "< 12 + 24 * ( 4 + 7 ) / 8> abc";

#[derive(Parser)]
#[command(name = "calc")]
#[command(about = "Evaluate arithmetic expressions, echoing each token as it is parsed")]
struct Args {
    /// Expressions to evaluate (defaults to two demonstration expressions)
    #[arg(value_name = "EXPR")]
    expressions: Vec<String>,

    /// Evaluate the whole contents of a file as one expression
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Only print the result of each expression
    #[arg(long)]
    quiet: bool,

    /// Print the leading balanced `<...>` span of each input instead of evaluating it
    #[arg(long)]
    span: bool,
}

/// Balanced `<...>` span at the start of `input`, nested pairs included
fn leading_span(input: &str) -> Option<&str> {
    balanced(ch('<'), ch('>'))
        .parse(Cursor::new(input))
        .ok()
        .map(|(span, _)| span)
}

/// Prints each span, returning false if any input had none
fn print_spans(inputs: &[String]) -> bool {
    let mut found_all = true;
    for input in inputs {
        match leading_span(input) {
            Some(span) => println!("{}", span),
            None => {
                eprintln!("Error: {:?}: no balanced <...> span", input);
                found_all = false;
            }
        }
    }
    found_all
}

/// Logging goes to stderr and is off unless RUST_LOG is set,
/// e.g. `RUST_LOG=tinyspirit=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut inputs = args.expressions;
    if let Some(path) = &args.file {
        match fs::read_to_string(path) {
            Ok(content) => inputs.push(content),
            Err(e) => {
                eprintln!("Error: cannot read {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        }
    }
    let demo = inputs.is_empty();

    if args.span {
        if demo {
            inputs.push(DEMO_SPAN.to_string());
        }
        return if print_spans(&inputs) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }
    if demo {
        inputs = DEMO_EXPRESSIONS.iter().map(|s| s.to_string()).collect();
    }

    let calculator = if args.quiet {
        Calculator::new()
    } else {
        Calculator::new().with_echo(|entry| print!("{} ", entry))
    };

    let mut status = ExitCode::SUCCESS;
    for input in &inputs {
        match calculator.evaluate(input) {
            Ok(value) => println!("= {}", value),
            Err(e) => {
                if !args.quiet {
                    println!();
                }
                eprintln!("Error: {:?}: {}", input, e);
                status = ExitCode::FAILURE;
            }
        }
    }

    if demo && !print_spans(&[DEMO_SPAN.to_string()]) {
        status = ExitCode::FAILURE;
    }

    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_span_of_demo_input() {
        assert_eq!(leading_span(DEMO_SPAN), Some("< 12 + 24 * ( 4 + 7 ) / 8>"));
    }

    #[test]
    fn test_leading_span_nested_and_missing() {
        assert_eq!(leading_span("<a <b> c> d"), Some("<a <b> c>"));
        assert_eq!(leading_span("<a <b>"), None);
        assert_eq!(leading_span("a <b>"), None);
    }
}
