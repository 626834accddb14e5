use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use stackcalc::{
    compile,
    error::CalcResult,
    interpreter::{
        evaluator::evaluate,
        lexer::{Token, format_tokens, parse_postfix},
        value::Number,
    },
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// stackcalc evaluates arithmetic expressions with integers, for example
/// `a / (b + c) * d - e`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stackcalc to read expressions, one per line, from a file.
    #[arg(short, long)]
    file: bool,

    /// Also prints every expression in postfix notation.
    #[arg(short, long)]
    postfix: bool,

    /// Reads input as postfix notation, such as `2 1 - 4 *`.
    #[arg(short, long)]
    rpn: bool,

    /// Suppresses the banner and the prompt in interactive mode.
    #[arg(short, long)]
    quiet: bool,

    /// An expression, or a path when `--file` is given. Without it,
    /// expressions are read from standard input until an empty line. An
    /// empty expression evaluates nothing.
    contents: Option<String>,
}

const BANNER: &str = "\t\t\tCalculator\n\nEvaluates arithmetic expressions with integers, for example:\n\n\t\t    a / (b + c) * d - e\n";
const PROMPT: &str = "\nEnter an expression:";

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                  EnvFilter::new("warn")
                                              }))
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    match &args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            let failures = script.lines()
                                 .filter(|line| !line.trim().is_empty())
                                 .filter(|line| !report(&args, line))
                                 .count();
            info!(failures, "finished file");
            if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        },
        Some(expression) if expression.trim().is_empty() => {
            debug!("empty expression, nothing to evaluate");
            ExitCode::SUCCESS
        },
        Some(expression) => {
            if report(&args, expression) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        },
        None => match read_loop(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                ExitCode::FAILURE
            },
        },
    }
}

/// Prompts for expressions until an empty line or the end of input.
fn read_loop(args: &Args) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if !args.quiet {
        println!("{BANNER}");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if !args.quiet {
            println!("{PROMPT}");
            stdout.flush()?;
        }
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            break;
        }
        report(args, &line);
    }

    Ok(())
}

/// Evaluates one line and prints the outcome. Returns whether it succeeded.
fn report(args: &Args, line: &str) -> bool {
    match run(args, line) {
        Ok((postfix, result)) => {
            if args.postfix {
                println!("postfix: {}", format_tokens(&postfix));
            }
            println!("= {result}");
            true
        },
        Err(e) => {
            debug!(input = line, kind = %e.kind(), "evaluation failed");
            eprintln!("{e}");
            false
        },
    }
}

fn run(args: &Args, line: &str) -> CalcResult<(Vec<Token>, Number)> {
    let postfix = if args.rpn { parse_postfix(line)? } else { compile(line)? };
    let result = evaluate(&postfix)?;
    Ok((postfix, result))
}
