use std::{fs, process::ExitCode};

use clap::Parser;
use keypad_calc::{
    evaluate_expression,
    session::{Calculator, Key, format_result},
};

/// calc evaluates arithmetic the way a keypad calculator does: `+ - * /`,
/// parentheses, unary minus and `x` as a multiplication sign.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a file path and evaluate each non-blank line.
    #[arg(short, long, conflicts_with = "keys")]
    file: bool,

    /// Print results unformatted instead of with two decimals and thousands
    /// separators.
    #[arg(short, long)]
    raw: bool,

    /// Treat the contents as space-separated key presses, e.g. `7 x 6 =`.
    /// `DEL` deletes the last input and `AC` clears.
    #[arg(short, long)]
    keys: bool,

    /// The expression, file path or key presses.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn render(value: f64, raw: bool) -> String {
    if raw { value.to_string() } else { format_result(value) }
}

fn run_expressions(source: &str, raw: bool) -> ExitCode {
    let mut status = ExitCode::SUCCESS;
    for line in source.lines().filter(|l| !l.trim().is_empty()) {
        match evaluate_expression(line) {
            Ok(value) => println!("{}", render(value, raw)),
            Err(e) => {
                eprintln!("{e}");
                status = ExitCode::FAILURE;
            },
        }
    }
    status
}

fn run_keys(presses: &str, raw: bool) -> ExitCode {
    let mut calc = Calculator::new();
    for label in presses.split_whitespace() {
        match label.parse::<Key>() {
            Ok(key) => calc.press(key),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }

    let result = calc.result();
    if let Some(kind) = result.error {
        eprintln!("Error: {kind:?}");
        return ExitCode::FAILURE;
    }
    match result.value {
        Some(value) => println!("{}", render(value, raw)),
        None => println!("{}", calc.equation()),
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.keys {
        return run_keys(&args.contents, args.raw);
    }

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    run_expressions(&source, args.raw)
}
