use std::{fs, process::ExitCode};

use clap::Parser;
use exprcalc::{Variables, builtin, parse};
use tracing::{Level, debug, warn};

/// exprcalc evaluates arithmetic formulas. Variables assigned by one formula
/// stay visible to the formulas that follow it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat every argument as a file containing one formula per line.
    #[arg(short, long)]
    file: bool,

    /// Print only the value of the last formula.
    #[arg(short, long)]
    quiet: bool,

    /// Log every parsed tree to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Formulas, or files when `--file` is given.
    #[arg(required = true)]
    contents: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();

    let formulas = if args.file {
        let mut formulas = Vec::new();
        for path in &args.contents {
            let Ok(script) = fs::read_to_string(path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            };
            formulas.extend(script.lines()
                                  .map(str::trim)
                                  .filter(|line| !line.is_empty())
                                  .map(str::to_string));
        }
        formulas
    } else {
        args.contents
    };

    let mut variables = Variables::new();
    let functions = builtin::functions();
    let mut last = None;

    for formula in &formulas {
        let expr = match parse(formula, &mut variables, &functions) {
            Ok(expr) => expr,
            Err(e) => {
                warn!(formula = formula.as_str(), error = %e, "rejected formula");
                eprintln!("{formula}: {e}");
                return ExitCode::FAILURE;
            },
        };
        debug!(formula = formula.as_str(), tree = %expr, "parsed");

        let value = expr.eval();
        debug!(value, "evaluated");
        if !args.quiet {
            println!("{value}");
        }
        last = Some(value);
    }

    if args.quiet && let Some(value) = last {
        println!("{value}");
    }

    ExitCode::SUCCESS
}
