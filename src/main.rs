use std::fs;

use clap::Parser;
use linecalc::{
    config::{Config, DEFAULT_MAX_CALL_DEPTH, DEFAULT_MAX_NESTING},
    interpreter::{evaluator::core::Context, output::Stdout},
    repl::Repl,
    run_source,
};

/// linecalc runs scripts of typed numeric variables, single-expression
/// functions and print statements, one statement per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells linecalc to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Discard statements that use undeclared variables or functions instead
    /// of substituting 0.
    #[arg(long)]
    strict: bool,

    /// Maximum nesting depth of user-defined function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_depth: usize,

    /// Maximum nesting depth of a single expression.
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING)]
    max_nesting: usize,

    /// Script text, or a path with `--file`. Starts an interactive session
    /// when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut config = Config::default().with_max_call_depth(args.max_depth)
                                      .with_max_nesting(args.max_nesting);
    if args.strict {
        config = config.strict();
    }

    let Some(contents) = args.contents else {
        let result = Repl::new(config).and_then(|mut repl| repl.run());
        if let Err(e) = result {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let mut context = Context::with_output(Stdout, config);
    run_source(&script, &mut context);
}
