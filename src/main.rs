use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
    process::ExitCode,
};

use clap::Parser;
use lambd::{
    error::Error,
    interpreter::{
        evaluator::core::{
            DEFAULT_MAX_CALL_DEPTH, DEFAULT_MAX_NESTING_DEPTH, Interpreter, InterpreterConfig,
        },
        parser::core::Parser as SourceParser,
        value::core::Value,
    },
    run,
};
use tracing::{Level, warn};

/// Extension expected for script files.
const SCRIPT_EXTENSION: &str = "lambda";

/// lambd evaluates programs written in a small language of integers, booleans,
/// named functions and immediately applied lambdas.
///
/// Without a script, lines are read from standard input and evaluated one at a
/// time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lambd to read the script from the file named by CONTENTS.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints each parsed statement and the environment after it runs.
    #[arg(short, long)]
    debug: bool,

    /// Maximum number of nested function and lambda applications.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_depth: usize,

    /// Maximum number of nested expression evaluations, across calls.
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_nesting: usize,

    /// Script text, or a path when `--file` is given.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .init();

    let mut interpreter =
        Interpreter::with_config(InterpreterConfig { max_call_depth:    args.max_depth,
                                                     max_nesting_depth: args.max_nesting, });

    let Some(contents) = args.contents else {
        return repl(&mut interpreter, args.debug);
    };

    let script = if args.file {
        if Path::new(&contents).extension()
                               .is_none_or(|ext| ext != SCRIPT_EXTENSION)
        {
            warn!(file = %contents, "expected a .{SCRIPT_EXTENSION} file");
        }
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    match execute(&script, &mut interpreter, args.debug) {
        Ok(value) => {
            if let Some(v) = value {
                println!("{v}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Reads standard input line by line, evaluating each line against one
/// interpreter. Errors are reported and the session continues.
fn repl(interpreter: &mut Interpreter, debug: bool) -> ExitCode {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read from standard input: {e}");
                return ExitCode::FAILURE;
            },
        }

        match execute(&line, interpreter, debug) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => eprintln!("{e}"),
        }
    }
}

/// Runs `source`, optionally echoing each statement and the environment.
fn execute(source: &str, interpreter: &mut Interpreter, debug: bool) -> Result<Option<Value>, Error> {
    if !debug {
        return run(source, interpreter);
    }

    let program = SourceParser::from_source(source).parse()?;
    for statement in &program {
        println!("AST: {statement}");
        let value = interpreter.eval(statement)?;
        println!("Environment: {}", interpreter.environment());
        if value.is_some() {
            return Ok(value);
        }
    }
    Ok(None)
}
