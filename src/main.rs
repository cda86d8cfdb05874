use std::{fs, process::ExitCode};

use clap::Parser;
use pisc::{
    error::PiscError,
    interpreter::{evaluator::core::Interpreter, value::Value},
    tokenize,
};
use serde_json::json;

/// pisc runs scripts written in Pisc, a small imperative scripting language,
/// and prints every value passed to `print`, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pisc to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream as JSON `[kind, text]` pairs instead of running.
    #[arg(long)]
    tokens: bool,

    /// Prints the syntax tree as JSON instead of running.
    #[arg(long)]
    ast: bool,

    /// Prints the syntax tree as a Graphviz graph instead of running.
    #[arg(long)]
    dot: bool,

    /// Reports output or errors as a single JSON object.
    #[arg(long)]
    json: bool,

    contents: String,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist? ({e})",
                          &args.contents);
                return ExitCode::from(2);
            },
        }
    } else {
        args.contents.clone()
    };

    match execute(&args, &script) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&args, &e);
            ExitCode::FAILURE
        },
    }
}

fn execute(args: &Args, script: &str) -> Result<(), PiscError> {
    if args.tokens {
        let tokens = tokenize(script).into_result().map_err(PiscError::Lex)?;
        println!("{}", json!(tokens));
        return Ok(());
    }

    let program = pisc::parse(script)?;

    if args.ast {
        println!("{:#}", program.to_json()?);
        return Ok(());
    }
    if args.dot {
        print!("{}", pisc::dot::render(&program));
        return Ok(());
    }

    if args.json {
        println!("{}", pisc::run_to_json(&program)?);
        return Ok(());
    }

    let mut interpreter = Interpreter::new();
    match interpreter.run(&program) {
        Ok(output) => {
            print_values(&output);
            Ok(())
        },
        Err(e) => {
            print_values(interpreter.output());
            Err(e.into())
        },
    }
}

fn print_values(output: &[Value]) {
    for value in output {
        println!("{value}");
    }
}

fn report(args: &Args, error: &PiscError) {
    if args.json {
        println!("{}", json!({ "errors": error.messages() }));
    } else {
        eprintln!("{error}");
    }
}
