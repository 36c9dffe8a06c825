//! Pseudo command-line interface.

use std::process::ExitCode;

use pseudo_eval::stdin_handler;
use pseudoc::commands::{lex_file, parse_file, repl, run_file, stderr_emitter};
use pseudoc::{init_tracing, Command, Options};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let options = match Options::parse(&args, no_color) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let ok = match &options.command {
        Command::Repl => {
            let input = stdin_handler();
            let mut interp = options.interpreter().input_handler(input.clone()).build();
            let mut emitter = stderr_emitter(options.color);
            repl(&mut interp, &input, &mut std::io::stdout(), &mut emitter);
            true
        }
        Command::Run(path) => run_file(path, &options),
        Command::Lex(path) => lex_file(path, &options),
        Command::Parse(path) => parse_file(path, &options),
        Command::Help => {
            print_usage();
            true
        }
        Command::Version => {
            println!("Pseudo {}", env!("CARGO_PKG_VERSION"));
            true
        }
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_usage() {
    println!("Pseudo interpreter");
    println!();
    println!("Usage: pseudo [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none)               Start the interactive prompt");
    println!("  run <file.psd>       Run a Pseudo program");
    println!("  <file.psd>           Same as run");
    println!("  lex <file.psd>       Tokenize and display tokens");
    println!("  parse <file.psd>     Parse and display the syntax tree");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --no-color           Disable colored error output (also NO_COLOR)");
    println!("  --max-depth=<n>      Maximum nested function calls (default 1000)");
    println!("  --grid=<rows>x<cols> Enable the robot built-ins on a grid of this size");
    println!();
    println!("Environment:");
    println!("  PSEUDO_LOG           Tracing filter, e.g. PSEUDO_LOG=pseudo_eval=debug");
}
