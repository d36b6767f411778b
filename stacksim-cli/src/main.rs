//! Stacksim CLI — assemble, check, and run program listings.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/assembly error
//! - 2: Load validation error
//! - 3: Runtime error

mod commands;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "check" => commands::check(&args[2..]),
        "format" => commands::format(&args[2..]),
        "demo" => commands::demo(),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: stacksim <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <file> [--memory N]     Assemble, load, and execute a listing");
    eprintln!("  check <file> [--memory N]   Assemble and load without executing");
    eprintln!("  format <file>               Print the canonical form of a listing");
    eprintln!("  demo                        Run the bundled sample program");
}
