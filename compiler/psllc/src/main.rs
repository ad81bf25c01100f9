//! psll Compiler CLI
//!
//! Compiles Lisp-like psll source into Pyramid Scheme.

use std::path::Path;

use psllc::commands::{compile_file, parse_compile_options, print_ast};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "compile" => {
            let options = parse_compile_options(&args[2..]);
            let Some(input) = options.input.as_deref() else {
                eprintln!("error: missing input file");
                eprintln!("Usage: psll compile <file.psll> [options]");
                eprintln!();
                print_compile_options();
                std::process::exit(1);
            };

            psllc::init_tracing(options.verbose);
            if let Err(err) = compile_file(input, &options) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        "ast" => {
            if args.len() < 3 {
                eprintln!("Usage: psll ast <file.psll>");
                std::process::exit(1);
            }
            psllc::init_tracing(false);
            print_ast(Path::new(&args[2]));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("psll {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("psll: Lisp-like source to Pyramid Scheme");
    println!();
    println!("Usage: psll <command> [options]");
    println!();
    println!("Commands:");
    println!("  compile <file.psll>  Compile to Pyramid Scheme");
    println!("  ast <file.psll>      Show the lowered ternary tree");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    print_compile_options();
    println!();
    println!("Examples:");
    println!("  psll compile hello.psll                     # Print to stdout");
    println!("  psll compile hello.psll -o                  # Write hello.pyra");
    println!("  psll compile hello.psll -o out.pyra -f      # Overwrite out.pyra");
    println!("  psll compile hello.psll --optimise=greedy");
    println!("  psll compile hello.psll -co --max-depth=4 --parallel");
    println!("  RUST_LOG=psll_opt=debug psll compile hello.psll -go");
}

fn print_compile_options() {
    println!("Compile options:");
    println!("  -o [path]             Output file (default: <input>.pyra)");
    println!("  --output=<path>       Output file");
    println!("  -f, --force           Overwrite an existing output file");
    println!("  --optimise=<name>     Optimisation: none, greedy, considerate");
    println!("  -go, --greedy         Same as --optimise=greedy");
    println!("  -co, --considerate    Same as --optimise=considerate");
    println!("  --max-iter=<n>        Maximum optimisation rounds (default: 1000)");
    println!("  --max-depth=<n>       Considerate wrapper depth (default: 10)");
    println!("  --parallel            Evaluate considerate candidates in parallel");
    println!("  -v, --verbose         Print limits and statistics, trace to stderr");
}
