//! `psll ast`: show the lowered ternary tree of a source file.

use std::path::Path;

use psll_syntax::{parse_program, FrontendError};

use super::read_file;

/// One top-level node per line, in the bracketed form the lowering produced.
pub fn format_ast(source: &str) -> Result<String, FrontendError> {
    let program = parse_program(source)?;
    let lines: Vec<String> = program.iter().map(ToString::to_string).collect();
    Ok(lines.join("\n"))
}

/// Print the lowered program of `path`, exiting on error.
pub fn print_ast(path: &Path) {
    let source = read_file(path);
    match format_ast(&source) {
        Ok(ast) => println!("{ast}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
