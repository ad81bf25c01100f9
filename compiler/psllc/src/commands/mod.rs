//! Command handlers for the psll CLI.
//!
//! Each submodule implements one command. Shared helpers like `read_file`
//! live here in the module root.

mod ast;
mod compile;

pub use ast::{format_ast, print_ast};
pub use compile::{
    compile_file, compile_source, output_path, parse_compile_options, CompileError,
    CompileOptions, Compiled, OutputTarget, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITER,
    OUTPUT_EXTENSION, SOURCE_EXTENSION,
};

use std::path::Path;

/// Read a source file, exiting with a readable message on failure.
pub(crate) fn read_file(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let path = path.display();
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

/// Whether `path` ends in `.{extension}`.
pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
