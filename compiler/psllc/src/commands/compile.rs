//! `psll compile`: source file to Pyramid Scheme.

use std::path::{Path, PathBuf};

use psll_build::{BuildError, CacheStats};
use psll_opt::{OptimizeError, OptimizeOptions, Optimized, Optimizer, SearchLimits, Strategy};
use psll_syntax::{parse_program, FrontendError};
use tracing::debug;

use super::{has_extension, read_file};

/// Round cap used when `--max-iter` is not given.
pub const DEFAULT_MAX_ITER: usize = 1000;
/// Wrapper depth used when `--max-depth` is not given.
pub const DEFAULT_MAX_DEPTH: usize = 10;

pub const SOURCE_EXTENSION: &str = "psll";
pub const OUTPUT_EXTENSION: &str = "pyra";

/// Where the compiled program goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    /// `-o` with no path: next to the input, with the `.pyra` extension.
    BesideInput,
    Path(PathBuf),
}

/// Options for `psll compile`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    pub input: Option<PathBuf>,
    pub output: OutputTarget,
    /// Overwrite an existing output file.
    pub force: bool,
    pub strategy: Strategy,
    pub max_iter: usize,
    pub max_depth: usize,
    pub parallel: bool,
    pub verbose: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            input: None,
            output: OutputTarget::Stdout,
            force: false,
            strategy: Strategy::None,
            max_iter: DEFAULT_MAX_ITER,
            max_depth: DEFAULT_MAX_DEPTH,
            parallel: false,
            verbose: false,
        }
    }
}

impl CompileOptions {
    /// Optimizer configuration. Fails when `max_iter` is zero.
    pub fn optimize_options(&self) -> Result<OptimizeOptions, OptimizeError> {
        let limits = SearchLimits::new(self.max_iter, self.max_depth)?;
        Ok(OptimizeOptions::new(self.strategy, limits).with_parallel(self.parallel))
    }
}

/// Anything that stops `psll compile`.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Frontend(#[from] FrontendError),

    #[error(transparent)]
    Optimize(#[from] OptimizeError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("input file '{}' does not have the .psll extension", path.display())]
    InputExtension { path: PathBuf },

    #[error("output file '{}' does not have the .pyra extension", path.display())]
    OutputExtension { path: PathBuf },

    #[error("'{}' already exists (use --force to overwrite)", path.display())]
    OutputExists { path: PathBuf },

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Parse `psll compile` arguments (everything after the command name).
///
/// Unknown values produce a warning and keep the default.
pub fn parse_compile_options(args: &[String]) -> CompileOptions {
    let mut options = CompileOptions::default();
    let mut args = args.iter().peekable();

    while let Some(arg) = args.next() {
        if arg == "-o" {
            // The path is optional: a bare -o writes next to the input.
            options.output = match args.next_if(|next| !next.starts_with('-')) {
                Some(path) => OutputTarget::Path(PathBuf::from(path)),
                None => OutputTarget::BesideInput,
            };
        } else if let Some(path) = arg.strip_prefix("--output=") {
            options.output = OutputTarget::Path(PathBuf::from(path));
        } else if arg == "-f" || arg == "--force" {
            options.force = true;
        } else if let Some(name) = arg
            .strip_prefix("--optimise=")
            .or_else(|| arg.strip_prefix("--optimize="))
        {
            if let Some(strategy) = Strategy::from_name(name) {
                options.strategy = strategy;
            } else {
                eprintln!(
                    "warning: unknown optimisation '{name}', options: none, greedy, considerate"
                );
            }
        } else if arg == "-go" || arg == "--greedy" {
            options.strategy = Strategy::Greedy;
        } else if arg == "-co" || arg == "--considerate" {
            options.strategy = Strategy::Considerate;
        } else if let Some(n) = arg.strip_prefix("--max-iter=") {
            if let Ok(n) = n.parse() {
                options.max_iter = n;
            } else {
                eprintln!("warning: invalid max-iter '{n}', using {}", options.max_iter);
            }
        } else if let Some(n) = arg.strip_prefix("--max-depth=") {
            if let Ok(n) = n.parse() {
                options.max_depth = n;
            } else {
                eprintln!("warning: invalid max-depth '{n}', using {}", options.max_depth);
            }
        } else if arg == "--parallel" {
            options.parallel = true;
        } else if arg == "-v" || arg == "--verbose" {
            options.verbose = true;
        } else if !arg.starts_with('-') && options.input.is_none() {
            options.input = Some(PathBuf::from(arg));
        } else {
            eprintln!("warning: ignoring unknown argument '{arg}'");
        }
    }

    options
}

/// A compiled program with the statistics of how it was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compiled {
    pub text: String,
    pub optimized: Optimized,
    pub cache: CacheStats,
}

/// Parse, optimise and lay out `source`.
#[tracing::instrument(level = "debug", skip_all, fields(strategy = %options.strategy))]
pub fn compile_source(source: &str, options: &OptimizeOptions) -> Result<Compiled, CompileError> {
    let program = parse_program(source)?;
    debug!(statements = program.len(), "parsed");

    let mut optimizer = Optimizer::new(options.limits);
    let optimized = optimizer.run(program, options)?;

    let mut builder = optimizer.into_builder();
    let text = builder.compile(&optimized.program)?;
    Ok(Compiled {
        text,
        optimized,
        cache: builder.stats(),
    })
}

/// Resolve the output file for `input`, or `None` for stdout.
pub fn output_path(input: &Path, target: &OutputTarget) -> Result<Option<PathBuf>, CompileError> {
    let path = match target {
        OutputTarget::Stdout => return Ok(None),
        OutputTarget::BesideInput => input.with_extension(OUTPUT_EXTENSION),
        OutputTarget::Path(path) => path.clone(),
    };
    if !has_extension(&path, OUTPUT_EXTENSION) {
        return Err(CompileError::OutputExtension { path });
    }
    Ok(Some(path))
}

/// Compile `input` and write or print the result.
pub fn compile_file(input: &Path, options: &CompileOptions) -> Result<(), CompileError> {
    if !has_extension(input, SOURCE_EXTENSION) {
        return Err(CompileError::InputExtension {
            path: input.to_path_buf(),
        });
    }

    // Checked before the search, which can take a while.
    let output = output_path(input, &options.output)?;
    if let Some(path) = &output {
        if path.exists() && !options.force {
            return Err(CompileError::OutputExists { path: path.clone() });
        }
    }

    let optimize = options.optimize_options()?;
    if options.verbose {
        eprintln!("input: {}", input.display());
        if let Some(path) = &output {
            eprintln!("output: {}", path.display());
        }
        eprintln!(
            "optimisation: {} (max-iter {}, max-depth {}{})",
            optimize.strategy,
            optimize.limits.max_iter(),
            optimize.limits.max_depth(),
            if optimize.parallel { ", parallel" } else { "" },
        );
    }

    let source = read_file(input);
    let compiled = compile_source(&source, &optimize)?;

    if options.verbose {
        let Optimized {
            rounds,
            initial_len,
            final_len,
            ..
        } = compiled.optimized;
        eprintln!(
            "psll file: {} lines, {} characters",
            source.lines().count(),
            source.chars().count()
        );
        eprintln!(
            "pyra file: {} lines, {final_len} characters",
            compiled.text.lines().count()
        );
        eprintln!("optimised from {initial_len} characters in {rounds} rounds");
        eprintln!(
            "layout cache: {} hits, {} misses, {} entries",
            compiled.cache.hits, compiled.cache.misses, compiled.cache.entries
        );
    }

    match output {
        Some(path) => std::fs::write(&path, &compiled.text)
            .map_err(|source| CompileError::Write { path, source }),
        None => {
            println!("{}", compiled.text);
            Ok(())
        }
    }
}
