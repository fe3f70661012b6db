// src/main.rs
mod utils;
mod documents;
mod extractors;
mod compare;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use documents::sources::{CHANGELOG, SOURCE_DEFINE};
use utils::AppError;

/// Environment variable consulted when `--root` is not given.
const ROOT_ENV: &str = "VERSION_GATE_ROOT";

/// Checks that the README changelog and the source version constant agree
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project root the document paths are relative to (default: $VERSION_GATE_ROOT or ".")
    #[arg(long)]
    root: Option<PathBuf>,

    /// README holding the changelog (default: README.md)
    #[arg(long)]
    readme: Option<String>,

    /// C source holding the version constant (default: lib/main.c)
    #[arg(long)]
    source: Option<String>,
}

impl Args {
    fn resolve_root(&self) -> Result<PathBuf, AppError> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::var(ROOT_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        };
        tracing::debug!("Using project root {}", root.display());

        if !root.is_dir() {
            return Err(AppError::Config(format!("Project root {} is not a directory", root.display())));
        }
        Ok(root)
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let root = args.resolve_root()?;

    // Each extraction aborts the run on failure; nothing is compared after a miss.
    let readme_version = CHANGELOG.load(&root, args.readme.as_deref())?;
    let source_version = SOURCE_DEFINE.load(&root, args.source.as_deref())?;

    let verdict = compare::compare(readme_version, source_version);
    compare::report(&verdict)
}

fn main() -> ExitCode {
    utils::logging::setup_logging();

    let args = Args::parse();
    tracing::debug!("Starting version check with args: {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported line by line.
        Err(AppError::Mismatch { .. }) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
