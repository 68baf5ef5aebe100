//! Thin CLI over the `tag_extractor` library.
//!
//! Extracts tags from one input file, prints the report to stdout, and
//! optionally saves it. All real work lives in the library; this binary is
//! only argument parsing, logging setup, and exit codes.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tag_extractor::Session;

#[derive(Parser)]
#[command(
    name = "tag-extractor",
    version,
    about = "Extract tags (word frequencies) from a text file"
)]
struct Args {
    /// Input text file
    input: PathBuf,

    /// Stop-word file (whitespace-delimited, case-insensitive)
    #[arg(short, long)]
    stop_words: PathBuf,

    /// Also save the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> tag_extractor::Result<()> {
    let mut session = Session::new();
    session.extract(&args.input, &args.stop_words)?;
    print!("{}", session.render()?);
    if let Some(output) = &args.output {
        session.save(output)?;
    }
    Ok(())
}
