use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "branchdb",
    about = "Run B-tree commands (find/insert/delete) from a file"
)]
struct Cli {
    /// Minimum branching degree t (must be at least 2)
    degree: usize,

    /// File with one command per line
    input: PathBuf,

    /// File the result lines are written to
    output: PathBuf,
}

fn run(cli: &Cli) -> branchdb::Result<()> {
    let input = BufReader::new(File::open(&cli.input)?);
    let output = BufWriter::new(File::create(&cli.output)?);
    branchdb::command::run(input, output, cli.degree)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
