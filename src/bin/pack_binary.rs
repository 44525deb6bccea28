//! Dump a file's raw bytes as a comma-separated decimal listing.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
struct Opts {
    /// Input file to pack
    input: PathBuf,
    /// Write the listing here instead of standard output
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), std::io::Error> {
    let opts = Opts::parse();

    let content = fs::read(&opts.input)?;
    let mut listing = String::with_capacity(content.len() * 4);
    for byte in content {
        write!(listing, "{byte},").unwrap();
    }

    match &opts.output {
        Some(path) => fs::write(path, listing)?,
        None => println!("{listing}"),
    }
    Ok(())
}
