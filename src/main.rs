// src/main.rs
//
// humantext — apply text transforms to a file
//
// - Reads the input file as UTF-8, applies the named transforms left to
//   right, and writes the result (default: overwrite input).
// - Transform names are the library registry names:
//     humantext --apply snake,slug_to_title notes.txt titled.txt
// - An unknown transform name fails before anything is written.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

use humantext::{apply_modifications, Modification};

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Transforms to apply, left to right
    #[arg(long, short = 'a', value_delimiter = ',', default_value = "widont")]
    apply: Vec<String>,

    /// Input file
    input: PathBuf,

    /// Output file (default: overwrite input)
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let src = fs::read_to_string(&cli.input)?;
    let steps: Vec<Modification<'_>> = cli
        .apply
        .iter()
        .map(|name| Modification::Named(name.as_str()))
        .collect();
    let out = apply_modifications(&src, &steps)?;

    let out_path = cli.output.as_ref().unwrap_or(&cli.input);
    fs::write(out_path, out)?;
    Ok(())
}
