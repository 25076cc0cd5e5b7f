use anyhow::Context;
use clap::Parser;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Wrap a raw u-Law capture in a playable WAV container.
#[derive(Parser, Debug)]
#[command(name = "rawtowav", version, about)]
pub struct Args {
    /// Raw u-Law input file (8-bit mono, 8000 Hz)
    pub input: PathBuf,

    /// Output WAV path, overwritten if it already exists
    pub output: String,
}

pub fn run(args: &Args) -> anyhow::Result<()> {
    // An empty output path converts nothing, without touching the input.
    if args.output.is_empty() {
        println!("Empty output path, nothing to convert");
        return Ok(());
    }

    let payload = fs::read(&args.input)
        .with_context(|| format!("Failed to read `{}`", args.input.display()))?;

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create `{}`", args.output))?;
    let mut writer = BufWriter::new(file);
    mulaw::wrap(&payload, &mut writer)
        .with_context(|| format!("Failed to write `{}`", args.output))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write `{}`", args.output))?;

    println!("Converted to WAV: {}", args.output);
    Ok(())
}
