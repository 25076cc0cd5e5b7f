use clap::Parser;
use rawtowav::{run, Args};

fn main() -> anyhow::Result<()> {
    run(&Args::parse())
}
