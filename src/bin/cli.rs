// src/bin/cli.rs
use clap::Parser;
use nicar_schedule::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    log::init(args.verbose)?;

    let summary = cli::run(&args)?;
    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
