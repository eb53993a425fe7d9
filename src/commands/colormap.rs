use anyhow::Result;
use clap::ValueEnum;

use fwtools::colormap;

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    /// C array literal, ready to paste into the indicator source
    C,
    /// JSON array of {r, g, b} entries
    Json,
}

pub fn run(format: Format) -> Result<()> {
    let table = colormap::table();

    match format {
        Format::C => print!("{}", colormap::render_c(&table)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&table)?),
    }

    Ok(())
}
