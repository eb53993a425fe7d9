use std::path::Path;

use anyhow::{Context, Result, bail};

use fwtools::hooks;

pub fn run() -> Result<()> {
    let files = hooks::count_lintable_files(Path::new("."))?;
    println!("Running cpplint on {files} file(s)...");

    let status = hooks::cpplint_command()
        .status()
        .context("failed to run cpplint; is it installed?")?;

    if !status.success() {
        bail!("cpplint reported style violations");
    }

    println!("Lint clean.");
    Ok(())
}
