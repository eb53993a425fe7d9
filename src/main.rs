mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::colormap::Format;

#[derive(Parser)]
#[command(name = "fwtools")]
#[command(version, about = "Build-time utilities for the dimmer firmware")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run cpplint over src/ and include/ with the project filter set
    Lint,
    /// Run the pre-action registered for a build target
    Hook {
        /// Object target name, e.g. bluetooth.cpp.o
        target: String,
    },
    /// Print the 256-entry hot colormap table
    Colormap {
        /// Output format
        #[arg(long, value_enum, default_value = "c")]
        format: Format,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Lint => commands::lint::run(),
        Command::Hook { target } => commands::hook::run(&target),
        Command::Colormap { format } => commands::colormap::run(format),
    }
}
