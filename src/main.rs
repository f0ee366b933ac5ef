mod classify;
mod cli;
mod engine;
mod error;
mod fmt;
mod ingest;
mod metafields;
mod models;
mod output;
mod period;
mod reconcile;
mod workbook;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            file,
            output_dir,
            json,
        } => cli::convert::run(&file, output_dir.as_deref(), json),
        Commands::Classify { text } => cli::classify::run(&text),
        Commands::Sheets { file } => cli::sheets::run(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
