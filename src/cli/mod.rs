pub mod classify;
pub mod convert;
pub mod sheets;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "promoforge",
    about = "Convert supplier promo workbooks into Matrixify import files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a promo workbook into the three Matrixify files.
    Convert {
        /// Path to the supplier promo workbook (.xlsx)
        file: String,
        /// Directory to create the run folder in (default: current directory)
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
        /// Print the reconciliation report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify one promo description and show the derived fields.
    Classify {
        /// Promo description text, e.g. '$75 Cash Back'
        text: String,
    },
    /// List workbook sheets with eligibility and row counts.
    Sheets {
        /// Path to the workbook (.xlsx)
        file: String,
    },
}
