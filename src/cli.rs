use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "vas-admin")]
#[command(about = "Export or import the VAS catalog through its GraphQL API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Subcommand to run; `export` when none is given
    pub fn command(self) -> Commands {
        self.command.unwrap_or(Commands::Export)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Load the first page and print it as an export sheet
    Export,
    /// Save the rows of a JSON array file through the import flow
    Import {
        /// JSON file holding an array of sheet rows
        file: PathBuf,
    },
}
