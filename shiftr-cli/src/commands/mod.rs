//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_dictionary;
pub mod list;
pub mod shift;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify a token or selection and shift it up or down
    Shift(shift::ShiftArgs),

    /// Validate a dictionary file and report skipped constructs
    Validate(validate::ValidateArgs),

    /// Write the embedded default dictionary as a starting template
    GenerateDictionary(generate_dictionary::GenerateDictionaryArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the shiftable types in classification priority order
    Types,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Shift(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateDictionary(args) => args.execute(),
            Commands::List { subcommand } => match subcommand {
                ListCommands::Types => list::types(),
            },
        }
    }
}
