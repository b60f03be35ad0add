//! shiftr command-line entry point

use clap::Parser;

use shiftr_cli::commands::Commands;

/// Classify a token or selection and shift it to its next or previous
/// value.
#[derive(Debug, Parser)]
#[command(name = "shiftr", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.command.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
