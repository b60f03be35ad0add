//! Generate-dictionary command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use shiftr_core::domain::dictionary::default_dictionary_text;

use crate::error::CliError;

/// Arguments for the generate-dictionary command
#[derive(Debug, Args)]
pub struct GenerateDictionaryArgs {
    /// Output file path; prints to stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub force: bool,
}

impl GenerateDictionaryArgs {
    /// Execute the generate-dictionary command
    pub fn execute(&self) -> Result<()> {
        let template = default_dictionary_text();

        let Some(path) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        if path.exists() && !self.force {
            return Err(CliError::InvalidArgument(format!(
                "{} already exists, pass --force to overwrite",
                path.display()
            ))
            .into());
        }

        std::fs::write(path, template)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        println!("✓ Dictionary template written to {}", path.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the term lists to match your project");
        println!("2. Validate the result:");
        println!("   shiftr validate --dictionary {}", path.display());
        println!("3. Use it for shifting:");
        println!("   shiftr shift --dictionary {} <TEXT>", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_template_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("terms.dict");
        let args = GenerateDictionaryArgs { output: Some(path.clone()), force: false };
        args.execute().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, default_dictionary_text());
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("terms.dict");
        std::fs::write(&path, "existing").unwrap();

        let args = GenerateDictionaryArgs { output: Some(path.clone()), force: false };
        assert!(args.execute().is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");

        let args = GenerateDictionaryArgs { output: Some(path.clone()), force: true };
        args.execute().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), default_dictionary_text());
    }
}
