//! Validate command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use shiftr_core::Dictionary;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the dictionary file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub dictionary: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating dictionary: {}", self.dictionary.display());

        let text = std::fs::read_to_string(&self.dictionary)
            .with_context(|| format!("Failed to read {}", self.dictionary.display()))?;
        let (dictionary, issues) = Dictionary::parse_with_report(&text);

        for issue in &issues {
            println!("  skipped {issue}");
        }

        if dictionary.is_empty() {
            println!("✗ Dictionary is invalid!");
            return Err(
                CliError::InvalidDictionary("no valid blocks".to_string()).into()
            );
        }

        println!("✓ Dictionary is valid!");
        println!("  Blocks: {}", dictionary.blocks().len());
        println!("  Term lists: {}", dictionary.term_list_count());
        if !issues.is_empty() {
            println!("  Skipped constructs: {}", issues.len());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        ValidateArgs { dictionary: file.path().to_path_buf() }.execute()
    }

    #[test]
    fn test_valid_dictionary_passes() {
        assert!(validate("(|js|) {\n|var|let|const|\n}\n").is_ok());
    }

    #[test]
    fn test_dictionary_without_blocks_fails() {
        assert!(validate("# nothing here\n").is_err());
    }

    #[test]
    fn test_partially_valid_dictionary_passes() {
        assert!(validate("garbage\n(|js|) {\n|a|b|\n}\n").is_ok());
    }

    #[test]
    fn test_missing_file_fails() {
        let args = ValidateArgs { dictionary: PathBuf::from("/no/such.dict") };
        assert!(args.execute().is_err());
    }
}
