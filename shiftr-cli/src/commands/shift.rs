//! Shift command implementation

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use shiftr_core::{Direction, FixedChoice, ShiftContext, ShiftEngine};

use crate::error::CliError;
use crate::output;

/// Arguments for the shift command
#[derive(Debug, Args)]
pub struct ShiftArgs {
    /// Text to shift; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Shift direction
    #[arg(short, long, value_enum, default_value = "up")]
    pub direction: ShiftDirection,

    /// Document file providing context for document-wide rotation
    #[arg(long, value_name = "FILE")]
    pub document: Option<PathBuf>,

    /// File extension used for dictionary scoping (without the dot)
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Full text of the line containing the caret
    #[arg(long, value_name = "TEXT")]
    pub line: Option<String>,

    /// Character immediately before the selection
    #[arg(long, value_name = "CHAR")]
    pub prefix: Option<char>,

    /// Character immediately after the selection
    #[arg(long, value_name = "CHAR")]
    pub postfix: Option<char>,

    /// Repeat count for the accelerated "shift more" mode
    #[arg(long, value_name = "N")]
    pub more: Option<u32>,

    /// Dictionary file replacing the embedded default
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Keep executor output casing instead of the original token's
    #[arg(long)]
    pub no_preserve_case: bool,

    /// Preselected answer index for multi-valued transformations
    #[arg(long, value_name = "N")]
    pub choose: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Shift direction as exposed on the command line
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ShiftDirection {
    /// Shift to the next value
    Up,
    /// Shift to the previous value
    Down,
}

impl From<ShiftDirection> for Direction {
    fn from(direction: ShiftDirection) -> Self {
        match direction {
            ShiftDirection::Up => Direction::Up,
            ShiftDirection::Down => Direction::Down,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// The shifted text only
    Text,
    /// JSON object with text, matched type and change flag
    Json,
}

impl ShiftArgs {
    /// Execute the shift command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        if self.more == Some(0) {
            return Err(CliError::InvalidArgument("--more must be positive".to_string()).into());
        }

        let text = self.read_text()?;
        log::debug!("shifting {:?} {:?}", text, self.direction);

        let engine = self.build_engine()?;
        let ctx = self.build_context(text);
        let outcome = engine.shift(&ctx);
        log::info!(
            "classified as {}, changed: {}",
            outcome.shiftable_type.map(|t| t.name()).unwrap_or("nothing"),
            outcome.changed
        );

        match self.format {
            OutputFormat::Text => println!("{}", output::text::render(&outcome)),
            OutputFormat::Json => println!("{}", output::json::render(&outcome)?),
        }
        Ok(())
    }

    /// Selection text from the positional argument or stdin. A single
    /// trailing newline from piped input is not part of the selection.
    fn read_text(&self) -> Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read selection from stdin")?;
                if buffer.ends_with('\n') {
                    buffer.pop();
                    if buffer.ends_with('\r') {
                        buffer.pop();
                    }
                }
                Ok(buffer)
            }
        }
    }

    fn build_engine(&self) -> Result<ShiftEngine> {
        let mut engine = ShiftEngine::new().with_preserve_case(!self.no_preserve_case);
        if let Some(path) = &self.dictionary {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            engine = engine
                .with_dictionary_file(path)
                .with_context(|| format!("Failed to load dictionary {}", path.display()))?;
        }
        if let Some(index) = self.choose {
            engine = engine.with_choices(Arc::new(FixedChoice::new(index)));
        }
        Ok(engine)
    }

    fn build_context(&self, text: String) -> ShiftContext {
        let mut ctx = ShiftContext::new(text, self.direction.into());
        if let Some(path) = &self.document {
            if let Ok(document) = std::fs::read_to_string(path) {
                ctx = ctx.with_document(document);
            } else {
                log::warn!("could not read document {}", path.display());
            }
        }
        if let Some(extension) = &self.extension {
            ctx = ctx.with_extension(extension.trim_start_matches('.'));
        }
        if let Some(line) = &self.line {
            ctx = ctx.with_caret_line(line.clone());
        }
        if let Some(prefix) = self.prefix {
            ctx = ctx.with_prefix(prefix);
        }
        if let Some(postfix) = self.postfix {
            ctx = ctx.with_postfix(postfix);
        }
        if let Some(more) = self.more {
            ctx = ctx.with_more_count(more);
        }
        ctx
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str) -> ShiftArgs {
        ShiftArgs {
            text: Some(text.to_string()),
            direction: ShiftDirection::Up,
            document: None,
            extension: None,
            line: None,
            prefix: None,
            postfix: None,
            more: None,
            dictionary: None,
            no_preserve_case: false,
            choose: None,
            format: OutputFormat::Text,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_context_carries_all_fields() {
        let mut a = args("value");
        a.extension = Some(".PHP".to_string());
        a.prefix = Some('$');
        a.postfix = Some(';');
        a.more = Some(2);
        a.line = Some("$value;".to_string());

        let ctx = a.build_context("value".to_string());
        assert_eq!(ctx.extension(), Some("php"));
        assert_eq!(ctx.prefix_char, Some('$'));
        assert_eq!(ctx.postfix_char, Some(';'));
        assert_eq!(ctx.more_count, Some(2));
        assert_eq!(ctx.caret_line, "$value;");
    }

    #[test]
    fn test_direction_conversion() {
        assert_eq!(Direction::from(ShiftDirection::Up), Direction::Up);
        assert_eq!(Direction::from(ShiftDirection::Down), Direction::Down);
    }

    #[test]
    fn test_missing_dictionary_file_is_rejected() {
        let mut a = args("true");
        a.dictionary = Some(PathBuf::from("/no/such/file.dict"));
        assert!(a.build_engine().is_err());
    }

    #[test]
    fn test_execute_shifts_inline_text() {
        assert!(args("public").execute().is_ok());
    }
}
