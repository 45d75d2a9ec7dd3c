//! Command line argument parsing for Autocorrect CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::{DictionaryFormat, RankerConfig};

/// Autocorrect - suggest dictionary words close to a misspelled word
#[derive(Parser, Debug, Clone)]
#[command(name = "autocorrect")]
#[command(about = "Suggest dictionary words close to a misspelled word")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct AutocorrectArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AutocorrectArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for one or more words
    Suggest(SuggestArgs),

    /// Print the edit distance between two words
    Distance(DistanceArgs),

    /// Read words from stdin and suggest corrections until an empty line
    Interactive(InteractiveArgs),
}

/// Options shared by every command that ranks against a dictionary
#[derive(Args, Debug, Clone)]
pub struct RankingArgs {
    /// Word list file
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Maximum edit distance for a suggestion
    #[arg(short, long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Maximum number of suggestions per word
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Return only the word itself when it is in the dictionary
    #[arg(long)]
    pub exact_shortcut: bool,

    /// Always scan the dictionary on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Layout of the word list file
    #[arg(long, value_enum, default_value = "auto")]
    pub dictionary_format: DictionaryFormat,

    /// Ranker configuration file (JSON); flags override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

impl RankingArgs {
    /// Build the ranker configuration from the optional file and the flags.
    pub fn ranker_config(&self) -> Result<RankerConfig> {
        let mut config = match &self.config {
            Some(path) => RankerConfig::from_json_file(path)?,
            None => RankerConfig::default(),
        };

        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(limit) = self.limit {
            config.max_suggestions = Some(limit);
        }
        if self.exact_shortcut {
            config.stop_on_exact_match = true;
        }
        if self.sequential {
            config.parallel = false;
        }

        Ok(config)
    }
}

/// Arguments for one-shot suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub ranking: RankingArgs,

    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for the distance command
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First word
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Second word
    #[arg(value_name = "SECOND")]
    pub second: String,
}

/// Arguments for the interactive prompt
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub ranking: RankingArgs,

    /// Prompt shown before each word
    #[arg(long, default_value = "word> ")]
    pub prompt: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
