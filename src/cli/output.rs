//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{AutocorrectArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::Suggestion;

/// Ranked suggestions for one query word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionReport {
    pub query: String,
    pub in_dictionary: bool,
    pub threshold: usize,
    pub suggestions: Vec<Suggestion>,
}

/// Result structure for the distance command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceReport {
    pub first: String,
    pub second: String,
    pub distance: usize,
}

/// Results that know how to print themselves for people.
pub trait HumanReadable {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> std::io::Result<()>;
}

impl HumanReadable for SuggestionReport {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> std::io::Result<()> {
        if self.suggestions.is_empty() {
            return writeln!(
                out,
                "{}: no suggestions within distance {}",
                self.query, self.threshold
            );
        }

        if verbosity > 1 {
            writeln!(out, "{}:", self.query)?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(
                    out,
                    "  {}. {} (distance {})",
                    i + 1,
                    suggestion.word,
                    suggestion.distance
                )?;
            }
            return Ok(());
        }

        let words: Vec<&str> = self
            .suggestions
            .iter()
            .map(|suggestion| suggestion.word.as_str())
            .collect();
        writeln!(out, "{} -> {}", self.query, words.join(", "))
    }
}

impl HumanReadable for DistanceReport {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> std::io::Result<()> {
        if verbosity > 0 {
            writeln!(out, "{} -> {}: {}", self.first, self.second, self.distance)
        } else {
            writeln!(out, "{}", self.distance)
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T, W>(result: &T, args: &AutocorrectArgs, out: &mut W) -> Result<()>
where
    T: Serialize + HumanReadable,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out, args.verbosity())?,
        OutputFormat::Json => output_json(result, args.pretty, out)?,
    }
    Ok(())
}

/// Output in JSON format, one document per line unless pretty-printed.
fn output_json<T: Serialize, W: Write>(result: &T, pretty: bool, out: &mut W) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, result)?;
    } else {
        serde_json::to_writer(&mut *out, result)?;
    }
    writeln!(out)?;
    Ok(())
}
