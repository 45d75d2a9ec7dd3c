//! Command implementations for Autocorrect CLI.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::{Dictionary, SuggestionRanker, levenshtein_distance};

/// Execute a CLI command.
pub fn execute_command(args: AutocorrectArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Suggest(suggest_args) => suggest_words(suggest_args, &args, &mut out),
        Command::Distance(distance_args) => show_distance(distance_args, &args, &mut out),
        Command::Interactive(interactive_args) => {
            let ranker = build_ranker(&interactive_args.ranking)?;
            let stdin = io::stdin();
            run_interactive(&ranker, &interactive_args.prompt, stdin.lock(), &mut out, &args)
        }
    }
}

/// Load the dictionary and configure a ranker.
pub fn build_ranker(ranking: &RankingArgs) -> Result<SuggestionRanker> {
    let config = ranking.ranker_config()?;
    // Validated before the dictionary is read
    config.validate()?;

    let start_time = Instant::now();
    let dictionary = Dictionary::load(&ranking.dictionary, ranking.dictionary_format)?;
    info!(
        "Dictionary {} loaded in {} ms",
        ranking.dictionary.display(),
        start_time.elapsed().as_millis()
    );

    SuggestionRanker::new(dictionary, config)
}

/// Rank one word and wrap the result for output.
pub fn report_for(ranker: &SuggestionRanker, query: &str) -> SuggestionReport {
    SuggestionReport {
        query: query.to_string(),
        in_dictionary: ranker.is_correct(query),
        threshold: ranker.threshold(),
        suggestions: ranker.suggest(query),
    }
}

/// Suggest corrections for each word given on the command line.
fn suggest_words<W: Write>(args: &SuggestArgs, cli_args: &AutocorrectArgs, out: &mut W) -> Result<()> {
    let ranker = build_ranker(&args.ranking)?;

    for word in &args.words {
        let start_time = Instant::now();
        let report = report_for(&ranker, word);
        debug!(
            "Ranked {:?} in {} µs",
            word,
            start_time.elapsed().as_micros()
        );
        output_result(&report, cli_args, out)?;
    }

    Ok(())
}

/// Print the edit distance between two words.
fn show_distance<W: Write>(
    args: &DistanceArgs,
    cli_args: &AutocorrectArgs,
    out: &mut W,
) -> Result<()> {
    let report = DistanceReport {
        first: args.first.clone(),
        second: args.second.clone(),
        distance: levenshtein_distance(&args.first, &args.second),
    };
    output_result(&report, cli_args, out)
}

/// Prompt loop: one word per line, ends on an empty line or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    ranker: &SuggestionRanker,
    prompt: &str,
    mut input: R,
    out: &mut W,
    cli_args: &AutocorrectArgs,
) -> Result<()> {
    let show_prompt = cli_args.verbosity() > 0 && cli_args.output_format == OutputFormat::Human;
    let mut line = String::new();
    let mut queries = 0usize;

    loop {
        if show_prompt {
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let word = line.trim();
        if word.is_empty() {
            break;
        }

        output_result(&report_for(ranker, word), cli_args, out)?;
        queries += 1;
    }

    info!("Interactive session ended after {queries} queries");
    Ok(())
}
