use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cursorial::{edit_distance, ends_with, search, DynArray, List};

mod cli;
use cli::display::{DistanceReport, SearchReport, SuffixReport, Unit};
use cli::{Cli, Commands};

/// Environment variable holding an `EnvFilter` directive for log output.
const LOG_ENV: &str = "CURSORIAL_LOG";

/// Word that terminates a sequence read from stdin.
const STOP: &str = "STOP";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Suffix => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read word sequences from stdin")?;
            emit(&suffix_report(&input)?, cli.json)
        }
        Commands::Distance { a, b, words } => emit(&distance_report(a, b, words), cli.json),
        Commands::Search { haystack, needle } => {
            emit(&search_report(&haystack, &needle)?, cli.json)
        }
    }
}

fn emit<R: Serialize + std::fmt::Display>(report: &R, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(report).context("failed to serialize report")?;
        println!("{out}");
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Words up to the next `STOP` (consumed) or the end of input.
fn take_sequence<'a, I>(words: &mut I) -> Vec<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    words.take_while(|word| *word != STOP).collect()
}

fn suffix_report(input: &str) -> Result<SuffixReport> {
    let mut words = input.split_whitespace();

    let mut sequence = DynArray::new();
    for word in take_sequence(&mut words) {
        sequence.push_back(word.to_string())?;
    }
    let mut candidate = List::new();
    for word in take_sequence(&mut words) {
        candidate.push_back(word.to_string())?;
    }
    tracing::debug!(
        sequence = sequence.len(),
        candidate = candidate.len(),
        "read word sequences"
    );

    let found = search(sequence.begin(), sequence.end(), candidate.begin(), candidate.end());
    let first_match = (!found.is_end()).then(|| found.index());
    let is_suffix = ends_with(sequence.begin(), sequence.end(), candidate.begin(), candidate.end());

    Ok(SuffixReport {
        sequence,
        candidate,
        is_suffix,
        first_match,
    })
}

fn distance_report(a: String, b: String, words: bool) -> DistanceReport {
    let distance = if words {
        let source: List<&str> = a.split_whitespace().collect();
        let target: DynArray<&str> = b.split_whitespace().collect();
        edit_distance(source.begin(), source.end(), target.begin(), target.end())
    } else {
        let source: List<char> = a.chars().collect();
        let target: DynArray<char> = b.chars().collect();
        edit_distance(source.begin(), source.end(), target.begin(), target.end())
    };
    DistanceReport {
        a,
        b,
        unit: if words { Unit::Words } else { Unit::Chars },
        distance,
    }
}

fn search_report(haystack: &str, needle: &str) -> Result<SearchReport> {
    let mut hay = DynArray::new();
    for word in haystack.split_whitespace() {
        hay.push_back(word.to_string())?;
    }
    let needle: List<String> = needle.split_whitespace().map(str::to_string).collect();

    let found = search(hay.begin(), hay.end(), needle.begin(), needle.end());
    let position = (!found.is_end()).then(|| found.index());

    Ok(SearchReport {
        haystack: hay.iter().cloned().collect(),
        needle: needle.iter().cloned().collect(),
        position,
    })
}
