// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cursorial command-line interface.
//!
//! Three subcommands, all thin drivers over the library: `suffix` reads two
//! word sequences from stdin and checks whether the second ends the first,
//! `distance` measures the edit distance between two strings, and `search`
//! locates one word sequence inside another. `--json` switches every report
//! to a single JSON object on stdout.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cursorial",
    about = "Cursor-driven containers and sequence algorithms",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// Ignored when `CURSORIAL_LOG` is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print reports as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the second word sequence on stdin ends the first
    ///
    /// Each sequence is whitespace-separated and terminated by the word
    /// `STOP` (or end of input). The first is stored in an array, the
    /// second in a linked list.
    Suffix,

    /// Edit distance between two strings
    Distance {
        /// Source string
        a: String,

        /// Target string
        b: String,

        /// Compare whitespace-separated words instead of characters
        #[arg(long)]
        words: bool,
    },

    /// Find the first occurrence of NEEDLE's words in HAYSTACK's words
    Search {
        /// Text to search in
        haystack: String,

        /// Words to look for
        needle: String,
    },
}
