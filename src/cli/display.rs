// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Report types and their terminal rendering.
//!
//! Every subcommand produces one report. The same struct is serialized for
//! `--json` and rendered as plain lines otherwise, so both outputs always
//! carry the same facts.

use std::fmt;

use serde::Serialize;

use cursorial::{DynArray, List};

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Outcome of `cursorial suffix`.
#[derive(Debug, Serialize)]
pub struct SuffixReport {
    pub sequence: DynArray<String>,
    pub candidate: List<String>,
    pub is_suffix: bool,
    /// Index in `sequence` where `candidate` first occurs.
    pub first_match: Option<usize>,
}

/// Outcome of `cursorial distance`.
#[derive(Debug, Serialize)]
pub struct DistanceReport {
    pub a: String,
    pub b: String,
    pub unit: Unit,
    pub distance: usize,
}

/// Element granularity of a distance comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Chars,
    Words,
}

/// Outcome of `cursorial search`.
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub haystack: Vec<String>,
    pub needle: Vec<String>,
    /// Word index of the first occurrence.
    pub position: Option<usize>,
}

// ═══════════════════════════════════════════════════════════════════════════
// TEXT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

fn join<'a>(words: impl IntoIterator<Item = &'a String>) -> String {
    words
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for SuffixReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sequence 1: {}", join(&self.sequence))?;
        writeln!(f, "Sequence 2: {}", join(&self.candidate))?;
        if self.is_suffix {
            write!(f, "Sequence 2 is a postfix of 1")?;
        } else {
            write!(f, "Sequence 2 is NOT a postfix of 1")?;
        }
        if let Some(index) = self.first_match {
            write!(f, " (first occurrence at word {index})")?;
        }
        Ok(())
    }
}

impl fmt::Display for DistanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            Unit::Chars => "character",
            Unit::Words => "word",
        };
        write!(
            f,
            "{:?} → {:?}: {} {} edit{}",
            self.a,
            self.b,
            self.distance,
            unit,
            if self.distance == 1 { "" } else { "s" }
        )
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(index) => write!(f, "{:?} found at word {index}", join(&self.needle)),
            None => write!(f, "{:?} not found", join(&self.needle)),
        }
    }
}
