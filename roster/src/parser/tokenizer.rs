//! Splits command arguments of the form `PREAMBLE /p1 value1 /p2 value2 ...`.
//!
//! A prefix only counts at a token boundary: at the start of the text or right after
//! whitespace. `s/o` inside a name never starts a new field. When more than one declared
//! prefix matches at the same boundary the longest one wins, so `/nid` is not read as `/n`
//! followed by `id`.

use std::collections::HashMap;

use log::debug;

use super::prefix::Prefix;
use crate::errors::{ParseError, ParseResult};

/// Values captured for each prefix plus the unlabelled leading text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    values: HashMap<Prefix, Vec<String>>,
    preamble: String,
}

impl ArgumentMultimap {
    /// Trimmed text before the first recognised prefix.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values.get(&prefix).and_then(|values| values.last()).map(String::as_str)
    }

    /// Every value given for `prefix`, in the order they appeared.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn are_prefixes_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.contains(*prefix))
    }

    pub fn is_any_prefix_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().any(|prefix| self.contains(*prefix))
    }

    /// Fails with the command's usage unless every prefix in `prefixes` was supplied.
    pub fn require_prefixes(&self, prefixes: &[Prefix], usage: &'static str) -> ParseResult<()> {
        if self.are_prefixes_present(prefixes) {
            Ok(())
        } else {
            Err(ParseError::InvalidFormat { usage })
        }
    }

    /// Fails unless each prefix in `prefixes` appeared at most once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix], usage: &'static str) -> ParseResult<()> {
        let duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|prefix| self.all_values(*prefix).len() > 1)
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes {
                prefixes: duplicated,
                usage,
            })
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PrefixPosition {
    prefix: Prefix,
    start: usize,
}

/// Tokenizes `args` against the declared `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let positions = find_prefix_positions(args, prefixes);
    debug!("tokenized {:?} into {} prefixed segment(s)", args, positions.len());
    extract_arguments(args, &positions)
}

fn find_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<PrefixPosition> {
    let mut positions = Vec::new();
    let mut at_boundary = true;

    for (offset, ch) in args.char_indices() {
        if at_boundary && let Some(prefix) = longest_prefix_at(&args[offset..], prefixes) {
            positions.push(PrefixPosition { prefix, start: offset });
        }
        at_boundary = ch.is_whitespace();
    }

    positions
}

fn longest_prefix_at(rest: &str, prefixes: &[Prefix]) -> Option<Prefix> {
    prefixes
        .iter()
        .copied()
        .filter(|prefix| !prefix.is_empty() && rest.starts_with(prefix.as_str()))
        .max_by_key(|prefix| prefix.len())
}

fn extract_arguments(args: &str, positions: &[PrefixPosition]) -> ArgumentMultimap {
    let preamble_end = positions.first().map_or(args.len(), |position| position.start);
    let mut multimap = ArgumentMultimap {
        values: HashMap::new(),
        preamble: args[..preamble_end].trim().to_string(),
    };

    for (i, position) in positions.iter().enumerate() {
        let value_start = position.start + position.prefix.len();
        let value_end = positions.get(i + 1).map_or(args.len(), |next| next.start);
        multimap
            .values
            .entry(position.prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}
