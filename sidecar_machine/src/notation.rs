// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Naming-notation conventions and the phrase formatter.
//!
//! The rename editor treats its value as a sequence of phrases joined by a
//! notation delimiter. Formatting is a pure function of the phrase tokens
//! and the target notation: [`split_phrases`] tokenizes on either delimiter,
//! [`join_phrases`] re-joins with the target's. Because tokenization accepts
//! both delimiters, re-rendering is idempotent and toggling the notation
//! twice reproduces the original text.

use alloc::string::String;
use alloc::vec::Vec;

/// A phrase-joining convention for the rename editor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Phrases joined by `" - "`.
    #[default]
    SpacedDashes,
    /// Phrases joined by `" / "`.
    SpacedSlashes,
}

impl Notation {
    /// The delimiter this notation joins phrases with.
    #[must_use]
    pub const fn delimiter(self) -> &'static str {
        match self {
            Self::SpacedDashes => " - ",
            Self::SpacedSlashes => " / ",
        }
    }

    const fn separator_char(self) -> char {
        match self {
            Self::SpacedDashes => '-',
            Self::SpacedSlashes => '/',
        }
    }
}

/// Splits an editor value into phrase tokens.
///
/// Both notation separators are accepted, surrounding whitespace is trimmed,
/// and empty tokens are dropped, so the result is independent of which
/// notation produced the value.
#[must_use]
pub fn split_phrases(value: &str) -> Vec<String> {
    value
        .split(['-', '/'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Joins phrase tokens with the notation's delimiter.
///
/// Returns `None` for an empty token list, keeping "no phrases" distinct
/// from an empty string in the editor.
#[must_use]
pub fn join_phrases(parts: &[String], notation: Notation) -> Option<String> {
    if parts.is_empty() {
        return None;
    }
    Some(parts.join(notation.delimiter()))
}

/// Re-renders an editor value in the given notation.
///
/// The confirmed phrase tokens take precedence; when none are confirmed yet
/// the prior editor value is tokenized instead. This is the transform the
/// notation region's entry actions run, so a value is never left in the
/// opposite notation after a toggle.
#[must_use]
pub fn reformat(value: Option<&str>, confirmed: &[String], notation: Notation) -> Option<String> {
    if !confirmed.is_empty() {
        return join_phrases(confirmed, notation);
    }
    join_phrases(&split_phrases(value.unwrap_or("")), notation)
}

/// Guesses the notation a value is currently rendered in.
///
/// Used where a phrase edit must preserve the on-screen convention without
/// consulting the notation region. A value with no separator reads as
/// spaced dashes.
#[must_use]
pub fn detect(value: &str) -> Notation {
    if value.contains(Notation::SpacedSlashes.separator_char()) {
        Notation::SpacedSlashes
    } else {
        Notation::SpacedDashes
    }
}
