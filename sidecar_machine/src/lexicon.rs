// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookup and locale seams.
//!
//! The coordinator's actions resolve tooltip and definition text through the
//! [`Lexicon`] trait rather than owning the data, so ontology storage and
//! text rendering stay outside the core. Locale strings are opaque constants
//! supplied once at construction through [`Locale`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::event::UiElement;

/// Resolves display text for panel controls and ontology terms.
///
/// Implementations are expected to be pure: the same input yields the same
/// text for the lifetime of the coordinator.
pub trait Lexicon {
    /// Tooltip text for a hoverable panel control.
    fn tooltip(&self, element: UiElement) -> String;

    /// Definition text for an ontology term, if the term is known.
    fn definition(&self, term: &str) -> Option<String>;
}

/// Locale strings treated as opaque constants by the core.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Locale {
    /// Tooltip shown while no control is hovered.
    pub tooltip_default: String,
    /// Placeholder tips shown in the definition pane before any term was
    /// hovered.
    pub placeholder_tips: Vec<String>,
}

impl Locale {
    /// Creates a locale with the given default tooltip and no tips.
    #[must_use]
    pub fn new(tooltip_default: impl Into<String>) -> Self {
        Self {
            tooltip_default: tooltip_default.into(),
            placeholder_tips: Vec::new(),
        }
    }

    /// Replaces the placeholder tip list.
    #[must_use]
    pub fn with_tips(mut self, tips: Vec<String>) -> Self {
        self.placeholder_tips = tips;
        self
    }

    /// Selects a placeholder tip by seed, or `None` if no tips are
    /// configured.
    ///
    /// The embedder chooses the seed (a random one reproduces the original
    /// "random tip" behavior); the selection itself is deterministic.
    #[must_use]
    pub fn tip(&self, seed: u64) -> Option<&str> {
        if self.placeholder_tips.is_empty() {
            return None;
        }
        #[expect(clippy::cast_possible_truncation, reason = "remainder < tips.len()")]
        let index = (seed % self.placeholder_tips.len() as u64) as usize;
        Some(&self.placeholder_tips[index])
    }
}

/// A hash-map backed [`Lexicon`] for embedders and tests.
#[cfg(feature = "hashbrown")]
#[derive(Clone, Debug, Default)]
pub struct MapLexicon {
    tooltips: hashbrown::HashMap<UiElement, String>,
    definitions: hashbrown::HashMap<String, String>,
    fallback_tooltip: String,
}

#[cfg(feature = "hashbrown")]
impl MapLexicon {
    /// Creates an empty lexicon whose unknown-control tooltip is
    /// `fallback_tooltip`.
    #[must_use]
    pub fn new(fallback_tooltip: impl Into<String>) -> Self {
        Self {
            tooltips: hashbrown::HashMap::new(),
            definitions: hashbrown::HashMap::new(),
            fallback_tooltip: fallback_tooltip.into(),
        }
    }

    /// Registers tooltip text for a control.
    #[must_use]
    pub fn with_tooltip(mut self, element: UiElement, text: impl Into<String>) -> Self {
        self.tooltips.insert(element, text.into());
        self
    }

    /// Registers definition text for a term.
    #[must_use]
    pub fn with_definition(mut self, term: impl Into<String>, text: impl Into<String>) -> Self {
        self.definitions.insert(term.into(), text.into());
        self
    }
}

#[cfg(feature = "hashbrown")]
impl Lexicon for MapLexicon {
    fn tooltip(&self, element: UiElement) -> String {
        self.tooltips
            .get(&element)
            .cloned()
            .unwrap_or_else(|| self.fallback_tooltip.clone())
    }

    fn definition(&self, term: &str) -> Option<String> {
        self.definitions.get(term).cloned()
    }
}
