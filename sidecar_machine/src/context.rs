// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared context record owned by the coordinator.
//!
//! One [`Context`] value holds everything the parallel regions read and
//! write: the host application's selection as last reported over the bridge,
//! and the panel-side fields (tooltip, rename editor, search mirror, ontology
//! lookup results). The coordinator clones it into a draft for each region
//! pass and commits the draft whole, so no region ever observes a
//! half-applied update.

use alloc::string::String;
use alloc::vec::Vec;

use crate::lexicon::Locale;

/// A handle to an element in the host application's document.
///
/// Identity is carried by [`id`](Self::id): two handles refer to the same
/// host element exactly when their ids are equal. The display name rides
/// along so panel fields can mirror it without another host round-trip.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostElement {
    /// Stable host-side identifier.
    pub id: String,
    /// Display name of the element at the time it was reported.
    pub name: String,
}

impl HostElement {
    /// Creates a handle from an id and a display name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns `true` if `other` refers to the same host element.
    #[must_use]
    pub fn same_element(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Host-side selection state as last reported over the bridge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostContext {
    /// The host's current element selection, in host order. Empty means no
    /// selection.
    pub user_selection: Vec<HostElement>,
    /// The element the user has focused within a multi-selection, if any.
    ///
    /// Defined only while it is a member of [`user_selection`](Self::user_selection),
    /// or while the selection is exactly that singleton.
    pub selection_focused_element: Option<HostElement>,
    /// Elements matched by the most recent layer search.
    pub last_layer_search_result: Vec<HostElement>,
    /// Elements matched by the most recent text search.
    pub last_text_search_result: Vec<HostElement>,
}

/// The search field that mirrors the focused element's name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostSearchContext {
    /// Text mirrored from the focused element's name, if any.
    pub search_value: Option<String>,
    /// Whether the auxiliary options panel is visible.
    pub is_options_open: bool,
}

/// Ontology lookup state for the rename editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OntologySearchContext {
    /// The term currently hovered in the definition list, if any.
    pub focused_definition: Option<String>,
    /// Definition text for the focused term, or a placeholder tip.
    pub full_text: Option<String>,
    /// Phrase tokens the user has already confirmed.
    pub confirmed_rename_parts: Vec<String>,
}

/// Panel-side state: tooltip, rename editor, and the two search sub-records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PluginContext {
    /// Current tooltip string, defaulting to the locale default.
    pub tooltip: String,
    /// Current text in the rename/phrase editor, if any.
    pub rename_value: Option<String>,
    /// Mirror of the host element search field.
    pub host_search: HostSearchContext,
    /// Ontology lookup state.
    pub ontology_search: OntologySearchContext,
}

/// The single shared record all regions transition over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    /// Host-side selection state.
    pub host: HostContext,
    /// Panel-side state.
    pub plugin: PluginContext,
}

impl Context {
    /// Creates the start-of-life context: selection fields empty, tooltip at
    /// the locale default, and a placeholder tip chosen by `tip_seed`.
    ///
    /// The seed stands in for the randomness the embedder would otherwise
    /// supply; equal seeds yield equal tips, which keeps startup
    /// deterministic under test.
    #[must_use]
    pub fn initial(locale: &Locale, tip_seed: u64) -> Self {
        let mut context = Self::default();
        context.plugin.tooltip = locale.tooltip_default.clone();
        context.plugin.ontology_search.full_text = locale.tip(tip_seed).map(String::from);
        context
    }
}
