// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event vocabulary accepted by [`Coordinator::dispatch`].
//!
//! Events are a single tagged sum type, matched exhaustively per region.
//! A region that does not recognize an event leaves its sub-state and its
//! context contributions unchanged; an event no region recognizes is a
//! no-op, not an error.
//!
//! Host-originated events (the `Host*` variants) are produced by the bridge
//! listener from inbound `selectionChanged` messages. Everything else is
//! dispatched synchronously by the panel's interaction handlers.
//!
//! [`Coordinator::dispatch`]: crate::coordinator::Coordinator::dispatch

use alloc::string::String;
use alloc::vec::Vec;

use crate::context::HostElement;
use crate::notation::Notation;

/// A hoverable control of the panel itself.
///
/// Hover-enter events carry one of these so the tooltip region can resolve
/// the matching tooltip text through the lexicon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UiElement {
    /// "Previous component" navigation button.
    PreviousComponentButton,
    /// "Next component" navigation button.
    NextComponentButton,
    /// The element search input.
    SearchInput,
    /// The rename/replace input.
    RenameInput,
    /// Button copying the component text into the rename input.
    CopyComponentTextButton,
    /// Button executing the rename.
    ExecuteRenameButton,
    /// Button clearing the rename input.
    ClearButton,
}

/// One event dispatched through the coordinator.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The pointer entered a hoverable panel control.
    HoverUiElementEnter(UiElement),
    /// The pointer left the hovered panel control.
    HoverUiElementExit,
    /// The pointer entered a definition entry for `term`.
    HoverDefinitionEnter {
        /// The hovered ontology term.
        term: String,
    },
    /// The pointer left the hovered definition entry.
    HoverDefinitionExit,
    /// The user focused one element of the current multi-selection from
    /// within the panel.
    SelectFocus {
        /// The element to focus.
        focused: HostElement,
    },
    /// The rename editor's text changed.
    EditPhrases {
        /// The new editor text; `None` clears the value.
        input: Option<String>,
    },
    /// Toggle between the two naming notations.
    ChangeNotation,
    /// Commit the current rename value to the host for the focused element.
    CommitUnlinkedRename,
    /// Link the current rename data to the focused element.
    CreateLinkedData,
    /// Remove the link again.
    RemoveLinkedData,
    /// Refresh already-linked data.
    UpdateLinkedData,
    /// Manually toggle the host options panel.
    ToggleHostOptions,
    /// Copy component text into the rename editor, re-rendered in a target
    /// notation.
    CopyTextToRename {
        /// The text to copy in.
        text: String,
        /// Notation to render the copied text in.
        target_notation: Notation,
    },
    /// The host reported a selection of more than one element.
    HostSelectMulti {
        /// The reported selection.
        selection: Vec<HostElement>,
    },
    /// The host reported a selection of exactly one element.
    HostSelectSingle {
        /// The reported selection.
        selection: Vec<HostElement>,
        /// The sole selected element, when the bridge resolved one.
        focused: Option<HostElement>,
    },
    /// The host reported an empty selection.
    HostDeselect,
    /// The host reported that selection is unavailable (for example, no
    /// document is open).
    HostSelectionUnavailable,
    /// A phrase was added to the rename editor.
    AddPhrase,
    /// The only remaining phrase was deleted.
    DeleteLastPhrase,
    /// The second-to-last phrase was deleted, leaving a single phrase.
    DeleteSecondLastPhrase,
    /// An unconfirmed phrase was staged. Accepted without a transition.
    AddUnconfirmedPhrase,
    /// A staged phrase was confirmed. Accepted without a transition.
    ConfirmPhrase,
    /// A phrase of a multi-phrase value was deleted. Accepted without a
    /// transition.
    DeleteMultiPhrase,
    /// A phrase drag started.
    DragPhrase,
    /// A dragged phrase was dropped.
    DropPhrase {
        /// Index the phrase was dragged from.
        from: usize,
        /// Drop target index; `None` when the drop landed outside any
        /// target.
        to: Option<usize>,
    },
}

impl Event {
    /// A short static name for tracing and diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HoverUiElementEnter(_) => "hover_ui_elem_enter",
            Self::HoverUiElementExit => "hover_ui_elem_exit",
            Self::HoverDefinitionEnter { .. } => "hover_definition_enter",
            Self::HoverDefinitionExit => "hover_definition_exit",
            Self::SelectFocus { .. } => "select_focus",
            Self::EditPhrases { .. } => "edit_phrases",
            Self::ChangeNotation => "change_notation",
            Self::CommitUnlinkedRename => "commit_unlinked_rename",
            Self::CreateLinkedData => "create_linked_data",
            Self::RemoveLinkedData => "remove_linked_data",
            Self::UpdateLinkedData => "update_linked_data",
            Self::ToggleHostOptions => "toggle_host_options",
            Self::CopyTextToRename { .. } => "copy_text_to_rename",
            Self::HostSelectMulti { .. } => "host_select_multi",
            Self::HostSelectSingle { .. } => "host_select_single",
            Self::HostDeselect => "host_deselect",
            Self::HostSelectionUnavailable => "host_selection_unavailable",
            Self::AddPhrase => "add_phrase",
            Self::DeleteLastPhrase => "delete_last_phrase",
            Self::DeleteSecondLastPhrase => "delete_second_last_phrase",
            Self::AddUnconfirmedPhrase => "add_unconfirmed_phrase",
            Self::ConfirmPhrase => "confirm_phrase",
            Self::DeleteMultiPhrase => "delete_multi_phrase",
            Self::DragPhrase => "drag_phrase",
            Self::DropPhrase { .. } => "drop_phrase",
        }
    }

    /// The sole selected element of a single-selection event, if present.
    ///
    /// Subset-containment guards compare this against the accumulated
    /// selection; an absent sole element evaluates as not-in-subset rather
    /// than failing, keeping guard evaluation total over any event shape.
    #[must_use]
    pub fn sole_selected(&self) -> Option<&HostElement> {
        match self {
            Self::HostSelectSingle { selection, focused } => {
                focused.as_ref().or_else(|| selection.first())
            }
            _ => None,
        }
    }
}
