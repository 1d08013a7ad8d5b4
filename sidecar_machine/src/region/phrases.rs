// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The multi-phrase region: cardinality of the rename/search phrase editor.
//!
//! The outer machine distinguishes an empty editor from a filled one; inside
//! `Filled`, a nested machine tracks single phrase, multiple phrases, and an
//! in-flight drag. Deleting the last phrase reaches the nested terminal
//! state, which immediately triggers the outer return to the empty state
//! within the same dispatch — the terminal sub-state is never observable
//! between events.
//!
//! Edit events rewrite the rename value in every sub-state without changing
//! sub-state; the exception is the empty state, where an edit promotes the
//! editor to `Filled`.

use crate::actions;
use crate::context::Context;
use crate::event::Event;
use crate::guards;

/// Nested states within the filled editor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PhraseCardinality {
    /// Exactly one phrase.
    #[default]
    SinglePhrase,
    /// Two or more phrases.
    MultiPhrase,
    /// A phrase is being dragged to a new position.
    DraggingPhrase,
}

/// Outer states of the multi-phrase region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PhrasesState {
    /// The editor holds no phrases.
    #[default]
    EmptyMultiphrases,
    /// The editor holds phrases; the nested state tracks how many.
    Filled(PhraseCardinality),
}

impl PhrasesState {
    /// A short static name for tracing and diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EmptyMultiphrases => "empty_multiphrases",
            Self::Filled(PhraseCardinality::SinglePhrase) => "filled/single_phrase",
            Self::Filled(PhraseCardinality::MultiPhrase) => "filled/multi_phrase",
            Self::Filled(PhraseCardinality::DraggingPhrase) => "filled/dragging_phrase",
        }
    }
}

pub(crate) fn dispatch(state: &mut PhrasesState, draft: &mut Context, event: &Event) -> bool {
    use PhraseCardinality::*;
    use PhrasesState::*;

    match (*state, event) {
        (
            EmptyMultiphrases,
            Event::CopyTextToRename {
                text,
                target_notation,
            },
        ) => {
            actions::overwrite_phrases(draft, text, *target_notation);
            *state = Filled(SinglePhrase);
            true
        }
        (EmptyMultiphrases, Event::EditPhrases { input }) => {
            actions::edit_phrases(draft, input.as_deref());
            *state = Filled(SinglePhrase);
            true
        }
        (Filled(_), Event::EditPhrases { input }) => {
            actions::edit_phrases(draft, input.as_deref());
            true
        }
        (Filled(SinglePhrase), Event::DeleteLastPhrase) => {
            // Nested terminal state; the outer deleted-last-phrase
            // transition fires immediately.
            *state = EmptyMultiphrases;
            true
        }
        (Filled(SinglePhrase), Event::AddPhrase) => {
            *state = Filled(MultiPhrase);
            true
        }
        (Filled(MultiPhrase), Event::DragPhrase) => {
            *state = Filled(DraggingPhrase);
            true
        }
        (Filled(MultiPhrase), Event::DeleteSecondLastPhrase) => {
            *state = Filled(SinglePhrase);
            true
        }
        (
            Filled(MultiPhrase),
            Event::AddUnconfirmedPhrase | Event::ConfirmPhrase | Event::DeleteMultiPhrase,
        ) => {
            // Declared transitions with no target and no actions: the events
            // are accepted without a state or context change.
            true
        }
        (Filled(DraggingPhrase), Event::DropPhrase { from, to }) => {
            // Two declared transitions for this pair, evaluated in declared
            // order; the first truthy guard wins.
            if guards::valid_drop_target(draft, *from, *to)
                && let Some(to) = *to
            {
                actions::reorder_phrases(draft, *from, to);
            }
            // The invalid-drop fallthrough is a no-op that still settles the
            // drag.
            *state = Filled(MultiPhrase);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Notation;
    use alloc::string::ToString;

    #[test]
    fn copy_text_promotes_and_renders_the_target_notation() {
        let mut state = PhrasesState::EmptyMultiphrases;
        let mut draft = Context::default();

        assert!(dispatch(
            &mut state,
            &mut draft,
            &Event::CopyTextToRename {
                text: "button - primary".to_string(),
                target_notation: Notation::SpacedSlashes,
            },
        ));
        assert_eq!(
            state,
            PhrasesState::Filled(PhraseCardinality::SinglePhrase)
        );
        assert_eq!(
            draft.plugin.rename_value.as_deref(),
            Some("button / primary")
        );
    }

    #[test]
    fn copy_text_is_ignored_once_filled() {
        let mut state = PhrasesState::Filled(PhraseCardinality::MultiPhrase);
        let mut draft = Context::default();
        draft.plugin.rename_value = Some("kept".to_string());

        assert!(!dispatch(
            &mut state,
            &mut draft,
            &Event::CopyTextToRename {
                text: "ignored".to_string(),
                target_notation: Notation::SpacedDashes,
            },
        ));
        assert_eq!(draft.plugin.rename_value.as_deref(), Some("kept"));
    }

    #[test]
    fn edits_are_accepted_in_every_sub_state() {
        for card in [
            PhraseCardinality::SinglePhrase,
            PhraseCardinality::MultiPhrase,
            PhraseCardinality::DraggingPhrase,
        ] {
            let mut state = PhrasesState::Filled(card);
            let mut draft = Context::default();
            assert!(dispatch(
                &mut state,
                &mut draft,
                &Event::EditPhrases {
                    input: Some("edited".to_string()),
                },
            ));
            assert_eq!(state, PhrasesState::Filled(card));
            assert_eq!(draft.plugin.rename_value.as_deref(), Some("edited"));
        }
    }

    #[test]
    fn delete_last_phrase_collapses_to_empty() {
        let mut state = PhrasesState::Filled(PhraseCardinality::SinglePhrase);
        let mut draft = Context::default();
        assert!(dispatch(
            &mut state,
            &mut draft,
            &Event::DeleteLastPhrase
        ));
        assert_eq!(state, PhrasesState::EmptyMultiphrases);
    }

    #[test]
    fn delete_last_phrase_in_empty_is_a_no_op() {
        let mut state = PhrasesState::EmptyMultiphrases;
        let mut draft = Context::default();
        assert!(!dispatch(
            &mut state,
            &mut draft,
            &Event::DeleteLastPhrase
        ));
        assert_eq!(state, PhrasesState::EmptyMultiphrases);
    }

    #[test]
    fn valid_drop_reorders_and_settles() {
        let mut state = PhrasesState::Filled(PhraseCardinality::DraggingPhrase);
        let mut draft = Context::default();
        draft.plugin.rename_value = Some("a - b - c".to_string());

        assert!(dispatch(
            &mut state,
            &mut draft,
            &Event::DropPhrase {
                from: 2,
                to: Some(0),
            },
        ));
        assert_eq!(state, PhrasesState::Filled(PhraseCardinality::MultiPhrase));
        assert_eq!(draft.plugin.rename_value.as_deref(), Some("c - a - b"));
    }

    #[test]
    fn invalid_drop_settles_without_reordering() {
        let mut state = PhrasesState::Filled(PhraseCardinality::DraggingPhrase);
        let mut draft = Context::default();
        draft.plugin.rename_value = Some("a - b".to_string());

        assert!(dispatch(
            &mut state,
            &mut draft,
            &Event::DropPhrase { from: 0, to: None },
        ));
        assert_eq!(state, PhrasesState::Filled(PhraseCardinality::MultiPhrase));
        assert_eq!(draft.plugin.rename_value.as_deref(), Some("a - b"));
    }

    #[test]
    fn declared_no_op_events_are_accepted_in_multi_phrase() {
        let mut state = PhrasesState::Filled(PhraseCardinality::MultiPhrase);
        let mut draft = Context::default();
        for event in [
            Event::AddUnconfirmedPhrase,
            Event::ConfirmPhrase,
            Event::DeleteMultiPhrase,
        ] {
            assert!(dispatch(&mut state, &mut draft, &event));
            assert_eq!(state, PhrasesState::Filled(PhraseCardinality::MultiPhrase));
        }
    }
}
