// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection region: tracks the shape of the host's element selection.
//!
//! Four leaf states mirror what the host last reported: nothing selected, a
//! raw multi-selection, a focused subset of a multi-selection, and a raw
//! single selection. Host single-selection events are routed by the
//! subset-containment guards: a sole element already inside the accumulated
//! selection narrows focus within it, anything else replaces the selection
//! outright.
//!
//! Every leaf state — `NoSelection` included — holds the inbound host
//! subscription, so each entry (external self re-entries too) queues a keyed
//! [`Effect::SubscribeHostMessages`] for the bridge's single-slot registry.

use crate::actions;
use crate::context::Context;
use crate::effect::{Effect, Effects};
use crate::event::Event;
use crate::guards;

/// Leaf states of the selection region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionState {
    /// The host reports no selection.
    #[default]
    NoSelection,
    /// More than one element is selected, none focused.
    RawMultiSelection,
    /// A multi-selection with one member focused by the panel.
    MultiSelectionSubSet,
    /// Exactly one element is selected.
    RawSingleSelection,
}

impl SelectionState {
    /// A short static name for tracing and diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NoSelection => "no_selection",
            Self::RawMultiSelection => "raw_multi_selection",
            Self::MultiSelectionSubSet => "multi_selection_sub_set",
            Self::RawSingleSelection => "raw_single_selection",
        }
    }
}

/// Moves the region to `target` and re-installs the host subscription keyed
/// by the entered leaf. Runs for external self re-entries as well.
fn enter(state: &mut SelectionState, target: SelectionState, effects: &mut Effects) {
    *state = target;
    effects.push(Effect::SubscribeHostMessages { key: target });
}

pub(crate) fn dispatch(
    state: &mut SelectionState,
    draft: &mut Context,
    event: &Event,
    effects: &mut Effects,
) -> bool {
    use SelectionState::*;

    match (*state, event) {
        (NoSelection, Event::HostSelectMulti { selection }) => {
            actions::assign_host_selection(draft, selection);
            actions::clear_host_focus(draft);
            enter(state, RawMultiSelection, effects);
            true
        }
        (NoSelection, Event::HostSelectSingle { selection, .. }) => {
            actions::assign_host_selection(draft, selection);
            actions::assign_raw_single_selection(draft, event.sole_selected());
            enter(state, RawSingleSelection, effects);
            true
        }
        (RawMultiSelection | MultiSelectionSubSet, Event::HostSelectSingle { .. }) => {
            // Two guarded transitions are declared for this pair; they are
            // evaluated in declared order and the first truthy guard wins.
            if guards::selection_in_subset(draft, event) {
                // Focus narrows (or moves) within the kept multi-selection.
                actions::assign_focus_selection(draft, event.sole_selected(), effects);
                enter(state, MultiSelectionSubSet, effects);
                true
            } else if guards::selection_not_in_subset(draft, event) {
                actions::assign_raw_single_selection(draft, event.sole_selected());
                enter(state, RawSingleSelection, effects);
                true
            } else {
                false
            }
        }
        (
            RawMultiSelection | MultiSelectionSubSet | RawSingleSelection,
            Event::HostSelectMulti { selection },
        ) => {
            actions::assign_host_selection(draft, selection);
            actions::clear_host_focus(draft);
            enter(state, RawMultiSelection, effects);
            true
        }
        (RawMultiSelection | MultiSelectionSubSet, Event::SelectFocus { focused }) => {
            actions::assign_focus_selection(draft, Some(focused), effects);
            enter(state, MultiSelectionSubSet, effects);
            true
        }
        (MultiSelectionSubSet, Event::HostDeselect) => {
            actions::assign_focus_selection(draft, None, effects);
            actions::clear_host_focus(draft);
            enter(state, RawMultiSelection, effects);
            true
        }
        (MultiSelectionSubSet, Event::ToggleHostOptions) => {
            actions::toggle_host_options(draft);
            enter(state, MultiSelectionSubSet, effects);
            true
        }
        (
            RawMultiSelection | MultiSelectionSubSet | RawSingleSelection,
            Event::HostSelectionUnavailable,
        ) => {
            // Selection-unavailable behaves the same from every selection
            // sub-state: back to no-selection, options flag flipped, focus
            // cleared.
            actions::toggle_host_options(draft);
            actions::clear_host_focus(draft);
            enter(state, NoSelection, effects);
            true
        }
        (RawSingleSelection, Event::HostSelectSingle { .. }) => {
            actions::assign_raw_single_selection(draft, event.sole_selected());
            enter(state, RawSingleSelection, effects);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::HostElement;
    use alloc::vec;
    use alloc::vec::Vec;

    fn elements(ids: &[&str]) -> Vec<HostElement> {
        ids.iter()
            .map(|id| HostElement::new(*id, alloc::format!("Elem {id}")))
            .collect()
    }

    fn single(id: &str) -> Event {
        let element = HostElement::new(id, alloc::format!("Elem {id}"));
        Event::HostSelectSingle {
            selection: vec![element.clone()],
            focused: Some(element),
        }
    }

    fn subscribe_keys(effects: &Effects) -> Vec<SelectionState> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::SubscribeHostMessages { key } => Some(*key),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn multi_select_from_no_selection_accumulates_and_clears_focus() {
        let mut state = SelectionState::NoSelection;
        let mut draft = Context::default();
        draft.host.selection_focused_element = Some(HostElement::new("stale", "Stale"));
        let mut effects = Effects::new();

        let taken = dispatch(
            &mut state,
            &mut draft,
            &Event::HostSelectMulti {
                selection: elements(&["a", "b"]),
            },
            &mut effects,
        );

        assert!(taken);
        assert_eq!(state, SelectionState::RawMultiSelection);
        assert_eq!(draft.host.user_selection.len(), 2);
        assert!(draft.host.selection_focused_element.is_none());
        assert!(draft.plugin.host_search.search_value.is_none());
        assert!(draft.plugin.host_search.is_options_open);
        assert_eq!(
            subscribe_keys(&effects),
            vec![SelectionState::RawMultiSelection]
        );
    }

    #[test]
    fn in_subset_single_select_narrows_focus() {
        let mut state = SelectionState::RawMultiSelection;
        let mut draft = Context::default();
        draft.host.user_selection = elements(&["a", "b", "c"]);
        let mut effects = Effects::new();

        assert!(dispatch(&mut state, &mut draft, &single("b"), &mut effects));
        assert_eq!(state, SelectionState::MultiSelectionSubSet);
        // The multi-selection itself is kept.
        assert_eq!(draft.host.user_selection.len(), 3);
        assert_eq!(
            draft.host.selection_focused_element.as_ref().map(|e| e.id.as_str()),
            Some("b")
        );
        assert!(effects.iter().any(|effect| matches!(
            effect,
            Effect::SelectionByPlugin { selected } if selected.id == "b"
        )));
    }

    #[test]
    fn out_of_subset_single_select_replaces_selection() {
        let mut state = SelectionState::RawMultiSelection;
        let mut draft = Context::default();
        draft.host.user_selection = elements(&["a", "b", "c"]);
        let mut effects = Effects::new();

        assert!(dispatch(&mut state, &mut draft, &single("d"), &mut effects));
        assert_eq!(state, SelectionState::RawSingleSelection);
        assert_eq!(draft.host.user_selection, elements(&["d"]));
        // Replacing outright does not echo a selection back to the host.
        assert!(
            !effects
                .iter()
                .any(|effect| matches!(effect, Effect::SelectionByPlugin { .. }))
        );
    }

    #[test]
    fn subset_update_keeps_the_accumulated_selection() {
        let mut state = SelectionState::MultiSelectionSubSet;
        let mut draft = Context::default();
        draft.host.user_selection = elements(&["a", "b", "c"]);
        draft.host.selection_focused_element = Some(HostElement::new("b", "Elem b"));
        let mut effects = Effects::new();

        assert!(dispatch(&mut state, &mut draft, &single("c"), &mut effects));
        assert_eq!(state, SelectionState::MultiSelectionSubSet);
        assert_eq!(draft.host.user_selection.len(), 3);
        assert_eq!(
            draft.host.selection_focused_element.as_ref().map(|e| e.id.as_str()),
            Some("c")
        );
    }

    #[test]
    fn deselect_in_subset_returns_to_raw_multi_without_posting() {
        let mut state = SelectionState::MultiSelectionSubSet;
        let mut draft = Context::default();
        draft.host.user_selection = elements(&["a", "b"]);
        draft.host.selection_focused_element = Some(HostElement::new("a", "Elem a"));
        let mut effects = Effects::new();

        assert!(dispatch(
            &mut state,
            &mut draft,
            &Event::HostDeselect,
            &mut effects
        ));
        assert_eq!(state, SelectionState::RawMultiSelection);
        assert!(draft.host.selection_focused_element.is_none());
        assert!(
            !effects
                .iter()
                .any(|effect| matches!(effect, Effect::SelectionByPlugin { .. }))
        );
    }

    #[test]
    fn unavailable_is_uniform_across_sub_states() {
        for start in [
            SelectionState::RawMultiSelection,
            SelectionState::MultiSelectionSubSet,
            SelectionState::RawSingleSelection,
        ] {
            let mut state = start;
            let mut draft = Context::default();
            draft.host.user_selection = elements(&["a", "b"]);
            draft.host.selection_focused_element = Some(HostElement::new("a", "Elem a"));
            let mut effects = Effects::new();

            assert!(dispatch(
                &mut state,
                &mut draft,
                &Event::HostSelectionUnavailable,
                &mut effects
            ));
            assert_eq!(state, SelectionState::NoSelection);
            assert!(draft.plugin.host_search.is_options_open);
            assert!(draft.host.selection_focused_element.is_none());
            assert_eq!(subscribe_keys(&effects), vec![SelectionState::NoSelection]);
        }
    }

    #[test]
    fn deselect_events_are_ignored_outside_the_subset_state() {
        for start in [
            SelectionState::NoSelection,
            SelectionState::RawMultiSelection,
            SelectionState::RawSingleSelection,
        ] {
            let mut state = start;
            let mut draft = Context::default();
            let mut effects = Effects::new();
            assert!(!dispatch(
                &mut state,
                &mut draft,
                &Event::HostDeselect,
                &mut effects
            ));
            assert_eq!(state, start);
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn manual_options_toggle_only_in_subset() {
        let mut state = SelectionState::MultiSelectionSubSet;
        let mut draft = Context::default();
        draft.plugin.host_search.is_options_open = true;
        let mut effects = Effects::new();

        assert!(dispatch(
            &mut state,
            &mut draft,
            &Event::ToggleHostOptions,
            &mut effects
        ));
        assert!(!draft.plugin.host_search.is_options_open);
        // External self re-entry re-installs the subscription.
        assert_eq!(
            subscribe_keys(&effects),
            vec![SelectionState::MultiSelectionSubSet]
        );

        let mut state = SelectionState::RawSingleSelection;
        assert!(!dispatch(
            &mut state,
            &mut draft,
            &Event::ToggleHostOptions,
            &mut Effects::new()
        ));
    }
}
