// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The action library: context deltas and queued effects, one function per
//! declared action.
//!
//! Actions mutate the region's draft context; the coordinator commits the
//! draft only after the region's full action list has run. Side-effecting
//! actions additionally queue an [`Effect`] — they never post to the host
//! themselves.

use alloc::string::String;
use alloc::vec;

use crate::context::{Context, HostElement};
use crate::effect::{Effect, Effects};
use crate::event::UiElement;
use crate::lexicon::{Lexicon, Locale};
use crate::notation::{self, Notation};

/// Resolves and shows the tooltip for a hovered panel control.
pub(crate) fn show_tooltip(draft: &mut Context, lexicon: &impl Lexicon, element: UiElement) {
    draft.plugin.tooltip = lexicon.tooltip(element);
}

/// Restores the locale's default tooltip.
pub(crate) fn reset_tooltip(draft: &mut Context, locale: &Locale) {
    draft.plugin.tooltip = locale.tooltip_default.clone();
}

/// Stores the hovered term and its resolved definition text.
pub(crate) fn show_definition(draft: &mut Context, lexicon: &impl Lexicon, term: &str) {
    draft.plugin.ontology_search.focused_definition = Some(String::from(term));
    draft.plugin.ontology_search.full_text = lexicon.definition(term);
}

/// Leaves the focused definition and its text in place on hover exit.
///
/// Unlike the tooltip reset, the definition pane keeps showing the last
/// looked-up term after the pointer leaves it. Callers relying on a cleared
/// pane must dispatch a fresh hover-enter instead.
pub(crate) fn reset_definition(_draft: &mut Context) {}

/// Replaces the accumulated host selection and opens the options panel for
/// multi-selections.
pub(crate) fn assign_host_selection(draft: &mut Context, selection: &[HostElement]) {
    draft.host.user_selection = selection.to_vec();
    if selection.len() > 1 {
        draft.plugin.host_search.is_options_open = true;
    }
}

/// Focuses one element of the current selection: records it, mirrors its
/// name into the search field, closes the options panel, and asks the host
/// to select it.
///
/// The outbound posting is guarded on a defined focused element; focusing
/// "nothing" (a deselect within the subset) only clears the panel fields.
pub(crate) fn assign_focus_selection(
    draft: &mut Context,
    focused: Option<&HostElement>,
    effects: &mut Effects,
) {
    draft.host.selection_focused_element = focused.cloned();
    draft.plugin.host_search.search_value = focused.map(|element| element.name.clone());
    draft.plugin.host_search.is_options_open = false;
    if let Some(selected) = focused {
        effects.push(Effect::SelectionByPlugin {
            selected: selected.clone(),
        });
    }
}

/// Entry action of the raw single-selection state: focus the sole element,
/// mirror its name, close the options panel, and collapse the accumulated
/// selection to that singleton.
pub(crate) fn assign_raw_single_selection(draft: &mut Context, focused: Option<&HostElement>) {
    draft.host.selection_focused_element = focused.cloned();
    draft.plugin.host_search.search_value = focused.map(|element| element.name.clone());
    draft.plugin.host_search.is_options_open = false;
    draft.host.user_selection = match &draft.host.selection_focused_element {
        Some(element) => vec![element.clone()],
        None => vec![],
    };
}

/// Re-renders the rename value in the given notation.
pub(crate) fn render_notation(draft: &mut Context, target: Notation) {
    draft.plugin.rename_value = notation::reformat(
        draft.plugin.rename_value.as_deref(),
        &draft.plugin.ontology_search.confirmed_rename_parts,
        target,
    );
}

/// Overwrites the rename value with copied component text, rendered in the
/// requested notation.
pub(crate) fn overwrite_phrases(draft: &mut Context, text: &str, target: Notation) {
    draft.plugin.rename_value = notation::join_phrases(&notation::split_phrases(text), target);
}

/// Rewrites the rename value from an edit event.
pub(crate) fn edit_phrases(draft: &mut Context, input: Option<&str>) {
    draft.plugin.rename_value = input.map(String::from);
}

/// Moves one phrase of the rename value to a new position, preserving the
/// value's current notation.
///
/// Out-of-range indices leave the value untouched; the drop guard has
/// already validated them on the declared path.
pub(crate) fn reorder_phrases(draft: &mut Context, from: usize, to: usize) {
    let Some(value) = draft.plugin.rename_value.as_deref() else {
        return;
    };
    let rendered = notation::detect(value);
    let mut parts = notation::split_phrases(value);
    if from >= parts.len() || to >= parts.len() {
        return;
    }
    let moved = parts.remove(from);
    parts.insert(to, moved);
    draft.plugin.rename_value = notation::join_phrases(&parts, rendered);
}

/// Queues the rename commit when both a focused element and a non-empty
/// rename value are present; otherwise does nothing.
pub(crate) fn commit_unlinked_rename(draft: &Context, effects: &mut Effects) {
    let Some(selected) = &draft.host.selection_focused_element else {
        return;
    };
    let Some(new_name) = draft.plugin.rename_value.as_deref() else {
        return;
    };
    if new_name.is_empty() {
        return;
    }
    effects.push(Effect::RenameByPlugin {
        selected: selected.clone(),
        new_name: String::from(new_name),
    });
}

/// Flips the options-panel visibility flag.
pub(crate) fn toggle_host_options(draft: &mut Context) {
    draft.plugin.host_search.is_options_open = !draft.plugin.host_search.is_options_open;
}

/// Clears the focused element and the mirrored search text.
pub(crate) fn clear_host_focus(draft: &mut Context) {
    draft.host.selection_focused_element = None;
    draft.plugin.host_search.search_value = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn focus_selection_posts_only_for_a_defined_element() {
        let mut draft = Context::default();
        let mut effects = Effects::new();
        let element = HostElement::new("1", "Card");

        assign_focus_selection(&mut draft, Some(&element), &mut effects);
        assert_eq!(
            draft.host.selection_focused_element.as_ref(),
            Some(&element)
        );
        assert_eq!(draft.plugin.host_search.search_value.as_deref(), Some("Card"));
        assert!(!draft.plugin.host_search.is_options_open);
        assert_eq!(
            effects.as_slice(),
            [Effect::SelectionByPlugin { selected: element }]
        );

        let mut effects = Effects::new();
        assign_focus_selection(&mut draft, None, &mut effects);
        assert!(draft.host.selection_focused_element.is_none());
        assert!(draft.plugin.host_search.search_value.is_none());
        assert!(effects.is_empty());
    }

    #[test]
    fn raw_single_selection_collapses_to_the_singleton() {
        let mut draft = Context::default();
        draft.host.user_selection = vec![
            HostElement::new("a", "A"),
            HostElement::new("b", "B"),
        ];

        let focused = HostElement::new("b", "B");
        assign_raw_single_selection(&mut draft, Some(&focused));
        assert_eq!(draft.host.user_selection, vec![focused.clone()]);
        assert_eq!(draft.host.selection_focused_element, Some(focused));

        assign_raw_single_selection(&mut draft, None);
        assert!(draft.host.user_selection.is_empty());
    }

    #[test]
    fn commit_requires_focus_and_a_non_empty_value() {
        let mut draft = Context::default();
        let mut effects = Effects::new();

        commit_unlinked_rename(&draft, &mut effects);
        assert!(effects.is_empty());

        draft.host.selection_focused_element = Some(HostElement::new("1", "Old"));
        draft.plugin.rename_value = Some(String::new());
        commit_unlinked_rename(&draft, &mut effects);
        assert!(effects.is_empty());

        draft.plugin.rename_value = Some("New Name".to_string());
        commit_unlinked_rename(&draft, &mut effects);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn reorder_preserves_the_rendered_notation() {
        let mut draft = Context::default();
        draft.plugin.rename_value = Some("a / b / c".to_string());
        reorder_phrases(&mut draft, 0, 2);
        assert_eq!(draft.plugin.rename_value.as_deref(), Some("b / c / a"));
    }

    #[test]
    fn multi_selection_opens_the_options_panel() {
        let mut draft = Context::default();
        assign_host_selection(&mut draft, &[HostElement::new("a", "A")]);
        assert!(!draft.plugin.host_search.is_options_open);

        assign_host_selection(
            &mut draft,
            &[HostElement::new("a", "A"), HostElement::new("b", "B")],
        );
        assert!(draft.plugin.host_search.is_options_open);
    }
}
