// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guard predicates over `(context, event)`.
//!
//! Guards select among candidate transitions for the same `(state, event)`
//! pair. Where several guarded transitions are declared, the regions
//! evaluate them in declared order and the first truthy guard wins; the
//! guards here are written to be total over any event shape they may be
//! handed.

use crate::context::Context;
use crate::event::Event;
use crate::notation;

/// Returns `true` if the event's sole selected element is a member of the
/// accumulated selection, compared by identity.
///
/// An event without a sole selected element is not in any subset.
pub(crate) fn selection_in_subset(context: &Context, event: &Event) -> bool {
    event.sole_selected().is_some_and(|candidate| {
        context
            .host
            .user_selection
            .iter()
            .any(|member| member.same_element(candidate))
    })
}

/// Complement of [`selection_in_subset`], kept as its own predicate so the
/// declared guard order of the selection region stays visible at the call
/// site.
pub(crate) fn selection_not_in_subset(context: &Context, event: &Event) -> bool {
    !selection_in_subset(context, event)
}

/// Returns `true` if a phrase drop resolves to a real reorder: a drop target
/// exists, differs from the source, and both indices address phrases of the
/// current rename value.
pub(crate) fn valid_drop_target(context: &Context, from: usize, to: Option<usize>) -> bool {
    let Some(to) = to else {
        return false;
    };
    let phrase_count = context
        .plugin
        .rename_value
        .as_deref()
        .map_or(0, |value| notation::split_phrases(value).len());
    to != from && from < phrase_count && to < phrase_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::HostElement;
    use alloc::string::ToString;
    use alloc::vec;

    fn multi_context() -> Context {
        let mut context = Context::default();
        context.host.user_selection = vec![
            HostElement::new("a", "A"),
            HostElement::new("b", "B"),
            HostElement::new("c", "C"),
        ];
        context
    }

    fn single_select(id: &str) -> Event {
        let element = HostElement::new(id, id.to_uppercase());
        Event::HostSelectSingle {
            selection: vec![element.clone()],
            focused: Some(element),
        }
    }

    #[test]
    fn subset_membership_is_by_identity() {
        let context = multi_context();
        assert!(selection_in_subset(&context, &single_select("b")));
        assert!(selection_not_in_subset(&context, &single_select("d")));
    }

    #[test]
    fn event_without_sole_element_is_not_in_subset() {
        let context = multi_context();
        let event = Event::HostSelectSingle {
            selection: vec![],
            focused: None,
        };
        assert!(!selection_in_subset(&context, &event));
        assert!(selection_not_in_subset(&context, &event));
    }

    #[test]
    fn drop_target_validity() {
        let mut context = Context::default();
        context.plugin.rename_value = Some("a - b - c".to_string());

        assert!(valid_drop_target(&context, 0, Some(2)));
        assert!(!valid_drop_target(&context, 0, Some(0)));
        assert!(!valid_drop_target(&context, 0, Some(3)));
        assert!(!valid_drop_target(&context, 3, Some(0)));
        assert!(!valid_drop_target(&context, 0, None));
    }

    #[test]
    fn drop_target_with_no_rename_value_is_invalid() {
        let context = Context::default();
        assert!(!valid_drop_target(&context, 0, Some(1)));
    }
}
