// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The linked-data region: whether the rename data is linked to the focused
//! host element.
//!
//! While unlinked, the commit event posts the current rename value to the
//! host as a one-shot rename, guarded on a focused element and a non-empty
//! value.

use crate::actions;
use crate::context::Context;
use crate::effect::Effects;
use crate::event::Event;

/// Leaf states of the linked-data region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LinkedDataState {
    /// Rename data is not linked to a host element.
    #[default]
    Unlinked,
    /// Rename data is linked to a host element.
    Linked,
}

impl LinkedDataState {
    /// A short static name for tracing and diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unlinked => "unlinked",
            Self::Linked => "linked",
        }
    }
}

pub(crate) fn dispatch(
    state: &mut LinkedDataState,
    draft: &mut Context,
    event: &Event,
    effects: &mut Effects,
) -> bool {
    match (*state, event) {
        (LinkedDataState::Unlinked, Event::CreateLinkedData) => {
            *state = LinkedDataState::Linked;
            true
        }
        (LinkedDataState::Unlinked, Event::CommitUnlinkedRename) => {
            actions::commit_unlinked_rename(draft, effects);
            true
        }
        (LinkedDataState::Linked, Event::RemoveLinkedData) => {
            *state = LinkedDataState::Unlinked;
            true
        }
        (LinkedDataState::Linked, Event::UpdateLinkedData) => true,
        _ => false,
    }
}
