// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The notation region: a two-state toggle over the active naming
//! convention.
//!
//! Each state's entry re-renders the rename value in that notation.
//! Formatting is idempotent and derivable purely from context, so the toggle
//! never tracks previous raw text; it recomputes on every entry.

use crate::actions;
use crate::context::Context;
use crate::event::Event;
use crate::notation::Notation;

/// Leaf states of the notation region, one per convention.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NotationState {
    /// Spaced-dashes rendering is active.
    #[default]
    SpacedDashes,
    /// Spaced-slashes rendering is active.
    SpacedSlashes,
}

impl NotationState {
    /// The convention this state renders with.
    #[must_use]
    pub fn notation(self) -> Notation {
        match self {
            Self::SpacedDashes => Notation::SpacedDashes,
            Self::SpacedSlashes => Notation::SpacedSlashes,
        }
    }

    /// A short static name for tracing and diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SpacedDashes => "spaced_dashes",
            Self::SpacedSlashes => "spaced_slashes",
        }
    }
}

pub(crate) fn dispatch(state: &mut NotationState, draft: &mut Context, event: &Event) -> bool {
    match (*state, event) {
        (NotationState::SpacedDashes, Event::ChangeNotation) => {
            *state = NotationState::SpacedSlashes;
            actions::render_notation(draft, Notation::SpacedSlashes);
            true
        }
        (NotationState::SpacedSlashes, Event::ChangeNotation) => {
            *state = NotationState::SpacedDashes;
            actions::render_notation(draft, Notation::SpacedDashes);
            true
        }
        _ => false,
    }
}
