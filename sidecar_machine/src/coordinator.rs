// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coordinator: one dispatch loop over all parallel regions.
//!
//! The coordinator exclusively owns the [`Context`] and the active leaf
//! state of every region. Dispatch is single-threaded and run-to-completion:
//! all region passes for one event finish before the next event is accepted,
//! so no transition ever observes a half-applied context.
//!
//! Each region pass works on a draft clone of the context. The region's
//! guards evaluate against the draft before any action has touched it (the
//! pre-transition context), its action list then accumulates into the draft,
//! and the draft is committed only if the region took a transition. The
//! committed context feeds the next region's pass, and the final context is
//! the input to the next event.
//!
//! Outbound consequences are never performed here; they accumulate into the
//! [`Effects`] queue the dispatch returns, for the embedder to drain.

use crate::context::Context;
use crate::effect::{Effect, Effects};
use crate::event::Event;
use crate::lexicon::{Lexicon, Locale};
use crate::notation::Notation;
use crate::region::hover::{DefinitionState, TooltipState};
use crate::region::linked::LinkedDataState;
use crate::region::notation::NotationState;
use crate::region::phrases::PhrasesState;
use crate::region::selection::SelectionState;
use crate::region::{hover, linked, notation, phrases, selection};
use crate::trace::{NoTrace, Region, TransitionTrace};

/// The central state machine of the panel.
///
/// Construct with [`new`](Self::new), run the initial entry set once with
/// [`boot`](Self::boot), then feed events through [`dispatch`](Self::dispatch)
/// — host-originated ones via the bridge listener, everything else straight
/// from the panel's interaction handlers.
#[derive(Clone, Debug)]
pub struct Coordinator<L> {
    context: Context,
    selection: SelectionState,
    notation: NotationState,
    phrases: PhrasesState,
    tooltip: TooltipState,
    definition: DefinitionState,
    linked: LinkedDataState,
    lexicon: L,
    locale: Locale,
}

impl<L: Lexicon> Coordinator<L> {
    /// Creates a coordinator with every region in its initial state and the
    /// context at its documented defaults.
    ///
    /// `tip_seed` selects the placeholder tip; see [`Locale::tip`].
    #[must_use]
    pub fn new(lexicon: L, locale: Locale, tip_seed: u64) -> Self {
        let context = Context::initial(&locale, tip_seed);
        Self {
            context,
            selection: SelectionState::default(),
            notation: NotationState::default(),
            phrases: PhrasesState::default(),
            tooltip: TooltipState::default(),
            definition: DefinitionState::default(),
            linked: LinkedDataState::default(),
            lexicon,
            locale,
        }
    }

    /// Runs the initial-state entry set and returns its effects.
    ///
    /// The no-selection leaf holds the host subscription from the start, and
    /// the notation region renders on entry, so booting installs the
    /// subscription keyed by [`SelectionState::NoSelection`] and formats the
    /// (initially empty) rename value. Call once, before the first dispatch.
    pub fn boot(&mut self) -> Effects {
        let mut effects = Effects::new();
        effects.push(Effect::SubscribeHostMessages {
            key: self.selection,
        });
        let mut draft = self.context.clone();
        crate::actions::render_notation(&mut draft, Notation::SpacedDashes);
        self.context = draft;
        effects
    }

    /// Dispatches one event to every region and returns the queued effects.
    ///
    /// Regions that do not recognize the event leave their sub-state and
    /// context contributions unchanged; an event no region recognizes is a
    /// no-op, not an error.
    pub fn dispatch(&mut self, event: &Event) -> Effects {
        self.dispatch_traced(event, &mut NoTrace)
    }

    /// Like [`dispatch`](Self::dispatch), reporting each applied transition
    /// to `trace` in region pass order.
    pub fn dispatch_traced(&mut self, event: &Event, trace: &mut impl TransitionTrace) -> Effects {
        let mut effects = Effects::new();

        // Definition hover.
        {
            let mut draft = self.context.clone();
            let from = self.definition.label();
            if hover::dispatch_definition(&mut self.definition, &mut draft, event, &self.lexicon) {
                self.context = draft;
                trace.transition(Region::Definition, event.kind(), from, self.definition.label());
            }
        }

        // Linked data.
        {
            let mut draft = self.context.clone();
            let from = self.linked.label();
            if linked::dispatch(&mut self.linked, &mut draft, event, &mut effects) {
                self.context = draft;
                trace.transition(Region::LinkedData, event.kind(), from, self.linked.label());
            }
        }

        // Tooltip hover.
        {
            let mut draft = self.context.clone();
            let from = self.tooltip.label();
            if hover::dispatch_tooltip(
                &mut self.tooltip,
                &mut draft,
                event,
                &self.lexicon,
                &self.locale,
            ) {
                self.context = draft;
                trace.transition(Region::Tooltip, event.kind(), from, self.tooltip.label());
            }
        }

        // Host selection.
        {
            let mut draft = self.context.clone();
            let from = self.selection.label();
            if selection::dispatch(&mut self.selection, &mut draft, event, &mut effects) {
                self.context = draft;
                trace.transition(Region::Selection, event.kind(), from, self.selection.label());
            }
        }

        // Multi-phrase editor.
        {
            let mut draft = self.context.clone();
            let from = self.phrases.label();
            if phrases::dispatch(&mut self.phrases, &mut draft, event) {
                self.context = draft;
                trace.transition(Region::Phrases, event.kind(), from, self.phrases.label());
            }
        }

        // Notation toggle.
        {
            let mut draft = self.context.clone();
            let from = self.notation.label();
            if notation::dispatch(&mut self.notation, &mut draft, event) {
                self.context = draft;
                trace.transition(Region::Notation, event.kind(), from, self.notation.label());
            }
        }

        effects
    }

    /// The committed context after the last accepted dispatch.
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Active leaf of the selection region.
    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection
    }

    /// Active leaf of the notation region.
    #[must_use]
    pub fn notation_state(&self) -> NotationState {
        self.notation
    }

    /// Active leaf of the multi-phrase region.
    #[must_use]
    pub fn phrases_state(&self) -> PhrasesState {
        self.phrases
    }

    /// Active leaf of the hover-tooltip region.
    #[must_use]
    pub fn tooltip_state(&self) -> TooltipState {
        self.tooltip
    }

    /// Active leaf of the hover-definition region.
    #[must_use]
    pub fn definition_state(&self) -> DefinitionState {
        self.definition
    }

    /// Active leaf of the linked-data region.
    #[must_use]
    pub fn linked_state(&self) -> LinkedDataState {
        self.linked
    }

    /// The locale supplied at construction.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}
