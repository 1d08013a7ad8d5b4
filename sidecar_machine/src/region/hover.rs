// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two hover regions: tooltip and definition lookups.
//!
//! Both are structurally identical default/specific toggles driven by
//! pointer enter/exit, but their exit behavior differs: leaving a control
//! restores the default tooltip, while leaving a definition entry keeps the
//! last term and text on screen. The asymmetry is deliberate and covered by
//! tests.

use crate::actions;
use crate::context::Context;
use crate::event::Event;
use crate::lexicon::{Lexicon, Locale};

/// Leaf states of the hover-tooltip region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TooltipState {
    /// The locale's default tooltip is shown.
    #[default]
    DefaultTooltip,
    /// A control-specific tooltip is shown.
    SpecificTooltip,
}

impl TooltipState {
    /// A short static name for tracing and diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DefaultTooltip => "default_tooltip",
            Self::SpecificTooltip => "specific_tooltip",
        }
    }
}

/// Leaf states of the hover-definition region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DefinitionState {
    /// No definition entry is hovered.
    #[default]
    DefaultDefinition,
    /// A definition entry is hovered.
    SpecificDefinition,
}

impl DefinitionState {
    /// A short static name for tracing and diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DefaultDefinition => "default_definition",
            Self::SpecificDefinition => "specific_definition",
        }
    }
}

pub(crate) fn dispatch_tooltip(
    state: &mut TooltipState,
    draft: &mut Context,
    event: &Event,
    lexicon: &impl Lexicon,
    locale: &Locale,
) -> bool {
    match (*state, event) {
        (TooltipState::DefaultTooltip, Event::HoverUiElementEnter(element)) => {
            actions::show_tooltip(draft, lexicon, *element);
            *state = TooltipState::SpecificTooltip;
            true
        }
        (TooltipState::SpecificTooltip, Event::HoverUiElementExit) => {
            actions::reset_tooltip(draft, locale);
            *state = TooltipState::DefaultTooltip;
            true
        }
        _ => false,
    }
}

pub(crate) fn dispatch_definition(
    state: &mut DefinitionState,
    draft: &mut Context,
    event: &Event,
    lexicon: &impl Lexicon,
) -> bool {
    match (*state, event) {
        (DefinitionState::DefaultDefinition, Event::HoverDefinitionEnter { term }) => {
            actions::show_definition(draft, lexicon, term);
            *state = DefinitionState::SpecificDefinition;
            true
        }
        (DefinitionState::SpecificDefinition, Event::HoverDefinitionExit) => {
            actions::reset_definition(draft);
            *state = DefinitionState::DefaultDefinition;
            true
        }
        _ => false,
    }
}
