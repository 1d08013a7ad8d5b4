// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability helpers for dispatch.
//!
//! The coordinator intentionally does not log. Embedders that want to
//! answer "which transitions did this event cause?" pass a
//! [`TransitionTrace`] sink to
//! [`Coordinator::dispatch_traced`](crate::coordinator::Coordinator::dispatch_traced);
//! the plain `dispatch` path pays nothing for it. [`TransitionRecorder`]
//! is a small sink that keeps the applied transitions in order, which is
//! usually all a test or a debug overlay needs.

use alloc::vec::Vec;

/// Names one of the coordinator's parallel regions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// The host-selection region.
    Selection,
    /// The naming-notation toggle.
    Notation,
    /// The multi-phrase editor region.
    Phrases,
    /// The hover-tooltip toggle.
    Tooltip,
    /// The hover-definition toggle.
    Definition,
    /// The linked-data region.
    LinkedData,
}

/// A callback sink for applied transitions.
///
/// `from` and `to` are the region's leaf-state labels; self- and internal
/// transitions report `from == to`.
pub trait TransitionTrace {
    /// Called once per region that took a transition for the dispatched
    /// event, in region pass order.
    fn transition(&mut self, region: Region, event: &'static str, from: &'static str, to: &'static str);
}

/// A sink that ignores every transition.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTrace;

impl TransitionTrace for NoTrace {
    fn transition(&mut self, _: Region, _: &'static str, _: &'static str, _: &'static str) {}
}

/// One recorded transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransitionRecord {
    /// The region that transitioned.
    pub region: Region,
    /// Kind of the event that caused it.
    pub event: &'static str,
    /// Leaf-state label before the transition.
    pub from: &'static str,
    /// Leaf-state label after the transition.
    pub to: &'static str,
}

/// Records applied transitions in dispatch order.
#[derive(Clone, Debug, Default)]
pub struct TransitionRecorder {
    records: Vec<TransitionRecord>,
}

impl TransitionRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded transitions, oldest first.
    #[must_use]
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Drops all recorded transitions.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl TransitionTrace for TransitionRecorder {
    fn transition(&mut self, region: Region, event: &'static str, from: &'static str, to: &'static str) {
        self.records.push(TransitionRecord {
            region,
            event,
            from,
            to,
        });
    }
}
