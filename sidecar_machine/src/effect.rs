// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outbound effects produced by transitions.
//!
//! Side-effecting actions never talk to the host directly. They queue an
//! [`Effect`] instead, and [`Coordinator::dispatch`] returns the queue
//! alongside the committed context. The embedder (normally the bridge
//! crate) drains the queue and performs the actual fire-and-forget postings,
//! which keeps the core testable without a live host channel.
//!
//! [`Coordinator::dispatch`]: crate::coordinator::Coordinator::dispatch

use alloc::string::String;
use smallvec::SmallVec;

use crate::context::HostElement;
use crate::region::selection::SelectionState;

/// One queued outbound consequence of a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Ask the host to select `selected` (the panel focused it).
    SelectionByPlugin {
        /// The element the panel focused.
        selected: HostElement,
    },
    /// Ask the host to rename `selected` to `new_name`.
    RenameByPlugin {
        /// The element to rename.
        selected: HostElement,
        /// The committed rename value.
        new_name: String,
    },
    /// (Re)install the inbound host-message subscription.
    ///
    /// Emitted on every selection-state entry, including external re-entries
    /// of the same state. The key names the requesting leaf so the bridge's
    /// single-slot registry can keep installation idempotent.
    SubscribeHostMessages {
        /// The selection leaf that holds the subscription.
        key: SelectionState,
    },
}

/// The effect queue one dispatch produces.
///
/// Most dispatches queue zero or one effect; the inline capacity keeps the
/// common case allocation-free.
pub type Effects = SmallVec<[Effect; 2]>;
