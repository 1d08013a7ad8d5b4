// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The inbound event listener and effect router.
//!
//! [`BridgeListener`] is the service the selection region keeps alive: it
//! holds the single inbound-message handler slot, classifies
//! selection-changed payloads into machine events, and routes drained
//! effects — outbound ones to a [`HostPort`], subscription bookkeeping into
//! its own slot.
//!
//! The machine re-requests the subscription on every selection-state entry,
//! re-entries of the same state included. The slot is keyed by the
//! requesting leaf and holds at most one registration, so each install
//! replaces the previous one and duplicate installs collapse instead of
//! double-delivering.

use core::fmt;

use sidecar_machine::region::selection::SelectionState;
use sidecar_machine::{Coordinator, Effect, Event, Lexicon};

use crate::messages::{InboundMessage, OutboundMessage};

/// The outbound half of the bridge: posts a message to the host.
///
/// Postings are fire-and-forget; implementations must not block on a
/// response, because the machine never awaits one.
pub trait HostPort {
    /// Posts one message to the host.
    fn post(&mut self, message: &OutboundMessage);
}

/// Classifies an inbound message into a machine event.
///
/// Selection-changed payloads map by shape: empty selection with the
/// unavailable flag, empty selection without it, more than one element, and
/// exactly one element (which also becomes the focused element). Messages
/// this core does not consume yield `None`.
#[must_use]
pub fn classify(message: &InboundMessage) -> Option<Event> {
    match message {
        InboundMessage::SelectionChanged {
            selection,
            is_selection_unavailable,
        } => {
            if selection.is_empty() {
                if *is_selection_unavailable {
                    return Some(Event::HostSelectionUnavailable);
                }
                return Some(Event::HostDeselect);
            }
            if selection.len() > 1 {
                return Some(Event::HostSelectMulti {
                    selection: selection.clone(),
                });
            }
            Some(Event::HostSelectSingle {
                selection: selection.clone(),
                focused: selection.first().cloned(),
            })
        }
        InboundMessage::Other => None,
    }
}

/// Error returned when an inbound payload is not valid JSON for the wire
/// schema.
pub struct DecodeError {
    source: serde_json::Error,
}

impl DecodeError {
    fn new(source: serde_json::Error) -> Self {
        Self { source }
    }
}

impl fmt::Debug for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecodeError {{ source: {:?} }}", self.source)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inbound bridge message is not valid: {}", self.source)
    }
}

impl core::error::Error for DecodeError {}

/// The single-slot, keyed inbound subscription plus effect routing.
#[derive(Clone, Debug, Default)]
pub struct BridgeListener {
    subscription: Option<SelectionState>,
}

impl BridgeListener {
    /// Creates a listener with no subscription installed.
    ///
    /// The machine's boot effects install the first one.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a subscription is installed.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// The selection leaf that most recently installed the subscription.
    #[must_use]
    pub fn subscription_key(&self) -> Option<SelectionState> {
        self.subscription
    }

    /// Tears the subscription down. Subsequent deliveries are dropped until
    /// a dispatch installs a new one.
    pub fn teardown(&mut self) {
        self.subscription = None;
    }

    /// Routes one dispatch's effects: outbound messages to `port`,
    /// subscription installs into the slot.
    pub fn absorb_effects(&mut self, effects: &[Effect], port: &mut impl HostPort) {
        for effect in effects {
            match effect {
                Effect::SubscribeHostMessages { key } => {
                    // Keyed replace: tears down the previous registration
                    // and installs the new one in a single step.
                    self.subscription = Some(*key);
                }
                other => {
                    if let Some(message) = OutboundMessage::from_effect(other) {
                        port.post(&message);
                    }
                }
            }
        }
    }

    /// Delivers one decoded inbound message.
    ///
    /// Returns `true` if the message was classified and dispatched. A
    /// message arriving while no subscription is installed is dropped, as is
    /// any message type this core does not consume.
    pub fn deliver<L: Lexicon>(
        &mut self,
        message: &InboundMessage,
        coordinator: &mut Coordinator<L>,
        port: &mut impl HostPort,
    ) -> bool {
        if !self.is_subscribed() {
            return false;
        }
        let Some(event) = classify(message) else {
            return false;
        };
        let effects = coordinator.dispatch(&event);
        self.absorb_effects(&effects, port);
        true
    }

    /// Decodes a raw JSON payload and delivers it.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the payload is not valid JSON for the
    /// wire schema. Well-formed messages of unknown type are not an error;
    /// they decode to the ignored variant and return `Ok(false)`.
    pub fn deliver_json<L: Lexicon>(
        &mut self,
        raw: &str,
        coordinator: &mut Coordinator<L>,
        port: &mut impl HostPort,
    ) -> Result<bool, DecodeError> {
        let message: InboundMessage = serde_json::from_str(raw).map_err(DecodeError::new)?;
        Ok(self.deliver(&message, coordinator, port))
    }
}
