// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sidecar Bridge: host bridge wire types and the inbound event listener.
//!
//! The host application and the panel exchange JSON messages dispatched on a
//! `"type"` tag. This crate owns both directions of that boundary for the
//! `sidecar_machine` core:
//!
//! - [`messages`]: the tagged wire types — inbound `selectionChanged` (with
//!   unknown types decoding to an ignored variant) and the outbound
//!   `selectionByPlugin` / `renameByPlugin` postings.
//! - [`listener`]: the [`BridgeListener`] service. It classifies inbound
//!   payloads by shape into machine events, holds the single keyed
//!   subscription slot the selection region re-installs on every state
//!   entry, and routes drained effects to a [`HostPort`].
//!
//! ## Minimal example
//!
//! ```rust
//! use sidecar_bridge::{BridgeListener, HostPort, OutboundMessage};
//! use sidecar_machine::{Coordinator, Lexicon, Locale, UiElement};
//!
//! struct Silent;
//! impl Lexicon for Silent {
//!     fn tooltip(&self, _element: UiElement) -> String { String::new() }
//!     fn definition(&self, _term: &str) -> Option<String> { None }
//! }
//!
//! #[derive(Default)]
//! struct Log(Vec<OutboundMessage>);
//! impl HostPort for Log {
//!     fn post(&mut self, message: &OutboundMessage) { self.0.push(message.clone()); }
//! }
//!
//! let mut coordinator = Coordinator::new(Silent, Locale::new("hover a control"), 0);
//! let mut listener = BridgeListener::new();
//! let mut port = Log::default();
//!
//! // Boot installs the inbound subscription...
//! let effects = coordinator.boot();
//! listener.absorb_effects(&effects, &mut port);
//! assert!(listener.is_subscribed());
//!
//! // ...after which host messages flow through classification and dispatch.
//! let delivered = listener
//!     .deliver_json(
//!         r#"{"type":"selectionChanged","selection":[{"id":"1:2","name":"Card"}]}"#,
//!         &mut coordinator,
//!         &mut port,
//!     )
//!     .unwrap();
//! assert!(delivered);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod listener;
pub mod messages;

pub use listener::{BridgeListener, DecodeError, HostPort, classify};
pub use messages::{InboundMessage, OutboundMessage};
