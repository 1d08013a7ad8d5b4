// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sidecar Machine: parallel-region state coordination for design-tool
//! plugin panels.
//!
//! A plugin panel lives beside a host application and has to keep several
//! concurrently-active pieces of interactive state consistent under an
//! unordered stream of host- and user-originated events: the host's element
//! selection, a multi-phrase rename editor, hover-driven tooltip and
//! definition lookups, a naming-notation toggle, and the link state of the
//! rename data. This crate is that core: a single [`Coordinator`] composed
//! of independently-typed region sub-machines over one shared [`Context`]
//! record.
//!
//! ## Design
//!
//! - **One owner, atomic updates.** The coordinator exclusively owns the
//!   context; each region pass commits a whole draft, so no region observes
//!   a half-applied update and no locking is needed.
//! - **Events are a sum type.** Every accepted event is a variant of
//!   [`Event`], matched exhaustively per region; unrecognized events are a
//!   per-region no-op, not an error.
//! - **Effects are data.** Transitions never talk to the host. They queue
//!   [`Effect`] values and dispatch returns the queue, which keeps the core
//!   testable without a live bridge.
//! - **Lookups are seams.** Tooltip and definition text resolve through the
//!   [`Lexicon`] trait; locale strings arrive once via [`Locale`].
//!
//! ## Minimal example
//!
//! ```rust
//! use sidecar_machine::{Coordinator, Effect, Event, HostElement, Lexicon, Locale, UiElement};
//! use sidecar_machine::region::selection::SelectionState;
//!
//! struct Help;
//!
//! impl Lexicon for Help {
//!     fn tooltip(&self, _element: UiElement) -> String {
//!         "a panel control".to_string()
//!     }
//!     fn definition(&self, _term: &str) -> Option<String> {
//!         None
//!     }
//! }
//!
//! let mut panel = Coordinator::new(Help, Locale::new("Hover a control"), 0);
//!
//! // Booting installs the host subscription for the initial state.
//! let effects = panel.boot();
//! assert_eq!(
//!     effects.as_slice(),
//!     [Effect::SubscribeHostMessages { key: SelectionState::NoSelection }]
//! );
//!
//! // The host reports a two-element selection...
//! let a = HostElement::new("1:1", "Card");
//! let b = HostElement::new("1:2", "Card Title");
//! panel.dispatch(&Event::HostSelectMulti { selection: vec![a, b.clone()] });
//! assert_eq!(panel.selection_state(), SelectionState::RawMultiSelection);
//!
//! // ...and the user then picks one of them: focus narrows within the
//! // selection and the panel asks the host to select it.
//! let effects = panel.dispatch(&Event::HostSelectSingle {
//!     selection: vec![b.clone()],
//!     focused: Some(b.clone()),
//! });
//! assert_eq!(panel.selection_state(), SelectionState::MultiSelectionSubSet);
//! assert!(effects.iter().any(|effect| matches!(
//!     effect,
//!     Effect::SelectionByPlugin { selected } if selected.same_element(&b)
//! )));
//! ```
//!
//! ## Integration
//!
//! The sibling `sidecar_bridge` crate translates inbound host messages into
//! the `Host*` events, keeps the inbound subscription keyed and idempotent,
//! and encodes drained effects into outbound wire messages.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod actions;
mod guards;

pub mod context;
pub mod coordinator;
pub mod effect;
pub mod event;
pub mod lexicon;
pub mod notation;
pub mod region;
pub mod trace;

pub use context::{Context, HostElement};
pub use coordinator::Coordinator;
pub use effect::{Effect, Effects};
pub use event::{Event, UiElement};
pub use lexicon::{Lexicon, Locale};
pub use notation::Notation;
