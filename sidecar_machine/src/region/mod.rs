// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The concurrently-active regions of the coordinator.
//!
//! Each region owns an independently-typed state enum and a `dispatch`
//! function over `(state, draft context, event)`. Dispatch returns whether
//! the region took a transition — including declared self- and internal
//! transitions — so the coordinator can commit the draft and report the
//! transition to a trace sink. A region that does not recognize the event
//! returns `false` and leaves both its state and the draft untouched.

pub mod hover;
pub mod linked;
pub mod notation;
pub mod phrases;
pub mod selection;
