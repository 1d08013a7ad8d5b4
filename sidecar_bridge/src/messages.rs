// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wire types for the host bridge.
//!
//! Both directions are JSON objects dispatched on a `"type"` tag with
//! camelCase fields. Inbound, only `selectionChanged` concerns this core;
//! every other tag deserializes into [`InboundMessage::Other`] and is
//! ignored by the listener. Outbound messages are fire-and-forget; nothing
//! here models a reply.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use sidecar_machine::{Effect, HostElement};

/// A message received from the host application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InboundMessage {
    /// The host's element selection changed.
    #[serde(rename = "selectionChanged", rename_all = "camelCase")]
    SelectionChanged {
        /// The new selection; may be empty.
        #[serde(default)]
        selection: Vec<HostElement>,
        /// Set when the host cannot offer a selection at all (for example,
        /// no document is open). Hosts omit the field in the common case.
        #[serde(default)]
        is_selection_unavailable: bool,
    },
    /// Any message type this core does not consume.
    #[serde(other)]
    Other,
}

/// A message posted to the host application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    /// Ask the host to select a node on the panel's behalf.
    #[serde(rename = "selectionByPlugin", rename_all = "camelCase")]
    SelectionByPlugin {
        /// The node to select.
        selected_node: HostElement,
    },
    /// Ask the host to rename a node on the panel's behalf.
    #[serde(rename = "renameByPlugin", rename_all = "camelCase")]
    RenameByPlugin {
        /// The new node name.
        new_name: String,
        /// The node to rename.
        selected_node: HostElement,
        /// Reserved; always serialized as `null`.
        plugin_data: (),
    },
}

impl OutboundMessage {
    /// Encodes a machine effect as a wire message.
    ///
    /// Subscription bookkeeping effects have no wire representation and
    /// return `None`; the listener consumes those itself.
    #[must_use]
    pub fn from_effect(effect: &Effect) -> Option<Self> {
        match effect {
            Effect::SelectionByPlugin { selected } => Some(Self::SelectionByPlugin {
                selected_node: selected.clone(),
            }),
            Effect::RenameByPlugin { selected, new_name } => Some(Self::RenameByPlugin {
                new_name: new_name.clone(),
                selected_node: selected.clone(),
                plugin_data: (),
            }),
            Effect::SubscribeHostMessages { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn selection_changed_decodes_with_and_without_the_flag() {
        let message: InboundMessage = serde_json::from_str(
            r#"{"type":"selectionChanged","selection":[{"id":"1:2","name":"Card"}]}"#,
        )
        .unwrap();
        assert_eq!(
            message,
            InboundMessage::SelectionChanged {
                selection: vec![HostElement::new("1:2", "Card")],
                is_selection_unavailable: false,
            }
        );

        let message: InboundMessage = serde_json::from_str(
            r#"{"type":"selectionChanged","selection":[],"isSelectionUnavailable":true}"#,
        )
        .unwrap();
        assert_eq!(
            message,
            InboundMessage::SelectionChanged {
                selection: vec![],
                is_selection_unavailable: true,
            }
        );
    }

    #[test]
    fn unknown_message_types_decode_to_other() {
        let message: InboundMessage =
            serde_json::from_str(r#"{"type":"documentClosed"}"#).unwrap();
        assert_eq!(message, InboundMessage::Other);
    }

    #[test]
    fn rename_by_plugin_serializes_null_plugin_data() {
        let message = OutboundMessage::RenameByPlugin {
            new_name: "Foo Bar".to_string(),
            selected_node: HostElement::new("1:2", "Old"),
            plugin_data: (),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "renameByPlugin",
                "newName": "Foo Bar",
                "selectedNode": { "id": "1:2", "name": "Old" },
                "pluginData": null,
            })
        );
    }

    #[test]
    fn selection_by_plugin_round_trips() {
        let message = OutboundMessage::SelectionByPlugin {
            selected_node: HostElement::new("1:2", "Card"),
        };
        let text = serde_json::to_string(&message).unwrap();
        let back: OutboundMessage = serde_json::from_str(&text).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn subscription_effects_have_no_wire_form() {
        use sidecar_machine::region::selection::SelectionState;
        let effect = Effect::SubscribeHostMessages {
            key: SelectionState::NoSelection,
        };
        assert_eq!(OutboundMessage::from_effect(&effect), None);
    }
}
