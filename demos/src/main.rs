// Copyright 2026 the Sidecar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted panel session: host selection reports arrive as raw bridge
//! JSON, panel interactions as direct events, and every applied transition
//! and outbound posting is printed.
//!
//! Run with `cargo run -p sidecar_demos --bin panel_session`.

use sidecar_bridge::{BridgeListener, HostPort, OutboundMessage, classify};
use sidecar_machine::trace::TransitionRecorder;
use sidecar_machine::{Coordinator, Event, Locale, UiElement, lexicon::MapLexicon};

/// Prints every posting instead of reaching a real host.
struct PrintingPort;

impl HostPort for PrintingPort {
    fn post(&mut self, message: &OutboundMessage) {
        match message {
            OutboundMessage::SelectionByPlugin { selected_node } => {
                println!("  -> host: select {} ({})", selected_node.name, selected_node.id);
            }
            OutboundMessage::RenameByPlugin {
                new_name,
                selected_node,
                ..
            } => {
                println!(
                    "  -> host: rename {} ({}) to {new_name:?}",
                    selected_node.name, selected_node.id
                );
            }
        }
    }
}

fn print_transitions(recorder: &TransitionRecorder) {
    for record in recorder.records() {
        println!(
            "  {:?}: {} --{}--> {}",
            record.region, record.from, record.event, record.to
        );
    }
}

fn main() {
    let lexicon = MapLexicon::new("a panel control")
        .with_tooltip(UiElement::SearchInput, "type to find an element")
        .with_tooltip(UiElement::RenameInput, "type the new name")
        .with_definition("navigation", "a landmark that groups links to other views");
    let locale = Locale::new("Hover a control for details").with_tips(vec![
        String::from("Tip: hover a term to see its definition"),
        String::from("Tip: drag phrases to reorder them"),
    ]);

    let mut coordinator = Coordinator::new(lexicon, locale, 1);
    let mut listener = BridgeListener::new();
    let mut port = PrintingPort;

    println!("boot");
    let effects = coordinator.boot();
    listener.absorb_effects(&effects, &mut port);
    println!(
        "  subscribed via {:?}, tip: {:?}",
        listener.subscription_key(),
        coordinator.context().plugin.ontology_search.full_text
    );

    // The host reports selections as raw bridge JSON.
    let host_script = [
        r#"{"type":"selectionChanged","selection":[
            {"id":"12:1","name":"Nav Bar"},
            {"id":"12:2","name":"Nav Item"},
            {"id":"12:3","name":"Nav Icon"}]}"#,
        r#"{"type":"selectionChanged","selection":[{"id":"12:2","name":"Nav Item"}]}"#,
    ];
    for raw in host_script {
        println!("host message");
        let message = serde_json::from_str(raw).expect("script payloads are well-formed");
        let mut recorder = TransitionRecorder::new();
        if let Some(event) = classify(&message) {
            let effects = coordinator.dispatch_traced(&event, &mut recorder);
            listener.absorb_effects(&effects, &mut port);
        }
        print_transitions(&recorder);
    }

    // Panel-side interactions are dispatched directly.
    let panel_script = [
        Event::HoverUiElementEnter(UiElement::RenameInput),
        Event::EditPhrases {
            input: Some(String::from("nav - item")),
        },
        Event::AddPhrase,
        Event::ChangeNotation,
        Event::HoverUiElementExit,
        Event::CommitUnlinkedRename,
    ];
    for event in panel_script {
        println!("panel event: {}", event.kind());
        let mut recorder = TransitionRecorder::new();
        let effects = coordinator.dispatch_traced(&event, &mut recorder);
        listener.absorb_effects(&effects, &mut port);
        print_transitions(&recorder);
    }

    let context = coordinator.context();
    println!("final state");
    println!("  selection: {:?}", coordinator.selection_state());
    println!("  phrases:   {:?}", coordinator.phrases_state());
    println!("  rename:    {:?}", context.plugin.rename_value);
    println!("  notation:  {:?}", coordinator.notation_state());
}
