// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_shadow` crate.
//!
//! These drive a [`ShadowFormatter`] the way an editor page does: seed it from
//! the input defaults, feed it input events by name, and copy the panel.

use understory_shadow::{
    COPIED_MESSAGE, CopyFeedback, Field, IDLE_MESSAGE, RuleVariant, ShadowFormatter, ShadowState,
    StyleSink, TextSink, rules_panel, rules_text,
};

/// A display that counts how often it was written.
#[derive(Debug, Default)]
struct CountingSink {
    text: String,
    writes: usize,
}

impl TextSink for CountingSink {
    fn show_text(&mut self, text: &str) {
        self.text = text.to_owned();
        self.writes += 1;
    }
}

impl StyleSink for CountingSink {
    fn apply_style(&mut self, value: &str) {
        self.text = value.to_owned();
        self.writes += 1;
    }
}

fn page_defaults() -> ShadowState {
    ShadowState {
        horizontal_offset: 5,
        vertical_offset: 10,
        blur_radius: 15,
        spread_radius: 0,
        color: "#336699".into(),
        opacity: 0.5,
        inset: false,
    }
}

fn page() -> ShadowFormatter<CountingSink, CountingSink> {
    let mut editor = ShadowFormatter::new(CountingSink::default());
    for variant in RuleVariant::ALL {
        editor.add_display(variant, CountingSink::default());
    }
    editor.initialize(page_defaults());
    editor
}

fn assert_in_sync(editor: &ShadowFormatter<CountingSink, CountingSink>) {
    assert_eq!(editor.preview().text, editor.current_rule());
    let expected = format!("{};", editor.current_rule());
    for (variant, sink) in editor.displays() {
        assert_eq!(sink.text, expected, "{variant:?} is out of sync");
        assert_eq!(sink.writes, editor.preview().writes);
    }
}

#[test]
fn defaults_render_on_initialize() {
    let editor = page();
    assert_eq!(
        editor.display(RuleVariant::Standard).unwrap().text,
        " 5px 10px 15px 0px rgba(51, 102, 153, 0.5);"
    );
    assert_in_sync(&editor);
}

#[test]
fn every_input_event_rerenders_every_sink() {
    let mut editor = page();
    let events = [
        ("horizontal", "-3"),
        ("vertical", "0"),
        ("blur", "40"),
        ("spread", "6"),
        ("color", "#FFFFFF"),
        ("opacity", "0.05"),
        ("inset", "true"),
    ];
    for (name, raw) in events {
        assert!(editor.update_from_input(name, raw), "{name} should apply");
        assert_in_sync(&editor);
    }
    assert_eq!(
        editor.current_rule(),
        "inset -3px 0px 40px 6px rgba(255, 255, 255, 0.05)"
    );
    assert_eq!(editor.revision(), 8);
}

#[test]
fn each_update_changes_one_field() {
    for field in Field::ALL {
        let mut editor = page();
        let before = editor.state().clone();
        let raw = match field {
            Field::Color => "#000000",
            Field::Opacity => "1",
            Field::Inset => "on",
            _ => "77",
        };
        assert!(editor.update_from_input(field.name(), raw));
        for other in Field::ALL {
            if other != field {
                assert_eq!(editor.state().get(other), before.get(other));
            }
        }
        assert_eq!(editor.current_rule(), editor.state().rule());
    }
}

#[test]
fn ignored_events_leave_everything_alone() {
    let mut editor = page();
    let rule = editor.current_rule().to_owned();

    assert!(!editor.update_from_input("border-radius", "4"));
    assert!(!editor.update_from_input("blur", "wide"));
    assert!(!editor.update_named("inset", "yes"));

    assert_eq!(editor.state(), &page_defaults());
    assert_eq!(editor.current_rule(), rule);
    assert_eq!(editor.preview().writes, 1);
    assert_in_sync(&editor);
}

#[test]
fn copy_round() {
    let mut editor = page();
    editor.update(Field::Inset, true);

    let panel = rules_panel(
        editor
            .displays()
            .map(|(variant, sink)| (variant, sink.text.as_str())),
    );
    let copied = rules_text(&panel);
    assert_eq!(copied.lines().count(), 3);
    for (line, variant) in copied.lines().zip(RuleVariant::ALL) {
        assert_eq!(
            line,
            format!("{} {}", variant.heading(), editor.display_text())
        );
    }

    let mut status = CopyFeedback::new();
    status.on_copied(500);
    assert_eq!(status.message(), COPIED_MESSAGE);
    assert!(status.tick(1500));
    assert_eq!(status.message(), IDLE_MESSAGE);
}
