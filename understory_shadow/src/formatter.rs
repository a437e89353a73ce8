// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shadow editor core: state in, rule text out.
//!
//! [`ShadowFormatter`] owns a [`ShadowState`] and keeps its sinks in step with
//! it. Every accepted change runs one render pass:
//!
//! 1. **apply**: render the rule from the state, cache it as
//!    [`current_rule`](ShadowFormatter::current_rule) and hand it to the
//!    preview [`StyleSink`];
//! 2. **show**: append `;` and write that text to every [`TextSink`], in the
//!    order they were added.
//!
//! Ignored changes (unknown field names, values of the wrong kind, unparseable
//! input) skip the pass entirely, so neither the state nor any sink moves.

use alloc::format;
use alloc::string::String;

use smallvec::SmallVec;

use crate::field::{Field, FieldValue, ShadowUpdate};
use crate::sink::{RuleVariant, StyleSink, TextSink};
use crate::state::ShadowState;

/// Keeps a preview surface and a set of rule displays in sync with a shadow.
///
/// # Example
///
/// ```rust
/// use understory_shadow::{Field, RuleVariant, ShadowFormatter, ShadowState};
///
/// let mut editor = ShadowFormatter::new(String::new())
///     .with_display(RuleVariant::Standard, String::new())
///     .with_display(RuleVariant::Webkit, String::new());
///
/// editor.initialize(ShadowState {
///     horizontal_offset: 5,
///     vertical_offset: 10,
///     blur_radius: 15,
///     color: "#336699".into(),
///     opacity: 0.5,
///     ..ShadowState::default()
/// });
/// assert_eq!(editor.preview(), " 5px 10px 15px 0px rgba(51, 102, 153, 0.5)");
///
/// assert!(editor.update(Field::Inset, true));
/// assert_eq!(
///     editor.display(RuleVariant::Webkit).unwrap(),
///     "inset 5px 10px 15px 0px rgba(51, 102, 153, 0.5);"
/// );
///
/// // Unknown names are ignored.
/// assert!(!editor.update_named("border", 3));
/// assert_eq!(editor.revision(), 2);
/// ```
#[derive(Debug)]
pub struct ShadowFormatter<P, D> {
    state: ShadowState,
    current_rule: String,
    preview: P,
    displays: SmallVec<[(RuleVariant, D); 3]>,
    revision: u64,
}

impl<P: StyleSink, D: TextSink> ShadowFormatter<P, D> {
    /// Creates a formatter with a default state and no displays.
    ///
    /// Nothing is written to `preview` until the first render pass, which
    /// normally comes from [`initialize`](Self::initialize).
    #[must_use]
    pub fn new(preview: P) -> Self {
        let state = ShadowState::default();
        let current_rule = state.rule();
        Self {
            state,
            current_rule,
            preview,
            displays: SmallVec::new(),
            revision: 0,
        }
    }

    /// Adds a rule display, builder style.
    #[must_use]
    pub fn with_display(mut self, variant: RuleVariant, sink: D) -> Self {
        self.add_display(variant, sink);
        self
    }

    /// Adds a rule display.
    ///
    /// If a render pass already happened, the new display receives the current
    /// text right away so that all displays agree.
    pub fn add_display(&mut self, variant: RuleVariant, mut sink: D) {
        if self.revision > 0 {
            sink.show_text(&self.display_text());
        }
        self.displays.push((variant, sink));
    }

    /// Seeds every field from `defaults` and renders.
    ///
    /// Calling this again simply re-applies the given values.
    pub fn initialize(&mut self, defaults: ShadowState) {
        self.state = defaults;
        self.render();
    }

    /// Renders the current state again without changing it.
    ///
    /// Sinks receive exactly the text they received on the previous pass.
    pub fn refresh(&mut self) {
        self.render();
    }

    /// Applies a typed update and renders.
    pub fn apply(&mut self, update: ShadowUpdate) {
        self.state.apply(update);
        self.render();
    }

    /// Sets `field` to `value` and renders.
    ///
    /// Returns `false`, without rendering, when the value has the wrong kind
    /// for the field (see [`ShadowUpdate::new`]).
    pub fn update(&mut self, field: Field, value: impl Into<FieldValue>) -> bool {
        match ShadowUpdate::new(field, value.into()) {
            Some(update) => {
                self.apply(update);
                true
            }
            None => false,
        }
    }

    /// Sets the field called `name` to `value` and renders.
    ///
    /// Unknown names are ignored and return `false`.
    pub fn update_named(&mut self, name: &str, value: impl Into<FieldValue>) -> bool {
        match Field::from_name(name) {
            Some(field) => self.update(field, value),
            None => false,
        }
    }

    /// Feeds raw input text for the field called `name`, as an input control
    /// would report it.
    ///
    /// Returns `false`, without rendering, for unknown names and for text that
    /// does not parse (see [`ShadowUpdate::parse`]).
    pub fn update_from_input(&mut self, name: &str, raw: &str) -> bool {
        let Some(update) = Field::from_name(name).and_then(|field| ShadowUpdate::parse(field, raw))
        else {
            return false;
        };
        self.apply(update);
        true
    }

    /// The current shadow values.
    #[must_use]
    pub fn state(&self) -> &ShadowState {
        &self.state
    }

    /// The rule last handed to the preview.
    #[must_use]
    pub fn current_rule(&self) -> &str {
        &self.current_rule
    }

    /// The text every display holds: the current rule followed by `;`.
    #[must_use]
    pub fn display_text(&self) -> String {
        format!("{};", self.current_rule)
    }

    /// The preview surface.
    #[must_use]
    pub fn preview(&self) -> &P {
        &self.preview
    }

    /// The first display added under `variant`, if any.
    #[must_use]
    pub fn display(&self, variant: RuleVariant) -> Option<&D> {
        self.displays
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, sink)| sink)
    }

    /// All displays in the order they were added.
    pub fn displays(&self) -> impl Iterator<Item = (RuleVariant, &D)> + '_ {
        self.displays.iter().map(|(variant, sink)| (*variant, sink))
    }

    /// Number of render passes so far.
    ///
    /// Starts at `0` and bumps once per pass. Ignored updates leave it alone.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn render(&mut self) {
        self.current_rule = self.state.rule();
        self.preview.apply_style(&self.current_rule);

        let text = self.display_text();
        for (_, sink) in &mut self.displays {
            sink.show_text(&text);
        }
        self.revision += 1;
    }
}
