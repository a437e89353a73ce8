// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output surfaces for rendered shadows.
//!
//! The formatter pushes each render into two kinds of sinks:
//!
//! - one [`StyleSink`], the preview surface, which receives the bare
//!   `box-shadow` value;
//! - any number of [`TextSink`]s, the rule displays, which receive the value
//!   terminated by `;`.
//!
//! Both traits are implemented for [`String`], which simply holds the last
//! value written, and for `&mut S` so that hosts can lend sinks they own.

use alloc::string::String;

/// A surface that applies a `box-shadow` value, such as a preview element.
pub trait StyleSink {
    /// Applies `value` as the surface's shadow style.
    fn apply_style(&mut self, value: &str);
}

/// A surface that displays rule text.
pub trait TextSink {
    /// Replaces the displayed text with `text`.
    fn show_text(&mut self, text: &str);
}

impl StyleSink for String {
    fn apply_style(&mut self, value: &str) {
        self.clear();
        self.push_str(value);
    }
}

impl TextSink for String {
    fn show_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn apply_style(&mut self, value: &str) {
        (**self).apply_style(value);
    }
}

impl<S: TextSink + ?Sized> TextSink for &mut S {
    fn show_text(&mut self, text: &str) {
        (**self).show_text(text);
    }
}

/// The heading a rule display is shown under.
///
/// Shadow editors traditionally list the declaration once per vendor prefix.
/// Only the heading differs: every display receives the same unprefixed text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RuleVariant {
    /// `box-shadow:`
    Standard,
    /// `-webkit-box-shadow:`
    Webkit,
    /// `-moz-box-shadow:`
    Moz,
}

impl RuleVariant {
    /// Every variant, in the order editors usually list them.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Webkit, Self::Moz];

    /// The property heading for this display.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Standard => "box-shadow:",
            Self::Webkit => "-webkit-box-shadow:",
            Self::Moz => "-moz-box-shadow:",
        }
    }
}
