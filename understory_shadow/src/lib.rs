// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_shadow --heading-base-level=0

//! Understory Shadow: state and rule formatting for `box-shadow` editors.
//!
//! A shadow editor binds a handful of input controls (offsets, blur, spread,
//! color, opacity, an inset checkbox) to a live preview and to one or more
//! displays of the generated CSS. This crate holds everything in between:
//!
//! - [`ShadowState`]: the seven-field shadow record, rendered to a
//!   `box-shadow` value by [`ShadowState::rule`].
//! - [`Field`] and [`ShadowUpdate`]: single-field changes, addressed by input
//!   name or built directly.
//! - [`hex_to_rgb`]: the `#RRGGBB` to `rgba(...)` channel conversion.
//! - [`ShadowFormatter`]: owns the state and pushes every change to a
//!   [`StyleSink`] preview and any number of [`TextSink`] displays.
//! - [`ShadowGeometry`]: rectangles for hosts that paint the preview
//!   themselves.
//! - [`rules_text`], [`rules_panel`] and [`CopyFeedback`]: the
//!   copy-to-clipboard interaction around the displays.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_shadow::{RuleVariant, ShadowFormatter, ShadowState};
//!
//! let mut editor = ShadowFormatter::new(String::new())
//!     .with_display(RuleVariant::Standard, String::new());
//!
//! editor.initialize(ShadowState::default());
//!
//! // An input control reports a change by name.
//! assert!(editor.update_from_input("blur", "8"));
//! assert!(editor.update_from_input("color", "#1A2B3C"));
//!
//! assert_eq!(editor.preview(), " 0px 0px 8px 0px rgba(26, 43, 60, 1)");
//! assert_eq!(
//!     editor.display(RuleVariant::Standard).unwrap(),
//!     " 0px 0px 8px 0px rgba(26, 43, 60, 1);"
//! );
//! ```
//!
//! ## No validation
//!
//! Nothing in this crate rejects a value for being out of range or malformed.
//! Negative blur, opacity above one and broken color text all flow into the
//! rule as given; a color that cannot be read renders with zero channels. The
//! only inputs that are dropped are ones that cannot be assigned to a field at
//! all: unknown field names, values of the wrong kind, and raw text that does
//! not parse as the field's type. Dropped inputs leave the state, the sinks and
//! the [`revision`](ShadowFormatter::revision) untouched.
//!
//! ## Vendor displays
//!
//! Editors often show the declaration under `box-shadow`, `-webkit-box-shadow`
//! and `-moz-box-shadow` headings. [`RuleVariant`] names those headings, but
//! every display receives the same unprefixed text.
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to Kurbo and Peniko.
//! - `libm`: forwards `libm` to Kurbo and Peniko for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for [`ShadowState`], using the input
//!   names as keys.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod color;
mod copy;
mod field;
mod formatter;
mod preview;
mod sink;
mod state;

pub use color::{Rgb, hex_to_rgb};
pub use copy::{
    COPIED_MESSAGE, CopyFeedback, DEFAULT_REVERT_DELAY_MS, IDLE_MESSAGE, rules_panel, rules_text,
};
pub use field::{Field, FieldValue, ShadowUpdate};
pub use formatter::ShadowFormatter;
pub use preview::ShadowGeometry;
pub use sink::{RuleVariant, StyleSink, TextSink};
pub use state::ShadowState;
