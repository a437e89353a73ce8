// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Copy-to-clipboard glue.
//!
//! Shadow editors usually show the rule displays together in one panel and
//! copy the whole panel when it is clicked. This module holds the host-agnostic
//! parts of that interaction:
//!
//! - [`rules_panel`] lays the displays out as the panel shows them;
//! - [`rules_text`] turns panel text into clipboard text;
//! - [`CopyFeedback`] drives the status line under the panel, which briefly
//!   confirms a copy and then reverts.
//!
//! The crate never touches a clipboard or a clock. Hosts write the text
//! themselves and pass timestamps in milliseconds from any monotonic source.

use alloc::string::String;

use smallvec::SmallVec;

use crate::sink::RuleVariant;

/// How long the confirmation stays up, in milliseconds.
pub const DEFAULT_REVERT_DELAY_MS: u64 = 1000;

/// Status text shown while nothing was copied recently.
pub const IDLE_MESSAGE: &str = "Click the panel above to copy the rules";

/// Status text shown right after a successful copy.
pub const COPIED_MESSAGE: &str = "Rule copied successfully!";

/// Lays out rule displays as a panel: one `heading text` line per display,
/// with a blank line between displays.
///
/// ```rust
/// use understory_shadow::{RuleVariant, rules_panel};
///
/// let panel = rules_panel([
///     (RuleVariant::Standard, " 1px 1px 0px 0px rgba(0, 0, 0, 1);"),
///     (RuleVariant::Moz, " 1px 1px 0px 0px rgba(0, 0, 0, 1);"),
/// ]);
/// assert_eq!(
///     panel,
///     "box-shadow:  1px 1px 0px 0px rgba(0, 0, 0, 1);\n\
///      \n\
///      -moz-box-shadow:  1px 1px 0px 0px rgba(0, 0, 0, 1);"
/// );
/// ```
#[must_use]
pub fn rules_panel<'a>(displays: impl IntoIterator<Item = (RuleVariant, &'a str)>) -> String {
    let mut panel = String::new();
    for (index, (variant, text)) in displays.into_iter().enumerate() {
        if index > 0 {
            panel.push_str("\n\n");
        }
        panel.push_str(variant.heading());
        panel.push(' ');
        panel.push_str(text);
    }
    panel
}

/// Converts panel text to clipboard text by dropping whitespace-only lines.
///
/// Lines with content are kept verbatim, including their indentation. A
/// whitespace-only last line without a line break is kept as well.
///
/// Only `\n` ends a line, so `\r\n` endings survive intact on kept lines and
/// a lone `\r` is ordinary whitespace.
///
/// ```rust
/// use understory_shadow::rules_text;
///
/// assert_eq!(rules_text("a;\n\n  \nb;\n"), "a;\nb;\n");
/// ```
#[must_use]
pub fn rules_text(panel: &str) -> String {
    panel
        .split_inclusive('\n')
        .filter(|line| !(line.ends_with('\n') && line.trim().is_empty()))
        .collect()
}

/// Status line state for copy confirmations.
///
/// Each copy shows the confirmation and schedules its own revert
/// [`delay_ms`](Self::delay_ms) later. Reverts are independent: whichever
/// comes due first restores the idle text, even if a later copy scheduled
/// another one, and a revert that finds the idle text already showing does
/// nothing.
///
/// A failed clipboard write should simply not be reported; the message then
/// stays as it was.
///
/// ```rust
/// use understory_shadow::{COPIED_MESSAGE, CopyFeedback, IDLE_MESSAGE};
///
/// let mut status = CopyFeedback::new();
/// assert_eq!(status.message(), IDLE_MESSAGE);
///
/// status.on_copied(10_000);
/// assert_eq!(status.message(), COPIED_MESSAGE);
///
/// assert!(!status.tick(10_999));
/// assert!(status.tick(11_000));
/// assert_eq!(status.message(), IDLE_MESSAGE);
/// ```
#[derive(Clone, Debug)]
pub struct CopyFeedback {
    idle: String,
    copied: String,
    delay_ms: u64,
    confirming: bool,
    /// Due times of scheduled reverts, in scheduling order.
    pending: SmallVec<[u64; 2]>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyFeedback {
    /// Creates a status line with the default messages and delay.
    #[must_use]
    pub fn new() -> Self {
        Self {
            idle: String::from(IDLE_MESSAGE),
            copied: String::from(COPIED_MESSAGE),
            delay_ms: DEFAULT_REVERT_DELAY_MS,
            confirming: false,
            pending: SmallVec::new(),
        }
    }

    /// Replaces both messages.
    #[must_use]
    pub fn with_messages(mut self, idle: impl Into<String>, copied: impl Into<String>) -> Self {
        self.idle = idle.into();
        self.copied = copied.into();
        self
    }

    /// Replaces the revert delay.
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// The revert delay in milliseconds.
    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// The text the status line should show.
    #[must_use]
    pub fn message(&self) -> &str {
        if self.confirming {
            &self.copied
        } else {
            &self.idle
        }
    }

    /// Whether the confirmation is showing.
    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    /// When the next scheduled revert is due, if any.
    ///
    /// Hosts with their own timers can schedule a [`tick`](Self::tick) for
    /// this instant instead of polling.
    #[must_use]
    pub fn revert_deadline(&self) -> Option<u64> {
        self.pending.iter().copied().min()
    }

    /// Records a successful copy at `now_ms`.
    pub fn on_copied(&mut self, now_ms: u64) {
        self.confirming = true;
        self.pending.push(now_ms.saturating_add(self.delay_ms));
    }

    /// Advances the clock to `now_ms`, running every revert that is due.
    ///
    /// Returns `true` when the message changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let scheduled = self.pending.len();
        self.pending.retain(|due| *due > now_ms);
        if self.pending.len() == scheduled || !self.confirming {
            return false;
        }
        self.confirming = false;
        true
    }
}
