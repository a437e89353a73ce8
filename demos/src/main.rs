// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A terminal host for `understory_shadow`.
//!
//! Stdin lines play the role of input controls, stdout shows the rule panel
//! and the status line, and `copy` writes the panel to a file (or stdout)
//! in place of the system clipboard. Logs go to stderr; set `RUST_LOG=debug`
//! to see every applied change.

mod config;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use kurbo::Rect;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use understory_shadow::{
    CopyFeedback, RuleVariant, ShadowFormatter, ShadowGeometry, StyleSink, rules_panel, rules_text,
};

use crate::config::{Args, DemoError};

/// Preview box used to report how far the shadow reaches.
const PREVIEW_BOX: Rect = Rect::new(0.0, 0.0, 200.0, 200.0);

/// Stands in for the preview element: remembers the applied style.
#[derive(Debug, Default)]
struct PreviewBox {
    style: String,
}

impl StyleSink for PreviewBox {
    fn apply_style(&mut self, value: &str) {
        debug!(box_shadow = value, "preview updated");
        self.style.clear();
        self.style.push_str(value);
    }
}

type Editor = ShadowFormatter<PreviewBox, String>;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, source = ?core::error::Error::source(&err), "shadow demo failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), DemoError> {
    let defaults = args.initial_state()?;

    let mut editor: Editor = ShadowFormatter::new(PreviewBox::default());
    for variant in RuleVariant::ALL {
        editor.add_display(variant, String::new());
    }
    editor.initialize(defaults);
    info!(rule = editor.current_rule(), "initialized");

    let started = Instant::now();
    let mut status = CopyFeedback::new();
    let mut out = io::stdout().lock();
    print_panel(&mut out, &editor, &status)?;

    let lines = spawn_line_reader();
    loop {
        let next = match status.revert_deadline() {
            Some(due) => {
                let wait = due.saturating_sub(elapsed_ms(started));
                lines.recv_timeout(Duration::from_millis(wait))
            }
            None => lines.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        let now = elapsed_ms(started);
        let reverted = status.tick(now);
        if reverted {
            debug!(message = status.message(), "status reverted");
        }

        let line = match next {
            Ok(line) => line?,
            Err(RecvTimeoutError::Timeout) => {
                if reverted {
                    writeln!(out, "{}", status.message())?;
                    out.flush()?;
                }
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        };

        let Some((command, raw)) = split_command(&line) else {
            continue;
        };
        match command {
            "quit" | "exit" => break,
            "show" => {}
            "copy" => copy(&editor, args.clipboard.as_deref(), &mut status, now, &mut out),
            name => {
                if editor.update_from_input(name, raw) {
                    debug!(input = name, value = raw, revision = editor.revision(), "applied");
                } else {
                    warn!(input = name, value = raw, "ignored input");
                    continue;
                }
            }
        }
        print_panel(&mut out, &editor, &status)?;
    }
    Ok(())
}

/// Reads stdin on its own thread so the status line can revert while the
/// user is idle.
fn spawn_line_reader() -> mpsc::Receiver<io::Result<String>> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if sender.send(line).is_err() {
                break;
            }
        }
    });
    receiver
}

/// Splits a command line into its first word and the rest, trimmed.
fn split_command(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (line, ""),
    })
}

fn copy(
    editor: &Editor,
    clipboard: Option<&Path>,
    status: &mut CopyFeedback,
    now: u64,
    out: &mut impl Write,
) {
    let text = rules_text(&panel(editor));
    let written = match clipboard {
        Some(path) => fs::write(path, &text),
        None => writeln!(out, "{text}"),
    };
    match written {
        Ok(()) => {
            info!(bytes = text.len(), "rules copied");
            status.on_copied(now);
        }
        Err(err) => warn!(error = %err, "copy failed"),
    }
}

fn panel(editor: &Editor) -> String {
    rules_panel(
        editor
            .displays()
            .map(|(variant, text)| (variant, text.as_str())),
    )
}

fn print_panel(out: &mut impl Write, editor: &Editor, status: &CopyFeedback) -> io::Result<()> {
    let geometry = ShadowGeometry::new(editor.state(), PREVIEW_BOX);
    let bounds = geometry.paint_bounds;
    writeln!(out, "{}", panel(editor))?;
    writeln!(
        out,
        "preview:{} is {} ({}x{} box, paints {:.0},{:.0} to {:.0},{:.0})",
        editor.preview().style,
        if geometry.is_visible() { "visible" } else { "hidden" },
        PREVIEW_BOX.width(),
        PREVIEW_BOX.height(),
        bounds.x0,
        bounds.y0,
        bounds.x1,
        bounds.y1,
    )?;
    writeln!(out, "{}", status.message())?;
    out.flush()
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use understory_shadow::{COPIED_MESSAGE, IDLE_MESSAGE, ShadowState};

    use super::*;

    fn editor() -> Editor {
        let mut editor: Editor = ShadowFormatter::new(PreviewBox::default());
        for variant in RuleVariant::ALL {
            editor.add_display(variant, String::new());
        }
        editor.initialize(ShadowState::default());
        editor
    }

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "understory_shadow_demo_{name}_{}",
            std::process::id()
        ))
    }

    #[test]
    fn copy_writes_rules_to_clipboard_file() {
        let path = scratch_path("clipboard.txt");
        let mut status = CopyFeedback::new();
        let mut out = Vec::new();

        copy(&editor(), Some(path.as_path()), &mut status, 0, &mut out);
        let copied = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(status.message(), COPIED_MESSAGE);
        assert!(out.is_empty());
        assert_eq!(
            copied.lines().collect::<Vec<_>>(),
            [
                "box-shadow:  0px 0px 0px 0px rgba(0, 0, 0, 1);",
                "-webkit-box-shadow:  0px 0px 0px 0px rgba(0, 0, 0, 1);",
                "-moz-box-shadow:  0px 0px 0px 0px rgba(0, 0, 0, 1);",
            ]
        );
    }

    #[test]
    fn failed_copy_leaves_status_alone() {
        let path = scratch_path("missing_dir").join("clipboard.txt");
        let mut status = CopyFeedback::new();

        copy(&editor(), Some(path.as_path()), &mut status, 0, &mut Vec::new());

        assert_eq!(status.message(), IDLE_MESSAGE);
        assert_eq!(status.revert_deadline(), None);
    }

    #[test]
    fn copy_without_clipboard_prints_rules() {
        let mut status = CopyFeedback::new();
        let mut out = Vec::new();

        copy(&editor(), None, &mut status, 5, &mut out);

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().count(), 3);
        assert!(printed.starts_with("box-shadow: "));
        assert_eq!(status.revert_deadline(), Some(1005));
    }

    #[test]
    fn commands_split_on_first_word() {
        assert_eq!(split_command("  blur   12 "), Some(("blur", "12")));
        assert_eq!(split_command("color #1a2b3c"), Some(("color", "#1a2b3c")));
        assert_eq!(split_command("inset"), Some(("inset", "")));
        assert_eq!(split_command("\tcopy\t"), Some(("copy", "")));
        assert_eq!(split_command("   "), None);
    }
}
