// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command line flags and the defaults file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use understory_shadow::{ShadowState, ShadowUpdate};

/// Edit a CSS `box-shadow` from the terminal.
///
/// Reads `<input> <value>` lines from stdin (for example `blur 12` or
/// `color #1a2b3c`), re-rendering the rule panel after every change.
/// `copy` copies the panel, `show` prints it again, `quit` exits.
#[derive(Debug, Parser)]
#[command(version)]
pub(crate) struct Args {
    /// JSON file with starting values, keyed by input name.
    #[arg(long, value_name = "FILE")]
    pub(crate) defaults: Option<PathBuf>,

    /// Where `copy` writes the rules. Defaults to stdout.
    #[arg(long, value_name = "FILE")]
    pub(crate) clipboard: Option<PathBuf>,

    /// Horizontal offset in pixels.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) horizontal: Option<i32>,

    /// Vertical offset in pixels.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) vertical: Option<i32>,

    /// Blur radius in pixels.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) blur: Option<i32>,

    /// Spread radius in pixels.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) spread: Option<i32>,

    /// Shadow color as `#RRGGBB`.
    #[arg(long)]
    pub(crate) color: Option<String>,

    /// Opacity of the shadow color.
    #[arg(long)]
    pub(crate) opacity: Option<f64>,

    /// Draw the shadow inside the box.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub(crate) inset: Option<bool>,
}

impl Args {
    /// Resolves the starting state: flags over the defaults file over the
    /// built-in defaults.
    pub(crate) fn initial_state(&self) -> Result<ShadowState, DemoError> {
        let mut state = match &self.defaults {
            Some(path) => load_defaults(path)?,
            None => ShadowState::default(),
        };
        for update in self.overrides() {
            state.apply(update);
        }
        Ok(state)
    }

    fn overrides(&self) -> impl Iterator<Item = ShadowUpdate> {
        [
            self.horizontal.map(ShadowUpdate::HorizontalOffset),
            self.vertical.map(ShadowUpdate::VerticalOffset),
            self.blur.map(ShadowUpdate::BlurRadius),
            self.spread.map(ShadowUpdate::SpreadRadius),
            self.color.clone().map(ShadowUpdate::Color),
            self.opacity.map(ShadowUpdate::Opacity),
            self.inset.map(ShadowUpdate::Inset),
        ]
        .into_iter()
        .flatten()
    }
}

fn load_defaults(path: &Path) -> Result<ShadowState, DemoError> {
    let text = fs::read_to_string(path).map_err(|source| DemoError::ReadDefaults {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DemoError::ParseDefaults {
        path: path.to_owned(),
        source,
    })
}

/// Errors that stop the demo.
#[derive(Debug)]
pub(crate) enum DemoError {
    /// The defaults file could not be read.
    ReadDefaults {
        /// The file that was asked for.
        path: PathBuf,
        /// Why reading failed.
        source: io::Error,
    },
    /// The defaults file is not a valid shadow record.
    ParseDefaults {
        /// The file that was asked for.
        path: PathBuf,
        /// Why parsing failed.
        source: serde_json::Error,
    },
    /// Reading commands or writing the panel failed.
    Terminal(io::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadDefaults { path, .. } => {
                write!(f, "cannot read defaults file {}", path.display())
            }
            Self::ParseDefaults { path, .. } => {
                write!(f, "defaults file {} is not a shadow record", path.display())
            }
            Self::Terminal(_) => f.write_str("terminal I/O failed"),
        }
    }
}

impl core::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::ReadDefaults { source, .. } => Some(source),
            Self::ParseDefaults { source, .. } => Some(source),
            Self::Terminal(source) => Some(source),
        }
    }
}

impl From<io::Error> for DemoError {
    fn from(source: io::Error) -> Self {
        Self::Terminal(source)
    }
}
