// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field identifiers and single-field updates.
//!
//! Hosts talk to a shadow editor in one of two shapes:
//!
//! - **By name**: an input control reports its name (`"blur"`) and a value.
//!   [`Field::from_name`] resolves the name; unknown names resolve to `None`
//!   and are ignored by the editor.
//! - **Typed**: code that already knows which field it changes builds a
//!   [`ShadowUpdate`] directly.
//!
//! Either way the result is one [`ShadowUpdate`], consumed by
//! [`ShadowState::apply`](crate::ShadowState::apply).

use alloc::string::String;
use core::fmt;

/// One of the seven fields of a [`ShadowState`](crate::ShadowState).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Horizontal offset in pixels.
    HorizontalOffset,
    /// Vertical offset in pixels.
    VerticalOffset,
    /// Blur radius in pixels.
    BlurRadius,
    /// Spread radius in pixels.
    SpreadRadius,
    /// `#RRGGBB` color.
    Color,
    /// Opacity, `0.0..=1.0` by convention.
    Opacity,
    /// Whether the shadow is drawn inside the box.
    Inset,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::HorizontalOffset,
        Self::VerticalOffset,
        Self::BlurRadius,
        Self::SpreadRadius,
        Self::Color,
        Self::Opacity,
        Self::Inset,
    ];

    /// The name input controls use for this field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HorizontalOffset => "horizontal",
            Self::VerticalOffset => "vertical",
            Self::BlurRadius => "blur",
            Self::SpreadRadius => "spread",
            Self::Color => "color",
            Self::Opacity => "opacity",
            Self::Inset => "inset",
        }
    }

    /// Resolves an input control name.
    ///
    /// Matching is exact; anything that is not one of the [`Field::name`]
    /// strings returns `None`.
    ///
    /// ```rust
    /// use understory_shadow::Field;
    ///
    /// assert_eq!(Field::from_name("blur"), Some(Field::BlurRadius));
    /// assert_eq!(Field::from_name("Blur"), None);
    /// assert_eq!(Field::from_name("border"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A loosely typed field value, as reported by a host.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Whole pixels.
    Integer(i32),
    /// A decimal number.
    Decimal(f64),
    /// Free text.
    Text(String),
    /// A checkbox state.
    Bool(bool),
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A change to exactly one field of a [`ShadowState`](crate::ShadowState).
#[derive(Clone, Debug, PartialEq)]
pub enum ShadowUpdate {
    /// Set the horizontal offset.
    HorizontalOffset(i32),
    /// Set the vertical offset.
    VerticalOffset(i32),
    /// Set the blur radius.
    BlurRadius(i32),
    /// Set the spread radius.
    SpreadRadius(i32),
    /// Set the color text. Not validated.
    Color(String),
    /// Set the opacity. Not clamped.
    Opacity(f64),
    /// Set the inset flag.
    Inset(bool),
}

impl ShadowUpdate {
    /// Pairs a field with a loosely typed value.
    ///
    /// Returns `None` when the value has the wrong kind for the field. The
    /// only widening performed is `Integer` to `Opacity`.
    ///
    /// ```rust
    /// use understory_shadow::{Field, FieldValue, ShadowUpdate};
    ///
    /// assert_eq!(
    ///     ShadowUpdate::new(Field::BlurRadius, FieldValue::Integer(4)),
    ///     Some(ShadowUpdate::BlurRadius(4))
    /// );
    /// assert_eq!(ShadowUpdate::new(Field::Inset, FieldValue::Integer(1)), None);
    /// ```
    #[must_use]
    pub fn new(field: Field, value: FieldValue) -> Option<Self> {
        let update = match (field, value) {
            (Field::HorizontalOffset, FieldValue::Integer(v)) => Self::HorizontalOffset(v),
            (Field::VerticalOffset, FieldValue::Integer(v)) => Self::VerticalOffset(v),
            (Field::BlurRadius, FieldValue::Integer(v)) => Self::BlurRadius(v),
            (Field::SpreadRadius, FieldValue::Integer(v)) => Self::SpreadRadius(v),
            (Field::Color, FieldValue::Text(v)) => Self::Color(v),
            (Field::Opacity, FieldValue::Decimal(v)) => Self::Opacity(v),
            (Field::Opacity, FieldValue::Integer(v)) => Self::Opacity(f64::from(v)),
            (Field::Inset, FieldValue::Bool(v)) => Self::Inset(v),
            _ => return None,
        };
        Some(update)
    }

    /// Converts raw input text into an update for `field`.
    ///
    /// Numbers are parsed after trimming surrounding whitespace. Color text is
    /// taken verbatim. The inset flag accepts `true`/`false`, `on`/`off` and
    /// `1`/`0`. Text that does not parse yields `None`.
    ///
    /// ```rust
    /// use understory_shadow::{Field, ShadowUpdate};
    ///
    /// assert_eq!(
    ///     ShadowUpdate::parse(Field::HorizontalOffset, " -12 "),
    ///     Some(ShadowUpdate::HorizontalOffset(-12))
    /// );
    /// assert_eq!(
    ///     ShadowUpdate::parse(Field::Color, "#zz0000"),
    ///     Some(ShadowUpdate::Color("#zz0000".into()))
    /// );
    /// assert_eq!(ShadowUpdate::parse(Field::Opacity, "half"), None);
    /// ```
    #[must_use]
    pub fn parse(field: Field, raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let update = match field {
            Field::HorizontalOffset => Self::HorizontalOffset(trimmed.parse().ok()?),
            Field::VerticalOffset => Self::VerticalOffset(trimmed.parse().ok()?),
            Field::BlurRadius => Self::BlurRadius(trimmed.parse().ok()?),
            Field::SpreadRadius => Self::SpreadRadius(trimmed.parse().ok()?),
            Field::Color => Self::Color(raw.into()),
            Field::Opacity => Self::Opacity(trimmed.parse().ok()?),
            Field::Inset => Self::Inset(parse_flag(trimmed)?),
        };
        Some(update)
    }

    /// The field this update changes.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::HorizontalOffset(_) => Field::HorizontalOffset,
            Self::VerticalOffset(_) => Field::VerticalOffset,
            Self::BlurRadius(_) => Field::BlurRadius,
            Self::SpreadRadius(_) => Field::SpreadRadius,
            Self::Color(_) => Field::Color,
            Self::Opacity(_) => Field::Opacity,
            Self::Inset(_) => Field::Inset,
        }
    }
}

fn parse_flag(text: &str) -> Option<bool> {
    match text {
        "true" | "on" | "1" => Some(true),
        "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
