// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shadow record and its rule rendering.

use alloc::format;
use alloc::string::String;

use kurbo::Vec2;
use peniko::Color;

use crate::color::hex_to_rgb;
use crate::field::{Field, FieldValue, ShadowUpdate};

/// The seven values describing one `box-shadow`.
///
/// None of the fields are validated: a negative blur, an opacity of `3.0` or a
/// color of `"red"` are stored as given and rendered as given. The rule text
/// is a pure function of these fields, see [`ShadowState::rule`].
///
/// With the `serde` feature, the record uses the input control names
/// (`horizontal`, `vertical`, `blur`, `spread`, `color`, `opacity`, `inset`)
/// and every field falls back to its [`Default`] value when missing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShadowState {
    /// Horizontal offset in pixels.
    #[cfg_attr(feature = "serde", serde(rename = "horizontal"))]
    pub horizontal_offset: i32,
    /// Vertical offset in pixels.
    #[cfg_attr(feature = "serde", serde(rename = "vertical"))]
    pub vertical_offset: i32,
    /// Blur radius in pixels.
    #[cfg_attr(feature = "serde", serde(rename = "blur"))]
    pub blur_radius: i32,
    /// Spread radius in pixels.
    #[cfg_attr(feature = "serde", serde(rename = "spread"))]
    pub spread_radius: i32,
    /// `#RRGGBB` color text.
    pub color: String,
    /// Opacity of the color.
    pub opacity: f64,
    /// Whether the shadow is drawn inside the box.
    pub inset: bool,
}

impl Default for ShadowState {
    fn default() -> Self {
        Self {
            horizontal_offset: 0,
            vertical_offset: 0,
            blur_radius: 0,
            spread_radius: 0,
            color: String::from("#000000"),
            opacity: 1.0,
            inset: false,
        }
    }
}

impl ShadowState {
    /// Applies a single-field update. No other field changes.
    pub fn apply(&mut self, update: ShadowUpdate) {
        match update {
            ShadowUpdate::HorizontalOffset(v) => self.horizontal_offset = v,
            ShadowUpdate::VerticalOffset(v) => self.vertical_offset = v,
            ShadowUpdate::BlurRadius(v) => self.blur_radius = v,
            ShadowUpdate::SpreadRadius(v) => self.spread_radius = v,
            ShadowUpdate::Color(v) => self.color = v,
            ShadowUpdate::Opacity(v) => self.opacity = v,
            ShadowUpdate::Inset(v) => self.inset = v,
        }
    }

    /// Returns the current value of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::HorizontalOffset => FieldValue::Integer(self.horizontal_offset),
            Field::VerticalOffset => FieldValue::Integer(self.vertical_offset),
            Field::BlurRadius => FieldValue::Integer(self.blur_radius),
            Field::SpreadRadius => FieldValue::Integer(self.spread_radius),
            Field::Color => FieldValue::Text(self.color.clone()),
            Field::Opacity => FieldValue::Decimal(self.opacity),
            Field::Inset => FieldValue::Bool(self.inset),
        }
    }

    /// Renders the `box-shadow` value.
    ///
    /// The value always starts with the inset token followed by a space. When
    /// the shadow is not inset the token is empty, so the value starts with a
    /// bare space.
    ///
    /// ```rust
    /// use understory_shadow::ShadowState;
    ///
    /// let mut state = ShadowState {
    ///     horizontal_offset: 5,
    ///     vertical_offset: 10,
    ///     blur_radius: 15,
    ///     spread_radius: 0,
    ///     color: "#336699".into(),
    ///     opacity: 0.5,
    ///     inset: false,
    /// };
    /// assert_eq!(state.rule(), " 5px 10px 15px 0px rgba(51, 102, 153, 0.5)");
    ///
    /// state.inset = true;
    /// assert_eq!(state.rule(), "inset 5px 10px 15px 0px rgba(51, 102, 153, 0.5)");
    /// ```
    #[must_use]
    pub fn rule(&self) -> String {
        let inset = if self.inset { "inset" } else { "" };
        format!(
            "{inset} {}px {}px {}px {}px rgba({}, {})",
            self.horizontal_offset,
            self.vertical_offset,
            self.blur_radius,
            self.spread_radius,
            hex_to_rgb(&self.color),
            self.opacity,
        )
    }

    /// The shadow offset as a vector.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(
            f64::from(self.horizontal_offset),
            f64::from(self.vertical_offset),
        )
    }

    /// The shadow color with its opacity applied.
    #[must_use]
    pub fn color(&self) -> Color {
        hex_to_rgb(&self.color).with_opacity(self.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShadowState {
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

    #[test]
    fn default_rule() {
        assert_eq!(ShadowState::default().rule(), " 0px 0px 0px 0px rgba(0, 0, 0, 1)");
    }

    #[test]
    fn rule_is_repeatable() {
        let state = sample();
        assert_eq!(state.rule(), state.rule());
    }

    #[test]
    fn negative_values_render_verbatim() {
        let mut state = sample();
        state.apply(ShadowUpdate::HorizontalOffset(-4));
        state.apply(ShadowUpdate::BlurRadius(-1));
        state.apply(ShadowUpdate::SpreadRadius(-8));
        state.apply(ShadowUpdate::Opacity(1.75));
        assert_eq!(state.rule(), " -4px 10px -1px -8px rgba(51, 102, 153, 1.75)");
    }

    #[test]
    fn malformed_color_renders_zero_channels() {
        let mut state = sample();
        state.apply(ShadowUpdate::Color("purple".into()));
        assert_eq!(state.rule(), " 5px 10px 15px 0px rgba(0, 0, 0, 0.5)");

        // Only unreadable pairs fall back to zero: "red" still reads "ed".
        state.apply(ShadowUpdate::Color("red".into()));
        assert_eq!(state.rule(), " 5px 10px 15px 0px rgba(237, 0, 0, 0.5)");
    }

    #[test]
    fn apply_changes_one_field() {
        for field in Field::ALL {
            let before = sample();
            let mut after = before.clone();
            let update = match field {
                Field::HorizontalOffset => ShadowUpdate::HorizontalOffset(99),
                Field::VerticalOffset => ShadowUpdate::VerticalOffset(99),
                Field::BlurRadius => ShadowUpdate::BlurRadius(99),
                Field::SpreadRadius => ShadowUpdate::SpreadRadius(99),
                Field::Color => ShadowUpdate::Color("#ffffff".into()),
                Field::Opacity => ShadowUpdate::Opacity(0.9),
                Field::Inset => ShadowUpdate::Inset(true),
            };
            after.apply(update);
            for other in Field::ALL {
                if other == field {
                    assert_ne!(after.get(other), before.get(other), "{field} should change");
                } else {
                    assert_eq!(after.get(other), before.get(other), "{other} should not change");
                }
            }
        }
    }

    #[test]
    fn offset_and_color() {
        let state = sample();
        assert_eq!(state.offset(), Vec2::new(5.0, 10.0));
        let rgba = state.color().to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (51, 102, 153));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_defaults() {
        let state: ShadowState =
            serde_json::from_str(r##"{ "blur": 12, "color": "#ff0000", "inset": true }"##)
                .unwrap();
        assert_eq!(
            state,
            ShadowState {
                blur_radius: 12,
                color: "#ff0000".into(),
                inset: true,
                ..ShadowState::default()
            }
        );
    }
}
