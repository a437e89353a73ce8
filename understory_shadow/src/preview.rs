// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preview geometry for native hosts.
//!
//! A browser preview only needs the rule text. A native preview has to draw
//! the shadow itself; [`ShadowGeometry`] gives it the two rectangles involved,
//! following the CSS Backgrounds and Borders model:
//!
//! - the **shadow rect** is the box grown by the spread radius (shrunk for
//!   inset shadows) and moved by the offset;
//! - the **paint bounds** are the area the blurred shadow can touch. Outer
//!   shadows bleed out by the blur radius; inset shadows never leave the box.

use kurbo::Rect;

use crate::state::ShadowState;

/// Rectangles needed to paint a shadow around (or inside) a box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadowGeometry {
    /// The box casting the shadow, normalized.
    pub box_rect: Rect,
    /// The shadow shape before blurring.
    pub shadow_rect: Rect,
    /// Everything the shadow may paint, blur included.
    pub paint_bounds: Rect,
    /// Blur radius in pixels, never negative.
    pub blur_radius: f64,
    /// Whether the shadow is drawn inside the box.
    pub inset: bool,
}

impl ShadowGeometry {
    /// Computes the geometry of `state` cast by `box_rect`.
    ///
    /// A spread that would turn the shape inside out collapses it to its
    /// center. Negative blur counts as no blur.
    ///
    /// ```rust
    /// use kurbo::Rect;
    /// use understory_shadow::{ShadowGeometry, ShadowState};
    ///
    /// let state = ShadowState {
    ///     horizontal_offset: 10,
    ///     vertical_offset: 5,
    ///     blur_radius: 4,
    ///     spread_radius: 2,
    ///     ..ShadowState::default()
    /// };
    /// let geometry = ShadowGeometry::new(&state, Rect::new(0.0, 0.0, 100.0, 50.0));
    /// assert_eq!(geometry.shadow_rect, Rect::new(8.0, 3.0, 112.0, 57.0));
    /// assert_eq!(geometry.paint_bounds, Rect::new(4.0, -1.0, 116.0, 61.0));
    /// ```
    #[must_use]
    pub fn new(state: &ShadowState, box_rect: Rect) -> Self {
        let spread = f64::from(state.spread_radius);
        let blur = f64::from(state.blur_radius.max(0));
        let box_rect = box_rect.abs();

        let (shadow_rect, paint_bounds) = if state.inset {
            (grow(box_rect, -spread) + state.offset(), box_rect)
        } else {
            let shadow_rect = grow(box_rect, spread) + state.offset();
            (shadow_rect, shadow_rect.inflate(blur, blur))
        };
        Self {
            box_rect,
            shadow_rect,
            paint_bounds,
            blur_radius: blur,
            inset: state.inset,
        }
    }

    /// Whether the shadow paints anything visible.
    ///
    /// A sharp outer shadow hidden behind the box, or a sharp inset shadow
    /// whose shape covers the box, paints nothing. A blurred shadow always
    /// counts as visible unless its shape is empty.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        let sharp = self.blur_radius <= 0.0;
        if self.inset {
            !self.box_rect.is_zero_area() && !(sharp && covers(self.shadow_rect, self.box_rect))
        } else {
            !self.shadow_rect.is_zero_area() && !(sharp && covers(self.box_rect, self.shadow_rect))
        }
    }
}

fn covers(outer: Rect, inner: Rect) -> bool {
    outer.union(inner) == outer
}

fn grow(rect: Rect, amount: f64) -> Rect {
    let center = rect.center();
    let half_width = (rect.width() / 2.0 + amount).max(0.0);
    let half_height = (rect.height() / 2.0 + amount).max(0.0);
    Rect::new(
        center.x - half_width,
        center.y - half_height,
        center.x + half_width,
        center.y + half_height,
    )
}
