//! Viewport, focus, and display-mode state.

use serde::{Deserialize, Serialize};

/// Target aspect ratio of a stream panel.
pub const PANEL_ASPECT: f32 = 16.0 / 9.0;

/// Layout arrangement for displayed streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Rows and columns of fixed `streams_per_line`.
    Grid,
    /// A single horizontal line, scrolled by the focus index.
    #[default]
    Aligned,
}

/// Viewport and focus parameters shared by every layout pass.
///
/// Lives for the whole session; only [`ViewportState::set_pixel_size`]
/// rewrites the cached aspect-corrected extents.
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current layout arrangement.
    pub display_mode: DisplayMode,
    /// Position of the emphasized entity. Rational: half-steps mark a
    /// transitional shift between two neighbors.
    pub focus_index: f32,
    /// Streams per row, grid mode only. Always positive.
    pub streams_per_line: u32,
    /// True between the two halves of a half-step focus shift. Guards
    /// destructive operations while the transition is showing.
    pub half_shift_active: bool,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Outer (window) height in pixels, used by camera framing.
    pub outer_height: f32,
    fixed_width: f32,
    fixed_height: f32,
}

impl ViewportState {
    /// Creates viewport state for the given pixel size.
    pub fn new(width: f32, height: f32, outer_height: f32) -> Self {
        let mut state = Self {
            display_mode: DisplayMode::default(),
            focus_index: 0.0,
            streams_per_line: 2,
            half_shift_active: false,
            width,
            height,
            outer_height,
            fixed_width: 0.0,
            fixed_height: 0.0,
        };
        state.update_fixed_extents();
        state
    }

    /// Updates the pixel size and recomputes the fixed extents.
    pub fn set_pixel_size(&mut self, width: f32, height: f32, outer_height: f32) {
        self.width = width;
        self.height = height;
        self.outer_height = outer_height;
        self.update_fixed_extents();
    }

    /// Largest 16:9 rectangle fitting the viewport, width component.
    #[must_use]
    pub fn fixed_width(&self) -> f32 {
        self.fixed_width
    }

    /// Largest 16:9 rectangle fitting the viewport, height component.
    #[must_use]
    pub fn fixed_height(&self) -> f32 {
        self.fixed_height
    }

    /// Width over height of the raw viewport.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    fn update_fixed_extents(&mut self) {
        if self.aspect_ratio() > PANEL_ASPECT {
            self.fixed_width = self.height * PANEL_ASPECT;
            self.fixed_height = self.height;
        } else {
            self.fixed_width = self.width;
            self.fixed_height = self.width / PANEL_ASPECT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fixed_extents_wide_viewport() {
        // Wider than 16:9: height bounds, width is corrected.
        let viewport = ViewportState::new(2560.0, 1080.0, 1080.0);
        assert!((viewport.fixed_height() - 1080.0).abs() < 1e-3);
        assert!((viewport.fixed_width() - 1080.0 * PANEL_ASPECT).abs() < 1e-3);
    }

    #[test]
    fn test_fixed_extents_tall_viewport() {
        // Narrower than 16:9: width bounds, height is corrected.
        let viewport = ViewportState::new(1280.0, 1080.0, 1080.0);
        assert!((viewport.fixed_width() - 1280.0).abs() < 1e-3);
        assert!((viewport.fixed_height() - 1280.0 / PANEL_ASPECT).abs() < 1e-3);
    }

    #[test]
    fn test_resize_recomputes_extents() {
        let mut viewport = ViewportState::new(1920.0, 1080.0, 1080.0);
        viewport.set_pixel_size(1080.0, 1920.0, 1920.0);
        assert!((viewport.fixed_width() - 1080.0).abs() < 1e-3);
        assert!((viewport.fixed_height() - 1080.0 / PANEL_ASPECT).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_fixed_extents_fit_and_keep_aspect(
            width in 320.0f32..8192.0,
            height in 240.0f32..4320.0,
        ) {
            let viewport = ViewportState::new(width, height, height);

            // The corrected rectangle never exceeds the viewport on
            // either axis, and is always 16:9.
            prop_assert!(viewport.fixed_width() <= width + 1e-2);
            prop_assert!(viewport.fixed_height() <= height + 1e-2);
            let ratio = viewport.fixed_width() / viewport.fixed_height();
            prop_assert!((ratio - PANEL_ASPECT).abs() < 1e-3);
        }
    }
}
