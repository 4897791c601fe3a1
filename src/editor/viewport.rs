// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scaling contract between natural pixel space and the rendered surface.
//!
//! Shape geometry is stored in the media's natural pixel space. Only
//! rendering and pointer interpretation pass through the ratio, which is
//! re-recorded on every layout pass so window resizes and panel changes
//! are picked up without any subscription machinery.

/// The rendered-width / natural-width scale context for the active media.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    natural: Option<(u32, u32)>,
    rendered_width: f32,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the media's intrinsic dimensions (known once the asset loads).
    pub fn set_natural_size(&mut self, width: u32, height: u32) {
        self.natural = Some((width, height));
    }

    pub fn natural_size(&self) -> Option<(u32, u32)> {
        self.natural
    }

    /// Record the current on-screen width of the media.
    pub fn set_rendered_width(&mut self, width: f32) {
        self.rendered_width = width;
    }

    /// rendered / natural. Falls back to 1.0 until both dimensions are
    /// known, which also guards the division when natural width is 0.
    pub fn ratio(&self) -> f32 {
        match self.natural {
            Some((w, _)) if w > 0 && self.rendered_width > 0.0 => {
                self.rendered_width / w as f32
            }
            _ => 1.0,
        }
    }

    /// Natural-space width whose projected weight on screen equals
    /// `screen_width`; keeps strokes and hit regions visually constant.
    pub fn scale_width(&self, screen_width: f32) -> f32 {
        screen_width / self.ratio()
    }

    /// Map a rendered-surface offset into natural pixel coordinates.
    pub fn to_natural(&self, x: f32, y: f32) -> (f32, f32) {
        let ratio = self.ratio();
        (x / ratio, y / ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_from_rendered_width() {
        let mut viewport = Viewport::new();
        viewport.set_natural_size(1920, 1080);
        viewport.set_rendered_width(960.0);
        assert!((viewport.ratio() - 0.5).abs() < 1e-6);

        viewport.set_rendered_width(1920.0);
        assert!((viewport.ratio() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ratio_defaults_to_one() {
        let mut viewport = Viewport::new();
        assert_eq!(viewport.ratio(), 1.0);

        // Natural width of zero must not divide.
        viewport.set_natural_size(0, 0);
        viewport.set_rendered_width(640.0);
        assert_eq!(viewport.ratio(), 1.0);
    }

    #[test]
    fn test_stroke_width_scales_inversely() {
        let mut viewport = Viewport::new();
        viewport.set_natural_size(1000, 500);

        viewport.set_rendered_width(1000.0); // ratio 1.0
        let full = viewport.scale_width(4.0);
        viewport.set_rendered_width(500.0); // ratio 0.5
        let half = viewport.scale_width(4.0);

        // Halving the ratio doubles the natural-space width; the stored
        // geometry itself is untouched by rescaling.
        assert!((full - 4.0).abs() < 1e-6);
        assert!((half - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_pointer_mapping_to_natural() {
        let mut viewport = Viewport::new();
        viewport.set_natural_size(1920, 1080);
        viewport.set_rendered_width(960.0);

        let (x, y) = viewport.to_natural(480.0, 270.0);
        assert!((x - 960.0).abs() < 1e-3);
        assert!((y - 540.0).abs() < 1e-3);
    }
}
