//! Zone overlay planning and rasterization.
//!
//! Rendering is split in two: [`ZoneRenderer::plan`] computes the structural
//! draw ops (outline, strokes, label text and anchor) for the current tracker
//! state, and [`ZoneRenderer::draw`] rasterizes them onto an [`RgbImage`] in
//! place. Planning is pure, so overlays can be compared structurally.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect as PixelRect;

use crate::render::font;
use crate::zone::{Rect, ZoneOccupancyTracker};

/// Vertical gap between a zone's top edge and its label.
const LABEL_OFFSET: i32 = 12;

/// One planned overlay element: a zone outline plus its count label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneLabel {
    pub zone: String,
    pub outline: Rect,
    pub outline_stroke: i32,
    pub text: String,
    /// Top-left corner of the label, just above the outline.
    pub anchor: (i32, i32),
    pub text_stroke: i32,
}

/// Draws zone outlines and `"<name> Count: <n>"` labels.
#[derive(Debug, Clone)]
pub struct ZoneRenderer {
    pub color: Rgb<u8>,
}

impl Default for ZoneRenderer {
    fn default() -> Self {
        Self {
            color: Rgb([255, 0, 0]),
        }
    }
}

impl ZoneRenderer {
    /// Base stroke derived from the frame dimensions, integer division.
    /// The outline uses a third of it and label glyphs a sixth; either can
    /// come out as 0 on small frames, in which case that element is skipped.
    fn base_stroke(width: u32, height: u32) -> i32 {
        ((height + width) / 300) as i32
    }

    /// Compute the overlay ops for the current tracker state.
    ///
    /// Two calls with unchanged state produce identical ops.
    pub fn plan(
        &self,
        tracker: &ZoneOccupancyTracker,
        width: u32,
        height: u32,
    ) -> Vec<ZoneLabel> {
        let thickness = Self::base_stroke(width, height);
        tracker
            .zones()
            .iter()
            .map(|zone| {
                let count = tracker.state(&zone.name).map_or(0, |s| s.occupancy());
                ZoneLabel {
                    zone: zone.name.clone(),
                    outline: zone.rect,
                    outline_stroke: thickness / 3,
                    text: format!("{} Count: {}", zone.name, count),
                    anchor: (zone.rect.left, zone.rect.top - LABEL_OFFSET),
                    text_stroke: thickness / 6,
                }
            })
            .collect()
    }

    /// Rasterize the overlay onto `img` in place. No state other than the
    /// pixel buffer is touched.
    pub fn draw(&self, img: &mut RgbImage, tracker: &ZoneOccupancyTracker) {
        for op in self.plan(tracker, img.width(), img.height()) {
            draw_outline(img, &op.outline, op.outline_stroke, self.color);
            font::draw_label(img, &op.text, op.anchor.0, op.anchor.1, self.color, op.text_stroke);
        }
    }
}

/// Thick hollow rectangle, drawn as one hollow rect per stroke step expanding
/// outward. A stroke of 0 draws nothing.
fn draw_outline(img: &mut RgbImage, rect: &Rect, stroke: i32, color: Rgb<u8>) {
    if rect.width() <= 0 || rect.height() <= 0 {
        return;
    }
    for offset in 0..stroke {
        let expanded = PixelRect::at(rect.left - offset, rect.top - offset).of_size(
            (rect.width() + 2 * offset) as u32,
            (rect.height() + 2 * offset) as u32,
        );
        draw_hollow_rect_mut(img, expanded, color);
    }
}
