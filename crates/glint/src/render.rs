use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::geometry::star_polygon;
use crate::types::{Blob, ProximityEdge};

/// Options for bounding-box overlays.
#[derive(Debug, Clone, Copy)]
pub struct BoxStyle {
    pub color: Rgb<u8>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            color: Rgb([255, 255, 255]),
        }
    }
}

/// Options for proximity-link overlays.
#[derive(Debug, Clone, Copy)]
pub struct LinkStyle {
    pub color: Rgb<u8>,
}

impl Default for LinkStyle {
    fn default() -> Self {
        Self {
            color: Rgb([255, 0, 0]),
        }
    }
}

/// Options for star-marker overlays.
#[derive(Debug, Clone, Copy)]
pub struct StarStyle {
    pub color: Rgb<u8>,
    /// Outer radius of the marker, in pixels.
    pub size: f32,
}

impl Default for StarStyle {
    fn default() -> Self {
        Self {
            color: Rgb([255, 255, 0]),
            size: 6.0,
        }
    }
}

/// Draw a hollow bounding rectangle per blob.
pub fn draw_boxes_mut(canvas: &mut RgbImage, blobs: &[Blob], style: &BoxStyle) {
    for blob in blobs {
        let b = blob.bounds;
        let rect = Rect::at(b.x, b.y).of_size(b.width.max(1), b.height.max(1));
        draw_hollow_rect_mut(canvas, rect, style.color);
    }
}

/// Draw a line segment per proximity edge, between blob centers.
pub fn draw_links_mut(
    canvas: &mut RgbImage,
    blobs: &[Blob],
    edges: &[ProximityEdge],
    style: &LinkStyle,
) {
    for edge in edges {
        let (ax, ay) = blobs[edge.a].center;
        let (bx, by) = blobs[edge.b].center;
        draw_line_segment_mut(canvas, (ax, ay), (bx, by), style.color);
    }
}

/// Draw a ten-pointed star outline at each blob center.
pub fn draw_stars_mut(canvas: &mut RgbImage, blobs: &[Blob], style: &StarStyle) {
    for blob in blobs {
        let vertices = star_polygon(blob.center, style.size);
        for k in 0..vertices.len() {
            let [x0, y0] = vertices[k];
            let [x1, y1] = vertices[(k + 1) % vertices.len()];
            draw_line_segment_mut(canvas, (x0, y0), (x1, y1), style.color);
        }
    }
}
