use image::GrayImage;
use serde::{Deserialize, Serialize};

/// Minimal axis-aligned bounding rectangle of a contour, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Center of the rectangle. This is the blob center used throughout the
    /// crate: a bounding-box center, not an area centroid.
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }
}

/// One detected bright region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blob {
    /// Bounding-box center.
    pub center: (f32, f32),
    pub bounds: BoundingBox,
    /// Continuous polygon area of the traced boundary, in pixels^2.
    pub area: f32,
    /// Caller-formatted display text.
    pub label: String,
}

/// An unordered pair of blob indices with their Euclidean distance.
/// Always stored with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityEdge {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
}

/// Everything the pipeline produces for one frame.
#[derive(Debug, Clone)]
pub struct FrameDetections {
    /// Cleaned binary mask, values in {0, 255}.
    pub mask: GrayImage,
    /// Blobs in contour discovery order (mask scan order).
    pub blobs: Vec<Blob>,
    /// Greedy degree-constrained nearest-neighbor edges over blob centers.
    pub edges: Vec<ProximityEdge>,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl FrameDetections {
    pub fn centers(&self) -> Vec<(f32, f32)> {
        self.blobs.iter().map(|b| b.center).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_center_is_half_extent() {
        let bounds = BoundingBox {
            x: 45,
            y: 45,
            width: 10,
            height: 10,
        };
        assert_eq!(bounds.center(), (50.0, 50.0));
    }

    #[test]
    fn blob_round_trips_through_serde() {
        let blob = Blob {
            center: (12.5, 3.0),
            bounds: BoundingBox {
                x: 10,
                y: 1,
                width: 5,
                height: 4,
            },
            area: 16.0,
            label: "0 16.0".to_string(),
        };
        let json = serde_json::to_string(&blob).unwrap();
        let back: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(blob, back);
    }
}
