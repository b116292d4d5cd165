use geo::Area;
use geo_types::{Coord, LineString, Polygon};
use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};

use crate::error::{GlintError, Result};
use crate::types::{Blob, BoundingBox};

/// Default label format, `"{index} {area:.1}"`.
pub fn default_label(index: usize, area: f32) -> String {
    format!("{index} {area:.1}")
}

/// Extract blobs from a cleaned binary mask with the default label format.
pub fn extract_blobs(mask: &GrayImage, min_area: f32, max_area: f32) -> Result<Vec<Blob>> {
    extract_blobs_with(mask, min_area, max_area, &default_label)
}

/// Extract blobs from a cleaned binary mask.
///
/// Only external boundaries are considered; interior holes are not
/// independent blobs. A boundary becomes a blob iff its continuous polygon
/// area lies in `[min_area, max_area]` inclusive; the rest are silently
/// discarded. Blobs come out in contour discovery order, which is the mask's
/// scan order, so identical masks always give identical orderings. `labeler`
/// receives the post-filter index and the area.
pub fn extract_blobs_with(
    mask: &GrayImage,
    min_area: f32,
    max_area: f32,
    labeler: &dyn Fn(usize, f32) -> String,
) -> Result<Vec<Blob>> {
    if min_area > max_area {
        return Err(GlintError::InvalidParameter {
            name: "min_area",
            value: min_area as f64,
            expected: "min_area <= max_area",
        });
    }

    let mut blobs = Vec::new();
    for contour in find_contours::<i32>(mask) {
        if contour.border_type != BorderType::Outer {
            continue;
        }

        let area = contour_area(&contour.points);
        if area < min_area || area > max_area {
            continue;
        }

        let bounds = bounding_box(&contour.points);
        blobs.push(Blob {
            center: bounds.center(),
            bounds,
            area,
            label: labeler(blobs.len(), area),
        });
    }

    Ok(blobs)
}

/// Shoelace area of the traced boundary, via geo. This is the continuous
/// polygon area, not the foreground pixel count.
fn contour_area(points: &[imageproc::point::Point<i32>]) -> f32 {
    let coords: Vec<Coord<f32>> = points
        .iter()
        .map(|p| Coord {
            x: p.x as f32,
            y: p.y as f32,
        })
        .collect();
    Polygon::new(LineString::new(coords), vec![]).unsigned_area()
}

fn bounding_box(points: &[imageproc::point::Point<i32>]) -> BoundingBox {
    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    BoundingBox {
        x: min_x,
        y: min_y,
        width: (max_x - min_x + 1) as u32,
        height: (max_y - min_y + 1) as u32,
    }
}
