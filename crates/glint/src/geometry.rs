use std::f32::consts::PI;

/// Inner-to-outer radius ratio of the star markers, golden-ratio derived.
pub const STAR_INNER_RATIO: f32 = 0.382;

/// Vertices of a 10-pointed star marker centered at `center`.
///
/// Five outer and five inner vertices alternate at 36-degree steps, starting
/// from the upward direction; the inner radius is `0.382 * outer_radius`.
/// The polygon is closed: the last vertex joins back to the first. Pure
/// function, callable independently per blob.
pub fn star_polygon(center: (f32, f32), outer_radius: f32) -> Vec<[f32; 2]> {
    let (cx, cy) = center;
    let inner_radius = outer_radius * STAR_INNER_RATIO;

    (0..10)
        .map(|k| {
            let angle = k as f32 * PI / 5.0 - PI / 2.0;
            let r = if k % 2 == 0 { outer_radius } else { inner_radius };
            [cx + r * angle.cos(), cy + r * angle.sin()]
        })
        .collect()
}
