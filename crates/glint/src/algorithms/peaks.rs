use image::{GrayImage, Luma};

use crate::error::{GlintError, Result};
use crate::preprocess::validate_kernel_size;
use crate::traits::ThresholdStrategy;

use super::validate_margin;

/// Local-maximum peak detection.
///
/// A pixel becomes foreground iff it equals the maximum intensity over its
/// `peak_size x peak_size` square neighborhood and strictly exceeds
/// `255 * margin`. Picks out multiple isolated point sources per frame and
/// may yield single-pixel blobs before cleanup.
#[derive(Debug, Clone, Copy)]
pub struct PeakThreshold {
    /// Fraction of the maximum intensity value, in [0, 1].
    pub margin: f32,
    /// Side length of the local-maximum window, odd and >= 3.
    pub peak_size: u32,
}

impl PeakThreshold {
    pub fn new(margin: f32, peak_size: u32) -> Result<Self> {
        validate_margin(margin)?;
        validate_kernel_size("peak_size", peak_size)?;
        if peak_size < 3 {
            return Err(GlintError::InvalidParameter {
                name: "peak_size",
                value: peak_size as f64,
                expected: "an odd integer >= 3",
            });
        }
        Ok(Self { margin, peak_size })
    }
}

impl ThresholdStrategy for PeakThreshold {
    fn threshold(&self, gray: &GrayImage) -> Result<GrayImage> {
        let (width, height) = gray.dimensions();
        let floor = (u8::MAX as f32 * self.margin) as u8;
        let reach = (self.peak_size / 2) as i64;

        let mut mask = GrayImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = gray.get_pixel(x, y).0[0];
                if v <= floor {
                    continue;
                }
                if v == window_max(gray, x as i64, y as i64, reach) {
                    mask.put_pixel(x, y, Luma([255u8]));
                }
            }
        }
        Ok(mask)
    }
}

fn window_max(gray: &GrayImage, cx: i64, cy: i64, reach: i64) -> u8 {
    let (width, height) = (gray.width() as i64, gray.height() as i64);
    let mut max = 0u8;
    for y in (cy - reach).max(0)..=(cy + reach).min(height - 1) {
        for x in (cx - reach).max(0)..=(cx + reach).min(width - 1) {
            max = max.max(gray.get_pixel(x as u32, y as u32).0[0]);
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_parameters() {
        assert!(PeakThreshold::new(1.5, 15).is_err());
        assert!(PeakThreshold::new(0.5, 4).is_err());
        assert!(PeakThreshold::new(0.5, 1).is_err());
        assert!(PeakThreshold::new(0.5, 3).is_ok());
    }

    #[test]
    fn finds_isolated_point_sources() {
        let mut gray = GrayImage::new(40, 40);
        gray.put_pixel(10, 10, Luma([250u8]));
        gray.put_pixel(30, 25, Luma([240u8]));
        let mask = PeakThreshold::new(0.7, 15).unwrap().threshold(&gray).unwrap();
        assert_eq!(mask.get_pixel(10, 10).0[0], 255);
        assert_eq!(mask.get_pixel(30, 25).0[0], 255);
        assert_eq!(mask.pixels().filter(|p| p.0[0] == 255).count(), 2);
    }

    #[test]
    fn non_maximal_pixels_stay_background() {
        // Two bright pixels inside one window: only the brighter survives.
        let mut gray = GrayImage::new(20, 20);
        gray.put_pixel(8, 8, Luma([250u8]));
        gray.put_pixel(10, 8, Luma([240u8]));
        let mask = PeakThreshold::new(0.5, 7).unwrap().threshold(&gray).unwrap();
        assert_eq!(mask.get_pixel(8, 8).0[0], 255);
        assert_eq!(mask.get_pixel(10, 8).0[0], 0);
    }

    #[test]
    fn dim_peaks_below_the_margin_are_ignored() {
        let mut gray = GrayImage::new(20, 20);
        gray.put_pixel(5, 5, Luma([100u8]));
        let mask = PeakThreshold::new(0.7, 5).unwrap().threshold(&gray).unwrap();
        assert!(mask.pixels().all(|p| p.0[0] == 0));
    }
}
