use image::GrayImage;
use imageproc::contrast::threshold;

use crate::error::{GlintError, Result};
use crate::traits::ThresholdStrategy;

/// Percentile thresholding.
///
/// The cut point is the intensity value at `percentile` of the frame's
/// intensity distribution, found by a cumulative histogram walk. Higher
/// percentiles are stricter and never increase the foreground pixel count.
#[derive(Debug, Clone, Copy)]
pub struct PercentileThreshold {
    /// Detection sensitivity in [0, 100].
    pub percentile: f32,
}

impl PercentileThreshold {
    pub fn new(percentile: f32) -> Result<Self> {
        if !(0.0..=100.0).contains(&percentile) {
            return Err(GlintError::InvalidParameter {
                name: "percentile",
                value: percentile as f64,
                expected: "a value in [0, 100]",
            });
        }
        Ok(Self { percentile })
    }
}

impl ThresholdStrategy for PercentileThreshold {
    fn threshold(&self, gray: &GrayImage) -> Result<GrayImage> {
        let mut hist = [0u64; 256];
        for p in gray.pixels() {
            hist[p.0[0] as usize] += 1;
        }

        let total = gray.width() as u64 * gray.height() as u64;
        let target = (self.percentile as f64 / 100.0 * total as f64).ceil() as u64;

        // Smallest intensity whose cumulative count reaches the target rank.
        let mut cumulative = 0u64;
        let mut level = 255u8;
        for (v, &count) in hist.iter().enumerate() {
            cumulative += count;
            if cumulative >= target {
                level = v as u8;
                break;
            }
        }

        Ok(threshold(gray, level))
    }
}
