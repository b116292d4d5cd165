use image::GrayImage;
use imageproc::contrast::{otsu_level, threshold};

use crate::error::Result;
use crate::traits::ThresholdStrategy;

/// Otsu's automatic thresholding.
///
/// Picks the cut point that maximizes between-class intensity variance over
/// the frame's 256-bin histogram, ties resolved at the lowest qualifying
/// level. Fully automatic: no parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct OtsuThreshold;

impl ThresholdStrategy for OtsuThreshold {
    fn threshold(&self, gray: &GrayImage) -> Result<GrayImage> {
        let level = otsu_level(gray);
        Ok(threshold(gray, level))
    }
}
