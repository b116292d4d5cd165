use image::GrayImage;
use imageproc::contrast::threshold;

use crate::error::Result;
use crate::traits::ThresholdStrategy;

use super::validate_margin;

/// Fixed-margin thresholding.
///
/// The cut point is `255 * margin`, independent of frame statistics. The
/// cheapest strategy: no histogram, no neighborhood scans.
#[derive(Debug, Clone, Copy)]
pub struct FixedMarginThreshold {
    /// Fraction of the maximum intensity value, in [0, 1].
    pub margin: f32,
}

impl FixedMarginThreshold {
    pub fn new(margin: f32) -> Result<Self> {
        validate_margin(margin)?;
        Ok(Self { margin })
    }

    pub(crate) fn level(&self) -> u8 {
        (u8::MAX as f32 * self.margin) as u8
    }
}

impl ThresholdStrategy for FixedMarginThreshold {
    fn threshold(&self, gray: &GrayImage) -> Result<GrayImage> {
        Ok(threshold(gray, self.level()))
    }
}
