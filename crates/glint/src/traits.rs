use image::GrayImage;

use crate::error::Result;

/// Trait for thresholding strategies.
///
/// Implementations turn a smoothed grayscale frame into a raw binary mask
/// with foreground 255 and background 0. The caller picks one strategy per
/// frame; strategies are never mixed within a frame.
pub trait ThresholdStrategy: Send + Sync {
    fn threshold(&self, gray: &GrayImage) -> Result<GrayImage>;
}
