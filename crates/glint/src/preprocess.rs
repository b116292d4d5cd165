use image::{DynamicImage, GrayImage};

use crate::error::{GlintError, Result};

/// Convert a frame to grayscale and smooth it.
///
/// Color frames are reduced with standard luma weighting; a frame that is
/// already single-channel passes through unchanged. `blur_size` is the side
/// length of the Gaussian kernel and must be a positive odd integer;
/// `blur_size == 1` skips smoothing entirely. The input frame is never
/// mutated.
pub fn prepare(frame: &DynamicImage, blur_size: u32) -> Result<GrayImage> {
    validate_kernel_size("blur_size", blur_size)?;

    if frame.width() == 0 || frame.height() == 0 {
        return Err(GlintError::EmptyFrame {
            width: frame.width(),
            height: frame.height(),
        });
    }

    let gray = frame.to_luma8();
    if blur_size == 1 {
        return Ok(gray);
    }

    Ok(imageproc::filter::gaussian_blur_f32(
        &gray,
        sigma_for_kernel(blur_size),
    ))
}

/// Sigma for a given kernel side length, matching the usual convention for
/// auto-derived Gaussian sigmas: `0.3 * ((k - 1) * 0.5 - 1) + 0.8`.
fn sigma_for_kernel(size: u32) -> f32 {
    0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Shared parity/positivity check for kernel-sized parameters
/// (blur_size, clean_size, peak_size).
pub(crate) fn validate_kernel_size(name: &'static str, size: u32) -> Result<()> {
    if size == 0 || size % 2 == 0 {
        return Err(GlintError::InvalidParameter {
            name,
            value: size as f64,
            expected: "a positive odd integer",
        });
    }
    Ok(())
}
