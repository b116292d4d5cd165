pub mod fixed;
pub mod otsu;
pub mod peaks;
pub mod percentile;

pub use fixed::FixedMarginThreshold;
pub use otsu::OtsuThreshold;
pub use peaks::PeakThreshold;
pub use percentile::PercentileThreshold;

use crate::error::{GlintError, Result};

pub(crate) fn validate_margin(margin: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&margin) {
        return Err(GlintError::InvalidParameter {
            name: "margin",
            value: margin as f64,
            expected: "a value in [0, 1]",
        });
    }
    Ok(())
}
