use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

use crate::algorithms::{
    FixedMarginThreshold, OtsuThreshold, PeakThreshold, PercentileThreshold,
};
use crate::error::{GlintError, Result};
use crate::preprocess::validate_kernel_size;
use crate::traits::ThresholdStrategy;

/// Per-strategy parameter record.
///
/// One variant per thresholding strategy, tagged for serialization so an
/// external UI can select a strategy by name and supply exactly the fields
/// that strategy understands. `PeakDetector` carries no area bounds: its
/// filtering relies on the local-maximum test itself.
#[derive(
    Debug,
    Clone,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
    IntoStaticStr,
    PartialEq,
)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StrategyParams {
    /// Otsu's automatic thresholding; no tuning knobs beyond the shared ones.
    Otsu {
        blur_size: u32,
        clean_size: u32,
        min_area: f32,
        max_area: f32,
    },

    /// Threshold at a percentile of the frame's intensity distribution.
    Percentile {
        percentile: f32,
        blur_size: u32,
        clean_size: u32,
        min_area: f32,
        max_area: f32,
    },

    /// Threshold at a fixed fraction of the maximum intensity value.
    FixedMargin {
        margin: f32,
        blur_size: u32,
        clean_size: u32,
        min_area: f32,
        max_area: f32,
    },

    /// Local-maximum peak detection.
    PeakDetector {
        margin: f32,
        peak_size: u32,
        blur_size: u32,
        clean_size: u32,
    },
}

impl StrategyParams {
    /// Otsu with the stock tuning.
    pub fn default_otsu() -> Self {
        Self::Otsu {
            blur_size: 5,
            clean_size: 3,
            min_area: 2.0,
            max_area: 86_400.0,
        }
    }

    /// Percentile with the stock tuning.
    pub fn default_percentile() -> Self {
        Self::Percentile {
            percentile: 96.0,
            blur_size: 5,
            clean_size: 3,
            min_area: 2.0,
            max_area: 86_400.0,
        }
    }

    /// FixedMargin with the stock tuning.
    pub fn default_fixed_margin() -> Self {
        Self::FixedMargin {
            margin: 0.7,
            blur_size: 7,
            clean_size: 3,
            min_area: 5.0,
            max_area: 86_400.0,
        }
    }

    /// PeakDetector with the stock tuning.
    pub fn default_peak_detector() -> Self {
        Self::PeakDetector {
            margin: 0.7,
            peak_size: 15,
            blur_size: 5,
            clean_size: 3,
        }
    }

    /// All strategy names, as serialized.
    pub fn strategy_names() -> &'static [&'static str] {
        <Self as VariantNames>::VARIANTS
    }

    pub fn blur_size(&self) -> u32 {
        match *self {
            Self::Otsu { blur_size, .. }
            | Self::Percentile { blur_size, .. }
            | Self::FixedMargin { blur_size, .. }
            | Self::PeakDetector { blur_size, .. } => blur_size,
        }
    }

    pub fn clean_size(&self) -> u32 {
        match *self {
            Self::Otsu { clean_size, .. }
            | Self::Percentile { clean_size, .. }
            | Self::FixedMargin { clean_size, .. }
            | Self::PeakDetector { clean_size, .. } => clean_size,
        }
    }

    /// Inclusive area bounds for blob filtering; `None` means unbounded.
    pub fn area_bounds(&self) -> Option<(f32, f32)> {
        match *self {
            Self::Otsu {
                min_area, max_area, ..
            }
            | Self::Percentile {
                min_area, max_area, ..
            }
            | Self::FixedMargin {
                min_area, max_area, ..
            } => Some((min_area, max_area)),
            Self::PeakDetector { .. } => None,
        }
    }

    /// Validate every declared range eagerly, before any per-pixel work.
    pub fn validate(&self) -> Result<()> {
        validate_kernel_size("blur_size", self.blur_size())?;
        validate_kernel_size("clean_size", self.clean_size())?;

        if let Some((min_area, max_area)) = self.area_bounds() {
            if min_area > max_area {
                return Err(GlintError::InvalidParameter {
                    name: "min_area",
                    value: min_area as f64,
                    expected: "min_area <= max_area",
                });
            }
        }

        // Constructors check margin / percentile / peak_size ranges.
        self.strategy().map(|_| ())
    }

    /// Map the variant to its strategy implementation.
    pub fn strategy(&self) -> Result<Box<dyn ThresholdStrategy>> {
        Ok(match *self {
            Self::Otsu { .. } => Box::new(OtsuThreshold),
            Self::Percentile { percentile, .. } => {
                Box::new(PercentileThreshold::new(percentile)?)
            }
            Self::FixedMargin { margin, .. } => Box::new(FixedMarginThreshold::new(margin)?),
            Self::PeakDetector {
                margin, peak_size, ..
            } => Box::new(PeakThreshold::new(margin, peak_size)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_tunings_validate() {
        for params in [
            StrategyParams::default_otsu(),
            StrategyParams::default_percentile(),
            StrategyParams::default_fixed_margin(),
            StrategyParams::default_peak_detector(),
        ] {
            params.validate().unwrap();
        }
    }

    #[test]
    fn even_kernel_sizes_are_rejected() {
        let params = StrategyParams::Otsu {
            blur_size: 4,
            clean_size: 3,
            min_area: 1.0,
            max_area: 10.0,
        };
        assert!(matches!(
            params.validate(),
            Err(GlintError::InvalidParameter { name: "blur_size", .. })
        ));
    }

    #[test]
    fn inverted_area_bounds_are_rejected() {
        let params = StrategyParams::Percentile {
            percentile: 90.0,
            blur_size: 5,
            clean_size: 3,
            min_area: 100.0,
            max_area: 10.0,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn peak_detector_has_no_area_bounds() {
        assert_eq!(StrategyParams::default_peak_detector().area_bounds(), None);
        assert!(StrategyParams::default_otsu().area_bounds().is_some());
    }

    #[test]
    fn strategy_names_match_serialized_tags() {
        let names = StrategyParams::strategy_names();
        assert_eq!(
            names,
            ["otsu", "percentile", "fixed_margin", "peak_detector"]
        );

        let json = serde_json::to_value(StrategyParams::default_fixed_margin()).unwrap();
        assert_eq!(json["type"], "fixed_margin");
        assert_eq!(json["params"]["blur_size"], 7);
    }

    #[test]
    fn params_round_trip_through_serde() {
        let params = StrategyParams::PeakDetector {
            margin: 0.6,
            peak_size: 9,
            blur_size: 3,
            clean_size: 1,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: StrategyParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
