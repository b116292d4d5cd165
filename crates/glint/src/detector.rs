use image::DynamicImage;
use tracing::debug;

use crate::error::Result;
use crate::extract::{default_label, extract_blobs_with};
use crate::graph::build_graph;
use crate::morphology::clean;
use crate::params::StrategyParams;
use crate::preprocess::prepare;
use crate::traits::ThresholdStrategy;
use crate::types::FrameDetections;

/// Per-frame detection pipeline:
/// prepare -> threshold -> clean -> extract -> graph.
///
/// Holds no mutable state; every call to [`Detector::process`] is pure given
/// its inputs, so callers may run independent frames in parallel. Parameters
/// are validated once, at construction.
pub struct Detector {
    params: StrategyParams,
    strategy: Box<dyn ThresholdStrategy>,
    degree_limit: usize,
}

impl Detector {
    pub fn new(params: StrategyParams, degree_limit: usize) -> Result<Self> {
        params.validate()?;
        let strategy = params.strategy()?;
        Ok(Self {
            params,
            strategy,
            degree_limit,
        })
    }

    pub fn params(&self) -> &StrategyParams {
        &self.params
    }

    /// Process one frame with the default blob label format.
    pub fn process(&self, frame: &DynamicImage) -> Result<FrameDetections> {
        self.process_with(frame, &default_label)
    }

    /// Process one frame, labelling blobs with `labeler(index, area)`.
    pub fn process_with(
        &self,
        frame: &DynamicImage,
        labeler: &dyn Fn(usize, f32) -> String,
    ) -> Result<FrameDetections> {
        let gray = prepare(frame, self.params.blur_size())?;
        let raw = self.strategy.threshold(&gray)?;
        let mask = clean(&raw, self.params.clean_size())?;

        let (min_area, max_area) = self.params.area_bounds().unwrap_or((0.0, f32::INFINITY));
        let blobs = extract_blobs_with(&mask, min_area, max_area, labeler)?;

        let centers: Vec<(f32, f32)> = blobs.iter().map(|b| b.center).collect();
        let edges = build_graph(&centers, self.degree_limit);

        debug!(
            strategy = %self.params,
            blobs = blobs.len(),
            edges = edges.len(),
            "frame processed"
        );

        Ok(FrameDetections {
            mask,
            blobs,
            edges,
            frame_width: frame.width(),
            frame_height: frame.height(),
        })
    }
}

/// One-call surface over [`Detector`] for callers that reconfigure per frame.
pub fn process(
    frame: &DynamicImage,
    params: &StrategyParams,
    degree_limit: usize,
) -> Result<FrameDetections> {
    Detector::new(params.clone(), degree_limit)?.process(frame)
}
