//! # Glint - Light-Source Blob Detection
//!
//! A library for locating bright blob-like regions in video frames and
//! building the geometry used to visualize them: interchangeable
//! thresholding strategies, morphological mask cleanup, contour-based blob
//! extraction, a degree-constrained proximity graph over blob centers, and
//! star-marker polygons.
//!
//! ## Core Features
//!
//! - **Strategy-based Thresholding**: Otsu, percentile, fixed-margin and
//!   local-peak strategies behind one trait, selected per frame
//! - **Deterministic Pipeline**: identical inputs give bit-identical masks,
//!   blob ordering and edge sets
//! - **Proximity Graph**: greedy nearest-neighbor linking under a per-blob
//!   degree limit
//! - **Overlay Geometry**: bounding boxes, connecting lines and star markers
//!   drawable onto any `RgbImage`
//!
//! ## Quick Start
//!
//! ```rust
//! use glint::{Detector, StrategyParams};
//! use image::DynamicImage;
//!
//! let detector = Detector::new(StrategyParams::default_otsu(), 2)?;
//!
//! let frame = DynamicImage::new_luma8(640, 480);
//! let detections = detector.process(&frame)?;
//!
//! for blob in &detections.blobs {
//!     println!("{} at {:?}", blob.label, blob.center);
//! }
//! # Ok::<(), glint::GlintError>(())
//! ```
//!
//! The pipeline is synchronous and holds no shared mutable state: one frame
//! is fully processed before the next, and independent frames may be handed
//! to the same `Detector` from different threads.

pub mod algorithms;
pub mod detector;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod graph;
pub mod morphology;
pub mod params;
pub mod preprocess;
pub mod render;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use algorithms::{FixedMarginThreshold, OtsuThreshold, PeakThreshold, PercentileThreshold};
pub use detector::{Detector, process};
pub use error::{GlintError, Result};
pub use extract::{default_label, extract_blobs, extract_blobs_with};
pub use geometry::{STAR_INNER_RATIO, star_polygon};
pub use graph::build_graph;
pub use morphology::clean;
pub use params::StrategyParams;
pub use preprocess::prepare;
pub use traits::ThresholdStrategy;
pub use types::{Blob, BoundingBox, FrameDetections, ProximityEdge};
