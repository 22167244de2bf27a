pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::PlotConfig;
pub use core::{engine::PlotEngine, pipeline::BerChartPipeline};
pub use domain::model::{BerDataset, ChartArtifact, ResultFile, ResultFileMetadata, StylePreset};
pub use utils::error::{PlotError, Result};
