pub mod chart;
pub mod engine;
pub mod loader;
pub mod locator;
pub mod metadata;
pub mod pipeline;

pub use crate::domain::model::{BerDataset, ChartArtifact, ResultFile, ResultFileMetadata};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
