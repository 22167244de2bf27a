use crate::domain::model::{BerDataset, ChartArtifact, ResultFile, StylePreset};
use crate::utils::error::Result;
use std::path::Path;

pub trait ConfigProvider {
    fn results_dir(&self) -> &Path;
    fn images_dir(&self) -> &Path;
    fn style(&self) -> &StylePreset;
}

/// The three sequential stages of the run. Each stage consumes the previous
/// stage's output; the first error aborts the whole pipeline.
pub trait Pipeline {
    /// Locate the newest matching result file and lift it into a typed value.
    fn discover(&self) -> Result<ResultFile>;

    /// Read the selected CSV into aligned measurement sequences.
    fn ingest(&self, file: &ResultFile) -> Result<BerDataset>;

    /// Build the figure and persist both output images.
    fn render(&self, file: &ResultFile, dataset: &BerDataset) -> Result<ChartArtifact>;
}
