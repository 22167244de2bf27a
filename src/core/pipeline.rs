use crate::core::chart::ChartRenderer;
use crate::core::locator::ResultLocator;
use crate::core::{loader, metadata};
use crate::domain::model::{BerDataset, ChartArtifact, ResultFile};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::Result;

pub struct BerChartPipeline<C: ConfigProvider> {
    config: C,
    locator: ResultLocator,
    renderer: ChartRenderer,
}

impl<C: ConfigProvider> BerChartPipeline<C> {
    pub fn new(config: C) -> Self {
        let renderer = ChartRenderer::new(config.images_dir(), config.style().clone());
        Self {
            config,
            locator: ResultLocator::new(),
            renderer,
        }
    }
}

impl<C: ConfigProvider> Pipeline for BerChartPipeline<C> {
    fn discover(&self) -> Result<ResultFile> {
        let located = self.locator.locate(self.config.results_dir())?;

        // 檔名是唯一的參數來源，檔案內容不參與
        let metadata = metadata::extract(&located.captures)?;
        let rate = metadata::code_rate(&metadata)?;

        tracing::debug!(
            "discovered {} (N={}, wc={}, wr={}, iter={}, R={:.4})",
            located.path.display(),
            metadata.block_length,
            metadata.column_weight,
            metadata.row_weight,
            metadata.iterations,
            rate
        );

        Ok(ResultFile {
            path: located.path,
            metadata,
            rate,
        })
    }

    fn ingest(&self, file: &ResultFile) -> Result<BerDataset> {
        loader::load_dataset(&file.path)
    }

    fn render(&self, file: &ResultFile, dataset: &BerDataset) -> Result<ChartArtifact> {
        self.renderer.render(file, dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotConfig;
    use crate::utils::error::PlotError;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(temp: &TempDir) -> PlotConfig {
        PlotConfig::new(temp.path().join("results"), temp.path().join("images"))
    }

    fn write_result_file(temp: &TempDir, name: &str) {
        let results = temp.path().join("results");
        fs::create_dir_all(&results).unwrap();
        fs::write(
            results.join(name),
            "EbN0_dB,BER_info,BER_bpsk\n0.0,1e-1,8e-2\n1.0,4e-2,5e-2\n",
        )
        .unwrap();
    }

    #[test]
    fn test_discover_builds_the_typed_result_file() {
        let temp = TempDir::new().unwrap();
        write_result_file(&temp, "ldpc_ber_N1024_wc3_wr6_iter50_data.csv");

        let pipeline = BerChartPipeline::new(config_for(&temp));
        let file = pipeline.discover().unwrap();

        assert_eq!(file.metadata.block_length, 1024);
        assert_eq!(file.metadata.column_weight, 3);
        assert_eq!(file.metadata.row_weight, 6);
        assert_eq!(file.metadata.iterations, 50);
        assert!((file.rate - 0.5).abs() < 1e-12);
        assert!(file.path.ends_with("ldpc_ber_N1024_wc3_wr6_iter50_data.csv"));
    }

    #[test]
    fn test_discover_fails_on_zero_row_weight() {
        let temp = TempDir::new().unwrap();
        write_result_file(&temp, "ldpc_ber_N1024_wc3_wr0_iter50_data.csv");

        let pipeline = BerChartPipeline::new(config_for(&temp));
        let err = pipeline.discover().unwrap_err();
        assert!(matches!(err, PlotError::DivisionByZero));
    }

    #[test]
    fn test_ingest_reads_the_discovered_file() {
        let temp = TempDir::new().unwrap();
        write_result_file(&temp, "ldpc_ber_N1024_wc3_wr6_iter50_data.csv");

        let pipeline = BerChartPipeline::new(config_for(&temp));
        let file = pipeline.discover().unwrap();
        let dataset = pipeline.ingest(&file).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.eb_n0_db, vec![0.0, 1.0]);
    }

    #[test]
    fn test_missing_results_directory_propagates() {
        let temp = TempDir::new().unwrap();
        let pipeline = BerChartPipeline::new(config_for(&temp));
        let err = pipeline.discover().unwrap_err();
        assert!(matches!(err, PlotError::DirectoryNotFound { .. }));
    }
}
