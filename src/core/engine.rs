use crate::domain::model::ChartArtifact;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::StageTimer;

pub struct PlotEngine<P: Pipeline> {
    pipeline: P,
    timer: StageTimer,
}

impl<P: Pipeline> PlotEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            timer: StageTimer::new(monitor_enabled),
        }
    }

    /// Run the three stages in order. The console lines are part of the
    /// contract: selected input path, the four parameters with the rate, and
    /// both output paths.
    pub fn run(&self) -> Result<ChartArtifact> {
        println!("Searching for LDPC BER results...");
        let file = self.timer.time("discover", || self.pipeline.discover())?;

        let meta = &file.metadata;
        println!("Loaded file: {}", file.path.display());
        println!(
            "N={}, wc={}, wr={}, iter={}, R={:.4}",
            meta.block_length, meta.column_weight, meta.row_weight, meta.iterations, file.rate
        );

        let dataset = self.timer.time("ingest", || self.pipeline.ingest(&file))?;
        println!("Loaded {} operating points", dataset.len());

        let artifact = self
            .timer
            .time("render", || self.pipeline.render(&file, &dataset))?;
        println!("Saved PNG: {}", artifact.png_path.display());
        println!("Saved SVG: {}", artifact.svg_path.display());

        Ok(artifact)
    }
}
