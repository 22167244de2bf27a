use ldpc_ber_plot::utils::{logger, validation::Validate};
use ldpc_ber_plot::{BerChartPipeline, PlotConfig, PlotEngine};

fn main() {
    // 無命令列參數：行為完全由 results/ 目錄與命名慣例決定
    let config = PlotConfig::default();

    logger::init_cli_logger(false);
    tracing::info!("Starting ldpc-ber-plot");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let pipeline = BerChartPipeline::new(config);
    let engine = PlotEngine::new_with_monitoring(pipeline, true);

    match engine.run() {
        Ok(artifact) => {
            tracing::info!("✅ BER chart rendered successfully");
            println!("✅ BER chart rendered successfully!");
            println!("📁 {}", artifact.png_path.display());
            println!("📁 {}", artifact.svg_path.display());
        }
        Err(e) => {
            tracing::error!("❌ {} stage failed: {}", e.stage(), e);
            eprintln!("❌ [{}] {}", e.stage(), e);
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
