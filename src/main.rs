use clap::Parser;
use decor_demo::utils::logger;
use decor_demo::{CliConfig, ConfigProvider, DemoEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose())?;

    tracing::info!("Starting decor-demo CLI");
    if config.verbose() {
        tracing::debug!("CLI config: {:?}", config);
    }

    let engine = DemoEngine::new(config);
    let report = engine.run();

    tracing::info!("✅ Demonstration completed");
    tracing::info!(
        "Prime verdict for {}: {}",
        report.prime_input,
        report.prime_verdict
    );

    Ok(())
}
