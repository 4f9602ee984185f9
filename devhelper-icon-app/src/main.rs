mod config;
mod driver;

use std::process::ExitCode;

use tracing::{error, info};

use config::ExportConfig;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ExportConfig::default();
    info!(
        "Generating Dev Helper icons into {}",
        config.output_root.display()
    );

    match driver::run(&config) {
        Ok(report) => {
            info!("Wrote {} files", report.artifacts.len());
            // .icns conversion needs the macOS toolchain and is run by hand.
            info!("Convert the iconset with: {}", config.icns_hint());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Icon export failed: {e}");
            ExitCode::FAILURE
        }
    }
}
