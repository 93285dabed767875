use anyhow::Result;
use clap::Parser;
use prime_scan::core::ConfigProvider;
use prime_scan::utils::{logger, validation::Validate};
use prime_scan::{export, CliConfig, LocalStorage, ScanEngine};

fn main() -> Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting prime-scan CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let monitor_enabled = config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = ScanEngine::new_with_monitoring(config.range(), monitor_enabled);
    let report = engine.run();

    for line in report.summary() {
        println!("{}", line);
    }

    if let Some(output_path) = config.output_path() {
        let storage = LocalStorage::new(output_path.to_string());
        let filename = config.output_filename();

        if let Err(e) = export(&storage, &report, config.output_format(), &filename) {
            tracing::error!(
                "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
