use anyhow::{Context, Result};
use clap::Parser;
use prime_scan::config::toml_config::TomlConfig;
use prime_scan::core::ConfigProvider;
use prime_scan::utils::{logger, validation::Validate};
use prime_scan::{export, LocalStorage, ScanEngine};

#[derive(Parser)]
#[command(name = "toml-scan")]
#[command(about = "Prime range scanner driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "prime-scan.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show what would be scanned without scanning
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based prime scan");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No scan will be performed");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args
        .monitor
        .unwrap_or_else(|| config.monitoring_enabled());
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
        let path = export(
            &storage,
            &report,
            config.output_format(),
            &config.output_filename(),
        )
        .with_context(|| format!("failed to export primes to {}", output_path))?;
        println!("📁 Output saved to: {}", path);
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    let range = config.range();
    println!("📋 Configuration Summary:");
    println!("  Range: {} to {}", range.start, range.end);
    match config.output_path() {
        Some(path) => println!(
            "  Output: {}/{} ({})",
            path,
            config.output_filename(),
            config.output_format()
        ),
        None => println!("  Output: none"),
    }
    println!("  Monitoring: {}", config.monitoring_enabled());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    let range = config.range();

    println!("🔍 Dry Run Analysis:");
    if range.is_empty() {
        println!("  Range is empty (start > end), no integers would be tested");
    } else {
        let span = range.end as i128 - range.start as i128 + 1;
        println!("  Integers to test: {}", span);
    }
    println!();
    println!("✅ Dry run analysis complete.");
}
