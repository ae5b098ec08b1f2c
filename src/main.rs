use clap::Parser;
use css_woff2_filter::utils::{logger, validation::Validate};
use css_woff2_filter::{CliConfig, FilterConfig, FilterEngine, LocalStorage, TomlConfig};

fn main() {
    let args = CliConfig::parse();

    // 載入 TOML 配置（可選）
    let file_config = match args.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    let logging = file_config.as_ref().map(|c| &c.logging);
    let verbose = args.verbose || logging.and_then(|l| l.verbose).unwrap_or(false);
    let json = args.log_json || logging.and_then(|l| l.json).unwrap_or(false);
    if json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    let config = FilterConfig::resolve(args.source, args.destination, file_config.as_ref());
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let engine = FilterEngine::new(LocalStorage::new(), config);

    match engine.run() {
        Ok(report) => {
            println!(
                "✅ {} -> {} ({} lines, {} truncated)",
                report.source.display(),
                report.destination.display(),
                report.stats.lines_read,
                report.stats.lines_rewritten
            );
        }
        Err(e) => {
            tracing::error!(
                "Filter failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
