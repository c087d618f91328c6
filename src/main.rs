use clap::Parser;
use etl_dispatch::core::runner::{self, RunOutcome};
use etl_dispatch::utils::error::{DispatchError, ErrorSeverity};
use etl_dispatch::utils::logger;
use etl_dispatch::CliConfig;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting etl-dispatch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match runner::run(&config) {
        Ok(RunOutcome::Listed(entries)) => {
            println!("📋 Configured data sources:");
            for (name, target) in entries {
                println!("  {} -> {}", name, target);
            }
        }
        Ok(RunOutcome::Planned {
            data_source,
            target,
        }) => {
            println!("🔍 {} resolves to {}", data_source, target);
        }
        Ok(RunOutcome::Transformed { data_source }) => {
            tracing::info!("✅ Data source {} transformed", data_source);
        }
        Err(e) => report_and_exit(e),
    }
}

fn report_and_exit(e: DispatchError) -> ! {
    tracing::error!(
        "❌ Dispatch failed: {} (Category: {:?}, Stage: {}, Severity: {:?})",
        e,
        e.category(),
        e.stage(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
