use anyhow::Context;
use clap::Parser;
use hundred_chickens::core::solver::Solver;
use hundred_chickens::utils::logger;
use hundred_chickens::{CliConfig, LocalStorage, PuzzleEngine, ResolvedConfig, StdoutSink};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::info!("Starting hundred-chickens");
    tracing::debug!("CLI config: {:?}", config);

    let resolved = match config.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be solved");
        display_config_summary(&resolved)?;
        return Ok(());
    }

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let result = match resolved.output_path.clone() {
        Some(_) => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            let storage = LocalStorage::new(cwd.display().to_string());
            PuzzleEngine::new_with_monitoring(resolved, storage, config.monitor).run()
        }
        None => PuzzleEngine::new_with_monitoring(resolved, StdoutSink, config.monitor).run(),
    };

    match result {
        Ok(summary) => {
            tracing::info!(
                "✅ Wrote {} combinations to {}",
                summary.count,
                summary.location
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(resolved: &ResolvedConfig) -> anyhow::Result<()> {
    let solver = Solver::new(resolved.params.clone()).context("Invalid puzzle parameters")?;
    let params = solver.params();

    tracing::info!("📋 Configuration summary:");
    tracing::info!(
        "  Prices: rooster {}, hen {}, {} chicks for {}",
        params.rooster_price,
        params.hen_price,
        params.chick_batch_size,
        params.chick_batch_price
    );
    tracing::info!(
        "  Target: {} birds for {} coins ({} check, tolerance {})",
        params.total_birds,
        params.budget,
        params.check.as_str(),
        params.tolerance
    );
    tracing::info!(
        "  Search space: {} x {} = {} candidates",
        params.max_roosters() + 1,
        params.max_hens() + 1,
        solver.search_space()
    );
    tracing::info!(
        "  Output: {} -> {}",
        resolved.format,
        resolved.output_path.as_deref().unwrap_or("stdout")
    );
    Ok(())
}
