use clap::Parser;
use report_safety::utils::{logger, validation::Validate};
use report_safety::{CliConfig, LocalSource, SafetyEngine, SafetyError, SafetyPipeline};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting report-safety");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    if cli.monitor {
        tracing::info!("System monitoring enabled");
    }

    let pipeline = SafetyPipeline::new(LocalSource::default(), config);
    let mut engine = SafetyEngine::new_with_monitoring(pipeline, cli.monitor);

    match engine.run() {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.rendered.as_bytes())?;
            stdout.flush()?;
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn fail(e: SafetyError) -> ! {
    tracing::error!(
        "Evaluation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
