use anyhow::Context;
use quiz_runner::core::QuizSettings;
use quiz_runner::utils::{logger, validation::Validate};
use quiz_runner::{CliConfig, CsvFileSource, QuizEngine, SessionOutcome, SessionReport};
use tokio::io::BufReader;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env_args();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting quiz-runner");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    let result = runtime.block_on(play(config));

    // 逾時後 stdin 的讀取仍佔用阻塞執行緒，不等待它結束
    runtime.shutdown_background();

    match result {
        Ok(report) => {
            if report.outcome == SessionOutcome::TimedOut {
                tracing::info!("Time limit reached after {} answers", report.answered);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Quiz failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

async fn play(config: CliConfig) -> quiz_runner::Result<SessionReport> {
    let source = CsvFileSource::new(config.filename(), config.malformed_rows());
    let engine = QuizEngine::new(source, config);

    let stdin = BufReader::new(tokio::io::stdin());
    engine.run(stdin, tokio::io::stdout()).await
}
