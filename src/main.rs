use async_primer::utils::{logger, validation::Validate};
use async_primer::{
    CliConfig, DemoRunner, DemoSettings, PromptSession, StdoutConsole, TokioScheduler, TomlConfig,
};
use clap::Parser;
use std::sync::Arc;

fn exit_on_invalid<C: Validate>(config: &C) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run_with<C: DemoSettings>(config: C) {
    let runner = DemoRunner::new(
        config,
        Arc::new(StdoutConsole),
        Arc::new(TokioScheduler::new()),
    );
    runner.run(PromptSession::stdio()).await;
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting async-primer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match config.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = match TomlConfig::from_file(&path) {
                Ok(file_config) => file_config,
                Err(e) => {
                    eprintln!("❌ {}", e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };
            exit_on_invalid(&file_config);
            run_with(file_config).await;
        }
        None => {
            exit_on_invalid(&config);
            run_with(config).await;
        }
    }

    Ok(())
}
