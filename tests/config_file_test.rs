use anyhow::Result;
use async_primer::utils::validation::Validate;
use async_primer::{DemoRunner, DemoSettings, ManualScheduler, MemoryConsole, TomlConfig};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_config_file_drives_runner() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("primer.toml");
    tokio::fs::write(
        &config_path,
        r#"
[timer]
delay_ms = 500

[settlement]
will_pay_back = true
"#,
    )
    .await?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.timer_delay(), Duration::from_millis(500));

    let console = Arc::new(MemoryConsole::new());
    let scheduler = Arc::new(ManualScheduler::new());
    let runner = DemoRunner::new(config, console.clone(), scheduler.clone());

    runner.run_counters();
    runner.run_settlement().await;
    scheduler.advance(Duration::from_millis(499));
    assert_eq!(scheduler.pending(), 1);
    scheduler.advance(Duration::from_millis(1));

    assert_eq!(
        console.lines(),
        vec![
            "1",
            "2",
            "3",
            "4",
            "5",
            "1",
            "2",
            "5",
            "I was paid back 5! Thanks!",
            "Nice to see you again.",
            "3",
            "4",
        ]
    );
    Ok(())
}

#[test]
fn test_zero_delay_in_file_fails_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("primer.toml");
    std::fs::write(&config_path, "[timer]\ndelay_ms = 0\n")?;

    let config = TomlConfig::from_file(&config_path)?;
    assert!(config.validate().is_err());
    Ok(())
}
