use crate::core::counter::{count_to_five, count_to_five_deferred};
use crate::core::fetch::{fetch_with_await, fetch_with_continuations};
use crate::core::prompt::{ask_time, PromptSession};
use crate::core::settlement::pay_back_demo;
use crate::domain::ports::{Console, DemoSettings, Scheduler};
use reqwest::Client;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};

/// Runs the demonstrations against one console and one scheduler.
pub struct DemoRunner<C: DemoSettings> {
    config: C,
    console: Arc<dyn Console>,
    scheduler: Arc<dyn Scheduler>,
    client: Client,
}

impl<C: DemoSettings> DemoRunner<C> {
    pub fn new(config: C, console: Arc<dyn Console>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            config,
            console,
            scheduler,
            client: Client::new(),
        }
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Runs every demonstration and returns once all deferred work has settled.
    pub async fn run<R, W>(&self, session: PromptSession<R, W>)
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!("Starting demonstrations");

        self.run_counters();
        self.run_settlement().await;

        // The fetches and the prompt are in flight together, as on one event loop.
        tokio::join!(self.run_fetches(), self.run_prompt(session));

        tracing::debug!("Waiting for scheduled tasks");
        self.scheduler.settle_all().await;

        tracing::info!("All demonstrations settled");
    }

    pub fn run_counters(&self) {
        tracing::debug!("Running counters");
        count_to_five(self.console.as_ref());
        count_to_five_deferred(
            Arc::clone(&self.console),
            self.scheduler.as_ref(),
            self.config.timer_delay(),
        );
    }

    pub async fn run_settlement(&self) {
        pay_back_demo(self.console.as_ref(), self.config.will_pay_back()).await;
    }

    pub async fn run_fetches(&self) {
        let url = self.config.joke_endpoint();
        let console = self.console.as_ref();
        tokio::join!(
            fetch_with_await(&self.client, console, url),
            fetch_with_continuations(&self.client, console, url),
        );
    }

    pub async fn run_prompt<R, W>(&self, session: PromptSession<R, W>)
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        ask_time(session, self.console.as_ref(), self.config.question()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{ManualScheduler, MemoryConsole};
    use std::time::Duration;

    struct MockConfig {
        joke_endpoint: String,
        timer_delay: Duration,
        will_pay_back: bool,
    }

    impl MockConfig {
        fn new(joke_endpoint: String) -> Self {
            Self {
                joke_endpoint,
                timer_delay: Duration::from_millis(3000),
                will_pay_back: false,
            }
        }
    }

    impl DemoSettings for MockConfig {
        fn joke_endpoint(&self) -> &str {
            &self.joke_endpoint
        }

        fn timer_delay(&self) -> Duration {
            self.timer_delay
        }

        fn will_pay_back(&self) -> bool {
            self.will_pay_back
        }

        fn question(&self) -> &str {
            "What time is it? "
        }
    }

    #[tokio::test]
    async fn test_counters_leave_tail_on_scheduler() {
        let console = Arc::new(MemoryConsole::new());
        let scheduler = Arc::new(ManualScheduler::new());
        let runner = DemoRunner::new(
            MockConfig::new("http://127.0.0.1:1".to_string()),
            console.clone(),
            scheduler.clone(),
        );

        runner.run_counters();
        assert_eq!(
            console.lines(),
            vec!["1", "2", "3", "4", "5", "1", "2", "5"]
        );

        scheduler.advance(Duration::from_millis(3000));
        assert_eq!(&console.lines()[8..], &["3", "4"]);
    }

    #[tokio::test]
    async fn test_settlement_follows_switch() {
        let console = Arc::new(MemoryConsole::new());
        let mut config = MockConfig::new("http://127.0.0.1:1".to_string());
        config.will_pay_back = true;
        let runner = DemoRunner::new(config, console.clone(), Arc::new(ManualScheduler::new()));

        runner.run_settlement().await;

        assert_eq!(
            console.lines(),
            vec!["I was paid back 5! Thanks!", "Nice to see you again."]
        );
    }
}
