// src/pipeline/poll.rs

//! The poll loop: fetch, validate, translate, detect, notify, sleep.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::{Config, MessageConfig};
use crate::pipeline::{Reporter, StatusTranslator, check_response};
use crate::services::{HomeworkSource, Notifier};

/// What a single poll cycle ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new report was delivered
    Notified,
    /// Nothing new to say
    Unchanged,
    /// The cycle failed; the error was logged and reported if new
    Failed,
}

/// Owns the poll cursor and report slots for the lifetime of the process.
pub struct Poller {
    source: Arc<dyn HomeworkSource>,
    notifier: Arc<dyn Notifier>,
    translator: StatusTranslator,
    messages: MessageConfig,
    retry_period: Duration,
    cursor: i64,
    reporter: Reporter,
}

impl Poller {
    /// Create a poller whose first query starts at the current time.
    pub fn new(
        config: &Config,
        source: Arc<dyn HomeworkSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            source,
            notifier,
            translator: StatusTranslator::new(&config.messages),
            messages: config.messages.clone(),
            retry_period: config.polling.retry_period(),
            cursor: Utc::now().timestamp(),
            reporter: Reporter::new(),
        }
    }

    /// Start from an explicit cursor instead of the current time.
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Poll forever, sleeping the retry period after every cycle.
    pub async fn run(&mut self) {
        log::info!(
            "Polling homework statuses every {}s",
            self.retry_period.as_secs()
        );
        loop {
            let outcome = self.run_cycle().await;
            log::debug!("Cycle finished: {:?}, next cursor {}", outcome, self.cursor);
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Run one cycle. Never fails: errors are logged and reported here.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll().await {
            Ok(outcome) => outcome,
            Err(error) => {
                self.report_failure(error).await;
                CycleOutcome::Failed
            }
        }
    }

    async fn poll(&mut self) -> Result<CycleOutcome> {
        let raw = self.source.fetch(self.cursor).await?;
        let response = check_response(raw)?;

        if response.current_date < self.cursor {
            log::warn!(
                "API cursor moved backwards: {} -> {}",
                self.cursor,
                response.current_date
            );
        }
        self.cursor = response.current_date;

        match response.homeworks.first() {
            Some(homework) => {
                let name = self.translator.homework_name(homework)?;
                self.reporter.record_name(name);
                let message = self.translator.translate(homework)?;
                self.reporter.record_message(message);
            }
            None => self.reporter.record_message(self.messages.no_change.clone()),
        }

        let Some(report) = self.reporter.pending() else {
            log::debug!("No new homework statuses");
            return Ok(CycleOutcome::Unchanged);
        };

        let message = report.message.clone();
        self.notifier.send(&message).await?;
        self.reporter.mark_sent();
        log::info!("Sent message: {}", message);
        Ok(CycleOutcome::Notified)
    }

    /// Log a failed cycle and forward it to the chat once.
    ///
    /// A failure to deliver the error report is only logged.
    async fn report_failure(&mut self, error: AppError) {
        log::error!("Poll cycle failed: {}", error);
        self.reporter.record_message(self.messages.format_error(&error));

        let Some(report) = self.reporter.pending() else {
            log::debug!("Error already reported, not sending again");
            return;
        };

        let message = report.message.clone();
        match self.notifier.send(&message).await {
            Ok(()) => self.reporter.mark_sent(),
            Err(e) => log::error!("Failed to report error to chat: {}", e),
        }
    }
}
