use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting sweep progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the dashboard on stdout.
/// Uses indicatif for rich progress bar display.
///
/// The bar lives behind a mutex because sweeps report from an async context
/// that may move between worker threads.
pub struct StderrProgressReporter {
    progress_bar: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: Mutex::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> Result<ProgressBar> {
        let mut pb_option = self
            .progress_bar
            .lock()
            .map_err(|_| anyhow::anyhow!("progress bar state is poisoned"))?;

        if let Some(pb) = pb_option.as_ref() {
            if pb.length() == Some(total as u64) && !pb.is_finished() {
                return Ok(pb.clone());
            }
        }

        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .map_err(|e| anyhow::anyhow!("invalid progress bar template: {}", e))?
            .progress_chars("=>-");

        let pb = ProgressBar::new(total as u64);
        pb.set_style(style);
        *pb_option = Some(pb.clone());
        Ok(pb)
    }

    fn finish_bar(&self) {
        if let Ok(mut pb_option) = self.progress_bar.lock() {
            if let Some(pb) = pb_option.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) -> Result<()> {
        let pb = self.get_or_create_progress_bar(total)?;
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        Ok(())
    }

    fn report_error(&self, message: &str) {
        self.finish_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}
