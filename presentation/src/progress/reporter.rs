//! Progress reporting for dispatch steps

use colored::Colorize;
use deepdesk_application::ports::progress::ProgressNotifier;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports dispatch progress with a spinner per step
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_step_start(&self, label: &str) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_prefix("deepdesk");
        bar.set_message(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(120));
        *self.spinner.lock().unwrap() = Some(bar);
    }

    fn on_step_complete(&self, label: &str, success: bool) {
        if let Some(bar) = self.spinner.lock().unwrap().take() {
            if success {
                bar.finish_with_message(format!("{} {}", "v".green(), label));
            } else {
                bar.finish_with_message(format!("{} {} (failed)", "x".red(), label));
            }
        }
    }
}

/// Plain-text progress without spinners, for non-interactive output
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_step_start(&self, label: &str) {
        println!("{} {}...", "->".cyan(), label);
    }

    fn on_step_complete(&self, label: &str, success: bool) {
        if success {
            println!("{} {}", "v".green(), label);
        } else {
            println!("{} {} {}", "x".red(), label, "(failed)".red());
        }
    }
}
