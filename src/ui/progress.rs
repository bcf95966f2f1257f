use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the SMTP round-trip is in flight
pub struct SendSpinner {
    bar: Option<ProgressBar>,
}

impl SendSpinner {
    /// Start a spinner; when disabled every method is a no-op
    pub fn start(enabled: bool, message: &str) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar: Some(bar) }
    }

    /// Stop and remove the spinner line
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
