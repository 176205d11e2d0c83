use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Stage-level progress bar for the pipeline. Hidden when `silent` is set
/// or stderr is not a terminal.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new(total_stages: u64, silent: bool) -> Self {
        if silent {
            return Self::silent();
        }

        let pb = ProgressBar::new(total_stages);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    pub fn silent() -> Self {
        Self { progress_bar: None }
    }

    /// Handle to the live bar, for output that must not tear it
    pub fn bar(&self) -> Option<ProgressBar> {
        self.progress_bar.clone()
    }

    /// Announce the stage that is about to run
    pub fn start_stage(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    pub fn finish_stage(&self) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(1);
        }
    }

    pub fn finish_with_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(message.to_string());
        }
    }

    /// Print a block of text to stdout without tearing the progress bar
    pub fn print_block(&self, text: &str) {
        match self.progress_bar {
            Some(ref pb) => pb.suspend(|| println!("{}", text)),
            None => println!("{}", text),
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            if !pb.is_finished() {
                pb.abandon();
            }
        }
    }
}
