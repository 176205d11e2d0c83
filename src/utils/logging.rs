use chrono::Local;
use indicatif::ProgressBar;
use std::fmt;
use std::io::{self, Write};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Local wall-clock timestamps in `YYYY-MM-DD HH:MM:SS,mmm` form
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S,%3f"))
    }
}

/// Log sink for stderr that shares the terminal with a progress bar.
/// Each line is written while the bar is suspended, so the bar is redrawn
/// below the log output instead of being torn by it.
#[derive(Clone, Default)]
pub struct ProgressAwareStderr {
    bar: Option<ProgressBar>,
}

impl ProgressAwareStderr {
    pub fn new(bar: Option<ProgressBar>) -> Self {
        Self { bar }
    }
}

impl<'a> MakeWriter<'a> for ProgressAwareStderr {
    type Writer = ProgressAwareWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ProgressAwareWriter {
            bar: self.bar.clone(),
        }
    }
}

pub struct ProgressAwareWriter {
    bar: Option<ProgressBar>,
}

impl Write for ProgressAwareWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.bar {
            Some(ref pb) => pb.suspend(|| io::stderr().write(buf)),
            None => io::stderr().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self.bar {
            Some(ref pb) => pb.suspend(|| io::stderr().write_all(buf)),
            None => io::stderr().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default level.
/// Pass the pipeline's progress bar so log lines do not tear it.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_logging(verbose: bool, progress_bar: Option<ProgressBar>) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTimestamp)
        .with_target(false)
        .with_writer(ProgressAwareStderr::new(progress_bar))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_format() {
        let mut buffer = String::new();
        LocalTimestamp
            .format_time(&mut Writer::new(&mut buffer))
            .unwrap();

        // e.g. "2026-10-19 14:03:07,512"
        assert_eq!(buffer.len(), 23);
        assert_eq!(&buffer[4..5], "-");
        assert_eq!(&buffer[10..11], " ");
        assert_eq!(&buffer[19..20], ",");
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(false, None);
        init_logging(true, Some(ProgressBar::hidden()));
    }

    #[test]
    fn test_log_lines_pass_through_suspended_bar() -> io::Result<()> {
        let bar = ProgressBar::hidden();
        bar.set_length(4);
        bar.inc(1);

        let sink = ProgressAwareStderr::new(Some(bar.clone()));
        let mut writer = sink.make_writer();
        let line = b"2026-10-19 14:03:07,512  INFO Loading flight data...\n";

        assert_eq!(writer.write(line)?, line.len());
        writer.write_all(line)?;
        writer.flush()?;

        assert_eq!(bar.position(), 1);
        assert!(!bar.is_finished());
        Ok(())
    }

    #[test]
    fn test_log_lines_without_bar() -> io::Result<()> {
        let mut writer = ProgressAwareStderr::default().make_writer();
        writer.write_all(b"plain line\n")
    }
}
