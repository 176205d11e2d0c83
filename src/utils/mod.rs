pub mod constants;
pub mod format;
pub mod logging;
pub mod missing;
pub mod output_dirs;
pub mod progress;

pub use constants::*;
pub use format::format_minutes;
pub use logging::init_logging;
pub use output_dirs::OutputDirs;
pub use progress::ProgressReporter;
