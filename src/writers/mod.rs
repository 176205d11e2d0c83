pub mod plot_writer;
pub mod report_writer;

pub use plot_writer::{Bar, BarChart, PlotError, PlotWriter};
pub use report_writer::ReportWriter;
