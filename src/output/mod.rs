//! Result emission and file saving.

mod writer;

pub use writer::{save_report, OutputWriter, ReportOutput, TaskInfo};
