//! Shared utility functions.
//!
//! Duration formatting, timestamp slugs for backup filenames, and UTF-8 safe
//! string truncation.

mod file_ops;
mod format;
mod string;

pub use file_ops::backup_path;
pub use format::{format_duration, timestamp_slug};
pub use string::truncate_chars;
