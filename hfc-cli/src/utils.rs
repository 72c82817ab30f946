//! Utility functions for the CLI.

use dialoguer::Confirm;
use filetime::FileTime;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Create a spinner with standard styling.
pub fn create_spinner(message: &str, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("[{elapsed_precise}] {spinner:.cyan} {msg}")
            .expect("spinner template is valid"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Decide whether `output` may be written.
///
/// Missing files and `force` always pass; otherwise the user is asked.
/// Without a terminal to ask on, the answer is no.
pub fn confirm_overwrite(output: &Path, force: bool) -> bool {
    if force || !output.exists() {
        return true;
    }

    Confirm::new()
        .with_prompt(format!("{} exists. Overwrite?", output.display()))
        .default(false)
        .interact()
        .unwrap_or(false)
}

/// Copy the modification time of `from` onto `to`.
pub fn copy_mtime(from: &Path, to: &Path) -> io::Result<()> {
    let metadata = fs::metadata(from)?;
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_mtime(to, mtime)
}

/// Size reduction as a percentage (negative when the output grew).
pub fn space_savings(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}
