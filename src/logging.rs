// Copyright (C) Brian G. Milnes 2025

//! Run logging for rename-global
//!
//! When enabled, every line a run prints (and every rename site, even when
//! not printed) is also written to:
//! - <root>/<tool-name>/<YYYY-MM-DD>/run-<HH-MM-SS>.log
//!
//! `root` is `logs` in the working directory unless overridden.

pub mod logging {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use chrono::{Local, DateTime};
    use anyhow::Result;

    pub const DEFAULT_LOG_ROOT: &str = "logs";

    /// Mirrors run output into a log file
    pub struct ToolLogger {
        log_file: Option<fs::File>,
        log_path: Option<PathBuf>,
        /// Suppress stdout (JSON mode); stderr and the log file are unaffected
        quiet: bool,
        start_time: DateTime<Local>,
    }

    impl ToolLogger {
        /// A logger that only prints
        pub fn new_disabled(quiet: bool) -> Self {
            ToolLogger {
                log_file: None,
                log_path: None,
                quiet,
                start_time: Local::now(),
            }
        }

        /// A logger writing under `root`
        ///
        /// If the log file cannot be created the run continues without it.
        pub fn new(root: &Path, tool_name: &str, quiet: bool) -> Self {
            let start_time = Local::now();

            let (log_file, log_path) = match Self::create_log_file(root, tool_name, &start_time) {
                Ok((file, path)) => (Some(file), Some(path)),
                Err(e) => {
                    eprintln!("Warning: Could not create log file: {e}");
                    eprintln!("Continuing without logging...");
                    (None, None)
                }
            };

            ToolLogger {
                log_file,
                log_path,
                quiet,
                start_time,
            }
        }

        fn create_log_file(root: &Path, tool_name: &str, start_time: &DateTime<Local>) -> Result<(fs::File, PathBuf)> {
            let date_str = start_time.format("%Y-%m-%d").to_string();
            let time_str = start_time.format("%H-%M-%S").to_string();

            let log_dir = root.join(tool_name).join(&date_str);
            fs::create_dir_all(&log_dir)?;

            let log_path = log_dir.join(format!("run-{time_str}.log"));
            let log_file = fs::File::create(&log_path)?;

            Ok((log_file, log_path))
        }

        /// Print to stdout (unless quiet) and the log file
        pub fn log(&mut self, message: &str) {
            if !self.quiet {
                println!("{message}");
            }
            self.log_silent(message);
        }

        /// Print to stderr and the log file
        pub fn error(&mut self, message: &str) {
            eprintln!("{message}");
            self.log_silent(&format!("error: {message}"));
        }

        /// Log file only
        pub fn log_silent(&mut self, message: &str) {
            if let Some(ref mut file) = self.log_file {
                let _ = writeln!(file, "{message}");
            }
        }

        pub fn log_path(&self) -> Option<&Path> {
            self.log_path.as_deref()
        }

        /// Close the log with timing information
        pub fn finalize(&mut self, summary: &str) {
            let end_time = Local::now();
            let duration = end_time.signed_duration_since(self.start_time);

            self.log_silent("");
            self.log_silent("=== Run Summary ===");
            self.log_silent(summary);
            self.log_silent(&format!("Started: {}", self.start_time.format("%Y-%m-%d %H:%M:%S")));
            self.log_silent(&format!("Ended: {}", end_time.format("%Y-%m-%d %H:%M:%S")));
            self.log_silent(&format!("Duration: {}ms", duration.num_milliseconds()));

            if let Some(path) = self.log_path.clone() {
                self.log(&format!("Log saved to: {}", path.display()));
            }
        }
    }

    impl Drop for ToolLogger {
        fn drop(&mut self) {
            if let Some(ref mut file) = self.log_file {
                let _ = file.flush();
            }
        }
    }
}
