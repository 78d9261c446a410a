// Copyright (C) Brian G. Milnes 2025

//! Tool runner wrapper
//!
//! Handles the parts every run shares:
//! - "Entering directory" context for Emacs compile-mode
//! - timing
//! - optional run log

pub mod tool_runner {
    use std::path::PathBuf;
    use std::time::Instant;
    use anyhow::Result;
    use crate::logging::logging::{ToolLogger, DEFAULT_LOG_ROOT};

    pub struct ToolConfig {
        /// Name of the tool (log directory)
        pub tool_name: String,
        /// Directory shown in "Entering directory"
        pub base_dir: PathBuf,
        pub enable_logging: bool,
        pub log_root: PathBuf,
        /// Suppress stdout chatter (JSON output)
        pub quiet: bool,
    }

    impl ToolConfig {
        pub fn new(tool_name: &str, base_dir: PathBuf) -> Self {
            ToolConfig {
                tool_name: tool_name.to_string(),
                base_dir,
                enable_logging: false,
                log_root: PathBuf::from(DEFAULT_LOG_ROOT),
                quiet: false,
            }
        }
    }

    /// What a tool run hands back to the runner
    pub struct ToolReport {
        pub summary: String,
        pub success: bool,
    }

    /// Run a tool with directory context, timing and optional logging
    ///
    /// Returns whether the tool reported success.
    pub fn run_tool<F>(config: ToolConfig, tool_fn: F) -> Result<bool>
    where
        F: FnOnce(&mut ToolLogger) -> Result<ToolReport>,
    {
        let start = Instant::now();

        let mut logger = if config.enable_logging {
            ToolLogger::new(&config.log_root, &config.tool_name, config.quiet)
        } else {
            ToolLogger::new_disabled(config.quiet)
        };

        logger.log(&format!("Entering directory '{}'", config.base_dir.display()));
        logger.log("");

        let report = tool_fn(&mut logger)?;

        logger.log("");
        logger.log(&report.summary);
        logger.log(&format!("Completed in {}ms", start.elapsed().as_millis()));

        if config.enable_logging {
            logger.finalize(&report.summary);
        }

        Ok(report.success)
    }
}
