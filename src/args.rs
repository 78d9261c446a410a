// Copyright (C) Brian G. Milnes 2025

//! Command-line arguments for rename-global

pub mod args {
    use std::path::PathBuf;

    use clap::Parser;

    use crate::config::config::{Config, ConfigError};

    pub const USAGE: &str = "rename-global [--from <name> --to <name>] [--auto] [package...]";

    #[derive(Parser, Debug)]
    #[command(name = "rename-global")]
    #[command(about = "Rename identifiers across Cargo packages", long_about = None)]
    #[command(override_usage = USAGE)]
    pub struct RenameArgs {
        /// The current name
        #[arg(long)]
        pub from: Option<String>,

        /// The new name
        #[arg(long)]
        pub to: Option<String>,

        /// Rewrite every underscore or mis-cased identifier into camel case with canonical initialisms
        #[arg(long)]
        pub auto: bool,

        /// Show what would be renamed without modifying files
        #[arg(short = 'n', long)]
        pub dry_run: bool,

        /// Print every rename site
        #[arg(short, long)]
        pub verbose: bool,

        /// Print the run report as JSON
        #[arg(long)]
        pub json: bool,

        /// Number of worker threads (default: one per CPU)
        #[arg(short, long)]
        pub jobs: Option<usize>,

        /// Write a run log under logs/rename-global/
        #[arg(long)]
        pub log: bool,

        /// Package directories; a trailing `/...` matches every package below
        pub packages: Vec<String>,
    }

    impl RenameArgs {
        /// Validate into the run configuration.
        pub fn to_config(&self) -> Result<Config, ConfigError> {
            let mut config = Config::from_args(self.auto, self.from.as_deref(), self.to.as_deref())?
                .with_jobs(self.jobs)?;
            config.dry_run = self.dry_run;
            config.verbose = self.verbose;
            config.json = self.json;
            config.log = self.log;
            Ok(config)
        }

        /// Directory paths in the report are shown relative to.
        pub fn base_dir(&self) -> PathBuf {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        }
    }

    /// Format a count with thousands separators (1234567 -> "1,234,567").
    pub fn format_number(n: usize) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

}
