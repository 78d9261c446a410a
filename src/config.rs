// Copyright (C) Brian G. Milnes 2025

//! Run configuration
//!
//! Built once from the command line and passed by reference to every worker.

pub mod config {
    use thiserror::Error;

    use crate::ast_utils::ast_utils::is_identifier;
    use crate::naming::naming::NameTransformer;

    /// Which renaming policy a run uses. Exactly one is active.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Mode {
        Exact { from: String, to: String },
        Auto,
    }

    #[derive(Error, Debug, PartialEq, Eq)]
    pub enum ConfigError {
        #[error("--auto cannot be combined with --from/--to")]
        AutoWithExact,
        #[error("both --from and --to are required unless --auto is given")]
        MissingExact,
        #[error("--to {0:?} is not a valid Rust identifier")]
        InvalidTarget(String),
        #[error("--jobs must be at least 1")]
        ZeroJobs,
    }

    /// Immutable settings for one run.
    #[derive(Debug, Clone)]
    pub struct Config {
        pub mode: Mode,
        /// Walk and report, but never write a file.
        pub dry_run: bool,
        /// Print each rename site.
        pub verbose: bool,
        /// Print the run report as JSON.
        pub json: bool,
        /// Worker threads; None means one per CPU.
        pub jobs: Option<usize>,
        /// Mirror output into a run log under logs/.
        pub log: bool,
    }

    impl Config {
        /// Validate the mode selection.
        ///
        /// Auto mode excludes `from`/`to`; without auto both must be non-empty.
        pub fn from_args(auto: bool, from: Option<&str>, to: Option<&str>) -> Result<Self, ConfigError> {
            let from = from.unwrap_or("");
            let to = to.unwrap_or("");

            let mode = if auto {
                if !from.is_empty() || !to.is_empty() {
                    return Err(ConfigError::AutoWithExact);
                }
                Mode::Auto
            } else {
                if from.is_empty() || to.is_empty() {
                    return Err(ConfigError::MissingExact);
                }
                if !is_identifier(to) {
                    return Err(ConfigError::InvalidTarget(to.to_string()));
                }
                Mode::Exact {
                    from: from.to_string(),
                    to: to.to_string(),
                }
            };

            Ok(Config {
                mode,
                dry_run: false,
                verbose: false,
                json: false,
                jobs: None,
                log: false,
            })
        }

        pub fn with_jobs(mut self, jobs: Option<usize>) -> Result<Self, ConfigError> {
            if jobs == Some(0) {
                return Err(ConfigError::ZeroJobs);
            }
            self.jobs = jobs;
            Ok(self)
        }

        pub fn is_auto(&self) -> bool {
            self.mode == Mode::Auto
        }

        /// The name transformer for this run's mode.
        pub fn transformer(&self) -> NameTransformer {
            match &self.mode {
                Mode::Exact { from, to } => NameTransformer::Exact {
                    from: from.clone(),
                    to: to.clone(),
                },
                Mode::Auto => NameTransformer::Lint,
            }
        }
    }

}
