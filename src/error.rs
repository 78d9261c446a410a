// Copyright (C) Brian G. Milnes 2025

//! Error types for package resolution and file rewriting
//!
//! Every failure is tied to the package or file it happened in so that the
//! orchestrator can print them all together after the run.

pub mod error {
    use std::io;
    use std::path::PathBuf;
    use thiserror::Error;

    /// A failure while renaming inside one package or one file.
    #[derive(Error, Debug)]
    pub enum RenameError {
        /// The package location could not be found or read.
        #[error("{location}: cannot resolve package: {reason}")]
        Resolve { location: String, reason: String },

        /// A file's content is not valid Rust syntax.
        #[error("{}:{line}: parse error: {message}", path.display())]
        Parse {
            path: PathBuf,
            line: usize,
            message: String,
        },

        /// A file could not be read.
        #[error("{}: cannot read: {source}", path.display())]
        Read {
            path: PathBuf,
            #[source]
            source: io::Error,
        },

        /// The rewritten file could not be created or fully written.
        #[error("{}: cannot write: {source}", path.display())]
        Write {
            path: PathBuf,
            #[source]
            source: io::Error,
        },
    }

    impl RenameError {
        /// Short tag used in logs and the JSON report.
        pub fn kind(&self) -> &'static str {
            match self {
                RenameError::Resolve { .. } => "resolve",
                RenameError::Parse { .. } => "parse",
                RenameError::Read { .. } => "read",
                RenameError::Write { .. } => "write",
            }
        }
    }
}
