// Copyright (C) Brian G. Milnes 2025

//! Running a rename over many packages and reporting the result
//!
//! One task per package, one task per file inside it. Nothing is cancelled
//! when a sibling fails; the report is built only after every task joined.

pub mod orchestrator {
    use std::path::Path;

    use rayon::prelude::*;
    use serde::Serialize;

    use crate::args::args::format_number;
    use crate::changes::changes::ChangeRecorder;
    use crate::config::config::Config;
    use crate::error::error::RenameError;
    use crate::fixer::fixer::{FileOutcome, FileStatus};
    use crate::package::package::{rename_in_package, PackageOutcome};

    /// A failure as it appears in the report.
    #[derive(Debug, Clone, Serialize)]
    pub struct Failure {
        pub kind: &'static str,
        pub message: String,
    }

    impl From<&RenameError> for Failure {
        fn from(e: &RenameError) -> Self {
            Failure {
                kind: e.kind(),
                message: e.to_string(),
            }
        }
    }

    /// One changed identifier pair.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct Change {
        pub old: String,
        pub new: String,
    }

    #[derive(Debug, Default, Serialize)]
    pub struct RunReport {
        pub packages: usize,
        pub files_checked: usize,
        pub files: Vec<FileOutcome>,
        pub failures: Vec<Failure>,
        /// Distinct pairs; filled in auto mode only.
        pub changes: Vec<Change>,
    }

    impl RunReport {
        pub fn is_success(&self) -> bool {
            self.failures.is_empty()
        }

        /// Add failures that happened outside the package tasks (pattern expansion).
        pub fn record_failures(&mut self, errors: &[RenameError]) {
            self.failures.extend(errors.iter().map(Failure::from));
        }

        pub fn files_with_status(&self, status: FileStatus) -> impl Iterator<Item = &FileOutcome> {
            self.files.iter().filter(move |f| f.status == status)
        }

        /// One-line summary in the tool's usual `Summary:` form.
        pub fn summary(&self, dry_run: bool) -> String {
            let (status, verb) = if dry_run {
                (FileStatus::WouldRewrite, "would be rewritten")
            } else {
                (FileStatus::Rewritten, "rewritten")
            };
            format!(
                "Summary: {} packages, {} files checked, {} files {}",
                format_number(self.packages),
                format_number(self.files_checked),
                format_number(self.files_with_status(status).count()),
                verb
            )
        }
    }

    /// Rename across every package location.
    pub fn run(config: &Config, locations: &[String]) -> RunReport {
        let transformer = config.transformer();
        let recorder = ChangeRecorder::new();

        let outcomes: Vec<PackageOutcome> = locations
            .par_iter()
            .map(|location| rename_in_package(location, config, &transformer, &recorder))
            .collect();

        let mut report = RunReport {
            packages: locations.len(),
            ..RunReport::default()
        };
        for outcome in outcomes {
            // Files that failed to parse or write were still checked
            let failed_files = outcome
                .errors
                .iter()
                .filter(|e| !matches!(e, RenameError::Resolve { .. }))
                .count();
            report.files_checked += outcome.files.len() + failed_files;
            report.failures.extend(outcome.errors.iter().map(Failure::from));
            report.files.extend(outcome.files);
        }

        if config.is_auto() {
            report.changes = recorder
                .pairs()
                .into_iter()
                .map(|(old, new)| Change { old, new })
                .collect();
        }
        report
    }

    /// The change list: a `Changed:` header then one `\told -> new` line per pair.
    pub fn change_lines(report: &RunReport) -> Vec<String> {
        if report.changes.is_empty() {
            return Vec::new();
        }
        let mut lines = vec!["Changed:".to_string()];
        for change in &report.changes {
            lines.push(format!("\t{} -> {}", change.old, change.new));
        }
        lines
    }

    /// One `path:line: old -> new` line per rename site, paths relative to `base_dir`.
    pub fn site_lines(report: &RunReport, base_dir: &Path) -> Vec<String> {
        let mut lines = Vec::new();
        for file in &report.files {
            let rel_path = file.path.strip_prefix(base_dir).unwrap_or(&file.path);
            for site in &file.renamed {
                lines.push(format!("{}:{}: {} -> {}", rel_path.display(), site.line, site.old, site.new));
            }
            for site in &file.skipped {
                lines.push(format!(
                    "{}:{}: skipped {} -> {} (not a valid identifier)",
                    rel_path.display(),
                    site.line,
                    site.old,
                    site.new
                ));
            }
        }
        lines
    }
}
