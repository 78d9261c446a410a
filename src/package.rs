// Copyright (C) Brian G. Milnes 2025

//! Cargo package resolution and per-package renaming
//!
//! A package is a directory holding a Cargo.toml. Its files are:
//! - src/**/*.rs     (primary sources)
//! - tests/**/*.rs   (test sources)
//! - benches/**/*.rs (external test sources)
//!
//! Patterns ending in `/...` expand to every package below the prefix.

pub mod package {
    use std::collections::HashSet;
    use std::path::{Path, PathBuf};

    use rayon::prelude::*;
    use walkdir::{DirEntry, WalkDir};

    use crate::changes::changes::ChangeRecorder;
    use crate::config::config::Config;
    use crate::error::error::RenameError;
    use crate::fixer::fixer::{fix_file, FileOutcome};
    use crate::naming::naming::NameTransformer;

    const MANIFEST: &str = "Cargo.toml";
    const WILDCARD: &str = "...";

    /// A resolved package: its location, directory and file lists.
    ///
    /// File names are relative to `dir` and sorted.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Package {
        pub location: String,
        pub dir: PathBuf,
        pub src_files: Vec<String>,
        pub test_files: Vec<String>,
        pub bench_files: Vec<String>,
    }

    impl Package {
        /// All files, primary then test then external test, joined to `dir`.
        pub fn all_files(&self) -> Vec<PathBuf> {
            self.src_files
                .iter()
                .chain(&self.test_files)
                .chain(&self.bench_files)
                .map(|name| self.dir.join(name))
                .collect()
        }
    }

    /// Outcome of renaming one package.
    #[derive(Debug, Default)]
    pub struct PackageOutcome {
        pub files: Vec<FileOutcome>,
        pub errors: Vec<RenameError>,
    }

    /// Skip build output and hidden directories during walks.
    fn is_walkable(entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        !(entry.file_type().is_dir() && (name == "target" || name.starts_with('.')))
    }

    /// Package locations expanded from command-line patterns.
    #[derive(Debug, Default)]
    pub struct Expansion {
        pub locations: Vec<String>,
        /// One per wildcard that matched nothing.
        pub warnings: Vec<String>,
        /// Directories a wildcard walk could not read.
        pub errors: Vec<RenameError>,
    }

    /// Expand command-line patterns into package locations.
    ///
    /// No patterns means the current directory.
    pub fn expand_patterns(patterns: &[String]) -> Expansion {
        if patterns.is_empty() {
            return Expansion {
                locations: vec![".".to_string()],
                ..Expansion::default()
            };
        }

        let mut seen = HashSet::new();
        let mut expansion = Expansion::default();

        for pattern in patterns {
            let expanded = match wildcard_root(pattern) {
                Some(root) => {
                    let (found, errors) = find_packages(pattern, &root);
                    if found.is_empty() && errors.is_empty() {
                        expansion.warnings.push(format!("warning: \"{pattern}\" matched no packages"));
                    }
                    expansion.errors.extend(errors);
                    found
                }
                None => vec![pattern.clone()],
            };
            for location in expanded {
                if seen.insert(location.clone()) {
                    expansion.locations.push(location);
                }
            }
        }

        expansion
    }

    /// The directory a `/...` pattern walks from, or None for a literal pattern.
    fn wildcard_root(pattern: &str) -> Option<PathBuf> {
        if pattern == WILDCARD {
            return Some(PathBuf::from("."));
        }
        let prefix = pattern.strip_suffix(WILDCARD)?;
        let prefix = prefix.strip_suffix('/')?;
        Some(PathBuf::from(if prefix.is_empty() { "/" } else { prefix }))
    }

    /// Every directory at or below `root` holding a Cargo.toml, sorted,
    /// plus an error for each entry the walk could not read.
    fn find_packages(pattern: &str, root: &Path) -> (Vec<String>, Vec<RenameError>) {
        let mut found = Vec::new();
        let mut errors = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name().into_iter().filter_entry(is_walkable) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    errors.push(RenameError::Resolve {
                        location: pattern.to_string(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            if entry.file_type().is_file() && entry.file_name() == MANIFEST {
                if let Some(dir) = entry.path().parent() {
                    found.push(dir.display().to_string());
                }
            }
        }

        found.sort();
        (found, errors)
    }

    /// Resolve a package location into its directory and file lists.
    pub fn resolve_package(location: &str) -> Result<Package, RenameError> {
        let dir = PathBuf::from(location);
        let resolve_error = |reason: String| RenameError::Resolve {
            location: location.to_string(),
            reason,
        };

        if !dir.is_dir() {
            return Err(resolve_error("no such directory".to_string()));
        }
        if !dir.join(MANIFEST).is_file() {
            return Err(resolve_error(format!("no {MANIFEST} in {}", dir.display())));
        }

        Ok(Package {
            location: location.to_string(),
            src_files: rust_files_under(&dir, "src").map_err(resolve_error)?,
            test_files: rust_files_under(&dir, "tests").map_err(resolve_error)?,
            bench_files: rust_files_under(&dir, "benches").map_err(resolve_error)?,
            dir,
        })
    }

    /// `.rs` files under `dir/sub`, relative to `dir`, sorted. A missing `sub` is empty.
    fn rust_files_under(dir: &Path, sub: &str) -> Result<Vec<String>, String> {
        let root = dir.join(sub);
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&root).into_iter().filter_entry(is_walkable) {
            let entry = entry.map_err(|e| e.to_string())?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "rs") {
                if let Ok(rel) = path.strip_prefix(dir) {
                    files.push(rel.to_string_lossy().into_owned());
                }
            }
        }
        files.sort();
        Ok(files)
    }

    /// Rename every file of the package at `location`, one task per file.
    ///
    /// Tasks run on the rayon pool, so at most one file per worker thread is
    /// in flight (`--jobs` sizes the pool). A failing file does not stop its
    /// siblings and nothing is cancelled; all failures are returned.
    pub fn rename_in_package(
        location: &str,
        config: &Config,
        transformer: &NameTransformer,
        recorder: &ChangeRecorder,
    ) -> PackageOutcome {
        let package = match resolve_package(location) {
            Ok(package) => package,
            Err(e) => {
                return PackageOutcome {
                    files: Vec::new(),
                    errors: vec![e],
                }
            }
        };

        let results: Vec<Result<FileOutcome, RenameError>> = package
            .all_files()
            .par_iter()
            .map(|path| fix_file(path, config, transformer, recorder))
            .collect();

        let mut outcome = PackageOutcome::default();
        for result in results {
            match result {
                Ok(file) => outcome.files.push(file),
                Err(e) => outcome.errors.push(e),
            }
        }
        outcome
    }

}
