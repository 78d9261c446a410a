// Copyright (C) Brian G. Milnes 2025

//! Renaming one file: parse, rename, rewrite if anything changed

pub mod fixer {
    use std::fs::File;
    use std::io::BufWriter;
    use std::path::{Path, PathBuf};

    use serde::Serialize;

    use crate::changes::changes::ChangeRecorder;
    use crate::config::config::Config;
    use crate::error::error::RenameError;
    use crate::naming::naming::NameTransformer;
    use crate::parser::parser::SyntaxUnit;
    use crate::visitor::visitor::{RenameSite, RenameVisitor};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "snake_case")]
    pub enum FileStatus {
        /// No identifier changed; the file was not opened for writing.
        Unchanged,
        /// The file was overwritten with the renamed tree.
        Rewritten,
        /// Dry run: the file would have been overwritten.
        WouldRewrite,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct FileOutcome {
        pub path: PathBuf,
        pub status: FileStatus,
        pub renamed: Vec<RenameSite>,
        pub skipped: Vec<RenameSite>,
    }

    /// Rename every identifier of one file according to `config`.
    ///
    /// Auto-mode pairs go into `recorder`. The file is truncated before the
    /// tree is reprinted into it, so a failure part way through the write can
    /// leave it short or empty.
    pub fn fix_file(
        path: &Path,
        config: &Config,
        transformer: &NameTransformer,
        recorder: &ChangeRecorder,
    ) -> Result<FileOutcome, RenameError> {
        let unit = SyntaxUnit::read(path)?;
        fix_unit(unit, config, transformer, recorder)
    }

    /// Rename an already parsed unit and write it back to its path.
    pub fn fix_unit(
        mut unit: SyntaxUnit,
        config: &Config,
        transformer: &NameTransformer,
        recorder: &ChangeRecorder,
    ) -> Result<FileOutcome, RenameError> {
        let mut visitor = RenameVisitor::new(transformer);
        if config.is_auto() {
            visitor = visitor.with_recorder(recorder);
        }
        visitor.visit(&mut unit);

        let status = if !unit.is_dirty() {
            FileStatus::Unchanged
        } else if config.dry_run {
            FileStatus::WouldRewrite
        } else {
            write_unit(&unit)?;
            FileStatus::Rewritten
        };

        Ok(FileOutcome {
            path: unit.path().to_path_buf(),
            status,
            renamed: visitor.renamed,
            skipped: visitor.skipped,
        })
    }

    /// Overwrite the unit's file with its reprinted tree.
    fn write_unit(unit: &SyntaxUnit) -> Result<(), RenameError> {
        let to_write_error = |source| RenameError::Write {
            path: unit.path().to_path_buf(),
            source,
        };
        let file = File::create(unit.path()).map_err(to_write_error)?;
        let mut writer = BufWriter::new(file);
        unit.write_to(&mut writer).map_err(to_write_error)
    }
}
