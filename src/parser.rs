// Copyright (C) Brian G. Milnes 2025

//! Parsing Rust files into mutable syntax units
//!
//! A `SyntaxUnit` owns one file's lossless tree. Identifier tokens are
//! replaced in place and the tree's text is the reprinted file, so comments
//! and formatting that were not renamed come back unchanged.

pub mod parser {
    use std::fs;
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};

    use anyhow::Result;
    use ra_ap_syntax::{ted, AstNode, SourceFile, SyntaxNode, SyntaxToken};

    use crate::ast_utils::ast_utils::{identifier_tokens, line_at, make_ident_token, EDITION};
    use crate::error::error::RenameError;

    /// Parse Rust source text, failing on any syntax error.
    pub fn parse_file(source: &str) -> Result<SourceFile> {
        let parsed = SourceFile::parse(source, EDITION);

        if !parsed.errors().is_empty() {
            return Err(anyhow::anyhow!("Parse errors: {:?}", parsed.errors()));
        }

        Ok(parsed.tree())
    }

    /// One parsed file, mutable for a single renaming pass.
    ///
    /// The tree is built on the thread that processes the file and never leaves it.
    pub struct SyntaxUnit {
        path: PathBuf,
        source: String,
        root: SyntaxNode,
        dirty: bool,
    }

    impl SyntaxUnit {
        /// Read and parse the file at `path`.
        pub fn read(path: &Path) -> std::result::Result<Self, RenameError> {
            let source = fs::read_to_string(path).map_err(|source| RenameError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_source(path, source)
        }

        /// Parse `source` as the contents of `path`.
        pub fn from_source(path: &Path, source: String) -> std::result::Result<Self, RenameError> {
            let parsed = SourceFile::parse(&source, EDITION);
            if let Some(first) = parsed.errors().first() {
                return Err(RenameError::Parse {
                    path: path.to_path_buf(),
                    line: line_at(&source, first.range().start()),
                    message: first.to_string(),
                });
            }

            let root = parsed.tree().syntax().clone_for_update();
            Ok(SyntaxUnit {
                path: path.to_path_buf(),
                source,
                root,
                dirty: false,
            })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        /// The text the unit was parsed from.
        pub fn source(&self) -> &str {
            &self.source
        }

        pub fn root(&self) -> &SyntaxNode {
            &self.root
        }

        /// Every identifier token in the tree.
        pub fn identifiers(&self) -> Vec<SyntaxToken> {
            identifier_tokens(&self.root)
        }

        /// Replace the text of one identifier token.
        ///
        /// Returns false, leaving the tree untouched, when `new_name` is not a
        /// valid identifier token or equals the current text.
        pub fn rename(&mut self, token: &SyntaxToken, new_name: &str) -> bool {
            if token.text() == new_name {
                return false;
            }
            let Some(replacement) = make_ident_token(new_name) else {
                return false;
            };
            ted::replace(token.clone(), replacement);
            self.dirty = true;
            true
        }

        /// True once any identifier has been renamed.
        pub fn is_dirty(&self) -> bool {
            self.dirty
        }

        /// The current text of the tree.
        pub fn print(&self) -> String {
            self.root.to_string()
        }

        /// Reprint the tree into `writer`.
        pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
            writer.write_all(self.print().as_bytes())?;
            writer.flush()
        }
    }
}
