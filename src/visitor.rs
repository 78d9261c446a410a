// Copyright (C) Brian G. Milnes 2025

//! Visitor that renames every identifier of a syntax unit

pub mod visitor {
    use serde::Serialize;

    use crate::ast_utils::ast_utils::line_at;
    use crate::changes::changes::ChangeRecorder;
    use crate::naming::naming::NameTransformer;
    use crate::parser::parser::SyntaxUnit;

    /// One identifier occurrence and what it was (or would have been) renamed to.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct RenameSite {
        pub line: usize,
        pub old: String,
        pub new: String,
    }

    /// Applies a name transformer to every identifier of a unit.
    ///
    /// Identifiers are matched by text only; two tokens with the same name are
    /// renamed the same way whatever they refer to.
    pub struct RenameVisitor<'a> {
        transformer: &'a NameTransformer,
        recorder: Option<&'a ChangeRecorder>,
        pub renamed: Vec<RenameSite>,
        /// Replacements that are not valid identifiers (e.g. a keyword).
        pub skipped: Vec<RenameSite>,
    }

    impl<'a> RenameVisitor<'a> {
        pub fn new(transformer: &'a NameTransformer) -> Self {
            RenameVisitor {
                transformer,
                recorder: None,
                renamed: Vec::new(),
                skipped: Vec::new(),
            }
        }

        /// Record every (old, new) pair produced into `recorder`.
        pub fn with_recorder(mut self, recorder: &'a ChangeRecorder) -> Self {
            self.recorder = Some(recorder);
            self
        }

        /// Visit every identifier of `unit` once, renaming in place.
        pub fn visit(&mut self, unit: &mut SyntaxUnit) {
            // Collect first: replacing tokens while walking would invalidate the
            // walk, and offsets shift once earlier tokens change length
            let tokens: Vec<_> = unit
                .identifiers()
                .into_iter()
                .map(|token| {
                    let line = line_at(unit.source(), token.text_range().start());
                    (token, line)
                })
                .collect();

            for (token, line) in tokens {
                let old = token.text().to_string();
                let new = self.transformer.transform(&old);
                if new == old {
                    continue;
                }

                let site = RenameSite { line, old, new };
                if unit.rename(&token, &site.new) {
                    if let Some(recorder) = self.recorder {
                        recorder.record(&site.old, &site.new);
                    }
                    self.renamed.push(site);
                } else {
                    self.skipped.push(site);
                }
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::path::Path;

        fn unit(source: &str) -> SyntaxUnit {
            SyntaxUnit::from_source(Path::new("test.rs"), source.to_string()).unwrap()
        }

        #[test]
        fn test_line_numbers_use_original_offsets() {
            let mut u = unit("fn person_id() {}\n\nfn user_url() {}\n");
            let mut visitor = RenameVisitor::new(&NameTransformer::Lint);
            visitor.visit(&mut u);
            let lines: Vec<usize> = visitor.renamed.iter().map(|s| s.line).collect();
            assert_eq!(lines, vec![1, 3]);
        }

        #[test]
        fn test_line_numbers_after_shortening_rename() {
            let mut u = unit("fn a_b_c_d_e() {}\nfn x_y() {}\n");
            let mut visitor = RenameVisitor::new(&NameTransformer::Lint);
            visitor.visit(&mut u);
            let sites: Vec<(&str, usize)> = visitor.renamed.iter().map(|s| (s.old.as_str(), s.line)).collect();
            assert_eq!(sites, vec![("a_b_c_d_e", 1), ("x_y", 2)]);
            assert_eq!(u.print(), "fn aBCDE() {}\nfn xY() {}\n");
        }

        #[test]
        fn test_keyword_replacement_is_skipped() {
            let mut u = unit("fn type_() {}\n");
            let mut visitor = RenameVisitor::new(&NameTransformer::Lint);
            visitor.visit(&mut u);
            assert!(visitor.renamed.is_empty());
            assert_eq!(visitor.skipped.len(), 1);
            assert_eq!(visitor.skipped[0].new, "type");
            assert!(!u.is_dirty());
            assert_eq!(u.print(), "fn type_() {}\n");
        }
    }
}
