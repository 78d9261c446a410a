// Copyright (C) Brian G. Milnes 2025

//! Syntax tree helpers for identifier renaming
//!
//! Provides the token-level queries and constructors the walker needs

pub mod ast_utils {
    use ra_ap_syntax::{Edition, SourceFile, SyntaxKind, SyntaxNode, SyntaxToken, TextSize, WalkEvent, NodeOrToken};

    /// Edition used for every parse.
    pub const EDITION: Edition = Edition::Edition2021;

    /// Collect every IDENT token under `root` in preorder.
    ///
    /// Identifiers inside macro token trees are included.
    pub fn identifier_tokens(root: &SyntaxNode) -> Vec<SyntaxToken> {
        let mut results = Vec::new();

        for event in root.preorder_with_tokens() {
            if let WalkEvent::Enter(NodeOrToken::Token(token)) = event {
                if token.kind() == SyntaxKind::IDENT {
                    results.push(token);
                }
            }
        }

        results
    }

    /// Build a detached, mutable IDENT token with the given text.
    ///
    /// Returns None when `text` does not lex as a single identifier
    /// (keywords, empty strings, names with spaces).
    pub fn make_ident_token(text: &str) -> Option<SyntaxToken> {
        if text.is_empty() || text.trim() != text {
            return None;
        }
        let source = format!("fn {text}() {{}}");
        let parsed = SourceFile::parse(&source, EDITION);
        if !parsed.errors().is_empty() {
            return None;
        }

        let root = parsed.syntax_node().clone_for_update();
        let token = root
            .descendants_with_tokens()
            .filter_map(|element| element.into_token())
            .find(|token| token.kind() == SyntaxKind::IDENT)?;
        if token.text() != text {
            return None;
        }
        token.detach();
        Some(token)
    }

    /// True if `text` is a single Rust identifier token.
    pub fn is_identifier(text: &str) -> bool {
        make_ident_token(text).is_some()
    }

    /// Line number (1-indexed) of a byte offset in `source`.
    pub fn line_at(source: &str, offset: TextSize) -> usize {
        let offset: usize = offset.into();
        let offset = offset.min(source.len());
        source.as_bytes()[..offset].iter().filter(|b| **b == b'\n').count() + 1
    }

}
