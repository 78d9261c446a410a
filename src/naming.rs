// Copyright (C) Brian G. Milnes 2025

//! Identifier name transformations
//!
//! Two policies:
//! - exact: replace a name that is literally equal to `from` with `to`
//! - lint: rewrite underscore and mixed-case names into camel case, keeping
//!   common initialisms (ID, URL, HTTP, ...) in their canonical casing
//!
//! Both are pure and total; neither can fail.

pub mod naming {
    /// Initialisms kept upper case (or lower case when they start a lowerCamel name).
    pub const COMMON_INITIALISMS: &[&str] = &[
        "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS",
        "ID", "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP",
        "SQL", "SSH", "TCP", "TLS", "TTL", "UDP", "UI", "UID", "UUID", "URI",
        "URL", "UTF8", "VM", "XML", "XSRF", "XSS",
    ];

    /// Look up the canonical form of a word's upper-cased spelling.
    pub fn common_initialism(upper: &str) -> Option<&'static str> {
        COMMON_INITIALISMS.iter().copied().find(|acronym| *acronym == upper)
    }

    /// The renaming policy applied to every identifier.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NameTransformer {
        /// Replace names exactly equal to `from` with `to`.
        Exact { from: String, to: String },
        /// Normalize names with [`lint_name`].
        Lint,
    }

    impl NameTransformer {
        /// Compute the replacement for `name`; returns `name` itself when nothing changes.
        pub fn transform(&self, name: &str) -> String {
            match self {
                NameTransformer::Exact { from, to } => {
                    if name == from {
                        to.clone()
                    } else {
                        name.to_string()
                    }
                }
                NameTransformer::Lint => {
                    // r#type stays raw; only the bare name is normalized
                    match name.strip_prefix("r#") {
                        Some(bare) => format!("r#{}", lint_name(bare)),
                        None => lint_name(name),
                    }
                }
            }
        }

        pub fn is_lint(&self) -> bool {
            matches!(self, NameTransformer::Lint)
        }
    }

    /// Decimal digit in any script. Letter numerals (Ⅻ) are alphabetic and do not count.
    fn is_digit(c: char) -> bool {
        c.is_numeric() && !c.is_alphabetic()
    }

    /// Normalize an identifier into camel case with canonical initialisms.
    ///
    /// Words are split at every lower-to-non-lower transition and at runs of
    /// underscores. Underscore runs are dropped, except that one underscore
    /// survives between two digits (`v1_2`). Each word whose upper-cased form
    /// is a common initialism is replaced by it (lower-cased if it is the first
    /// word and the name started lower case); any other all-lowercase word
    /// after the first gets its first character upper-cased.
    ///
    /// ```
    /// use rename_global::lint_name;
    /// assert_eq!(lint_name("person_id"), "personID");
    /// assert_eq!(lint_name("IpAddress"), "IPAddress");
    /// ```
    pub fn lint_name(name: &str) -> String {
        if name == "_" || name.chars().all(char::is_lowercase) {
            return name.to_string();
        }

        let mut runes: Vec<char> = name.chars().collect();
        let mut w = 0; // start of the current word
        let mut i = 0;
        while i < runes.len() {
            let mut end_of_word = false;
            if i + 1 == runes.len() {
                end_of_word = true;
            } else if runes[i + 1] == '_' {
                end_of_word = true;
                let mut n = 1;
                while i + n + 1 < runes.len() && runes[i + n + 1] == '_' {
                    n += 1;
                }
                if i + n + 1 < runes.len() && is_digit(runes[i]) && is_digit(runes[i + n + 1]) {
                    n -= 1;
                }
                runes.drain(i + 1..i + 1 + n);
            } else if runes[i].is_lowercase() && !runes[i + 1].is_lowercase() {
                end_of_word = true;
            }
            i += 1;
            if !end_of_word {
                continue;
            }

            // [w, i) is a word
            let word: String = runes[w..i].iter().collect();
            if let Some(acronym) = common_initialism(&word.to_uppercase()) {
                let canonical = if w == 0 && runes[w].is_lowercase() {
                    acronym.to_lowercase()
                } else {
                    acronym.to_string()
                };
                let replacement: Vec<char> = canonical.chars().collect();
                let len = replacement.len();
                runes.splice(w..i, replacement);
                i = w + len;
            } else if w > 0 && word.to_lowercase() == word {
                let upper: Vec<char> = runes[w].to_uppercase().collect();
                let len = upper.len();
                runes.splice(w..w + 1, upper);
                i += len - 1;
            }
            w = i;
        }
        runes.into_iter().collect()
    }

}
