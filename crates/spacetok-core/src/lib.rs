//! Spacing token substituter
//!
//! Rewrites literal spacing values in a stylesheet (`1rem`, `0.5rem`) into
//! design token references (`var(--space-4)`). The stylesheet is treated as
//! flat text: no CSS is parsed.
//!
//! ```text
//! source text → substitute(table) → text with var(--space-N) references
//! ```
//!
//! # Example
//!
//! ```
//! use spacetok_core::{substitute, SPACING_SCALE};
//!
//! let css = substitute("margin: -1rem;", SPACING_SCALE);
//! assert_eq!(css, "margin: -var(--space-4);");
//! ```

pub mod file;
pub mod replace;
pub mod table;

pub use file::{preview_file, rewrite_file, FileError};
pub use replace::{Pass, Replacer};
pub use table::{Mapping, SPACING_SCALE};

/// Stylesheet rewritten when no path is given.
pub const DEFAULT_TARGET: &str = "layout/spacing.css";

/// Replacement counts for one table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryReport {
    pub literal: &'static str,
    pub token: &'static str,
    /// Bare occurrences replaced.
    pub replaced: usize,
    /// Minus-prefixed occurrences replaced.
    pub negated: usize,
}

/// The rewritten text and what happened to each table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub content: String,
    pub entries: Vec<EntryReport>,
}

impl Substitution {
    /// Total number of replacements across all entries.
    pub fn replacements(&self) -> usize {
        self.entries.iter().map(|e| e.replaced + e.negated).sum()
    }

    pub fn is_unchanged(&self) -> bool {
        self.replacements() == 0
    }
}

/// Replace mapped literals in `content` with their token references.
pub fn substitute(content: &str, table: &[Mapping]) -> String {
    substitute_with_report(content, table).content
}

/// Like [`substitute`], also reporting per-entry replacement counts.
///
/// Entries are applied one at a time in table order, each seeing the text
/// produced by the entries before it.
pub fn substitute_with_report(content: &str, table: &[Mapping]) -> Substitution {
    let mut content = content.to_string();
    let mut entries = Vec::with_capacity(table.len());

    for mapping in table {
        let (bounded, replaced) = Replacer::replace(
            &content,
            mapping.literal,
            &mapping.reference(),
            Pass::Bounded,
        );
        content = bounded;

        let mut negated = 0;
        if !mapping.is_zero() {
            let needle = format!("-{}", mapping.literal);
            let (rewritten, count) = Replacer::replace(
                &content,
                &needle,
                &mapping.negated_reference(),
                Pass::Negated,
            );
            content = rewritten;
            negated = count;
        }

        entries.push(EntryReport {
            literal: mapping.literal,
            token: mapping.token,
            replaced,
            negated,
        });
    }

    Substitution { content, entries }
}
