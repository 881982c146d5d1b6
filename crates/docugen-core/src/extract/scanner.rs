//! Shared pass machinery for the recognizers.

use std::collections::HashSet;

use regex::Regex;
use tracing::error;

use super::element::{CodeElement, ElementKind};

/// Compile a table of built-in patterns, dropping any that fail to compile.
pub(crate) fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().filter_map(|p| compile(p)).collect()
}

/// Compile one built-in pattern.
pub(crate) fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            error!(pattern, error = %e, "invalid extraction pattern");
            None
        }
    }
}

/// Maps byte offsets to 1-based line numbers.
///
/// Equivalent to counting `\n` characters before the offset, but computed
/// once per file instead of once per match.
pub(crate) struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(content: &str) -> Self {
        Self {
            newlines: content
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i)
                .collect(),
        }
    }

    /// Line containing `offset`: one plus the newlines strictly before it.
    pub(crate) fn line_at(&self, offset: usize) -> u32 {
        (self.newlines.partition_point(|&nl| nl < offset) + 1) as u32
    }
}

/// One pass of one pattern over a file.
///
/// Owns nothing beyond borrowed input; the regex cursor lives and dies
/// inside each call.
pub(crate) struct Pass<'c> {
    content: &'c str,
    lines: LineIndex,
}

impl<'c> Pass<'c> {
    pub(crate) fn new(content: &'c str) -> Self {
        Self {
            content,
            lines: LineIndex::new(content),
        }
    }

    /// `(name, line)` for every match, where name is capture group 1.
    pub(crate) fn names(&self, regex: &Regex) -> Vec<(&'c str, u32)> {
        regex
            .captures_iter(self.content)
            .filter_map(|cap| {
                let start = cap.get(0)?.start();
                let name = cap.get(1)?.as_str();
                Some((name, self.lines.line_at(start)))
            })
            .collect()
    }

    /// Raw captures with the line of each match start.
    pub(crate) fn captures(&self, regex: &Regex) -> Vec<(regex::Captures<'c>, u32)> {
        regex
            .captures_iter(self.content)
            .filter_map(|cap| {
                let start = cap.get(0)?.start();
                Some((cap, self.lines.line_at(start)))
            })
            .collect()
    }

    /// Emit every match as an element of `kind`, repeats included.
    pub(crate) fn collect(&self, regex: &Regex, kind: ElementKind, out: &mut Vec<CodeElement>) {
        for (name, line) in self.names(regex) {
            out.push(CodeElement::new(kind, name, line));
        }
    }

    /// Emit the first occurrence of each name, skipping `ignored` names and
    /// anything already in `seen`.
    pub(crate) fn collect_unique(
        &self,
        regex: &Regex,
        kind: ElementKind,
        seen: &mut HashSet<&'c str>,
        ignored: &[&str],
        out: &mut Vec<CodeElement>,
    ) {
        for (name, line) in self.names(regex) {
            if ignored.contains(&name) || !seen.insert(name) {
                continue;
            }
            out.push(CodeElement::new(kind, name, line));
        }
    }
}
