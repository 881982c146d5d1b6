//! Parse result types containing extracted elements.

use serde::{Deserialize, Serialize};

use super::element::{CodeElement, ElementKind};

/// Result of parsing a source file.
///
/// `file_path` is whatever the caller supplied; callers that parse a copy
/// of a remote file are free to overwrite it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// File path that was parsed.
    pub file_path: String,

    /// Extracted elements, in recognizer order.
    pub elements: Vec<CodeElement>,
}

impl ParseResult {
    /// Create a result for the given file.
    pub fn new(file_path: impl Into<String>, elements: Vec<CodeElement>) -> Self {
        Self {
            file_path: file_path.into(),
            elements,
        }
    }

    /// True when nothing was found; there is nothing to document.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements of a single kind, in order.
    pub fn of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &CodeElement> {
        self.elements.iter().filter(move |e| e.kind == kind)
    }

    /// Find the first element with the given name.
    pub fn find(&self, name: &str) -> Option<&CodeElement> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// Get statistics about the parse result.
    pub fn stats(&self) -> ParseStats {
        let mut stats = ParseStats::default();

        for element in &self.elements {
            match element.kind {
                ElementKind::Function => stats.functions += 1,
                ElementKind::Class => stats.classes += 1,
                ElementKind::Interface => stats.interfaces += 1,
                ElementKind::Type => stats.types += 1,
                ElementKind::Route => stats.routes += 1,
                ElementKind::Export => stats.exports += 1,
            }
        }

        stats
    }
}

/// Per-kind element counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    pub functions: usize,
    pub classes: usize,
    pub interfaces: usize,
    pub types: usize,
    pub routes: usize,
    pub exports: usize,
}

impl ParseStats {
    pub fn total(&self) -> usize {
        self.functions + self.classes + self.interfaces + self.types + self.routes + self.exports
    }
}

impl std::fmt::Display for ParseStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} functions, {} classes, {} interfaces, {} types, {} routes",
            self.functions, self.classes, self.interfaces, self.types, self.routes
        )?;
        if self.exports > 0 {
            write!(f, ", {} exports", self.exports)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counts_each_kind() {
        let result = ParseResult::new(
            "app.ts",
            vec![
                CodeElement::function("a", 1),
                CodeElement::function("b", 2),
                CodeElement::new(ElementKind::Route, "GET /", 3),
                CodeElement::new(ElementKind::Class, "App", 4),
            ],
        );

        let stats = result.stats();
        assert_eq!(stats.functions, 2);
        assert_eq!(stats.routes, 1);
        assert_eq!(stats.classes, 1);
        assert_eq!(stats.total(), 4);
        assert_eq!(
            stats.to_string(),
            "2 functions, 1 classes, 0 interfaces, 0 types, 1 routes"
        );
    }

    #[test]
    fn test_empty_result() {
        let result = ParseResult::new("empty.py", Vec::new());
        assert!(result.is_empty());
        assert_eq!(result.stats().total(), 0);
    }
}
