//! Extracted code element types.

use serde::{Deserialize, Serialize};

/// Kind of structural element recovered from a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Function,
    Class,
    Interface,
    Type,
    /// Synthetic HTTP route registration (`GET /users`).
    Route,
    /// `module.exports = Name` fallback for modules with no declarations.
    Export,
}

impl ElementKind {
    /// Lowercase name used in prompts and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Type => "type",
            Self::Route => "route",
            Self::Export => "export",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structural unit found in a source file.
///
/// `line` is 1-based and points at the line where the match that produced
/// the element starts, which may precede the identifier itself when a
/// pattern consumes leading modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub name: String,
    pub line: u32,
}

impl CodeElement {
    pub fn new(kind: ElementKind, name: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            name: name.into(),
            line,
        }
    }

    pub fn function(name: impl Into<String>, line: u32) -> Self {
        Self::new(ElementKind::Function, name, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_kind_as_type() {
        let element = CodeElement::new(ElementKind::Route, "GET /users", 4);
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "route");
        assert_eq!(json["name"], "GET /users");
        assert_eq!(json["line"], 4);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ElementKind::Interface.to_string(), "interface");
        assert_eq!(ElementKind::Export.as_str(), "export");
    }
}
