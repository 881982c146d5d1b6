//! Go recognizer.

use std::sync::LazyLock;

use regex::Regex;

use super::element::{CodeElement, ElementKind};
use super::language::Language;
use super::patterns::{
    GO_FUNCTION_PATTERN, GO_INTERFACE_PATTERN, GO_NON_ALIAS_PREFIXES, GO_STRUCT_PATTERN,
    GO_TYPE_PATTERN,
};
use super::scanner::{compile, Pass};
use super::traits::Recognizer;

static FUNC: LazyLock<Option<Regex>> = LazyLock::new(|| compile(GO_FUNCTION_PATTERN));
static STRUCT: LazyLock<Option<Regex>> = LazyLock::new(|| compile(GO_STRUCT_PATTERN));
static INTERFACE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(GO_INTERFACE_PATTERN));
static TYPE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(GO_TYPE_PATTERN));

/// Recognizer for `.go` files.
///
/// Structs are reported as `class` since there is no struct kind. Receiver
/// methods and free functions both come out as `function`.
pub struct GoRecognizer;

impl GoRecognizer {
    /// `type Name T` where `T` is neither a struct nor an interface.
    fn aliases(pass: &Pass<'_>, re: &Regex, out: &mut Vec<CodeElement>) {
        for (cap, line) in pass.captures(re) {
            let (Some(name), Some(target)) = (cap.get(1), cap.get(2)) else {
                continue;
            };
            let target = target.as_str();
            if GO_NON_ALIAS_PREFIXES.iter().any(|p| target.starts_with(p)) {
                continue;
            }
            out.push(CodeElement::new(ElementKind::Type, name.as_str(), line));
        }
    }
}

impl Recognizer for GoRecognizer {
    fn scan(&self, content: &str) -> Vec<CodeElement> {
        let pass = Pass::new(content);
        let mut elements = Vec::new();

        if let Some(re) = FUNC.as_ref() {
            pass.collect(re, ElementKind::Function, &mut elements);
        }
        if let Some(re) = STRUCT.as_ref() {
            pass.collect(re, ElementKind::Class, &mut elements);
        }
        if let Some(re) = INTERFACE.as_ref() {
            pass.collect(re, ElementKind::Interface, &mut elements);
        }
        if let Some(re) = TYPE.as_ref() {
            Self::aliases(&pass, re, &mut elements);
        }

        elements
    }

    fn language(&self) -> Language {
        Language::Go
    }
}
