//! Java recognizer.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::element::{CodeElement, ElementKind};
use super::language::Language;
use super::patterns::{
    JAVA_CLASS_PATTERN, JAVA_INTERFACE_PATTERN, JAVA_METHOD_PATTERN, JAVA_RESERVED,
};
use super::scanner::{compile, Pass};
use super::traits::Recognizer;

static CLASS: LazyLock<Option<Regex>> = LazyLock::new(|| compile(JAVA_CLASS_PATTERN));
static INTERFACE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(JAVA_INTERFACE_PATTERN));
static METHOD: LazyLock<Option<Regex>> = LazyLock::new(|| compile(JAVA_METHOD_PATTERN));

/// Recognizer for `.java` files.
///
/// Emits classes, interfaces, then methods. Only methods with an explicit
/// visibility modifier are seen, and overloads collapse to the first one.
pub struct JavaRecognizer;

impl Recognizer for JavaRecognizer {
    fn scan(&self, content: &str) -> Vec<CodeElement> {
        let pass = Pass::new(content);
        let mut elements = Vec::new();

        if let Some(re) = CLASS.as_ref() {
            pass.collect(re, ElementKind::Class, &mut elements);
        }
        if let Some(re) = INTERFACE.as_ref() {
            pass.collect(re, ElementKind::Interface, &mut elements);
        }
        if let Some(re) = METHOD.as_ref() {
            let mut seen = HashSet::new();
            pass.collect_unique(
                re,
                ElementKind::Function,
                &mut seen,
                JAVA_RESERVED,
                &mut elements,
            );
        }

        elements
    }

    fn language(&self) -> Language {
        Language::Java
    }
}
