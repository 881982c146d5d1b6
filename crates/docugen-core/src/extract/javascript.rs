//! JavaScript / TypeScript recognizer.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::element::{CodeElement, ElementKind};
use super::language::Language;
use super::patterns::{
    JS_CLASS_PATTERN, JS_EXPORT_PATTERN, JS_FUNCTION_PATTERNS, JS_IGNORED_NAMES,
    JS_INTERFACE_PATTERN, JS_ROUTE_PATTERNS, JS_TYPE_PATTERN,
};
use super::scanner::{compile, compile_all, Pass};
use super::traits::Recognizer;

static FUNCTIONS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(JS_FUNCTION_PATTERNS));
static ROUTES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(JS_ROUTE_PATTERNS));
static CLASS: LazyLock<Option<Regex>> = LazyLock::new(|| compile(JS_CLASS_PATTERN));
static INTERFACE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(JS_INTERFACE_PATTERN));
static TYPE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(JS_TYPE_PATTERN));
static EXPORT: LazyLock<Option<Regex>> = LazyLock::new(|| compile(JS_EXPORT_PATTERN));

/// Recognizer for `.ts`, `.tsx`, `.js`, `.jsx` and unknown extensions.
///
/// Emits functions, then routes, classes, interfaces and type aliases.
/// Function names are unique across all function patterns; nothing else
/// is de-duplicated.
pub struct JsRecognizer;

impl JsRecognizer {
    fn routes(pass: &Pass<'_>, out: &mut Vec<CodeElement>) {
        for re in ROUTES.iter() {
            for (cap, line) in pass.captures(re) {
                let (Some(verb), Some(path)) = (cap.get(1), cap.get(2)) else {
                    continue;
                };
                let name = format!("{} {}", verb.as_str().to_uppercase(), path.as_str());
                out.push(CodeElement::new(ElementKind::Route, name, line));
            }
        }
    }
}

impl Recognizer for JsRecognizer {
    fn scan(&self, content: &str) -> Vec<CodeElement> {
        let pass = Pass::new(content);
        let mut elements = Vec::new();

        let mut seen = HashSet::new();
        for re in FUNCTIONS.iter() {
            pass.collect_unique(
                re,
                ElementKind::Function,
                &mut seen,
                JS_IGNORED_NAMES,
                &mut elements,
            );
        }

        Self::routes(&pass, &mut elements);

        for (re, kind) in [
            (&*CLASS, ElementKind::Class),
            (&*INTERFACE, ElementKind::Interface),
            (&*TYPE, ElementKind::Type),
        ] {
            if let Some(re) = re {
                pass.collect(re, kind, &mut elements);
            }
        }

        // Legacy CommonJS modules with no recognizable declarations.
        if elements.is_empty() {
            if let Some(re) = EXPORT.as_ref() {
                pass.collect(re, ElementKind::Export, &mut elements);
            }
        }

        elements
    }

    fn language(&self) -> Language {
        Language::JavaScript
    }
}
