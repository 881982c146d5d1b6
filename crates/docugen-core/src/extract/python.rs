//! Python recognizer.

use std::sync::LazyLock;

use regex::Regex;

use super::element::{CodeElement, ElementKind};
use super::language::Language;
use super::patterns::{PY_CLASS_PATTERN, PY_FUNCTION_PATTERN};
use super::scanner::{compile, Pass};
use super::traits::Recognizer;

static DEF: LazyLock<Option<Regex>> = LazyLock::new(|| compile(PY_FUNCTION_PATTERN));
static CLASS: LazyLock<Option<Regex>> = LazyLock::new(|| compile(PY_CLASS_PATTERN));

/// Recognizer for `.py` files.
///
/// Both passes are line-anchored and indentation-blind: nested functions
/// and methods are reported exactly like top-level ones.
pub struct PythonRecognizer;

impl Recognizer for PythonRecognizer {
    fn scan(&self, content: &str) -> Vec<CodeElement> {
        let pass = Pass::new(content);
        let mut elements = Vec::new();

        if let Some(re) = DEF.as_ref() {
            pass.collect(re, ElementKind::Function, &mut elements);
        }
        if let Some(re) = CLASS.as_ref() {
            pass.collect(re, ElementKind::Class, &mut elements);
        }

        elements
    }

    fn language(&self) -> Language {
        Language::Python
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_def_async_def_and_class() {
        let code = "class Animal:\n    pass\n\ndef greet(name):\n    return f\"Hello {name}\"\n\nasync def fetch(url):\n    pass\n";
        let elements = PythonRecognizer.scan(code);
        assert_eq!(
            elements,
            vec![
                CodeElement::function("greet", 4),
                CodeElement::function("fetch", 7),
                CodeElement::new(ElementKind::Class, "Animal", 1),
            ]
        );
    }

    #[test]
    fn test_methods_and_base_classes() {
        let code = "class Dog(Animal):\n    def bark(self):\n        def inner():\n            pass\n";
        let elements = PythonRecognizer.scan(code);
        assert_eq!(
            elements,
            vec![
                CodeElement::function("bark", 2),
                CodeElement::function("inner", 3),
                CodeElement::new(ElementKind::Class, "Dog", 1),
            ]
        );
    }

    #[test]
    fn test_mid_line_occurrences_ignored() {
        let code = "x = 'def fake(' \nprint('class Nope:')\n";
        assert!(PythonRecognizer.scan(code).is_empty());
    }

    #[test]
    fn test_repeated_names_kept() {
        let code = "def setup():\n    pass\ndef setup():\n    pass\n";
        assert_eq!(PythonRecognizer.scan(code).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(PythonRecognizer.scan("").is_empty());
    }
}
