//! C / C++ recognizer.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::element::{CodeElement, ElementKind};
use super::language::Language;
use super::patterns::{C_CLASS_PATTERN, C_FUNCTION_PATTERN, C_RESERVED, C_STRUCT_PATTERN};
use super::scanner::{compile, Pass};
use super::traits::Recognizer;

static CLASS: LazyLock<Option<Regex>> = LazyLock::new(|| compile(C_CLASS_PATTERN));
static STRUCT: LazyLock<Option<Regex>> = LazyLock::new(|| compile(C_STRUCT_PATTERN));
static FUNCTION: LazyLock<Option<Regex>> = LazyLock::new(|| compile(C_FUNCTION_PATTERN));

/// Recognizer for `.c` and `.cpp` files.
///
/// Structs are reported as `type`. Only function definitions whose
/// signature starts in column 0 and is followed by a body are counted.
pub struct CRecognizer;

impl Recognizer for CRecognizer {
    fn scan(&self, content: &str) -> Vec<CodeElement> {
        let pass = Pass::new(content);
        let mut elements = Vec::new();

        if let Some(re) = CLASS.as_ref() {
            pass.collect(re, ElementKind::Class, &mut elements);
        }
        if let Some(re) = STRUCT.as_ref() {
            pass.collect(re, ElementKind::Type, &mut elements);
        }
        if let Some(re) = FUNCTION.as_ref() {
            let mut seen = HashSet::new();
            pass.collect_unique(
                re,
                ElementKind::Function,
                &mut seen,
                C_RESERVED,
                &mut elements,
            );
        }

        elements
    }

    fn language(&self) -> Language {
        Language::C
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_and_struct() {
        let code = "class Animal {\npublic:\n  void speak() {}\n};\n\nstruct Point {\n  int x;\n  int y;\n};\n";
        let elements = CRecognizer.scan(code);
        assert_eq!(
            elements,
            vec![
                CodeElement::new(ElementKind::Class, "Animal", 1),
                CodeElement::new(ElementKind::Type, "Point", 6),
            ]
        );
    }

    #[test]
    fn test_function_definitions() {
        let code = "int add(int a, int b) {\n  return a + b;\n}\n\nvoid printHello() {\n  printf(\"Hello\");\n}\n";
        let elements = CRecognizer.scan(code);
        assert_eq!(
            elements,
            vec![
                CodeElement::function("add", 1),
                CodeElement::function("printHello", 5),
            ]
        );
    }

    #[test]
    fn test_prototypes_skipped() {
        let code = "int add(int a, int b);\nstatic char *dup(const char *s)\n{\n  return 0;\n}\n";
        let elements = CRecognizer.scan(code);
        assert_eq!(elements, vec![CodeElement::function("dup", 2)]);
    }

    #[test]
    fn test_qualified_const_method() {
        let code = "std::string Widget::name() const {\n  return name_;\n}\n";
        let elements = CRecognizer.scan(code);
        assert_eq!(elements, vec![CodeElement::function("name", 1)]);
    }

    #[test]
    fn test_typedef_struct() {
        let elements = CRecognizer.scan("typedef struct Node {\n  int v;\n} Node;\n");
        assert_eq!(elements, vec![CodeElement::new(ElementKind::Type, "Node", 1)]);
    }

    #[test]
    fn test_keywords_filtered_and_duplicates_dropped() {
        let code = "else if (ready) {\n}\nint run(void) {\n}\nint run(int n) {\n}\n";
        let elements = CRecognizer.scan(code);
        assert_eq!(elements, vec![CodeElement::function("run", 3)]);
    }

    #[test]
    fn test_struct_anywhere_on_line() {
        let code = "void move(struct Point *p) {\n}\nstatic struct Config cfg;\n";
        let elements = CRecognizer.scan(code);
        assert_eq!(
            elements,
            vec![
                CodeElement::new(ElementKind::Type, "Point", 1),
                CodeElement::new(ElementKind::Type, "Config", 3),
                CodeElement::function("move", 1),
            ]
        );
    }

    #[test]
    fn test_export_function_after_comments() {
        let code = "// line 1 comment\n// line 2\nexport function myFunc() {}";
        let elements = CRecognizer.scan(code);
        assert_eq!(elements, vec![CodeElement::function("myFunc", 3)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(CRecognizer.scan("").is_empty());
    }
}
