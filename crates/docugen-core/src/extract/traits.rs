//! Core recognizer trait for per-language extraction.

use super::element::CodeElement;
use super::language::Language;

/// A per-language bundle of pattern rules.
///
/// Recognizers are stateless: every call to [`Recognizer::scan`] builds its
/// own de-duplication sets, so one instance can serve any number of files,
/// including from several threads.
///
/// # Example Implementation
///
/// ```ignore
/// impl Recognizer for PythonRecognizer {
///     fn scan(&self, content: &str) -> Vec<CodeElement> {
///         let pass = Pass::new(content);
///         let mut elements = Vec::new();
///         pass.collect(&DEF, ElementKind::Function, &mut elements);
///         elements
///     }
///
///     fn language(&self) -> Language { Language::Python }
/// }
/// ```
pub trait Recognizer: Send + Sync {
    /// Scan the full text of a file and return its elements in a fixed,
    /// deterministic order.
    fn scan(&self, content: &str) -> Vec<CodeElement>;

    /// Language family this recognizer handles.
    fn language(&self) -> Language;

    /// Human-readable language name.
    fn language_name(&self) -> &'static str {
        self.language().name()
    }

    /// File extensions routed to this recognizer.
    fn supported_extensions(&self) -> &'static [&'static str] {
        self.language().extensions()
    }
}
