//! Extension-based dispatch to recognizers.

use std::path::Path;

use super::cpp::CRecognizer;
use super::go::GoRecognizer;
use super::java::JavaRecognizer;
use super::javascript::JsRecognizer;
use super::python::PythonRecognizer;
use super::traits::Recognizer;

/// Every extension with a dedicated recognizer.
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["ts", "tsx", "js", "jsx", "py", "java", "go", "c", "cpp"];

/// Closed set of language families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// JavaScript and TypeScript; also the fallback for unknown extensions.
    JavaScript,
    Python,
    Java,
    Go,
    /// C and C++.
    C,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::Go,
        Language::C,
    ];

    /// Match an extension (without the dot, any case) to a language.
    ///
    /// Returns `None` for extensions with no dedicated recognizer.
    pub fn detect(extension: &str) -> Option<Self> {
        let ext = extension.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }

    /// Like [`Language::detect`], falling back to JavaScript.
    pub fn from_extension(extension: &str) -> Self {
        Self::detect(extension).unwrap_or(Language::JavaScript)
    }

    /// Language for a file path, judged by the segment after the last dot.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| Self::from_extension(ext))
            .unwrap_or(Language::JavaScript)
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::JavaScript => &["ts", "tsx", "js", "jsx"],
            Self::Python => &["py"],
            Self::Java => &["java"],
            Self::Go => &["go"],
            Self::C => &["c", "cpp"],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript/TypeScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Go => "Go",
            Self::C => "C/C++",
        }
    }

    /// The recognizer bound to this language.
    pub fn recognizer(&self) -> &'static dyn Recognizer {
        match self {
            Self::JavaScript => &JsRecognizer,
            Self::Python => &PythonRecognizer,
            Self::Java => &JavaRecognizer,
            Self::Go => &GoRecognizer,
            Self::C => &CRecognizer,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table() {
        for ext in ["ts", "tsx", "js", "jsx"] {
            assert_eq!(Language::from_extension(ext), Language::JavaScript);
        }
        assert_eq!(Language::from_extension("py"), Language::Python);
        assert_eq!(Language::from_extension("java"), Language::Java);
        assert_eq!(Language::from_extension("go"), Language::Go);
        assert_eq!(Language::from_extension("c"), Language::C);
        assert_eq!(Language::from_extension("cpp"), Language::C);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Language::from_extension("PY"), Language::Python);
        assert_eq!(Language::from_extension("Go"), Language::Go);
        assert_eq!(Language::from_path("src/Main.JAVA"), Language::Java);
    }

    #[test]
    fn test_unknown_falls_back_to_javascript() {
        assert_eq!(Language::detect("rb"), None);
        assert_eq!(Language::from_extension("rb"), Language::JavaScript);
        assert_eq!(Language::from_path("Makefile"), Language::JavaScript);
        assert_eq!(Language::from_path("lib/x.h"), Language::JavaScript);
    }

    #[test]
    fn test_last_segment_wins() {
        assert_eq!(Language::from_path("app.test.py"), Language::Python);
        assert_eq!(Language::from_path("types.d.ts"), Language::JavaScript);
    }

    #[test]
    fn test_dotfile_uses_segment_after_dot() {
        assert_eq!(Language::from_path(".py"), Language::Python);
        assert_eq!(Language::from_path("scripts/.go"), Language::Go);
        assert_eq!(Language::from_path("dir.py/Makefile"), Language::JavaScript);
    }

    #[test]
    fn test_recognizer_binding() {
        for lang in Language::ALL {
            assert_eq!(lang.recognizer().language(), lang);
        }
        assert_eq!(Language::C.recognizer().supported_extensions(), &["c", "cpp"]);
    }

    #[test]
    fn test_supported_extensions_cover_all_languages() {
        for lang in Language::ALL {
            for ext in lang.extensions() {
                assert!(SUPPORTED_EXTENSIONS.contains(ext));
            }
        }
    }
}
