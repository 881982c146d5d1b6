//! Lexical code-element extraction.
//!
//! Recovers a structural inventory of a source file (functions, classes,
//! interfaces, type aliases, HTTP routes) with regular expressions instead
//! of a grammar. False positives and misses are expected: there is no
//! brace balancing and no awareness of strings or comments.
//!
//! ## Components
//!
//! - [`Language`] - Closed extension tag, bound to a recognizer
//! - [`Recognizer`] - Per-language pattern bundle
//! - [`ParseResult`] - File path plus ordered [`CodeElement`]s
//!
//! ## Supported Languages
//!
//! | extension | recognizer |
//! |---|---|
//! | `ts`, `tsx`, `js`, `jsx` | JavaScript/TypeScript |
//! | `py` | Python |
//! | `java` | Java |
//! | `go` | Go |
//! | `c`, `cpp` | C/C++ |
//! | anything else | JavaScript/TypeScript |
//!
//! # Example
//!
//! ```ignore
//! use docugen_core::extract::parse_file;
//!
//! let result = parse_file("src/server.ts")?;
//! for element in &result.elements {
//!     println!("{}:{} {} {}", result.file_path, element.line, element.kind, element.name);
//! }
//! ```

mod cpp;
mod element;
mod error;
mod go;
mod java;
mod javascript;
mod language;
mod patterns;
mod python;
mod result;
mod scanner;
mod traits;

pub use cpp::CRecognizer;
pub use element::{CodeElement, ElementKind};
pub use error::ExtractError;
pub use go::GoRecognizer;
pub use java::JavaRecognizer;
pub use javascript::JsRecognizer;
pub use language::{Language, SUPPORTED_EXTENSIONS};
pub use python::PythonRecognizer;
pub use result::{ParseResult, ParseStats};
pub use traits::Recognizer;

use std::fs;
use std::path::Path;

use tracing::debug;

/// Read a file and extract its elements.
///
/// The recognizer is chosen from the extension; read failures are returned
/// to the caller, who decides whether to skip or abort. Bytes that are not
/// valid UTF-8 are replaced rather than rejected.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParseResult, ExtractError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ExtractError::io(path, e))?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(parse_source(&path.to_string_lossy(), &content))
}

/// Extract elements from text already in memory.
///
/// `path` only selects the recognizer and is echoed back in the result.
pub fn parse_source(path: &str, content: &str) -> ParseResult {
    let language = Language::from_path(path);
    let elements = language.recognizer().scan(content);

    debug!(
        path,
        language = language.name(),
        elements = elements.len(),
        "extracted code elements"
    );

    ParseResult::new(path, elements)
}
