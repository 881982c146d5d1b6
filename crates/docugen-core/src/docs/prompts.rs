use crate::extract::CodeElement;

/// Builds the documentation prompt for one file.
///
/// The element list is embedded as pretty-printed JSON with the same
/// `type`/`name`/`line` shape the extractor serializes.
pub fn build_docs_prompt(file_path: &str, elements: &[CodeElement]) -> String {
    let elements_json = serde_json::to_string_pretty(elements).unwrap_or_default();

    format!(
        r#"You are a technical documentation expert. Generate clear, concise documentation for the following code elements from {file_path}:

{elements_json}

Format the documentation as markdown with:
- A brief file overview
- Each function/class/interface documented with:
  - Purpose
  - Parameters (if any)
  - Return type
  - Usage example (if applicable)

Keep it professional and practical."#
    )
}
