//! Regex patterns and keyword lists for lexical extraction.
//!
//! Every pattern captures the element name in group 1. Route patterns
//! capture the HTTP verb in group 1 and the path in group 2.
//!
//! Word characters are ASCII only (`(?-u:\w)`), so a name
//! never absorbs accented letters around it.

// ============================================================================
// JavaScript / TypeScript
// ============================================================================

/// Function declaration patterns, in priority order for de-duplication.
pub const JS_FUNCTION_PATTERNS: &[&str] = &[
    // function name()
    r"(?:export\s+)?(?:async\s+)?function\s+((?-u:\w)+)",
    // const name = function
    r"(?:export\s+)?const\s+((?-u:\w)+)\s*=\s*(?:async\s+)?function",
    // const name = () =>
    r"(?:export\s+)?const\s+((?-u:\w)+)\s*=\s*(?:async\s+)?\([^)]*\)\s*=>",
    // let name = function
    r"(?:export\s+)?let\s+((?-u:\w)+)\s*=\s*(?:async\s+)?function",
    // let name = () =>
    r"(?:export\s+)?let\s+((?-u:\w)+)\s*=\s*(?:async\s+)?\([^)]*\)\s*=>",
    // name: function (object literal method)
    r"((?-u:\w)+)\s*:\s*(?:async\s+)?function",
    // name: () => (object literal method)
    r"((?-u:\w)+)\s*:\s*(?:async\s+)?\([^)]*\)\s*=>",
];

/// Route registration patterns (`router.get('/x', ...)`, `app.post(...)`).
pub const JS_ROUTE_PATTERNS: &[&str] = &[
    r#"router\.(get|post|put|delete|patch)\s*\(\s*['"`]([^'"`]+)['"`]"#,
    r#"app\.(get|post|put|delete|patch)\s*\(\s*['"`]([^'"`]+)['"`]"#,
];

pub const JS_CLASS_PATTERN: &str = r"(?:export\s+)?class\s+((?-u:\w)+)";

pub const JS_INTERFACE_PATTERN: &str = r"(?:export\s+)?interface\s+((?-u:\w)+)";

pub const JS_TYPE_PATTERN: &str = r"(?:export\s+)?type\s+((?-u:\w)+)";

/// Only consulted when nothing else matched.
pub const JS_EXPORT_PATTERN: &str = r"module\.exports\s*=\s*((?-u:\w)+)";

/// CommonJS noise that the function patterns pick up.
pub const JS_IGNORED_NAMES: &[&str] = &["require", "exports"];

// ============================================================================
// Python
// ============================================================================

pub const PY_FUNCTION_PATTERN: &str = r"(?m)^[ \t]*(?:async[ \t]+)?def[ \t]+((?-u:\w)+)[ \t]*\(";

pub const PY_CLASS_PATTERN: &str = r"(?m)^[ \t]*class[ \t]+((?-u:\w)+)[ \t]*(?:\([^)]*\))?[ \t]*:";

// ============================================================================
// Java
// ============================================================================

pub const JAVA_CLASS_PATTERN: &str =
    r"\b(?:(?:public|private|protected|abstract|final|static|sealed)\s+)*class\s+((?-u:\w)+)";

pub const JAVA_INTERFACE_PATTERN: &str =
    r"\b(?:(?:public|private|protected|abstract|static|sealed)\s+)*interface\s+((?-u:\w)+)";

/// Visibility modifier, optional static/final, one or more return-type
/// tokens, then `name(`. Constructors have no return type and are skipped.
pub const JAVA_METHOD_PATTERN: &str =
    r"\b(?:public|private|protected)\s+(?:static\s+)?(?:final\s+)?(?:[0-9A-Za-z_<>\[\],.?]+\s+)+((?-u:\w)+)\s*\(";

/// Names that can land in the method pattern's name slot but are not methods.
pub const JAVA_RESERVED: &[&str] = &[
    "class", "interface", "enum", "if", "for", "while", "switch", "catch",
];

// ============================================================================
// Go
// ============================================================================

/// `func Name(`, `func (r *T) Name(` and `func Name[T any](`.
pub const GO_FUNCTION_PATTERN: &str =
    r"(?m)^func\s+(?:\([^)]*\)\s*)?((?-u:\w)+)\s*(?:\[[^\]]*\])?\(";

pub const GO_STRUCT_PATTERN: &str = r"(?m)^type\s+((?-u:\w)+)\s+struct\b";

pub const GO_INTERFACE_PATTERN: &str = r"(?m)^type\s+((?-u:\w)+)\s+interface\b";

/// Captures the name and the first token after it; the recognizer drops
/// matches whose token starts with a `GO_NON_ALIAS_PREFIXES` entry. The `=`
/// of an alias is that token, so `type E = interface{}` is kept.
pub const GO_TYPE_PATTERN: &str = r"(?m)^type\s+((?-u:\w)+)\s+(\S+)";

pub const GO_NON_ALIAS_PREFIXES: &[&str] = &["struct", "interface"];

// ============================================================================
// C / C++
// ============================================================================

pub const C_CLASS_PATTERN: &str = r"(?m)^[ \t]*class\s+((?-u:\w)+)";

pub const C_STRUCT_PATTERN: &str = r"\b(?:typedef\s+)?struct\s+((?-u:\w)+)";

/// Definitions only: return type at column 0, `name(args)`, optional
/// `const`, then an opening brace. Prototypes end in `;` and never match.
pub const C_FUNCTION_PATTERN: &str =
    r"(?m)^(?:[0-9A-Za-z_*&:<>~]+[ \t]+)+\**(?:(?-u:\w)+::)*(~?(?-u:\w)+)\s*\([^)]*\)\s*(?:const\s*)?\{";

/// Control-flow and declaration keywords that fit the definition shape.
pub const C_RESERVED: &[&str] = &[
    "if", "for", "while", "switch", "do", "return", "class", "struct", "namespace",
];
