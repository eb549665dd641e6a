pub const SCRIPT_OPEN: &str = r#"<script type="application/ld+json">"#;
pub const SCRIPT_CLOSE: &str = "</script>";

/// Placeholder returned when no JSON delimiter can be found.
pub const EMPTY_OBJECT: &str = "{}";

/// Type name used for objects without a readable `@type`.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Required fields applied to types missing from the rule table.
pub const DEFAULT_REQUIRED: [&str; 2] = ["@context", "@type"];

pub const DEFAULT_HISTORY_LIMIT: usize = 20;
