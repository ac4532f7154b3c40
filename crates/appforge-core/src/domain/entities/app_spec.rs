//! The canonical generation request shared by all four artifact generators.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output language of the generated application code.
///
/// ## Permissive boundary
///
/// The surrounding service layer hands us a plain string. Conversion is
/// deliberately permissive rather than validating: exactly `"TypeScript"`
/// selects TypeScript, and **any** other string — including typos and
/// unexpected literals — falls through to JavaScript. Malformed input
/// degrades, it does not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLanguage {
    TypeScript,
    JavaScript,
}

impl TargetLanguage {
    /// Extension for component files (`.tsx` / `.jsx`).
    pub fn component_ext(self) -> &'static str {
        match self {
            Self::TypeScript => "tsx",
            Self::JavaScript => "jsx",
        }
    }

    /// Extension for plain module files (`.ts` / `.js`).
    pub fn module_ext(self) -> &'static str {
        match self {
            Self::TypeScript => "ts",
            Self::JavaScript => "js",
        }
    }
}

impl From<&str> for TargetLanguage {
    fn from(s: &str) -> Self {
        // Equality against the one literal; everything else is JavaScript.
        if s == "TypeScript" {
            Self::TypeScript
        } else {
            Self::JavaScript
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeScript => write!(f, "TypeScript"),
            Self::JavaScript => write!(f, "JavaScript"),
        }
    }
}

/// One generation request: everything the artifact generators know about the
/// app being scaffolded.
///
/// Ephemeral by design — created per request, dropped after the bundle is
/// returned. The generators perform no validation on it; an empty `name`
/// yields an empty slug and correspondingly degraded (but non-crashing)
/// output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSpec {
    /// Human-readable app name (e.g. "My App").
    pub name: String,

    /// Free-text description, embedded verbatim in docs and schema comments.
    pub description: String,

    /// Output language for the code bundle.
    pub language: TargetLanguage,
}

impl AppSpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        language: TargetLanguage,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_literal_selects_typescript() {
        assert_eq!(TargetLanguage::from("TypeScript"), TargetLanguage::TypeScript);
    }

    #[test]
    fn anything_else_falls_through_to_javascript() {
        for s in ["JavaScript", "typescript", "TYPESCRIPT", "Rust", ""] {
            assert_eq!(TargetLanguage::from(s), TargetLanguage::JavaScript, "input: {s:?}");
        }
    }

    #[test]
    fn extensions_follow_language() {
        assert_eq!(TargetLanguage::TypeScript.component_ext(), "tsx");
        assert_eq!(TargetLanguage::JavaScript.component_ext(), "jsx");
        assert_eq!(TargetLanguage::TypeScript.module_ext(), "ts");
        assert_eq!(TargetLanguage::JavaScript.module_ext(), "js");
    }
}
