//! App-name slug derivation.
//!
//! Every artifact generator needs the same identifier-safe rendition of the
//! human-readable app name (npm package names, storage bucket names, doc
//! anchors). The derivation lives in exactly one place so a single bundle can
//! never mix two spellings of the same app.

/// Derive the lowercase, hyphen-joined slug for an app name.
///
/// ## Examples
///
/// | Input | Output |
/// |-------|--------|
/// | "My App" | "my-app" |
/// | "myApp" | "my-app" |
/// | "XMLHttpRequest demo" | "xml-http-request-demo" |
/// | "" | "" |
///
/// Empty or symbol-only input degrades to an empty slug; callers treat that
/// as malformed output rather than an error.
pub fn slugify(name: &str) -> String {
    split_words(name).join("-")
}

/// Split a string into lowercase words.
///
/// ## Word Boundary Detection
///
/// 1. **Separators:** anything that is not ASCII-alphanumeric (spaces, `_`,
///    `-`, punctuation) always ends the current word.
/// 2. **Case transition (camelCase):** `aB` splits between `a` and `B`.
/// 3. **Acronym boundary:** `HTTPRequest` splits between `P` and `R`
///    (detected by the `Upper Upper Lower` pattern).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    // Peekable allows looking ahead for boundary detection without consuming
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        // Rule 1: non-alphanumeric characters always end the current word
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            // Rule 2: camelCase transition (lowercase -> uppercase)
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // Rule 3: acronym boundary
            // "HTTPServer" -> "HTTP" + "Server"
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
