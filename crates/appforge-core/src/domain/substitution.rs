//! Placeholder substitution.
//!
//! A single left-to-right tokenizer pass over the content. A token is
//! `{{` + identifier + `}}` where the identifier is one or more of
//! `[A-Za-z0-9_-]`. Tokens are matched atomically, so a key that is a prefix
//! of another key can never partially consume the longer key's token.
//!
//! ## Semantics
//!
//! - A token whose identifier has no entry in the map is left verbatim.
//! - Replacement values are appended to the output and never re-scanned:
//!   a value that itself contains `{{...}}` survives literally. Substitution
//!   is therefore idempotent whenever no value contains a token.
//! - `{{` that does not open a well-formed token (e.g. `{{ spaced }}`,
//!   `{{unclosed`) is treated as ordinary text. Nested braces like
//!   `{{{key}}}` keep the outer brace pair and resolve the inner token.

use std::collections::BTreeMap;

/// Apply `values` to `content` in one pass, replacing whole `{{key}}` tokens.
pub fn apply(content: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match identifier_len(after) {
            Some(len) if after[len..].starts_with("}}") => {
                let key = &after[..len];
                match values.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        // Unknown token: emit verbatim and move past it.
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[len + 2..];
            }
            _ => {
                // Not a token. Emit one brace and rescan from the next char
                // so that `{{{key}}}` still finds the inner token.
                out.push('{');
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Length of the identifier run at the head of `s`, or `None` if it is empty.
fn identifier_len(s: &str) -> Option<usize> {
    let len = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(s.len());
    (len > 0).then_some(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_known_tokens() {
        let got = apply("Build {{name}} in {{lang}}.", &map(&[("name", "Shop"), ("lang", "TS")]));
        assert_eq!(got, "Build Shop in TS.");
    }

    #[test]
    fn unknown_tokens_survive_verbatim() {
        assert_eq!(apply("Hello {{who}}", &map(&[])), "Hello {{who}}");
    }

    #[test]
    fn repeated_tokens_all_replaced() {
        let got = apply("{{a}}{{a}}", &map(&[("a", "x")]));
        assert_eq!(got, "xx");
    }

    #[test]
    fn prefix_keys_cannot_collide() {
        // "app" is a prefix of "appname"; atomic token matching means each
        // token resolves against its exact identifier.
        let got = apply("{{app}} vs {{appname}}", &map(&[("app", "1"), ("appname", "2")]));
        assert_eq!(got, "1 vs 2");
    }

    #[test]
    fn values_are_not_rescanned() {
        let got = apply("{{a}}", &map(&[("a", "{{b}}"), ("b", "nope")]));
        assert_eq!(got, "{{b}}");
    }

    #[test]
    fn idempotent_when_values_carry_no_tokens() {
        let values = map(&[("a", "Y")]);
        let once = apply("X={{a}}", &values);
        assert_eq!(apply(&once, &values), once);
    }

    #[test]
    fn nested_braces_keep_outer_pair() {
        let got = apply("{{{key}}}", &map(&[("key", "v")]));
        assert_eq!(got, "{v}");
    }

    #[test]
    fn malformed_tokens_are_plain_text() {
        let values = map(&[("key", "v")]);
        assert_eq!(apply("{{ key }}", &values), "{{ key }}");
        assert_eq!(apply("{{unclosed", &values), "{{unclosed");
        assert_eq!(apply("lone { brace", &values), "lone { brace");
    }
}
