//! Escaping of untrusted text before display or transmission

/// Entities this module emits. An ampersand that already begins one of
/// these is copied through unchanged, which makes `sanitize` idempotent
/// on its own output and keeps legitimate punctuation intact.
const KNOWN_ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"];

/// Escape markup-significant characters so the result is inert when
/// interpolated into HTML text content or forwarded to a backend.
///
/// Total (never fails) and idempotent: `sanitize(sanitize(s)) == sanitize(s)`.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        match c {
            '&' => {
                if let Some(entity) = KNOWN_ENTITIES.iter().find(|e| rest.starts_with(**e)) {
                    out.push_str(entity);
                    rest = &rest[entity.len()..];
                    continue;
                }
                out.push_str("&amp;");
            }
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(sanitize("Hello, world"), "Hello, world");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_escapes_markup_characters() {
        assert_eq!(
            sanitize("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escapes_quotes_and_ampersand() {
        assert_eq!(sanitize(r#"a & "b""#), "a &amp; &quot;b&quot;");
    }

    #[test]
    fn test_preserves_unicode() {
        assert_eq!(sanitize("Müller & Söhne"), "Müller &amp; Söhne");
    }

    #[test]
    fn test_idempotent_on_plain_input() {
        let s = "O'Brien <o.brien@example.com>";
        assert_eq!(sanitize(&sanitize(s)), sanitize(s));
    }

    #[test]
    fn test_idempotent_on_already_escaped_input() {
        let once = sanitize("a & b < c");
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_bare_ampersand_before_entity_like_text() {
        // "&ampersand" is not a known entity, so the ampersand is escaped
        assert_eq!(sanitize("&ampersand"), "&amp;ampersand");
    }

    #[test]
    fn test_unknown_entity_is_escaped() {
        assert_eq!(sanitize("&nbsp;"), "&amp;nbsp;");
    }
}
