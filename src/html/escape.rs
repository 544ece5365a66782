//! HTML escaping for attribute values and text content.
use std::borrow::Cow;

/// Find the next byte that needs escaping, at or after `start`.
#[inline]
fn find_special(bytes: &[u8], start: usize) -> Option<usize> {
    let haystack = &bytes[start..];
    let markup = memchr::memchr3(b'&', b'<', b'>', haystack);
    let quotes = memchr::memchr2(b'"', b'\'', haystack);
    let hit = match (markup, quotes) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    };
    hit.map(|offset| start + offset)
}

#[inline]
fn entity(byte: u8) -> &'static str {
    match byte {
        b'&' => "&amp;",
        b'<' => "&lt;",
        b'>' => "&gt;",
        b'"' => "&quot;",
        b'\'' => "&#39;",
        _ => unreachable!("only special bytes reach entity()"),
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` for safe embedding in HTML.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping, which
/// is the common case for attribute values like ids and class lists.
///
/// # Examples
///
/// ```rust
/// use tilework::html::escape_html;
///
/// assert_eq!(escape_html("slide image"), "slide image");
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_html(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let Some(first) = find_special(bytes, 0) else {
        return Cow::Borrowed(input);
    };

    let mut escaped = String::with_capacity(input.len() + 8);
    escaped.push_str(&input[..first]);
    let mut position = first;
    loop {
        escaped.push_str(entity(bytes[position]));
        // All special characters are single-byte ASCII, so byte offsets are
        // always valid char boundaries.
        let rest = position + 1;
        match find_special(bytes, rest) {
            Some(next) => {
                escaped.push_str(&input[rest..next]);
                position = next;
            }
            None => {
                escaped.push_str(&input[rest..]);
                break;
            }
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_is_borrowed() {
        let input = "carousel slide image";
        assert!(matches!(escape_html(input), Cow::Borrowed(_)));
    }

    #[test]
    fn test_all_special_characters() {
        assert_eq!(escape_html("&"), "&amp;");
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html(">"), "&gt;");
        assert_eq!(escape_html("\""), "&quot;");
        assert_eq!(escape_html("'"), "&#39;");
    }

    #[test]
    fn test_mixed_content() {
        assert_eq!(
            escape_html("\"Tom & Jerry\" <cartoon>"),
            "&quot;Tom &amp; Jerry&quot; &lt;cartoon&gt;"
        );
    }

    #[test]
    fn test_multibyte_neighbours_survive() {
        assert_eq!(escape_html("héllo <wörld>"), "héllo &lt;wörld&gt;");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(escape_html(""), "");
    }
}
