// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Escaping of HTML-significant characters in user supplied text.

use std::borrow::Cow;
use std::fmt::{self, Display, Write};

/// Characters that must not reach markup raw, paired with their entities.
pub const HTML_ESCAPES: [(char, &str); 6] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#x27;"),
    ('`', "&#x60;"),
];

#[inline]
fn entity(c: char) -> Option<&'static str> {
    HTML_ESCAPES
        .iter()
        .find_map(|&(raw, entity)| (raw == c).then_some(entity))
}

/// Returns `true` if `text` contains at least one character from [`HTML_ESCAPES`].
pub fn needs_escape(text: &str) -> bool {
    text.chars().any(|c| entity(c).is_some())
}

/// Replace every HTML-significant character in `text` with its entity.
///
/// Text that contains none of them (including the empty string) is returned
/// borrowed, without allocating.
///
/// ```
/// use todo_view::escape;
///
/// assert_eq!(escape("Buy milk"), "Buy milk");
/// assert_eq!(escape("<b>"), "&lt;b&gt;");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    if !needs_escape(text) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);

    // Writing to a `String` can't fail
    let _ = write!(out, "{}", Escaped(text));

    Cow::Owned(out)
}

/// [`escape`] for text that may be absent, absent text stays absent.
pub fn escape_opt(text: Option<&str>) -> Option<Cow<'_, str>> {
    text.map(escape)
}

/// `Display` adapter that writes the escaped form of the wrapped text.
#[derive(Clone, Copy, Debug)]
pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut rest = self.0;

        while let Some((idx, c, escaped)) = rest
            .char_indices()
            .find_map(|(idx, c)| Some((idx, c, entity(c)?)))
        {
            f.write_str(&rest[..idx])?;
            f.write_str(escaped)?;

            rest = &rest[idx + c.len_utf8()..];
        }

        f.write_str(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        for text in ["", "Buy milk", "über straße ✓", "100% done; {{title}}"] {
            let escaped = escape(text);

            assert!(matches!(escaped, Cow::Borrowed(_)));
            assert_eq!(escaped, text);
        }
    }

    #[test]
    fn every_table_entry_is_replaced() {
        assert_eq!(
            escape(r#"&<>"'`"#),
            "&amp;&lt;&gt;&quot;&#x27;&#x60;"
        );
    }

    #[test]
    fn surrounding_text_is_untouched() {
        assert_eq!(
            escape("Tom & Jerry's <show>"),
            "Tom &amp; Jerry&#x27;s &lt;show&gt;"
        );
        assert_eq!(escape("ñ<ñ"), "ñ&lt;ñ");
    }

    #[test]
    fn entities_are_escaped_again() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn absent_text_stays_absent() {
        assert_eq!(escape_opt(None), None);
        assert_eq!(escape_opt(Some("")).as_deref(), Some(""));
        assert_eq!(escape_opt(Some("a>b")).as_deref(), Some("a&gt;b"));
    }

    #[test]
    fn needs_escape_matches_table() {
        assert!(!needs_escape(""));
        assert!(!needs_escape("plain"));

        for (c, _) in HTML_ESCAPES {
            assert!(needs_escape(&format!("x{c}x")));
        }
    }

    #[test]
    fn escaped_display() {
        assert_eq!(Escaped("`rm -rf`").to_string(), "&#x60;rm -rf&#x60;");
        assert_eq!(Escaped("").to_string(), "");
    }
}
