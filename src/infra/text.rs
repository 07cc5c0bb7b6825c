//! Markup stripping for plain-text output.

use std::sync::LazyLock;

use regex::Regex;

// Comments first so a `>` inside one doesn't end the match early.
static MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^<>]*>").expect("markup pattern is valid"));

/// Removes markup tags and HTML comments, keeping the text between them.
///
/// # Examples
///
/// ```
/// use staticpress::infra::strip_tags;
///
/// assert_eq!(strip_tags("<p>Hello <b>there</b></p>"), "Hello there");
/// ```
pub fn strip_tags(html: &str) -> String {
    MARKUP_RE.replace_all(html, "").into_owned()
}

/// Converts an HTML fragment into plain Unicode text.
///
/// Tags are stripped both before and after entities are decoded, so an
/// encoded `&lt;b&gt;` cannot reappear as a tag.
pub fn to_plain_text(html: &str) -> String {
    let stripped = strip_tags(html);
    let decoded = html_escape::decode_html_entities(&stripped);
    strip_tags(&decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_removes_elements() {
        assert_eq!(
            strip_tags(r#"<p class="x">One</p><img src="a.png"/><br>Two"#),
            "OneTwo"
        );
    }

    #[test]
    fn strip_tags_removes_comments() {
        assert_eq!(
            strip_tags("<!-- wp:paragraph -->\n<p>Text</p>\n<!-- /wp:paragraph -->"),
            "\nText\n"
        );
    }

    #[test]
    fn strip_tags_handles_multiline_tags() {
        assert_eq!(strip_tags("<a\n href=\"x\">link</a>"), "link");
    }

    #[test]
    fn plain_text_decodes_named_and_numeric_entities() {
        assert_eq!(
            to_plain_text("Caf&eacute; &amp; bar &#8212; &#x2603; &quot;q&quot; &#039;s&#039;"),
            "Café & bar — ☃ \"q\" 's'"
        );
    }

    #[test]
    fn plain_text_drops_encoded_markup() {
        assert_eq!(to_plain_text("<p>&lt;b&gt;bold&lt;/b&gt;</p>"), "bold");
    }

    #[test]
    fn plain_text_keeps_lone_angle_brackets() {
        assert_eq!(to_plain_text("1 &lt; 2 &amp;&amp; x"), "1 < 2 && x");
    }

    #[test]
    fn plain_text_of_plain_text_is_unchanged() {
        assert_eq!(to_plain_text("just words"), "just words");
    }
}
