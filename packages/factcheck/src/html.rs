//! HTML stripping helpers for the article resolver.
//!
//! Regex-based, intentionally tolerant of malformed markup. Good
//! enough for turning a fetched page into a flat text blob; not a
//! conforming HTML parser.

use regex::Regex;

/// Strip all markup and collapse whitespace into a flat text blob.
pub fn html_to_text(html: &str) -> String {
    let mut text = html.to_string();

    // Drop non-content blocks entirely
    let script_pattern = Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap();
    let style_pattern = Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap();
    let noscript_pattern = Regex::new(r"(?is)<noscript[^>]*>.*?</noscript>").unwrap();
    let comment_pattern = Regex::new(r"(?s)<!--.*?-->").unwrap();
    text = script_pattern.replace_all(&text, " ").to_string();
    text = style_pattern.replace_all(&text, " ").to_string();
    text = noscript_pattern.replace_all(&text, " ").to_string();
    text = comment_pattern.replace_all(&text, " ").to_string();

    // Replace remaining tags with separators so words don't run together
    let tag_pattern = Regex::new(r"<[^>]+>").unwrap();
    text = tag_pattern.replace_all(&text, " ").to_string();

    text = decode_entities(&text);

    // Collapse whitespace
    let whitespace_pattern = Regex::new(r"\s+").unwrap();
    whitespace_pattern.replace_all(&text, " ").trim().to_string()
}

/// Pull the main article body out of a page, if one can be isolated.
///
/// Prefers an `<article>` element; otherwise harvests paragraph tags.
/// Returns `None` when neither yields meaningful text.
pub fn extract_article(html: &str) -> Option<String> {
    let article_pattern = Regex::new(r"(?is)<article[^>]*>(.*?)</article>").unwrap();
    if let Some(cap) = article_pattern.captures(html) {
        let text = html_to_text(cap.get(1).map(|m| m.as_str()).unwrap_or(""));
        if !text.is_empty() {
            return Some(text);
        }
    }

    let p_pattern = Regex::new(r"(?is)<p[^>]*>(.*?)</p>").unwrap();
    let paragraphs: Vec<String> = p_pattern
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| html_to_text(m.as_str()))
        .filter(|t| !t.is_empty())
        .collect();

    if paragraphs.is_empty() {
        None
    } else {
        Some(paragraphs.join("\n\n"))
    }
}

/// Decode the common HTML entities.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_strips_tags() {
        let html = "<html><body><h1>Title</h1><p>Some text.</p></body></html>";
        assert_eq!(html_to_text(html), "Title Some text.");
    }

    #[test]
    fn test_html_to_text_drops_scripts_and_styles() {
        let html = "<script>var x = 1;</script><style>.a{}</style><p>Visible</p>";
        assert_eq!(html_to_text(html), "Visible");
    }

    #[test]
    fn test_html_to_text_decodes_entities() {
        assert_eq!(html_to_text("a &amp; b&nbsp;&lt;c&gt;"), "a & b <c>");
    }

    #[test]
    fn test_html_to_text_collapses_whitespace() {
        let html = "<p>one</p>\n\n\n<p>two</p>";
        assert_eq!(html_to_text(html), "one two");
    }

    #[test]
    fn test_extract_article_prefers_article_element() {
        let html = "<nav>Menu</nav><article><p>Body text.</p></article><footer>F</footer>";
        assert_eq!(extract_article(html), Some("Body text.".to_string()));
    }

    #[test]
    fn test_extract_article_falls_back_to_paragraphs() {
        let html = "<div><p>First.</p><p>Second.</p></div>";
        assert_eq!(extract_article(html), Some("First.\n\nSecond.".to_string()));
    }

    #[test]
    fn test_extract_article_none_for_empty() {
        assert_eq!(extract_article("<div>no paragraphs here</div>"), None);
    }
}
