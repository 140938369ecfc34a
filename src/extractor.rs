//! Article text extraction
//!
//! Reduces a fetched HTML document to the visible text of its paragraph
//! elements, joined in document order and cut to a fixed character budget so
//! the result fits the oracle's context comfortably.

use scraper::{Html, Selector};

/// Extract the paragraph text of an HTML document
///
/// Selects every `<p>` element, concatenates each element's text nodes,
/// joins the paragraphs with single spaces in document order, and truncates
/// to the first `max_chars` characters. Truncation is a plain codepoint cut
/// with no word-boundary awareness. Malformed HTML yields whatever partial
/// tree the parser can recover.
pub fn extract_article_text(html: &str, max_chars: usize) -> String {
    let document = Html::parse_document(html);

    // "p" is a valid selector, so parsing cannot fail
    let selector = Selector::parse("p").expect("Failed to parse paragraph selector");

    let text = document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");

    truncate_chars(&text, max_chars)
}

/// Truncate a string to at most `max_chars` characters
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
