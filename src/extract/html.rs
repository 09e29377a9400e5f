use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::ContentExtractor;
use crate::errors::SummarizerError;

/// Elements whose text never belongs in a summary input.
const STRIPPED_TAGS: &[&str] = &["script", "style", "nav", "header", "footer", "aside"];

// Static selectors to avoid recompiling them on every request.
static CONTAINER_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["main", "article", ".content", "#content"]
        .iter()
        .map(|css| Selector::parse(css).expect("static selector compiles"))
        .collect()
});

static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("static selector compiles"));

/// Extracts readable text from HTML documents, preferring semantic content
/// containers over the full body.
pub struct HtmlExtractor;

impl ContentExtractor for HtmlExtractor {
    fn can_handle(&self, content_type: &str) -> bool {
        content_type.contains("text/html")
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, SummarizerError> {
        let html = String::from_utf8_lossy(bytes);
        let document = Html::parse_document(&html);

        // Container priority: main, article, .content, #content.
        for selector in CONTAINER_SELECTORS.iter() {
            if let Some(container) = document.select(selector).next() {
                return Ok(visible_text(container));
            }
        }

        Ok(document
            .select(&BODY_SELECTOR)
            .next()
            .map(visible_text)
            .unwrap_or_default())
    }
}

/// Concatenates descendant text nodes, skipping stripped subtrees.
fn visible_text(root: ElementRef) -> String {
    let mut out = String::new();
    collect_text(root, &mut out);
    out.trim().to_string()
}

fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !STRIPPED_TAGS.contains(&child_element.value().name()) {
                collect_text(child_element, out);
            }
        }
    }
}
