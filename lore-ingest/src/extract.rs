//! Article title and body extraction from fetched HTML.

use scraper::{Html, Selector};

/// Content containers tried in order of preference. Covers plain article
/// markup plus the WordPress and Elementor themes the sources use.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "div.entry-content",
    "div.elementor-widget-theme-post-content",
    "main",
];

/// Phrases that mark share widgets, navigation, and footer fragments.
const SKIP_PHRASES: &[&str] = &[
    "share this",
    "related",
    "author",
    "posted on",
    "subscribe",
    "navigation",
    "footer",
    "copyright",
    "all rights reserved",
    "privacy policy",
    "terms of service",
    "cookie",
    "menu",
    "search",
    "leave a comment",
    "reply",
    "previous post",
    "next post",
    "facebook",
    "twitter",
    "linkedin",
    "email",
];

/// Fragments shorter than this are navigation or formatting, not prose.
const MIN_FRAGMENT_LEN: usize = 30;

/// Extract the article title from the first `h1`, falling back to `fallback`
/// (typically the URL slug) when the page has none.
pub fn extract_title(document: &Html, fallback: &str) -> String {
    let h1 = Selector::parse("h1").expect("valid selector");
    document
        .select(&h1)
        .next()
        .map(|element| {
            element.text().collect::<Vec<_>>().join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Extract the cleaned article body.
///
/// Finds the first matching content container, then collects the text of
/// its prose elements, dropping short fragments and boilerplate lines.
/// Returns an empty string when no container matches.
pub fn extract_content(document: &Html) -> String {
    let mut root = None;
    for selector in CONTENT_SELECTORS {
        let parsed = Selector::parse(selector).expect("valid selector");
        if let Some(found) = document.select(&parsed).next() {
            root = Some(found);
            break;
        }
    }
    let Some(root) = root else {
        return String::new();
    };

    let prose = Selector::parse("p, h1, h2, h3, h4, li").expect("valid selector");
    let mut parts = Vec::new();
    for element in root.select(&prose) {
        let text = element.text().collect::<Vec<_>>().join(" ");
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.len() < MIN_FRAGMENT_LEN {
            continue;
        }
        let lower = text.to_lowercase();
        if SKIP_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
            continue;
        }
        parts.push(text);
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <h1>Structured Water and Cellular Health</h1>
          <article>
            <p>Structured water holds a hexagonal arrangement that the article
               claims supports cellular hydration over many weeks.</p>
            <p>Share this article on social media!</p>
            <p>Menu</p>
            <li>Participants reported improved hydration markers after twelve
                weeks of structured water consumption in the case series.</li>
          </article>
        </body></html>"#;

    #[test]
    fn title_comes_from_the_first_h1() {
        let document = Html::parse_document(PAGE);
        assert_eq!(extract_title(&document, "fallback"), "Structured Water and Cellular Health");
    }

    #[test]
    fn missing_h1_falls_back_to_slug() {
        let document = Html::parse_document("<html><body><p>no heading</p></body></html>");
        assert_eq!(extract_title(&document, "some-article-slug"), "some-article-slug");
    }

    #[test]
    fn content_keeps_prose_and_drops_boilerplate() {
        let document = Html::parse_document(PAGE);
        let content = extract_content(&document);
        assert!(content.contains("hexagonal arrangement"));
        assert!(content.contains("hydration markers"));
        assert!(!content.contains("Share this"));
        assert!(!content.contains("Menu"));
    }

    #[test]
    fn page_without_container_yields_empty_content() {
        let document = Html::parse_document("<html><body><span>stray</span></body></html>");
        assert_eq!(extract_content(&document), "");
    }
}
