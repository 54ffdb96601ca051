//! Listing-page crawling: candidate link collection and pagination.

use std::collections::BTreeSet;

use scraper::{Html, Selector};
use url::Url;

/// Path segments that mark non-article pages.
const SKIP_URL_PARTS: &[&str] =
    &["/wp-content/", "/category/", "/tag/", "/page/", "/feed", "/comment"];

/// Asset extensions listing pages commonly link to.
const SKIP_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".pdf"];

/// Whether an anchor href looks like an article under the listing's host.
///
/// Listing pages link everywhere: navigation, media, category indexes,
/// feeds. Real article permalinks stay on the same host, carry no query or
/// fragment, and have hyphen-heavy slugs.
pub fn is_article_url(base: &Url, href: &str) -> bool {
    let Ok(resolved) = base.join(href) else {
        return false;
    };
    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return false;
    }
    if resolved.host_str() != base.host_str() {
        return false;
    }
    if resolved.fragment().is_some() || resolved.query().is_some() {
        return false;
    }
    let path = resolved.path();
    if SKIP_URL_PARTS.iter().any(|part| path.contains(part)) {
        return false;
    }
    if SKIP_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        return false;
    }
    path.matches('-').count() >= 3
}

/// Collect unique candidate article URLs from a listing page, resolved to
/// absolute form and sorted for a deterministic crawl order.
pub fn collect_article_links(document: &Html, base: &Url) -> Vec<String> {
    let anchors = Selector::parse("a[href]").expect("valid selector");
    let mut links = BTreeSet::new();
    for element in document.select(&anchors) {
        if let Some(href) = element.value().attr("href") {
            if !is_article_url(base, href) {
                continue;
            }
            if let Ok(resolved) = base.join(href) {
                links.insert(resolved.to_string());
            }
        }
    }
    links.into_iter().collect()
}

/// Resolve the `a.next` pagination link, if the listing page has one.
pub fn next_page_url(document: &Html, base: &Url) -> Option<String> {
    let next = Selector::parse("a.next").expect("valid selector");
    let href = document.select(&next).next()?.value().attr("href")?;
    base.join(href).ok().map(|resolved| resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://blog.example.com/case-studies/").unwrap()
    }

    #[test]
    fn hyphen_heavy_same_host_paths_are_articles() {
        assert!(is_article_url(&base(), "https://blog.example.com/red-meat-cancer-risk-study/"));
        assert!(is_article_url(&base(), "/is-there-a-cure-for-brain-cancer/"));
    }

    #[test]
    fn off_host_and_asset_links_are_rejected() {
        assert!(!is_article_url(&base(), "https://other.example.net/red-meat-cancer-risk/"));
        assert!(!is_article_url(&base(), "/wp-content/red-meat-cancer-risk.jpg"));
        assert!(!is_article_url(&base(), "/category/case-studies-archive-page-two/"));
        assert!(!is_article_url(&base(), "/red-meat-cancer-risk/?replytocom=5"));
        assert!(!is_article_url(&base(), "/red-meat-cancer-risk/#comments"));
    }

    #[test]
    fn short_slugs_are_rejected() {
        assert!(!is_article_url(&base(), "/about/"));
        assert!(!is_article_url(&base(), "/contact-us/"));
    }

    #[test]
    fn links_are_collected_unique_and_absolute() {
        let page = r#"
            <html><body>
              <a href="/red-meat-cancer-risk-study/">first</a>
              <a href="/red-meat-cancer-risk-study/">duplicate</a>
              <a href="/about/">about</a>
              <a href="https://other.example.net/some-other-long-article/">offsite</a>
            </body></html>"#;
        let document = Html::parse_document(page);
        let links = collect_article_links(&document, &base());
        assert_eq!(links, vec![
            "https://blog.example.com/red-meat-cancer-risk-study/".to_string()
        ]);
    }

    #[test]
    fn pagination_link_is_resolved() {
        let page = r#"<a class="next" href="/case-studies/page/2/">Older</a>"#;
        let document = Html::parse_document(page);
        assert_eq!(
            next_page_url(&document, &base()),
            Some("https://blog.example.com/case-studies/page/2/".to_string())
        );

        let empty = Html::parse_document("<p>no pagination</p>");
        assert_eq!(next_page_url(&empty, &base()), None);
    }
}
