use scraper::{Html, Selector};
use url::Url;

use super::fetcher::PageFetcher;

/// Priority page categories for hardware intelligence, matched against both
/// the href and the visible link text.
pub const PRIORITY_PAGE_KEYWORDS: &[(&str, &[&str])] = &[
    ("about", &["about", "company", "team", "story"]),
    ("services", &["services", "solutions", "products", "offerings"]),
    ("technology", &["technology", "tech-stack", "infrastructure", "platform"]),
    ("careers", &["careers", "jobs", "hiring", "join-us", "work-with-us"]),
    ("case-studies", &["case-studies", "portfolio", "work", "projects"]),
    ("contact", &["contact", "get-in-touch", "reach-us"]),
];

const MAX_EXTRA_PAGES: usize = 4;
const MAX_PAGES: usize = 5;

/// Pick the strategic pages to crawl for one site: the homepage plus up to
/// four same-site links matching the priority categories. When the homepage
/// itself cannot be fetched, only the base URL is returned.
pub async fn select_pages(fetcher: &PageFetcher, base_url: &str) -> Vec<String> {
    match fetcher.fetch(base_url).await {
        Ok(page) => select_from_homepage(base_url, &page.html),
        Err(e) => {
            log::warn!("Homepage fetch failed for {}: {}", base_url, e);
            vec![base_url.to_string()]
        }
    }
}

/// Scan homepage anchors for priority-category links in traversal order;
/// first keyword match per anchor wins.
pub fn select_from_homepage(base_url: &str, html: &str) -> Vec<String> {
    let mut pages = vec![base_url.to_string()];

    let Ok(base) = Url::parse(base_url) else {
        log::warn!("Cannot parse base url: {}", base_url);
        return pages;
    };

    let anchor_selector = Selector::parse("a[href]").unwrap();
    let document = Html::parse_document(html);
    let mut extra_found = 0usize;

    'anchors: for anchor in document.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let href_lower = href.to_lowercase();
        let text_lower = anchor
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_lowercase();

        for (_category, keywords) in PRIORITY_PAGE_KEYWORDS {
            for keyword in *keywords {
                if !href_lower.contains(keyword) && !text_lower.contains(keyword) {
                    continue;
                }
                if let Ok(full_url) = base.join(href) {
                    let full_url = full_url.to_string();
                    let is_known = pages
                        .iter()
                        .any(|p| p.trim_end_matches('/') == full_url.trim_end_matches('/'));
                    if !is_known {
                        pages.push(full_url);
                        extra_found += 1;
                        if extra_found >= MAX_EXTRA_PAGES {
                            break 'anchors;
                        }
                    }
                }
                continue 'anchors;
            }
        }
    }

    pages.truncate(MAX_PAGES);
    pages
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::fetcher::PageFetcher;
    use super::{select_from_homepage, select_pages};

    const BASE: &str = "https://acme.example.com";

    #[tokio::test]
    async fn failed_homepage_fetch_returns_only_the_base_url() {
        let fetcher = PageFetcher::new(Duration::from_secs(2), Duration::from_millis(1));
        let pages = select_pages(&fetcher, "https://127.0.0.1:9").await;

        assert_eq!(pages, vec!["https://127.0.0.1:9".to_string()]);
    }

    #[test]
    fn homepage_is_always_first() {
        let pages = select_from_homepage(BASE, "<html><body></body></html>");

        assert_eq!(pages, vec![BASE.to_string()]);
    }

    #[test]
    fn resolves_relative_priority_links() {
        let html = r#"<html><body>
            <a href="/about">About us</a>
            <a href="/careers">Careers</a>
        </body></html>"#;
        let pages = select_from_homepage(BASE, html);

        assert_eq!(pages[0], BASE);
        assert!(pages.contains(&"https://acme.example.com/about".to_string()));
        assert!(pages.contains(&"https://acme.example.com/careers".to_string()));
    }

    #[test]
    fn matches_on_link_text_when_href_is_opaque() {
        let html = r#"<a href="/p/42">Our Services</a>"#;
        let pages = select_from_homepage(BASE, html);

        assert!(pages.contains(&"https://acme.example.com/p/42".to_string()));
    }

    #[test]
    fn never_returns_more_than_five_pages() {
        let html = r#"<html><body>
            <a href="/about">about</a>
            <a href="/services">services</a>
            <a href="/technology">technology</a>
            <a href="/careers">careers</a>
            <a href="/contact">contact</a>
            <a href="/portfolio">portfolio</a>
        </body></html>"#;
        let pages = select_from_homepage(BASE, html);

        assert_eq!(pages.len(), 5);
        assert_eq!(pages[0], BASE);
        assert_eq!(pages[1], "https://acme.example.com/about");
    }

    #[test]
    fn skips_duplicates_and_the_homepage_itself() {
        let html = r#"<html><body>
            <a href="/">About our company</a>
            <a href="/about">About</a>
            <a href="/about">About (again)</a>
        </body></html>"#;
        let pages = select_from_homepage(BASE, html);

        assert_eq!(
            pages,
            vec![
                BASE.to_string(),
                "https://acme.example.com/about".to_string()
            ]
        );
    }

    #[test]
    fn unparseable_base_returns_singleton() {
        let pages = select_from_homepage("not a url", "<a href=\"/about\">about</a>");

        assert_eq!(pages, vec!["not a url".to_string()]);
    }
}
