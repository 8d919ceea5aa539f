use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use scraper::{ElementRef, Html, Selector};

/// Elements that never carry business signal. `scraper` documents are
/// immutable, so these are cut out of the raw HTML before parsing.
const PAGE_CHROME_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "aside", "iframe", "noscript",
];

/// Main-content container candidates, tried in order; first hit wins.
const MAIN_CONTENT_SELECTORS: &[&str] = &[
    "main",
    "[role=\"main\"]",
    ".main-content",
    "#main-content",
    ".content",
    "#content",
    "article",
    ".post",
    ".entry-content",
    ".page-content",
];

/// Business-specific sections, all tried, first two matches each.
const BUSINESS_SECTION_SELECTORS: &[&str] = &[
    ".hero",
    ".banner",
    ".intro",
    ".about",
    ".services",
    ".solutions",
    ".company",
    ".team",
    ".technology",
    ".platform",
    ".products",
];

/// Short tokens worth keeping even though the cleaner drops words of
/// length <= 2.
const MEANINGFUL_SHORT_TOKENS: &[&str] = &[
    "we", "us", "or", "to", "is", "it", "ai", "ml", "io", "ui", "ux", "qa", "bi",
];

static PAGE_CHROME_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PAGE_CHROME_TAGS
        .iter()
        .map(|tag| {
            RegexBuilder::new(&format!(r"<{tag}\b[^>]*>.*?</{tag}\s*>"))
                .case_insensitive(true)
                .dot_matches_new_line(true)
                .build()
                .expect("valid chrome-strip regex")
        })
        .collect()
});

static HTML_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"<!--.*?-->")
        .dot_matches_new_line(true)
        .build()
        .expect("valid comment regex")
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static BOILERPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"(?:cookie|privacy policy|terms of service|subscribe|newsletter)")
        .case_insensitive(true)
        .build()
        .expect("valid boilerplate regex")
});

static DISALLOWED_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,!?:;\-()$%+#]").expect("valid regex"));

/// Remove scripts, styles and page chrome from raw HTML before parsing.
pub fn strip_page_chrome(html: &str) -> String {
    let mut stripped = HTML_COMMENT_RE.replace_all(html, " ").into_owned();
    for pattern in PAGE_CHROME_RES.iter() {
        stripped = pattern.replace_all(&stripped, " ").into_owned();
    }
    stripped
}

/// Pull the text worth analyzing out of a parsed page.
///
/// Layered strategy: the first main-content container that yields anything
/// wins, business sections and the top headings are always appended, and the
/// whole body is the last resort when every other pass came back empty.
pub fn extract_content(document: &Html) -> String {
    let mut parts: Vec<String> = vec![];

    for selector in MAIN_CONTENT_SELECTORS {
        let sel = Selector::parse(selector).unwrap();
        let texts: Vec<String> = document.select(&sel).map(element_text).collect();
        if !texts.is_empty() {
            parts.push(texts.join(" "));
            break;
        }
    }

    for selector in BUSINESS_SECTION_SELECTORS {
        let sel = Selector::parse(selector).unwrap();
        for element in document.select(&sel).take(2) {
            parts.push(element_text(element));
        }
    }

    let heading_sel = Selector::parse("h1, h2, h3").unwrap();
    for heading in document.select(&heading_sel).take(10) {
        parts.push(element_text(heading));
    }

    if parts.iter().all(|p| p.trim().is_empty()) {
        let body_sel = Selector::parse("body").unwrap();
        match document.select(&body_sel).next() {
            Some(body) => parts.push(element_text(body)),
            None => parts.push(
                document
                    .root_element()
                    .text()
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }

    parts.join(" ")
}

/// Normalize extracted text: collapse whitespace, drop boilerplate and
/// stray characters, filter short and immediately repeated tokens.
pub fn clean_text(text: &str) -> String {
    let text = WHITESPACE_RE.replace_all(text, " ");
    let text = BOILERPLATE_RE.replace_all(&text, "");
    let text = DISALLOWED_CHARS_RE.replace_all(&text, " ");

    let mut kept: Vec<&str> = vec![];
    let mut prev = String::new();
    for word in text.split_whitespace() {
        let lower = word.to_lowercase();
        if word.chars().count() <= 2 && !MEANINGFUL_SHORT_TOKENS.contains(&lower.as_str()) {
            continue;
        }
        if lower == prev {
            continue;
        }
        prev = lower;
        kept.push(word);
    }

    kept.join(" ")
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}
