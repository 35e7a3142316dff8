//! Web knowledge extractor: turns a fixed list of university pages into a
//! deduplicated set of text fragments.
//!
//! Runs once at startup. Every failure mode degrades: an unreachable URL is
//! logged and skipped, and total failure leaves the bot with an empty
//! knowledge base rather than refusing to start.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};

use crate::config;

/// Tags whose subtrees never carry answerable content (menus, chrome,
/// scripts). An element under any of these is excluded.
const EXCLUDED_TAGS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "aside", "form", "noscript",
];

/// Elements whose own text is considered content-bearing.
const CONTENT_SELECTOR: &str = "p, li, td, h1, h2, h3, div";

fn build_http_client() -> Result<reqwest::Client> {
    // University sites are routinely served with self-signed or misconfigured
    // TLS; the scraper tolerates that rather than losing the page.
    Ok(reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .timeout(Duration::from_secs(config::FETCH_TIMEOUT_SECS))
        .user_agent(config::USER_AGENT)
        .build()?)
}

async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String> {
    let resp = client.get(url).send().await?.error_for_status()?;
    Ok(resp.text().await?)
}

fn under_excluded_tag(el: &ElementRef) -> bool {
    el.ancestors().any(|node| {
        node.value()
            .as_element()
            .is_some_and(|e| EXCLUDED_TAGS.contains(&e.name()))
    })
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract qualifying text fragments from one page, appending them to `out`
/// if not already seen. Each content element contributes its own stripped
/// text; fragments of `MIN_FRAGMENT_WORDS` words or fewer are dropped as
/// navigation noise.
fn extract_fragments(html: &str, seen: &mut HashSet<String>, out: &mut Vec<String>) {
    let doc = Html::parse_document(html);
    let content = Selector::parse(CONTENT_SELECTOR).unwrap();

    for el in doc.select(&content) {
        if under_excluded_tag(&el) {
            continue;
        }
        let text = normalize_whitespace(&el.text().collect::<Vec<_>>().join(" "));
        if text.split_whitespace().count() <= config::MIN_FRAGMENT_WORDS {
            continue;
        }
        if seen.insert(text.clone()) {
            out.push(text);
        }
    }
}

/// Fetch every configured URL sequentially and build the knowledge base.
/// Returns the deduplicated fragments in first-seen order; downstream ranking
/// treats the collection as unordered.
pub async fn build_knowledge_base(urls: &[&str]) -> Vec<String> {
    let client = match build_http_client() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "could not build HTTP client; knowledge base will be empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut fragments = Vec::new();
    for url in urls {
        match fetch_html(&client, url).await {
            Ok(html) => extract_fragments(&html, &mut seen, &mut fragments),
            Err(e) => warn!(url, error = %e, "skipping unreachable page"),
        }
    }

    info!(fragments = fragments.len(), "knowledge base loaded");
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments_of(html: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        extract_fragments(html, &mut seen, &mut out);
        out
    }

    #[test]
    fn test_short_fragments_are_filtered() {
        let html = r#"<html><body>
            <p>Admissions office open weekdays</p>
            <p>exactly five words right here</p>
            <p>this sentence has exactly six words</p>
        </body></html>"#;
        let out = fragments_of(html);
        assert_eq!(out, vec!["this sentence has exactly six words"]);
    }

    #[test]
    fn test_excluded_subtrees_do_not_contribute() {
        let html = r#"<html><body>
            <nav><p>home about courses fees contact admissions portal</p></nav>
            <footer><p>copyright two thousand twenty four university site</p></footer>
            <article><p>the school of engineering offers accredited degree programmes</p></article>
        </body></html>"#;
        let out = fragments_of(html);
        assert_eq!(
            out,
            vec!["the school of engineering offers accredited degree programmes"]
        );
    }

    #[test]
    fn test_identical_fragments_deduplicate_across_pages() {
        let html = r#"<p>apply online before the published closing date</p>"#;
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        extract_fragments(html, &mut seen, &mut out);
        extract_fragments(html, &mut seen, &mut out);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_whitespace_is_normalized_per_element() {
        let html = "<p>spread   across\n  lines with    odd   spacing here</p>";
        let out = fragments_of(html);
        assert_eq!(out, vec!["spread across lines with odd spacing here"]);
    }

    #[test]
    fn test_headings_list_items_and_cells_qualify() {
        let html = r#"<html><body>
            <h2>frequently asked questions about postgraduate admission requirements</h2>
            <ul><li>certified copies of all academic certificates are required</li></ul>
            <table><tr><td>tuition is payable per semester in two installments</td></tr></table>
        </body></html>"#;
        let out = fragments_of(html);
        assert_eq!(out.len(), 3);
    }
}
