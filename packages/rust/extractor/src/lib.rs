//! Content-link extraction with a deterministic placeholder fallback.
//!
//! Given a URL, [`Extractor::run`] produces an ordered list of up to
//! [`MAX_POSTS`] `(title, link)` pairs scraped from anchors inside
//! article containers. Extraction never fails outward: unreachable
//! sources, unparseable markup, and pages with no matching links all
//! resolve to the same three placeholder entries.

pub mod fetch;

use std::sync::Arc;

use scraper::{Html, Selector};
use tracing::{debug, instrument, warn};
use url::Url;

use sitesmith_shared::{MAX_POSTS, PostEntry, Result, SitesmithError};

pub use fetch::{HttpFetcher, PageFetcher};

// ---------------------------------------------------------------------------
// Extractor
// ---------------------------------------------------------------------------

/// Extracts representative content links from a page.
pub struct Extractor {
    fetcher: Arc<dyn PageFetcher>,
}

impl Extractor {
    /// Create an extractor with the production HTTP transport.
    pub fn new() -> Result<Self> {
        Ok(Self {
            fetcher: Arc::new(HttpFetcher::new()?),
        })
    }

    /// Create an extractor with a custom transport (used by tests).
    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Extract up to [`MAX_POSTS`] article links from `url`, in document
    /// order.
    ///
    /// Never fails and never returns an empty list: any fetch or parse
    /// error, and the zero-match case, yield [`placeholder_posts`]
    /// instead. The two cases are distinguishable only in the logs.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn run(&self, url: &str) -> Vec<PostEntry> {
        match self.try_extract(url).await {
            Ok(posts) if !posts.is_empty() => posts,
            Ok(_) => {
                debug!("no article links found, using placeholder posts");
                placeholder_posts()
            }
            Err(error) => {
                warn!(%error, "extraction failed, using placeholder posts");
                placeholder_posts()
            }
        }
    }

    async fn try_extract(&self, url: &str) -> Result<Vec<PostEntry>> {
        let base = Url::parse(url)
            .map_err(|e| SitesmithError::parse(format!("invalid URL {url}: {e}")))?;
        let body = self.fetcher.fetch(&base).await?;
        Ok(scan_posts(&body, &base))
    }
}

// ---------------------------------------------------------------------------
// Scanning
// ---------------------------------------------------------------------------

/// Scan markup for anchors nested in article containers, in document order.
///
/// A match is accepted when its visible text is non-empty after trimming
/// and it carries an `href`; rejected matches do not count against the
/// cap. Root-relative hrefs are resolved against the origin of `base`;
/// everything else passes through unchanged.
pub fn scan_posts(html: &str, base: &Url) -> Vec<PostEntry> {
    let doc = Html::parse_document(html);
    let article_links = Selector::parse("article a").unwrap();

    let mut posts = Vec::new();
    for el in doc.select(&article_links) {
        if posts.len() >= MAX_POSTS {
            break;
        }

        let title = el.text().collect::<String>().trim().to_string();
        let Some(href) = el.value().attr("href") else {
            continue;
        };
        if title.is_empty() {
            continue;
        }

        posts.push(PostEntry {
            title,
            link: resolve_link(href, base),
        });
    }

    posts
}

/// Resolve a root-relative href against the origin (scheme + host) of the
/// scraped URL; anything else passes through unchanged.
fn resolve_link(href: &str, base: &Url) -> String {
    if href.starts_with('/') {
        format!("{}{}", base.origin().ascii_serialization(), href)
    } else {
        href.to_string()
    }
}

/// The deterministic fallback: exactly three placeholder entries.
pub fn placeholder_posts() -> Vec<PostEntry> {
    (1..=MAX_POSTS)
        .map(|n| PostEntry {
            title: format!("Sample Post {n}"),
            link: "#".into(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/blog").unwrap()
    }

    #[test]
    fn scan_accepts_article_links_in_document_order() {
        let html = r#"<html><body>
            <article>
                <a href="https://example.com/first">First</a>
                <a href="/second">Second</a>
            </article>
            <article><a href="https://other.com/x">Third</a></article>
        </body></html>"#;

        let posts = scan_posts(html, &base());
        assert_eq!(
            posts,
            vec![
                PostEntry {
                    title: "First".into(),
                    link: "https://example.com/first".into(),
                },
                PostEntry {
                    title: "Second".into(),
                    link: "https://example.com/second".into(),
                },
                PostEntry {
                    title: "Third".into(),
                    link: "https://other.com/x".into(),
                },
            ]
        );
    }

    #[test]
    fn scan_stops_at_the_cap() {
        let html = r#"<article>
            <a href="/1">One</a>
            <a href="/2">Two</a>
            <a href="/3">Three</a>
            <a href="/4">Four</a>
            <a href="/5">Five</a>
        </article>"#;

        let posts = scan_posts(html, &base());
        assert_eq!(posts.len(), MAX_POSTS);
        assert_eq!(posts[2].title, "Three");
    }

    #[test]
    fn scan_skips_rejected_matches_without_counting_them() {
        // Two rejects (no href, empty text) followed by four valid links:
        // the cap must still land on the fourth valid one being dropped.
        let html = r#"<article>
            <a>No Href</a>
            <a href="/empty">   </a>
            <a href="/1">One</a>
            <a href="/2">Two</a>
            <a href="/3">Three</a>
            <a href="/4">Four</a>
        </article>"#;

        let posts = scan_posts(html, &base());
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn scan_normalizes_root_relative_links_against_origin() {
        let html = r#"<article><a href="/about">About</a></article>"#;
        let posts = scan_posts(html, &base());
        assert_eq!(posts[0].link, "https://example.com/about");
    }

    #[test]
    fn scan_passes_absolute_links_through_unchanged() {
        let html = r#"<article><a href="https://other.com/x">Other</a></article>"#;
        let posts = scan_posts(html, &base());
        assert_eq!(posts[0].link, "https://other.com/x");
    }

    #[test]
    fn scan_preserves_non_default_port_in_origin() {
        let html = r#"<article><a href="/post">Post</a></article>"#;
        let base = Url::parse("http://127.0.0.1:8080/blog").unwrap();
        let posts = scan_posts(html, &base);
        assert_eq!(posts[0].link, "http://127.0.0.1:8080/post");
    }

    #[test]
    fn scan_trims_and_collects_nested_anchor_text() {
        let html = r#"<article><a href="/x">  <span>Hello</span> <b>World</b>  </a></article>"#;
        let posts = scan_posts(html, &base());
        assert_eq!(posts[0].title, "Hello World");
    }

    #[test]
    fn scan_ignores_anchors_outside_articles() {
        let html = r#"<nav><a href="/nav">Nav Link</a></nav>
            <article><a href="/real">Real</a></article>"#;
        let posts = scan_posts(html, &base());
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Real");
    }

    #[test]
    fn placeholder_posts_are_deterministic() {
        let posts = placeholder_posts();
        assert_eq!(posts.len(), 3);
        for (i, post) in posts.iter().enumerate() {
            assert_eq!(post.title, format!("Sample Post {}", i + 1));
            assert_eq!(post.link, "#");
        }
    }

    // -----------------------------------------------------------------------
    // End-to-end extraction against a mock server
    // -----------------------------------------------------------------------

    fn extractor() -> Extractor {
        Extractor::new().unwrap()
    }

    #[tokio::test]
    async fn run_extracts_from_live_markup() {
        let server = wiremock::MockServer::start().await;
        let page = r#"<html><body>
            <article>
                <h2><a href="/posts/welcome">Welcome</a></h2>
                <h2><a href="https://partner.example/launch">Launch</a></h2>
            </article>
        </body></html>"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/blog"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(page))
            .mount(&server)
            .await;

        let url = format!("{}/blog", server.uri());
        let posts = extractor().run(&url).await;

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Welcome");
        assert_eq!(posts[0].link, format!("{}/posts/welcome", server.uri()));
        assert_eq!(posts[1].link, "https://partner.example/launch");
    }

    #[tokio::test]
    async fn run_falls_back_on_http_error() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let posts = extractor().run(&server.uri()).await;
        assert_eq!(posts, placeholder_posts());
    }

    #[tokio::test]
    async fn run_falls_back_on_unreachable_host() {
        let server = wiremock::MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let posts = extractor().run(&uri).await;
        assert_eq!(posts, placeholder_posts());
    }

    #[tokio::test]
    async fn run_falls_back_on_invalid_url() {
        let posts = extractor().run("not a url").await;
        assert_eq!(posts, placeholder_posts());
    }

    #[tokio::test]
    async fn run_falls_back_on_non_html_body() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(200).set_body_string("{\"not\": \"html\"}"),
            )
            .mount(&server)
            .await;

        let posts = extractor().run(&server.uri()).await;
        assert_eq!(posts, placeholder_posts());
    }

    #[tokio::test]
    async fn run_falls_back_when_no_links_match() {
        let server = wiremock::MockServer::start().await;
        let page = r#"<html><body><main><a href="/x">Not an article link</a></main></body></html>"#;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(page))
            .mount(&server)
            .await;

        let posts = extractor().run(&server.uri()).await;
        assert_eq!(posts, placeholder_posts());
    }
}
