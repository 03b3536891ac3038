// ABOUTME: Configuration for extraction and scraping runs, plus the fluent ScraperBuilder.
// ABOUTME: Defaults reproduce the fixed IBPS recruitment page, output directory and file prefix.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::client::Scraper;
use crate::error::ScrapeError;

pub const DEFAULT_BASE_URL: &str = "https://www.ibps.in";
pub const DEFAULT_LISTINGS_URL: &str = "https://www.ibps.in/index.php/recruitment/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120 Safari/537.36";
pub const DEFAULT_OUT_DIR: &str = "data";
pub const DEFAULT_FILE_PREFIX: &str = "ibps_recruitments";

/// Settings consumed by the extractor.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Base that relative anchor targets are resolved against.
    pub base_url: Url,
    /// Substring that marks link text as belonging to the site, matched case-insensitively.
    pub brand_term: String,
    /// Title used when an accepted anchor has no visible text.
    pub title_placeholder: String,
    /// Title used for text-less anchors found by the PDF fallback.
    pub pdf_title_placeholder: String,
}

impl ExtractOptions {
    /// Default options with a different base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, ScrapeError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        })
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            brand_term: "ibps".to_string(),
            title_placeholder: "IBPS Notice".to_string(),
            pdf_title_placeholder: "IBPS PDF Notice".to_string(),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ScrapeError> {
    let url = Url::parse(raw).map_err(|e| {
        ScrapeError::invalid_url(raw, "BaseUrl", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;
    if url.cannot_be_a_base() {
        return Err(ScrapeError::invalid_url(
            raw,
            "BaseUrl",
            Some(anyhow::anyhow!("URL cannot be used as a base")),
        ));
    }
    Ok(url)
}

/// Configuration for a full fetch, extract and write run.
#[derive(Debug, Clone)]
pub struct Options {
    pub listings_url: String,
    pub extract: ExtractOptions,
    pub timeout: Duration,
    pub user_agent: String,
    pub accept_invalid_certs: bool,
    pub out_dir: PathBuf,
    pub file_prefix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            listings_url: DEFAULT_LISTINGS_URL.to_string(),
            extract: ExtractOptions::default(),
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

/// Builder for constructing Scraper instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ScraperBuilder {
    opts: Options,
    base_url: Option<String>,
}

impl ScraperBuilder {
    /// Create a new ScraperBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page to fetch listings from.
    pub fn listings_url(mut self, url: impl Into<String>) -> Self {
        self.opts.listings_url = url.into();
        self
    }

    /// Set the base URL relative links are resolved against.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Verify TLS certificates (disabled by default).
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.opts.accept_invalid_certs = !verify;
        self
    }

    /// Set the directory CSV files are written to.
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.opts.out_dir = dir.into();
        self
    }

    /// Set the CSV file name prefix.
    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.opts.file_prefix = prefix.into();
        self
    }

    /// Set the title used for text-less anchors.
    pub fn title_placeholder(mut self, title: impl Into<String>) -> Self {
        self.opts.extract.title_placeholder = title.into();
        self
    }

    /// Set the site marker looked for in link text.
    pub fn brand_term(mut self, term: impl Into<String>) -> Self {
        self.opts.extract.brand_term = term.into();
        self
    }

    /// Build the Scraper with the configured options.
    pub fn build(mut self) -> Result<Scraper, ScrapeError> {
        if let Some(raw) = self.base_url.take() {
            self.opts.extract.base_url = parse_base_url(&raw)?;
        }
        Scraper::new(self.opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert_eq!(opts.listings_url, DEFAULT_LISTINGS_URL);
        assert_eq!(opts.extract.base_url.as_str(), "https://www.ibps.in/");
        assert_eq!(opts.timeout, Duration::from_secs(10));
        assert!(opts.accept_invalid_certs);
        assert_eq!(opts.out_dir, PathBuf::from("data"));
        assert_eq!(opts.file_prefix, "ibps_recruitments");
    }

    #[test]
    fn test_with_base_url_rejects_garbage() {
        let err = ExtractOptions::with_base_url("not a url").unwrap_err();
        assert!(err.is_invalid_url());

        let err = ExtractOptions::with_base_url("mailto:jobs@example.com").unwrap_err();
        assert!(err.is_invalid_url());
    }

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let err = ScraperBuilder::new().base_url("::nope").build().unwrap_err();
        assert!(err.is_invalid_url());
    }
}
