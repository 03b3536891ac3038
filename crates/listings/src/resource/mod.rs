// ABOUTME: Fetches the listings page with a single blocking GET request.
// ABOUTME: Enforces a size limit, rejects non-2xx statuses and decodes the body's charset.

use std::time::Duration;

use crate::error::ScrapeError;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Builds the blocking HTTP client used for the single page fetch.
pub fn build_client(
    user_agent: &str,
    timeout: Duration,
    accept_invalid_certs: bool,
) -> Result<reqwest::blocking::Client, ScrapeError> {
    reqwest::blocking::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()
        .map_err(|e| {
            ScrapeError::fetch(
                "",
                "BuildClient",
                Some(anyhow::anyhow!("failed to build HTTP client: {}", e)),
            )
        })
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

fn transport_error(url: &str, err: reqwest::Error) -> ScrapeError {
    if err.is_timeout() {
        ScrapeError::timeout(url, "Fetch", Some(anyhow::anyhow!("request timed out: {}", err)))
    } else {
        ScrapeError::fetch(url, "Fetch", Some(anyhow::anyhow!("request failed: {}", err)))
    }
}

/// Fetch `url` and return its decoded body.
pub fn fetch(client: &reqwest::blocking::Client, url: &str) -> Result<String, ScrapeError> {
    if url.is_empty() {
        return Err(ScrapeError::invalid_url(url, "Fetch", None));
    }

    let parsed_url = url::Url::parse(url).map_err(|e| {
        ScrapeError::invalid_url(url, "Fetch", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = parsed_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ScrapeError::invalid_url(
            url,
            "Fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    tracing::info!(url, "fetching listings page");
    let response = client
        .get(parsed_url)
        .send()
        .map_err(|e| transport_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
        ));
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(ScrapeError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response.bytes().map_err(|e| transport_error(url, e))?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(ScrapeError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    tracing::debug!(url, bytes = body.len(), "fetched listings page");
    Ok(decode_body(&body, content_type.as_deref()))
}

/// Fetch `url`, logging any failure and reporting it as "no content".
pub fn fetch_page(client: &reqwest::blocking::Client, url: &str) -> Option<String> {
    match fetch(client, url) {
        Ok(body) => Some(body),
        Err(err) => {
            tracing::error!(url, error = %err, "error fetching listings page");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn create_test_client() -> reqwest::blocking::Client {
        build_client("test-agent", Duration::from_secs(5), false).unwrap()
    }

    #[test]
    fn test_fetch_ok_sends_user_agent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/recruitment/").header("user-agent", "test-agent");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body("<html><body>Hello</body></html>");
        });

        let body = fetch(&create_test_client(), &server.url("/recruitment/")).unwrap();
        mock.assert();
        assert!(body.contains("Hello"));
    }

    #[test]
    fn test_fetch_non_2xx_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404).body("not found");
        });

        let err = fetch(&create_test_client(), &server.url("/missing")).unwrap_err();
        assert!(err.is_fetch());
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_fetch_rejects_bad_urls() {
        let client = create_test_client();
        assert!(fetch(&client, "").unwrap_err().is_invalid_url());
        assert!(fetch(&client, "not a url").unwrap_err().is_invalid_url());
        assert!(fetch(&client, "ftp://example.com/x").unwrap_err().is_invalid_url());
    }

    #[test]
    fn test_fetch_page_swallows_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/down");
            then.status(503);
        });

        assert_eq!(fetch_page(&create_test_client(), &server.url("/down")), None);
    }

    #[test]
    fn test_fetch_content_length_limit() {
        let server = MockServer::start();
        let big = "a".repeat(MAX_CONTENT_LENGTH + 1);
        server.mock(|when, then| {
            when.method(GET).path("/big");
            then.status(200).body(big);
        });

        let err = fetch(&create_test_client(), &server.url("/big")).unwrap_err();
        assert!(err.to_string().contains("content too large"));
    }

    #[test]
    fn test_decode_iso_8859_1_with_charset() {
        let body = b"Caf\xe9";
        assert_eq!(decode_body(body, Some("text/html; charset=iso-8859-1")), "Café");
    }

    #[test]
    fn test_fetch_timeout_maps_to_timeout() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .delay(Duration::from_millis(1500))
                .body("<html></html>");
        });

        let client = build_client("test-agent", Duration::from_millis(200), false).unwrap();
        let err = fetch(&client, &server.url("/slow")).unwrap_err();
        assert!(err.is_timeout());
        assert!(!err.is_fetch());
    }

    #[test]
    fn test_decode_detects_windows_1252_without_charset() {
        let body = b"<html><body><p>Caf\xe9 cr\xe8me \xe0 la fa\xe7on fran\xe7aise, d\xe9j\xe0 r\xe9serv\xe9e pour l'\xe9t\xe9.</p></body></html>";
        assert_eq!(
            decode_body(body, Some("text/html")),
            "<html><body><p>Café crème à la façon française, déjà réservée pour l'été.</p></body></html>"
        );
    }

    #[test]
    fn test_fetch_decodes_body_without_charset() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/latin");
            then.status(200)
                .header("content-type", "text/html")
                .body(b"<p>Avis de recrutement: d\xe9lai prolong\xe9 jusqu'\xe0 f\xe9vrier.</p>".to_vec());
        });

        let body = fetch(&create_test_client(), &server.url("/latin")).unwrap();
        assert_eq!(body, "<p>Avis de recrutement: délai prolongé jusqu'à février.</p>");
    }

    #[test]
    fn test_extract_charset() {
        assert_eq!(
            extract_charset("text/html; charset=\"UTF-8\""),
            Some("utf-8".to_string())
        );
        assert_eq!(extract_charset("text/html"), None);
    }
}
