//! HTTP client for the STF jurisprudence search service.
//!
//! One `reqwest::Client` per [`StfClient`] value, constructed by the caller
//! and passed around explicitly — no ambient session state. Requests are
//! sequential: build URL, GET, parse, return.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use tracing::info;

use jurisbot_core::{DetailRecord, SearchRecord};

use crate::error::ScrapeError;
use crate::extract::{extract_detail, extract_search_results, first_result_href};
use crate::query::{build_detail_lookup_url, build_search_url, BASE_URL};

/// Default request timeout; timeouts surface as transport errors and take
/// the ordinary fallback path.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Identifying headers sent with every request.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const ACCEPT_VALUE: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7";

/// Client for the jurisprudence search endpoint.
pub struct StfClient {
    client: reqwest::Client,
}

impl StfClient {
    /// Create a client with the default 30-second timeout.
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a caller-chosen request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ScrapeError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Search acórdãos matching `query`, best matches first.
    ///
    /// An empty vec is a legitimate outcome (no structural items, or none
    /// survived extraction) — the caller decides whether to fall back.
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchRecord>, ScrapeError> {
        let url = build_search_url(query, max_results);
        info!(url = %url, "searching STF jurisprudence");

        let body = self.get_html(&url).await?;
        let mut records = extract_search_results(&body, max_results);
        // The server's pageSize is advisory; enforce the bound here too.
        records.truncate(max_results);

        info!(count = records.len(), "extracted search results");
        Ok(records)
    }

    /// Resolve one docket number to its full document record.
    ///
    /// Two hops: an exact-phrase search pinned to a single result, then the
    /// document page that result links to.
    pub async fn fetch_detail(&self, docket_number: &str) -> Result<DetailRecord, ScrapeError> {
        let url = build_detail_lookup_url(docket_number);
        info!(url = %url, docket = docket_number, "looking up docket");

        let body = self.get_html(&url).await?;
        let Some(href) = first_result_href(&body) else {
            return Err(ScrapeError::DocketNotFound(docket_number.to_string()));
        };

        let document_url = format!("{BASE_URL}{href}");
        let document_body = self.get_html(&document_url).await?;

        let mut record = extract_detail(&document_body, docket_number)?;
        record.link = document_url;
        Ok(record)
    }

    async fn get_html(&self, url: &str) -> Result<String, ScrapeError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ScrapeError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.text().await?)
    }
}
