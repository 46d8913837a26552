//! Scraping pipeline for the STF jurisprudence search service: query
//! construction, tolerant HTML extraction, and the HTTP client tying both
//! to the live site.

pub mod client;
pub mod error;
pub mod extract;
pub mod query;

pub use client::{StfClient, DEFAULT_TIMEOUT};
pub use error::ScrapeError;
pub use extract::{extract_detail, extract_search_results};
pub use query::{build_detail_lookup_url, build_search_url, BASE_URL};
