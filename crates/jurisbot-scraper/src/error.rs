use thiserror::Error;

/// Failures while talking to or reading the jurisprudence site.
///
/// Every variant is a fallback trigger for the caller; an empty result list
/// is deliberately NOT an error.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("no search result for docket {0}")]
    DocketNotFound(String),
    #[error("detail page is missing its document container")]
    DetailRootMissing,
}
