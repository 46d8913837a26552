//! Search-endpoint URL construction.
//!
//! Pure string building; cannot fail for any input. The fixed parameters
//! mirror what the site's own search form submits: acórdão collection,
//! synonym and plural expansion, first page, relevance-descending sort.

/// Root of the STF jurisprudence site; result hrefs are relative to it.
pub const BASE_URL: &str = "https://jurisprudencia.stf.jus.br";

const SEARCH_PATH: &str = "/pages/search";

/// Build the acórdão search URL for a free-text query.
///
/// `page_size` bounds how many results the server is asked for; the server
/// bound is advisory, so callers truncate client-side as well.
pub fn build_search_url(query: &str, page_size: usize) -> String {
    format!(
        "{BASE_URL}{SEARCH_PATH}?base=acordaos&sinonimo=true&plural=true&page=1&pageSize={page_size}&sort=_score&sortBy=desc&query={}",
        urlencoding::encode(query)
    )
}

/// Build the lookup URL for one docket number.
///
/// The docket is wrapped in literal quotes before encoding so the server
/// matches the phrase as a whole, and the page size is pinned to a single
/// result.
pub fn build_detail_lookup_url(docket_number: &str) -> String {
    build_search_url(&format!("\"{docket_number}\""), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_carries_fixed_parameters() {
        let url = build_search_url("anencefalia", 5);
        assert!(url.starts_with("https://jurisprudencia.stf.jus.br/pages/search?"));
        assert!(url.contains("base=acordaos"));
        assert!(url.contains("sinonimo=true"));
        assert!(url.contains("plural=true"));
        assert!(url.contains("page=1"));
        assert!(url.contains("pageSize=5"));
        assert!(url.contains("sort=_score"));
        assert!(url.contains("sortBy=desc"));
        assert!(url.ends_with("query=anencefalia"));
    }

    #[test]
    fn search_url_percent_encodes_spaces() {
        let url = build_search_url("aborto anencefalia", 3);
        assert!(url.ends_with("query=aborto%20anencefalia"));
    }

    #[test]
    fn search_url_percent_encodes_accents() {
        let url = build_search_url("decisão união estável", 5);
        assert!(url.ends_with("query=decis%C3%A3o%20uni%C3%A3o%20est%C3%A1vel"));
    }

    #[test]
    fn search_url_percent_encodes_quotes() {
        let url = build_search_url("\"repercussão geral\"", 5);
        assert!(url.ends_with("query=%22repercuss%C3%A3o%20geral%22"));
    }

    #[test]
    fn empty_query_is_legal() {
        let url = build_search_url("", 5);
        assert!(url.ends_with("query="));
    }

    #[test]
    fn detail_url_quotes_docket_and_pins_page_size() {
        let url = build_detail_lookup_url("ADPF 54");
        assert!(url.contains("pageSize=1"));
        assert!(url.ends_with("query=%22ADPF%2054%22"));
    }
}
