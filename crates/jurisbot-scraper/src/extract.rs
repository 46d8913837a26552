//! HTML extraction: search-result items and detail documents into records.
//!
//! Parsing is tolerant by construction — malformed markup degrades to an
//! empty tree and therefore to zero records, never to an error. Field
//! extraction is per-item: one bad item (or one bad field) never aborts the
//! rest of the batch.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use jurisbot_core::{
    docket_from_title, truncate_summary, DetailRecord, Party, SearchRecord, SUMMARY_MAX,
};

use crate::error::ScrapeError;
use crate::query::BASE_URL;

// Selectors encode the live page structure and must stay bit-exact.
static RESULT_ITEM: LazyLock<Selector> = LazyLock::new(|| sel("div.search-result-item"));
static RESULT_TITLE: LazyLock<Selector> = LazyLock::new(|| sel("h4.search-result-title"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| sel("a"));
static RESULT_METADATA: LazyLock<Selector> = LazyLock::new(|| sel("div.search-result-metadata"));
static METADATA_SPAN: LazyLock<Selector> = LazyLock::new(|| sel("span"));
static RESULT_TEXT: LazyLock<Selector> = LazyLock::new(|| sel("div.search-result-text"));

static DOC_TITLE: LazyLock<Selector> = LazyLock::new(|| sel("h1.document-title"));
static DOC_METADATA_ITEM: LazyLock<Selector> = LazyLock::new(|| sel("div.document-metadata-item"));
static DOC_METADATA_LABEL: LazyLock<Selector> =
    LazyLock::new(|| sel("div.document-metadata-item-label"));
static DOC_METADATA_VALUE: LazyLock<Selector> =
    LazyLock::new(|| sel("div.document-metadata-item-value"));
static DOC_EMENTA: LazyLock<Selector> = LazyLock::new(|| sel("div.document-ementa"));
static DOC_DECISAO: LazyLock<Selector> = LazyLock::new(|| sel("div.document-decisao"));
static DOC_PARTES: LazyLock<Selector> = LazyLock::new(|| sel("div.document-partes"));
static PARTE_ITEM: LazyLock<Selector> = LazyLock::new(|| sel("div.document-parte-item"));
static PARTE_TIPO: LazyLock<Selector> = LazyLock::new(|| sel("div.document-parte-item-tipo"));
static PARTE_NOME: LazyLock<Selector> = LazyLock::new(|| sel("div.document-parte-item-nome"));

static RELATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Relator:\s*([^,]+)").unwrap());
static JULGAMENTO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Julgamento:\s*([^,]+)").unwrap());

fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Extract up to `max_results` records from a search results page.
///
/// Zero structural result items — or zero items surviving extraction — is a
/// legitimate empty vec, the caller's signal to fall back. Document order is
/// preserved and nothing is deduplicated.
pub fn extract_search_results(html: &str, max_results: usize) -> Vec<SearchRecord> {
    let doc = Html::parse_document(html);

    let mut records = Vec::new();
    for item in doc.select(&RESULT_ITEM).take(max_results) {
        if let Some(record) = extract_result_item(item) {
            records.push(record);
        }
    }
    records
}

/// One result container into a record.
///
/// `None` when title or link are unresolvable (the item is dropped whole);
/// every other field degrades to an empty string instead.
fn extract_result_item(item: ElementRef<'_>) -> Option<SearchRecord> {
    let title_el = item.select(&RESULT_TITLE).next()?;
    let href = title_el.select(&ANCHOR).next()?.value().attr("href")?;

    let title = element_text(title_el);
    if title.is_empty() {
        return None;
    }
    let link = format!("{BASE_URL}{href}");

    let summary = item
        .select(&RESULT_TEXT)
        .next()
        .map(|el| truncate_summary(&element_text(el), SUMMARY_MAX))
        .unwrap_or_default();

    Some(SearchRecord {
        docket_number: docket_from_title(&title),
        reporting_justice: metadata_field(item, "Relator:", &RELATOR_RE),
        judgment_date: metadata_field(item, "Julgamento:", &JULGAMENTO_RE),
        summary,
        title,
        link,
    })
}

/// Label-anchored metadata lookup, structural first, regex second.
///
/// The search page usually renders each metadata pair as its own `span`
/// ("Relator: MIN. MARCO AURÉLIO"); that structural form is authoritative.
/// When the block collapses to one run of text, the label regex over the
/// concatenated text still recovers the value up to the next comma.
fn metadata_field(item: ElementRef<'_>, label: &str, pattern: &Regex) -> String {
    let Some(block) = item.select(&RESULT_METADATA).next() else {
        return String::new();
    };

    for span in block.select(&METADATA_SPAN) {
        let text = element_text(span);
        if text.contains(label) {
            return text.replacen(label, "", 1).trim().to_string();
        }
    }

    pattern
        .captures(&element_text(block))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Extract the full document record from a detail page.
///
/// The document title element anchors the page; its absence is a hard miss
/// ([`ScrapeError::DetailRootMissing`]) so the caller falls back instead of
/// receiving a husk of empty fields.
pub fn extract_detail(html: &str, docket_number: &str) -> Result<DetailRecord, ScrapeError> {
    let doc = Html::parse_document(html);

    let title_el = doc
        .select(&DOC_TITLE)
        .next()
        .ok_or(ScrapeError::DetailRootMissing)?;

    let mut record = DetailRecord {
        docket_number: docket_number.to_string(),
        title: element_text(title_el),
        ..Default::default()
    };

    for item in doc.select(&DOC_METADATA_ITEM) {
        let (Some(label_el), Some(value_el)) = (
            item.select(&DOC_METADATA_LABEL).next(),
            item.select(&DOC_METADATA_VALUE).next(),
        ) else {
            continue;
        };

        let label = element_text(label_el).to_lowercase();
        let value = element_text(value_el);

        if label.contains("relator") {
            record.reporting_justice = value;
        } else if label.contains("julgamento") {
            record.judgment_date = value;
        } else if label.contains("publicação") {
            record.publication_date = value;
        } else if label.contains("órgão julgador") {
            record.judging_body = value;
        }
    }

    if let Some(el) = doc.select(&DOC_EMENTA).next() {
        record.summary = element_text(el);
    }
    if let Some(el) = doc.select(&DOC_DECISAO).next() {
        record.decision_text = element_text(el);
    }

    if let Some(partes) = doc.select(&DOC_PARTES).next() {
        for item in partes.select(&PARTE_ITEM) {
            let (Some(tipo), Some(nome)) = (
                item.select(&PARTE_TIPO).next(),
                item.select(&PARTE_NOME).next(),
            ) else {
                continue;
            };
            record.parties.push(Party {
                role: element_text(tipo),
                name: element_text(nome),
            });
        }
    }

    Ok(record)
}

/// Href of the first result item's title anchor, if the page has one.
///
/// Used by the detail flow to hop from the exact-phrase search page to the
/// document page itself.
pub fn first_result_href(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let item = doc.select(&RESULT_ITEM).next()?;
    let anchor = item.select(&RESULT_TITLE).next()?.select(&ANCHOR).next()?;
    anchor.value().attr("href").map(str::to_string)
}

/// Visible text of an element, trimmed at the edges.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
