//! Shared record types for STF jurisprudence lookups.
//!
//! Serialized field names follow the legacy Portuguese wire schema
//! (`titulo`, `numero_processo`, ...) shared with the fallback generator
//! and with older consumers. Every field defaults when absent so that
//! model-generated JSON decodes without schema validation.

use serde::{Deserialize, Serialize};

/// Summary length applied by the extraction pipeline.
pub const SUMMARY_MAX: usize = 500;

/// Tighter summary bound used by the compact card display.
pub const SUMMARY_MAX_COMPACT: usize = 300;

/// Marker appended to a summary cut at the maximum length.
pub const TRUNCATION_MARKER: &str = "...";

/// One matched jurisprudence entry from the acórdão search page.
///
/// Only `title` and `link` are guaranteed non-empty by the extractor; the
/// remaining fields degrade to empty strings when the page omits them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    #[serde(rename = "titulo", default)]
    pub title: String,
    /// Short case code like "ADPF 54", derived from the title.
    #[serde(rename = "numero_processo", default)]
    pub docket_number: String,
    #[serde(rename = "relator", default)]
    pub reporting_justice: String,
    /// Judgment date exactly as the source page prints it.
    #[serde(rename = "data_julgamento", default)]
    pub judgment_date: String,
    #[serde(rename = "ementa", default)]
    pub summary: String,
    #[serde(default)]
    pub link: String,
}

/// Full document record for a single docket lookup.
///
/// Constructed fresh per lookup and never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    #[serde(rename = "numero_processo", default)]
    pub docket_number: String,
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "relator", default)]
    pub reporting_justice: String,
    #[serde(rename = "data_julgamento", default)]
    pub judgment_date: String,
    #[serde(rename = "data_publicacao", default)]
    pub publication_date: String,
    #[serde(rename = "orgao_julgador", default)]
    pub judging_body: String,
    #[serde(rename = "ementa", default)]
    pub summary: String,
    #[serde(rename = "decisao", default)]
    pub decision_text: String,
    /// Parties in document order; duplicates allowed.
    #[serde(rename = "partes", default)]
    pub parties: Vec<Party>,
    #[serde(default)]
    pub link: String,
}

/// One party entry from the document's parties block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Party {
    #[serde(rename = "tipo", default)]
    pub role: String,
    #[serde(rename = "nome", default)]
    pub name: String,
}

/// Cap `text` at `max_len` characters, appending [`TRUNCATION_MARKER`] when
/// anything was cut. Counts chars, not bytes — ementas are Portuguese text
/// with multi-byte characters.
pub fn truncate_summary(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{cut}{TRUNCATION_MARKER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_record_uses_wire_names() {
        let record = SearchRecord {
            title: "ADPF 54 / DF".into(),
            docket_number: "ADPF 54".into(),
            reporting_justice: "Min. Marco Aurélio".into(),
            judgment_date: "12/04/2012".into(),
            summary: "Feto anencéfalo.".into(),
            link: "https://jurisprudencia.stf.jus.br/doc/1".into(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["titulo"], "ADPF 54 / DF");
        assert_eq!(json["numero_processo"], "ADPF 54");
        assert_eq!(json["relator"], "Min. Marco Aurélio");
        assert_eq!(json["data_julgamento"], "12/04/2012");
        assert_eq!(json["ementa"], "Feto anencéfalo.");
        assert_eq!(json["link"], "https://jurisprudencia.stf.jus.br/doc/1");
    }

    #[test]
    fn search_record_partial_json_defaults() {
        let record: SearchRecord = serde_json::from_str(r#"{"titulo": "RE 635659"}"#).unwrap();
        assert_eq!(record.title, "RE 635659");
        assert!(record.docket_number.is_empty());
        assert!(record.reporting_justice.is_empty());
        assert!(record.summary.is_empty());
        assert!(record.link.is_empty());
    }

    #[test]
    fn detail_record_roundtrip_with_parties() {
        let record = DetailRecord {
            docket_number: "ADPF 54".into(),
            title: "ARGUIÇÃO DE DESCUMPRIMENTO DE PRECEITO FUNDAMENTAL 54".into(),
            reporting_justice: "Marco Aurélio".into(),
            judgment_date: "12/04/2012".into(),
            publication_date: "30/04/2013".into(),
            judging_body: "Tribunal Pleno".into(),
            summary: "Ementa do acórdão.".into(),
            decision_text: "Julgou procedente.".into(),
            parties: vec![
                Party {
                    role: "REQTE.(S)".into(),
                    name: "CNTS".into(),
                },
                Party {
                    role: "INTDO.(A/S)".into(),
                    name: "Presidente da República".into(),
                },
            ],
            link: "https://jurisprudencia.stf.jus.br/doc/adpf54".into(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"data_publicacao\""));
        assert!(json.contains("\"orgao_julgador\""));
        assert!(json.contains("\"decisao\""));
        assert!(json.contains("\"partes\""));
        assert!(json.contains("\"tipo\""));
        assert!(json.contains("\"nome\""));

        let parsed: DetailRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
        assert_eq!(parsed.parties[1].name, "Presidente da República");
    }

    #[test]
    fn detail_record_partial_json_defaults() {
        let parsed: DetailRecord =
            serde_json::from_str(r#"{"numero_processo": "HC 124306"}"#).unwrap();
        assert_eq!(parsed.docket_number, "HC 124306");
        assert!(parsed.parties.is_empty());
        assert!(parsed.decision_text.is_empty());
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_summary("curto", 300), "curto");
    }

    #[test]
    fn truncate_at_exact_boundary_is_identity() {
        let text: String = "a".repeat(300);
        assert_eq!(truncate_summary(&text, 300), text);
    }

    #[test]
    fn truncate_appends_marker_past_boundary() {
        let text: String = "a".repeat(301);
        let out = truncate_summary(&text, 300);
        assert_eq!(out.chars().count(), 300 + TRUNCATION_MARKER.len());
        assert!(out.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        // 4 chars, 8 bytes.
        let text = "ação";
        assert_eq!(truncate_summary(text, 4), "ação");
        assert_eq!(truncate_summary(text, 3), format!("açã{TRUNCATION_MARKER}"));
    }
}
