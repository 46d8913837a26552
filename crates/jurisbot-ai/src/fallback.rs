//! Model-generated stand-in records for when scraping comes up empty.
//!
//! The generated JSON is decoded leniently — absent fields default, extra
//! fields are ignored, and no schema validation runs. These records are
//! heuristic by definition; the caller presents them as such.

use serde_json::Value;
use tracing::info;

use jurisbot_core::{DetailRecord, SearchRecord};

use crate::chat::{AiError, ChatClient};

const SEARCH_PERSONA: &str = "Você é um especialista em jurisprudência do STF. \
    Gere resultados realistas para uma busca, incluindo números de processos reais, \
    datas plausíveis, ministros relatores reais e ementas verossímeis.";

const DETAIL_PERSONA: &str = "Você é um especialista em jurisprudência do STF. \
    Gere detalhes realistas para um processo específico.";

/// Generates synthetic records through the chat client.
pub struct FallbackGenerator {
    chat: ChatClient,
}

impl FallbackGenerator {
    pub fn new(chat: ChatClient) -> Self {
        Self { chat }
    }

    /// Generate `max_results` synthetic search records for a query.
    pub async fn search_records(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchRecord>, AiError> {
        info!(query = query, "generating fallback search results");
        let reply = self
            .chat
            .complete_json(SEARCH_PERSONA, &search_prompt(query, max_results))
            .await?;
        parse_search_reply(&reply)
    }

    /// Generate a synthetic detail record for a docket number.
    pub async fn detail_record(&self, docket_number: &str) -> Result<DetailRecord, AiError> {
        info!(docket = docket_number, "generating fallback docket detail");
        let reply = self
            .chat
            .complete_json(DETAIL_PERSONA, &detail_prompt(docket_number))
            .await?;

        let mut record: DetailRecord = serde_json::from_str(&reply)?;
        if record.docket_number.is_empty() {
            record.docket_number = docket_number.to_string();
        }
        Ok(record)
    }
}

fn search_prompt(query: &str, max_results: usize) -> String {
    format!(
        "Gere {max_results} resultados de jurisprudência do STF sobre: {query}. \
         Formate como um JSON com campos: titulo, numero_processo, relator, \
         data_julgamento, ementa, link."
    )
}

fn detail_prompt(docket_number: &str) -> String {
    format!(
        "Gere detalhes completos para o processo {docket_number} do STF. \
         Formate como um JSON com campos: numero_processo, titulo, relator, \
         data_julgamento, data_publicacao, orgao_julgador, ementa, decisao, \
         partes (array de objetos com tipo e nome), link."
    )
}

/// Read the model's reply as records.
///
/// Models wrap the list as `{"resultados": [...]}` more often than not, but
/// a bare array shows up too; both are accepted. Items that are not objects
/// are skipped rather than failing the batch.
fn parse_search_reply(reply: &str) -> Result<Vec<SearchRecord>, AiError> {
    let value: Value = serde_json::from_str(reply)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("resultados") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_result_array() {
        let reply = r#"{"resultados": [
            {"titulo": "ADPF 54 / DF", "numero_processo": "ADPF 54", "relator": "Marco Aurélio",
             "data_julgamento": "12/04/2012", "ementa": "Feto anencéfalo.", "link": "https://stf.jus.br/1"},
            {"titulo": "ADI 3510 / DF"}
        ]}"#;

        let records = parse_search_reply(reply).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].docket_number, "ADPF 54");
        // Lenient decode: missing fields default to empty.
        assert_eq!(records[1].title, "ADI 3510 / DF");
        assert!(records[1].reporting_justice.is_empty());
    }

    #[test]
    fn parses_bare_array() {
        let reply = r#"[{"titulo": "RE 635659", "link": "https://stf.jus.br/2"}]"#;
        let records = parse_search_reply(reply).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].link, "https://stf.jus.br/2");
    }

    #[test]
    fn non_object_items_are_skipped() {
        let reply = r#"{"resultados": [{"titulo": "ADPF 54"}, "texto solto", 42]}"#;
        let records = parse_search_reply(reply).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_result_array_yields_empty() {
        let reply = r#"{"mensagem": "nenhum resultado"}"#;
        assert!(parse_search_reply(reply).unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_search_reply("não é json").is_err());
    }

    #[test]
    fn search_prompt_names_wire_fields() {
        let prompt = search_prompt("aborto anencefalia", 5);
        assert!(prompt.contains("5 resultados"));
        assert!(prompt.contains("aborto anencefalia"));
        for field in ["titulo", "numero_processo", "relator", "data_julgamento", "ementa", "link"] {
            assert!(prompt.contains(field), "prompt missing field {field}");
        }
    }

    #[test]
    fn detail_prompt_names_wire_fields() {
        let prompt = detail_prompt("ADPF 54");
        assert!(prompt.contains("ADPF 54"));
        for field in ["data_publicacao", "orgao_julgador", "decisao", "partes", "tipo", "nome"] {
            assert!(prompt.contains(field), "prompt missing field {field}");
        }
    }
}
