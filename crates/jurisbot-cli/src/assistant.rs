//! Consulta routing and answer generation.
//!
//! A consulta naming a docket ("o que decidiu a ADPF 54?") takes the
//! document path; anything else is treated as a topic search. Either way
//! the retrieved records become JSON context for one completion turn, and
//! the fallback generator stands in whenever the site gives nothing usable.

use chrono::Local;
use tracing::{info, warn};

use jurisbot_ai::{AiError, ChatClient, FallbackGenerator};
use jurisbot_core::{find_docket_reference, DetailRecord, SearchRecord};
use jurisbot_scraper::StfClient;

/// Results fetched per topical consulta.
const SEARCH_RESULTS: usize = 5;

pub struct Assistant {
    chat: ChatClient,
    fallback: FallbackGenerator,
    scraper: StfClient,
}

impl Assistant {
    pub fn new(chat: ChatClient, scraper: StfClient) -> Self {
        let fallback = FallbackGenerator::new(chat.clone());
        Self {
            chat,
            fallback,
            scraper,
        }
    }

    /// Answer one consulta, routing on the presence of a docket reference.
    pub async fn answer(&self, consulta: &str) -> Result<String, AiError> {
        match find_docket_reference(consulta) {
            Some(docket) => self.answer_about_docket(&docket, consulta).await,
            None => self.answer_about_topic(consulta).await,
        }
    }

    /// Scraped records, or generated ones when the site yields nothing.
    pub async fn search_with_fallback(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchRecord>, AiError> {
        match self.scraper.search(query, max_results).await {
            Ok(records) if !records.is_empty() => Ok(records),
            Ok(_) => {
                info!(query = query, "no extractable results, using fallback");
                self.fallback.search_records(query, max_results).await
            }
            Err(err) => {
                warn!(error = %err, "search failed, using fallback");
                self.fallback.search_records(query, max_results).await
            }
        }
    }

    /// Scraped document record, or a generated one on any miss.
    pub async fn detail_with_fallback(&self, docket: &str) -> Result<DetailRecord, AiError> {
        match self.scraper.fetch_detail(docket).await {
            Ok(record) => Ok(record),
            Err(err) => {
                warn!(error = %err, docket = docket, "detail lookup failed, using fallback");
                self.fallback.detail_record(docket).await
            }
        }
    }

    async fn answer_about_topic(&self, consulta: &str) -> Result<String, AiError> {
        let records = self.search_with_fallback(consulta, SEARCH_RESULTS).await?;
        let contexto = serde_json::to_string_pretty(&records)?;
        let user = format!(
            "Consulta do usuário: {consulta}\n\nJurisprudências encontradas:\n{contexto}\n\n\
             Responda à consulta do usuário com base nas jurisprudências encontradas. \
             Use uma linguagem formal e técnica apropriada para o contexto jurídico. \
             Cite os números dos processos, datas das decisões e ministros relatores \
             quando relevante. Organize as informações de forma clara e estruturada."
        );
        self.chat.complete(&system_prompt(), &user).await
    }

    async fn answer_about_docket(&self, docket: &str, consulta: &str) -> Result<String, AiError> {
        let detalhes = self.detail_with_fallback(docket).await?;
        let contexto = serde_json::to_string_pretty(&detalhes)?;
        let user = format!(
            "Consulta do usuário: {consulta}\n\nDetalhes do processo {docket}:\n{contexto}\n\n\
             Responda à consulta do usuário com base nos detalhes do processo fornecidos. \
             Use uma linguagem formal e técnica apropriada para o contexto jurídico. \
             Cite os números dos processos, datas das decisões e ministros relatores \
             quando relevante."
        );
        self.chat.complete(&system_prompt(), &user).await
    }
}

fn system_prompt() -> String {
    format!(
        "Você é JurisBot, um assistente jurídico especializado em jurisprudências do \
         Supremo Tribunal Federal (STF) do Brasil.\n\n\
         Suas responsabilidades:\n\
         1. Responder perguntas sobre jurisprudências, decisões e entendimentos do STF\n\
         2. Fornecer informações precisas e atualizadas\n\
         3. Citar os números dos processos e datas das decisões quando possível\n\
         4. Usar uma linguagem formal e técnica apropriada para o contexto jurídico\n\
         5. Organizar as informações de forma clara e estruturada\n\n\
         Hoje é {}.",
        Local::now().format("%d/%m/%Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_carries_persona_and_date() {
        let prompt = system_prompt();
        assert!(prompt.contains("JurisBot"));
        assert!(prompt.contains("Hoje é"));
        // dd/mm/yyyy
        let date = Local::now().format("%d/%m/%Y").to_string();
        assert!(prompt.contains(&date));
    }

    #[test]
    fn docket_consultas_route_to_document_path() {
        assert!(find_docket_reference("qual o resultado da ADPF 54?").is_some());
        assert!(find_docket_reference("o que o STF entende sobre drogas?").is_none());
    }
}
