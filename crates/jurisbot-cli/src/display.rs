//! Card-style terminal output for jurisprudence records.

use jurisbot_core::{truncate_summary, DetailRecord, SearchRecord, SUMMARY_MAX_COMPACT};

/// Print search results as numbered cards, compact summaries.
pub fn print_search_records(records: &[SearchRecord]) {
    if records.is_empty() {
        println!("Nenhum resultado.");
        return;
    }

    for (i, record) in records.iter().enumerate() {
        println!("=== {}. {} ===", i + 1, heading(record));
        print_field("Título", &record.title);
        print_field("Relator", &record.reporting_justice);
        print_field("Julgamento", &record.judgment_date);
        print_field(
            "Ementa",
            &truncate_summary(&record.summary, SUMMARY_MAX_COMPACT),
        );
        print_field("Link", &record.link);
        println!();
    }
}

/// Print one document record as a single card, full texts.
pub fn print_detail(record: &DetailRecord) {
    println!("=== {} ===", record.docket_number);
    print_field("Título", &record.title);
    print_field("Relator", &record.reporting_justice);
    print_field("Julgamento", &record.judgment_date);
    print_field("Publicação", &record.publication_date);
    print_field("Órgão julgador", &record.judging_body);
    print_field("Link", &record.link);

    if !record.parties.is_empty() {
        println!("  Partes:");
        for party in &record.parties {
            println!("    {} — {}", party.role, party.name);
        }
    }

    print_block("Ementa", &record.summary);
    print_block("Decisão", &record.decision_text);
}

fn heading(record: &SearchRecord) -> &str {
    if record.docket_number.is_empty() {
        &record.title
    } else {
        &record.docket_number
    }
}

fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("  {label}: {value}");
    }
}

fn print_block(label: &str, value: &str) {
    if !value.is_empty() {
        println!("\n{label}:\n{value}");
    }
}
