//! Docket-number patterns for STF case identifiers.

use std::sync::LazyLock;

use regex::Regex;

/// "ADPF 54"-style code: 2-4 uppercase letters, a space, the case number.
static DOCKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]{2,4}\s\d+").unwrap());

/// Known STF case classes, used to spot docket references inside free text.
static DOCKET_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(ADI|ADPF|HC|RE|MS|RCL|IF|ACO|ADC|ADO|MI|PET|AP|Inq)\s+\d+").unwrap()
});

/// Extract the docket number from a result title.
///
/// Takes the first match; empty string when the title carries none.
pub fn docket_from_title(title: &str) -> String {
    DOCKET
        .find(title)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Find a docket reference in a free-text consulta, case-insensitively.
///
/// Returns the reference as written by the user ("adpf 54" stays lowercase),
/// since the search endpoint matches regardless of case.
pub fn find_docket_reference(text: &str) -> Option<String> {
    DOCKET_REFERENCE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docket_from_plain_title() {
        assert_eq!(docket_from_title("ADPF 54 / DF - DISTRITO FEDERAL"), "ADPF 54");
    }

    #[test]
    fn docket_takes_first_match() {
        assert_eq!(docket_from_title("RE 635659 e ADI 4277"), "RE 635659");
    }

    #[test]
    fn docket_absent_yields_empty() {
        assert_eq!(docket_from_title("Ementa sem número de processo"), "");
    }

    #[test]
    fn docket_extraction_is_idempotent() {
        let first = docket_from_title("HC 124306 / RJ - RIO DE JANEIRO");
        assert_eq!(docket_from_title(&first), first);
    }

    #[test]
    fn reference_found_case_insensitively() {
        assert_eq!(
            find_docket_reference("qual foi a decisão na adpf 54?"),
            Some("adpf 54".to_string())
        );
    }

    #[test]
    fn reference_absent_in_topical_consulta() {
        assert_eq!(
            find_docket_reference("entendimento sobre aborto de anencéfalos"),
            None
        );
    }

    #[test]
    fn reference_matches_known_classes_only() {
        assert_eq!(find_docket_reference("processo XYZ 123"), None);
        assert_eq!(
            find_docket_reference("na Rcl 4335 o STF discutiu"),
            Some("Rcl 4335".to_string())
        );
    }
}
