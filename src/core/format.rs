use crate::core::matcher::MatchResult;
use crate::models::SchemeRecord;
use crate::services::CatalogError;

/// Text returned when no scheme matches the profile
pub const NO_MATCH_TEXT: &str = "No schemes found for this profile.";

/// Render one matching scheme
///
/// ```text
/// - PM Scholarship (Benefit: Rs 12,000 per year)
///   Documents: Aadhaar, Income certificate
/// ```
pub fn format_scheme(scheme: &SchemeRecord) -> String {
    let mut entry = format!("- {} (Benefit: {})", scheme.name, scheme.benefits);
    if !scheme.documents.is_empty() {
        entry.push_str("\n  Documents: ");
        entry.push_str(&scheme.documents.join(", "));
    }
    entry
}

/// Render a match result as the text block handed back to the agent
pub fn format_matches(result: &MatchResult<'_>) -> String {
    if result.is_empty() {
        return NO_MATCH_TEXT.to_string();
    }

    result
        .schemes
        .iter()
        .map(|scheme| format_scheme(scheme))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a catalog failure for the text contract
pub fn format_catalog_error(err: &CatalogError) -> String {
    format!("Error: {}", err)
}
