use serde::Serialize;

use super::CompanyRecord;

/// Normalized intelligence extracted from one company's website. Every field
/// is always present; empty lists and a zero score mean "nothing found",
/// while `scraping_success == false` plus `scraping_error` means "could not
/// evaluate".
///
/// Each category list is deduplicated and holds at most 5 entries
/// (3 for budget indicators, 2 for business context).
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntelligenceProfile {
    pub infrastructure_needs: Vec<String>,
    pub growth_indicators: Vec<String>,
    pub technical_pain_points: Vec<String>,
    pub decision_makers: Vec<String>,
    pub tech_stack: Vec<String>,
    pub hardware_opportunities: Vec<String>,
    pub urgency_signals: Vec<String>,
    pub company_scale: Vec<String>,
    pub budget_indicators: Vec<String>,
    pub business_context: Vec<String>,
    pub industry_context: Vec<String>,
    pub scraping_success: bool,
    pub scraping_error: Option<String>,
    pub content_preview: String,
    pub hardware_readiness_score: u8,
}

impl IntelligenceProfile {
    /// Failure profile: all categories empty, score zero, error recorded.
    pub fn failed(error: impl Into<String>) -> Self {
        IntelligenceProfile {
            scraping_error: Some(error.into()),
            ..Default::default()
        }
    }
}

/// One batch output entry: the input record with its intelligence attached.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCompany {
    #[serde(flatten)]
    pub company: CompanyRecord,
    pub hardware_intelligence: IntelligenceProfile,
}
