use itertools::Itertools;
use serde::Serialize;

use crate::domain::ScoredCompany;

const TOP_MENTIONS: usize = 5;

/// Batch-level statistics for a scraping run.
#[derive(Debug, Serialize)]
pub struct ProspectSummary {
    pub total_companies: usize,
    pub successful_scrapes: usize,
    pub scraping_success_rate: f64,
    pub high_potential_leads: usize,
    pub medium_potential_leads: usize,
    pub low_potential_leads: usize,
    pub average_readiness_score: f64,
    pub top_infrastructure_needs: Vec<String>,
    pub top_pain_points: Vec<String>,
    pub top_hardware_opportunities: Vec<String>,
}

pub fn summarize(results: &[ScoredCompany]) -> ProspectSummary {
    let total = results.len();
    let successful = results
        .iter()
        .filter(|r| r.hardware_intelligence.scraping_success)
        .count();

    let scores: Vec<u8> = results
        .iter()
        .map(|r| r.hardware_intelligence.hardware_readiness_score)
        .collect();
    let high = scores.iter().filter(|&&s| s >= 50).count();
    let medium = scores.iter().filter(|&&s| (20..50).contains(&s)).count();
    let low = scores.iter().filter(|&&s| s < 20).count();
    let average = match scores.is_empty() {
        true => 0.0,
        false => scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64,
    };

    ProspectSummary {
        total_companies: total,
        successful_scrapes: successful,
        scraping_success_rate: match total {
            0 => 0.0,
            _ => successful as f64 / total as f64 * 100.0,
        },
        high_potential_leads: high,
        medium_potential_leads: medium,
        low_potential_leads: low,
        average_readiness_score: average,
        top_infrastructure_needs: top_mentions(
            results
                .iter()
                .flat_map(|r| r.hardware_intelligence.infrastructure_needs.iter()),
        ),
        top_pain_points: top_mentions(
            results
                .iter()
                .flat_map(|r| r.hardware_intelligence.technical_pain_points.iter()),
        ),
        top_hardware_opportunities: top_mentions(
            results
                .iter()
                .flat_map(|r| r.hardware_intelligence.hardware_opportunities.iter()),
        ),
    }
}

/// Companies at or above the score threshold, best first. Sorting is stable,
/// so equal scores keep input order.
pub fn top_prospects(results: &[ScoredCompany], min_score: u8) -> Vec<&ScoredCompany> {
    results
        .iter()
        .filter(|r| r.hardware_intelligence.hardware_readiness_score >= min_score)
        .sorted_by_key(|r| std::cmp::Reverse(r.hardware_intelligence.hardware_readiness_score))
        .collect()
}

/// Most-mentioned phrases across the batch, counted case-insensitively.
/// Equal counts sort alphabetically so repeated runs emit the same list.
fn top_mentions<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    items
        .map(|item| item.to_lowercase())
        .counts()
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
        .take(TOP_MENTIONS)
        .map(|(item, _count)| item)
        .collect()
}
