use anyhow::Context;
use env_logger::Env;
use prospector::{
    configuration::get_configuration,
    domain::CompanyRecord,
    services::{prospects, LeadScraper},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "companies.json".to_string());
    let raw = std::fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read company list from {}", input_path))?;
    let companies: Vec<CompanyRecord> =
        serde_json::from_str(&raw).context("Company list is not a valid JSON array")?;

    let scraper = LeadScraper::new(configuration.scraper.clone());
    let results = scraper.process_batch(companies).await;

    let summary = prospects::summarize(&results);
    log::info!(
        "Processed {} companies, {} scraped successfully ({:.1}%)",
        summary.total_companies,
        summary.successful_scrapes,
        summary.scraping_success_rate
    );
    log::info!(
        "Potential: {} high (50+), {} medium (20-49), {} low (<20), average score {:.1}/100",
        summary.high_potential_leads,
        summary.medium_potential_leads,
        summary.low_potential_leads,
        summary.average_readiness_score
    );
    if !summary.top_infrastructure_needs.is_empty() {
        log::info!(
            "Top infrastructure needs: {}",
            summary.top_infrastructure_needs.join(", ")
        );
    }
    if !summary.top_pain_points.is_empty() {
        log::info!("Common pain points: {}", summary.top_pain_points.join(", "));
    }

    let top = prospects::top_prospects(&results, configuration.scraper.min_score);
    for (rank, prospect) in top.iter().take(5).enumerate() {
        log::info!(
            "Prospect #{}: {} (score {}/100)",
            rank + 1,
            prospect.company.name,
            prospect.hardware_intelligence.hardware_readiness_score
        );
    }

    std::fs::write(
        "hardware_leads_detailed.json",
        serde_json::to_string_pretty(&results)?,
    )
    .context("Failed to write detailed results")?;
    std::fs::write(
        "hardware_leads_prospects.json",
        serde_json::to_string_pretty(&top)?,
    )
    .context("Failed to write prospect results")?;
    log::info!(
        "Saved {} results and {} prospects",
        results.len(),
        top.len()
    );

    Ok(())
}
