use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;

use crate::configuration::ScraperSettings;
use crate::domain::{CompanyRecord, IntelligenceProfile, ScoredCompany};

use super::fetcher::{normalize_url, PageFetcher};
use super::page_selector::select_pages;
use super::scorer::hardware_readiness_score;
use super::signal_extractor::extract_signals;

/// Stored as the first 500 characters of the concatenated page text.
const CONTENT_PREVIEW_LEN: usize = 500;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("company has no resolvable website")]
    NoWebsite,
    #[error("No content extracted from any pages")]
    NoContent,
    #[error("processing exceeded the {0}s task budget")]
    WorkerTimeout(u64),
    #[error("worker task failed: {0}")]
    WorkerFailed(String),
}

/// Drives the per-company pipeline and fans it out over a bounded worker
/// pool. Holds only immutable configuration; every worker builds its own
/// HTTP session.
#[derive(Clone)]
pub struct LeadScraper {
    settings: ScraperSettings,
}

impl LeadScraper {
    pub fn new(settings: ScraperSettings) -> Self {
        LeadScraper { settings }
    }

    /// Process one company: page selection, fetching under the content
    /// budget, signal extraction and scoring. Never raises; every failure
    /// is downgraded to a failed profile on the returned record.
    pub async fn process_company(&self, company: CompanyRecord) -> ScoredCompany {
        let intelligence = match self.scrape_company(&company).await {
            Ok(profile) => {
                log::info!(
                    "Extracted intelligence from {} (score {})",
                    company.name,
                    profile.hardware_readiness_score
                );
                profile
            }
            Err(e) => {
                log::error!("Error processing {}: {}", company.name, e);
                IntelligenceProfile::failed(e.to_string())
            }
        };

        ScoredCompany {
            company,
            hardware_intelligence: intelligence,
        }
    }

    async fn scrape_company(
        &self,
        company: &CompanyRecord,
    ) -> Result<IntelligenceProfile, ScrapeError> {
        let website = company.website_url().ok_or(ScrapeError::NoWebsite)?;
        let base_url = normalize_url(&website);

        // One session per company; sessions are never shared across workers.
        let fetcher = PageFetcher::new(
            Duration::from_secs(self.settings.timeout_seconds),
            Duration::from_millis(self.settings.request_delay_ms),
        );

        let pages = select_pages(&fetcher, &base_url).await;
        log::info!(
            "Hardware-focused scraping: {} ({}), {} candidate pages",
            company.name,
            base_url,
            pages.len()
        );

        // Concatenate page text in discovery order, each chunk prefixed
        // with its source URL, until the content budget is exceeded.
        let mut all_content = String::new();
        for page_url in &pages {
            match fetcher.fetch(page_url).await {
                Ok(page) => {
                    all_content.push_str(&format!("\n--- {} ---\n", page_url));
                    all_content.push_str(&page.content);
                    if all_content.chars().count() > self.settings.max_content_length {
                        break;
                    }
                }
                Err(e) => log::warn!("Skipping {}: {}", page_url, e),
            }
        }

        if all_content.trim().is_empty() {
            return Err(ScrapeError::NoContent);
        }

        let mut profile = extract_signals(&all_content);
        profile.scraping_success = true;
        profile.content_preview = all_content.chars().take(CONTENT_PREVIEW_LEN).collect();
        profile.hardware_readiness_score = hardware_readiness_score(&profile);

        Ok(profile)
    }

    /// Process a batch across a bounded worker pool. Results come back in
    /// input order regardless of completion order, and a company that times
    /// out or panics becomes a failed entry without disturbing its siblings.
    pub async fn process_batch(&self, companies: Vec<CompanyRecord>) -> Vec<ScoredCompany> {
        log::info!(
            "Starting hardware-focused scraping of {} companies with {} workers",
            companies.len(),
            self.settings.max_workers
        );

        let semaphore = Arc::new(Semaphore::new(self.settings.max_workers.max(1)));
        let task_budget_secs = self.settings.task_timeout_seconds;
        let task_budget = Duration::from_secs(task_budget_secs);

        let mut tasks = Vec::with_capacity(companies.len());
        for company in companies {
            let fallback = company.clone();
            let scraper = self.clone();
            let semaphore = semaphore.clone();
            let handle = tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
                tokio::time::timeout(task_budget, scraper.process_company(company)).await
            });
            tasks.push((fallback, handle));
        }

        let mut results = Vec::with_capacity(tasks.len());
        for (company, handle) in tasks {
            let scored = match handle.await {
                Ok(Ok(scored)) => scored,
                Ok(Err(_elapsed)) => {
                    let error = ScrapeError::WorkerTimeout(task_budget_secs);
                    log::error!("Failed to scrape {}: {}", company.name, error);
                    ScoredCompany {
                        company,
                        hardware_intelligence: IntelligenceProfile::failed(error.to_string()),
                    }
                }
                Err(join_error) => {
                    let error = ScrapeError::WorkerFailed(join_error.to_string());
                    log::error!("Failed to scrape {}: {}", company.name, error);
                    ScoredCompany {
                        company,
                        hardware_intelligence: IntelligenceProfile::failed(error.to_string()),
                    }
                }
            };
            results.push(scored);
        }

        log::info!(
            "Completed hardware intelligence extraction for {} companies",
            results.len()
        );
        results
    }
}
