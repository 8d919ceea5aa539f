pub mod content_extractor;
pub mod fetcher;
pub mod lead_scraper;
pub mod page_selector;
pub mod patterns;
pub mod prospects;
pub mod scorer;
pub mod signal_extractor;

pub use fetcher::*;
pub use lead_scraper::*;
pub use prospects::*;
pub use scorer::*;
pub use signal_extractor::*;
