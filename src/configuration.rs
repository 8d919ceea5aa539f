use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug, Default)]
pub struct Settings {
    #[serde(default)]
    pub scraper: ScraperSettings,
}

/// Knobs consumed by the scraping pipeline. All of it is read once at
/// startup and held as immutable per-instance configuration.
#[derive(serde::Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ScraperSettings {
    /// Per-request timeout in seconds.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_seconds: u64,
    /// Per-company content budget in characters.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_content_length: usize,
    /// Worker pool size. Kept small on purpose to avoid tripping
    /// anti-scraping defenses on target sites.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_workers: usize,
    /// Per-company processing budget in seconds.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub task_timeout_seconds: u64,
    /// Fixed delay inserted before every request, in milliseconds.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub request_delay_ms: u64,
    /// Readiness score threshold used by downstream prospect filtering.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub min_score: u8,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        ScraperSettings {
            timeout_seconds: 15,
            max_content_length: 4000,
            max_workers: 2,
            task_timeout_seconds: 45,
            request_delay_ms: 500,
            min_score: 40,
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(
            config::File::from(configuration_directory.join("base.yaml")).required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use super::ScraperSettings;

    #[test]
    fn default_settings_are_sane() {
        let settings = ScraperSettings::default();

        assert_eq!(settings.max_workers, 2);
        assert_eq!(settings.task_timeout_seconds, 45);
        assert!(settings.max_content_length >= 4000);
    }

    #[test]
    fn numeric_fields_accept_strings() {
        let settings: ScraperSettings =
            serde_json::from_str(r#"{"timeout_seconds": "20", "max_workers": "4"}"#).unwrap();

        assert_eq!(settings.timeout_seconds, 20);
        assert_eq!(settings.max_workers, 4);
        assert_eq!(settings.max_content_length, 4000);
    }
}
