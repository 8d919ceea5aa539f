use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;

/// Company record as produced by the upstream search collaborator or loaded
/// from a JSON array file. Everything except `name` is optional; a record is
/// only scrapeable when it resolves to a website URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub employee_count: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub founded_year: Option<u32>,
}

impl CompanyRecord {
    /// Resolve the address to crawl: the explicit website wins, otherwise
    /// the bare domain is promoted to an https URL.
    pub fn website_url(&self) -> Option<String> {
        match self.website.as_deref().filter(|w| !w.trim().is_empty()) {
            Some(website) => Some(website.trim().to_string()),
            None => self
                .domain
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .map(|d| format!("https://{}", d.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CompanyRecord;

    #[test]
    fn deserializes_search_api_record() {
        let raw = r#"{
            "name": "TechFlow Solutions",
            "website": "https://techflow.example.com",
            "domain": "techflow.example.com",
            "industry": "Software Development",
            "employee_count": "75",
            "location": "San Francisco, CA",
            "founded_year": 2018
        }"#;
        let company: CompanyRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(company.name, "TechFlow Solutions");
        assert_eq!(company.employee_count, Some(75));
        assert_eq!(company.founded_year, Some(2018));
        assert_eq!(
            company.website_url().unwrap(),
            "https://techflow.example.com"
        );
    }

    #[test]
    fn missing_fields_default_to_none() {
        let company: CompanyRecord = serde_json::from_str(r#"{"name": "Acme"}"#).unwrap();

        assert!(company.website.is_none());
        assert!(company.website_url().is_none());
    }

    #[test]
    fn bare_domain_is_promoted_to_https() {
        let company: CompanyRecord =
            serde_json::from_str(r#"{"name": "Acme", "domain": "acme.io"}"#).unwrap();

        assert_eq!(company.website_url().unwrap(), "https://acme.io");
    }

    #[test]
    fn blank_website_falls_back_to_domain() {
        let company: CompanyRecord =
            serde_json::from_str(r#"{"name": "Acme", "website": " ", "domain": "acme.io"}"#)
                .unwrap();

        assert_eq!(company.website_url().unwrap(), "https://acme.io");
    }
}
