use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::domain::IntelligenceProfile;

use super::patterns;

/// Most matched categories keep at most this many entries.
const MAX_MATCHES_PER_CATEGORY: usize = 5;
const MAX_BUDGET_INDICATORS: usize = 3;
const MAX_BUSINESS_PHRASES: usize = 2;

/// Matches shorter than this are noise (stray words, collapsed captures).
const MIN_MATCH_LEN: usize = 5;
const MIN_PHRASE_LEN: usize = 10;

const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ':', ';'];

static INFRASTRUCTURE: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(patterns::INFRASTRUCTURE_PATTERNS));
static GROWTH: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(patterns::GROWTH_PATTERNS));
static PAIN_POINTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(patterns::PAIN_POINT_PATTERNS));
static DECISION_MAKERS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(patterns::DECISION_MAKER_PATTERNS));
static TECH_STACK: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(patterns::TECH_STACK_PATTERNS));
static HARDWARE_OPPORTUNITIES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(patterns::HARDWARE_OPPORTUNITY_PATTERNS));
static URGENCY: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(patterns::URGENCY_PATTERNS));
static COMPANY_SCALE: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(patterns::COMPANY_SCALE_PATTERNS));
static BUDGET: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(patterns::BUDGET_PATTERNS));
static BUSINESS_CONTEXT: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(patterns::BUSINESS_CONTEXT_PATTERNS));

// Invalid patterns are dropped rather than aborting the category.
fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .ok()
        })
        .collect()
}

/// Run every pattern group over the concatenated page text and build the
/// category lists of a fresh profile. Success flag, preview and score are
/// the orchestrator's responsibility.
pub fn extract_signals(content: &str) -> IntelligenceProfile {
    let content = content.to_lowercase();

    IntelligenceProfile {
        infrastructure_needs: pattern_matches(&content, &INFRASTRUCTURE),
        growth_indicators: pattern_matches(&content, &GROWTH),
        technical_pain_points: pattern_matches(&content, &PAIN_POINTS),
        decision_makers: pattern_matches(&content, &DECISION_MAKERS),
        tech_stack: pattern_matches(&content, &TECH_STACK),
        hardware_opportunities: pattern_matches(&content, &HARDWARE_OPPORTUNITIES),
        urgency_signals: pattern_matches(&content, &URGENCY),
        company_scale: pattern_matches(&content, &COMPANY_SCALE),
        budget_indicators: budget_indicators(&content),
        business_context: business_context(&content),
        industry_context: industry_context(&content),
        ..Default::default()
    }
}

// Patterns run in table order; tuple captures collapse into one string,
// entries dedupe case-sensitively before the cap applies.
fn pattern_matches(content: &str, patterns: &[Regex]) -> Vec<String> {
    let mut matches: Vec<String> = vec![];

    for pattern in patterns {
        for captures in pattern.captures_iter(content) {
            let raw = if captures.len() > 1 {
                (1..captures.len())
                    .filter_map(|i| captures.get(i))
                    .map(|group| group.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            } else {
                captures[0].to_string()
            };

            let clean = raw.trim().trim_end_matches(TRAILING_PUNCTUATION).to_string();
            if clean.len() > MIN_MATCH_LEN && !matches.contains(&clean) {
                matches.push(clean);
                if matches.len() >= MAX_MATCHES_PER_CATEGORY {
                    break;
                }
            }
        }
    }

    matches.truncate(MAX_MATCHES_PER_CATEGORY);
    matches
}

/// Financial amounts get a synthetic rendering instead of the raw match.
fn budget_indicators(content: &str) -> Vec<String> {
    let mut indicators: Vec<String> = vec![];

    for pattern in BUDGET.iter() {
        if indicators.len() >= MAX_BUDGET_INDICATORS {
            break;
        }
        for captures in pattern.captures_iter(content) {
            if let Some(amount) = captures.get(1) {
                indicators.push(format!("Financial indicator: ${}", amount.as_str()));
                if indicators.len() >= MAX_BUDGET_INDICATORS {
                    break;
                }
            }
        }
    }

    indicators.truncate(MAX_BUDGET_INDICATORS);
    indicators
}

/// Free-text mission/specialization phrases for outreach personalization.
fn business_context(content: &str) -> Vec<String> {
    let mut phrases: Vec<String> = vec![];

    for pattern in BUSINESS_CONTEXT.iter() {
        if phrases.len() >= MAX_BUSINESS_PHRASES {
            break;
        }
        for captures in pattern.captures_iter(content) {
            if let Some(phrase) = captures.get(1) {
                let clean = phrase
                    .as_str()
                    .trim()
                    .trim_end_matches(TRAILING_PUNCTUATION)
                    .to_string();
                if clean.len() > MIN_PHRASE_LEN {
                    phrases.push(clean);
                }
                if phrases.len() >= MAX_BUSINESS_PHRASES {
                    break;
                }
            }
        }
    }

    phrases
}

/// Industry tags by plain keyword presence, one tag each, in table order.
fn industry_context(content: &str) -> Vec<String> {
    patterns::INDUSTRY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| content.contains(keyword)))
        .map(|(industry, _)| industry.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::extract_signals;

    #[test]
    fn empty_text_yields_empty_profile() {
        let profile = extract_signals("");

        assert!(profile.infrastructure_needs.is_empty());
        assert!(profile.growth_indicators.is_empty());
        assert!(profile.technical_pain_points.is_empty());
        assert!(profile.urgency_signals.is_empty());
        assert!(profile.budget_indicators.is_empty());
        assert!(profile.business_context.is_empty());
        assert!(profile.industry_context.is_empty());
    }

    #[test]
    fn growth_and_urgency_phrases_are_detected() {
        let text = "We are expanding our engineering team and have an urgent need for new servers.";
        let profile = extract_signals(text);

        assert!(!profile.growth_indicators.is_empty());
        assert!(!profile.urgency_signals.is_empty());
    }

    #[test]
    fn infrastructure_needs_are_extracted_from_lowered_text() {
        let profile = extract_signals("Our SERVER NEEDS are growing and we have legacy hardware.");

        assert!(profile
            .infrastructure_needs
            .iter()
            .any(|m| m.contains("server needs")));
        assert!(profile
            .infrastructure_needs
            .iter()
            .any(|m| m.contains("legacy hardware")));
    }

    #[test]
    fn category_lists_are_deduplicated_and_capped() {
        let text = "server needs. server needs. hosting needs. cloud needs. \
                    infrastructure needs. hardware needs. data center needs. server issues."
            .repeat(3);
        let profile = extract_signals(&text);

        assert!(profile.infrastructure_needs.len() <= 5);
        let mut unique = profile.infrastructure_needs.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), profile.infrastructure_needs.len());
    }

    #[test]
    fn budget_indicators_use_the_synthetic_rendering() {
        let text = "Last year we raised $2.5 million on a budget of $400,000.";
        let profile = extract_signals(text);

        assert!(!profile.budget_indicators.is_empty());
        assert!(profile.budget_indicators.len() <= 3);
        let shape = Regex::new(r"^Financial indicator: \$[\d,.]+$").unwrap();
        for indicator in &profile.budget_indicators {
            assert!(shape.is_match(indicator), "bad indicator: {}", indicator);
        }
    }

    #[test]
    fn business_context_captures_mission_phrases() {
        let text = "Our mission is to modernize logistics for regional carriers. \
                    We specialize in fleet telemetry and route planning.";
        let profile = extract_signals(text);

        assert!(!profile.business_context.is_empty());
        assert!(profile.business_context.len() <= 2);
        assert!(profile.business_context[0].contains("logistics"));
    }

    #[test]
    fn industry_tags_are_emitted_once_in_table_order() {
        let text = "A healthcare SaaS startup handling payments and clinical records, \
                    built as a subscription cloud platform for early-stage founders.";
        let profile = extract_signals(text);

        assert_eq!(
            profile.industry_context,
            vec!["fintech", "healthcare", "saas", "startup"]
        );
    }

    #[test]
    fn short_matches_are_discarded() {
        // "rfp" matches the urgency vendor pattern but is below the
        // minimum match length.
        let profile = extract_signals("rfp");

        assert!(profile.urgency_signals.is_empty());
    }
}
