use crate::domain::IntelligenceProfile;

/// Per-match weight and per-category cap. Fixed policy table; the caps sum
/// to exactly 100. Categories not listed here never contribute.
///
/// | category             | weight | cap |
/// |----------------------|--------|-----|
/// | infrastructure_needs |     10 |  30 |
/// | growth_indicators    |      8 |  25 |
/// | technical_pain_points|      7 |  20 |
/// | urgency_signals      |     15 |  15 |
/// | budget_indicators    |     10 |  10 |
const SCORE_POLICY: &[(Category, u32, u32)] = &[
    (Category::InfrastructureNeeds, 10, 30),
    (Category::GrowthIndicators, 8, 25),
    (Category::TechnicalPainPoints, 7, 20),
    (Category::UrgencySignals, 15, 15),
    (Category::BudgetIndicators, 10, 10),
];

#[derive(Clone, Copy)]
enum Category {
    InfrastructureNeeds,
    GrowthIndicators,
    TechnicalPainPoints,
    UrgencySignals,
    BudgetIndicators,
}

impl Category {
    fn count(self, profile: &IntelligenceProfile) -> u32 {
        let list = match self {
            Category::InfrastructureNeeds => &profile.infrastructure_needs,
            Category::GrowthIndicators => &profile.growth_indicators,
            Category::TechnicalPainPoints => &profile.technical_pain_points,
            Category::UrgencySignals => &profile.urgency_signals,
            Category::BudgetIndicators => &profile.budget_indicators,
        };
        list.len() as u32
    }
}

/// Deterministic weighted sum over the category lists, each term capped
/// before summing, the total capped at 100. Pure function of the lists:
/// recomputing from the same profile always yields the same score.
pub fn hardware_readiness_score(profile: &IntelligenceProfile) -> u8 {
    let score: u32 = SCORE_POLICY
        .iter()
        .map(|&(category, weight, cap)| (category.count(profile) * weight).min(cap))
        .sum();

    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use crate::domain::IntelligenceProfile;

    use super::hardware_readiness_score;

    fn entries(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("signal {}", i)).collect()
    }

    #[test]
    fn empty_profile_scores_zero() {
        assert_eq!(hardware_readiness_score(&IntelligenceProfile::default()), 0);
    }

    #[test]
    fn score_is_bounded_and_idempotent() {
        let profile = IntelligenceProfile {
            infrastructure_needs: entries(5),
            growth_indicators: entries(5),
            technical_pain_points: entries(5),
            urgency_signals: entries(5),
            budget_indicators: entries(3),
            ..Default::default()
        };

        let first = hardware_readiness_score(&profile);
        let second = hardware_readiness_score(&profile);

        assert_eq!(first, second);
        assert_eq!(first, 100);
    }

    #[test]
    fn each_category_cap_is_applied_independently() {
        let profile = IntelligenceProfile {
            infrastructure_needs: entries(4), // 40 capped to 30
            ..Default::default()
        };
        assert_eq!(hardware_readiness_score(&profile), 30);

        let profile = IntelligenceProfile {
            urgency_signals: entries(3), // 45 capped to 15
            ..Default::default()
        };
        assert_eq!(hardware_readiness_score(&profile), 15);

        let profile = IntelligenceProfile {
            budget_indicators: entries(2), // 20 capped to 10
            ..Default::default()
        };
        assert_eq!(hardware_readiness_score(&profile), 10);
    }

    #[test]
    fn weighted_sum_matches_the_policy_table() {
        let profile = IntelligenceProfile {
            infrastructure_needs: entries(2), // 20
            growth_indicators: entries(1),    // 8
            technical_pain_points: entries(2), // 14
            ..Default::default()
        };

        assert_eq!(hardware_readiness_score(&profile), 42);
    }

    #[test]
    fn unlisted_categories_do_not_contribute() {
        let profile = IntelligenceProfile {
            decision_makers: entries(5),
            tech_stack: entries(5),
            hardware_opportunities: entries(5),
            company_scale: entries(5),
            industry_context: entries(5),
            ..Default::default()
        };

        assert_eq!(hardware_readiness_score(&profile), 0);
    }

    #[test]
    fn growth_plus_urgency_scenario_reaches_threshold() {
        let profile = IntelligenceProfile {
            growth_indicators: entries(1),
            urgency_signals: entries(1),
            ..Default::default()
        };

        assert!(hardware_readiness_score(&profile) >= 23);
    }
}
