//! Risk classification of a resolved item set.

use crate::types::{DetectedItem, RiskLevel};

/// Number of items at which low-risk findings escalate to medium.
pub const ESCALATION_COUNT: usize = 3;

/// Classify a set of resolved items.
///
/// High-risk categories win regardless of count. The item-count escalation
/// only applies when no medium or high category is present.
#[must_use]
pub fn classify(items: &[DetectedItem]) -> RiskLevel {
    if items.is_empty() {
        return RiskLevel::None;
    }
    if items.iter().any(|item| item.category.is_high_risk()) {
        return RiskLevel::High;
    }
    if items.iter().any(|item| item.category.is_medium_risk()) {
        return RiskLevel::Medium;
    }
    if items.len() >= ESCALATION_COUNT {
        return RiskLevel::Medium;
    }
    RiskLevel::Low
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PiiCategory, Span};

    fn items(categories: &[PiiCategory]) -> Vec<DetectedItem> {
        categories
            .iter()
            .enumerate()
            .map(|(i, &category)| {
                DetectedItem::new(category, "v", Span::new(i * 10, i * 10 + 1), 0.9)
            })
            .collect()
    }

    #[test]
    fn none_when_empty() {
        assert_eq!(classify(&[]), RiskLevel::None);
    }

    #[test]
    fn high_for_ssn_or_financial() {
        assert_eq!(classify(&items(&[PiiCategory::Ssn])), RiskLevel::High);
        assert_eq!(classify(&items(&[PiiCategory::Financial])), RiskLevel::High);
        assert_eq!(
            classify(&items(&[PiiCategory::Email, PiiCategory::Address, PiiCategory::Ssn])),
            RiskLevel::High
        );
    }

    #[test]
    fn medium_for_address_or_dob() {
        assert_eq!(classify(&items(&[PiiCategory::Address])), RiskLevel::Medium);
        assert_eq!(classify(&items(&[PiiCategory::Dob])), RiskLevel::Medium);
    }

    #[test]
    fn low_for_few_contact_items() {
        assert_eq!(classify(&items(&[PiiCategory::Email])), RiskLevel::Low);
        assert_eq!(
            classify(&items(&[PiiCategory::Email, PiiCategory::Phone])),
            RiskLevel::Low
        );
    }

    #[test]
    fn escalates_at_three_contact_items() {
        assert_eq!(
            classify(&items(&[PiiCategory::Email, PiiCategory::Phone, PiiCategory::Email])),
            RiskLevel::Medium
        );
    }
}
