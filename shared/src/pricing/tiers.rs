//! Discount tier resolution
//!
//! The tier table is data: adding a tier never needs a code change. The
//! applicable tier is the qualifying rule with the highest floor, where a rule
//! qualifies when `rule.min <= guest_count`. Table order is irrelevant.

use serde::{Deserialize, Serialize};

use super::types::DiscountRule;

/// Pick the rule with the largest `min` not exceeding `guest_count`
pub fn applicable_rule(rules: &[DiscountRule], guest_count: u32) -> Option<&DiscountRule> {
    rules
        .iter()
        .filter(|rule| rule.min <= guest_count)
        .max_by_key(|rule| rule.min)
}

/// Discount percentage granted by the tier table for `guest_count`
///
/// Returns `0.0` when no rule qualifies. Non-finite discounts count as `0.0`.
pub fn resolve_discount_percent(rules: &[DiscountRule], guest_count: u32) -> f64 {
    applicable_rule(rules, guest_count)
        .map(|rule| finite_or_zero(rule.discount))
        .unwrap_or(0.0)
}

/// The first tier above the current guest count
pub fn next_rule(rules: &[DiscountRule], guest_count: u32) -> Option<&DiscountRule> {
    rules
        .iter()
        .filter(|rule| rule.min > guest_count)
        .min_by_key(|rule| rule.min)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Settings-page preview of what a guest count earns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountPreview {
    pub guest_count: u32,
    pub discount_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_rule: Option<DiscountRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_tier: Option<NextTier>,
}

/// Upsell hint: how many more guests unlock the next tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextTier {
    pub min: u32,
    pub discount: f64,
    pub guests_needed: u32,
}

/// Build the settings preview for one guest count
pub fn preview_discount(rules: &[DiscountRule], guest_count: u32) -> DiscountPreview {
    let applied_rule = applicable_rule(rules, guest_count).copied();
    let next_tier = next_rule(rules, guest_count).map(|rule| NextTier {
        min: rule.min,
        discount: finite_or_zero(rule.discount),
        guests_needed: rule.min - guest_count,
    });

    DiscountPreview {
        guest_count,
        discount_percent: resolve_discount_percent(rules, guest_count),
        applied_rule,
        next_tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers() -> Vec<DiscountRule> {
        vec![
            DiscountRule::new(1, 0.0),
            DiscountRule::new(10, 5.0),
            DiscountRule::new(50, 10.0),
        ]
    }

    #[test]
    fn test_highest_qualifying_floor_wins() {
        let rules = tiers();
        assert_eq!(resolve_discount_percent(&rules, 10), 5.0);
        assert_eq!(resolve_discount_percent(&rules, 49), 5.0);
        assert_eq!(resolve_discount_percent(&rules, 50), 10.0);
        assert_eq!(resolve_discount_percent(&rules, 500), 10.0);
        assert_eq!(resolve_discount_percent(&rules, 0), 0.0);
    }

    #[test]
    fn test_table_order_is_irrelevant() {
        let mut rules = tiers();
        rules.reverse();
        assert_eq!(resolve_discount_percent(&rules, 10), 5.0);
        rules.swap(0, 1);
        assert_eq!(resolve_discount_percent(&rules, 50), 10.0);
    }

    #[test]
    fn test_no_rules() {
        assert_eq!(resolve_discount_percent(&[], 100), 0.0);
        assert!(applicable_rule(&[], 100).is_none());
    }

    #[test]
    fn test_non_finite_discount_counts_as_zero() {
        let rules = vec![DiscountRule::new(1, f64::NAN)];
        assert_eq!(resolve_discount_percent(&rules, 5), 0.0);
    }

    #[test]
    fn test_preview_with_next_tier() {
        let preview = preview_discount(&tiers(), 30);
        assert_eq!(preview.discount_percent, 5.0);
        assert_eq!(preview.applied_rule, Some(DiscountRule::new(10, 5.0)));
        assert_eq!(
            preview.next_tier,
            Some(NextTier {
                min: 50,
                discount: 10.0,
                guests_needed: 20,
            })
        );
    }

    #[test]
    fn test_preview_top_tier_has_no_next() {
        let preview = preview_discount(&tiers(), 80);
        assert_eq!(preview.discount_percent, 10.0);
        assert!(preview.next_tier.is_none());
    }

    #[test]
    fn test_preview_below_every_tier() {
        let rules = vec![DiscountRule::new(20, 3.0)];
        let preview = preview_discount(&rules, 0);
        assert_eq!(preview.discount_percent, 0.0);
        assert!(preview.applied_rule.is_none());
        assert_eq!(preview.next_tier.unwrap().guests_needed, 20);
    }
}
