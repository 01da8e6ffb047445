//! The pricing engine.
//!
//! A quote total is a pure function of (tier, add-ons, timeline): callers
//! recompute it on every selection change and may do so redundantly.

use serde::Serialize;

use crate::domain::catalog::{AddOnKind, Catalog, ServiceTier};

use super::TimelineRate;

/// Computes the total price for a tier, a set of add-ons, and a
/// requested timeline.
///
/// The timeline multiplier applies to the running total, add-ons
/// included. The result is unrounded; rounding to minor units happens at
/// presentation time only. Timeline bounds are the caller's concern: the
/// two-branch rate rule is total over any day count.
pub fn compute_total(tier: &ServiceTier, add_ons: &[AddOnKind], timeline_days: u32) -> f64 {
    let mut total = tier.base_price as f64;
    total += add_ons
        .iter()
        .map(|kind| Catalog::add_on(*kind).price as f64)
        .sum::<f64>();
    total * TimelineRate::from_days(timeline_days).multiplier()
}

/// Itemized price for display next to the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_price: f64,
    pub add_ons_price: f64,
    pub rate: TimelineRate,
    pub total: f64,
}

impl PriceBreakdown {
    /// Builds the itemized view for a tier/add-ons/timeline combination.
    pub fn compute(tier: &ServiceTier, add_ons: &[AddOnKind], timeline_days: u32) -> Self {
        let base_price = tier.base_price as f64;
        let add_ons_price = add_ons
            .iter()
            .map(|kind| Catalog::add_on(*kind).price as f64)
            .sum::<f64>();
        let rate = TimelineRate::from_days(timeline_days);
        Self {
            base_price,
            add_ons_price,
            rate,
            total: (base_price + add_ons_price) * rate.multiplier(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ServiceCategory, TierLevel};
    use proptest::prelude::*;

    fn web_business() -> &'static ServiceTier {
        Catalog::tier(ServiceCategory::WebDevelopment, TierLevel::Business)
    }

    #[test]
    fn neutral_timeline_is_base_plus_add_ons() {
        let total = compute_total(web_business(), &[AddOnKind::Seo], 30);
        assert!((total - (45_000.0 + 8_000.0)).abs() < 1e-9);
    }

    #[test]
    fn rush_timeline_applies_30_percent_surcharge() {
        // base 45000 + add-ons [8000, 12000] at 10 days
        let total = compute_total(
            web_business(),
            &[AddOnKind::Seo, AddOnKind::LogoDesign],
            10,
        );
        assert!((total - 84_500.0).abs() < 1e-9);
    }

    #[test]
    fn extended_timeline_applies_10_percent_discount() {
        // same tier/add-ons at 90 days
        let total = compute_total(
            web_business(),
            &[AddOnKind::Seo, AddOnKind::LogoDesign],
            90,
        );
        assert!((total - 58_500.0).abs() < 1e-9);
    }

    #[test]
    fn empty_add_on_list_is_allowed() {
        let total = compute_total(web_business(), &[], 30);
        assert!((total - 45_000.0).abs() < 1e-9);
    }

    #[test]
    fn surcharge_applies_to_add_ons_too() {
        // The multiplier is applied after summing add-ons, so a rush
        // order pays 130% of the add-on price as well.
        let with_add_on = compute_total(web_business(), &[AddOnKind::LogoDesign], 10);
        let without = compute_total(web_business(), &[], 10);
        assert!((with_add_on - without - 12_000.0 * 1.30).abs() < 1e-9);
    }

    #[test]
    fn breakdown_total_matches_engine() {
        let add_ons = [AddOnKind::Seo, AddOnKind::Analytics];
        let breakdown = PriceBreakdown::compute(web_business(), &add_ons, 10);
        let total = compute_total(web_business(), &add_ons, 10);
        assert!((breakdown.total - total).abs() < 1e-9);
        assert_eq!(breakdown.rate, TimelineRate::Rush);
        assert!((breakdown.add_ons_price - 13_500.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn total_is_deterministic(
            tier_idx in 0usize..16,
            mask in 0u8..64,
            days in 0u32..200,
        ) {
            let tier = &Catalog::tiers()[tier_idx];
            let add_ons: Vec<AddOnKind> = AddOnKind::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, k)| *k)
                .collect();

            let first = compute_total(tier, &add_ons, days);
            let second = compute_total(tier, &add_ons, days);
            prop_assert_eq!(first, second);
            prop_assert!(first >= 0.0);
        }

        #[test]
        fn neutral_timeline_never_modifies_the_sum(
            tier_idx in 0usize..16,
            mask in 0u8..64,
            days in 14u32..=60,
        ) {
            let tier = &Catalog::tiers()[tier_idx];
            let add_ons: Vec<AddOnKind> = AddOnKind::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, k)| *k)
                .collect();

            let expected = tier.base_price as f64
                + add_ons
                    .iter()
                    .map(|k| Catalog::add_on(*k).price as f64)
                    .sum::<f64>();
            prop_assert_eq!(compute_total(tier, &add_ons, days), expected);
        }

        #[test]
        fn rush_always_costs_more_than_extended(
            tier_idx in 0usize..16,
            rush_days in 0u32..14,
            extended_days in 61u32..200,
        ) {
            let tier = &Catalog::tiers()[tier_idx];
            let rush = compute_total(tier, &[], rush_days);
            let extended = compute_total(tier, &[], extended_days);
            prop_assert!(rush > extended);
        }
    }
}
