//! QuoteSelection - a user's in-progress quote configuration.
//!
//! Mutated only by the explicit operations below; every price shown for
//! it is recomputed from the catalog on demand.

use std::collections::BTreeSet;

use crate::domain::catalog::{AddOnKind, Catalog, ServiceCategory, ServiceTier, TierLevel};
use crate::domain::foundation::{Currency, Money, ValidationError};

use super::{compute_total, PriceBreakdown, TimelineRate};

/// Lower bound of the timeline slider, in days.
pub const MIN_TIMELINE_DAYS: u32 = 7;
/// Upper bound of the timeline slider, in days.
pub const MAX_TIMELINE_DAYS: u32 = 120;
/// Slider position for a fresh selection; applies no rate modifier.
pub const DEFAULT_TIMELINE_DAYS: u32 = 30;

/// A user's in-progress choice on the quote form.
///
/// Holds at most one tier, and only for the selected category: switching
/// category drops the tier so a stale bundle can never be priced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSelection {
    category: ServiceCategory,
    tier: Option<TierLevel>,
    add_ons: BTreeSet<AddOnKind>,
    timeline_days: u32,
}

impl QuoteSelection {
    /// Creates a fresh selection for a service category.
    pub fn new(category: ServiceCategory) -> Self {
        Self {
            category,
            tier: None,
            add_ons: BTreeSet::new(),
            timeline_days: DEFAULT_TIMELINE_DAYS,
        }
    }

    /// The selected service category.
    pub fn category(&self) -> ServiceCategory {
        self.category
    }

    /// The selected tier level, if any.
    pub fn tier_level(&self) -> Option<TierLevel> {
        self.tier
    }

    /// The selected tier's catalog row, if a tier is selected.
    pub fn selected_tier(&self) -> Option<&'static ServiceTier> {
        self.tier.map(|level| Catalog::tier(self.category, level))
    }

    /// The selected add-ons, in stable order.
    pub fn add_ons(&self) -> Vec<AddOnKind> {
        self.add_ons.iter().copied().collect()
    }

    /// The requested delivery timeline in days.
    pub fn timeline_days(&self) -> u32 {
        self.timeline_days
    }

    /// The rate band the current timeline falls into.
    pub fn rate(&self) -> TimelineRate {
        TimelineRate::from_days(self.timeline_days)
    }

    /// Switches the service category.
    ///
    /// Dropping the tier here is what keeps the one-tier-per-category
    /// invariant: a tier from the old category can never linger.
    pub fn select_category(&mut self, category: ServiceCategory) {
        if self.category != category {
            self.category = category;
            self.tier = None;
        }
    }

    /// Selects a tier within the current category.
    pub fn select_tier(&mut self, level: TierLevel) {
        self.tier = Some(level);
    }

    /// Clears the tier selection.
    pub fn clear_tier(&mut self) {
        self.tier = None;
    }

    /// Toggles an add-on on or off. Returns true if it is now selected.
    pub fn toggle_add_on(&mut self, kind: AddOnKind) -> bool {
        if self.add_ons.remove(&kind) {
            false
        } else {
            self.add_ons.insert(kind);
            true
        }
    }

    /// Sets the requested timeline from the slider.
    ///
    /// Values outside [`MIN_TIMELINE_DAYS`, `MAX_TIMELINE_DAYS`] are
    /// rejected here; the pricing engine itself stays total over any
    /// day count.
    pub fn set_timeline(&mut self, days: u32) -> Result<(), ValidationError> {
        if !(MIN_TIMELINE_DAYS..=MAX_TIMELINE_DAYS).contains(&days) {
            return Err(ValidationError::out_of_range(
                "timeline",
                MIN_TIMELINE_DAYS as i64,
                MAX_TIMELINE_DAYS as i64,
                days as i64,
            ));
        }
        self.timeline_days = days;
        Ok(())
    }

    /// Total price of the current selection, unrounded.
    ///
    /// Returns 0 when no tier is selected; use [`Self::price`] for
    /// display, which makes that case unrepresentable.
    pub fn total(&self) -> f64 {
        match self.selected_tier() {
            Some(tier) => {
                let add_ons = self.add_ons();
                compute_total(tier, &add_ons, self.timeline_days)
            }
            None => 0.0,
        }
    }

    /// Displayable price, or None while no tier is selected.
    pub fn price(&self, currency: Currency) -> Option<Money> {
        self.selected_tier()
            .map(|_| Money::new(self.total(), currency))
    }

    /// Itemized price for the quote form, or None while no tier is
    /// selected.
    pub fn breakdown(&self) -> Option<PriceBreakdown> {
        self.selected_tier().map(|tier| {
            let add_ons = self.add_ons();
            PriceBreakdown::compute(tier, &add_ons, self.timeline_days)
        })
    }

    /// Resets to a fresh selection for the current category, used after
    /// submission or an explicit restart.
    pub fn reset(&mut self) {
        *self = Self::new(self.category);
    }
}
