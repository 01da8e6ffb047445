//! PriceQuoteHandler - Recomputes the displayed price for a selection.
//!
//! Invoked on every selection change (tier click, add-on toggle, slider
//! move). Pure and synchronous, so redundant invocation is free.

use crate::domain::foundation::{Currency, Money};
use crate::domain::pricing::{PriceBreakdown, QuoteSelection};

/// Query carrying the selection snapshot to price.
#[derive(Debug, Clone)]
pub struct PriceQuoteQuery {
    pub selection: QuoteSelection,
    pub currency: Currency,
}

/// The price shown next to the quote form.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePreview {
    pub breakdown: PriceBreakdown,
    pub total: Money,
}

/// Handler producing the price preview.
pub struct PriceQuoteHandler;

impl PriceQuoteHandler {
    pub fn new() -> Self {
        Self
    }

    /// Returns the preview, or None while no tier is selected - the
    /// form shows no price at all in that case.
    pub fn handle(&self, query: &PriceQuoteQuery) -> Option<PricePreview> {
        let breakdown = query.selection.breakdown()?;
        Some(PricePreview {
            breakdown,
            total: Money::new(breakdown.total, query.currency),
        })
    }
}

impl Default for PriceQuoteHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{AddOnKind, ServiceCategory, TierLevel};

    #[test]
    fn no_tier_means_no_preview() {
        let handler = PriceQuoteHandler::new();
        let query = PriceQuoteQuery {
            selection: QuoteSelection::new(ServiceCategory::WebDevelopment),
            currency: Currency::Mxn,
        };
        assert_eq!(handler.handle(&query), None);
    }

    #[test]
    fn preview_matches_the_engine_total() {
        let mut selection = QuoteSelection::new(ServiceCategory::WebDevelopment);
        selection.select_tier(TierLevel::Business);
        selection.toggle_add_on(AddOnKind::Seo);
        selection.toggle_add_on(AddOnKind::LogoDesign);
        selection.set_timeline(10).unwrap();

        let handler = PriceQuoteHandler::new();
        let preview = handler
            .handle(&PriceQuoteQuery {
                selection,
                currency: Currency::Mxn,
            })
            .unwrap();
        assert!((preview.total.amount() - 84_500.0).abs() < 1e-9);
        assert!((preview.breakdown.base_price - 45_000.0).abs() < 1e-9);
    }

    #[test]
    fn repeated_invocation_yields_identical_previews() {
        let mut selection = QuoteSelection::new(ServiceCategory::Branding);
        selection.select_tier(TierLevel::Startup);
        let query = PriceQuoteQuery {
            selection,
            currency: Currency::Usd,
        };

        let handler = PriceQuoteHandler::new();
        assert_eq!(handler.handle(&query), handler.handle(&query));
    }
}
