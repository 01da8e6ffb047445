//! The catalog facade - lookups over the static reference tables.

use once_cell::sync::Lazy;

use super::{AddOn, AddOnCategory, AddOnKind, Complexity, ServiceCategory, ServiceTier, TierLevel};

static TIERS: Lazy<Vec<ServiceTier>> = Lazy::new(|| {
    use Complexity::*;
    use ServiceCategory::*;
    use TierLevel::*;

    vec![
        // Web Development
        ServiceTier {
            category: WebDevelopment,
            level: Startup,
            base_price: 18_000,
            delivery_days: 14,
            complexity: Basic,
            included_features: &["Landing page", "Responsive design", "Contact form", "Basic SEO"],
            optional_features: &["Blog", "Newsletter signup"],
        },
        ServiceTier {
            category: WebDevelopment,
            level: Business,
            base_price: 45_000,
            delivery_days: 30,
            complexity: Intermediate,
            included_features: &[
                "Up to 10 pages",
                "CMS integration",
                "Contact & quote forms",
                "On-page SEO",
                "Performance tuning",
            ],
            optional_features: &["Blog", "Multi-language", "Live chat"],
        },
        ServiceTier {
            category: WebDevelopment,
            level: Enterprise,
            base_price: 95_000,
            delivery_days: 60,
            complexity: Advanced,
            included_features: &[
                "Unlimited pages",
                "Custom CMS",
                "Role-based admin",
                "API integrations",
                "Load testing",
            ],
            optional_features: &["Design system", "A/B testing"],
        },
        ServiceTier {
            category: WebDevelopment,
            level: Custom,
            base_price: 150_000,
            delivery_days: 90,
            complexity: Advanced,
            included_features: &["Discovery workshop", "Custom architecture", "Dedicated team"],
            optional_features: &["On-site kickoff", "Training sessions"],
        },
        // E-commerce
        ServiceTier {
            category: Ecommerce,
            level: Startup,
            base_price: 28_000,
            delivery_days: 21,
            complexity: Basic,
            included_features: &["Up to 50 products", "Payment gateway", "Order management"],
            optional_features: &["Discount codes", "Inventory alerts"],
        },
        ServiceTier {
            category: Ecommerce,
            level: Business,
            base_price: 65_000,
            delivery_days: 45,
            complexity: Intermediate,
            included_features: &[
                "Up to 500 products",
                "Multiple payment gateways",
                "Shipping integrations",
                "Customer accounts",
            ],
            optional_features: &["Subscriptions", "Wishlist", "Reviews"],
        },
        ServiceTier {
            category: Ecommerce,
            level: Enterprise,
            base_price: 120_000,
            delivery_days: 75,
            complexity: Advanced,
            included_features: &[
                "Unlimited products",
                "Multi-warehouse inventory",
                "ERP integration",
                "Advanced reporting",
            ],
            optional_features: &["Marketplace channels", "B2B pricing"],
        },
        ServiceTier {
            category: Ecommerce,
            level: Custom,
            base_price: 190_000,
            delivery_days: 100,
            complexity: Advanced,
            included_features: &["Discovery workshop", "Custom storefront", "Dedicated team"],
            optional_features: &["Headless architecture", "Mobile companion app"],
        },
        // Mobile App
        ServiceTier {
            category: MobileApp,
            level: Startup,
            base_price: 35_000,
            delivery_days: 30,
            complexity: Basic,
            included_features: &["Single platform", "Up to 5 screens", "Push notifications"],
            optional_features: &["App store submission", "Crash reporting"],
        },
        ServiceTier {
            category: MobileApp,
            level: Business,
            base_price: 85_000,
            delivery_days: 60,
            complexity: Intermediate,
            included_features: &[
                "iOS + Android",
                "User accounts",
                "Offline mode",
                "Analytics events",
            ],
            optional_features: &["In-app purchases", "Deep linking"],
        },
        ServiceTier {
            category: MobileApp,
            level: Enterprise,
            base_price: 160_000,
            delivery_days: 90,
            complexity: Advanced,
            included_features: &[
                "iOS + Android",
                "Backend API",
                "SSO integration",
                "Release automation",
            ],
            optional_features: &["Tablet layouts", "Accessibility audit"],
        },
        ServiceTier {
            category: MobileApp,
            level: Custom,
            base_price: 230_000,
            delivery_days: 110,
            complexity: Advanced,
            included_features: &["Discovery workshop", "Custom platform work", "Dedicated team"],
            optional_features: &["Wearable companion", "IoT integrations"],
        },
        // Branding
        ServiceTier {
            category: Branding,
            level: Startup,
            base_price: 12_000,
            delivery_days: 10,
            complexity: Basic,
            included_features: &["Logo", "Color palette", "Typography"],
            optional_features: &["Business cards"],
        },
        ServiceTier {
            category: Branding,
            level: Business,
            base_price: 26_000,
            delivery_days: 21,
            complexity: Intermediate,
            included_features: &["Full identity kit", "Brand guidelines", "Social templates"],
            optional_features: &["Stationery set", "Pitch deck template"],
        },
        ServiceTier {
            category: Branding,
            level: Enterprise,
            base_price: 48_000,
            delivery_days: 35,
            complexity: Advanced,
            included_features: &[
                "Brand strategy",
                "Full identity kit",
                "Brand guidelines",
                "Launch assets",
            ],
            optional_features: &["Naming workshop", "Motion identity"],
        },
        ServiceTier {
            category: Branding,
            level: Custom,
            base_price: 80_000,
            delivery_days: 60,
            complexity: Advanced,
            included_features: &["Research phase", "Custom brand program", "Dedicated team"],
            optional_features: &["Rebrand rollout plan"],
        },
    ]
});

static ADD_ONS: Lazy<Vec<AddOn>> = Lazy::new(|| {
    use AddOnCategory::*;
    use AddOnKind::*;

    vec![
        AddOn { kind: Seo, price: 8_000, category: Marketing },
        AddOn { kind: Copywriting, price: 6_500, category: Content },
        AddOn { kind: LogoDesign, price: 12_000, category: Design },
        AddOn { kind: Maintenance, price: 9_500, category: Operations },
        AddOn { kind: HostingSetup, price: 4_500, category: Operations },
        AddOn { kind: Analytics, price: 5_500, category: Marketing },
    ]
});

/// Lookup facade over the static catalog tables.
pub struct Catalog;

impl Catalog {
    /// Returns every tier across all categories.
    pub fn tiers() -> &'static [ServiceTier] {
        &TIERS
    }

    /// Returns the tiers of one category, in ascending price order.
    pub fn tiers_for(category: ServiceCategory) -> Vec<&'static ServiceTier> {
        TIERS.iter().filter(|t| t.category == category).collect()
    }

    /// Returns the tier for a (category, level) pair.
    ///
    /// # Panics
    ///
    /// Never panics in practice: the table covers every pair, which
    /// `catalog_covers_every_pair` pins.
    pub fn tier(category: ServiceCategory, level: TierLevel) -> &'static ServiceTier {
        TIERS
            .iter()
            .find(|t| t.category == category && t.level == level)
            .expect("catalog covers every category/level pair")
    }

    /// Returns every add-on.
    pub fn add_ons() -> &'static [AddOn] {
        &ADD_ONS
    }

    /// Returns the add-on row for a kind.
    ///
    /// # Panics
    ///
    /// Never panics in practice: the table covers every kind, which
    /// `catalog_covers_every_add_on` pins.
    pub fn add_on(kind: AddOnKind) -> &'static AddOn {
        ADD_ONS
            .iter()
            .find(|a| a.kind == kind)
            .expect("catalog covers every add-on kind")
    }
}
