//! Listing page filtering and sorting.

use std::cmp::Ordering;
use std::collections::HashMap;

use electromart_core::ProductHandle;
use rust_decimal::Decimal;

use super::types::Product;

/// Category checkboxes, in display order. "All" disables the filter.
pub const CATEGORIES: [&str; 5] = ["All", "Electronics", "Accessories", "Wearables", "Audio"];

/// Brand radio buttons, in display order.
pub const BRANDS: [&str; 4] = ["BrandA", "BrandB", "BrandC", "BrandD"];

const ALL_CATEGORIES: &str = "All";

/// Sort order for the listing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Relevant,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    Newest,
}

impl SortOrder {
    pub const ALL: [Self; 5] = [
        Self::Relevant,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::RatingDesc,
        Self::Newest,
    ];

    /// Query string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevant => "relevant",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::RatingDesc => "rating-desc",
            Self::Newest => "newest",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevant => "Relevance",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::RatingDesc => "Rating: High to Low",
            Self::Newest => "Newest Arrivals",
        }
    }

    /// Parse a query value; unknown values sort by relevance.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == value)
            .unwrap_or_default()
    }
}

/// Whole-dollar price window from the range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub const SLIDER_MIN: u32 = 0;
    pub const SLIDER_MAX: u32 = 1000;
    pub const STEP: u32 = 10;

    /// Build a range, clamping to the slider bounds, snapping to the step and
    /// swapping inverted ends.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        let snap = |v: u32| (v.clamp(Self::SLIDER_MIN, Self::SLIDER_MAX) / Self::STEP) * Self::STEP;
        let (min, max) = (snap(min), snap(max));
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    #[must_use]
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= Decimal::from(self.min) && amount <= Decimal::from(self.max)
    }

    /// Whether the range differs from the slider's initial position.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: 0, max: 500 }
    }
}

/// Active listing filters.
#[derive(Debug, Clone, Default)]
pub struct ListingFilters {
    pub categories: Vec<String>,
    pub brand: Option<String>,
    pub price: PriceRange,
}

impl ListingFilters {
    /// Categories that actually restrict results ("All" or none means no filter).
    #[must_use]
    pub fn active_categories(&self) -> &[String] {
        if self.categories.is_empty() || self.categories.iter().any(|c| c == ALL_CATEGORIES) {
            &[]
        } else {
            &self.categories
        }
    }

    #[must_use]
    pub fn is_category_checked(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Page heading: the first selected category, or "All Products".
    #[must_use]
    pub fn heading(&self) -> &str {
        self.active_categories()
            .first()
            .map_or("All Products", String::as_str)
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let categories = self.active_categories();
        let category_ok = categories.is_empty()
            || product
                .category
                .as_ref()
                .is_some_and(|c| categories.contains(c));
        let brand_ok = self
            .brand
            .as_ref()
            .is_none_or(|b| product.brand.as_ref() == Some(b));

        category_ok && brand_ok && self.price.contains(product.price.amount)
    }
}

/// Filter and sort `products`.
///
/// When `scores` is present only scored products survive, and
/// [`SortOrder::Relevant`] orders by descending score. Otherwise relevance is
/// catalog order. Sorting is stable, so ties keep catalog order.
#[must_use]
pub fn apply<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    filters: &ListingFilters,
    sort: SortOrder,
    scores: Option<&HashMap<ProductHandle, f32>>,
) -> Vec<&'a Product> {
    let score_of = |p: &Product| scores.and_then(|s| s.get(&p.handle).copied());

    let mut results: Vec<&Product> = products
        .into_iter()
        .filter(|p| scores.is_none() || score_of(p).is_some())
        .filter(|p| filters.matches(p))
        .collect();

    match sort {
        SortOrder::Relevant => {
            if scores.is_some() {
                results.sort_by(|a, b| {
                    score_of(b)
                        .unwrap_or_default()
                        .total_cmp(&score_of(a).unwrap_or_default())
                });
            }
        }
        SortOrder::PriceAsc => results.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
        SortOrder::PriceDesc => results.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
        SortOrder::RatingDesc => results.sort_by(|a, b| compare_ratings(b.rating, a.rating)),
        SortOrder::Newest => results.sort_by(|a, b| b.position.cmp(&a.position)),
    }

    results
}

/// Unrated products sort below any rating.
fn compare_ratings(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.handle.to_string()).collect()
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!(SortOrder::parse("price-asc"), SortOrder::PriceAsc);
        assert_eq!(SortOrder::parse("sale"), SortOrder::Relevant);
        for sort in SortOrder::ALL {
            assert_eq!(SortOrder::parse(sort.as_str()), sort);
        }
    }

    #[test]
    fn test_price_range_normalizes() {
        assert_eq!(PriceRange::new(500, 100), PriceRange { min: 100, max: 500 });
        assert_eq!(PriceRange::new(15, 2000), PriceRange { min: 10, max: 1000 });
        assert!(PriceRange::new(0, 500).is_default());
        assert!(PriceRange::default().contains(Decimal::from(500)));
        assert!(!PriceRange::default().contains(Decimal::new(50_001, 2)));
    }

    #[test]
    fn test_all_category_disables_filter() {
        let filters = ListingFilters {
            categories: vec!["All".to_string(), "Audio".to_string()],
            ..ListingFilters::default()
        };
        assert!(filters.active_categories().is_empty());
        assert_eq!(filters.heading(), "All Products");
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::placeholder();
        let filters = ListingFilters {
            categories: vec!["Wearables".to_string()],
            ..ListingFilters::default()
        };
        let results = apply(catalog.listing(), &filters, SortOrder::Relevant, None);
        assert_eq!(filters.heading(), "Wearables");
        assert_eq!(names(&results), ["plp3", "plp6", "plp9", "plp12"]);
    }

    #[test]
    fn test_brand_filter() {
        let catalog = Catalog::placeholder();
        let filters = ListingFilters {
            brand: Some("BrandB".to_string()),
            ..ListingFilters::default()
        };
        let results = apply(catalog.listing(), &filters, SortOrder::Relevant, None);
        assert_eq!(names(&results), ["plp2", "plp6", "plp10"]);
    }

    #[test]
    fn test_price_sorts() {
        let catalog = Catalog::placeholder();
        let filters = ListingFilters::default();

        let asc = apply(catalog.listing(), &filters, SortOrder::PriceAsc, None);
        assert!(asc.windows(2).all(|w| w[0].price.amount <= w[1].price.amount));

        let desc = apply(catalog.listing(), &filters, SortOrder::PriceDesc, None);
        assert!(desc.windows(2).all(|w| w[0].price.amount >= w[1].price.amount));
    }

    #[test]
    fn test_newest_reverses_arrival_order() {
        let catalog = Catalog::placeholder();
        let results = apply(
            catalog.listing(),
            &ListingFilters::default(),
            SortOrder::Newest,
            None,
        );
        assert_eq!(results.first().unwrap().handle.as_str(), "plp12");
        assert_eq!(results.last().unwrap().handle.as_str(), "plp1");
    }

    #[test]
    fn test_scores_filter_and_rank() {
        let catalog = Catalog::placeholder();
        let scores = HashMap::from([
            (ProductHandle::new("plp4"), 0.5),
            (ProductHandle::new("plp2"), 2.0),
        ]);
        let results = apply(
            catalog.listing(),
            &ListingFilters::default(),
            SortOrder::Relevant,
            Some(&scores),
        );
        assert_eq!(names(&results), ["plp2", "plp4"]);
    }

    #[test]
    fn test_unrated_sort_last() {
        assert_eq!(compare_ratings(Some(3.0), None), Ordering::Greater);
        assert_eq!(compare_ratings(None, None), Ordering::Equal);
    }
}
