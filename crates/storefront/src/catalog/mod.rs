//! In-memory product catalog.
//!
//! The catalog is built once at startup from placeholder data and shared
//! read-only through [`crate::state::AppState`].

pub mod listing;
mod seed;
pub mod types;

use std::collections::HashMap;

use electromart_core::ProductHandle;

pub use listing::{BRANDS, CATEGORIES, ListingFilters, PriceRange, SortOrder};
pub use types::{
    ColorOption, CtaVariant, FeatureCard, HeroSlide, PLACEHOLDER_IMAGE, Product, ProductImage,
    Review, Specification,
};

/// Read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_handle: HashMap<ProductHandle, usize>,
    listing: Vec<ProductHandle>,
    featured: Vec<ProductHandle>,
    hero_slides: Vec<HeroSlide>,
    new_arrivals: Vec<FeatureCard>,
}

impl Catalog {
    /// The placeholder storefront catalog.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(
            seed::products(),
            seed::listing_handles(),
            seed::featured_handles(),
            seed::hero_slides(),
            seed::new_arrivals(),
        )
    }

    #[must_use]
    pub fn new(
        products: Vec<Product>,
        listing: Vec<ProductHandle>,
        featured: Vec<ProductHandle>,
        hero_slides: Vec<HeroSlide>,
        new_arrivals: Vec<FeatureCard>,
    ) -> Self {
        let by_handle = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.handle.clone(), i))
            .collect();

        Self {
            products,
            by_handle,
            listing,
            featured,
            hero_slides,
            new_arrivals,
        }
    }

    /// Look up a product by handle.
    #[must_use]
    pub fn get(&self, handle: &str) -> Option<&Product> {
        self.by_handle
            .get(&ProductHandle::new(handle))
            .and_then(|&i| self.products.get(i))
    }

    /// Every product, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products on the listing page, in catalog order.
    #[must_use]
    pub fn listing(&self) -> Vec<&Product> {
        self.resolve(&self.listing)
    }

    /// Products in the homepage featured grid.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.resolve(&self.featured)
    }

    /// Related products for a detail page; unknown handles are skipped.
    #[must_use]
    pub fn related(&self, product: &Product) -> Vec<&Product> {
        self.resolve(&product.related)
    }

    #[must_use]
    pub fn hero_slides(&self) -> &[HeroSlide] {
        &self.hero_slides
    }

    #[must_use]
    pub fn new_arrivals(&self) -> &[FeatureCard] {
        &self.new_arrivals
    }

    fn resolve(&self, handles: &[ProductHandle]) -> Vec<&Product> {
        handles.iter().filter_map(|h| self.get(h.as_str())).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_catalog() {
        let catalog = Catalog::placeholder();
        assert_eq!(catalog.listing().len(), 12);
        assert_eq!(catalog.featured().len(), 4);
        assert_eq!(catalog.hero_slides().len(), 2);
        assert_eq!(catalog.new_arrivals().len(), 3);
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::placeholder();
        let watch = catalog.get("p123").unwrap();
        assert_eq!(watch.name, "Premium Smartwatch Pro X");
        assert_eq!(watch.price.to_string(), "$249.99");
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn test_related() {
        let catalog = Catalog::placeholder();
        let watch = catalog.get("p123").unwrap();
        let related: Vec<&str> = catalog
            .related(watch)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            related,
            ["Wireless Earbuds Pro", "Smart Fitness Scale", "Extra Charging Cable"]
        );
    }

    #[test]
    fn test_featured_sale_price() {
        let catalog = Catalog::placeholder();
        let watch = catalog.get("fp2").unwrap();
        assert_eq!(watch.old_price.unwrap().to_string(), "$329.00");
    }
}
