//! Compact product card used in grids and carousels.

use electromart_core::ProductHandle;

use super::star_rating::StarRating;
use crate::catalog::Product;

/// Card view of a product.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub handle: ProductHandle,
    pub name: String,
    pub price: String,
    pub old_price: Option<String>,
    pub image_url: String,
    pub product_url: String,
    pub category: Option<String>,
    pub rating: Option<StarRating>,
    pub view_label: String,
    /// Where the add-to-cart form returns; no button is rendered when `None`.
    pub add_to_cart_return: Option<String>,
}

impl ProductCard {
    /// Card without an add-to-cart button.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            handle: product.handle.clone(),
            name: product.name.clone(),
            price: product.price.to_string(),
            old_price: product.old_price.map(|p| p.to_string()),
            image_url: product.primary_image_url().to_string(),
            product_url: product.url(),
            category: product.category.clone(),
            rating: product.rating.map(|r| StarRating::new(r).size(14)),
            view_label: format!("View details for {}", product.name),
            add_to_cart_return: None,
        }
    }

    /// Show an add-to-cart button that comes back to `return_to`.
    #[must_use]
    pub fn with_add_to_cart(mut self, return_to: impl Into<String>) -> Self {
        self.add_to_cart_return = Some(return_to.into());
        self
    }

    #[must_use]
    pub const fn on_sale(&self) -> bool {
        self.old_price.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_card_from_product() {
        let catalog = Catalog::placeholder();
        let card = ProductCard::new(catalog.get("fp2").unwrap());
        assert_eq!(card.price, "$299.00");
        assert_eq!(card.old_price.as_deref(), Some("$329.00"));
        assert!(card.on_sale());
        assert_eq!(card.category.as_deref(), Some("Wearables"));
        assert_eq!(card.product_url, "/products/fp2");
        assert_eq!(card.rating.as_ref().unwrap().size, 14);
        assert!(card.add_to_cart_return.is_none());
    }

    #[test]
    fn test_unrated_product_has_no_stars() {
        let catalog = Catalog::placeholder();
        let card = ProductCard::new(catalog.get("rp3").unwrap()).with_add_to_cart("/");
        assert!(card.rating.is_none());
        assert_eq!(card.add_to_cart_return.as_deref(), Some("/"));
    }
}
