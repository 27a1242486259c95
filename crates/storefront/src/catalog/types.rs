//! Read-only catalog records.

use chrono::NaiveDate;
use electromart_core::{ColorId, ImageId, Price, ProductHandle, ReviewId};

/// Fallback image for products without photography.
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// A product as shown on cards, the listing page and the detail page.
#[derive(Debug, Clone)]
pub struct Product {
    pub handle: ProductHandle,
    pub name: String,
    pub price: Price,
    /// Compare-at price, shown struck through when present.
    pub old_price: Option<Price>,
    pub images: Vec<ProductImage>,
    pub rating: Option<f64>,
    pub review_count: u32,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub colors: Vec<ColorOption>,
    pub sizes: Vec<String>,
    pub short_description: String,
    /// Trusted HTML authored with the catalog.
    pub full_description_html: String,
    pub specifications: Vec<Specification>,
    pub reviews: Vec<Review>,
    pub related: Vec<ProductHandle>,
    /// Arrival order; higher is newer.
    pub position: u32,
}

impl Product {
    /// Detail page URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!("/products/{}", self.handle)
    }

    /// The first image's source, or the placeholder.
    #[must_use]
    pub fn primary_image_url(&self) -> &str {
        self.images
            .first()
            .map_or(PLACEHOLDER_IMAGE, |image| image.src.as_str())
    }

    /// First color that can be ordered.
    #[must_use]
    pub fn default_color(&self) -> Option<&ColorOption> {
        self.colors.iter().find(|c| c.is_available)
    }

    #[must_use]
    pub fn color(&self, id: &str) -> Option<&ColorOption> {
        self.colors.iter().find(|c| c.id.as_str() == id)
    }

    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    #[must_use]
    pub fn review(&self, id: &str) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id.as_str() == id)
    }
}

/// One product photo.
#[derive(Debug, Clone)]
pub struct ProductImage {
    pub id: ImageId,
    pub src: String,
    pub alt: String,
}

/// A selectable color variant.
#[derive(Debug, Clone)]
pub struct ColorOption {
    pub id: ColorId,
    pub name: String,
    pub hex_color: String,
    pub is_available: bool,
}

/// A name/value row in the specifications tab.
#[derive(Debug, Clone)]
pub struct Specification {
    pub name: String,
    pub value: String,
}

/// A customer review.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub author_name: String,
    pub author_avatar_url: Option<String>,
    pub author_initials: Option<String>,
    /// 1-5 stars.
    pub rating: u8,
    pub title: Option<String>,
    pub comment: String,
    pub date: NaiveDate,
    pub is_verified_purchase: bool,
    pub helpful_votes: u32,
    pub not_helpful_votes: u32,
}

/// Call-to-action styling for a hero slide button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaVariant {
    Primary,
    Secondary,
}

impl CtaVariant {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary btn-lg",
            Self::Secondary => "btn btn-secondary btn-lg",
        }
    }
}

/// A homepage hero banner.
#[derive(Debug, Clone)]
pub struct HeroSlide {
    pub image_url: String,
    pub image_alt: String,
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub cta_href: String,
    pub cta_variant: CtaVariant,
}

/// A "New Arrivals" teaser card.
#[derive(Debug, Clone)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub href: String,
}
