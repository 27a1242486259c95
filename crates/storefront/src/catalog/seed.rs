//! Placeholder catalog data.
//!
//! Listing products get pseudo-random prices and ratings from a seeded RNG so
//! every process (and every test) sees the same catalog.

use chrono::NaiveDate;
use electromart_core::{ColorId, CurrencyCode, ImageId, Price, ProductHandle, ReviewId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{
    ColorOption, CtaVariant, FeatureCard, HeroSlide, Product, ProductImage, Review, Specification,
};

const LISTING_SEED: u64 = 0x00E1_EC7A;
const LISTING_SIZE: u32 = 12;
const LISTING_BRANDS: [&str; 4] = ["BrandA", "BrandB", "BrandC", "BrandD"];
const LISTING_IMAGE: &str = "https://images.unsplash.com/photo-1587033229854-46f55080f88d?auto=format&fit=crop&w=300&h=200&q=60";

fn usd(cents: i64) -> Price {
    Price::from_cents(cents, CurrencyCode::USD)
}

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&w={width}&q=60")
}

fn image(id: &str, src: String, alt: &str) -> ProductImage {
    ProductImage {
        id: ImageId::new(id),
        src,
        alt: alt.to_string(),
    }
}

fn handles(ids: &[&str]) -> Vec<ProductHandle> {
    ids.iter().map(|id| ProductHandle::new(*id)).collect()
}

/// A product with a single photo and generic copy.
struct Simple<'a> {
    handle: &'a str,
    name: &'a str,
    cents: i64,
    image_url: String,
    category: &'a str,
    brand: &'a str,
    rating: Option<f64>,
    review_count: u32,
    position: u32,
}

impl Simple<'_> {
    fn build(self, related: &[&str]) -> Product {
        let description = format!(
            "The {} is a dependable everyday pick from our {} range.",
            self.name,
            self.category.to_lowercase()
        );
        Product {
            handle: ProductHandle::new(self.handle),
            name: self.name.to_string(),
            price: usd(self.cents),
            old_price: None,
            images: vec![image(
                &format!("{}-img1", self.handle),
                self.image_url,
                self.name,
            )],
            rating: self.rating,
            review_count: self.review_count,
            category: Some(self.category.to_string()),
            brand: Some(self.brand.to_string()),
            colors: Vec::new(),
            sizes: Vec::new(),
            full_description_html: format!("<p>{description}</p>"),
            short_description: description,
            specifications: vec![
                Specification {
                    name: "Category".to_string(),
                    value: self.category.to_string(),
                },
                Specification {
                    name: "Brand".to_string(),
                    value: self.brand.to_string(),
                },
            ],
            reviews: Vec::new(),
            related: handles(related),
            position: self.position,
        }
    }
}

fn review_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The fully described flagship product.
fn smartwatch() -> Product {
    Product {
        handle: ProductHandle::new("p123"),
        name: "Premium Smartwatch Pro X".to_string(),
        price: usd(24_999),
        old_price: None,
        images: vec![
            image(
                "img1",
                unsplash("photo-1546868871-7041f2a55e12", 800),
                "Smartwatch Front View",
            ),
            image(
                "img2",
                unsplash("photo-1579586337278-3befd40fd17a", 800),
                "Smartwatch Side View",
            ),
            image(
                "img3",
                unsplash("photo-1520895657902-49053a009534", 800),
                "Smartwatch on Wrist",
            ),
        ],
        rating: Some(4.7),
        review_count: 152,
        category: Some("Wearables".to_string()),
        brand: Some("BrandA".to_string()),
        colors: vec![
            ColorOption {
                id: ColorId::new("black"),
                name: "Midnight Black".to_string(),
                hex_color: "#333333".to_string(),
                is_available: true,
            },
            ColorOption {
                id: ColorId::new("silver"),
                name: "Silver Stone".to_string(),
                hex_color: "#C0C0C0".to_string(),
                is_available: true,
            },
            ColorOption {
                id: ColorId::new("gold"),
                name: "Rose Gold".to_string(),
                hex_color: "#B76E79".to_string(),
                is_available: false,
            },
        ],
        sizes: vec!["S/M".to_string(), "M/L".to_string()],
        short_description: "Experience the next level of connectivity and health tracking with our most advanced smartwatch yet. Featuring a stunning display and long battery life.".to_string(),
        full_description_html: "<p>The Premium Smartwatch Pro X is engineered for excellence. It boasts a vibrant AMOLED display, advanced health sensors including ECG and SpO2 monitoring, and seamless integration with your smartphone. With up to 7 days of battery life, GPS, and water resistance up to 50 meters, it's your perfect companion for an active lifestyle.</p> <p>Key features: GPS, Heart Rate Monitor, Sleep Tracking, NFC for payments, Customizable Watch Faces.</p>".to_string(),
        specifications: [
            ("Display", "1.4\" AMOLED, 454x454 pixels"),
            ("Battery Life", "Up to 7 days"),
            ("Water Resistance", "5 ATM (50 meters)"),
            ("Connectivity", "Bluetooth 5.0, Wi-Fi, NFC"),
            ("Sensors", "Accelerometer, Gyro, HRM, SpO2, ECG, Barometer"),
        ]
        .into_iter()
        .map(|(name, value)| Specification {
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect(),
        reviews: vec![
            Review {
                id: ReviewId::new("r1"),
                author_name: "Alice Wonderland".to_string(),
                author_avatar_url: None,
                author_initials: None,
                rating: 5,
                title: Some("Absolutely Love It!".to_string()),
                comment: "This smartwatch exceeded my expectations. The display is gorgeous and the battery life is amazing.".to_string(),
                date: review_date(2024, 7, 15),
                is_verified_purchase: true,
                helpful_votes: 10,
                not_helpful_votes: 0,
            },
            Review {
                id: ReviewId::new("r2"),
                author_name: "Bob The Builder".to_string(),
                author_avatar_url: None,
                author_initials: None,
                rating: 4,
                title: Some("Great features, a bit pricey".to_string()),
                comment: "Solid performance and tons of features. A bit on the expensive side but worth it if you use all the functionalities.".to_string(),
                date: review_date(2024, 7, 10),
                is_verified_purchase: true,
                helpful_votes: 5,
                not_helpful_votes: 0,
            },
        ],
        related: handles(&["rp1", "rp2", "rp3"]),
        position: 20,
    }
}

fn featured_products() -> Vec<Product> {
    let mut products = vec![
        Simple {
            handle: "fp1",
            name: "Wireless Headphones",
            cents: 14_999,
            image_url: unsplash("photo-1505740420928-5e560c06d30e", 300),
            category: "Audio",
            brand: "BrandB",
            rating: Some(4.5),
            review_count: 87,
            position: 13,
        }
        .build(&["fp3", "rp1", "fp2"]),
        Simple {
            handle: "fp2",
            name: "Smart Watch Series X",
            cents: 29_900,
            image_url: unsplash("photo-1523275335684-37898b6baf30", 300),
            category: "Wearables",
            brand: "BrandA",
            rating: Some(4.8),
            review_count: 64,
            position: 14,
        }
        .build(&["p123", "rp2", "fp1"]),
        Simple {
            handle: "fp3",
            name: "Portable Bluetooth Speaker",
            cents: 7_950,
            image_url: unsplash("photo-1542496658-606a756a2536", 300),
            category: "Audio",
            brand: "BrandC",
            rating: Some(4.2),
            review_count: 41,
            position: 15,
        }
        .build(&["fp1", "rp1"]),
        Simple {
            handle: "fp4",
            name: "Ergonomic Mouse",
            cents: 4_500,
            image_url: unsplash("photo-1615663245857-ac93bb7c39e7", 300),
            category: "Accessories",
            brand: "BrandD",
            rating: Some(4.0),
            review_count: 23,
            position: 16,
        }
        .build(&["rp3", "fp3"]),
    ];

    if let Some(watch) = products.get_mut(1) {
        watch.old_price = Some(usd(32_900));
    }
    products
}

fn related_products() -> Vec<Product> {
    vec![
        Simple {
            handle: "rp1",
            name: "Wireless Earbuds Pro",
            cents: 12_900,
            image_url: unsplash("photo-1606220741028-f2e173fdf535", 300),
            category: "Audio",
            brand: "BrandB",
            rating: Some(4.6),
            review_count: 38,
            position: 17,
        }
        .build(&["fp1", "p123"]),
        Simple {
            handle: "rp2",
            name: "Smart Fitness Scale",
            cents: 4_999,
            image_url: unsplash("photo-1575029639142-9f456e605421", 300),
            category: "Electronics",
            brand: "BrandC",
            rating: Some(4.3),
            review_count: 19,
            position: 18,
        }
        .build(&["p123", "fp2"]),
        Simple {
            handle: "rp3",
            name: "Extra Charging Cable",
            cents: 1_999,
            image_url: unsplash("photo-1600097400002-89f3d0790584", 300),
            category: "Accessories",
            brand: "BrandD",
            rating: None,
            review_count: 0,
            position: 19,
        }
        .build(&["p123"]),
    ]
}

/// The twelve generated listing products (`plp1` through `plp12`).
fn listing_products() -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(LISTING_SEED);

    (1..=LISTING_SIZE)
        .map(|n| {
            let i = n - 1;
            let category = match i % 3 {
                0 => "Electronics",
                1 => "Accessories",
                _ => "Wearables",
            };
            let brand = LISTING_BRANDS
                .get(i as usize % LISTING_BRANDS.len())
                .copied()
                .unwrap_or("BrandA");
            let cents = rng.random_range(5_000..=30_000);
            let rating = (rng.random_range(3.5..=5.0_f64) * 10.0).round() / 10.0;
            let handle = format!("plp{n}");
            let name = format!("Awesome Gadget {n}");
            let related: Vec<String> = (1..=3)
                .map(|offset| format!("plp{}", (i + offset) % LISTING_SIZE + 1))
                .collect();
            let related: Vec<&str> = related.iter().map(String::as_str).collect();

            Simple {
                handle: &handle,
                name: &name,
                cents,
                image_url: format!("{LISTING_IMAGE}&sig={i}"),
                category,
                brand,
                rating: Some(rating),
                review_count: 0,
                position: n,
            }
            .build(&related)
        })
        .collect()
}

/// Every product, listing products first.
pub fn products() -> Vec<Product> {
    let mut all = listing_products();
    all.extend(featured_products());
    all.extend(related_products());
    all.push(smartwatch());
    all
}

/// Handles shown on the listing page.
pub fn listing_handles() -> Vec<ProductHandle> {
    (1..=LISTING_SIZE)
        .map(|n| ProductHandle::new(format!("plp{n}")))
        .collect()
}

/// Handles shown in the homepage "Featured Products" grid.
pub fn featured_handles() -> Vec<ProductHandle> {
    handles(&["fp1", "fp2", "fp3", "fp4"])
}

pub fn hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            image_url: unsplash("photo-1523275335684-37898b6baf30", 1200),
            image_alt: "Hero Promotion 1".to_string(),
            title: "Latest Tech Gadgets".to_string(),
            subtitle: "Discover innovation that inspires.".to_string(),
            cta_label: "Shop Now".to_string(),
            cta_href: "/products".to_string(),
            cta_variant: CtaVariant::Primary,
        },
        HeroSlide {
            image_url: unsplash("photo-1505740420928-5e560c06d30e", 1200),
            image_alt: "Hero Promotion 2".to_string(),
            title: "Exclusive Deals This Week".to_string(),
            subtitle: "Don't miss out on limited-time offers.".to_string(),
            cta_label: "View Offers".to_string(),
            cta_href: "/products?sort=sale".to_string(),
            cta_variant: CtaVariant::Secondary,
        },
    ]
}

pub fn new_arrivals() -> Vec<FeatureCard> {
    [
        (
            "Latest Smartphone",
            "Experience the future with our new flagship phone.",
            "photo-1511707171634-5f897ff02aa9",
        ),
        (
            "Ultra HD Monitor",
            "Immersive visuals for work and play.",
            "photo-1527443154391-507e9dc6c5cc",
        ),
        (
            "Gaming Laptop",
            "Power up your gaming experience.",
            "photo-1603302576837-37561b2e2302",
        ),
    ]
    .into_iter()
    .map(|(title, description, photo)| FeatureCard {
        title: title.to_string(),
        description: description.to_string(),
        image_url: unsplash(photo, 400),
        href: "/products?sort=newest".to_string(),
    })
    .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_listing_is_deterministic() {
        let first: Vec<Price> = listing_products().iter().map(|p| p.price).collect();
        let second: Vec<Price> = listing_products().iter().map(|p| p.price).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_listing_ranges() {
        let listing = listing_products();
        assert_eq!(listing.len(), 12);
        for product in &listing {
            assert!(product.price.amount >= Decimal::from(50));
            assert!(product.price.amount <= Decimal::from(300));
            let rating = product.rating.unwrap();
            assert!((3.5..=5.0).contains(&rating));
        }
    }

    #[test]
    fn test_listing_categories_cycle() {
        let listing = listing_products();
        let categories: Vec<&str> = listing
            .iter()
            .take(3)
            .map(|p| p.category.as_deref().unwrap())
            .collect();
        assert_eq!(categories, ["Electronics", "Accessories", "Wearables"]);
    }

    #[test]
    fn test_related_handles_resolve() {
        let all = products();
        for product in &all {
            for handle in &product.related {
                assert!(
                    all.iter().any(|p| &p.handle == handle),
                    "{} relates to unknown {handle}",
                    product.handle
                );
            }
        }
    }
}
