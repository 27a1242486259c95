//! Presentational components.
//!
//! Each component is a plain view model built from catalog or session data.
//! Templates under `templates/components/` render them; nothing here touches
//! the request or the session.

pub mod carousel;
pub mod color_swatch;
pub mod image_gallery;
pub mod navigation;
pub mod pagination;
pub mod product_card;
pub mod quantity_stepper;
pub mod review_card;
pub mod star_rating;

pub use carousel::{Autoplay, Carousel, CarouselOptions, CarouselState};
pub use color_swatch::{ColorSwatch, SwatchSize};
pub use image_gallery::ImageGallery;
pub use navigation::{Breadcrumbs, Footer, NavigationMenu, Sidebar};
pub use pagination::Pagination;
pub use product_card::ProductCard;
pub use quantity_stepper::{QuantityBounds, QuantityStepper, StepperInput, StepperSize};
pub use review_card::ReviewCard;
pub use star_rating::{Star, StarRating};
