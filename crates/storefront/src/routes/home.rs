//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::{FeatureCard, HeroSlide};
use crate::components::{Autoplay, Carousel, CarouselOptions, ProductCard};
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

use super::{PageLayout, parse_index};

/// Hero banners advance every five seconds until the shopper interacts.
const HERO_AUTOPLAY: Autoplay = Autoplay {
    delay_ms: 5000,
    stop_on_interaction: true,
};

/// Home page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub slide: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: PageLayout,
    pub hero: Carousel<HeroSlide>,
    pub featured: Vec<ProductCard>,
    pub new_arrivals: Vec<FeatureCard>,
}

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<HomeQuery>,
) -> Result<HomeTemplate> {
    let catalog = state.catalog();
    let layout = PageLayout::load(&state, &session, "/", "").await?;

    let hero = Carousel::new(
        catalog.hero_slides().to_vec(),
        CarouselOptions {
            autoplay: Some(HERO_AUTOPLAY),
            ..CarouselOptions::default()
        },
        "slide",
        "/",
    )
    .select(parse_index(query.slide.as_deref()));

    let featured = catalog
        .featured()
        .into_iter()
        .map(|product| ProductCard::new(product).with_add_to_cart("/"))
        .collect();

    Ok(HomeTemplate {
        layout,
        hero,
        featured,
        new_arrivals: catalog.new_arrivals().to_vec(),
    })
}
