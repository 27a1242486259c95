//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (?slide=n)
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing (filters, sort, page, q)
//! GET  /products/{handle}      - Product detail (image, color, size, quantity, tab)
//! POST /products/{handle}/wishlist              - Add to wishlist
//! POST /products/{handle}/reviews/{id}/vote     - Helpful / not-helpful vote
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart, redirect back
//! POST /cart/update            - Set or step a line quantity
//! POST /cart/remove            - Remove a line
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Checkout form
//! POST /checkout               - Place order (rate limited)
//! GET  /order-confirmation/{order_number} - Confirmation
//!
//! # Search
//! GET  /search                 - Search results page
//! GET  /search/suggest         - Suggestions (fragment)
//! ```
//!
//! View state that the browser would otherwise hold (selected slide, image,
//! color, size, quantity, tab, page, filters) travels in the query string.
//! Shopper state (cart, wishlist, votes, flash notices) lives in the session.

pub mod cart;
pub mod checkout;
pub mod home;
pub mod products;
pub mod search;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};
use chrono::Datelike;
use tower_sessions::Session;

use crate::components::{Breadcrumbs, Footer, NavigationMenu};
use crate::error::{AppError, Result};
use crate::middleware::{checkout_rate_limiter, render_rate_limited};
use crate::models::{Notice, session};
use crate::state::AppState;

/// Shared page chrome: header, footer, flash notices and breadcrumbs.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub title: String,
    pub nav: NavigationMenu,
    pub footer: Footer,
    pub notices: Vec<Notice>,
    pub breadcrumbs: Breadcrumbs,
}

impl PageLayout {
    /// Build the chrome for a page at `path`.
    ///
    /// Reads the cart for the header badge and takes any queued notices.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn load(
        state: &AppState,
        session: &Session,
        path: &str,
        title: impl Into<String>,
    ) -> Result<Self> {
        let cart = session::load_cart(session, state).await?;
        let notices = session::take_notices(session).await?;
        let brand = &state.config().brand_name;

        Ok(Self {
            title: title.into(),
            nav: NavigationMenu::new(brand.as_str())
                .with_cart_count(cart.item_count())
                .with_search("")
                .with_active_path(path),
            footer: Footer::new(brand.as_str(), chrono::Utc::now().year()),
            notices,
            breadcrumbs: Breadcrumbs::default(),
        })
    }

    #[must_use]
    pub fn breadcrumbs(mut self, breadcrumbs: Breadcrumbs) -> Self {
        self.breadcrumbs = breadcrumbs;
        self
    }

    /// Pre-fill the header search box.
    #[must_use]
    pub fn search_query(mut self, query: &str) -> Self {
        self.nav = self.nav.with_search(query);
        self
    }

    /// Browser tab title, e.g. "Cart | ElectroMart".
    #[must_use]
    pub fn document_title(&self) -> String {
        if self.title.is_empty() {
            self.nav.brand_name.clone()
        } else {
            format!("{} | {}", self.title, self.nav.brand_name)
        }
    }
}

/// Build `path?k=v&…`, skipping empty values and percent-encoding the rest.
#[must_use]
pub fn href(path: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// Accept a same-site path to redirect back to, or fall back.
#[must_use]
pub fn safe_return_to(requested: Option<&str>, fallback: &str) -> String {
    requested
        .map(str::trim)
        .filter(|path| path.starts_with('/') && !path.starts_with("//") && !path.contains('\\'))
        .map_or_else(|| fallback.to_string(), str::to_string)
}

/// Parse an optional query index, ignoring junk.
#[must_use]
pub fn parse_index(value: Option<&str>) -> Option<usize> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{handle}", get(products::show))
        .route("/{handle}/wishlist", post(products::add_to_wishlist))
        .route("/{handle}/reviews/{review_id}/vote", post(products::vote))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
///
/// Only order placement is rate limited.
pub fn checkout_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(checkout::show).merge(
            post(checkout::place_order)
                .layer(checkout_rate_limiter())
                .layer(axum::middleware::map_response(render_rate_limited)),
        ),
    )
}

/// Create the search routes router.
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(search::page))
        .route("/suggest", get(search::suggest))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .route(
            "/order-confirmation/{order_number}",
            get(checkout::confirmation),
        )
        .nest("/search", search_routes())
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
