//! Product route handlers.
//!
//! The listing page filters, sorts and paginates the catalog from query
//! parameters. The detail page keeps its view selections (image, color, size,
//! quantity, tab) in the query string so every control is a plain link or
//! form submission.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::Redirect,
};
use electromart_core::ProductHandle;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::{
    BRANDS, CATEGORIES, ListingFilters, PriceRange, Product, SortOrder, listing,
};
use crate::components::{
    Breadcrumbs, Carousel, CarouselOptions, ColorSwatch, ImageGallery, Pagination, ProductCard,
    QuantityBounds, QuantityStepper, ReviewCard, Sidebar, StarRating, StepperInput, SwatchSize,
    color_swatch, pagination,
};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::{Notice, VoteDirection, VoteOutcome, session};
use crate::state::AppState;

use super::{PageLayout, href, parse_index, safe_return_to};

// =============================================================================
// Listing
// =============================================================================

/// Listing query, gathered from pairs because `category` may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub categories: Vec<String>,
    pub brand: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub sort: SortOrder,
    pub page: usize,
    pub q: String,
}

impl ListingQuery {
    /// Parse raw query pairs; unparseable numbers are ignored.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self {
            page: 1,
            ..Self::default()
        };

        for (key, value) in pairs {
            let value = value.trim();
            match key.as_str() {
                "category" if !value.is_empty() => {
                    if !query.categories.iter().any(|c| c == value) {
                        query.categories.push(value.to_string());
                    }
                }
                "brand" if !value.is_empty() => query.brand = Some(value.to_string()),
                "min_price" => query.min_price = value.parse().ok(),
                "max_price" => query.max_price = value.parse().ok(),
                "sort" => query.sort = SortOrder::parse(value),
                "page" => query.page = value.parse().unwrap_or(1),
                "q" => query.q = value.to_string(),
                _ => {}
            }
        }

        query
    }

    #[must_use]
    pub fn filters(&self) -> ListingFilters {
        let defaults = PriceRange::default();
        ListingFilters {
            categories: self.categories.clone(),
            brand: self.brand.clone(),
            price: PriceRange::new(
                self.min_price.unwrap_or(defaults.min),
                self.max_price.unwrap_or(defaults.max),
            ),
        }
    }

    /// Listing URL for `page` with the current filters applied.
    #[must_use]
    pub fn href(&self, page: usize) -> String {
        let price = self.filters().price;
        let (min, max) = if price.is_default() {
            (String::new(), String::new())
        } else {
            (price.min.to_string(), price.max.to_string())
        };
        let sort = if self.sort == SortOrder::default() {
            ""
        } else {
            self.sort.as_str()
        };
        let page = if page > 1 {
            page.to_string()
        } else {
            String::new()
        };

        let mut params: Vec<(&str, &str)> = self
            .categories
            .iter()
            .map(|c| ("category", c.as_str()))
            .collect();
        params.extend([
            ("brand", self.brand.as_deref().unwrap_or_default()),
            ("min_price", min.as_str()),
            ("max_price", max.as_str()),
            ("sort", sort),
            ("q", self.q.as_str()),
            ("page", page.as_str()),
        ]);

        href("/products", &params)
    }
}

/// A checkbox or radio option in the filter sidebar.
#[derive(Debug, Clone)]
pub struct FilterOption {
    pub value: String,
    pub checked: bool,
}

/// A sort dropdown option.
#[derive(Debug, Clone)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub layout: PageLayout,
    pub sidebar: Sidebar,
    pub heading: String,
    pub q: String,
    pub categories: Vec<FilterOption>,
    pub brands: Vec<FilterOption>,
    pub any_brand: bool,
    pub price: PriceRange,
    pub slider_min: u32,
    pub slider_max: u32,
    pub slider_step: u32,
    pub sort_options: Vec<SortOption>,
    pub sort: &'static str,
    pub result_count: usize,
    pub cards: Vec<ProductCard>,
    pub pagination: Pagination,
}

/// Display the product listing page.
#[instrument(skip(state, session, pairs))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<ProductsIndexTemplate> {
    let query = ListingQuery::from_pairs(pairs);
    let filters = query.filters();
    let catalog = state.catalog();
    let products = catalog.listing();

    let scores: Option<HashMap<ProductHandle, f32>> = if query.q.is_empty() {
        None
    } else {
        let hits = state.search().search(&query.q, catalog.products().len())?;
        Some(hits.into_iter().map(|hit| (hit.handle, hit.score)).collect())
    };

    let results = listing::apply(products, &filters, query.sort, scores.as_ref());

    let per_page = state.config().products_per_page;
    let total_pages = pagination::page_count(results.len(), per_page);
    let pager = Pagination::new(query.page, total_pages, |page| query.href(page));
    let page_items = results
        .get(pagination::page_range(pager.current, per_page, results.len()))
        .unwrap_or_default();

    let return_to = query.href(pager.current);
    let cards = page_items
        .iter()
        .map(|product| ProductCard::new(product).with_add_to_cart(return_to.as_str()))
        .collect();

    tracing::debug!(
        results = results.len(),
        page = pager.current,
        "Listing rendered"
    );

    let heading = filters.heading().to_string();
    let layout = PageLayout::load(&state, &session, "/products", heading.as_str())
        .await?
        .breadcrumbs(Breadcrumbs::home().page("Products"))
        .search_query(&query.q);

    Ok(ProductsIndexTemplate {
        layout,
        sidebar: Sidebar::titled("Filters"),
        heading,
        q: query.q.clone(),
        categories: CATEGORIES
            .iter()
            .map(|c| FilterOption {
                value: (*c).to_string(),
                checked: filters.is_category_checked(c),
            })
            .collect(),
        brands: BRANDS
            .iter()
            .map(|b| FilterOption {
                value: (*b).to_string(),
                checked: filters.brand.as_deref() == Some(*b),
            })
            .collect(),
        any_brand: filters.brand.is_none(),
        price: filters.price,
        slider_min: PriceRange::SLIDER_MIN,
        slider_max: PriceRange::SLIDER_MAX,
        slider_step: PriceRange::STEP,
        sort_options: SortOrder::ALL
            .into_iter()
            .map(|sort| SortOption {
                value: sort.as_str(),
                label: sort.label(),
                selected: sort == query.sort,
            })
            .collect(),
        sort: query.sort.as_str(),
        result_count: results.len(),
        cards,
        pagination: pager,
    })
}

// =============================================================================
// Detail
// =============================================================================

/// Detail page tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Description,
    Specifications,
    Reviews,
}

impl Tab {
    const ALL: [Self; 3] = [Self::Description, Self::Specifications, Self::Reviews];

    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == value)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Specifications => "specifications",
            Self::Reviews => "reviews",
        }
    }
}

/// A tab trigger link.
#[derive(Debug, Clone)]
pub struct TabLink {
    pub id: &'static str,
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// A size toggle option.
#[derive(Debug, Clone)]
pub struct SizeOption {
    pub label: String,
    pub href: String,
    pub selected: bool,
}

/// Detail page query parameters.
///
/// Everything arrives as text and is interpreted leniently.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub image: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub quantity: Option<String>,
    /// Value posted by a stepper button; wins over the typed quantity.
    pub step_to: Option<String>,
    pub tab: Option<String>,
    pub related: Option<String>,
    /// Units just added to the cart; opens the confirmation dialog.
    pub added: Option<String>,
}

/// The detail page's view selections.
#[derive(Debug, Clone)]
struct DetailView {
    url: String,
    image: usize,
    color: Option<String>,
    size: Option<String>,
    quantity: u32,
    tab: Tab,
}

impl DetailView {
    /// Page URL reproducing these selections.
    fn href(&self) -> String {
        let image = if self.image > 0 {
            self.image.to_string()
        } else {
            String::new()
        };
        let quantity = if self.quantity > 1 {
            self.quantity.to_string()
        } else {
            String::new()
        };
        let tab = if self.tab == Tab::default() {
            ""
        } else {
            self.tab.as_str()
        };

        href(
            &self.url,
            &[
                ("image", image.as_str()),
                ("color", self.color.as_deref().unwrap_or_default()),
                ("size", self.size.as_deref().unwrap_or_default()),
                ("quantity", quantity.as_str()),
                ("tab", tab),
            ],
        )
    }

    fn with(&self, change: impl FnOnce(&mut Self)) -> Self {
        let mut view = self.clone();
        change(&mut view);
        view
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub layout: PageLayout,
    pub product: Product,
    pub product_url: String,
    pub gallery: ImageGallery,
    pub rating: Option<StarRating>,
    pub swatches: ColorSwatch,
    pub sizes: Vec<SizeOption>,
    pub stepper: QuantityStepper,
    pub tabs: Vec<TabLink>,
    pub active_tab: &'static str,
    pub reviews: Vec<ReviewCard>,
    pub related: Carousel<ProductCard>,
    pub in_wishlist: bool,
    /// Hidden form values carrying the current selections.
    pub color_value: String,
    pub size_value: String,
    pub image_value: String,
    pub tab_value: &'static str,
    /// This page with its selections, for forms that come back here.
    pub self_href: String,
    /// Units just added, when the "Added to Cart!" dialog is open.
    pub added: Option<u32>,
}

/// Display the product detail page.
#[instrument(skip(state, session, query), fields(handle = %handle))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
    Query(query): Query<ProductQuery>,
) -> Result<ProductShowTemplate> {
    let catalog = state.catalog();
    let product = catalog
        .get(&handle)
        .ok_or_else(|| AppError::NotFound(format!("product {handle}")))?;

    let bounds = QuantityBounds::up_to(state.config().max_line_quantity);
    let typed = query.step_to.as_deref().or(query.quantity.as_deref());
    let quantity = match typed.map(|text| bounds.parse_input(text)) {
        Some(StepperInput::Value(value)) => value,
        _ => bounds.min,
    };

    let default_color = color_swatch::default_selection(&product.colors);
    let color = match query.color.as_deref() {
        Some(requested) => {
            color_swatch::select(&product.colors, default_color.as_ref(), requested)
        }
        None => default_color,
    };
    let size = query
        .size
        .as_deref()
        .filter(|s| product.has_size(s))
        .or_else(|| product.sizes.first().map(String::as_str))
        .map(str::to_string);

    let view = DetailView {
        url: product.url(),
        image: parse_index(query.image.as_deref())
            .filter(|&i| i < product.images.len())
            .unwrap_or(0),
        color: color.as_ref().map(ToString::to_string),
        size: size.clone(),
        quantity,
        tab: Tab::parse(query.tab.as_deref().unwrap_or_default()),
    };

    let gallery = ImageGallery::new(
        &product.images,
        Some(view.image),
        "image",
        view.with(|v| v.image = 0).href(),
    )
    .ratio(4, 3);

    let swatches = ColorSwatch::new(&product.colors, color.as_ref(), |id| {
        view.with(|v| v.color = Some(id.to_string())).href()
    })
    .size(SwatchSize::Md);

    let sizes = product
        .sizes
        .iter()
        .map(|s| SizeOption {
            label: s.clone(),
            href: view.with(|v| v.size = Some(s.clone())).href(),
            selected: size.as_deref() == Some(s.as_str()),
        })
        .collect();

    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| TabLink {
            id: tab.as_str(),
            label: match tab {
                Tab::Description => "Full Description".to_string(),
                Tab::Specifications => "Specifications".to_string(),
                Tab::Reviews => format!("Reviews ({})", product.reviews.len()),
            },
            href: format!("{}#product-tabs", view.with(|v| v.tab = tab).href()),
            active: tab == view.tab,
        })
        .collect();

    let votes = session::load_votes(&session).await?;
    let reviews = product
        .reviews
        .iter()
        .map(|review| {
            ReviewCard::new(review).with_voting(
                format!("{}/reviews/{}/vote", product.url(), review.id),
                votes.get(&review.id),
            )
        })
        .collect();

    let self_href = view.href();
    let related = Carousel::new(
        catalog
            .related(product)
            .into_iter()
            .map(|p| ProductCard::new(p).with_add_to_cart(self_href.as_str()))
            .collect(),
        CarouselOptions {
            autoplay: None,
            ..CarouselOptions::default()
        },
        "related",
        self_href.as_str(),
    )
    .select(parse_index(query.related.as_deref()));

    let in_wishlist = session::load_wishlist(&session)
        .await?
        .contains(&product.handle);

    let added = query
        .added
        .as_deref()
        .and_then(|a| a.trim().parse::<u32>().ok())
        .filter(|&a| a > 0);

    let layout = PageLayout::load(&state, &session, &product.url(), product.name.as_str())
        .await?
        .breadcrumbs(
            Breadcrumbs::home()
                .link("Products", "/products")
                .page(product.name.as_str()),
        );

    Ok(ProductShowTemplate {
        layout,
        product_url: product.url(),
        rating: product.rating.map(|r| {
            StarRating::new(r)
                .with_label()
                .with_review_count(product.review_count)
        }),
        gallery,
        swatches,
        sizes,
        stepper: QuantityStepper::new(bounds, view.quantity),
        tabs,
        active_tab: view.tab.as_str(),
        reviews,
        related,
        in_wishlist,
        color_value: view.color.clone().unwrap_or_default(),
        size_value: view.size.clone().unwrap_or_default(),
        image_value: view.image.to_string(),
        tab_value: view.tab.as_str(),
        self_href,
        added,
        product: product.clone(),
    })
}

// =============================================================================
// Wishlist & review votes
// =============================================================================

/// Form posted by the wishlist button.
#[derive(Debug, Default, Deserialize)]
pub struct WishlistForm {
    pub return_to: Option<String>,
}

/// Add a product to the session wishlist.
#[instrument(skip(state, session, form), fields(handle = %handle))]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
    Form(form): Form<WishlistForm>,
) -> Result<Redirect> {
    let product = state
        .catalog()
        .get(&handle)
        .ok_or_else(|| AppError::NotFound(format!("product {handle}")))?;

    let mut wishlist = session::load_wishlist(&session).await?;
    if wishlist.add(product.handle.clone()) {
        session::save_wishlist(&session, &wishlist).await?;
    }

    add_breadcrumb("wishlist", "Added to wishlist", Some(&[("product", handle.as_str())]));
    tracing::info!(product = %product.handle, "Added to wishlist");

    session::push_notice(
        &session,
        Notice::info(format!("{} added to wishlist!", product.name)),
    )
    .await?;

    Ok(Redirect::to(&safe_return_to(
        form.return_to.as_deref(),
        &product.url(),
    )))
}

/// Form posted by the helpful / not-helpful buttons.
#[derive(Debug, Deserialize)]
pub struct VoteForm {
    pub direction: String,
}

/// Record this session's vote on a review.
#[instrument(skip(state, session, form))]
pub async fn vote(
    State(state): State<AppState>,
    session: Session,
    Path((handle, review_id)): Path<(String, String)>,
    Form(form): Form<VoteForm>,
) -> Result<Redirect> {
    let product = state
        .catalog()
        .get(&handle)
        .ok_or_else(|| AppError::NotFound(format!("product {handle}")))?;
    let review = product
        .review(&review_id)
        .ok_or_else(|| AppError::NotFound(format!("review {review_id}")))?;
    let direction = VoteDirection::parse(&form.direction)
        .ok_or_else(|| AppError::BadRequest("Unknown vote direction".to_string()))?;

    let mut votes = session::load_votes(&session).await?;
    let outcome = votes.cast(review.id.clone(), direction);
    if outcome != VoteOutcome::Unchanged {
        session::save_votes(&session, &votes).await?;
    }

    add_breadcrumb(
        "review",
        "Review vote",
        Some(&[("review", review_id.as_str()), ("direction", direction.as_str())]),
    );
    tracing::info!(review = %review.id, direction = direction.as_str(), ?outcome, "Review vote");

    Ok(Redirect::to(&format!(
        "{}#review-{}",
        href(&product.url(), &[("tab", Tab::Reviews.as_str())]),
        review.id
    )))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_listing_query_collects_repeated_categories() {
        let query = ListingQuery::from_pairs(pairs(&[
            ("category", "Wearables"),
            ("category", "Audio"),
            ("category", "Wearables"),
            ("brand", "BrandB"),
            ("sort", "price-asc"),
            ("page", "2"),
        ]));
        assert_eq!(query.categories, ["Wearables", "Audio"]);
        assert_eq!(query.brand.as_deref(), Some("BrandB"));
        assert_eq!(query.sort, SortOrder::PriceAsc);
        assert_eq!(query.page, 2);
        assert_eq!(query.filters().heading(), "Wearables");
    }

    #[test]
    fn test_listing_query_ignores_junk() {
        let query = ListingQuery::from_pairs(pairs(&[
            ("page", "last"),
            ("min_price", "cheap"),
            ("brand", ""),
        ]));
        assert_eq!(query.page, 1);
        assert!(query.min_price.is_none());
        assert!(query.brand.is_none());
        assert_eq!(query.filters().price, PriceRange::default());
    }

    #[test]
    fn test_listing_href_keeps_filters() {
        let query = ListingQuery::from_pairs(pairs(&[
            ("category", "Audio"),
            ("max_price", "200"),
            ("q", "wireless buds"),
        ]));
        assert_eq!(
            query.href(1),
            "/products?category=Audio&min_price=0&max_price=200&q=wireless%20buds"
        );
        assert_eq!(
            query.href(3),
            "/products?category=Audio&min_price=0&max_price=200&q=wireless%20buds&page=3"
        );
        assert_eq!(ListingQuery::default().href(1), "/products");
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!(Tab::parse("reviews"), Tab::Reviews);
        assert_eq!(Tab::parse("specifications"), Tab::Specifications);
        assert_eq!(Tab::parse("bogus"), Tab::Description);
    }

    #[test]
    fn test_detail_view_href_omits_defaults() {
        let view = DetailView {
            url: "/products/p123".to_string(),
            image: 0,
            color: None,
            size: None,
            quantity: 1,
            tab: Tab::Description,
        };
        assert_eq!(view.href(), "/products/p123");

        let view = view.with(|v| {
            v.image = 2;
            v.color = Some("black".to_string());
            v.size = Some("M/L".to_string());
            v.quantity = 3;
            v.tab = Tab::Reviews;
        });
        assert_eq!(
            view.href(),
            "/products/p123?image=2&color=black&size=M%2FL&quantity=3&tab=reviews"
        );
    }
}
