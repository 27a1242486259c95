//! Search route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::components::{Breadcrumbs, ProductCard};
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

use super::{PageLayout, href};

/// Suggestions shown under the header search box.
const SUGGESTION_LIMIT: usize = 5;

/// Search query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// A suggested product.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub name: String,
    pub href: String,
}

/// Search results page template.
#[derive(Template, WebTemplate)]
#[template(path = "search/index.html")]
pub struct SearchTemplate {
    pub layout: PageLayout,
    pub query: String,
    pub cards: Vec<ProductCard>,
}

/// Search suggestions fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/search_suggest.html")]
pub struct SuggestTemplate {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
}

impl SuggestTemplate {
    /// Link to the full results page for this query.
    #[must_use]
    pub fn all_results_href(&self) -> String {
        href("/search", &[("q", self.query.as_str())])
    }
}

/// Display the search results page.
///
/// A blank query renders the page with no results.
#[instrument(skip(state, session))]
pub async fn page(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SearchQuery>,
) -> Result<SearchTemplate> {
    let q = query.q.trim().to_string();
    let catalog = state.catalog();
    let return_to = href("/search", &[("q", q.as_str())]);

    let hits = state.search().search(&q, catalog.products().len())?;
    let cards: Vec<ProductCard> = hits
        .iter()
        .filter_map(|hit| catalog.get(hit.handle.as_str()))
        .map(|product| ProductCard::new(product).with_add_to_cart(return_to.as_str()))
        .collect();

    tracing::debug!(query = %q, results = cards.len(), "Search page");

    let layout = PageLayout::load(&state, &session, "/search", "Search")
        .await?
        .breadcrumbs(Breadcrumbs::home().page("Search"))
        .search_query(&q);

    Ok(SearchTemplate {
        layout,
        query: q,
        cards,
    })
}

/// Get search suggestions (fragment).
#[instrument(skip(state))]
pub async fn suggest(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<SuggestTemplate> {
    let q = query.q.trim().to_string();
    let catalog = state.catalog();

    let suggestions = state
        .search()
        .search(&q, SUGGESTION_LIMIT)?
        .iter()
        .filter_map(|hit| catalog.get(hit.handle.as_str()))
        .map(|product| Suggestion {
            name: product.name.clone(),
            href: product.url(),
        })
        .collect();

    Ok(SuggestTemplate {
        query: q,
        suggestions,
    })
}
