//! Cart route handlers.
//!
//! The cart lives in the session. Every mutation is a form post that
//! redirects back, so the page works without JavaScript.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use electromart_core::{Price, ShippingMethod};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::Product;
use crate::components::{
    Breadcrumbs, QuantityBounds, QuantityStepper, StepperInput, StepperSize, color_swatch,
};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::{CartLine, NewLine, Notice, session};
use crate::state::AppState;

use super::{PageLayout, safe_return_to};

/// A cart line with its stepper.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub line: CartLine,
    pub line_total: Price,
    pub stepper: QuantityStepper,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub layout: PageLayout,
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

impl CartShowTemplate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Add to cart form data.
#[derive(Debug, Default, Deserialize)]
pub struct AddToCartForm {
    pub product: String,
    pub quantity: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub return_to: Option<String>,
    /// Set by the detail page to open its "Added to Cart!" dialog.
    pub confirm: Option<String>,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub line_id: String,
    pub quantity: Option<String>,
    /// Value posted by a stepper button; wins over the typed quantity.
    pub step_to: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub line_id: String,
}

/// Variant label for a cart line: "Color: Midnight Black, Size: M/L".
///
/// Unknown or unavailable colors fall back to the first available one;
/// unknown sizes fall back to the first size.
#[must_use]
pub fn variant_label(product: &Product, color: Option<&str>, size: Option<&str>) -> Option<String> {
    let default_color = color_swatch::default_selection(&product.colors);
    let color_id = match color {
        Some(requested) => color_swatch::select(&product.colors, default_color.as_ref(), requested),
        None => default_color,
    };
    let color_name = color_id
        .and_then(|id| product.color(id.as_str()))
        .map(|c| c.name.as_str());
    let size = size
        .filter(|s| product.has_size(s))
        .or_else(|| product.sizes.first().map(String::as_str));

    let parts: Vec<String> = [
        color_name.map(|name| format!("Color: {name}")),
        size.map(|size| format!("Size: {size}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    (!parts.is_empty()).then(|| parts.join(", "))
}

/// Display cart page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<CartShowTemplate> {
    let cart = session::load_cart(&session, &state).await?;
    let bounds = QuantityBounds::up_to(state.config().max_line_quantity);

    let lines = cart
        .lines()
        .iter()
        .map(|line| CartLineView {
            line: line.clone(),
            line_total: line.line_total(),
            stepper: QuantityStepper::new(bounds, line.quantity).size(StepperSize::Sm),
        })
        .collect();

    let layout = PageLayout::load(&state, &session, "/cart", "Shopping Cart")
        .await?
        .breadcrumbs(Breadcrumbs::home().page("Shopping Cart"));

    Ok(CartShowTemplate {
        layout,
        lines,
        item_count: cart.item_count(),
        subtotal: cart.subtotal(),
        shipping: cart.shipping(ShippingMethod::Standard),
        total: cart.total(ShippingMethod::Standard),
    })
}

/// Add item to cart, then go back to the page that asked.
#[instrument(skip(state, session, form), fields(product = %form.product))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product = state
        .catalog()
        .get(form.product.trim())
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product)))?;

    let bounds = QuantityBounds::up_to(state.config().max_line_quantity);
    let quantity = match form.quantity.as_deref().map(|q| bounds.parse_input(q)) {
        Some(StepperInput::Value(value)) => value,
        _ => bounds.min,
    };
    let variant = variant_label(product, form.color.as_deref(), form.size.as_deref());

    let mut cart = session::load_cart(&session, &state).await?;
    let line = cart.add(
        NewLine {
            product,
            variant: variant.clone(),
            quantity,
        },
        bounds,
    );
    session::save_cart(&session, &cart).await?;

    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product", product.handle.as_str()), ("line", line.id.as_str())]),
    );
    tracing::info!(
        product = %product.handle,
        line = %line.id,
        quantity,
        line_quantity = line.quantity,
        "Added to cart"
    );

    let description = variant.map_or_else(
        || format!("Quantity: {quantity}"),
        |v| format!("{v}, Quantity: {quantity}"),
    );
    session::push_notice(
        &session,
        Notice::success(format!("{} added to cart!", product.name))
            .description(description)
            .action("View Cart", "/cart"),
    )
    .await?;

    let return_to = safe_return_to(form.return_to.as_deref(), &product.url());
    if form.confirm.is_some() {
        let separator = if return_to.contains('?') { '&' } else { '?' };
        Ok(Redirect::to(&format!("{return_to}{separator}added={quantity}")))
    } else {
        Ok(Redirect::to(&return_to))
    }
}

/// Set a line's quantity from the stepper.
#[instrument(skip(state, session, form), fields(line = %form.line_id))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<Redirect> {
    let mut cart = session::load_cart(&session, &state).await?;
    let Some(current) = cart.line(&form.line_id).map(|l| l.quantity) else {
        tracing::debug!("Update for unknown cart line");
        return Ok(Redirect::to("/cart"));
    };

    let bounds = QuantityBounds::up_to(state.config().max_line_quantity);
    let requested = form.step_to.as_deref().or(form.quantity.as_deref());
    let quantity = match requested.map(|q| bounds.parse_input(q)) {
        Some(StepperInput::Value(value)) => value,
        Some(StepperInput::Empty) | None => bounds.commit(None),
        Some(StepperInput::Ignored) => current,
    };

    if quantity != current {
        cart.set_quantity(&form.line_id, i64::from(quantity), bounds);
        session::save_cart(&session, &cart).await?;
        tracing::info!(from = current, to = quantity, "Cart quantity updated");
    }

    Ok(Redirect::to("/cart"))
}

/// Remove a line from the cart.
#[instrument(skip(state, session, form), fields(line = %form.line_id))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Redirect> {
    let mut cart = session::load_cart(&session, &state).await?;

    if let Some(line) = cart.remove(&form.line_id) {
        session::save_cart(&session, &cart).await?;
        add_breadcrumb(
            "cart",
            "Removed from cart",
            Some(&[("product", line.product.as_str())]),
        );
        tracing::info!(product = %line.product, "Removed from cart");
    }

    Ok(Redirect::to("/cart"))
}

/// Get cart count badge (fragment).
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Result<CartCountTemplate> {
    let cart = session::load_cart(&session, &state).await?;
    Ok(CartCountTemplate {
        count: cart.item_count(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_variant_label_defaults() {
        let catalog = Catalog::placeholder();
        let watch = catalog.get("p123").unwrap();
        assert_eq!(
            variant_label(watch, None, None).as_deref(),
            Some("Color: Midnight Black, Size: S/M")
        );
    }

    #[test]
    fn test_variant_label_ignores_unknown_choices() {
        let catalog = Catalog::placeholder();
        let watch = catalog.get("p123").unwrap();
        assert_eq!(
            variant_label(watch, Some("nope"), Some("XXL")),
            variant_label(watch, None, None)
        );
    }

    #[test]
    fn test_variant_label_without_options() {
        let catalog = Catalog::placeholder();
        let headphones = catalog.get("fp1").unwrap();
        assert!(headphones.colors.is_empty() && headphones.sizes.is_empty());
        assert_eq!(variant_label(headphones, Some("black"), Some("M")), None);
    }
}
