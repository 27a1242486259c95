//! Checkout route handlers.
//!
//! One form carries the shipping address, shipping and payment method and
//! card details. Failed validation re-renders the page with inline messages;
//! a valid order is stored in the session for the confirmation page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use electromart_core::{Country, PaymentMethod, Price, ShippingMethod};
use tower_sessions::Session;
use tracing::instrument;

use crate::components::Breadcrumbs;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::{Cart, CartLine, Notice, PlacedOrder, generate_order_number, session};
use crate::services::checkout::{CheckoutForm, FieldErrors, validate};
use crate::state::AppState;

use super::PageLayout;

/// Notice shown when the shipping address section has errors.
const SHIPPING_ERRORS_NOTICE: &str = "Please correct the errors in the shipping address.";

/// A radio or select option.
#[derive(Debug, Clone)]
pub struct Choice {
    pub value: &'static str,
    pub label: String,
    pub selected: bool,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub layout: PageLayout,
    pub form: CheckoutForm,
    pub errors: FieldErrors,
    pub countries: Vec<Choice>,
    pub shipping_methods: Vec<Choice>,
    pub payment_methods: Vec<Choice>,
    pub pay_by_card: bool,
    pub lines: Vec<CartLine>,
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

impl CheckoutTemplate {
    async fn build(
        state: &AppState,
        session: &Session,
        cart: &Cart,
        form: CheckoutForm,
        errors: FieldErrors,
    ) -> Result<Self> {
        let mut layout = PageLayout::load(state, session, "/checkout", "Checkout")
            .await?
            .breadcrumbs(Breadcrumbs::home().link("Cart", "/cart").page("Checkout"));
        if errors.has_shipping_errors() {
            layout.notices.push(Notice::error(SHIPPING_ERRORS_NOTICE));
        }

        let currency = cart.currency();
        let shipping_method = form.shipping_method();
        let payment_method = form.payment_method();

        Ok(Self {
            layout,
            countries: Country::ALL
                .into_iter()
                .map(|c| Choice {
                    value: c.code(),
                    label: c.name().to_string(),
                    selected: c.code() == form.country,
                })
                .collect(),
            shipping_methods: ShippingMethod::ALL
                .into_iter()
                .map(|m| Choice {
                    value: m.as_str(),
                    label: format!("{} - {}", m.label(), m.cost(currency)),
                    selected: m == shipping_method,
                })
                .collect(),
            payment_methods: PaymentMethod::ALL
                .into_iter()
                .map(|m| Choice {
                    value: m.as_str(),
                    label: m.label().to_string(),
                    selected: m == payment_method,
                })
                .collect(),
            pay_by_card: payment_method == PaymentMethod::CreditCard,
            lines: cart.lines().to_vec(),
            subtotal: cart.subtotal(),
            shipping: cart.shipping(shipping_method),
            total: cart.total(shipping_method),
            form,
            errors,
        })
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate {
    pub layout: PageLayout,
    pub order: PlacedOrder,
}

/// Display the checkout form.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Response> {
    let cart = session::load_cart(&session, &state).await?;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    let page = CheckoutTemplate::build(
        &state,
        &session,
        &cart,
        CheckoutForm::default(),
        FieldErrors::default(),
    )
    .await?;
    Ok(page.into_response())
}

/// Validate the checkout form and place the order.
#[instrument(skip(state, session, form))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let mut cart = session::load_cart(&session, &state).await?;
    if cart.is_empty() {
        session::push_notice(&session, Notice::error("Your cart is empty")).await?;
        return Ok(Redirect::to("/cart").into_response());
    }

    let checkout = match validate(&form) {
        Ok(checkout) => checkout,
        Err(errors) => {
            tracing::info!(
                fields = errors.len(),
                shipping = errors.has_shipping_errors(),
                "Checkout validation failed"
            );
            let page =
                CheckoutTemplate::build(&state, &session, &cart, form.redisplay(), errors).await?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    let number = generate_order_number(&mut rand::rng());
    let order = PlacedOrder::from_cart(
        number,
        &cart,
        checkout.contact,
        checkout.shipping_method,
        checkout.payment_method,
    );

    session::save_last_order(&session, &order).await?;
    cart.clear();
    session::save_cart(&session, &cart).await?;

    add_breadcrumb(
        "checkout",
        "Order placed",
        Some(&[("order", order.number.as_str())]),
    );
    tracing::info!(
        order = %order.number,
        items = order.item_count(),
        total = %order.total,
        shipping_method = order.shipping_method.as_str(),
        payment_method = order.payment_method.as_str(),
        country = checkout.country.code(),
        "Order placed"
    );

    session::push_notice(
        &session,
        Notice::success("Order Placed Successfully!").description(
            "Thank you for your purchase. Your order confirmation will be sent to your email.",
        ),
    )
    .await?;

    Ok(Redirect::to(&format!("/order-confirmation/{}", order.number)).into_response())
}

/// Display the confirmation for this session's last order.
#[instrument(skip(state, session))]
pub async fn confirmation(
    State(state): State<AppState>,
    session: Session,
    Path(order_number): Path<String>,
) -> Result<ConfirmationTemplate> {
    let order = session::load_last_order(&session)
        .await?
        .filter(|order| order.number.as_str() == order_number)
        .ok_or_else(|| AppError::NotFound(format!("order {order_number}")))?;

    let layout = PageLayout::load(&state, &session, "/checkout", "Order Confirmation")
        .await?
        .breadcrumbs(Breadcrumbs::home().page("Order Confirmation"));

    Ok(ConfirmationTemplate { layout, order })
}
