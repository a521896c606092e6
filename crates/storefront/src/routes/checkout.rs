//! Checkout route handlers.
//!
//! The selected method travels in the query string (`?method=`) and in the
//! payment form. Eligibility for dawn delivery is recomputed from the
//! session cart on every request; a client cannot select delivery for a
//! cart below the threshold.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::{
        Query,
        rejection::{FormRejection, QueryRejection},
    },
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use unsold_flower_core::{Checkout, CheckoutError, DeliveryMethod, Receipt};

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequestId;
use crate::routes::cart::CartView;
use crate::store::{SessionStore, VisitorState};

/// Method selection, from the query string or the payment form.
///
/// Unknown values are ignored and leave the default (pickup).
#[derive(Debug, Default, Deserialize)]
pub struct MethodParams {
    pub method: Option<String>,
}

impl MethodParams {
    fn requested(&self) -> Option<DeliveryMethod> {
        self.method.as_deref().and_then(|m| m.parse().ok())
    }
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutShowTemplate {
    pub active_tab: &'static str,
    pub cart: CartView,
    pub method: DeliveryMethod,
    pub eligible: bool,
    pub fee: String,
    pub payable_total: String,
}

/// Order completion template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/success.html")]
pub struct CheckoutSuccessTemplate {
    pub active_tab: &'static str,
    pub receipt: Receipt,
    pub order_number: String,
}

/// Start a checkout for the session cart, or send the visitor back to an
/// empty cart.
fn begin_or_redirect(visitor: &VisitorState) -> std::result::Result<Checkout, Redirect> {
    match Checkout::begin(&visitor.cart) {
        Ok(checkout) => Ok(checkout),
        Err(CheckoutError::EmptyCart | CheckoutError::AlreadyCompleted) => {
            Err(Redirect::to("/cart"))
        }
    }
}

/// Display the method selection and payment summary.
#[instrument(skip(session))]
pub async fn show(
    session: Session,
    params: std::result::Result<Query<MethodParams>, QueryRejection>,
) -> Result<Response> {
    let Query(params) = params?;
    let visitor = VisitorState::load(&SessionStore::new(&session)).await?;
    let mut checkout = match begin_or_redirect(&visitor) {
        Ok(checkout) => checkout,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    if let Some(method) = params.requested() {
        if !checkout.select_method(method) {
            tracing::debug!(%method, "Delivery refused below threshold");
        }
    }

    let method = checkout.method();
    Ok(CheckoutShowTemplate {
        active_tab: "",
        cart: CartView::from(&visitor.cart),
        method,
        eligible: checkout.dawn_delivery_eligible(),
        fee: method.fee().to_string(),
        payable_total: checkout.payable_total().to_string(),
    }
    .into_response())
}

/// Pay (always succeeds), clear the cart and show the terminal success page.
#[instrument(skip(session, request_id))]
pub async fn complete(
    session: Session,
    Extension(request_id): Extension<RequestId>,
    params: std::result::Result<Form<MethodParams>, FormRejection>,
) -> Result<Response> {
    let Form(params) = params?;
    let store = SessionStore::new(&session);
    let mut visitor = VisitorState::load(&store).await?;
    let mut checkout = match begin_or_redirect(&visitor) {
        Ok(checkout) => checkout,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    if let Some(method) = params.requested() {
        checkout.select_method(method);
    }

    let receipt = checkout.complete(&mut visitor.cart)?;
    visitor.persist_cart(&store).await?;

    let order_number = receipt.short_number();
    add_breadcrumb(
        "checkout",
        "Order completed",
        Some(&[
            ("order", order_number.as_str()),
            ("method", receipt.method.as_str()),
            ("request_id", request_id.0.as_str()),
        ]),
    );
    tracing::info!(
        request_id = %request_id.0,
        order = %order_number,
        method = %receipt.method,
        total = receipt.grand_total.amount(),
        "Checkout completed"
    );

    Ok(CheckoutSuccessTemplate {
        active_tab: "",
        receipt,
        order_number,
    }
    .into_response())
}
