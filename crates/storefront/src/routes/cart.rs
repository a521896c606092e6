//! Cart route handlers.
//!
//! Lines are addressed by their position in the cart, since the same flower
//! can appear on several lines. Every mutation is a form post that redirects
//! back to `/cart`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::rejection::FormRejection, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use unsold_flower_core::{Cart, CartSummary};

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::store::{SessionStore, VisitorState};

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub line: usize,
    pub name: String,
    pub shop_name: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
    pub image: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub summary: CartSummary,
    pub total: String,
    pub remaining: String,
    pub threshold: String,
    pub progress_percent: u8,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let summary = cart.summary();
        Self {
            lines: cart
                .lines()
                .iter()
                .enumerate()
                .map(|(line, item)| CartLineView {
                    line,
                    name: item.name.clone(),
                    shop_name: item.shop_name.clone(),
                    price: item.price.to_string(),
                    quantity: item.quantity,
                    line_total: item.line_total().to_string(),
                    image: item.image.clone(),
                })
                .collect(),
            total: summary.total.to_string(),
            remaining: summary.remaining.to_string(),
            threshold: summary.threshold.to_string(),
            progress_percent: summary.progress_percent(),
            summary,
        }
    }
}

impl CartView {
    /// Label of the checkout call-to-action.
    #[must_use]
    pub fn cta_label(&self) -> String {
        if !self.summary.checkout_available {
            "상품을 담아주세요".to_string()
        } else if self.summary.dawn_delivery_eligible {
            format!("{} 새벽 배송하러 가기", self.total)
        } else {
            format!("{} 픽업 주문하기", self.total)
        }
    }
}

/// Quantity change form data.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub line: usize,
    pub delta: i32,
}

/// Remove line form data.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub line: usize,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub active_tab: &'static str,
    pub cart: CartView,
}

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CartShowTemplate> {
    let visitor = VisitorState::load(&SessionStore::new(&session)).await?;

    Ok(CartShowTemplate {
        active_tab: "cart",
        cart: CartView::from(&visitor.cart),
    })
}

/// Change the quantity of one line; it never drops below 1.
#[instrument(skip(session))]
pub async fn update_quantity(
    session: Session,
    form: std::result::Result<Form<QuantityForm>, FormRejection>,
) -> Result<Redirect> {
    let Form(form) = form?;
    let store = SessionStore::new(&session);
    let mut visitor = VisitorState::load(&store).await?;

    if visitor.cart.change_quantity(form.line, form.delta) {
        visitor.persist_cart(&store).await?;
    } else {
        tracing::debug!(line = form.line, "Quantity change for missing line");
    }

    Ok(Redirect::to("/cart"))
}

/// Remove one line from the cart.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    form: std::result::Result<Form<RemoveForm>, FormRejection>,
) -> Result<Redirect> {
    let Form(form) = form?;
    let store = SessionStore::new(&session);
    let mut visitor = VisitorState::load(&store).await?;

    if let Some(item) = visitor.cart.remove(form.line) {
        visitor.persist_cart(&store).await?;
        add_breadcrumb("cart", "Removed line", Some(&[("name", item.name.as_str())]));
    } else {
        tracing::debug!(line = form.line, "Remove for missing line");
    }

    Ok(Redirect::to("/cart"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use unsold_flower_core::{CartItem, Catalog, FlowerId};

    use super::*;

    fn cart_with(ids: &[i32]) -> Cart {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        for id in ids {
            let (flower, shop) = catalog.product(FlowerId::new(*id)).unwrap();
            cart.add(CartItem::from_product(flower, shop));
        }
        cart
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from(&Cart::new());
        assert!(view.lines.is_empty());
        assert_eq!(view.progress_percent, 0);
        assert_eq!(view.remaining, "10,000원");
        assert_eq!(view.cta_label(), "상품을 담아주세요");
    }

    #[test]
    fn test_cta_for_pickup_and_delivery() {
        assert_eq!(CartView::from(&cart_with(&[1])).cta_label(), "4,500원 픽업 주문하기");
        assert_eq!(
            CartView::from(&cart_with(&[5, 1])).cta_label(),
            "12,500원 새벽 배송하러 가기"
        );
    }

    #[test]
    fn test_lines_are_numbered_by_position() {
        let view = CartView::from(&cart_with(&[3, 3]));
        let positions: Vec<_> = view.lines.iter().map(|l| l.line).collect();
        assert_eq!(positions, [0, 1]);
    }
}
