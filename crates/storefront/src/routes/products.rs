//! Product route handlers.
//!
//! Product pages show the honest defect checklist, the like toggle and the
//! add-to-cart action. Both actions are plain form posts followed by a
//! redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use unsold_flower_core::presentation::toast_step;
use unsold_flower_core::{CartItem, Flower, FlowerId, LikeToggle, Shop};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;
use crate::store::{SessionStore, VisitorState};

/// Flower card data shared by the search, market and my pages.
#[derive(Clone)]
pub struct FlowerCardView {
    pub id: i32,
    pub name: &'static str,
    pub shop_name: &'static str,
    pub price: String,
    pub original_price: String,
    pub discount: u8,
    pub grade_badge: &'static str,
    pub grade_class: &'static str,
    pub grade_description: &'static str,
    pub image: &'static str,
}

impl FlowerCardView {
    #[must_use]
    pub fn new(flower: &'static Flower, shop: Option<&'static Shop>) -> Self {
        Self {
            id: flower.id.as_i32(),
            name: flower.name,
            shop_name: shop.map_or("", |s| s.name),
            price: flower.price.to_string(),
            original_price: flower.original_price.to_string(),
            discount: flower.discount,
            grade_badge: flower.grade.badge(),
            grade_class: flower.grade.css_class(),
            grade_description: flower.grade_description,
            image: flower.image,
        }
    }
}

/// Parse a path segment as a flower id; anything unparseable is unknown.
fn parse_flower_id(raw: &str) -> Result<FlowerId> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("product {raw}")))
}

/// Query parameters for the product page.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    /// Set after a like was added; shows the confirmation toast.
    pub liked: Option<u8>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub active_tab: &'static str,
    pub flower: &'static Flower,
    pub shop: &'static Shop,
    pub grade_label: String,
    pub is_liked: bool,
    pub show_toast: bool,
    pub toast_delay: String,
}

/// Display product detail page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(raw_id): Path<String>,
    query: std::result::Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Response> {
    let Query(query) = query?;
    let id = parse_flower_id(&raw_id)?;
    let (flower, shop) = state
        .catalog()
        .product(id)
        .ok_or_else(|| AppError::NotFound(format!("product {raw_id}")))?;

    let visitor = VisitorState::load(&SessionStore::new(&session)).await?;
    let is_liked = visitor.liked.contains(id);

    Ok(ProductShowTemplate {
        active_tab: "",
        flower,
        shop,
        grade_label: format!("{} {}", flower.grade.emoji(), flower.grade.label()),
        is_liked,
        show_toast: is_liked && query.liked == Some(1),
        toast_delay: toast_step().delay_css(),
    }
    .into_response())
}

/// Toggle the liked state of a product.
///
/// Redirects back to the product; a fresh like adds `?liked=1` so the page
/// shows the confirmation notice.
#[instrument(skip(state, session))]
pub async fn toggle_like(
    State(state): State<AppState>,
    session: Session,
    Path(raw_id): Path<String>,
) -> Result<Redirect> {
    let id = parse_flower_id(&raw_id)?;
    if state.catalog().flower(id).is_none() {
        return Err(AppError::NotFound(format!("product {raw_id}")));
    }

    let store = SessionStore::new(&session);
    let mut visitor = VisitorState::load(&store).await?;
    let outcome = visitor.liked.toggle(id);
    visitor.persist_liked(&store).await?;

    let id_str = id.to_string();
    add_breadcrumb(
        "likes",
        "Toggled like",
        Some(&[("flower_id", &id_str), ("outcome", outcome_label(outcome))]),
    );
    tracing::info!(flower_id = %id, ?outcome, liked = visitor.liked.len(), "Like toggled");

    Ok(match outcome {
        LikeToggle::Liked => Redirect::to(&format!("/product/{id}?liked=1")),
        LikeToggle::Unliked => Redirect::to(&format!("/product/{id}")),
    })
}

const fn outcome_label(outcome: LikeToggle) -> &'static str {
    match outcome {
        LikeToggle::Liked => "liked",
        LikeToggle::Unliked => "unliked",
    }
}

/// Append one unit of a product to the cart.
///
/// Adding the same product again creates another line.
#[instrument(skip(state, session))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    session: Session,
    Path(raw_id): Path<String>,
) -> Result<Redirect> {
    let id = parse_flower_id(&raw_id)?;
    let (flower, shop) = state
        .catalog()
        .product(id)
        .ok_or_else(|| AppError::NotFound(format!("product {raw_id}")))?;

    let store = SessionStore::new(&session);
    let mut visitor = VisitorState::load(&store).await?;
    visitor.cart.add(CartItem::from_product(flower, shop));
    visitor.persist_cart(&store).await?;

    let id_str = id.to_string();
    add_breadcrumb("cart", "Added flower to cart", Some(&[("flower_id", &id_str)]));
    tracing::info!(flower_id = %id, lines = visitor.cart.len(), "Added to cart");

    Ok(Redirect::to("/cart"))
}
