//! Market detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use unsold_flower_core::{Shop, ShopId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::products::FlowerCardView;
use crate::state::AppState;

/// Market detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "market.html")]
pub struct MarketTemplate {
    pub active_tab: &'static str,
    pub shop: &'static Shop,
    pub flowers: Vec<FlowerCardView>,
}

/// Display one market and the flowers it sells.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<MarketTemplate> {
    let not_found = || AppError::NotFound(format!("market {raw_id}"));

    let id: ShopId = raw_id.parse().map_err(|_| not_found())?;
    let catalog = state.catalog();
    let shop = catalog.shop(id).ok_or_else(not_found)?;

    let flowers = catalog
        .flowers_by_shop(id)
        .into_iter()
        .map(|flower| FlowerCardView::new(flower, Some(shop)))
        .collect();

    Ok(MarketTemplate {
        active_tab: "",
        shop,
        flowers,
    })
}
