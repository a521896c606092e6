//! My page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::products::FlowerCardView;
use crate::state::AppState;
use crate::store::{SessionStore, VisitorState};

/// My page template.
#[derive(Template, WebTemplate)]
#[template(path = "my.html")]
pub struct MyTemplate {
    pub active_tab: &'static str,
    pub liked: Vec<FlowerCardView>,
}

/// Display the visitor's liked flowers in catalog order.
#[instrument(skip(state, session))]
pub async fn my_page(State(state): State<AppState>, session: Session) -> Result<MyTemplate> {
    let catalog = state.catalog();
    let visitor = VisitorState::load(&SessionStore::new(&session)).await?;

    let liked = visitor
        .liked
        .liked_flowers(&catalog)
        .into_iter()
        .map(|flower| FlowerCardView::new(flower, catalog.shop(flower.shop_id)))
        .collect();

    Ok(MyTemplate {
        active_tab: "my",
        liked,
    })
}
