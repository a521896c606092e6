//! Home and intro route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::Redirect};
use tracing::instrument;

use unsold_flower_core::GradeCounts;
use unsold_flower_core::presentation::{RevealEffect, SPLASH_SEQUENCE};

use crate::filters;
use crate::state::AppState;

/// Number of card backgrounds that the stylesheet cycles through.
const CARD_BACKGROUNDS: usize = 3;

/// Market card on the home page.
#[derive(Clone)]
pub struct MarketCardView {
    pub id: i32,
    pub name: &'static str,
    pub address: &'static str,
    pub distance: String,
    pub background_class: String,
    pub counts: GradeCounts,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub active_tab: &'static str,
    pub markets: Vec<MarketCardView>,
}

/// Splash page template.
#[derive(Template, WebTemplate)]
#[template(path = "intro.html")]
pub struct IntroTemplate {
    pub active_tab: &'static str,
    pub text_delay: String,
    pub button_delay: String,
}

/// `/` lands on the home tab.
pub async fn root() -> Redirect {
    Redirect::to("/home")
}

/// Display the market list, nearest first.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> HomeTemplate {
    let catalog = state.catalog();
    let markets = catalog
        .shops_by_distance()
        .into_iter()
        .enumerate()
        .map(|(idx, shop)| MarketCardView {
            id: shop.id.as_i32(),
            name: shop.name,
            address: shop.address,
            distance: shop.distance_label(),
            background_class: format!("market-bg-{}", idx % CARD_BACKGROUNDS),
            counts: catalog.grade_counts(shop.id),
        })
        .collect();

    HomeTemplate {
        active_tab: "home",
        markets,
    }
}

/// Delay before `effect` appears in the splash sequence.
fn splash_delay(effect: RevealEffect) -> String {
    SPLASH_SEQUENCE
        .iter()
        .find(|step| step.effect == effect)
        .map(|step| step.delay_css())
        .unwrap_or_default()
}

/// Display the splash page.
#[instrument]
pub async fn intro() -> IntroTemplate {
    IntroTemplate {
        active_tab: "",
        text_delay: splash_delay(RevealEffect::Text),
        button_delay: splash_delay(RevealEffect::EnterButton),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_delays_follow_sequence() {
        assert_eq!(splash_delay(RevealEffect::Text), "2.5s");
        assert_eq!(splash_delay(RevealEffect::EnterButton), "4s");
        assert_eq!(splash_delay(RevealEffect::ToastDismiss), "");
    }
}
