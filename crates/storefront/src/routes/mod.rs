//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to /home
//! GET  /intro                  - Splash page
//! GET  /home                   - Markets, nearest first
//! GET  /search                 - Filtered flower grid (q, grade, shop, category)
//! GET  /market/{id}            - Market detail
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /product/{id}           - Product detail (?liked=1 shows the toast)
//! POST /product/{id}/like      - Toggle like, redirect back
//! POST /product/{id}/cart      - Add one unit, redirect to /cart
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/quantity          - Change line quantity (line, delta)
//! POST /cart/remove            - Remove line (line)
//!
//! # Checkout
//! GET  /checkout               - Method selection (?method=pickup|delivery)
//! POST /checkout/complete      - Pay and clear the cart
//!
//! # Account
//! GET  /my                     - Liked flowers
//! ```

pub mod account;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod market;
pub mod products;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(products::show))
        .route("/{id}/like", post(products::toggle_like))
        .route("/{id}/cart", post(products::add_to_cart))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/quantity", post(cart::update_quantity))
        .route("/remove", post(cart::remove))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/complete", post(checkout::complete))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::root))
        .route("/intro", get(home::intro))
        .route("/home", get(home::home))
        .route("/search", get(search::search))
        .route("/market/{id}", get(market::show))
        .nest("/product", product_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .route("/my", get(account::my_page))
}
