//! Askama filters used by the page templates.
//!
//! Both ignore their input; templates call them on an empty string.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::Datelike;

/// Stylesheet fingerprint baked in by `build.rs`.
const STYLESHEET_HASH: &str = env!("CSS_HASH");

/// Year shown in the footer, `{{ ""|current_year }}`.
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    Ok(chrono::Utc::now().year())
}

/// Fingerprint of `main.css` for the cache-busting stylesheet link,
/// `/static/css/derived/main.{{ ""|css_hash }}.css`.
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(STYLESHEET_HASH)
}
