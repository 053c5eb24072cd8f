//! Askama filters for the page layout.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Year shown in the footer.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Cache-busting hash of a static asset, computed by `build.rs`.
///
/// Usage in templates: `{{ "css"|asset_hash }}`, `{{ "js"|asset_hash }}`
#[askama::filter_fn]
pub fn asset_hash(asset: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    match asset.to_string().as_str() {
        "css" => Ok(env!("CSS_HASH")),
        "js" => Ok(env!("JS_HASH")),
        _ => Err(askama::Error::Fmt),
    }
}
