//! Custom Askama template filters.

use std::fmt::Display;

/// Short content hash of the stylesheet and page script, fixed at build time.
///
/// Appended to asset URLs as `?v={{ ""|asset_hash }}` so browsers refetch
/// them after a deploy.
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn asset_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("ASSET_HASH"))
}
