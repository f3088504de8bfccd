//! Help-line directory.

use tracing::warn;

use crate::api::ApiClient;
use crate::error::MindnestResult;
use crate::models::{Language, ResourceItem};

/// Fetch resources for `language`, 24/7 services first.
pub async fn fetch(api: &ApiClient, language: Language) -> MindnestResult<Vec<ResourceItem>> {
    let mut items = api.fetch_resources(language).await?;
    // Stable, so server order holds within each group.
    items.sort_by_key(|item| !item.is_always_available());
    Ok(items)
}

/// Like [`fetch`], but a failure is logged and shows an empty list.
pub async fn fetch_or_empty(api: &ApiClient, language: Language) -> Vec<ResourceItem> {
    match fetch(api, language).await {
        Ok(items) => items,
        Err(e) => {
            warn!("Error loading resources: {}", e);
            Vec::new()
        }
    }
}

/// Digits to dial for a listed phone such as `"1323 / 1669"`.
///
/// Only the first `/`-separated number is used.
pub fn dial_number(phone: &str) -> String {
    phone
        .split('/')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

/// `tel:` URI for a listed phone, `None` when it has no digits.
pub fn tel_uri(phone: &str) -> Option<String> {
    let number = dial_number(phone);
    (!number.is_empty()).then(|| format!("tel:{}", number))
}
