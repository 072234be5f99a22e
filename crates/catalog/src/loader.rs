//! Catalog retrieval over HTTP.
//!
//! One GET per session against a fixed URL serving the product list as a
//! JSON array. There is no retry, caching or timeout handling here; a failed
//! load leaves the session without a catalog.

use serde_json::Value;
use thiserror::Error;

use crate::product::Product;

/// Message shown to the user whenever the catalog cannot be loaded.
///
/// Every [`LoadError`] variant collapses into this one string at the
/// loader boundary; the structured cause only reaches the developer log.
pub const LOAD_FAILED_MESSAGE: &str = "Unable to load products. Please try again later.";

/// Why a catalog load failed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Transport-level failure (DNS, refused connection, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("catalog request failed with HTTP status {0}")]
    Http(u16),

    /// The body is not valid JSON, or the payload is not an array of products.
    #[error("catalog payload is not a product array")]
    Format,
}

/// HTTP client for the static product catalog.
pub struct CatalogClient {
    url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the catalog.
    pub async fn load(&self) -> Result<Vec<Product>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http(status.as_u16()));
        }

        let payload: Value = response.json().await.map_err(|_| LoadError::Format)?;
        let products = decode_catalog(payload)?;
        tracing::debug!(count = products.len(), "catalog decoded");
        Ok(products)
    }
}

/// Decode a JSON payload into the product list.
///
/// The only structural requirement is that the payload is an array; entries
/// themselves are taken as-is, with missing fields defaulted. An entry that
/// cannot decode at all (e.g. a bare scalar) fails the load.
pub fn decode_catalog(payload: Value) -> Result<Vec<Product>, LoadError> {
    match payload {
        Value::Array(entries) => entries
            .into_iter()
            .map(|entry| serde_json::from_value(entry).map_err(|_| LoadError::Format))
            .collect(),
        _ => Err(LoadError::Format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_an_array_of_products_in_order() {
        let payload = json!([
            {"id": 1, "name": "Air Zoom", "brand": "Nike", "gender": "Men",
             "price": 120, "sizes": [40, 41], "in_stock": true, "image_url": "x"},
            {"id": 2, "name": "Suede Classic", "brand": "Puma", "gender": "Unisex",
             "price": 80, "sizes": [42], "in_stock": false, "image_url": "y"},
        ]);

        let products = decode_catalog(payload).unwrap();
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Air Zoom", "Suede Classic"]);
    }

    #[test]
    fn rejects_non_array_payloads() {
        for payload in [json!({"products": []}), json!("nope"), json!(42), json!(null)] {
            match decode_catalog(payload) {
                Err(LoadError::Format) => {}
                other => panic!("expected Format error, got {other:?}"),
            }
        }
    }

    #[test]
    fn accepts_entries_with_missing_fields() {
        let payload = json!([{"name": "Bare Minimum"}]);

        let products = decode_catalog(payload).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Bare Minimum");
        assert!(!products[0].in_stock);
    }

    #[test]
    fn rejects_entries_that_are_not_objects() {
        let payload = json!([{"name": "Fine"}, "not a product"]);

        match decode_catalog(payload) {
            Err(LoadError::Format) => {}
            other => panic!("expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        assert!(decode_catalog(json!([])).unwrap().is_empty());
    }
}
