use serde::{Deserialize, Serialize};

/// Product identifier as issued by the catalog backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A single catalog entry.
///
/// Products are immutable for the lifetime of a session: the catalog is
/// fetched once at startup and never mutated afterwards. Fields mirror the
/// wire format; entries with missing fields decode with defaults rather than
/// failing the whole load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    /// Open string in the wire format; `Men`, `Women` or `Unisex` in practice.
    pub gender: String,
    pub price: f64,
    pub sizes: Vec<u32>,
    pub in_stock: bool,
    pub image_url: String,
}
