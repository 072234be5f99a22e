//! Session state: the single owner of catalog, filters and cart.

use runway_cart::Cart;
use runway_catalog::{
    CatalogClient, FilterState, LOAD_FAILED_MESSAGE, Product, SizeFilter, TextFilter,
};

/// All mutable state for one storefront session.
///
/// Constructed once at startup and dropped at exit; nothing is persisted.
/// Mutations replace whole values, and the visible subset is recomputed on
/// demand rather than kept up to date incrementally.
#[derive(Debug, Default)]
pub struct Session {
    products: Vec<Product>,
    filters: FilterState,
    cart: Cart,
    load_error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session over an already-loaded catalog.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// Populate the catalog from the loader, exactly once per session.
    ///
    /// Every load failure collapses into the same user-facing message; the
    /// structured cause only reaches the developer log.
    pub async fn load_catalog(&mut self, client: &CatalogClient) {
        match client.load().await {
            Ok(products) => {
                tracing::info!(count = products.len(), url = client.url(), "catalog loaded");
                self.products = products;
            }
            Err(err) => {
                tracing::error!(error = %err, url = client.url(), "failed to load products");
                self.load_error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn set_size(&mut self, size: SizeFilter) {
        self.filters.size = size;
    }

    pub fn set_brand(&mut self, brand: TextFilter) {
        self.filters.brand = brand;
    }

    pub fn set_gender(&mut self, gender: TextFilter) {
        self.filters.gender = gender;
    }

    /// Flip the in-stock-only checkbox.
    pub fn toggle_in_stock_only(&mut self) -> bool {
        self.filters.in_stock_only = !self.filters.in_stock_only;
        self.filters.in_stock_only
    }

    /// Recompute the visible subset from scratch.
    pub fn visible(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| self.filters.is_visible(p))
            .collect()
    }

    /// Add the named product to the cart.
    ///
    /// The product is looked up in the full catalog; out-of-stock and
    /// already-carted products are silently ignored, unknown names are a
    /// no-op.
    pub fn add_to_cart(&mut self, name: &str) {
        if let Some(product) = self.products.iter().find(|p| p.name == name) {
            self.cart = self.cart.add(product);
        }
    }

    pub fn increment_line(&mut self, name: &str) {
        self.cart = self.cart.increment(name);
    }

    pub fn decrement_line(&mut self, name: &str) {
        self.cart = self.cart.decrement(name);
    }

    pub fn remove_line(&mut self, name: &str) {
        self.cart = self.cart.remove(name);
    }
}
