//! Visibility rules for the product grid.
//!
//! Pure, deterministic predicates over [`Product`]; the visible subset is
//! recomputed from scratch on every filter or catalog change, never cached.

use crate::product::Product;

/// Size selection: a concrete size or no restriction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SizeFilter {
    #[default]
    Any,
    Size(u32),
}

/// Brand/gender selection matched by substring containment.
///
/// Containment (not equality) is intentional: selecting `Vans` also admits a
/// field reading `Vans Old Skool`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextFilter {
    #[default]
    Any,
    Contains(String),
}

impl TextFilter {
    pub fn contains(needle: impl Into<String>) -> Self {
        Self::Contains(needle.into())
    }

    fn admits(&self, value: &str) -> bool {
        match self {
            TextFilter::Any => true,
            TextFilter::Contains(needle) => value.contains(needle.as_str()),
        }
    }
}

/// Active filter selections for the session.
///
/// Fields are mutated independently by their respective controls and persist
/// for the session. The default state admits every product.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub size: SizeFilter,
    pub brand: TextFilter,
    pub gender: TextFilter,
    /// When true, only in-stock products are visible.
    pub in_stock_only: bool,
}

impl FilterState {
    /// Decide whether `product` belongs to the visible subset.
    ///
    /// A product is visible iff every clause admits it: stock, size, brand
    /// and gender.
    pub fn is_visible(&self, product: &Product) -> bool {
        let stock_ok = !self.in_stock_only || product.in_stock;
        let size_ok = match self.size {
            SizeFilter::Any => true,
            SizeFilter::Size(size) => product.sizes.contains(&size),
        };

        stock_ok
            && size_ok
            && self.brand.admits(&product.brand)
            && self.gender.admits(&product.gender)
    }
}
