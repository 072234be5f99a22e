use serde::{Deserialize, Serialize};

use runway_catalog::Product;

/// A single cart entry.
///
/// The product fields are snapshotted at add-time; later catalog changes do
/// not propagate into existing lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub image_url: String,
    pub brand: String,
    pub gender: String,
    pub price: f64,
    /// Always >= 1: a line that would drop to zero is removed instead.
    pub quantity: u32,
}

/// Ordered collection of cart lines, keyed by product name.
///
/// Every operation returns a new `Cart` and leaves the previous value
/// untouched; operations are total and acting on an absent line is a no-op.
/// Two lines never share a name, so a second product with the same name as
/// a carted one is indistinguishable from it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines. This is what the cart badge shows, not the summed
    /// quantity.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lines.iter().any(|line| line.name == name)
    }

    pub fn line(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.name == name)
    }

    /// Add `product` as a new line with quantity 1.
    ///
    /// No-op when the product is out of stock or a line with the same name
    /// already exists; a repeated add does not bump the quantity.
    #[must_use]
    pub fn add(&self, product: &Product) -> Cart {
        if !product.in_stock || self.contains(&product.name) {
            return self.clone();
        }

        let mut lines = self.lines.clone();
        lines.push(CartLine {
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            brand: product.brand.clone(),
            gender: product.gender.clone(),
            price: product.price,
            quantity: 1,
        });
        Cart { lines }
    }

    /// Raise the quantity of the line named `name` by one.
    #[must_use]
    pub fn increment(&self, name: &str) -> Cart {
        let lines = self
            .lines
            .iter()
            .cloned()
            .map(|mut line| {
                if line.name == name {
                    line.quantity += 1;
                }
                line
            })
            .collect();
        Cart { lines }
    }

    /// Lower the quantity of the line named `name` by one, removing the line
    /// entirely when it sits at quantity 1.
    #[must_use]
    pub fn decrement(&self, name: &str) -> Cart {
        match self.line(name) {
            Some(line) if line.quantity == 1 => self.remove(name),
            Some(_) => {
                let lines = self
                    .lines
                    .iter()
                    .cloned()
                    .map(|mut line| {
                        if line.name == name {
                            line.quantity -= 1;
                        }
                        line
                    })
                    .collect();
                Cart { lines }
            }
            None => self.clone(),
        }
    }

    /// Drop the line named `name`, preserving the relative order of the rest.
    #[must_use]
    pub fn remove(&self, name: &str) -> Cart {
        let lines = self
            .lines
            .iter()
            .filter(|line| line.name != name)
            .cloned()
            .collect();
        Cart { lines }
    }
}
