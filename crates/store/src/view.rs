//! Terminal rendering of the storefront.
//!
//! Presentation only: every function takes state by reference and returns a
//! `String`. Nothing in here mutates the session.

use runway_cart::Cart;
use runway_catalog::Product;

pub fn header() -> String {
    "Runway Store \u{ae}".to_string()
}

pub fn footer() -> String {
    "\u{a9} 2025 Runway Store. All rights reserved.".to_string()
}

/// Render the visible products as a column of cards.
pub fn product_grid(products: &[&Product]) -> String {
    if products.is_empty() {
        return "No products match the current filters.".to_string();
    }

    let mut out = String::new();
    for product in products {
        let sizes = product
            .sizes
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let action = if product.in_stock {
            "[Add to cart]"
        } else {
            "[Out of stock]"
        };

        out.push_str(&format!(
            "{}\n  {} | {} model\n  {} $\n  sizes: {}\n  {}\n",
            product.name, product.brand, product.gender, product.price, sizes, action
        ));
    }
    out.pop();
    out
}

/// Render the cart panel, badge count included.
pub fn cart_panel(cart: &Cart) -> String {
    let mut out = format!("Shopping Cart ({})\n", cart.len());

    if cart.is_empty() {
        out.push_str("No products to order\u{1f610}...\n");
    } else {
        for line in cart.lines() {
            out.push_str(&format!(
                "  {} | {} | {} $ | x{}\n",
                line.name, line.gender, line.price, line.quantity
            ));
        }
    }

    out.push_str("[Order Now!]");
    out
}

pub fn help() -> String {
    [
        "Commands:",
        "  list                 show the product grid",
        "  cart                 show the shopping cart",
        "  size <n|any>         filter by size",
        "  brand <name|any>     filter by brand",
        "  gender <name|any>    filter by gender",
        "  instock              toggle the in-stock-only filter",
        "  add <product name>   add a product to the cart",
        "  plus <product name>  raise a cart line's quantity",
        "  minus <product name> lower a cart line's quantity",
        "  remove <product name> drop a cart line",
        "  help                 show this message",
        "  quit                 leave the store",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use runway_catalog::Product;

    fn product(name: &str, in_stock: bool) -> Product {
        Product {
            name: name.to_string(),
            brand: "Nike".to_string(),
            gender: "Men".to_string(),
            price: 120.0,
            sizes: vec![40, 41],
            in_stock,
            ..Product::default()
        }
    }

    #[test]
    fn cards_carry_name_brand_gender_price_and_sizes() {
        let p = product("Air Zoom", true);
        let grid = product_grid(&[&p]);

        assert!(grid.contains("Air Zoom"));
        assert!(grid.contains("Nike | Men model"));
        assert!(grid.contains("120 $"));
        assert!(grid.contains("sizes: 40 41"));
        assert!(grid.contains("[Add to cart]"));
    }

    #[test]
    fn out_of_stock_cards_swap_the_action_label() {
        let p = product("Old Skool", false);
        let grid = product_grid(&[&p]);

        assert!(grid.contains("[Out of stock]"));
        assert!(!grid.contains("[Add to cart]"));
    }

    #[test]
    fn empty_grid_has_a_placeholder() {
        assert_eq!(
            product_grid(&[]),
            "No products match the current filters."
        );
    }

    #[test]
    fn empty_cart_shows_the_no_products_line() {
        let panel = cart_panel(&Cart::new());

        assert!(panel.starts_with("Shopping Cart (0)"));
        assert!(panel.contains("No products to order\u{1f610}..."));
        assert!(panel.ends_with("[Order Now!]"));
    }

    #[test]
    fn cart_badge_counts_lines_not_quantities() {
        let cart = Cart::new()
            .add(&product("Air Zoom", true))
            .increment("Air Zoom");
        let panel = cart_panel(&cart);

        assert!(panel.starts_with("Shopping Cart (1)"));
        assert!(panel.contains("Air Zoom | Men | 120 $ | x2"));
    }
}
