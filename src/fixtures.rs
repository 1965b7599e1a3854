//! Fixtures
//!
//! A shop fixture is a YAML document naming the cart currency, the catalog
//! and the lines the cart starts with:
//!
//! ```yaml
//! currency: USD
//! products:
//!   snake-plant:
//!     name: Snake Plant
//!     image: https://example.com/snake-plant.jpg
//!     cost: "$15.00"
//! cart:
//!   - product: snake-plant
//!     quantity: 2
//! ```

use std::{collections::BTreeMap, num::NonZeroU32};

use rusty_money::iso::{self, Currency};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    items::{CartLineItem, ItemId, Product},
    state::CartState,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Fixture has no products
    #[error("No products found in fixture")]
    NoProducts,

    /// Cart line references a product missing from the catalog
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Cart line has quantity zero
    #[error("Cart line for {0} has quantity zero")]
    ZeroQuantity(String),

    /// The same product appears on two cart lines
    #[error("Product {0} appears on more than one cart line")]
    DuplicateCartLine(String),
}

/// Shop fixture as written in YAML
#[derive(Debug, Deserialize)]
pub struct ShopFixtureFile {
    /// ISO currency code, defaults to USD
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Map of product id -> product fixture
    pub products: BTreeMap<String, ProductFixture>,

    /// Initial cart lines
    #[serde(default)]
    pub cart: Vec<CartLineFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Product image URL
    #[serde(default)]
    pub image: String,

    /// Unit cost as displayed (e.g., "$15.00")
    pub cost: String,
}

/// Cart Line Fixture
#[derive(Debug, Deserialize)]
pub struct CartLineFixture {
    /// Product id
    pub product: String,

    /// Number of units
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_quantity() -> u32 {
    1
}

/// Loaded shop data.
#[derive(Debug)]
pub struct ShopFixture {
    /// Currency the cart is priced in.
    pub currency: &'static Currency,

    /// Catalog products, sorted by name.
    pub products: Vec<Product>,

    /// Initial cart contents.
    pub cart: CartState,
}

/// Parse a shop fixture.
///
/// Unit cost text is taken as-is; a malformed cost shows up later as an
/// unavailable subtotal rather than a load failure.
///
/// # Errors
///
/// Returns an error when the YAML is invalid, the currency is unknown, the
/// catalog is empty, or a cart line names a missing product, has quantity
/// zero, or repeats a product.
pub fn load_shop(yaml: &str) -> Result<ShopFixture, FixtureError> {
    let fixture: ShopFixtureFile = serde_norway::from_str(yaml)?;

    let currency = iso::find(&fixture.currency)
        .ok_or_else(|| FixtureError::UnknownCurrency(fixture.currency.clone()))?;

    if fixture.products.is_empty() {
        return Err(FixtureError::NoProducts);
    }

    let mut products: Vec<Product> = fixture
        .products
        .into_iter()
        .map(|(id, product)| Product {
            id: ItemId::from(id),
            name: product.name,
            image: product.image,
            cost: product.cost,
        })
        .collect();

    products.sort_by(|left, right| left.name.cmp(&right.name));

    let mut lines: Vec<CartLineItem> = Vec::with_capacity(fixture.cart.len());

    for line in fixture.cart {
        let product = products
            .iter()
            .find(|product| product.id.as_str() == line.product)
            .ok_or_else(|| FixtureError::ProductNotFound(line.product.clone()))?;

        let quantity = NonZeroU32::new(line.quantity)
            .ok_or_else(|| FixtureError::ZeroQuantity(line.product.clone()))?;

        if lines.iter().any(|existing| existing.id == product.id) {
            return Err(FixtureError::DuplicateCartLine(line.product));
        }

        lines.push(CartLineItem::from_product(product).with_quantity(quantity));
    }

    Ok(ShopFixture {
        currency,
        products,
        cart: CartState::with_items(lines),
    })
}
