//! Items

use std::{fmt, num::NonZeroU32};

/// Item identifier, unique within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Catalog product that can be added to a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product identifier, reused as the cart line id
    pub id: ItemId,

    /// Product name
    pub name: String,

    /// Product image URL
    pub image: String,

    /// Unit cost as displayed, e.g. `"$15.00"`
    pub cost: String,
}

/// Cart Line Item
///
/// One product entry in the cart. The quantity is never zero; a line that
/// would reach zero is removed from the cart instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineItem {
    /// Line identifier
    pub id: ItemId,

    /// Display name
    pub name: String,

    /// Image URL
    pub image: String,

    /// Unit cost as displayed, e.g. `"$10.00"`
    pub unit_cost_text: String,

    /// Number of units
    pub quantity: NonZeroU32,
}

impl CartLineItem {
    /// Create a new line item.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        image: impl Into<String>,
        unit_cost_text: impl Into<String>,
        quantity: NonZeroU32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            unit_cost_text: unit_cost_text.into(),
            quantity,
        }
    }

    /// Create a single-unit line for the given product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            unit_cost_text: product.cost.clone(),
            quantity: NonZeroU32::MIN,
        }
    }

    /// Replace the quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: NonZeroU32) -> Self {
        self.quantity = quantity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_displays_inner_value() {
        let id = ItemId::new("snake-plant");

        assert_eq!(id.to_string(), "snake-plant");
        assert_eq!(id.as_str(), "snake-plant");
    }

    #[test]
    fn from_product_starts_at_one_unit() {
        let product = Product {
            id: ItemId::from("aloe-vera"),
            name: "Aloe Vera".to_string(),
            image: "https://example.com/aloe.jpg".to_string(),
            cost: "$14.00".to_string(),
        };

        let line = CartLineItem::from_product(&product);

        assert_eq!(line.id, product.id);
        assert_eq!(line.unit_cost_text, "$14.00");
        assert_eq!(line.quantity.get(), 1);
    }
}
