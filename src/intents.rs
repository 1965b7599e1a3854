//! Intents

use crate::items::{ItemId, Product};

/// A requested change to the cart, applied by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartIntent {
    /// Set the quantity of a line. A quantity of zero removes the line.
    UpdateQuantity {
        /// Line to update
        id: ItemId,

        /// New quantity
        quantity: u32,
    },

    /// Remove a line regardless of its quantity.
    RemoveItem {
        /// Line to remove
        id: ItemId,
    },

    /// Add one unit of a product, appending a new line if needed.
    AddItem {
        /// Product to add
        product: Product,
    },
}

impl CartIntent {
    /// Id of the line this intent targets.
    pub fn item_id(&self) -> &ItemId {
        match self {
            CartIntent::UpdateQuantity { id, .. } | CartIntent::RemoveItem { id } => id,
            CartIntent::AddItem { product } => &product.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_names_the_targeted_line() {
        let update = CartIntent::UpdateQuantity {
            id: ItemId::from("fern"),
            quantity: 2,
        };
        let add = CartIntent::AddItem {
            product: Product {
                id: ItemId::from("ivy"),
                name: "Ivy".to_string(),
                image: String::new(),
                cost: "$4.50".to_string(),
            },
        };

        assert_eq!(update.item_id().as_str(), "fern");
        assert_eq!(add.item_id().as_str(), "ivy");
    }
}
