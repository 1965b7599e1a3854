//! Cart State

use crate::items::{CartLineItem, ItemId};

/// Ordered cart contents.
///
/// Order is the display order. Ids are unique; the store keeps them that way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart with the given lines, in order.
    pub fn with_items(items: impl Into<Vec<CartLineItem>>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Find a line by id.
    pub fn get(&self, id: &ItemId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Iterate over the lines in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.iter()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn get_mut(&mut self, id: &ItemId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub(crate) fn push(&mut self, item: CartLineItem) {
        self.items.push(item);
    }

    /// Remove the line with the given id, keeping the others in order.
    pub(crate) fn remove(&mut self, id: &ItemId) -> Option<CartLineItem> {
        let position = self.items.iter().position(|item| &item.id == id)?;

        Some(self.items.remove(position))
    }
}

impl<'a> IntoIterator for &'a CartState {
    type Item = &'a CartLineItem;
    type IntoIter = std::slice::Iter<'a, CartLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    fn line(id: &str) -> CartLineItem {
        CartLineItem::new(id, id, "", "$1.00", NonZeroU32::MIN)
    }

    #[test]
    fn new_is_empty() {
        let state = CartState::new();

        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
    }

    #[test]
    fn get_finds_line_by_id() {
        let state = CartState::with_items([line("a"), line("b")]);

        assert_eq!(state.get(&ItemId::from("b")).map(|item| item.name.as_str()), Some("b"));
        assert!(state.get(&ItemId::from("c")).is_none());
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut state = CartState::with_items([line("a"), line("b"), line("c")]);

        let removed = state.remove(&ItemId::from("b"));

        assert_eq!(removed.map(|item| item.id), Some(ItemId::from("b")));

        let ids: Vec<&str> = state.iter().map(|item| item.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn remove_unknown_id_is_none() {
        let mut state = CartState::with_items([line("a")]);

        assert!(state.remove(&ItemId::from("z")).is_none());
        assert_eq!(state.len(), 1);
    }
}
