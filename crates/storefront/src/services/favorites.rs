//! The working favorites list.

use beauty_box_core::ProductId;

/// Ordered product IDs backing the favorites page and badge.
///
/// Order is insertion order. The list does not deduplicate what it is loaded
/// with, but [`FavoritesList::toggle`] never introduces a duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesList {
    ids: Vec<ProductId>,
}

impl FavoritesList {
    #[must_use]
    pub const fn new(ids: Vec<ProductId>) -> Self {
        Self { ids }
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Remove the first occurrence of `id`, or append it if absent.
    ///
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if let Some(index) = self.ids.iter().position(|&existing| existing == id) {
            self.ids.remove(index);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
