//! Per-session wishlist.

use electromart_core::ProductHandle;
use serde::{Deserialize, Serialize};

/// Saved products, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<ProductHandle>,
}

impl Wishlist {
    /// Add a product; returns `false` when it was already saved.
    pub fn add(&mut self, handle: ProductHandle) -> bool {
        if self.contains(&handle) {
            return false;
        }
        self.items.push(handle);
        true
    }

    #[must_use]
    pub fn contains(&self, handle: &ProductHandle) -> bool {
        self.items.contains(handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::default();
        assert!(wishlist.add(ProductHandle::new("p123")));
        assert!(!wishlist.add(ProductHandle::new("p123")));
        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains(&ProductHandle::new("p123")));
    }
}
