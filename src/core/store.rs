//! In-memory item store
//!
//! Single source of truth for the skill radar. The full set is seeded at
//! process start; afterwards exactly two mutations exist, both atomic:
//! flipping one item's visibility, and wholesale replacement from a parsed
//! document. Readers work on snapshots and never observe a partial update.

use crate::core::persistence::{self, ParseError};
use crate::core::{radar, seed, SkillItem};
use tracing::{debug, info};

pub struct ItemStore {
    items: Vec<SkillItem>,
}

impl ItemStore {
    pub fn new(items: Vec<SkillItem>) -> Self {
        ItemStore { items }
    }

    /// Store holding the built-in literal data set
    pub fn seeded() -> Self {
        ItemStore::new(seed::default_items())
    }

    /// Read-only view of the ordered sequence
    pub fn items(&self) -> &[SkillItem] {
        &self.items
    }

    /// Owned copy for derivation or export
    pub fn snapshot(&self) -> Vec<SkillItem> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flip one item's visibility. Unknown ids are tolerated silently.
    pub fn toggle(&mut self, id: &str) {
        self.items = radar::toggle_visibility(&self.items, id);
        debug!("Toggled visibility for item {id}");
    }

    /// Replace the whole collection. All-or-nothing by construction.
    pub fn replace(&mut self, items: Vec<SkillItem>) {
        info!("Replaced store: {} items", items.len());
        self.items = items;
    }

    /// Parse a replacement document and swap it in. On a parse failure the
    /// existing collection is left untouched.
    pub fn replace_from_document(&mut self, text: &str) -> Result<usize, ParseError> {
        let items = persistence::parse_document(text)?;
        let count = items.len();
        self.replace(items);
        Ok(count)
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        ItemStore::seeded()
    }
}
