//! Import and export of the item document
//!
//! The store round-trips through a single textual shape: a JSON array of
//! skill items, pretty-printed with stable field order. The document the
//! export produces is exactly what the config panel accepts back for
//! wholesale replacement.
//!
//! Parsing is strict: category, status and visibility are closed
//! enumerations, and ids must be unique. A document that fails either
//! check is rejected whole; the caller keeps its existing store.

use crate::core::{seed, SkillItem};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Rejection of a replacement document
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed item document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Duplicate item id: {0}")]
    DuplicateId(String),
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Parse a replacement document into an item sequence.
///
/// Unknown category or status values surface as a serde error here rather
/// than being carried through to display as nothing.
pub fn parse_document(text: &str) -> std::result::Result<Vec<SkillItem>, ParseError> {
    let items: Vec<SkillItem> = serde_json::from_str(text)?;

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.id.as_str()) {
            return Err(ParseError::DuplicateId(item.id.clone()));
        }
    }

    debug!("Parsed replacement document: {} items", items.len());
    Ok(items)
}

/// Serialize the item sequence as the downloadable document
pub fn to_document(items: &[SkillItem]) -> Result<String> {
    serde_json::to_string_pretty(items).map_err(PersistenceError::Serialization)
}

/// Load the initial data set from a file. A missing file is not an error:
/// the built-in seed takes its place.
pub fn load_items(path: &Path) -> Result<Vec<SkillItem>> {
    if !path.exists() {
        info!(
            "No item document at {}, using built-in seed",
            path.display()
        );
        return Ok(seed::default_items());
    }

    let text = std::fs::read_to_string(path)?;
    let items = parse_document(&text)?;
    info!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Write the item document to a file (the manual export)
pub fn write_items(path: &Path, items: &[SkillItem]) -> Result<()> {
    let document = to_document(items)?;
    std::fs::write(path, document)?;
    info!("Wrote {} items to {}", items.len(), path.display());
    Ok(())
}
