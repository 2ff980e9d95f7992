//! # Storage Layer
//!
//! The shelf persists into a synchronous key-value store holding string slots,
//! the way a browser page would use local storage. The [`KeyValueStore`] trait
//! lets the application run against different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - All slots live in a single `storage.json` object
//!   - The directory is created on first write
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fixtures for seeded and failing stores
//!
//! ## Slots
//!
//! ```text
//! savedLinks   JSON array of {id, name, url}, newest first
//! theme        bare theme name, stored verbatim
//! ```
//!
//! Every write replaces the whole slot. There is no diffing, no retry and no
//! recovery: decode and I/O failures are returned to the caller as-is.

use crate::error::Result;
use crate::model::Link;

pub mod fs;
pub mod memory;

pub const LINKS_SLOT: &str = "savedLinks";
pub const THEME_SLOT: &str = "theme";

/// Abstract interface for slot storage.
pub trait KeyValueStore {
    /// Read a slot. `Ok(None)` when the slot was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot unconditionally.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

pub fn load_links<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<Link>> {
    match store.get(LINKS_SLOT)? {
        None => Ok(Vec::new()),
        Some(raw) => {
            let links: Vec<Link> = serde_json::from_str(&raw)?;
            tracing::debug!(count = links.len(), "loaded links");
            Ok(links)
        }
    }
}

pub fn save_links<S: KeyValueStore + ?Sized>(store: &mut S, links: &[Link]) -> Result<()> {
    let raw = serde_json::to_string(links)?;
    store.set(LINKS_SLOT, &raw)?;
    tracing::debug!(count = links.len(), "saved links");
    Ok(())
}

pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<String>> {
    store.get(THEME_SLOT)
}

pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, name: &str) -> Result<()> {
    store.set(THEME_SLOT, name)?;
    tracing::debug!(theme = name, "saved theme");
    Ok(())
}
