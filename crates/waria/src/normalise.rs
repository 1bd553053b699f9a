//! Attribute name normalisation
//!
//! Canonical ARIA attribute names are always lower case and always start
//! with `aria-`. A user-editable rename table corrects stems before the
//! prefix is applied, and results are memoised. Every write to the rename
//! table clears the memo cache, so a lookup can never observe a stale
//! mapping.

use std::cell::RefCell;
use std::collections::HashMap;

/// Prefix carried by every canonical attribute name
pub const ARIA_PREFIX: &str = "aria-";

/// Name normaliser with a rename table and memo cache.
#[derive(Debug)]
pub struct NameNormaliser {
    renames: HashMap<String, String>,
    cache: RefCell<HashMap<String, String>>,
}

impl NameNormaliser {
    /// A normaliser seeded with the default renames.
    ///
    /// `labeledby` is the US English spelling but the accessibility API
    /// defines the attribute with the double L.
    pub fn new() -> Self {
        let mut renames = HashMap::new();
        renames.insert("labeledby".to_string(), "labelledby".to_string());
        Self {
            renames,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Normalise an attribute name.
    ///
    /// Lower-cases the input, applies the rename table to the unprefixed
    /// stem and prepends `aria-`. Always returns a name; an empty input
    /// yields the bare prefix.
    pub fn normalise(&self, raw: &str) -> String {
        if let Some(hit) = self.cache.borrow().get(raw) {
            return hit.clone();
        }
        let canonical = self.compute(raw);
        tracing::trace!("normalised {:?} -> {:?}", raw, canonical);
        self.cache
            .borrow_mut()
            .insert(raw.to_string(), canonical.clone());
        canonical
    }

    /// The unprefixed stem of a normalised name, used as the hook key.
    pub fn stem(&self, raw: &str) -> String {
        let canonical = self.normalise(raw);
        canonical[ARIA_PREFIX.len()..].to_string()
    }

    fn compute(&self, raw: &str) -> String {
        let lower = raw.to_lowercase();
        let stem = lower.strip_prefix(ARIA_PREFIX).unwrap_or(&lower);
        let stem = self.renames.get(stem).map_or(stem, String::as_str);
        format!("{ARIA_PREFIX}{stem}")
    }

    /// Map `from` onto `to` before normalisation. Clears the cache.
    pub fn set_rename(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.renames
            .insert(from.into().to_lowercase(), to.into().to_lowercase());
        self.cache.borrow_mut().clear();
    }

    /// Drop a mapping. Clears the cache.
    pub fn remove_rename(&mut self, stem: &str) {
        self.renames.remove(stem);
        self.cache.borrow_mut().clear();
    }

    /// The current rename table
    pub fn renames(&self) -> &HashMap<String, String> {
        &self.renames
    }
}

impl Default for NameNormaliser {
    fn default() -> Self {
        Self::new()
    }
}
