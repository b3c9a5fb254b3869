use crate::error::{DexError, Result};
use once_cell::sync::Lazy;

pub const NO_ITEM: &str = "None";

pub static ITEMS: Lazy<ItemCatalog> = Lazy::new(|| or_empty(ItemCatalog::load_default()));

fn or_empty(loaded: Result<ItemCatalog>) -> ItemCatalog {
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "item catalog failed to load, offering no held items");
        ItemCatalog::default()
    })
}

/// Competitive held items offered to a loadout.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    items: Vec<String>,
}

impl ItemCatalog {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Resolve user input to a catalog entry. `"None"` (any case) or an
    /// empty string means no item.
    pub fn resolve(&self, input: &str) -> Result<Option<String>> {
        let wanted = input.trim();
        if wanted.is_empty() || wanted.eq_ignore_ascii_case(NO_ITEM) {
            return Ok(None);
        }
        self.items
            .iter()
            .find(|item| item.eq_ignore_ascii_case(wanted))
            .cloned()
            .map(Some)
            .ok_or_else(|| DexError::invalid(format!("unknown held item '{}'", wanted)))
    }

    /// Catalog entries with the "None" choice first, as shown in menus.
    pub fn choices(&self) -> Vec<String> {
        std::iter::once(NO_ITEM.to_string())
            .chain(self.items.iter().cloned())
            .collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn load_from_yaml_str(yaml: &str) -> Result<Self> {
        let items: Vec<String> =
            serde_yaml::from_str(yaml).map_err(|e| DexError::Catalog(e.to_string()))?;
        Ok(Self::new(items))
    }

    pub fn load_default() -> Result<Self> {
        const DEFAULT_ITEMS_YAML: &str = include_str!("../../data/items.yaml");
        Self::load_from_yaml_str(DEFAULT_ITEMS_YAML)
    }
}
