use crate::core::stats::StatName;
use crate::error::{DexError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A nature raises `plus` by 10% and lowers `minus` by 10%. Neutral natures
/// have neither.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nature {
    pub name: String,
    #[serde(default)]
    pub plus: Option<StatName>,
    #[serde(default)]
    pub minus: Option<StatName>,
}

impl Nature {
    pub fn neutral(name: &str) -> Self {
        Self {
            name: name.to_string(),
            plus: None,
            minus: None,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.plus.is_none() && self.minus.is_none()
    }

    fn validate(&self) -> Result<()> {
        match (self.plus, self.minus) {
            (None, None) => Ok(()),
            (Some(plus), Some(minus)) if plus != minus && plus != StatName::Hp && minus != StatName::Hp => {
                Ok(())
            }
            _ => Err(DexError::Catalog(format!(
                "nature '{}' must raise and lower two different non-HP stats",
                self.name
            ))),
        }
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.plus, self.minus) {
            (Some(plus), Some(minus)) => write!(
                f,
                "{} (+{}, -{})",
                self.name,
                plus.short_label(),
                minus.short_label()
            ),
            _ => write!(f, "{} (neutral)", self.name),
        }
    }
}

pub static NATURES: Lazy<NatureDatabase> = Lazy::new(|| or_minimal(NatureDatabase::load_default()));

fn or_minimal(loaded: Result<NatureDatabase>) -> NatureDatabase {
    match loaded {
        Ok(db) => db,
        Err(err) => {
            tracing::warn!(error = %err, "nature catalog failed to load, using neutral natures only");
            NatureDatabase::minimal()
        }
    }
}

pub const DEFAULT_NATURE: &str = "Hardy";

/// Nature catalog in display order, looked up case-insensitively.
#[derive(Clone, Debug, Default)]
pub struct NatureDatabase {
    natures: Vec<Nature>,
    index: HashMap<String, usize>,
}

impl NatureDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimal() -> Self {
        let mut db = Self::new();
        db.insert(Nature::neutral(DEFAULT_NATURE));
        db
    }

    pub fn insert(&mut self, nature: Nature) {
        let key = nature.name.to_lowercase();
        match self.index.get(&key) {
            Some(&slot) => self.natures[slot] = nature,
            None => {
                self.index.insert(key, self.natures.len());
                self.natures.push(nature);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Nature> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&slot| &self.natures[slot])
    }

    pub fn default_nature(&self) -> Nature {
        self.get(DEFAULT_NATURE)
            .cloned()
            .unwrap_or_else(|| Nature::neutral(DEFAULT_NATURE))
    }

    pub fn all(&self) -> &[Nature] {
        &self.natures
    }

    pub fn len(&self) -> usize {
        self.natures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.natures.is_empty()
    }

    pub fn load_from_yaml_str(yaml: &str) -> Result<Self> {
        let entries: Vec<Nature> =
            serde_yaml::from_str(yaml).map_err(|e| DexError::Catalog(e.to_string()))?;
        let mut db = Self::new();
        for nature in entries {
            nature.validate()?;
            db.insert(nature);
        }
        Ok(db)
    }

    pub fn load_default() -> Result<Self> {
        const DEFAULT_NATURES_YAML: &str = include_str!("../../data/natures.yaml");
        Self::load_from_yaml_str(DEFAULT_NATURES_YAML)
    }
}
