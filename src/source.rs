//! Colormap sources.
//!
//! A source is a read-only mapping from colormap name to [`Lut`], one per
//! namespace. Sources are built once (from the built-in catalogs or from
//! JSON resource files) and then only read.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ColormapError, Result};
use crate::lut::Lut;

/// Capability every colormap source provides to the resolver
pub trait ColormapSource: Send + Sync {
    /// Look up a table by name
    fn lookup(&self, name: &str) -> Option<&Lut>;

    /// Check whether a name is present
    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// All names, sorted
    fn names(&self) -> Vec<&str>;
}

/// On-disk form of a source: name -> list of RGB triplets
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct ResourceFile {
    tables: BTreeMap<String, Vec<[u8; 3]>>,
}

/// An in-memory source backed by a map of tables
#[derive(Debug, Clone, Default)]
pub struct TableSource {
    tables: BTreeMap<String, Lut>,
}

impl TableSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table, replacing any previous table with the same name
    pub fn insert(&mut self, name: impl Into<String>, lut: Lut) {
        self.tables.insert(name.into(), lut);
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if the source holds no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Iterate over `(name, table)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Lut)> {
        self.tables.iter().map(|(name, lut)| (name.as_str(), lut))
    }

    /// Parse a source from its JSON resource form
    pub fn from_json(json: &str) -> Result<Self> {
        let resource: ResourceFile = serde_json::from_str(json)?;

        let mut source = Self::new();
        for (name, colors) in resource.tables {
            let lut = Lut::from_rgb(&colors).map_err(|e| match e {
                ColormapError::InvalidShape { shape, message } => ColormapError::InvalidShape {
                    shape,
                    message: format!("colormap '{}': {}", name, message),
                },
                other => other,
            })?;
            source.insert(name, lut);
        }

        Ok(source)
    }

    /// Serialize the source to its JSON resource form
    pub fn to_json(&self) -> Result<String> {
        let resource = ResourceFile {
            tables: self
                .tables
                .iter()
                .map(|(name, lut)| (name.clone(), lut.colors()))
                .collect(),
        };
        Ok(serde_json::to_string(&resource)?)
    }

    /// Load a source from a JSON resource file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ColormapError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Resource file not found: {}", path.display()),
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let source = Self::from_json(&content)?;

        info!(
            path = %path.display(),
            colormaps = source.len(),
            "Loaded colormap resource"
        );

        Ok(source)
    }

    /// Write the source to a JSON resource file
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        debug!(path = %path.display(), colormaps = self.len(), "Saved colormap resource");
        Ok(())
    }
}

impl ColormapSource for TableSource {
    fn lookup(&self, name: &str) -> Option<&Lut> {
        self.tables.get(name)
    }

    fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    fn names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }
}
