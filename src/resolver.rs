//! Namespaced colormap resolution.
//!
//! A colormap is identified either as `"<namespace>.<name>"` or as a bare
//! `"<name>"` with the namespace passed separately. The [`Resolver`] checks
//! the identifier against the namespaces it has sources for, fetches the
//! table and resamples it to the requested length.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

use crate::catalog;
use crate::error::{ColormapError, Result};
use crate::lut::Lut;
use crate::source::{ColormapSource, TableSource};

/// Separator between namespace and name in a dotted identifier
pub const SEPARATOR: char = '.';

/// The ecosystem a colormap comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Namespace {
    /// Matplotlib-style continuous colormaps, RGB
    #[serde(rename = "mpl")]
    Matplotlib,
    /// OpenCV-style 256-entry lookup tables, BGR on the OpenCV side
    #[serde(rename = "cv")]
    OpenCv,
}

impl Namespace {
    /// Every namespace, in display order
    pub const ALL: [Namespace; 2] = [Namespace::Matplotlib, Namespace::OpenCv];

    /// The textual key used in identifiers
    pub fn key(&self) -> &'static str {
        match self {
            Namespace::Matplotlib => "mpl",
            Namespace::OpenCv => "cv",
        }
    }

    /// File name of this namespace's JSON resource
    pub fn resource_file(&self) -> &'static str {
        match self {
            Namespace::Matplotlib => "mpl_colormaps.json",
            Namespace::OpenCv => "cv_colormaps.json",
        }
    }

    /// Build the built-in source for this namespace
    pub fn builtin_source(&self) -> Result<TableSource> {
        match self {
            Namespace::Matplotlib => catalog::matplotlib::source(),
            Namespace::OpenCv => catalog::opencv::source(),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Namespace {
    type Err = ColormapError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Namespace::ALL
            .into_iter()
            .find(|ns| ns.key() == s)
            .ok_or_else(|| ColormapError::UnknownNamespace {
                namespace: s.to_string(),
                known: join_keys(&Namespace::ALL),
            })
    }
}

fn join_keys(namespaces: &[Namespace]) -> String {
    namespaces
        .iter()
        .map(Namespace::key)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A validated colormap identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColormapId {
    pub namespace: Namespace,
    pub name: String,
}

impl ColormapId {
    /// The composite `"<namespace>.<name>"` form
    pub fn composite_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ColormapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.namespace, SEPARATOR, self.name)
    }
}

/// Split an identifier into `(namespace, name)`.
///
/// A dotted identifier is split on its first separator only. Supplying an
/// explicit namespace together with a dotted identifier is a conflict, even
/// when both agree.
pub fn split_identifier<'a>(
    name: &'a str,
    namespace: Option<&'a str>,
) -> Result<(&'a str, &'a str)> {
    match (name.split_once(SEPARATOR), namespace) {
        (Some(_), Some(explicit)) => Err(ColormapError::Conflict {
            name: name.to_string(),
            explicit: explicit.to_string(),
        }),
        (Some((parsed_namespace, parsed_name)), None) => Ok((parsed_namespace, parsed_name)),
        (None, Some(explicit)) => Ok((explicit, name)),
        (None, None) => Err(ColormapError::MissingNamespace {
            name: name.to_string(),
        }),
    }
}

/// Resolves colormap identifiers against one source per namespace
#[derive(Clone, Default)]
pub struct Resolver {
    sources: BTreeMap<Namespace, Arc<dyn ColormapSource>>,
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("namespaces", &self.namespaces())
            .finish()
    }
}

impl Resolver {
    /// Create a resolver without any sources
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the source for a namespace, replacing any previous one
    pub fn with_source(
        mut self,
        namespace: Namespace,
        source: impl ColormapSource + 'static,
    ) -> Self {
        self.sources.insert(namespace, Arc::new(source));
        self
    }

    /// Attach an already shared source
    pub fn with_shared_source(
        mut self,
        namespace: Namespace,
        source: Arc<dyn ColormapSource>,
    ) -> Self {
        self.sources.insert(namespace, source);
        self
    }

    /// A resolver over the built-in catalogs of every namespace
    pub fn builtin() -> Result<Self> {
        Namespace::ALL.into_iter().try_fold(Self::new(), |resolver, namespace| {
            Ok(resolver.with_source(namespace, namespace.builtin_source()?))
        })
    }

    /// A resolver over the JSON resources in `dir`, one file per namespace
    pub fn from_resource_dir(dir: &Path) -> Result<Self> {
        Namespace::ALL.into_iter().try_fold(Self::new(), |resolver, namespace| {
            let source = TableSource::load(&dir.join(namespace.resource_file()))?;
            Ok(resolver.with_source(namespace, source))
        })
    }

    /// Namespaces that have a source
    pub fn namespaces(&self) -> Vec<Namespace> {
        self.sources.keys().copied().collect()
    }

    /// The source of a namespace
    pub fn source(&self, namespace: Namespace) -> Option<&dyn ColormapSource> {
        self.sources.get(&namespace).map(|source| source.as_ref())
    }

    /// Sorted colormap names of a namespace
    pub fn names(&self, namespace: Namespace) -> Result<Vec<&str>> {
        let (_, source) = self.source_checked(namespace.key())?;
        Ok(source.names())
    }

    fn source_checked(&self, namespace: &str) -> Result<(Namespace, &dyn ColormapSource)> {
        let unknown = || ColormapError::UnknownNamespace {
            namespace: namespace.to_string(),
            known: join_keys(&self.namespaces()),
        };

        let parsed: Namespace = namespace.parse().map_err(|_| unknown())?;
        let source = self.source(parsed).ok_or_else(unknown)?;
        Ok((parsed, source))
    }

    /// Validate an identifier without fetching its table
    pub fn identify(&self, name: &str, namespace: Option<&str>) -> Result<ColormapId> {
        let (namespace, name) = split_identifier(name, namespace)?;
        let (namespace, source) = self.source_checked(namespace)?;

        if !source.contains(name) {
            return Err(ColormapError::UnknownName {
                namespace: namespace.to_string(),
                name: name.to_string(),
            });
        }

        Ok(ColormapId {
            namespace,
            name: name.to_string(),
        })
    }

    /// Resolve an identifier to a table of `length` entries.
    ///
    /// The result is always a fresh copy; sources are never handed out.
    pub fn resolve(&self, name: &str, namespace: Option<&str>, length: usize) -> Result<Lut> {
        let id = self.identify(name, namespace)?;
        self.resolve_id(&id, length)
    }

    /// Resolve an already validated identifier
    pub fn resolve_id(&self, id: &ColormapId, length: usize) -> Result<Lut> {
        let table = self
            .source(id.namespace)
            .and_then(|source| source.lookup(&id.name))
            .ok_or_else(|| ColormapError::UnknownName {
                namespace: id.namespace.to_string(),
                name: id.name.clone(),
            })?;

        debug!(
            namespace = %id.namespace,
            name = %id.name,
            source_length = table.len(),
            length = length,
            "Resolved colormap"
        );

        if table.len() == length {
            Ok(table.clone())
        } else {
            table.resample(length)
        }
    }
}

static BUILTIN: OnceCell<Resolver> = OnceCell::new();

/// The process-wide resolver over the built-in catalogs, built on first use
pub fn builtin_resolver() -> Result<&'static Resolver> {
    BUILTIN.get_or_try_init(Resolver::builtin)
}

/// Resolve a colormap against the built-in catalogs
pub fn get_colormap(name: &str, namespace: Option<&str>, length: usize) -> Result<Lut> {
    builtin_resolver()?.resolve(name, namespace, length)
}
