//! The host library's colormap registry and bulk registration.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

use super::colormap::{Colormap, LutColormap, LutMode};
use crate::error::{ColormapError, Result};
use crate::logging::{log_operation_end, log_operation_start};
use crate::lut::DEFAULT_LENGTH;
use crate::resolver::{ColormapId, Namespace, Resolver};

/// Named colormaps a host library can look up.
///
/// The registry is an ordinary value owned by the caller; registration
/// mutates it through `&mut` and never touches global state.
#[derive(Clone, Default)]
pub struct ColormapRegistry {
    colormaps: BTreeMap<String, Arc<dyn Colormap>>,
}

impl fmt::Debug for ColormapRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColormapRegistry")
            .field("colormaps", &self.names())
            .finish()
    }
}

impl ColormapRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the host namespace's own colormaps under their
    /// bare names
    pub fn native(resolver: &Resolver, host: Namespace) -> Result<Self> {
        let mut registry = Self::new();
        for name in resolver.names(host)? {
            let id = ColormapId {
                namespace: host,
                name: name.to_string(),
            };
            let colormap = host_colormap(resolver, &id, DEFAULT_LENGTH, host)?;
            registry.register(name, Arc::new(colormap), false)?;
        }
        Ok(registry)
    }

    /// Register a colormap.
    ///
    /// Fails if the name is taken, unless `force` is set.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        colormap: Arc<dyn Colormap>,
        force: bool,
    ) -> Result<()> {
        let name = name.into();
        if !force && self.colormaps.contains_key(&name) {
            return Err(ColormapError::Registry {
                message: format!("A colormap named '{}' is already registered", name),
            });
        }

        trace!(name = %name, force = force, "Registered colormap");
        self.colormaps.insert(name, colormap);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Colormap>> {
        self.colormaps.get(name).cloned()
    }

    /// Like [`get`](Self::get), but a missing name is an error
    pub fn get_checked(&self, name: &str) -> Result<Arc<dyn Colormap>> {
        self.get(name).ok_or_else(|| ColormapError::Registry {
            message: format!("No colormap named '{}' is registered", name),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colormaps.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.colormaps.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.colormaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colormaps.is_empty()
    }
}

/// Wrap a resolved table for a host library.
///
/// Colormaps native to the host keep their bare name; foreign ones are named
/// `"<namespace>.<name>"`.
pub(crate) fn host_colormap(
    resolver: &Resolver,
    id: &ColormapId,
    length: usize,
    host: Namespace,
) -> Result<LutColormap> {
    let lut = resolver.resolve_id(id, length)?;
    let name = if id.namespace == host {
        id.name.clone()
    } else {
        id.composite_name()
    };
    LutColormap::from_lut(&lut, name, 1.0, LutMode::Listed)
}

/// Register every colormap foreign to `host` under its composite name.
///
/// Names already present in the registry are left alone, so calling this
/// twice changes nothing. Returns the number of colormaps added.
pub fn register_all(
    resolver: &Resolver,
    registry: &mut ColormapRegistry,
    host: Namespace,
) -> Result<usize> {
    let start = Instant::now();
    log_operation_start("register_all", Some(host.key()));

    let mut added = 0;
    for namespace in resolver.namespaces() {
        if namespace == host {
            continue;
        }

        for name in resolver.names(namespace)? {
            let id = ColormapId {
                namespace,
                name: name.to_string(),
            };
            let composite = id.composite_name();
            if registry.contains(&composite) {
                trace!(name = %composite, "Colormap already registered, skipping");
                continue;
            }

            let colormap = host_colormap(resolver, &id, DEFAULT_LENGTH, host)?;
            registry.register(composite, Arc::new(colormap), false)?;
            added += 1;
        }
    }

    debug!(host = %host, added = added, total = registry.len(), "Registered foreign colormaps");
    log_operation_end("register_all", start, true);
    Ok(added)
}
