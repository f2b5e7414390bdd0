//! Plotting-side adaptation.
//!
//! Tables from any namespace are exposed as continuous [`Colormap`]s over
//! [0, 1] and can be registered into a host [`ColormapRegistry`].

pub mod colormap;
pub mod registry;

pub use colormap::{lerp_color, Colormap, LutColormap, LutMode};
pub use registry::{register_all, ColormapRegistry};

use crate::error::Result;
use crate::resolver::{Namespace, Resolver};

/// Get a colormap in the form a plotting library consumes.
///
/// `mpl` colormaps keep their bare name, foreign ones are named
/// `"<namespace>.<name>"`. The table is read in listed mode.
pub fn get_mpl_colormap(
    resolver: &Resolver,
    name: &str,
    namespace: Option<&str>,
    length: usize,
) -> Result<LutColormap> {
    let id = resolver.identify(name, namespace)?;
    registry::host_colormap(resolver, &id, length, Namespace::Matplotlib)
}
