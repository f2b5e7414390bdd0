//! # colormap-tool
//!
//! Convert colormaps between a matplotlib-style plotting namespace (`mpl`)
//! and an OpenCV-style image-processing namespace (`cv`).
//!
//! ## Key Features
//!
//! - **Namespaced lookup**: identify a colormap as `"mpl.viridis"` or as
//!   `"viridis"` plus a namespace, with strict validation
//! - **Resampling**: stretch or shrink any table to an arbitrary length by
//!   per-channel linear interpolation
//! - **Both directions**: hand tables to the plotting side as continuous
//!   colormaps (RGB) or to the image side as constants or BGR tables
//! - **Registration**: expose every foreign colormap in a host registry
//!
//! ## Architecture
//!
//! - **Sources**: built-in catalogs or JSON resources, one per namespace
//! - **Resolver**: parses identifiers and fetches tables at a given length
//! - **Adapters**: [`colormaps`] for the plotting side, [`opencv`] for the
//!   image side

pub mod catalog;
pub mod colormaps;
pub mod config;
pub mod error;
pub mod interpolation;
pub mod logging;
pub mod lut;
pub mod opencv;
pub mod resolver;
pub mod source;

pub use colormaps::{
    get_mpl_colormap, register_all, Colormap, ColormapRegistry, LutColormap, LutMode,
};
pub use config::Config;
pub use error::{ColormapError, Result};
pub use logging::{
    generate_operation_id, init_tracing, log_error, log_operation_end, log_operation_start,
    log_timed_operation,
};
pub use lut::{apply_colormap, resample_lut, Lut, Quantize, DEFAULT_LENGTH};
pub use opencv::{get_cv_colormap, ColormapType, CvColormap};
pub use resolver::{builtin_resolver, get_colormap, ColormapId, Namespace, Resolver};
pub use source::{ColormapSource, TableSource};
