//! Write the built-in catalogs as JSON resources.
//!
//! Usage: extract_colormaps <dir>
//!
//! Produces `mpl_colormaps.json` and `cv_colormaps.json` in `<dir>`, ready to
//! be loaded with `--resources <dir>`.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use colormap_tool::{init_tracing, Namespace};

fn main() -> Result<()> {
    init_tracing("info");

    let Some(dir) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: extract_colormaps <dir>");
    };

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    for namespace in Namespace::ALL {
        let source = namespace
            .builtin_source()
            .with_context(|| format!("Failed to build the {} catalog", namespace))?;

        let path = dir.join(namespace.resource_file());
        source
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        println!("{}: {} colormaps -> {}", namespace, source.len(), path.display());
    }

    Ok(())
}
