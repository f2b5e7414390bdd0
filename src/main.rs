//! colormap-tool - inspect, render and apply colormaps from either namespace
//!
//! This is the main entry point for the colormap-tool binary.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use colormap_tool::config::Command;
use colormap_tool::lut::{apply_to_image, render_colorbar, TableLayout};
use colormap_tool::{
    get_cv_colormap, init_tracing, log_error, log_timed_operation, Config, Namespace, Resolver,
    Result, DEFAULT_LENGTH,
};

/// JSON form of `show` output
#[derive(Debug, Serialize)]
struct TableOutput<'a> {
    name: &'a str,
    namespace: Option<&'a str>,
    length: usize,
    order: &'static str,
    colors: Vec<[u8; 3]>,
}

fn main() -> Result<()> {
    // Load configuration
    let (config, command) = Config::load()?;

    init_tracing(&config.log_level);

    // Validate configuration
    config.validate().map_err(|e| {
        log_error(&e, "configuration");
        e
    })?;

    debug!(?config, "Configuration loaded");

    run(&config, command).map_err(|e| {
        log_error(&e, "command");
        e
    })
}

fn run(config: &Config, command: Command) -> Result<()> {
    let resolver = match &config.resources.directory {
        Some(dir) => {
            info!(directory = %dir.display(), "Loading colormap resources");
            Resolver::from_resource_dir(dir)?
        }
        None => Resolver::builtin()?,
    };

    match command {
        Command::Show {
            name,
            namespace,
            length,
            bgr,
        } => {
            let length = length.unwrap_or(config.lut.default_length);
            let colors = if bgr {
                let table = get_cv_colormap(&resolver, &name, namespace.as_deref(), length, true)?
                    .table(&resolver)?;
                TableLayout::Stacked.colors(&table.view().into_dyn())
            } else {
                resolver.resolve(&name, namespace.as_deref(), length)?.colors()
            };

            let output = TableOutput {
                name: &name,
                namespace: namespace.as_deref(),
                length,
                order: if bgr { "bgr" } else { "rgb" },
                colors,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::List { namespace } => {
            let namespaces = match namespace {
                Some(key) => vec![key.parse::<Namespace>()?],
                None => resolver.namespaces(),
            };

            let mut listing = BTreeMap::new();
            for namespace in namespaces {
                listing.insert(namespace.key(), resolver.names(namespace)?);
            }
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }

        Command::Render {
            name,
            namespace,
            output,
            width,
            height,
        } => {
            let lut = resolver.resolve(&name, namespace.as_deref(), config.lut.default_length)?;
            let bar = render_colorbar(
                &lut,
                width.unwrap_or(config.render.width),
                height.unwrap_or(config.render.height),
            )?;
            save(&bar, &output)?;
        }

        Command::Apply {
            input,
            name,
            namespace,
            output,
        } => {
            let lut = resolver.resolve(&name, namespace.as_deref(), DEFAULT_LENGTH)?;
            let gray = image::open(&input)?.to_luma8();
            let colored = log_timed_operation("apply_colormap", || apply_to_image(&gray, &lut))?;
            save(&colored, &output)?;
        }
    }

    Ok(())
}

fn save(image: &image::RgbImage, path: &Path) -> Result<()> {
    image.save(path)?;
    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Image written"
    );
    Ok(())
}
