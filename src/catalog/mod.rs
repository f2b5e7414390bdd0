//! Built-in colormap catalogs.
//!
//! Each namespace ships a [`Catalog`] of colormap definitions which is
//! sampled once into a [`TableSource`] of 256-entry tables. The two
//! catalogs differ in how float colors become bytes: the plotting side
//! truncates, the image side rounds.

pub mod matplotlib;
pub mod opencv;

use std::time::Instant;
use tracing::debug;

use crate::error::Result;
use crate::interpolation::{evenly_spaced, interp};
use crate::logging::{log_operation_end, log_operation_start};
use crate::lut::{Lut, Quantize, DEFAULT_LENGTH};
use crate::source::TableSource;

/// Suffix of the reversed variant of a colormap
pub const REVERSED_SUFFIX: &str = "_r";

/// Piecewise-linear channel definition as `(position, value)` pairs, both in [0, 1]
pub type Segments = &'static [(f64, f64)];

/// Independent piecewise-linear definitions for the three channels
#[derive(Debug, Clone, Copy)]
pub struct SegmentData {
    pub red: Segments,
    pub green: Segments,
    pub blue: Segments,
}

impl SegmentData {
    /// Evaluate all three channels at `t`
    pub fn eval(&self, t: f64) -> [f64; 3] {
        [
            eval_segments(self.red, t),
            eval_segments(self.green, t),
            eval_segments(self.blue, t),
        ]
    }
}

fn eval_segments(segments: Segments, t: f64) -> f64 {
    let xs: Vec<f64> = segments.iter().map(|&(x, _)| x).collect();
    let ys: Vec<f64> = segments.iter().map(|&(_, y)| y).collect();
    interp(t, &xs, &ys)
}

/// Evaluate evenly spaced float control points at `t`
pub fn eval_anchors(anchors: &[[f64; 3]], t: f64) -> [f64; 3] {
    let xs = evenly_spaced(anchors.len());
    let mut color = [0.0; 3];
    for (channel, value) in color.iter_mut().enumerate() {
        let ys: Vec<f64> = anchors.iter().map(|anchor| anchor[channel]).collect();
        *value = interp(t, &xs, &ys);
    }
    color
}

/// Evaluate evenly spaced byte stops at `t`, as channel values in [0, 1]
pub fn eval_stops(stops: &[[u8; 3]], t: f64) -> [f64; 3] {
    let anchors: Vec<[f64; 3]> = stops
        .iter()
        .map(|stop| stop.map(|v| v as f64 / 255.0))
        .collect();
    eval_anchors(&anchors, t)
}

/// How a built-in colormap is defined
#[derive(Clone, Copy)]
pub enum Definition {
    /// Per-channel segment data
    Segments(SegmentData),
    /// Closed-form channel functions of the position
    Function(fn(f64) -> [f64; 3]),
    /// Evenly spaced float control points, joined linearly
    Anchors(fn() -> Vec<[f64; 3]>),
    /// Evenly spaced RGB stops, first at 0 and last at 1
    Stops(&'static [[u8; 3]]),
    /// Qualitative colors, each covering an equal slice of [0, 1]
    Listed(&'static [[u8; 3]]),
    /// A preset gradient
    Gradient(fn() -> colorgrad::Gradient),
}

impl Definition {
    /// Sample the definition into a table of `len` entries
    pub fn build(&self, len: usize, quantize: Quantize) -> Result<Lut> {
        match self {
            Definition::Segments(data) => Lut::sample(len, quantize, |t| data.eval(t)),
            Definition::Function(f) => Lut::sample(len, quantize, *f),
            Definition::Anchors(f) => {
                let anchors = f();
                Lut::sample(len, quantize, |t| eval_anchors(&anchors, t))
            }
            Definition::Stops(stops) => Lut::from_rgb(stops)?.resample(len),
            Definition::Listed(colors) => {
                let last = colors.len().saturating_sub(1);
                let entries: Vec<[u8; 3]> = evenly_spaced(len)
                    .into_iter()
                    .filter_map(|t| {
                        colors
                            .get(((t * colors.len() as f64) as usize).min(last))
                            .copied()
                    })
                    .collect();
                Lut::from_rgb(&entries)
            }
            Definition::Gradient(preset) => {
                let gradient = preset();
                Lut::sample(len, quantize, |t| {
                    let color = gradient.at(t);
                    [color.r, color.g, color.b]
                })
            }
        }
    }
}

/// The built-in colormaps of one namespace
pub struct Catalog {
    /// Namespace key, for logging
    pub name: &'static str,
    pub definitions: &'static [(&'static str, Definition)],
    /// How sampled float colors become bytes
    pub quantize: Quantize,
    /// Whether every colormap also gets a `<name>_r` variant
    pub reversed: bool,
}

impl Catalog {
    /// Number of tables the catalog produces
    pub fn len(&self) -> usize {
        if self.reversed {
            self.definitions.len() * 2
        } else {
            self.definitions.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Sample every definition into a source of 256-entry tables
    pub fn build(&self) -> Result<TableSource> {
        let start = Instant::now();
        log_operation_start("build_catalog", Some(self.name));

        let mut source = TableSource::new();
        for (name, definition) in self.definitions {
            let lut = definition.build(DEFAULT_LENGTH, self.quantize)?;
            debug!(catalog = self.name, name = *name, "Sampled built-in colormap");

            if self.reversed {
                source.insert(format!("{}{}", name, REVERSED_SUFFIX), lut.reversed());
            }
            source.insert(*name, lut);
        }

        log_operation_end("build_catalog", start, true);
        Ok(source)
    }
}
