//! Built-in catalog for the `cv` namespace.
//!
//! Tables are stored in RGB like every other source. Names follow OpenCV's
//! `COLORMAP_*` constants in lower case, one table per constant.
//!
//! The MATLAB-derived maps are defined the way OpenCV stores them: 64
//! per-channel control points joined linearly. Jet is OpenCV's 256-point
//! formula. Float colors are rounded to the nearest byte.

use super::matplotlib::{twilight, twilight_shifted};
use super::{eval_stops, Catalog, Definition};
use crate::error::Result;
use crate::interpolation::evenly_spaced;
use crate::lut::Quantize;
use crate::source::TableSource;

/// Control points per channel in the MATLAB-derived tables
const ANCHORS: usize = 64;

const PARULA: &[[u8; 3]] = &[
    [53, 42, 135],
    [15, 92, 221],
    [18, 125, 216],
    [7, 156, 207],
    [21, 177, 180],
    [89, 189, 140],
    [165, 190, 107],
    [225, 185, 82],
    [252, 206, 46],
    [249, 251, 14],
];

const DEEPGREEN: &[[u8; 3]] = &[
    [1, 1, 1],
    [3, 45, 8],
    [13, 91, 30],
    [34, 136, 58],
    [76, 178, 91],
    [143, 214, 138],
    [207, 240, 199],
    [255, 255, 255],
];

/// Build 64 control points from a function of the gray ramp
fn anchors(f: impl Fn(f64) -> [f64; 3]) -> Vec<[f64; 3]> {
    evenly_spaced(ANCHORS).into_iter().map(f).collect()
}

/// Black through red and yellow to white, with blue rising over the last
/// quarter
fn hot() -> Vec<[f64; 3]> {
    let n = 3 * ANCHORS / 8;
    let tail = ANCHORS - 2 * n;

    (0..ANCHORS)
        .map(|i| {
            let red = if i < n { (i + 1) as f64 / n as f64 } else { 1.0 };
            let green = if i < n {
                0.0
            } else if i < 2 * n {
                (i - n + 1) as f64 / n as f64
            } else {
                1.0
            };
            let blue = if i < 2 * n {
                0.0
            } else {
                (i - 2 * n + 1) as f64 / tail as f64
            };
            [red, green, blue]
        })
        .collect()
}

/// Gray tinted blue, mixed with hot in reversed channel order
fn bone() -> Vec<[f64; 3]> {
    evenly_spaced(ANCHORS)
        .into_iter()
        .zip(hot())
        .map(|(gray, [r, g, b])| {
            [
                (7.0 * gray + b) / 8.0,
                (7.0 * gray + g) / 8.0,
                (7.0 * gray + r) / 8.0,
            ]
        })
        .collect()
}

fn pink() -> Vec<[f64; 3]> {
    evenly_spaced(ANCHORS)
        .into_iter()
        .zip(hot())
        .map(|(gray, hot)| hot.map(|v| ((2.0 * gray + v) / 3.0).sqrt()))
        .collect()
}

/// Fully saturated color of a hue in [0, 1)
fn hue(h: f64) -> [f64; 3] {
    let h6 = h.rem_euclid(1.0) * 6.0;
    let f = h6.fract();
    match h6.floor() as u8 {
        0 => [1.0, f, 0.0],
        1 => [1.0 - f, 1.0, 0.0],
        2 => [0.0, 1.0, f],
        3 => [0.0, 1.0 - f, 1.0],
        4 => [f, 0.0, 1.0],
        _ => [1.0, 0.0, 1.0 - f],
    }
}

/// Hue steps of 1/64, so the last point stops short of red again
fn hsv() -> Vec<[f64; 3]> {
    (0..ANCHORS)
        .map(|i| hue(i as f64 / ANCHORS as f64))
        .collect()
}

/// Red through the spectrum to violet
fn rainbow() -> Vec<[f64; 3]> {
    anchors(|t| hue(t * 5.0 / 6.0))
}

fn autumn() -> Vec<[f64; 3]> {
    anchors(|t| [1.0, t, 0.0])
}

fn spring() -> Vec<[f64; 3]> {
    anchors(|t| [1.0, t, 1.0 - t])
}

fn summer() -> Vec<[f64; 3]> {
    anchors(|t| [t, 0.5 + t / 2.0, 0.4])
}

fn winter() -> Vec<[f64; 3]> {
    anchors(|t| [0.0, t, 0.5 + (1.0 - t) / 2.0])
}

fn cool() -> Vec<[f64; 3]> {
    anchors(|t| [t, 1.0 - t, 1.0])
}

fn ocean() -> Vec<[f64; 3]> {
    anchors(|t| {
        [
            (3.0 * t - 2.0).max(0.0),
            ((3.0 * t - 1.0) / 2.0).abs(),
            t,
        ]
    })
}

/// Dark blue through cyan, yellow and red to dark red
fn jet(t: f64) -> [f64; 3] {
    let channel = |center: f64| (1.5 - (4.0 * t - center).abs()).clamp(0.0, 1.0);
    [channel(3.0), channel(2.0), channel(1.0)]
}

fn parula(t: f64) -> [f64; 3] {
    eval_stops(PARULA, t)
}

fn deepgreen(t: f64) -> [f64; 3] {
    eval_stops(DEEPGREEN, t)
}

/// Every colormap of the `cv` namespace, in constant order
pub const DEFINITIONS: &[(&str, Definition)] = &[
    ("autumn", Definition::Anchors(autumn)),
    ("bone", Definition::Anchors(bone)),
    ("jet", Definition::Function(jet)),
    ("winter", Definition::Anchors(winter)),
    ("rainbow", Definition::Anchors(rainbow)),
    ("ocean", Definition::Anchors(ocean)),
    ("summer", Definition::Anchors(summer)),
    ("spring", Definition::Anchors(spring)),
    ("cool", Definition::Anchors(cool)),
    ("hsv", Definition::Anchors(hsv)),
    ("pink", Definition::Anchors(pink)),
    ("hot", Definition::Anchors(hot)),
    ("parula", Definition::Function(parula)),
    ("magma", Definition::Gradient(colorgrad::magma)),
    ("inferno", Definition::Gradient(colorgrad::inferno)),
    ("plasma", Definition::Gradient(colorgrad::plasma)),
    ("viridis", Definition::Gradient(colorgrad::viridis)),
    ("cividis", Definition::Gradient(colorgrad::cividis)),
    ("twilight", Definition::Function(twilight)),
    ("twilight_shifted", Definition::Function(twilight_shifted)),
    ("turbo", Definition::Gradient(colorgrad::turbo)),
    ("deepgreen", Definition::Function(deepgreen)),
];

/// Image-side conversion: rounded bytes, no reversed variants
pub const CATALOG: Catalog = Catalog {
    name: "cv",
    definitions: DEFINITIONS,
    quantize: Quantize::Round,
    reversed: false,
};

/// Build the `cv` source
pub fn source() -> Result<TableSource> {
    CATALOG.build()
}
