//! Built-in catalog for the `mpl` namespace.
//!
//! Classic maps use their MATLAB-style segment data or channel formulas;
//! the perceptually uniform and ColorBrewer maps come from `colorgrad`
//! presets and the qualitative maps are listed colors. Float colors are
//! truncated to bytes and every map also has a reversed `<name>_r` variant.

use std::f64::consts::PI;

use super::{eval_stops, Catalog, Definition, SegmentData};
use crate::error::Result;
use crate::lut::Quantize;
use crate::source::TableSource;

const JET: SegmentData = SegmentData {
    red: &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)],
    green: &[
        (0.0, 0.0),
        (0.125, 0.0),
        (0.375, 1.0),
        (0.64, 1.0),
        (0.91, 0.0),
        (1.0, 0.0),
    ],
    blue: &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)],
};

const HOT: SegmentData = SegmentData {
    red: &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)],
    blue: &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)],
};

const BONE: SegmentData = SegmentData {
    red: &[(0.0, 0.0), (0.746032, 0.652778), (1.0, 1.0)],
    green: &[
        (0.0, 0.0),
        (0.365079, 0.319444),
        (0.746032, 0.777778),
        (1.0, 1.0),
    ],
    blue: &[(0.0, 0.0), (0.365079, 0.444444), (1.0, 1.0)],
};

const HSV: SegmentData = SegmentData {
    red: &[
        (0.0, 1.0),
        (0.158730, 1.0),
        (0.174603, 0.968750),
        (0.333333, 0.031250),
        (0.349206, 0.0),
        (0.666667, 0.0),
        (0.682540, 0.031250),
        (0.841270, 0.968750),
        (0.857143, 1.0),
        (1.0, 1.0),
    ],
    green: &[
        (0.0, 0.0),
        (0.158730, 0.937500),
        (0.174603, 1.0),
        (0.507937, 1.0),
        (0.666667, 0.062500),
        (0.682540, 0.0),
        (1.0, 0.0),
    ],
    blue: &[
        (0.0, 0.0),
        (0.333333, 0.0),
        (0.349206, 0.062500),
        (0.507937, 1.0),
        (0.841270, 1.0),
        (0.857143, 0.937500),
        (1.0, 0.09375),
    ],
};

const COPPER: SegmentData = SegmentData {
    red: &[(0.0, 0.0), (0.809524, 1.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (1.0, 0.7812)],
    blue: &[(0.0, 0.0), (1.0, 0.4975)],
};

const SEISMIC: SegmentData = SegmentData {
    red: &[(0.0, 0.0), (0.25, 0.0), (0.5, 1.0), (0.75, 1.0), (1.0, 0.5)],
    green: &[(0.0, 0.0), (0.25, 0.0), (0.5, 1.0), (0.75, 0.0), (1.0, 0.0)],
    blue: &[(0.0, 0.3), (0.25, 1.0), (0.5, 1.0), (0.75, 0.0), (1.0, 0.0)],
};

/// Blue to white to red, good for temperature anomalies
const COOLWARM: &[[u8; 3]] = &[
    [59, 76, 192],
    [68, 90, 204],
    [77, 104, 215],
    [87, 117, 225],
    [98, 130, 234],
    [108, 142, 241],
    [119, 154, 247],
    [130, 165, 251],
    [141, 176, 254],
    [152, 185, 255],
    [163, 194, 255],
    [174, 201, 253],
    [184, 208, 249],
    [194, 213, 244],
    [204, 217, 238],
    [213, 219, 230],
    [221, 221, 221],
    [229, 216, 209],
    [236, 211, 197],
    [241, 204, 185],
    [245, 196, 173],
    [247, 187, 160],
    [247, 177, 148],
    [247, 166, 135],
    [244, 154, 123],
    [241, 141, 111],
    [236, 127, 99],
    [229, 112, 88],
    [222, 96, 77],
    [213, 80, 66],
    [203, 62, 56],
    [192, 40, 47],
];

const BWR: &[[u8; 3]] = &[[0, 0, 255], [255, 255, 255], [255, 0, 0]];

const BRG: SegmentData = SegmentData {
    red: &[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)],
    green: &[(0.0, 0.0), (0.5, 0.0), (1.0, 1.0)],
    blue: &[(0.0, 1.0), (0.5, 0.0), (1.0, 0.0)],
};

/// Cyclic: light at both ends, dark in the middle
const TWILIGHT: &[[u8; 3]] = &[
    [226, 217, 226],
    [153, 174, 207],
    [97, 126, 190],
    [92, 68, 158],
    [47, 20, 54],
    [120, 35, 75],
    [177, 83, 73],
    [207, 155, 133],
    [226, 217, 226],
];

const TAB10: &[[u8; 3]] = &[
    [31, 119, 180],
    [255, 127, 14],
    [44, 160, 44],
    [214, 39, 40],
    [148, 103, 189],
    [140, 86, 75],
    [227, 119, 194],
    [127, 127, 127],
    [188, 189, 34],
    [23, 190, 207],
];

const SET1: &[[u8; 3]] = &[
    [228, 26, 28],
    [55, 126, 184],
    [77, 175, 74],
    [152, 78, 163],
    [255, 127, 0],
    [255, 255, 51],
    [166, 86, 40],
    [247, 129, 191],
    [153, 153, 153],
];

const SET2: &[[u8; 3]] = &[
    [102, 194, 165],
    [252, 141, 98],
    [141, 160, 203],
    [231, 138, 195],
    [166, 216, 84],
    [255, 217, 47],
    [229, 196, 148],
    [179, 179, 179],
];

const SET3: &[[u8; 3]] = &[
    [141, 211, 199],
    [255, 255, 179],
    [190, 186, 218],
    [251, 128, 114],
    [128, 177, 211],
    [253, 180, 98],
    [179, 222, 105],
    [252, 205, 229],
    [217, 217, 217],
    [188, 128, 189],
    [204, 235, 197],
    [255, 237, 111],
];

const PASTEL1: &[[u8; 3]] = &[
    [251, 180, 174],
    [179, 205, 227],
    [204, 235, 197],
    [222, 203, 228],
    [254, 217, 166],
    [255, 255, 204],
    [229, 216, 189],
    [253, 218, 236],
    [242, 242, 242],
];

const PASTEL2: &[[u8; 3]] = &[
    [179, 226, 205],
    [253, 205, 172],
    [203, 213, 232],
    [244, 202, 228],
    [230, 245, 201],
    [255, 242, 174],
    [241, 226, 204],
    [204, 204, 204],
];

const DARK2: &[[u8; 3]] = &[
    [27, 158, 119],
    [217, 95, 2],
    [117, 112, 179],
    [231, 41, 138],
    [102, 166, 30],
    [230, 171, 2],
    [166, 118, 29],
    [102, 102, 102],
];

const ACCENT: &[[u8; 3]] = &[
    [127, 201, 127],
    [190, 174, 212],
    [253, 192, 134],
    [255, 255, 153],
    [56, 108, 176],
    [240, 2, 127],
    [191, 91, 23],
    [102, 102, 102],
];

const PAIRED: &[[u8; 3]] = &[
    [166, 206, 227],
    [31, 120, 180],
    [178, 223, 138],
    [51, 160, 44],
    [251, 154, 153],
    [227, 26, 28],
    [253, 191, 111],
    [255, 127, 0],
    [202, 178, 214],
    [106, 61, 154],
    [255, 255, 153],
    [177, 89, 40],
];

fn gray(t: f64) -> [f64; 3] {
    [t, t, t]
}

fn binary(t: f64) -> [f64; 3] {
    [1.0 - t, 1.0 - t, 1.0 - t]
}

fn autumn(t: f64) -> [f64; 3] {
    [1.0, t, 0.0]
}

fn spring(t: f64) -> [f64; 3] {
    [1.0, t, 1.0 - t]
}

fn summer(t: f64) -> [f64; 3] {
    [t, 0.5 + t / 2.0, 0.4]
}

fn winter(t: f64) -> [f64; 3] {
    [0.0, t, 1.0 - t / 2.0]
}

fn cool(t: f64) -> [f64; 3] {
    [t, 1.0 - t, 1.0]
}

fn ocean(t: f64) -> [f64; 3] {
    [3.0 * t - 2.0, ((3.0 * t - 1.0) / 2.0).abs(), t]
}

fn rainbow(t: f64) -> [f64; 3] {
    [(2.0 * t - 0.5).abs(), (PI * t).sin(), (PI * t / 2.0).cos()]
}

/// Sepia tones: the square root of a gray and hot blend
fn pink(t: f64) -> [f64; 3] {
    HOT.eval(t).map(|hot| ((2.0 * t + hot) / 3.0).sqrt())
}

fn afmhot(t: f64) -> [f64; 3] {
    [2.0 * t, 2.0 * t - 0.5, 2.0 * t - 1.0]
}

fn gist_heat(t: f64) -> [f64; 3] {
    [1.5 * t, 2.0 * t - 1.0, 4.0 * t - 3.0]
}

fn gnuplot(t: f64) -> [f64; 3] {
    [t.sqrt(), t.powi(3), (2.0 * PI * t).sin()]
}

fn gnuplot2(t: f64) -> [f64; 3] {
    let blue = if t < 0.25 {
        4.0 * t
    } else if t < 0.92 {
        -2.0 * t + 1.84
    } else {
        t / 0.08 - 11.5
    };
    [t / 0.32 - 0.78125, 2.0 * t - 0.84, blue]
}

pub(crate) fn twilight(t: f64) -> [f64; 3] {
    eval_stops(TWILIGHT, t)
}

/// Twilight rotated by half a turn and reversed, dark at both ends
pub(crate) fn twilight_shifted(t: f64) -> [f64; 3] {
    twilight((0.5 - t).rem_euclid(1.0))
}

/// Every colormap of the `mpl` namespace
pub const DEFINITIONS: &[(&str, Definition)] = &[
    ("viridis", Definition::Gradient(colorgrad::viridis)),
    ("plasma", Definition::Gradient(colorgrad::plasma)),
    ("inferno", Definition::Gradient(colorgrad::inferno)),
    ("magma", Definition::Gradient(colorgrad::magma)),
    ("cividis", Definition::Gradient(colorgrad::cividis)),
    ("turbo", Definition::Gradient(colorgrad::turbo)),
    ("cubehelix", Definition::Gradient(colorgrad::cubehelix_default)),
    ("Blues", Definition::Gradient(colorgrad::blues)),
    ("Greens", Definition::Gradient(colorgrad::greens)),
    ("Greys", Definition::Gradient(colorgrad::greys)),
    ("Oranges", Definition::Gradient(colorgrad::oranges)),
    ("Purples", Definition::Gradient(colorgrad::purples)),
    ("Reds", Definition::Gradient(colorgrad::reds)),
    ("BuGn", Definition::Gradient(colorgrad::bu_gn)),
    ("BuPu", Definition::Gradient(colorgrad::bu_pu)),
    ("GnBu", Definition::Gradient(colorgrad::gn_bu)),
    ("OrRd", Definition::Gradient(colorgrad::or_rd)),
    ("PuBu", Definition::Gradient(colorgrad::pu_bu)),
    ("PuBuGn", Definition::Gradient(colorgrad::pu_bu_gn)),
    ("PuRd", Definition::Gradient(colorgrad::pu_rd)),
    ("RdPu", Definition::Gradient(colorgrad::rd_pu)),
    ("YlGn", Definition::Gradient(colorgrad::yl_gn)),
    ("YlGnBu", Definition::Gradient(colorgrad::yl_gn_bu)),
    ("YlOrBr", Definition::Gradient(colorgrad::yl_or_br)),
    ("YlOrRd", Definition::Gradient(colorgrad::yl_or_rd)),
    ("BrBG", Definition::Gradient(colorgrad::br_bg)),
    ("PRGn", Definition::Gradient(colorgrad::pr_gn)),
    ("PiYG", Definition::Gradient(colorgrad::pi_yg)),
    ("PuOr", Definition::Gradient(colorgrad::pu_or)),
    ("RdBu", Definition::Gradient(colorgrad::rd_bu)),
    ("RdGy", Definition::Gradient(colorgrad::rd_gy)),
    ("RdYlBu", Definition::Gradient(colorgrad::rd_yl_bu)),
    ("RdYlGn", Definition::Gradient(colorgrad::rd_yl_gn)),
    ("Spectral", Definition::Gradient(colorgrad::spectral)),
    ("jet", Definition::Segments(JET)),
    ("hot", Definition::Segments(HOT)),
    ("bone", Definition::Segments(BONE)),
    ("hsv", Definition::Segments(HSV)),
    ("copper", Definition::Segments(COPPER)),
    ("seismic", Definition::Segments(SEISMIC)),
    ("coolwarm", Definition::Stops(COOLWARM)),
    ("bwr", Definition::Stops(BWR)),
    ("gray", Definition::Function(gray)),
    ("binary", Definition::Function(binary)),
    ("autumn", Definition::Function(autumn)),
    ("spring", Definition::Function(spring)),
    ("summer", Definition::Function(summer)),
    ("winter", Definition::Function(winter)),
    ("cool", Definition::Function(cool)),
    ("ocean", Definition::Function(ocean)),
    ("rainbow", Definition::Function(rainbow)),
    ("pink", Definition::Function(pink)),
    ("afmhot", Definition::Function(afmhot)),
    ("gist_heat", Definition::Function(gist_heat)),
    ("gnuplot", Definition::Function(gnuplot)),
    ("gnuplot2", Definition::Function(gnuplot2)),
    ("gist_gray", Definition::Function(gray)),
    ("gist_yarg", Definition::Function(binary)),
    ("brg", Definition::Segments(BRG)),
    ("twilight", Definition::Function(twilight)),
    ("twilight_shifted", Definition::Function(twilight_shifted)),
    ("tab10", Definition::Listed(TAB10)),
    ("Set1", Definition::Listed(SET1)),
    ("Set2", Definition::Listed(SET2)),
    ("Set3", Definition::Listed(SET3)),
    ("Pastel1", Definition::Listed(PASTEL1)),
    ("Pastel2", Definition::Listed(PASTEL2)),
    ("Dark2", Definition::Listed(DARK2)),
    ("Accent", Definition::Listed(ACCENT)),
    ("Paired", Definition::Listed(PAIRED)),
];

/// Plotting-side conversion: truncated bytes, reversed variants included
pub const CATALOG: Catalog = Catalog {
    name: "mpl",
    definitions: DEFINITIONS,
    quantize: Quantize::Truncate,
    reversed: true,
};

/// Build the `mpl` source
pub fn source() -> Result<TableSource> {
    CATALOG.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ColormapSource;

    #[test]
    fn test_all_tables_are_256_entries() {
        let source = source().unwrap();
        assert_eq!(source.len(), 2 * DEFINITIONS.len());
        for (name, lut) in source.iter() {
            assert_eq!(lut.as_array().shape(), &[256, 1, 3], "{}", name);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = DEFINITIONS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEFINITIONS.len());
    }

    #[test]
    fn test_known_endpoints() {
        let source = source().unwrap();

        let jet = source.lookup("jet").unwrap();
        assert_eq!(jet.color(0), Some([0, 0, 127]));
        assert_eq!(jet.color(255), Some([127, 0, 0]));

        let gray = source.lookup("gray").unwrap();
        assert_eq!(gray.color(0), Some([0, 0, 0]));
        assert_eq!(gray.color(255), Some([255, 255, 255]));

        let coolwarm = source.lookup("coolwarm").unwrap();
        assert_eq!(coolwarm.color(0), Some([59, 76, 192]));
        assert_eq!(coolwarm.color(255), Some([192, 40, 47]));

        // viridis runs from dark purple to yellow
        let viridis = source.lookup("viridis").unwrap();
        let [r0, g0, b0] = viridis.color(0).unwrap();
        let [r1, g1, b1] = viridis.color(255).unwrap();
        assert!(b0 > g0 && r0 > g0);
        assert!(r1 > b1 && g1 > b1);
    }

    #[test]
    fn test_seismic_is_white_in_the_middle() {
        let source = source().unwrap();
        let seismic = source.lookup("seismic").unwrap();

        // Position 128/255 sits just past the white stop
        let [r, g, b] = seismic.color(128).unwrap();
        assert_eq!(r, 255);
        assert!(g > 245 && b > 245);
    }

    #[test]
    fn test_reversed_variants() {
        let source = source().unwrap();

        for (name, _) in DEFINITIONS {
            let forward = source.lookup(name).unwrap();
            let reversed = source.lookup(&format!("{}_r", name)).unwrap();
            assert_eq!(reversed, &forward.reversed(), "{}", name);
        }

        let viridis_r = source.lookup("viridis_r").unwrap();
        assert_eq!(viridis_r.color(0), source.lookup("viridis").unwrap().color(255));
    }

    #[test]
    fn test_qualitative_maps_keep_their_colors() {
        let source = source().unwrap();
        let tab10 = source.lookup("tab10").unwrap();

        assert_eq!(tab10.color(0), Some([31, 119, 180]));
        assert_eq!(tab10.color(25), Some([31, 119, 180]));
        assert_eq!(tab10.color(26), Some([255, 127, 14]));
        assert_eq!(tab10.color(255), Some([23, 190, 207]));

        let mut distinct = tab10.colors();
        distinct.dedup();
        assert_eq!(distinct, TAB10.to_vec());
    }

    #[test]
    fn test_classic_additions() {
        let source = source().unwrap();

        // sqrt(0.0416 / 3) of full scale
        assert_eq!(source.lookup("pink").unwrap().color(0), Some([30, 0, 0]));
        assert_eq!(source.lookup("pink").unwrap().color(255), Some([255, 255, 255]));
        assert_eq!(source.lookup("afmhot").unwrap().color(255), Some([255, 255, 255]));
        assert_eq!(source.lookup("brg").unwrap().color(0), Some([0, 0, 255]));
        assert_eq!(source.lookup("gist_yarg").unwrap().color(0), Some([255, 255, 255]));

        let twilight = source.lookup("twilight").unwrap();
        assert_eq!(twilight.color(0), twilight.color(255));
        let shifted = source.lookup("twilight_shifted").unwrap();
        assert_eq!(shifted.color(0), shifted.color(255));
        let [r, g, b] = shifted.color(0).unwrap();
        assert!(r < 60 && g < 30 && b < 60);
    }
}
