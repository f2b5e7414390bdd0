//! OpenCV-side adaptation.
//!
//! OpenCV addresses its built-in colormaps by integer constant and expects
//! custom lookup tables as `(256, 1, 3)` arrays in BGR order. Asking for a
//! native OpenCV colormap at its native length yields the constant itself;
//! everything else yields a BGR table.

use ndarray::{Array3, ArrayView2};
use std::fmt;
use tracing::debug;

use crate::error::{ColormapError, Result};
use crate::lut::{apply_colormap, DEFAULT_LENGTH};
use crate::resolver::{Namespace, Resolver};

/// OpenCV's built-in colormap constants (`cv::ColormapTypes`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColormapType {
    Autumn = 0,
    Bone = 1,
    Jet = 2,
    Winter = 3,
    Rainbow = 4,
    Ocean = 5,
    Summer = 6,
    Spring = 7,
    Cool = 8,
    Hsv = 9,
    Pink = 10,
    Hot = 11,
    Parula = 12,
    Magma = 13,
    Inferno = 14,
    Plasma = 15,
    Viridis = 16,
    Cividis = 17,
    Twilight = 18,
    TwilightShifted = 19,
    Turbo = 20,
    DeepGreen = 21,
}

impl ColormapType {
    /// All constants in numeric order
    pub const ALL: [ColormapType; 22] = [
        ColormapType::Autumn,
        ColormapType::Bone,
        ColormapType::Jet,
        ColormapType::Winter,
        ColormapType::Rainbow,
        ColormapType::Ocean,
        ColormapType::Summer,
        ColormapType::Spring,
        ColormapType::Cool,
        ColormapType::Hsv,
        ColormapType::Pink,
        ColormapType::Hot,
        ColormapType::Parula,
        ColormapType::Magma,
        ColormapType::Inferno,
        ColormapType::Plasma,
        ColormapType::Viridis,
        ColormapType::Cividis,
        ColormapType::Twilight,
        ColormapType::TwilightShifted,
        ColormapType::Turbo,
        ColormapType::DeepGreen,
    ];

    /// The integer value OpenCV uses
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Lower-case name, as in `COLORMAP_<NAME>`
    pub fn name(&self) -> &'static str {
        match self {
            ColormapType::Autumn => "autumn",
            ColormapType::Bone => "bone",
            ColormapType::Jet => "jet",
            ColormapType::Winter => "winter",
            ColormapType::Rainbow => "rainbow",
            ColormapType::Ocean => "ocean",
            ColormapType::Summer => "summer",
            ColormapType::Spring => "spring",
            ColormapType::Cool => "cool",
            ColormapType::Hsv => "hsv",
            ColormapType::Pink => "pink",
            ColormapType::Hot => "hot",
            ColormapType::Parula => "parula",
            ColormapType::Magma => "magma",
            ColormapType::Inferno => "inferno",
            ColormapType::Plasma => "plasma",
            ColormapType::Viridis => "viridis",
            ColormapType::Cividis => "cividis",
            ColormapType::Twilight => "twilight",
            ColormapType::TwilightShifted => "twilight_shifted",
            ColormapType::Turbo => "turbo",
            ColormapType::DeepGreen => "deepgreen",
        }
    }

    /// Look up a constant by its lower-case name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }

    /// Look up a constant by its integer value
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.code() == code)
    }
}

impl fmt::Display for ColormapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "COLORMAP_{}", self.name().to_uppercase())
    }
}

/// A colormap as OpenCV consumes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvColormap {
    /// One of OpenCV's built-in colormaps
    Builtin(ColormapType),
    /// A custom `(N, 1, 3)` lookup table in BGR order
    Table(Array3<u8>),
}

impl CvColormap {
    /// The BGR lookup table behind this colormap.
    ///
    /// Built-in constants are expanded from the resolver's `cv` source.
    pub fn table(&self, resolver: &Resolver) -> Result<Array3<u8>> {
        match self {
            CvColormap::Builtin(ty) => Ok(resolver
                .resolve(ty.name(), Some(Namespace::OpenCv.key()), DEFAULT_LENGTH)?
                .to_bgr()),
            CvColormap::Table(table) => Ok(table.clone()),
        }
    }

    /// Colorize a single-channel image, producing a BGR image like
    /// `cv::applyColorMap`
    pub fn apply(&self, image: ArrayView2<'_, u8>, resolver: &Resolver) -> Result<Array3<u8>> {
        let table = self.table(resolver)?;
        apply_colormap(image, table.view().into_dyn())
    }
}

/// Get a colormap in the form OpenCV consumes.
///
/// Returns the built-in constant when the identifier names a native OpenCV
/// colormap, the length is OpenCV's native 256 and `force_table` is off.
/// Otherwise returns the resolved table in BGR order.
pub fn get_cv_colormap(
    resolver: &Resolver,
    name: &str,
    namespace: Option<&str>,
    length: usize,
    force_table: bool,
) -> Result<CvColormap> {
    let id = resolver.identify(name, namespace)?;

    if id.namespace == Namespace::OpenCv && length == DEFAULT_LENGTH && !force_table {
        if let Some(ty) = ColormapType::from_name(&id.name) {
            debug!(colormap = %id, constant = ty.code(), "Using native OpenCV colormap");
            return Ok(CvColormap::Builtin(ty));
        }
    }

    let lut = resolver.resolve_id(&id, length)?;
    Ok(CvColormap::Table(lut.to_bgr()))
}

/// Parse an OpenCV constant given either as a name or as its integer value
pub fn parse_colormap_type(value: &str) -> Result<ColormapType> {
    let lowered = value.trim().to_lowercase();
    let lowered = lowered.strip_prefix("colormap_").unwrap_or(&lowered);

    lowered
        .parse::<i32>()
        .ok()
        .and_then(ColormapType::from_code)
        .or_else(|| ColormapType::from_name(lowered))
        .ok_or_else(|| ColormapError::InvalidParameter {
            param: "colormap".to_string(),
            message: format!("Unknown OpenCV colormap: {}", value),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lut::Lut;
    use crate::resolver::builtin_resolver;
    use ndarray::Array2;

    #[test]
    fn test_constants() {
        assert_eq!(ColormapType::Autumn.code(), 0);
        assert_eq!(ColormapType::Jet.code(), 2);
        assert_eq!(ColormapType::Viridis.code(), 16);
        assert_eq!(ColormapType::DeepGreen.code(), 21);
        assert_eq!(ColormapType::from_name("jet"), Some(ColormapType::Jet));
        assert_eq!(ColormapType::from_code(20), Some(ColormapType::Turbo));
        assert_eq!(ColormapType::from_code(22), None);
        assert_eq!(ColormapType::Jet.to_string(), "COLORMAP_JET");

        for (i, ty) in ColormapType::ALL.iter().enumerate() {
            assert_eq!(ty.code(), i as i32);
        }
    }

    #[test]
    fn test_parse_colormap_type() {
        assert_eq!(parse_colormap_type("jet").unwrap(), ColormapType::Jet);
        assert_eq!(parse_colormap_type("COLORMAP_JET").unwrap(), ColormapType::Jet);
        assert_eq!(parse_colormap_type("2").unwrap(), ColormapType::Jet);
        assert!(parse_colormap_type("nope").is_err());
    }

    #[test]
    fn test_native_name_returns_constant() {
        let resolver = builtin_resolver().unwrap();

        let cmap = get_cv_colormap(resolver, "jet", Some("cv"), 256, false).unwrap();
        assert_eq!(cmap, CvColormap::Builtin(ColormapType::Jet));

        let cmap = get_cv_colormap(resolver, "cv.jet", None, 256, false).unwrap();
        assert_eq!(cmap, CvColormap::Builtin(ColormapType::Jet));
    }

    #[test]
    fn test_forced_or_resized_native_returns_table() {
        let resolver = builtin_resolver().unwrap();

        match get_cv_colormap(resolver, "viridis", Some("cv"), 256, true).unwrap() {
            CvColormap::Table(table) => assert_eq!(table.shape(), &[256, 1, 3]),
            other => panic!("expected a table, got {:?}", other),
        }

        match get_cv_colormap(resolver, "cv.jet", None, 64, false).unwrap() {
            CvColormap::Table(table) => assert_eq!(table.shape(), &[64, 1, 3]),
            other => panic!("expected a table, got {:?}", other),
        }
    }

    #[test]
    fn test_foreign_table_is_bgr() {
        let resolver = builtin_resolver().unwrap();

        let rgb = resolver.resolve("viridis", Some("mpl"), 256).unwrap();
        let cmap = get_cv_colormap(resolver, "viridis", Some("mpl"), 256, false).unwrap();

        let table = match cmap {
            CvColormap::Table(table) => table,
            other => panic!("expected a table, got {:?}", other),
        };
        assert_eq!(table.shape(), &[256, 1, 3]);
        assert_eq!(Lut::from_bgr(table.view().into_dyn()).unwrap(), rgb);
    }

    #[test]
    fn test_builtin_and_table_apply_the_same() {
        let resolver = builtin_resolver().unwrap();
        let image = Array2::from_shape_fn((16, 16), |(y, x)| (y * 16 + x) as u8);

        let builtin = get_cv_colormap(resolver, "jet", Some("cv"), 256, false).unwrap();
        let table = get_cv_colormap(resolver, "jet", Some("cv"), 256, true).unwrap();

        assert_eq!(
            builtin.apply(image.view(), resolver).unwrap(),
            table.apply(image.view(), resolver).unwrap()
        );
    }

    #[test]
    fn test_errors_propagate() {
        let resolver = builtin_resolver().unwrap();
        assert!(matches!(
            get_cv_colormap(resolver, "mpl.viridis", Some("mpl"), 256, false),
            Err(ColormapError::Conflict { .. })
        ));
        assert!(matches!(
            get_cv_colormap(resolver, "nonexistent", Some("cv"), 256, false),
            Err(ColormapError::UnknownName { .. })
        ));
    }

    #[test]
    fn test_every_constant_resolves() {
        let resolver = builtin_resolver().unwrap();

        assert_eq!(
            get_cv_colormap(resolver, "pink", Some("cv"), 256, false).unwrap(),
            CvColormap::Builtin(ColormapType::Pink)
        );

        for ty in ColormapType::ALL {
            let cmap = get_cv_colormap(resolver, ty.name(), Some("cv"), 256, false).unwrap();
            assert_eq!(cmap, CvColormap::Builtin(ty));
            assert_eq!(cmap.table(resolver).unwrap().shape(), &[256, 1, 3], "{}", ty);
        }
    }
}
