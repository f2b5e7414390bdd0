//! Small colormap resources for tests.

use colormap_tool::{Lut, Namespace, TableSource};
use std::path::Path;

/// A two-entry black-to-white table
pub fn gray() -> Lut {
    Lut::from_rgb(&[[0, 0, 0], [255, 255, 255]]).unwrap()
}

/// The `mpl` side of the fixture resources
pub fn mpl_source() -> TableSource {
    let mut source = TableSource::new();
    source.insert("gray", gray());
    source.insert(
        "traffic",
        Lut::from_rgb(&[[255, 0, 0], [255, 255, 0], [0, 255, 0]]).unwrap(),
    );
    source
}

/// The `cv` side of the fixture resources
pub fn cv_source() -> TableSource {
    let mut source = TableSource::new();
    source.insert(
        "jet",
        Lut::from_rgb(&[[0, 0, 128], [0, 255, 255], [128, 0, 0]]).unwrap(),
    );
    source
}

/// Write both fixture resources into `dir` under their standard file names
pub fn write_resource_dir(dir: &Path) {
    mpl_source()
        .save(&dir.join(Namespace::Matplotlib.resource_file()))
        .unwrap();
    cv_source()
        .save(&dir.join(Namespace::OpenCv.resource_file()))
        .unwrap();
}
