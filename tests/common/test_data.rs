//! Test data generation utilities.
//!
//! This module writes colormap files with known contents into a directory
//! so the loader and registry can be exercised end to end.

use cmaps::{Color, ColorTable};
use std::fs;
use std::io;
use std::path::Path;

/// Entries of the `testcmap` fixture: black, mid gray, white, mid red, red
pub fn testcmap_entries() -> Vec<Color> {
    vec![
        Color::Rgb([0.0, 0.0, 0.0]),
        Color::Rgb([0.5, 0.5, 0.5]),
        Color::Rgb([1.0, 1.0, 1.0]),
        Color::Rgb([1.0, 0.5, 0.5]),
        Color::Rgb([1.0, 0.0, 0.0]),
    ]
}

/// A grayscale ramp of `n` evenly spaced entries
pub fn gray_ramp(n: usize) -> ColorTable {
    let entries = (0..n)
        .map(|i| {
            let v = i as f32 / (n - 1) as f32;
            Color::Rgb([v, v, v])
        })
        .collect();
    ColorTable::from_entries(entries, "gray_ramp").unwrap()
}

/// Write a float-valued `.rgb` file for `testcmap`
pub fn write_testcmap(dir: &Path) -> io::Result<()> {
    let mut content = String::from("# testcmap\n");
    for color in testcmap_entries() {
        let c = color.as_slice();
        content.push_str(&format!("{:.6} {:.6} {:.6}\n", c[0], c[1], c[2]));
    }
    fs::write(dir.join("testcmap.rgb"), content)
}

/// Write an integer-valued `.rgb` file with an `ncolors` header
pub fn write_integer_table(dir: &Path, stem: &str) -> io::Result<()> {
    let content = "ncolors=3\n#  r   g   b\n  0   0 255\n255 255 255\n255   0   0\n";
    fs::write(dir.join(format!("{}.rgb", stem)), content)
}

/// Write a JSON bundle with one RGBA table
pub fn write_bundle(dir: &Path) -> io::Result<()> {
    let content = r#"{"fade": [[1.0, 0.0, 0.0, 0.0], [1.0, 0.0, 0.0, 1.0]]}"#;
    fs::write(dir.join("bundle.json"), content)
}

/// Write a file the loader must skip
pub fn write_broken_table(dir: &Path) -> io::Result<()> {
    fs::write(dir.join("broken.rgb"), "# no data here\n")
}

/// Populate a directory with every fixture above
pub fn populate(dir: &Path) -> io::Result<()> {
    write_testcmap(dir)?;
    let nested = dir.join("ncl");
    fs::create_dir_all(&nested)?;
    write_integer_table(&nested, "Bl-Wh+Re")?;
    write_integer_table(&nested, "8colors")?;
    write_bundle(dir)?;
    write_broken_table(dir)?;
    Ok(())
}
