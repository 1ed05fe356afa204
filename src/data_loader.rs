//! Color table file loading.
//!
//! Two on-disk formats are understood:
//!
//! - `.rgb` text tables: one `r g b` triple per line, either integers in
//!   [0, 255] or floats in [0, 1]. Lines mentioning `ncolors` and text after
//!   `#` or `;` are ignored.
//! - `.json` bundles: an object mapping colormap names to arrays of
//!   3- or 4-element color arrays.
//!
//! File stems are normalized into valid colormap names with
//! [`normalize_name`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::colormaps::{Color, ColorTable};
use crate::error::{CmapsError, Result};
use crate::logging::log_load_stats;

/// Extension of text color tables
pub const RGB_EXTENSION: &str = "rgb";
/// Extension of JSON table bundles
pub const BUNDLE_EXTENSION: &str = "json";

/// Recursively collect files under `directory` with the given extension,
/// sorted by path.
pub fn find_files_with_extension(directory: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect_files(directory, extension, &mut found)?;
    found.sort();
    Ok(found)
}

fn collect_files(directory: &Path, extension: &str, found: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, extension, found)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            found.push(path);
        }
    }
    Ok(())
}

/// Turn a file stem into a colormap name.
///
/// Names starting with a digit or `_` get a `C` prefix; names containing
/// `-` or `+` get a `cmaps_` prefix with those characters replaced by `_`.
pub fn normalize_name(stem: &str) -> String {
    let mut name = stem.to_string();
    if name.starts_with(|c: char| c.is_ascii_digit() || c == '_') {
        name = format!("C{}", name);
    }
    if name.contains('-') {
        name = format!("cmaps_{}", name.replace('-', "_"));
    }
    if name.contains('+') {
        name = format!("cmaps_{}", name.replace('+', "_"));
    }
    name
}

/// Parse the contents of an `.rgb` table.
pub fn parse_rgb_table(content: &str) -> Result<Vec<Color>> {
    let mut rows: Vec<[&str; 3]> = Vec::new();

    for line in content.lines() {
        if line.contains("ncolors") {
            continue;
        }
        let data = line.split(['#', ';']).next().unwrap_or_default();
        let mut tokens = data.split_whitespace();
        let row = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(r), Some(g), Some(b)) => [r, g, b],
            _ => continue,
        };
        if row.iter().all(|t| looks_numeric(t)) {
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err(CmapsError::invalid_table("no color rows found"));
    }

    let is_float = rows.iter().flatten().any(|t| t.contains('.'));
    let scale = if is_float { 1.0 } else { 255.0 };

    rows.iter()
        .map(|row| {
            let mut rgb = [0.0f32; 3];
            for (slot, token) in rgb.iter_mut().zip(row) {
                let value: f32 = token.parse().map_err(|e| CmapsError::Parse {
                    message: format!("invalid channel value '{}': {}", token, e),
                })?;
                *slot = value / scale;
            }
            Ok(Color::Rgb(rgb))
        })
        .collect()
}

fn looks_numeric(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_digit() || c == '.' || c == '-' || c == '+')
}

/// Load one `.rgb` file as a table named after its normalized file stem.
pub fn load_rgb_file(path: &Path) -> Result<ColorTable> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CmapsError::invalid_table(format!("bad file name: {}", path.display())))?;
    let content = std::fs::read_to_string(path)?;
    let entries = parse_rgb_table(&content)?;
    ColorTable::from_entries(entries, normalize_name(stem))
}

/// Load every table in a JSON bundle. Names are used as-is.
pub fn load_bundle(path: &Path) -> Result<Vec<ColorTable>> {
    let content = std::fs::read_to_string(path)?;
    let bundle: BTreeMap<String, Vec<Color>> = serde_json::from_str(&content)?;
    bundle
        .into_iter()
        .map(|(name, entries)| ColorTable::from_entries(entries, name))
        .collect()
}

/// Load all bundles and `.rgb` tables found under `directory`.
///
/// Files that fail to parse are skipped with a warning; a missing or
/// unreadable directory is an error.
pub fn load_dir(directory: &Path) -> Result<Vec<ColorTable>> {
    let start = Instant::now();
    if !directory.is_dir() {
        return Err(CmapsError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Colormap directory not found: {}", directory.display()),
        )));
    }

    info!("Loading colormaps from {}", directory.display());

    let bundles = find_files_with_extension(directory, BUNDLE_EXTENSION)?;
    let tables = find_files_with_extension(directory, RGB_EXTENSION)?;
    debug!("Found {} bundles and {} rgb files", bundles.len(), tables.len());

    let mut loaded = Vec::new();
    let mut skipped = 0usize;

    for path in &bundles {
        match load_bundle(path) {
            Ok(mut found) => loaded.append(&mut found),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Skipping colormap bundle");
                skipped += 1;
            }
        }
    }

    for path in &tables {
        match load_rgb_file(path) {
            Ok(table) => loaded.push(table),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Skipping colormap file");
                skipped += 1;
            }
        }
    }

    log_load_stats(
        &directory.display().to_string(),
        loaded.len(),
        skipped,
        start.elapsed(),
    );

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("BlWhRe"), "BlWhRe");
        assert_eq!(normalize_name("3gauss"), "C3gauss");
        assert_eq!(normalize_name("_hidden"), "C_hidden");
        assert_eq!(normalize_name("GMT-haxby"), "cmaps_GMT_haxby");
        assert_eq!(normalize_name("a+b"), "cmaps_a_b");
        assert_eq!(normalize_name("a-b+c"), "cmaps_cmaps_a_b_c");
    }

    #[test]
    fn test_parse_integer_table() {
        let content = "ncolors=3\n# r g b\n255 0 0\n0 255 0\n0 0 255\n";
        let colors = parse_rgb_table(content).unwrap();
        assert_eq!(
            colors,
            vec![
                Color::Rgb([1.0, 0.0, 0.0]),
                Color::Rgb([0.0, 1.0, 0.0]),
                Color::Rgb([0.0, 0.0, 1.0]),
            ]
        );
    }

    #[test]
    fn test_parse_float_table() {
        let content = "; comment\n0.0 0.5 1\n1.0 0.25 0.0 extra tokens\n\n";
        let colors = parse_rgb_table(content).unwrap();
        assert_eq!(
            colors,
            vec![Color::Rgb([0.0, 0.5, 1.0]), Color::Rgb([1.0, 0.25, 0.0])]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_rgb_table("ncolors=0\n# nothing\n"),
            Err(CmapsError::InvalidTable { .. })
        ));
        assert!(matches!(
            parse_rgb_table("1.0 0.x 0.5\n"),
            Err(CmapsError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_dir_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("good.rgb"), "0 0 0\n255 255 255\n").unwrap();
        fs::write(
            dir.path().join("nested/3-step.rgb"),
            "0.0 0.0 0.0\n0.5 0.5 0.5\n1.0 1.0 1.0\n",
        )
        .unwrap();
        fs::write(dir.path().join("bad.rgb"), "300 0 0\n").unwrap();
        fs::write(
            dir.path().join("bundle.json"),
            r#"{"alpha_ramp": [[0, 0, 0, 0], [1, 1, 1, 1]]}"#,
        )
        .unwrap();

        let tables = load_dir(dir.path()).unwrap();
        let mut names: Vec<&str> = tables.iter().map(|t| t.name()).collect();
        names.sort();
        assert_eq!(names, vec!["alpha_ramp", "cmaps_C3_step", "good"]);
    }

    #[test]
    fn test_load_dir_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_dir(&dir.path().join("missing")),
            Err(CmapsError::Io(_))
        ));
    }
}
