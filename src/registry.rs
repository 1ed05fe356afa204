//! Colormap registry.
//!
//! A [`ColormapRegistry`] owns the loaded tables and resolves lookups by
//! name. Names ending in `_r` request the reversed table. A process-wide
//! default registry backs the free functions [`get_cmap`],
//! [`get_cmap_list`] and [`register`]; it is loaded lazily from
//! [`Config::from_env`].

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::colormaps::ColorTable;
use crate::config::Config;
use crate::data_loader;
use crate::error::{CmapsError, Result};
use crate::interpolation::{Interpolator, LinearInterpolator};
use crate::logging::log_error;

/// Suffix requesting a reversed colormap
pub const REVERSED_SUFFIX: &str = "_r";

/// Named color tables
#[derive(Debug, Clone, Default)]
pub struct ColormapRegistry {
    tables: HashMap<String, ColorTable>,
}

impl ColormapRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every table found under `directory`
    pub fn from_dir(directory: &Path) -> Result<Self> {
        let mut registry = Self::new();
        for table in data_loader::load_dir(directory)? {
            // Tables found earlier win on duplicate names
            if let Err(e) = registry.register(table) {
                debug!(error = %e, "Ignoring colormap");
            }
        }
        Ok(registry)
    }

    /// Load the directory named by the configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_dir(&config.data.file_dir)
    }

    /// Add a table under its own name.
    pub fn register(&mut self, table: ColorTable) -> Result<()> {
        let name = table.name().to_string();
        if name.ends_with(REVERSED_SUFFIX) {
            return Err(CmapsError::invalid_argument(
                "name",
                format!("'{}' ends with the reserved suffix '{}'", name, REVERSED_SUFFIX),
            ));
        }
        if self.tables.contains_key(&name) {
            return Err(CmapsError::AlreadyRegistered { name });
        }
        self.tables.insert(name, table);
        Ok(())
    }

    /// Look up a colormap, optionally interpolated to `lutsize` entries and
    /// reversed. A `_r` suffix on `name` also reverses.
    pub fn get_cmap(
        &self,
        name: &str,
        lutsize: Option<usize>,
        reverse: bool,
    ) -> Result<ColorTable> {
        self.get_cmap_with(name, lutsize, reverse, &LinearInterpolator)
    }

    /// [`get_cmap`](Self::get_cmap) with an explicit resampling method.
    pub fn get_cmap_with(
        &self,
        name: &str,
        lutsize: Option<usize>,
        reverse: bool,
        interpolator: &dyn Interpolator,
    ) -> Result<ColorTable> {
        let (base, reverse) = match name.strip_suffix(REVERSED_SUFFIX) {
            Some(base) => (base, true),
            None => (name, reverse),
        };

        let mut table = self
            .tables
            .get(base)
            .cloned()
            .ok_or_else(|| CmapsError::NotFound {
                name: name.to_string(),
            })?;

        if let Some(lutsize) = lutsize {
            if lutsize < 2 {
                return Err(CmapsError::invalid_argument(
                    "lutsize",
                    format!("must be at least 2, got {}", lutsize),
                ));
            }
            table = table.resample_with(interpolator, lutsize)?;
            if interpolator.name() != "nearest" {
                table = table.with_name(format!("interp_{}", base));
            }
        }
        if reverse {
            table = table.reverse();
        }

        debug!(
            name = name,
            lutsize = ?lutsize,
            reverse = reverse,
            method = interpolator.name(),
            "Resolved colormap"
        );
        Ok(table)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

static DEFAULT_REGISTRY: Lazy<RwLock<ColormapRegistry>> = Lazy::new(|| {
    let config = Config::from_env();
    let registry = ColormapRegistry::from_config(&config).unwrap_or_else(|e| {
        log_error(&e, "loading default colormap registry");
        ColormapRegistry::new()
    });
    RwLock::new(registry)
});

/// Look up a colormap in the default registry
pub fn get_cmap(name: &str, lutsize: Option<usize>, reverse: bool) -> Result<ColorTable> {
    DEFAULT_REGISTRY.read().get_cmap(name, lutsize, reverse)
}

/// Names in the default registry, sorted
pub fn get_cmap_list() -> Vec<String> {
    DEFAULT_REGISTRY.read().names()
}

/// Add a table to the default registry
pub fn register(table: ColorTable) -> Result<()> {
    DEFAULT_REGISTRY.write().register(table)
}
