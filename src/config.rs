//! Configuration loading for the routing engine.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, RouteError};

/// Main configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub grid: GridSection,

    #[serde(default)]
    pub search: SearchSection,
}

/// Tile lattice settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Side length of a walkable tile, in canvas units (default: 6.0).
    ///
    /// Smaller tiles give finer paths at higher computation cost;
    /// 4–8 is the reasonable range.
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
}

/// Route search settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSection {
    /// Boundary samples per rectangle edge for the closest-point pass
    /// (default: 5, i.e. parametric offsets 0, 0.25, 0.5, 0.75, 1).
    ///
    /// Denser sampling picks better entry points at the cost of more
    /// distance comparisons.
    #[serde(default = "default_edge_samples")]
    pub edge_samples: usize,

    /// Maximum BFS dequeues before a search attempt is abandoned
    /// (default: 100_000).
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Lattice step of the fallback search pass used when the
    /// single-step search fails (default: 2).
    #[serde(default = "default_coarse_step")]
    pub coarse_step: i32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            tile_size: default_tile_size(),
        }
    }
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            edge_samples: default_edge_samples(),
            max_iterations: default_max_iterations(),
            coarse_step: default_coarse_step(),
        }
    }
}

// Default value functions
fn default_tile_size() -> f32 {
    6.0
}
fn default_edge_samples() -> usize {
    5
}
fn default_max_iterations() -> usize {
    100_000
}
fn default_coarse_step() -> i32 {
    2
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RouteError::Config(format!("failed to read config file: {}", e)))?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.grid.tile_size <= 0.0 {
            return Err(RouteError::Config(format!(
                "tile_size must be positive, got {}",
                self.grid.tile_size
            )));
        }
        if self.search.edge_samples < 2 {
            return Err(RouteError::Config(
                "edge_samples must be at least 2 (the edge endpoints)".to_string(),
            ));
        }
        if self.search.coarse_step < 2 {
            return Err(RouteError::Config(format!(
                "coarse_step must be at least 2, got {}",
                self.search.coarse_step
            )));
        }
        Ok(())
    }
}
