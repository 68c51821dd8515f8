//! Obstacle records and the obstacle-set loader.
//!
//! Obstacles arrive as flat JSON records (the map definition file):
//!
//! ```json
//! [
//!   { "id": 1, "name": "Library", "info": "The school library.",
//!     "x": 100, "y": 100, "width": 150, "height": 100 }
//! ]
//! ```
//!
//! Records carrying `isPath: true` are previously emitted walkable tiles,
//! not obstacles; [`ObstacleSet`] filters them out before anything reaches
//! the grid builder.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{Point2D, Rect};
use crate::error::Result;

/// A named rectangular region that blocks tile generation and serves as a
/// routing endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Obstacle {
    /// Unique id (positive by convention; walkable tiles use negative ids)
    pub id: i64,
    /// Display name
    pub name: String,
    /// Descriptive text
    #[serde(default)]
    pub info: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Marks a record as an emitted path tile rather than an obstacle
    #[serde(default, rename = "isPath")]
    pub is_path: bool,
}

impl Obstacle {
    /// The obstacle's footprint rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// An owned, immutable-per-computation list of obstacles.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    /// Build a set from records, dropping any `isPath` entries.
    pub fn new(records: Vec<Obstacle>) -> Self {
        Self {
            obstacles: records.into_iter().filter(|o| !o.is_path).collect(),
        }
    }

    /// Parse a set from a JSON array of obstacle records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<Obstacle> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Load a set from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Look up an obstacle by id.
    pub fn get(&self, id: i64) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    /// First obstacle whose rectangle contains the point, if any.
    ///
    /// Boundary-inclusive; used to resolve a canvas click to an obstacle.
    pub fn obstacle_at(&self, point: Point2D) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.rect().contains_point(point))
    }

    /// Obstacles whose name or info contains the query, case-insensitive.
    pub fn search(&self, query: &str) -> Vec<&Obstacle> {
        let query = query.to_lowercase();
        self.obstacles
            .iter()
            .filter(|o| {
                o.name.to_lowercase().contains(&query) || o.info.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
