//! Error types for the routing engine.

use thiserror::Error;

/// Routing engine error type.
///
/// All variants are recoverable outcomes reported to the caller; none of
/// them are fatal to the process. The rendering/UI collaborator decides
/// what to show (e.g. a "no route" state) on receiving one.
#[derive(Error, Debug)]
pub enum RouteError {
    /// The obstacle set leaves no walkable tiles.
    #[error("no walkable tiles in the grid")]
    EmptyGrid,

    /// Both the fine and the coarsened search failed, or the iteration
    /// cap was reached.
    #[error("no path found between the requested obstacles")]
    NoPathFound,

    /// Caller supplied a query the engine refuses to run (same obstacle
    /// for both endpoints, degenerate zero-area geometry).
    #[error("invalid route query: {0}")]
    InvalidQuery(String),

    /// Route endpoint id does not exist in the current obstacle set.
    #[error("unknown obstacle id {0}")]
    UnknownObstacle(i64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for RouteError {
    fn from(e: toml::de::Error) -> Self {
        RouteError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
