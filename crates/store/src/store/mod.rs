use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use proximity_core::{Bounds, LoadError, Point};


/// Summary of the loaded point set.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub point_count: usize,
    /// `None` when the store is empty.
    pub bounds: Option<Bounds>,
}

/// The canonical, immutable sequence of points for the process lifetime.
///
/// Built once at startup and shared read-only (typically as `Arc<PointStore>`).
/// There is no mutating API: queries score copies, never the stored points.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Wrap an already-materialized sequence, preserving its order.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Parse a JSON array of `{x, y}` records.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Self::from_slice(json.as_bytes())
    }

    /// Parse a JSON array of `{x, y}` records from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        let points: Vec<Point> = serde_json::from_reader(std::io::BufReader::new(reader))?;
        Ok(Self::from_points(points))
    }

    fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let points: Vec<Point> = serde_json::from_slice(bytes)?;
        Ok(Self::from_points(points))
    }

    /// Read and parse the points file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!("Reading points from {}", path.display());

        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_slice(&bytes)?;

        info!("Loaded {} points from '{}'", store.len(), path.display());
        Ok(store)
    }

    /// Read-only view of every point, in source order.
    pub fn all(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(&self.points)
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            point_count: self.len(),
            bounds: self.bounds(),
        }
    }
}
