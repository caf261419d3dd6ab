use serde::{Deserialize, Serialize};

/// A location in integer 2D space, as held by the point store.
///
/// Source records may carry a `distance` field; it is ignored on load since
/// distance only has meaning relative to a query origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`.
    ///
    /// Each axis difference fits a `u64`; the sum saturates at `u64::MAX`.
    /// A saturated distance is still larger than any `i64` radius, so
    /// filtering stays exact.
    pub fn manhattan_distance(&self, other: &Point) -> u64 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// A per-query copy of this point annotated with its distance to `origin`.
    pub fn scored_against(&self, origin: &Point) -> ScoredPoint {
        ScoredPoint {
            x: self.x,
            y: self.y,
            distance: self.manhattan_distance(origin),
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point copy paired with its distance from one query's origin.
///
/// This is the wire shape of a query result: `{ "x", "y", "distance" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPoint {
    pub x: i64,
    pub y: i64,
    pub distance: u64,
}

impl ScoredPoint {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Axis-aligned bounding box over a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for an empty set.
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, p| Bounds {
                min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
            },
        ))
    }
}
