//! Request parameter extraction and validation.

use std::str::FromStr;

use proximity_core::{Point, QueryError};

pub const PARAM_X: &str = "x";
pub const PARAM_Y: &str = "y";
pub const PARAM_DISTANCE: &str = "distance";

/// Decoded query parameters, in request order.
///
/// Lookup returns the first value for a name; later repeats are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode an `application/x-www-form-urlencoded` query string (without
    /// the leading `?`).
    ///
    /// Never fails. A pair containing `;` or a malformed `%` escape is
    /// dropped, so its name reads as absent.
    pub fn from_query_string(query: &str) -> Self {
        Self {
            pairs: query
                .split('&')
                .filter(|pair| !pair.is_empty() && !pair.contains(';') && has_valid_escapes(pair))
                .flat_map(|pair| url::form_urlencoded::parse(pair.as_bytes()).into_owned())
                .collect(),
        }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Parse a required integer parameter. Absent and empty are both missing.
    fn required<T: FromStr>(&self, name: &str) -> Result<T, QueryError> {
        let raw = self
            .get(name)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| QueryError::MissingParameter(name.to_string()))?;
        raw.parse::<T>()
            .map_err(|_| QueryError::InvalidInteger(name.to_string()))
    }
}

/// Every `%` is followed by two hex digits.
fn has_valid_escapes(pair: &str) -> bool {
    let bytes = pair.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit)) {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// A validated proximity query: all points within `radius` of `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProximityQuery {
    pub origin: Point,
    /// Inclusive Manhattan radius. Negative radii match nothing.
    pub radius: i64,
}

impl ProximityQuery {
    pub fn new(origin: Point, radius: i64) -> Self {
        Self { origin, radius }
    }

    /// Whether a point at `distance` from the origin is inside the radius.
    pub fn contains(&self, distance: u64) -> bool {
        u64::try_from(self.radius).is_ok_and(|r| distance <= r)
    }

    /// Validate `x`, `y`, then `distance`, stopping at the first failure so
    /// the reported parameter is deterministic.
    pub fn from_params(params: &QueryParams) -> Result<Self, QueryError> {
        let x: i64 = params.required(PARAM_X)?;
        let y: i64 = params.required(PARAM_Y)?;
        let radius: i64 = params.required(PARAM_DISTANCE)?;
        Ok(Self::new(Point::new(x, y), radius))
    }
}
