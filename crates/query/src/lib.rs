//! Proximity queries over a [`PointStore`](proximity_store::PointStore).
//!
//! Request parameters are validated into a [`ProximityQuery`], then the
//! [`QueryService`] scores every stored point against the origin, keeps the
//! ones inside the radius and stable-sorts them by distance.

pub mod params;
pub mod service;

pub use params::{ProximityQuery, QueryParams};
pub use service::QueryService;
