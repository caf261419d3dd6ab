pub mod store;

// Re-export key types
pub use store::{PointStore, StoreStats};
