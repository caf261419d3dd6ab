pub mod config;
pub mod error;
pub mod point;

pub use config::Config;
pub use error::*;
pub use point::*;
