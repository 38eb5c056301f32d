//! pn-core: stable foundation for pointnet.
//!
//! Contains:
//! - error (shared error types)
//! - point (2D coordinate node identity + the `Coordinate` trait)

pub mod error;
pub mod point;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PnError, PnResult};
pub use point::{Coordinate, Point};
