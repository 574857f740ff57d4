//! # Core Models Module
//!
//! Data structures describing the point set whose order is being recovered.
//!
//! - [`point`] - A single backbone sample: an opaque identifier plus a position
//! - [`live_set`] - The shrinking collection of points still in the chain
//! - [`ids`] - Keys identifying points inside a live set
//!
//! ## Usage
//!
//! ```ignore
//! use chaintrace::core::models::{live_set::LiveSet, point::Point};
//! use nalgebra::Point3;
//!
//! let points = vec![
//!     Point::new("1", Point3::new(0.0, 0.0, 0.0)),
//!     Point::new("2", Point3::new(0.0, 0.0, 3.82)),
//! ];
//! let live_set = LiveSet::new(points);
//! ```

pub mod ids;
pub mod live_set;
pub mod point;
