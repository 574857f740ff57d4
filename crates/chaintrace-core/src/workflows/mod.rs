//! # Workflows Module
//!
//! High-level entry points that take parsed points and a configuration and run a complete
//! procedure.
//!
//! - **Trace Workflow** ([`trace`]) - Drives the chain reducer to completion and reports the
//!   recovered order together with the total point count.
//! - **Inspect Workflow** ([`inspect`]) - Reports the initial degree of every point, which
//!   explains why a malformed input has no endpoint.

pub mod inspect;
pub mod trace;
