//! # Engine Module
//!
//! The reduction engine that recovers a chain's order by repeatedly peeling off endpoints.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - The bond-length distance window and the trace settings
//! - **Adjacency** ([`adjacency`]) - Degree of a point against the current live set
//! - **Endpoint Selection** ([`endpoint`]) - Picks the next point to peel, including the
//!   three-point terminal shortcut
//! - **Reduction** ([`reducer`]) - The `Running`/`Done` state machine driving the peel
//! - **State Tracking** ([`state`]) - Reducer states and per-step records
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Adjacency is never cached: every step recomputes degrees against the points that are still
//! live, so there is no graph to keep consistent while the set shrinks.

pub mod adjacency;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod progress;
pub mod reducer;
pub mod state;
