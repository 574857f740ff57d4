//! # Core Module
//!
//! Fundamental building blocks shared by the engine and the workflows.
//!
//! - **Point Representation** ([`models`]) - Backbone samples, their identifiers and the live set
//!   the reducer shrinks.
//! - **Geometry** ([`utils`]) - The distance primitive and the within-threshold predicate.
//! - **File I/O** ([`io`]) - Reading whitespace-delimited positional records and writing order
//!   reports.

pub mod io;
pub mod models;
pub mod utils;
