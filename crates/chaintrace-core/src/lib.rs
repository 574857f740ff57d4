//! # chaintrace Core Library
//!
//! Recovers the sequential backbone order of a protein chain from the unordered 3D coordinates of
//! its alpha-carbon atoms, using the pairwise Euclidean distance as the only structural signal.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Point`, `LiveSet`), the geometry
//!   primitive and the plain-text record I/O.
//!
//! - **[`engine`]: The Logic Core.** The adjacency classifier, the endpoint selector and the
//!   chain reducer that peels the chain one endpoint at a time, together with configuration,
//!   progress reporting and error types.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together: hand it the parsed
//!   points and a configuration, get back the recovered order.

pub mod core;
pub mod engine;
pub mod workflows;
