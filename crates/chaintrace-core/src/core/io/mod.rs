//! Provides input/output functionality for point sets and order reports.
//!
//! Point sets are read from plain-text, whitespace-delimited positional records through the
//! [`traits::PointFile`] interface. Recovered orders are written either in the classic
//! line-per-identifier text layout or as CSV.

pub mod records;
pub mod report;
pub mod traits;
