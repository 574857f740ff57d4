use super::adjacency::AdjacencyClassifier;
use super::error::EngineError;
use crate::core::models::ids::PointId;
use crate::core::models::live_set::LiveSet;
use crate::core::utils::geometry::Metric;
use tracing::trace;

/// Live-set size at which the selector stops testing degrees.
pub const TERMINAL_SET_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSelection {
    pub id: PointId,
    pub terminal_shortcut: bool,
}

/// Picks the next point to peel off the chain.
///
/// With exactly [`TERMINAL_SET_SIZE`] points left, the last point in scan order is returned
/// straight away and no degree is computed. Otherwise every live point is scanned in insertion
/// order and the *last* one with degree <= 1 wins.
///
/// # Errors
///
/// - [`EngineError::NoEndpoint`] if no live point has degree <= 1 (cyclic or branched input).
/// - [`EngineError::Internal`] if the live set is empty.
pub fn select_endpoint<M: Metric>(
    live_set: &LiveSet,
    classifier: &AdjacencyClassifier<M>,
) -> Result<EndpointSelection, EngineError> {
    if live_set.is_empty() {
        return Err(EngineError::Internal(
            "Endpoint requested from an empty live set".to_string(),
        ));
    }

    if live_set.len() == TERMINAL_SET_SIZE {
        let id = live_set.ids().last().ok_or_else(|| {
            EngineError::Internal("Terminal live set yielded no point".to_string())
        })?;
        return Ok(EndpointSelection {
            id,
            terminal_shortcut: true,
        });
    }

    let mut candidate = None;
    for (id, point) in live_set.iter() {
        let degree = classifier.degree_of(id, point, live_set);
        if degree <= 1 {
            trace!(point = %point.id, degree, "Endpoint candidate.");
            candidate = Some(id);
        }
    }

    candidate
        .map(|id| EndpointSelection {
            id,
            terminal_shortcut: false,
        })
        .ok_or(EngineError::NoEndpoint {
            remaining: live_set.len(),
        })
}
