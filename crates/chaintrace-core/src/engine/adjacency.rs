use super::config::DistanceWindow;
use super::error::EngineError;
use crate::core::models::ids::PointId;
use crate::core::models::live_set::LiveSet;
use crate::core::models::point::Point;
use crate::core::utils::geometry::{Euclidean, Metric};

/// Classifies point pairs as bonded neighbours using a distance window.
///
/// The adjacency relation is never materialized: degrees are computed on demand against
/// whatever is live at the moment of the call.
pub struct AdjacencyClassifier<M: Metric = Euclidean> {
    window: DistanceWindow,
    metric: M,
}

impl AdjacencyClassifier<Euclidean> {
    pub fn euclidean(window: DistanceWindow) -> Self {
        Self::new(window, Euclidean)
    }
}

impl<M: Metric> AdjacencyClassifier<M> {
    pub fn new(window: DistanceWindow, metric: M) -> Self {
        Self { window, metric }
    }

    pub fn window(&self) -> &DistanceWindow {
        &self.window
    }

    #[inline]
    pub fn is_adjacent(&self, a: &Point, b: &Point) -> bool {
        self.window
            .contains(self.metric.distance(&a.position, &b.position))
    }

    /// Number of other live points adjacent to `query`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Internal`] if `query` is not in the live set.
    pub fn degree(&self, query: PointId, live_set: &LiveSet) -> Result<usize, EngineError> {
        let point = live_set.get(query).ok_or_else(|| {
            EngineError::Internal(format!("Point {:?} is not in the live set", query))
        })?;
        Ok(self.degree_of(query, point, live_set))
    }

    /// Degree of every live point, in scan order.
    pub fn degrees(&self, live_set: &LiveSet) -> Vec<(PointId, usize)> {
        live_set
            .iter()
            .map(|(id, point)| (id, self.degree_of(id, point, live_set)))
            .collect()
    }

    pub(crate) fn degree_of(&self, query: PointId, point: &Point, live_set: &LiveSet) -> usize {
        live_set
            .iter()
            .filter(|(other_id, _)| *other_id != query)
            .filter(|(_, other)| self.is_adjacent(point, other))
            .count()
    }
}
