use super::adjacency::AdjacencyClassifier;
use super::endpoint::{TERMINAL_SET_SIZE, select_endpoint};
use super::error::EngineError;
use super::state::{RecoveredOrder, ReducerState, ReductionStep};
use crate::core::models::live_set::LiveSet;
use crate::core::models::point::Point;
use crate::core::utils::geometry::{Euclidean, Metric};
use tracing::debug;

/// Peels a chain one endpoint at a time until no point is left.
///
/// The reducer owns its [`LiveSet`] exclusively. Each [`step`](Self::step) selects an endpoint,
/// removes it and appends its identifier to the recovered order, so after `N` steps for `N`
/// points the reducer is [`ReducerState::Done`].
///
/// The recovered order is kept in discovery order: the first identifier is the first endpoint
/// that was peeled.
pub struct ChainReducer<M: Metric = Euclidean> {
    live_set: LiveSet,
    classifier: AdjacencyClassifier<M>,
    order: RecoveredOrder,
    total: usize,
    state: ReducerState,
}

impl<M: Metric> ChainReducer<M> {
    /// Creates a reducer over the given points, in their input order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DegenerateInput`] when fewer than three points are supplied.
    pub fn new(
        points: Vec<Point>,
        classifier: AdjacencyClassifier<M>,
    ) -> Result<Self, EngineError> {
        let total = points.len();
        if total < TERMINAL_SET_SIZE {
            return Err(EngineError::DegenerateInput { count: total });
        }
        Ok(Self {
            live_set: LiveSet::new(points),
            classifier,
            order: Vec::with_capacity(total),
            total,
            state: ReducerState::Running,
        })
    }

    pub fn state(&self) -> ReducerState {
        self.state
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn remaining(&self) -> usize {
        self.live_set.len()
    }

    pub fn live_set(&self) -> &LiveSet {
        &self.live_set
    }

    pub fn recovered_order(&self) -> &[String] {
        &self.order
    }

    /// Performs one reduction step.
    ///
    /// Returns `Ok(None)` once the reducer is done.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError::NoEndpoint`] from the endpoint selector. The live set is left
    /// untouched in that case.
    pub fn step(&mut self) -> Result<Option<ReductionStep>, EngineError> {
        if self.state == ReducerState::Done {
            return Ok(None);
        }

        let selection = select_endpoint(&self.live_set, &self.classifier)?;
        let point = self.live_set.remove(selection.id).ok_or_else(|| {
            EngineError::Internal(format!(
                "Selected endpoint {:?} vanished from the live set",
                selection.id
            ))
        })?;

        self.order.push(point.id.clone());
        let record = ReductionStep {
            step: self.order.len(),
            id: point.id,
            remaining: self.live_set.len(),
            terminal_shortcut: selection.terminal_shortcut,
        };
        debug!(
            step = record.step,
            id = %record.id,
            remaining = record.remaining,
            terminal_shortcut = record.terminal_shortcut,
            "Peeled endpoint."
        );

        if self.live_set.is_empty() {
            self.state = ReducerState::Done;
        }
        Ok(Some(record))
    }

    /// Steps until done and returns the recovered order.
    pub fn run_to_completion(mut self) -> Result<RecoveredOrder, EngineError> {
        while self.step()?.is_some() {}
        Ok(self.order)
    }
}
