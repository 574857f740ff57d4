use crate::core::models::point::Point;
use crate::core::utils::geometry::{Euclidean, Metric};
use crate::engine::adjacency::AdjacencyClassifier;
use crate::engine::config::{TraceConfig, TraceConfigBuilder};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::reducer::ChainReducer;
use crate::engine::state::{RecoveredOrder, ReductionStep};
use tracing::{info, instrument};

/// Outcome of a completed trace.
///
/// `order` is in discovery order: the first identifier is the first endpoint the reducer
/// peeled. For records listed front to back that is the back end of the chain; use
/// [`front_to_back`](Self::front_to_back) for the opposite orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceResult {
    pub order: RecoveredOrder,
    pub total: usize,
    pub steps: Vec<ReductionStep>,
}

impl TraceResult {
    pub fn front_to_back(&self) -> RecoveredOrder {
        self.order.iter().rev().cloned().collect()
    }

    /// Number of steps resolved by the three-point shortcut (0 or 1 for a complete run).
    pub fn shortcut_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.terminal_shortcut).count()
    }
}

#[instrument(skip_all, name = "trace_workflow")]
pub fn run(
    points: Vec<Point>,
    config: &TraceConfig,
    reporter: &ProgressReporter,
) -> Result<TraceResult, EngineError> {
    run_with_metric(points, config, Euclidean, reporter)
}

/// Runs a trace with an ad-hoc distance window instead of a prepared [`TraceConfig`].
///
/// # Errors
///
/// Returns [`EngineError::Config`] when `min..=max` is not a valid window, otherwise the same
/// errors as [`run`].
pub fn run_in_window(
    points: Vec<Point>,
    min_distance: f64,
    max_distance: f64,
    reporter: &ProgressReporter,
) -> Result<TraceResult, EngineError> {
    let config = TraceConfigBuilder::new()
        .min_distance(min_distance)
        .max_distance(max_distance)
        .build()?;
    run(points, &config, reporter)
}

/// Same as [`run`] with a caller-supplied metric.
pub fn run_with_metric<M: Metric>(
    points: Vec<Point>,
    config: &TraceConfig,
    metric: M,
    reporter: &ProgressReporter,
) -> Result<TraceResult, EngineError> {
    info!(
        points = points.len(),
        min = config.window.min(),
        max = config.window.max(),
        "Starting chain trace."
    );

    let classifier = AdjacencyClassifier::new(config.window, metric);
    let mut reducer = ChainReducer::new(points, classifier)?;
    let total = reducer.total();

    reporter.report(Progress::ReductionStart {
        total_points: total as u64,
    });

    let mut steps = Vec::with_capacity(total);
    while let Some(step) = reducer.step()? {
        if step.terminal_shortcut {
            reporter.report(Progress::Message(format!(
                "Three points left; peeled '{}' without a degree test",
                step.id
            )));
        }
        reporter.report(Progress::PointPeeled {
            step: step.step as u64,
            remaining: step.remaining as u64,
        });
        steps.push(step);
    }

    reporter.report(Progress::ReductionFinish);

    let order = reducer.recovered_order().to_vec();
    if order.len() != total {
        return Err(EngineError::Internal(format!(
            "Recovered {} identifiers for {} points",
            order.len(),
            total
        )));
    }

    info!(total, "Chain trace complete.");
    Ok(TraceResult {
        order,
        total,
        steps,
    })
}
