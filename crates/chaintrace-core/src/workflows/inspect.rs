use crate::core::models::live_set::LiveSet;
use crate::core::models::point::Point;
use crate::engine::adjacency::AdjacencyClassifier;
use crate::engine::config::TraceConfig;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointDegree {
    pub id: String,
    pub degree: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionReport {
    /// Initial degree of every point, in input order.
    pub degrees: Vec<PointDegree>,
}

impl InspectionReport {
    /// Points with degree <= 1, in input order.
    pub fn endpoint_candidates(&self) -> Vec<&str> {
        self.degrees
            .iter()
            .filter(|d| d.degree <= 1)
            .map(|d| d.id.as_str())
            .collect()
    }

    /// Points with more than two neighbours.
    pub fn branch_points(&self) -> Vec<&str> {
        self.degrees
            .iter()
            .filter(|d| d.degree > 2)
            .map(|d| d.id.as_str())
            .collect()
    }

    /// True when the degree profile matches a single unbranched chain: exactly two points of
    /// degree one and every other point of degree two.
    pub fn looks_like_simple_chain(&self) -> bool {
        let ends = self.degrees.iter().filter(|d| d.degree == 1).count();
        let interior = self.degrees.iter().filter(|d| d.degree == 2).count();
        ends == 2 && ends + interior == self.degrees.len()
    }
}

#[instrument(skip_all, name = "inspect_workflow")]
pub fn run(points: Vec<Point>, config: &TraceConfig) -> InspectionReport {
    let live_set = LiveSet::new(points);
    let classifier = AdjacencyClassifier::euclidean(config.window);

    let degrees: Vec<PointDegree> = classifier
        .degrees(&live_set)
        .into_iter()
        .filter_map(|(id, degree)| {
            live_set.get(id).map(|p| PointDegree {
                id: p.id.clone(),
                degree,
            })
        })
        .collect();

    let report = InspectionReport { degrees };
    info!(
        points = report.degrees.len(),
        endpoints = report.endpoint_candidates().len(),
        branches = report.branch_points().len(),
        "Degree inspection complete."
    );
    report
}
