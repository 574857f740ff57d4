use nalgebra::Point3;

/// A distance function between two positions.
///
/// The engine only ever talks to geometry through this trait, so alternative metrics (or
/// instrumented ones, such as an invocation counter in tests) can be substituted without
/// touching the reduction code.
pub trait Metric {
    fn distance(&self, a: &Point3<f64>, b: &Point3<f64>) -> f64;
}

/// The Euclidean metric used for all bond-length tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn distance(&self, a: &Point3<f64>, b: &Point3<f64>) -> f64 {
        distance(a, b)
    }
}

impl<M: Metric + ?Sized> Metric for &M {
    #[inline]
    fn distance(&self, a: &Point3<f64>, b: &Point3<f64>) -> f64 {
        (**self).distance(a, b)
    }
}

/// Euclidean norm of the coordinate-wise difference of two positions.
#[inline]
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

/// Returns `true` when the two positions are no further apart than `threshold`.
///
/// This is the predicate used by contact-map and overlap style analyses.
#[inline]
pub fn within_threshold(a: &Point3<f64>, b: &Point3<f64>, threshold: f64) -> bool {
    distance(a, b) <= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn distance_matches_pythagorean_triple() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 12.0);
        assert!(f64_approx_equal(distance(&a, &b), 13.0));
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point3::new(1.25, -7.5, 3.0);
        let b = Point3::new(-4.0, 2.0, 9.75);
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = Point3::new(12.3, -4.56, 7.89);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn distance_between_distinct_points_is_positive() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(0.0, 1e-6, 0.0);
        assert!(distance(&a, &b) > 0.0);
    }

    #[test]
    fn euclidean_metric_delegates_to_distance() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 6.0, 3.0);
        assert!(f64_approx_equal(Euclidean.distance(&a, &b), 5.0));
        assert!(f64_approx_equal((&Euclidean).distance(&a, &b), 5.0));
    }

    #[test]
    fn within_threshold_includes_the_boundary() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(8.0, 0.0, 0.0);
        assert!(within_threshold(&a, &b, 8.0));
        assert!(within_threshold(&a, &b, 8.5));
        assert!(!within_threshold(&a, &b, 7.99));
    }
}
