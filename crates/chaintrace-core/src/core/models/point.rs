use nalgebra::Point3;

/// Represents one backbone sample, typically the alpha carbon of a residue.
///
/// A point carries an opaque identifier used only for reporting and the 3D position used for
/// all geometry. Points are immutable once parsed; their relative order inside the chain is
/// unknown and is exactly what the reducer recovers.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// The identifier taken from the input record (e.g. a residue label or a serial number).
    pub id: String,
    /// The 3D coordinates of the sample in Angstroms.
    pub position: Point3<f64>,
}

impl Point {
    /// Creates a new `Point` from an identifier and a position.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier reported for this point.
    /// * `position` - The 3D coordinates of the point.
    pub fn new(id: &str, position: Point3<f64>) -> Self {
        Self {
            id: id.to_string(),
            position,
        }
    }

    /// Convenience constructor taking raw coordinates.
    pub fn from_coords(id: &str, x: f64, y: f64, z: f64) -> Self {
        Self::new(id, Point3::new(x, y, z))
    }
}
