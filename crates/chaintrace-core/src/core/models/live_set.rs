use super::ids::PointId;
use super::point::Point;
use slotmap::SlotMap;

/// The working collection of points that have not yet been peeled off the chain.
///
/// Backed by a [`SlotMap`] that is only ever shrunk, so iteration always follows the original
/// insertion order of the points. This stable order is what makes the endpoint tie-break
/// reproducible between runs.
#[derive(Debug, Clone, Default)]
pub struct LiveSet {
    points: SlotMap<PointId, Point>,
}

impl LiveSet {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        let mut map = SlotMap::with_key();
        for point in points {
            map.insert(point);
        }
        Self { points: map }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.get(id)
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.points.contains_key(id)
    }

    /// Iterates over the live points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.points.keys()
    }

    /// Removes a single point, returning it if it was still live.
    pub fn remove(&mut self, id: PointId) -> Option<Point> {
        self.points.remove(id)
    }
}
