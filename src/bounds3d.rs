use num::iter::range_inclusive;

use crate::vector3::Vector3Int;

/// Inclusive axis-aligned box in integer space. Sizes measure the space between faces, see
/// [`Bounds`](crate::bounds::Bounds).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds3D {
    min: Vector3Int,
    max: Vector3Int,
}

impl Bounds3D {
    pub fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32, z_min: i32, z_max: i32) -> Self {
        Self {
            min: Vector3Int::new(x_min, y_min, z_min),
            max: Vector3Int::new(x_max, y_max, z_max),
        }
    }

    pub fn from_point(point: Vector3Int) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    pub fn from_center_extents(center: Vector3Int, extents: Vector3Int) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Vector3Int>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut bounds = Self::from_point(points.next()?);
        points.for_each(|p| bounds.encapsulate(p));
        Some(bounds)
    }

    pub fn min(&self) -> Vector3Int {
        self.min
    }

    pub fn max(&self) -> Vector3Int {
        self.max
    }

    pub fn size(&self) -> Vector3Int {
        self.max - self.min
    }

    pub fn width(&self) -> i32 {
        self.size().x
    }

    pub fn height(&self) -> i32 {
        self.size().y
    }

    pub fn depth(&self) -> i32 {
        self.size().z
    }

    pub fn extents(&self) -> Vector3Int {
        self.size() / 2
    }

    pub fn center(&self) -> Vector3Int {
        self.min + self.extents()
    }

    pub fn is_in_x_bounds(&self, x: i32) -> bool {
        self.min.x <= x && x <= self.max.x
    }

    pub fn is_in_y_bounds(&self, y: i32) -> bool {
        self.min.y <= y && y <= self.max.y
    }

    pub fn is_in_z_bounds(&self, z: i32) -> bool {
        self.min.z <= z && z <= self.max.z
    }

    pub fn contains(&self, pos: Vector3Int) -> bool {
        self.is_in_x_bounds(pos.x) && self.is_in_y_bounds(pos.y) && self.is_in_z_bounds(pos.z)
    }

    pub fn contains_bounds(&self, other: &Bounds3D) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    pub fn overlaps(&self, other: &Bounds3D) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }

    pub fn is_on_edge(&self, pos: Vector3Int) -> bool {
        self.contains(pos)
            && (pos.x == self.min.x
                || pos.x == self.max.x
                || pos.y == self.min.y
                || pos.y == self.max.y
                || pos.z == self.min.z
                || pos.z == self.max.z)
    }

    /// Ties go to the z faces, then y, then x.
    pub fn closest_point_on_border(&self, pos: Vector3Int) -> Vector3Int {
        let p = pos.clamp_components(self.min, self.max);
        let (lo, hi) = (p - self.min, self.max - p);
        let dx = lo.x.min(hi.x);
        let dy = lo.y.min(hi.y);
        let dz = lo.z.min(hi.z);

        let pick = |lo: i32, hi: i32, min: i32, max: i32| if lo < hi { min } else { max };
        if dx < dy && dx < dz {
            Vector3Int::new(pick(lo.x, hi.x, self.min.x, self.max.x), p.y, p.z)
        } else if dy < dz {
            Vector3Int::new(p.x, pick(lo.y, hi.y, self.min.y, self.max.y), p.z)
        } else {
            Vector3Int::new(p.x, p.y, pick(lo.z, hi.z, self.min.z, self.max.z))
        }
    }

    pub fn distance_from_border(&self, pos: Vector3Int) -> i32 {
        pos.distance_manhattan(self.closest_point_on_border(pos))
    }

    pub fn encapsulate(&mut self, point: Vector3Int) {
        self.min = self.min.min_components(point);
        self.max = self.max.max_components(point);
    }

    pub fn expand(&mut self, amount: i32) {
        self.expand_xyz(amount, amount, amount);
    }

    pub fn expand_xyz(&mut self, x_amount: i32, y_amount: i32, z_amount: i32) {
        let by = Vector3Int::new(x_amount, y_amount, z_amount);
        self.min -= by;
        self.max += by;
    }

    pub fn set_min_max(&mut self, min: Vector3Int, max: Vector3Int) {
        *self = Self { min, max };
    }

    /// Every contained point, iterating x, then y, then z.
    pub fn all_coordinates(&self) -> impl Iterator<Item = Vector3Int> {
        let (min, max) = (self.min, self.max);
        range_inclusive(min.x, max.x).flat_map(move |x| {
            range_inclusive(min.y, max.y).flat_map(move |y| {
                range_inclusive(min.z, max.z).map(move |z| Vector3Int::new(x, y, z))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        let b = Bounds3D::new(0, 4, 0, 3, -2, 2);
        assert_eq!(b.size(), Vector3Int::new(4, 3, 4));
        assert_eq!((b.width(), b.height(), b.depth()), (4, 3, 4));
        assert_eq!(b.center(), Vector3Int::new(2, 1, 0));
        assert_eq!(
            Bounds3D::from_center_extents(Vector3Int::ZERO, Vector3Int::ONE),
            Bounds3D::new(-1, 1, -1, 1, -1, 1)
        );
    }

    #[test]
    fn test_containment() {
        let b = Bounds3D::new(0, 2, 0, 2, 0, 2);
        assert!(b.contains(Vector3Int::new(2, 2, 2)));
        assert!(!b.contains(Vector3Int::new(2, 3, 2)));
        assert!(b.contains_bounds(&Bounds3D::from_point(Vector3Int::ONE)));
        assert!(b.overlaps(&Bounds3D::new(2, 5, 2, 5, 2, 5)));
        assert!(!b.overlaps(&Bounds3D::new(0, 2, 0, 2, 3, 5)));
        assert!(b.is_on_edge(Vector3Int::new(1, 2, 1)));
        assert!(!b.is_on_edge(Vector3Int::ONE));
    }

    #[test]
    fn test_closest_point() {
        let b = Bounds3D::new(0, 10, 0, 10, 0, 10);
        assert_eq!(
            b.closest_point_on_border(Vector3Int::new(1, 5, 5)),
            Vector3Int::new(0, 5, 5)
        );
        assert_eq!(
            b.closest_point_on_border(Vector3Int::new(5, 8, 5)),
            Vector3Int::new(5, 10, 5)
        );
        // all faces equally far, z wins
        assert_eq!(
            b.closest_point_on_border(Vector3Int::new(5, 5, 5)),
            Vector3Int::new(5, 5, 10)
        );
        // x and y tie, y wins
        assert_eq!(
            b.closest_point_on_border(Vector3Int::new(2, 2, 5)),
            Vector3Int::new(2, 0, 5)
        );
        assert_eq!(b.distance_from_border(Vector3Int::new(13, 5, 5)), 3);
    }

    #[test]
    fn test_growth_and_coordinates() {
        let mut b = Bounds3D::from_points([Vector3Int::ZERO, Vector3Int::new(1, -1, 2)]).unwrap();
        assert_eq!(b, Bounds3D::new(0, 1, -1, 0, 0, 2));
        assert_eq!(b.all_coordinates().count(), 2 * 2 * 3);
        assert_eq!(b.all_coordinates().last(), Some(Vector3Int::new(1, 0, 2)));

        b.expand(1);
        assert_eq!(b, Bounds3D::new(-1, 2, -2, 1, -1, 3));
        b.encapsulate(Vector3Int::new(0, 0, 9));
        assert_eq!(b.max(), Vector3Int::new(2, 1, 9));
        b.set_min_max(Vector3Int::ZERO, Vector3Int::ZERO);
        assert_eq!(b.all_coordinates().count(), 1);
    }
}
