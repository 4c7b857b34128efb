use num::iter::range_inclusive;

use crate::vector2::Vector2Int;

/// Inclusive axis-aligned box on the integer plane.
///
/// `width` and `height` measure the space between the edges, not the number of points: a box
/// from x = 1 to x = 4 has a width of 3 while containing 4 columns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    x_min: i32,
    x_max: i32,
    y_min: i32,
    y_max: i32,
}

impl Bounds {
    pub fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn from_point(point: Vector2Int) -> Self {
        Self::new(point.x, point.x, point.y, point.y)
    }

    pub fn from_center_extents(center: Vector2Int, extents: Vector2Int) -> Self {
        Self::new(
            center.x - extents.x,
            center.x + extents.x,
            center.y - extents.y,
            center.y + extents.y,
        )
    }

    /// Smallest box holding every point, `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vector2Int>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut bounds = Self::from_point(points.next()?);
        points.for_each(|p| bounds.encapsulate(p));
        Some(bounds)
    }

    pub fn x_min(&self) -> i32 {
        self.x_min
    }

    pub fn x_max(&self) -> i32 {
        self.x_max
    }

    pub fn y_min(&self) -> i32 {
        self.y_min
    }

    pub fn y_max(&self) -> i32 {
        self.y_max
    }

    /// Bottom-left most point.
    pub fn min(&self) -> Vector2Int {
        Vector2Int::new(self.x_min, self.y_min)
    }

    /// Top-right most point.
    pub fn max(&self) -> Vector2Int {
        Vector2Int::new(self.x_max, self.y_max)
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    pub fn size(&self) -> Vector2Int {
        Vector2Int::new(self.width(), self.height())
    }

    /// Half the size, rounded down.
    pub fn extents(&self) -> Vector2Int {
        self.size() / 2
    }

    /// Rounds towards the lower end when a side holds an even number of points.
    pub fn center(&self) -> Vector2Int {
        self.min() + self.extents()
    }

    pub fn is_in_horizontal_bounds(&self, x: i32) -> bool {
        self.x_min <= x && x <= self.x_max
    }

    pub fn is_in_vertical_bounds(&self, y: i32) -> bool {
        self.y_min <= y && y <= self.y_max
    }

    pub fn contains(&self, pos: Vector2Int) -> bool {
        self.is_in_horizontal_bounds(pos.x) && self.is_in_vertical_bounds(pos.y)
    }

    /// `other` lies fully inside, shared edges included.
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.contains(other.min()) && self.contains(other.max())
    }

    /// Intersecting or sharing an edge.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x_min <= other.x_max
            && other.x_min <= self.x_max
            && self.y_min <= other.y_max
            && other.y_min <= self.y_max
    }

    pub fn is_on_edge(&self, pos: Vector2Int) -> bool {
        self.contains(pos)
            && (pos.x == self.x_min
                || pos.x == self.x_max
                || pos.y == self.y_min
                || pos.y == self.y_max)
    }

    /// Ties between a vertical and a horizontal edge go to the horizontal (y) edge.
    pub fn closest_point_on_border(&self, pos: Vector2Int) -> Vector2Int {
        let x = pos.x.clamp(self.x_min, self.x_max);
        let y = pos.y.clamp(self.y_min, self.y_max);
        let (dx_left, dx_right) = (x - self.x_min, self.x_max - x);
        let (dy_bot, dy_top) = (y - self.y_min, self.y_max - y);
        if dx_left.min(dx_right) < dy_bot.min(dy_top) {
            let x = if dx_left < dx_right { self.x_min } else { self.x_max };
            Vector2Int::new(x, y)
        } else {
            let y = if dy_bot < dy_top { self.y_min } else { self.y_max };
            Vector2Int::new(x, y)
        }
    }

    pub fn distance_from_border(&self, pos: Vector2Int) -> i32 {
        pos.distance_manhattan(self.closest_point_on_border(pos))
    }

    /// Grows the box to include `point`.
    pub fn encapsulate(&mut self, point: Vector2Int) {
        self.x_min = self.x_min.min(point.x);
        self.x_max = self.x_max.max(point.x);
        self.y_min = self.y_min.min(point.y);
        self.y_max = self.y_max.max(point.y);
    }

    pub fn expand(&mut self, amount: i32) {
        self.expand_xy(amount, amount);
    }

    pub fn expand_xy(&mut self, x_amount: i32, y_amount: i32) {
        self.x_min -= x_amount;
        self.x_max += x_amount;
        self.y_min -= y_amount;
        self.y_max += y_amount;
    }

    pub fn set_min_max(&mut self, min: Vector2Int, max: Vector2Int) {
        *self = Self::new(min.x, max.x, min.y, max.y);
    }

    /// `(x_min, y_min), (x_min, y_min + 1), ..., (x_max, y_max)`.
    pub fn all_coordinates(&self) -> impl Iterator<Item = Vector2Int> {
        let Self {
            x_min,
            x_max,
            y_min,
            y_max,
        } = *self;
        range_inclusive(x_min, x_max)
            .flat_map(move |x| range_inclusive(y_min, y_max).map(move |y| Vector2Int::new(x, y)))
    }
}
