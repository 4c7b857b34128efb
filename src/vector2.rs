use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
    iter,
    num::ParseIntError,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use num::{iter::range_inclusive, PrimInt, Signed};

use crate::error::{Error, Result};

/// Signed integer usable as a vector component.
pub trait Coord:
    PrimInt + Signed + Hash + Debug + Display + Default + FromStr<Err = ParseIntError> + Send + Sync
{
    fn as_f64(self) -> f64;

    /// Truncating conversion, callers round first.
    fn from_f64_lossy(value: f64) -> Self;
}

macro_rules! impl_coord {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            fn as_f64(self) -> f64 {
                self as f64
            }

            fn from_f64_lossy(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_coord!(i32, i64);

/// Integer 2D vector, meant for grids where floating point would be a bad idea.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

pub type Vector2Int = Vector2<i32>;
pub type Vector2Long = Vector2<i64>;

impl<T> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

macro_rules! impl_constants {
    ($($t:ty),*) => {$(
        impl Vector2<$t> {
            pub const ZERO: Self = Self::new(0, 0);
            pub const ONE: Self = Self::new(1, 1);
            pub const RIGHT: Self = Self::new(1, 0);
            pub const UP: Self = Self::new(0, 1);
            pub const LEFT: Self = Self::new(-1, 0);
            pub const DOWN: Self = Self::new(0, -1);

            pub const N: Self = Self::UP;
            pub const E: Self = Self::RIGHT;
            pub const S: Self = Self::DOWN;
            pub const W: Self = Self::LEFT;
            pub const NE: Self = Self::new(1, 1);
            pub const SE: Self = Self::new(1, -1);
            pub const SW: Self = Self::new(-1, -1);
            pub const NW: Self = Self::new(-1, 1);

            pub const CARDINAL: [Self; 4] = [Self::N, Self::E, Self::S, Self::W];
            pub const ORDINAL: [Self; 4] = [Self::NE, Self::SE, Self::SW, Self::NW];
            pub const COMPASS: [Self; 8] = [
                Self::N,
                Self::NE,
                Self::E,
                Self::SE,
                Self::S,
                Self::SW,
                Self::W,
                Self::NW,
            ];
        }

        impl Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;

            fn mul(self, rhs: Vector2<$t>) -> Vector2<$t> {
                rhs * self
            }
        }
    )*};
}

impl_constants!(i32, i64);

impl<T: Coord> Vector2<T> {
    pub fn splat(value: T) -> Self {
        Self::new(value, value)
    }

    fn zero() -> Self {
        Self::splat(T::zero())
    }

    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    pub fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// Clamps each component into `[min, max]` of the matching component.
    pub fn clamp_components(self, min: Self, max: Self) -> Self {
        Self::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }

    pub fn min_components(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max_components(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn distance_euclidean(self, other: Self) -> f64 {
        self.distance_squared(other).as_f64().sqrt()
    }

    pub fn distance_chebyshev(self, other: Self) -> T {
        let d = (other - self).abs();
        d.x.max(d.y)
    }

    pub fn distance_manhattan(self, other: Self) -> T {
        let d = (other - self).abs();
        d.x + d.y
    }

    pub fn distance_squared(self, other: Self) -> T {
        (other - self).length_squared()
    }

    pub fn is_adjacent_to(self, other: Self) -> bool {
        self.distance_manhattan(other) == T::one()
    }

    pub fn is_diagonal_to(self, other: Self) -> bool {
        self.distance_manhattan(other) == T::one() + T::one()
            && self.distance_chebyshev(other) == T::one()
    }

    /// Exactly one coordinate is shared.
    pub fn is_lateral_to(self, other: Self) -> bool {
        (self.x == other.x) ^ (self.y == other.y)
    }

    pub fn is_parallel_to(self, other: Self) -> bool {
        self != Self::zero() && other != Self::zero() && self.x * other.y == self.y * other.x
    }

    pub fn is_perpendicular_to(self, other: Self) -> bool {
        self != Self::zero() && other != Self::zero() && self.dot(other) == T::zero()
    }

    pub fn length(self) -> f64 {
        self.length_squared().as_f64().sqrt()
    }

    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Quarter turn clockwise: `(x, y) -> (y, -x)`.
    pub fn rotate_right(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Quarter turn counter-clockwise: `(x, y) -> (-y, x)`.
    pub fn rotate_left(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Every point of the rectangle spanned by `a` and `b`, edges included. Iterates x-major.
    pub fn points_between(a: Self, b: Self) -> impl Iterator<Item = Self> {
        let lo = a.min_components(b);
        let hi = a.max_components(b);
        range_inclusive(lo.x, hi.x)
            .flat_map(move |x| range_inclusive(lo.y, hi.y).map(move |y| Self::new(x, y)))
    }

    /// Steps from `from` towards `to`, moving every axis by at most one per step. Both ends are
    /// included.
    pub fn chebyshev_path(from: Self, to: Self) -> impl Iterator<Item = Self> {
        iter::successors(Some(from), move |&p| (p != to).then(|| p + (to - p).signum()))
    }

    /// Intersection of the lines through `p1` and `p2` with the given slopes. Integer division
    /// truncates when the lines don't meet on a lattice point.
    pub fn line_intersect(p1: Self, slope1: T, p2: Self, slope2: T) -> Result<Self> {
        if slope1 == slope2 {
            return Err(Error::ParallelLines {
                slope: slope1.to_string(),
            });
        }
        let x = (slope1 * p1.x - slope2 * p2.x + p2.y - p1.y) / (slope1 - slope2);
        let y = slope1 * (x - p1.x) + p1.y;
        Ok(Self::new(x, y))
    }

    /// Fraction of the way `value` sits between `from` and `to`, measured on the first axis that
    /// differs. 0 when `from == to`.
    pub fn inverse_lerp(from: Self, to: Self, value: Self) -> f64 {
        if from.x != to.x {
            (value.x - from.x).as_f64() / (to.x - from.x).as_f64()
        } else if from.y != to.y {
            (value.y - from.y).as_f64() / (to.y - from.y).as_f64()
        } else {
            0.0
        }
    }

    /// Rounds half to even.
    pub fn lerp(from: Self, to: Self, weight: f64) -> Self {
        let step = |a: T, b: T| {
            T::from_f64_lossy((a.as_f64() + (b - a).as_f64() * weight).round_ties_even())
        };
        Self::new(step(from.x, to.x), step(from.y, to.y))
    }

    pub fn map(from_min: Self, from_max: Self, to_min: Self, to_max: Self, value: Self) -> Self {
        Self::lerp(to_min, to_max, Self::inverse_lerp(from_min, from_max, value))
    }
}

impl<T> Index<usize> for Vector2<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("{index} is not a valid index for Vector2"),
        }
    }
}

impl<T> IndexMut<usize> for Vector2<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("{index} is not a valid index for Vector2"),
        }
    }
}

impl<T: Coord> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Coord> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Coord> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Coord> Mul for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Coord> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Coord> Div for Vector2<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<T: Coord> Div<T> for Vector2<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Coord> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Coord> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Coord> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2Int> for Vector2Long {
    fn from(v: Vector2Int) -> Self {
        Self::new(v.x.into(), v.y.into())
    }
}

impl<T: Display> Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl<T: Coord> FromStr for Vector2<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| Error::parse(s, "expected two comma separated components"))?;
        let component = |c: &str| c.trim().parse::<T>().map_err(|e| Error::parse(s, e));
        Ok(Self::new(component(x)?, component(y)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation() {
        assert_eq!(Vector2Int::N.rotate_right(), Vector2Int::E);
        assert_eq!(Vector2Int::E.rotate_right(), Vector2Int::S);
        assert_eq!(Vector2Int::N.rotate_left(), Vector2Int::W);
        let v = Vector2Long::new(3, -7);
        assert_eq!(v.rotate_left().rotate_right(), v);
        assert_eq!(v.rotate_right().rotate_right(), -v);
    }

    #[test]
    fn test_component_wise() {
        let (lo, hi) = (Vector2Int::ZERO, Vector2Int::splat(3));
        assert_eq!(
            Vector2Int::new(9, -9).clamp_components(lo, hi),
            Vector2Int::new(3, 0)
        );
        assert_eq!(
            Vector2Int::new(2, 1).clamp_components(lo, hi),
            Vector2Int::new(2, 1)
        );
        assert_eq!(Vector2Long::splat(-4), Vector2Long::new(-4, -4));
        assert_eq!(Vector2Int::new(-3, 7).abs(), Vector2Int::new(3, 7));
        assert_eq!(Vector2Int::new(-3, 7).signum(), Vector2Int::new(-1, 1));
        assert_eq!(Vector2Int::ZERO.signum(), Vector2Int::ZERO);
    }

    #[test]
    fn test_distances() {
        let a = Vector2Int::new(1, 2);
        let b = Vector2Int::new(4, -2);
        assert_eq!(a.distance_manhattan(b), 7);
        assert_eq!(a.distance_chebyshev(b), 4);
        assert_eq!(a.distance_squared(b), 25);
        assert_eq!(a.distance_euclidean(b), 5.0);
        assert_eq!(Vector2Int::new(3, 4).length(), 5.0);
    }

    #[test]
    fn test_relations() {
        let p = Vector2Int::new(5, 5);
        assert!(p.is_adjacent_to(p + Vector2Int::N));
        assert!(!p.is_adjacent_to(p + Vector2Int::NE));
        assert!(p.is_diagonal_to(p + Vector2Int::SW));
        assert!(p.is_lateral_to(Vector2Int::new(5, 9)));
        assert!(!p.is_lateral_to(p));
        assert!(Vector2Int::new(2, 4).is_parallel_to(Vector2Int::new(-1, -2)));
        assert!(Vector2Int::new(2, 4).is_perpendicular_to(Vector2Int::new(-4, 2)));
        assert!(!Vector2Int::ZERO.is_parallel_to(Vector2Int::ONE));
    }

    #[test]
    fn test_operators() {
        let mut v = Vector2Int::new(2, 3);
        assert_eq!(v * 2, 2 * v);
        assert_eq!(v * Vector2Int::new(2, -1), Vector2Int::new(4, -3));
        assert_eq!(v / 2, Vector2Int::new(1, 1));
        v += Vector2Int::ONE;
        v -= Vector2Int::RIGHT;
        v *= 3;
        assert_eq!(v, Vector2Int::new(6, 12));
        assert_eq!(v[0], 6);
        v[1] = 1;
        assert_eq!(v, Vector2Int::new(6, 1));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let _ = Vector2Int::ZERO[2];
    }

    #[test]
    fn test_paths() {
        let points: Vec<_> =
            Vector2Int::points_between(Vector2Int::new(1, 1), Vector2Int::new(0, 2)).collect();
        assert_eq!(
            points,
            [(0, 1), (0, 2), (1, 1), (1, 2)].map(Vector2Int::from)
        );

        let path: Vec<_> =
            Vector2Int::chebyshev_path(Vector2Int::ZERO, Vector2Int::new(3, -1)).collect();
        assert_eq!(path, [(0, 0), (1, -1), (2, -1), (3, -1)].map(Vector2Int::from));
        assert_eq!(
            Vector2Int::chebyshev_path(Vector2Int::ONE, Vector2Int::ONE).count(),
            1
        );
    }

    #[test]
    fn test_line_intersect() {
        let hit =
            Vector2Int::line_intersect(Vector2Int::ZERO, 1, Vector2Int::new(2, 0), -1).unwrap();
        assert_eq!(hit, Vector2Int::ONE);
        let hit =
            Vector2Long::line_intersect(Vector2Long::new(0, 1), 2, Vector2Long::new(0, 7), -1)
                .unwrap();
        assert_eq!(hit, Vector2Long::new(2, 5));
        assert!(matches!(
            Vector2Int::line_intersect(Vector2Int::ZERO, 3, Vector2Int::ONE, 3),
            Err(Error::ParallelLines { .. })
        ));
    }

    #[test]
    fn test_lerp() {
        let from = Vector2Int::ZERO;
        let to = Vector2Int::new(10, 5);
        assert_eq!(Vector2Int::lerp(from, to, 0.5), Vector2Int::new(5, 2));
        assert_eq!(
            Vector2Int::inverse_lerp(from, to, Vector2Int::new(2, 0)),
            0.2
        );
        assert_eq!(Vector2Int::inverse_lerp(to, to, from), 0.0);
        let mapped = Vector2Int::map(
            from,
            to,
            Vector2Int::new(0, 0),
            Vector2Int::new(100, 100),
            Vector2Int::new(3, 0),
        );
        assert_eq!(mapped, Vector2Int::new(30, 30));
    }

    #[test]
    fn test_parse_display() {
        let v: Vector2Long = " -4 ,17".parse().unwrap();
        assert_eq!(v, Vector2Long::new(-4, 17));
        assert_eq!(v.to_string(), "-4, 17");
        assert!("4".parse::<Vector2Int>().is_err());
        assert!("a,1".parse::<Vector2Int>().is_err());
        assert_eq!(Vector2Long::from(Vector2Int::new(1, 2)), Vector2Long::new(1, 2));
    }
}
