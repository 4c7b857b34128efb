use std::{
    fmt::{self, Display},
    iter,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use num::iter::range_inclusive;

use crate::{
    error::{Error, Result},
    vector2::Coord,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Vector3Int = Vector3<i32>;
pub type Vector3Long = Vector3<i64>;

impl<T> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

macro_rules! impl_constants {
    ($($t:ty),*) => {$(
        impl Vector3<$t> {
            pub const ZERO: Self = Self::new(0, 0, 0);
            pub const ONE: Self = Self::new(1, 1, 1);
            pub const RIGHT: Self = Self::new(1, 0, 0);
            pub const UP: Self = Self::new(0, 1, 0);
            pub const FORWARD: Self = Self::new(0, 0, 1);
            pub const LEFT: Self = Self::new(-1, 0, 0);
            pub const DOWN: Self = Self::new(0, -1, 0);
            pub const BACKWARD: Self = Self::new(0, 0, -1);

            pub const ALL_DIRECTIONS: [Self; 6] = [
                Self::RIGHT,
                Self::UP,
                Self::FORWARD,
                Self::LEFT,
                Self::DOWN,
                Self::BACKWARD,
            ];
        }

        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            fn mul(self, rhs: Vector3<$t>) -> Vector3<$t> {
                rhs * self
            }
        }
    )*};
}

impl_constants!(i32, i64);

impl<T: Coord> Vector3<T> {
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    pub fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum(), self.z.signum())
    }

    pub fn clamp_components(self, min: Self, max: Self) -> Self {
        Self::new(
            self.x.clamp(min.x, max.x),
            self.y.clamp(min.y, max.y),
            self.z.clamp(min.z, max.z),
        )
    }

    pub fn min_components(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    pub fn max_components(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    pub fn distance_euclidean(self, other: Self) -> f64 {
        self.distance_squared(other).as_f64().sqrt()
    }

    pub fn distance_chebyshev(self, other: Self) -> T {
        let d = (other - self).abs();
        d.x.max(d.y).max(d.z)
    }

    pub fn distance_manhattan(self, other: Self) -> T {
        let d = (other - self).abs();
        d.x + d.y + d.z
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

    /// Distinct points sharing at least one coordinate.
    pub fn is_lateral_to(self, other: Self) -> bool {
        self != other && (self.x == other.x || self.y == other.y || self.z == other.z)
    }

    pub fn length(self) -> f64 {
        self.length_squared().as_f64().sqrt()
    }

    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Every point of the box spanned by `a` and `b`, faces included. Iterates x, then y, then z.
    pub fn points_between(a: Self, b: Self) -> impl Iterator<Item = Self> {
        let lo = a.min_components(b);
        let hi = a.max_components(b);
        range_inclusive(lo.x, hi.x).flat_map(move |x| {
            range_inclusive(lo.y, hi.y)
                .flat_map(move |y| range_inclusive(lo.z, hi.z).map(move |z| Self::new(x, y, z)))
        })
    }

    pub fn chebyshev_path(from: Self, to: Self) -> impl Iterator<Item = Self> {
        iter::successors(Some(from), move |&p| (p != to).then(|| p + (to - p).signum()))
    }

    pub fn inverse_lerp(from: Self, to: Self, value: Self) -> f64 {
        let ratio = |a: T, b: T, v: T| (v - a).as_f64() / (b - a).as_f64();
        if from.x != to.x {
            ratio(from.x, to.x, value.x)
        } else if from.y != to.y {
            ratio(from.y, to.y, value.y)
        } else if from.z != to.z {
            ratio(from.z, to.z, value.z)
        } else {
            0.0
        }
    }

    pub fn lerp(from: Self, to: Self, weight: f64) -> Self {
        let step = |a: T, b: T| {
            T::from_f64_lossy((a.as_f64() + (b - a).as_f64() * weight).round_ties_even())
        };
        Self::new(step(from.x, to.x), step(from.y, to.y), step(from.z, to.z))
    }

    pub fn map(from_min: Self, from_max: Self, to_min: Self, to_max: Self, value: Self) -> Self {
        Self::lerp(to_min, to_max, Self::inverse_lerp(from_min, from_max, value))
    }
}

impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{index} is not a valid index for Vector3"),
        }
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("{index} is not a valid index for Vector3"),
        }
    }
}

impl<T: Coord> Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Coord> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Coord> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Coord> Mul for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl<T: Coord> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Coord> Div for Vector3<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl<T: Coord> Div<T> for Vector3<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Coord> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Coord> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Coord> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T> From<(T, T, T)> for Vector3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3Int> for Vector3Long {
    fn from(v: Vector3Int) -> Self {
        Self::new(v.x.into(), v.y.into(), v.z.into())
    }
}

impl<T: Display> Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

impl<T: Coord> FromStr for Vector3<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(',').map(|c| c.trim().parse::<T>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), Some(z), None) => Ok(Self::new(
                x.map_err(|e| Error::parse(s, e))?,
                y.map_err(|e| Error::parse(s, e))?,
                z.map_err(|e| Error::parse(s, e))?,
            )),
            _ => Err(Error::parse(s, "expected three comma separated components")),
        }
    }
}
