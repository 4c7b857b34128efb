use std::fmt::Display;

use num::{integer::Roots, Integer, PrimInt};

use crate::{
    error::{Error, Result},
    vector2::Vector2Long,
};

/// All divisors of `n` in ascending order.
pub fn factors<T>(n: T) -> Result<Vec<T>>
where
    T: PrimInt + Integer + Roots + Display,
{
    if n < T::one() {
        return Err(Error::NotPositive(n.to_string()));
    }
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut i = T::one();
    let limit = n.sqrt();
    while i <= limit {
        if n % i == T::zero() {
            low.push(i);
            let pair = n / i;
            if pair != i {
                high.push(pair);
            }
        }
        i = i + T::one();
    }
    low.extend(high.into_iter().rev());
    Ok(low)
}

/// Smallest prime dividing `n`. Returns `n` itself for 1 and for primes, 2 for any even `n`
/// (0 included).
pub fn first_prime_factor(n: u64) -> u64 {
    if n % 2 == 0 {
        return 2;
    }
    let mut d = 3;
    // d * d would overflow for factors past 2^32
    while d <= n / d {
        if n % d == 0 {
            return d;
        }
        d += 2;
    }
    n
}

/// Deterministic Miller-Rabin. The first twelve primes as witnesses cover every u64.
pub fn is_prime(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
    if n < 2 {
        return false;
    }
    if let Some(&p) = WITNESSES.iter().find(|&&p| n % p == 0) {
        return n == p;
    }

    // n - 1 = odd * 2^twos
    let twos = (n - 1).trailing_zeros();
    let odd = (n - 1) >> twos;
    WITNESSES.iter().all(|&a| {
        let mut x = pow_mod(a, odd, n);
        if x == 1 || x == n - 1 {
            return true;
        }
        for _ in 1..twos {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                return true;
            }
        }
        false
    })
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    (u128::from(a) * u128::from(b) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

pub fn gcd_all<T: Integer + Copy>(values: impl IntoIterator<Item = T>) -> Option<T> {
    values.into_iter().reduce(|a, b| a.gcd(&b))
}

/// Least common multiple of every value, `None` for no values.
pub fn lcm_all<T: Integer + Copy>(values: impl IntoIterator<Item = T>) -> Option<T> {
    values.into_iter().reduce(|a, b| a.lcm(&b))
}

/// `1 + 2 + ... + n`, 0 for negative `n`. `None` once the sum no longer fits an i64.
pub fn triangle_number(n: i64) -> Option<i64> {
    if n < 0 {
        return Some(0);
    }
    let next = n.checked_add(1)?;
    // halve the even factor first so only a result that doesn't fit overflows
    if n % 2 == 0 {
        (n / 2).checked_mul(next)
    } else {
        n.checked_mul(next / 2)
    }
}

/// The `n`th Fibonacci number counting from `fibonacci(0) == 0`. `None` once it overflows a u64.
pub fn fibonacci(n: u32) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 1..n {
        (a, b) = (b, a.checked_add(b)?);
    }
    Some(b)
}

/// Area of a simple polygon whose last vertex connects back to the first.
pub fn shoelace_area(vertices: &[Vector2Long]) -> i64 {
    let twice: i64 = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice.abs() / 2
}

/// Lattice points lying on the polygon's edges.
pub fn boundary_points(vertices: &[Vector2Long]) -> i64 {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| {
            let d = (*b - *a).abs();
            d.x.gcd(&d.y)
        })
        .sum()
}

/// Lattice points inside or on the polygon, by Pick's theorem: `A = i + b/2 - 1`.
pub fn enclosed_points(vertices: &[Vector2Long]) -> i64 {
    let area = shoelace_area(vertices);
    let boundary = boundary_points(vertices);
    let interior = area - boundary / 2 + 1;
    interior + boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors() {
        assert_eq!(factors(1).unwrap(), vec![1]);
        assert_eq!(factors(12).unwrap(), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(factors(49u64).unwrap(), vec![1, 7, 49]);
        assert_eq!(factors(13i64).unwrap(), vec![1, 13]);
        assert_eq!(factors(0), Err(Error::NotPositive("0".to_string())));
        assert!(factors(-4).is_err());
    }

    #[test]
    fn test_primes() {
        assert_eq!(first_prime_factor(91), 7);
        assert_eq!(first_prime_factor(1), 1);
        assert_eq!(first_prime_factor(10), 2);
        let primes: Vec<u64> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
        let sieved = (0..2000u64)
            .filter(|&n| n > 1 && first_prime_factor(n) == n)
            .collect::<Vec<_>>();
        assert_eq!(sieved, (0..2000).filter(|&n| is_prime(n)).collect::<Vec<_>>());
    }

    #[test]
    fn test_primes_near_u64_max() {
        assert!(is_prime(18_446_744_073_709_551_557));
        assert!(!is_prime(u64::MAX));
        // 4_294_967_291 is the largest prime below 2^32
        assert!(!is_prime(4_294_967_291 * 4_294_967_291));
        assert!(is_prime(4_294_967_291));
        // Carmichael number and strong pseudoprime to base 2
        assert!(!is_prime(561));
        assert!(!is_prime(3_215_031_751));
        assert_eq!(first_prime_factor(u64::MAX), 3);
        assert_eq!(first_prime_factor(4_294_967_291 * 7), 7);
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(lcm_all([2u64, 3, 4]), Some(12));
        assert_eq!(lcm_all([6u64, 10, 15]), Some(30));
        assert_eq!(gcd_all([12, -18, 30]), Some(6));
        assert_eq!(lcm_all(Vec::<i32>::new()), None);
    }

    #[test]
    fn test_sequences() {
        assert_eq!(
            (0..7).map(|n| triangle_number(n).unwrap()).collect::<Vec<_>>(),
            vec![0, 1, 3, 6, 10, 15, 21]
        );
        assert_eq!(triangle_number(-3), Some(0));
        // n * (n + 1) overflows here but the halved sum still fits
        assert_eq!(triangle_number(4_000_000_000), Some(8_000_000_002_000_000_000));
        assert_eq!(triangle_number(5_000_000_000), None);
        assert_eq!(triangle_number(i64::MAX), None);
        assert_eq!(
            (0..9).map(|n| fibonacci(n).unwrap()).collect::<Vec<_>>(),
            vec![0, 1, 1, 2, 3, 5, 8, 13, 21]
        );
        assert_eq!(fibonacci(93), Some(12_200_160_415_121_876_738));
        assert_eq!(fibonacci(94), None);
    }

    #[test]
    fn test_polygon() {
        // 4x3 rectangle traced clockwise
        let rect = [(0, 0), (4, 0), (4, -3), (0, -3)].map(Vector2Long::from);
        assert_eq!(shoelace_area(&rect), 12);
        assert_eq!(boundary_points(&rect), 14);
        assert_eq!(enclosed_points(&rect), 5 * 4);

        let triangle = [(0, 0), (4, 0), (0, 4)].map(Vector2Long::from);
        assert_eq!(shoelace_area(&triangle), 8);
        assert_eq!(boundary_points(&triangle), 12);
        assert_eq!(enclosed_points(&triangle), 15);
        assert_eq!(shoelace_area(&[]), 0);
    }
}
