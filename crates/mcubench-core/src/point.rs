//! Floating point kernel: normalize a cloud of points and fold it to its
//! componentwise maximum.

use std::fmt;

use num_traits::Float;

/// A point in 3D space.
///
/// Generic over the float type so the kernel can be timed in `f32` on
/// targets without double-precision hardware.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<F = f64> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Point<F> {
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Builds the `i`-th point of the workload:
    /// `x = sin(i)`, `y = 3 cos(i)`, `z = x² / 2`.
    ///
    /// # Example
    ///
    /// ```
    /// use mcubench_core::Point;
    ///
    /// let p: Point = Point::from_index(0);
    /// assert_eq!(p, Point::new(0.0, 3.0, 0.0));
    /// ```
    pub fn from_index(i: usize) -> Self {
        let t = F::from(i).unwrap_or_else(F::nan);
        let x = t.sin();
        let two = F::one() + F::one();
        let three = two + F::one();
        Self {
            x,
            y: t.cos() * three,
            z: x * x / two,
        }
    }

    /// Euclidean norm.
    pub fn norm(&self) -> F {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Divides every field by the norm. A zero vector turns into NaNs.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        self.x = self.x / norm;
        self.y = self.y / norm;
        self.z = self.z / norm;
    }

    /// Keeps, per field, `self` if it is greater than `other` and `other`
    /// otherwise. Returns `self` so calls can be chained.
    pub fn maximize(&mut self, other: &Point<F>) -> &mut Self {
        self.x = if self.x > other.x { self.x } else { other.x };
        self.y = if self.y > other.y { self.y } else { other.y };
        self.z = if self.z > other.z { self.z } else { other.z };
        self
    }
}

impl<F: Float + fmt::Display> fmt::Display for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

/// Folds `points` into `points[0]` by repeated [`Point::maximize`] in slice
/// order and returns a copy of the accumulator.
///
/// The first element is overwritten with the running maximum. Returns
/// `None` for an empty slice.
///
/// # Example
///
/// ```
/// use mcubench_core::{maximize_all, Point};
///
/// let mut points = vec![
///     Point::new(1.0, -2.0, 0.5),
///     Point::new(0.0, 4.0, 0.25),
/// ];
/// assert_eq!(maximize_all(&mut points), Some(Point::new(1.0, 4.0, 0.5)));
/// assert_eq!(points[0], Point::new(1.0, 4.0, 0.5));
/// ```
pub fn maximize_all<F: Float>(points: &mut [Point<F>]) -> Option<Point<F>> {
    let (first, rest) = points.split_first_mut()?;
    for p in rest.iter() {
        first.maximize(p);
    }
    Some(*first)
}

/// One iteration of the float workload over `count` points.
///
/// Returns `None` when `count` is zero.
pub fn run_points<F: Float>(count: usize) -> Option<Point<F>> {
    let mut points: Vec<Point<F>> = (0..count).map(Point::from_index).collect();
    for p in points.iter_mut() {
        p.normalize();
    }
    maximize_all(&mut points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_from_index() {
        let p: Point = Point::from_index(2);
        let s = 2f64.sin();
        assert_eq!(p.x, s);
        assert_eq!(p.y, 2f64.cos() * 3.0);
        assert_eq!(p.z, s * s / 2.0);
    }

    #[test]
    fn test_normalize_yields_unit_norm() {
        for i in 0..200 {
            let mut p: Point = Point::from_index(i);
            p.normalize();
            assert!((p.norm() - 1.0).abs() < 1e-12, "i={i} norm={}", p.norm());
        }
    }

    #[test]
    fn test_normalize_f32() {
        for i in 0..50 {
            let mut p: Point<f32> = Point::from_index(i);
            p.normalize();
            assert!((p.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_normalize_zero_vector_propagates_nan() {
        let mut p = Point::new(0.0f64, 0.0, 0.0);
        p.normalize();
        assert!(p.x.is_nan() && p.y.is_nan() && p.z.is_nan());
    }

    #[test]
    fn test_maximize_prefers_other_on_nan() {
        let mut a = Point::new(f64::NAN, 1.0, 1.0);
        a.maximize(&Point::new(0.5, 1.0, 2.0));
        assert_eq!(a, Point::new(0.5, 1.0, 2.0));
    }

    #[test]
    fn test_maximize_all_matches_true_maximum() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let len = rng.random_range(1..64);
            let mut points: Vec<Point> = (0..len)
                .map(|_| {
                    Point::new(
                        rng.random_range(-10.0..10.0),
                        rng.random_range(-10.0..10.0),
                        rng.random_range(-10.0..10.0),
                    )
                })
                .collect();
            let max_x = points.iter().map(|p| p.x).fold(f64::MIN, f64::max);
            let max_y = points.iter().map(|p| p.y).fold(f64::MIN, f64::max);
            let max_z = points.iter().map(|p| p.z).fold(f64::MIN, f64::max);

            let result = maximize_all(&mut points).unwrap();
            assert_eq!(result, Point::new(max_x, max_y, max_z));
        }
    }

    #[test]
    fn test_maximize_all_empty() {
        let mut points: Vec<Point> = Vec::new();
        assert_eq!(maximize_all(&mut points), None);
    }

    #[test]
    fn test_run_points() {
        let p: Point = run_points(50).unwrap();
        // normalized components never exceed 1
        assert!(p.x <= 1.0 + 1e-12 && p.y <= 1.0 + 1e-12 && p.z <= 1.0 + 1e-12);
        // index 0 normalizes to (0, 1, 0)
        assert!((p.y - 1.0).abs() < 1e-12);
        assert!(run_points::<f64>(0).is_none());
    }

    #[test]
    fn test_display() {
        let p = Point::new(0.5f64, 1.0, -0.25);
        assert_eq!(p.to_string(), "Point(0.5000, 1.0000, -0.2500)");
    }
}
