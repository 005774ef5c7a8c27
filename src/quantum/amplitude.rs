//! Complex probability amplitudes.

use std::ops::{Add, Mul, Neg, Sub};

/// A complex amplitude `re + i·im`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Amplitude {
    pub re: f64,
    pub im: f64,
}

impl Amplitude {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// Create an amplitude from its parts.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Unit amplitude rotated by `theta` radians (`e^{iθ}`).
    #[must_use]
    pub fn phase(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    /// Squared magnitude: the Born-rule probability weight.
    #[must_use]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Multiply by a real factor.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }
}

impl Add for Amplitude {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Amplitude {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Amplitude {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for Amplitude {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_phase_is_unit() {
        for theta in [0.0, 0.3, PI / 2.0, PI] {
            assert!((Amplitude::phase(theta).norm_sqr() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_i_squared() {
        let i = Amplitude::phase(PI / 2.0);
        let product = i * i;
        assert!((product.re + 1.0).abs() < EPS);
        assert!(product.im.abs() < EPS);
    }

    #[test]
    fn test_arithmetic() {
        let a = Amplitude::new(1.0, 2.0);
        let b = Amplitude::new(0.5, -1.0);

        assert_eq!(a + b, Amplitude::new(1.5, 1.0));
        assert_eq!(a - b, Amplitude::new(0.5, 3.0));
        assert_eq!(-a, Amplitude::new(-1.0, -2.0));
        assert_eq!(a.scale(2.0), Amplitude::new(2.0, 4.0));
        assert_eq!(a.norm_sqr(), 5.0);
    }
}
