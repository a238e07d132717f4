//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use linalg_core::Field;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub const EPSILON: f64 = 1e-10;

/// Install a test subscriber; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Exact rational number, always reduced with a positive denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    num: i128,
    den: i128,
}

impl Rational {
    pub fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "zero denominator");
        let g = gcd(num.abs(), den.abs()).max(1);
        let sign = if den < 0 { -1 } else { 1 };
        Self {
            num: sign * num / g,
            den: sign * den / g,
        }
    }

    pub fn int(n: i64) -> Self {
        Self::new(n as i128, 1)
    }

    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Add for Rational {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl Sub for Rational {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.num * rhs.den - rhs.num * self.den, self.den * rhs.den)
    }
}

impl Mul for Rational {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Div for Rational {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl Neg for Rational {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self { num: 0, den: 1 }
    }
    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self { num: 1, den: 1 }
    }
}

impl Field for Rational {
    fn magnitude_cmp(&self, other: &Self) -> Option<Ordering> {
        Some((self.num.abs() * other.den).cmp(&(other.num.abs() * self.den)))
    }
}

pub fn rational_rows(rows: &[Vec<i64>]) -> Vec<Vec<Rational>> {
    rows.iter()
        .map(|row| row.iter().map(|&v| Rational::int(v)).collect())
        .collect()
}

pub fn float_rows(rows: &[Vec<i64>]) -> Vec<Vec<f64>> {
    rows.iter()
        .map(|row| row.iter().map(|&v| v as f64).collect())
        .collect()
}

/// Hadamard's bound on |det|, product of the row norms
pub fn hadamard_bound(rows: &[Vec<f64>]) -> f64 {
    rows.iter()
        .map(|row| row.iter().map(|v| v * v).sum::<f64>().sqrt())
        .product()
}
