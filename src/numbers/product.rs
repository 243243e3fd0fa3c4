use std::fmt::{Display, Formatter, Result};

use num_traits::ToPrimitive;

use super::Rational;

/// Result of [`Rational::multiply`].
///
/// A left operand with a zero numerator yields the plain integer `0`
/// instead of a fraction; any other product stays a fraction with the raw
/// multiplied fields. Equality is quotient-based, like [`Rational`]'s.
#[derive(Clone, Copy, Debug)]
pub enum Product {
    Integer(i64),
    Rational(Rational),
}

impl Product {
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// The product as a fraction; an integer `n` becomes `n/1`.
    pub fn into_rational(self) -> Rational {
        match self {
            Self::Integer(n) => Rational::from(n),
            Self::Rational(r) => r,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Integer(n) => *n as f64,
            Self::Rational(r) => r.to_f64(),
        }
    }
}

impl From<Rational> for Product {
    #[inline]
    fn from(r: Rational) -> Self {
        Self::Rational(r)
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Rational(r) => write!(f, "{r}"),
        }
    }
}

impl ToPrimitive for Product {
    fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Rational(r) => r.to_i64(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => u64::try_from(*n).ok(),
            Self::Rational(r) => r.to_u64(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Product::to_f64(self))
    }
}

impl<T: ToPrimitive> PartialEq<T> for Product {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &T) -> bool {
        other
            .to_f64()
            .is_some_and(|quotient| self.to_f64() == quotient)
    }
}

#[cfg(test)]
fn frac(numerator: i64, denominator: i64) -> Rational {
    Rational::new(numerator, denominator).unwrap()
}

#[test]
fn test_zero_short_circuit_is_integer() {
    let p = frac(0, 5).multiply(frac(3, 4));
    assert!(matches!(p, Product::Integer(0)));
    assert_eq!(p.to_string(), "0");
    assert_eq!(p, 0);
    let r = p.into_rational();
    assert_eq!((r.numerator(), r.denominator()), (0, 1));
}

#[test]
fn test_fraction_product() {
    let p = frac(1, 2).multiply(frac(1, 3));
    assert!(!p.is_integer());
    assert_eq!(p.to_string(), "1/6");
    assert_eq!(p, frac(2, 12));
    assert_eq!(frac(1, 6), p);
    assert_ne!(p, 0.5);
}

#[test]
fn test_to_primitive() {
    assert_eq!(Product::Integer(-3).to_u64(), None);
    assert_eq!(Product::Integer(3).to_u64(), Some(3));
    assert_eq!(Product::from(frac(9, 4)).to_i64(), Some(2));
}
