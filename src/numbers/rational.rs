use std::{
    fmt::{Debug, Display, Formatter, Result},
    ops::{Add, Mul, Sub},
};

use num_traits::{ToPrimitive, Zero};

use super::{Operation, Product, RationalError};
use crate::util::gcd;

/// A fraction `numerator/denominator` over `i64` with a nonzero denominator.
///
/// Values are kept exactly as constructed: arithmetic never reduces its
/// result and the sign may sit on either field. Use [`Rational::simplify`]
/// to obtain the reduced form.
///
/// Equality (`==` and [`Rational::equals`]) compares the floating-point
/// quotients, so `1/2 == 2/4 == 0.5`. For numerators or denominators beyond
/// 2^53 the quotients are rounded and distinct values may compare equal;
/// [`Rational::exact_eq`] compares without rounding.
///
/// Intermediate results are computed in `i128`. A result that does not fit
/// back into `i64` is reported by the `checked_*` operations and makes the
/// plain operations panic.
#[derive(Clone, Copy)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    pub fn new(numerator: i64, denominator: i64) -> std::result::Result<Self, RationalError> {
        if denominator == 0 {
            tracing::debug!(numerator, "rejected fraction with zero denominator");
            return Err(RationalError::ZeroDenominator { numerator });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Narrows an `i128` result. `denominator` must be nonzero.
    fn from_wide(
        numerator: i128,
        denominator: i128,
        operation: Operation,
    ) -> std::result::Result<Self, RationalError> {
        debug_assert!(denominator != 0);
        match (i64::try_from(numerator), i64::try_from(denominator)) {
            (Ok(numerator), Ok(denominator)) => Ok(Self {
                numerator,
                denominator,
            }),
            _ => {
                tracing::debug!(
                    %operation,
                    numerator = %numerator,
                    denominator = %denominator,
                    "result does not fit in 64 bits"
                );
                Err(RationalError::Overflow { operation })
            }
        }
    }

    #[inline]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Compares the quotient of `self` with any value convertible to `f64`:
    /// another `Rational`, a [`Product`], or a primitive integer or float.
    #[allow(clippy::float_cmp)]
    pub fn equals<T: ToPrimitive>(&self, other: &T) -> bool {
        other
            .to_f64()
            .is_some_and(|quotient| self.to_f64() == quotient)
    }

    /// Exact value comparison by cross-multiplication.
    pub fn exact_eq(&self, other: &Self) -> bool {
        i128::from(self.numerator) * i128::from(other.denominator)
            == i128::from(other.numerator) * i128::from(self.denominator)
    }

    pub fn checked_add(self, other: Self) -> std::result::Result<Self, RationalError> {
        if self.denominator == other.denominator {
            return Self::from_wide(
                i128::from(self.numerator) + i128::from(other.numerator),
                i128::from(self.denominator),
                Operation::Add,
            );
        }
        let (left, right, common) = self.scale_to_common(other);
        Self::from_wide(left + right, common, Operation::Add)
    }

    /// # Panics
    ///
    /// Panics if the sum does not fit in `i64`, see [`Rational::checked_add`].
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        self.checked_add(other).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn checked_subtract(self, other: Self) -> std::result::Result<Self, RationalError> {
        // Equal numerators take the common-denominator path, which stores
        // the zero over |lcm| instead of the shared denominator.
        if self.denominator == other.denominator && self.numerator != other.numerator {
            return Self::from_wide(
                i128::from(self.numerator) - i128::from(other.numerator),
                i128::from(self.denominator),
                Operation::Subtract,
            );
        }
        let (left, right, common) = self.scale_to_common(other);
        Self::from_wide(left - right, common, Operation::Subtract)
    }

    /// # Panics
    ///
    /// Panics if the difference does not fit in `i64`.
    pub fn subtract(self, other: Self) -> Self {
        self.checked_subtract(other)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Both numerators rescaled to `lcm(self, other)`, followed by the lcm.
    fn scale_to_common(self, other: Self) -> (i128, i128, i128) {
        let common = lcm(&self, &other);
        tracing::trace!(lhs = %self, rhs = %other, common = %common, "scaling to common denominator");
        (
            i128::from(self.numerator) * (common / i128::from(self.denominator)),
            i128::from(other.numerator) * (common / i128::from(other.denominator)),
            common,
        )
    }

    /// A zero numerator on the left short-circuits to [`Product::Integer`]`(0)`;
    /// every other product is a [`Product::Rational`].
    pub fn checked_multiply(self, other: Self) -> std::result::Result<Product, RationalError> {
        if self.numerator == 0 {
            tracing::trace!(rhs = %other, "zero numerator short-circuits multiplication");
            return Ok(Product::Integer(0));
        }
        Self::from_wide(
            i128::from(self.numerator) * i128::from(other.numerator),
            i128::from(self.denominator) * i128::from(other.denominator),
            Operation::Multiply,
        )
        .map(Product::Rational)
    }

    /// # Panics
    ///
    /// Panics if the product does not fit in `i64`.
    pub fn multiply(self, other: Self) -> Product {
        self.checked_multiply(other)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Divides both fields by their gcd. The sign stays where it was, so
    /// `2/-4` simplifies to `1/-2` and `0/d` to `0/1` or `0/-1`.
    pub fn simplify(&self) -> Self {
        // The denominator is nonzero, so the divisor is at least 1.
        let divisor = gcd(self.numerator, self.denominator);
        // |x / divisor| <= |x|, so neither quotient leaves i64.
        Self {
            numerator: (i128::from(self.numerator) / divisor) as i64,
            denominator: (i128::from(self.denominator) / divisor) as i64,
        }
    }

    pub fn is_simplified(&self) -> bool {
        self.numerator == 0 || gcd(self.numerator, self.denominator) == 1
    }
}

/// Least common multiple of the *denominators* of `a` and `b`.
///
/// The sign follows `a.denominator() * b.denominator()`. The result is
/// `i128` because the lcm of two `i64` values can exceed `i64`.
pub fn lcm(a: &Rational, b: &Rational) -> i128 {
    let product = i128::from(a.denominator) * i128::from(b.denominator);
    product / gcd(a.denominator, b.denominator)
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.numerator == 0 {
            write!(f, "0")
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Debug for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(self, f)
    }
}

impl From<i64> for Rational {
    #[inline]
    fn from(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }
}

impl<T: ToPrimitive> PartialEq<T> for Rational {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.equals(other)
    }
}

macro_rules! impl_scalar_eq {
    ($($t:ty),*) => {
        $(
            impl PartialEq<Rational> for $t {
                #[inline]
                fn eq(&self, other: &Rational) -> bool {
                    other.equals(self)
                }
            }
        )*
    };
}

impl_scalar_eq!(i32, i64, u32, u64, f32, f64);

impl ToPrimitive for Rational {
    /// Truncates toward zero.
    fn to_i64(&self) -> Option<i64> {
        self.numerator.checked_div(self.denominator)
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|n| u64::try_from(n).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
}

impl Zero for Rational {
    #[inline]
    fn zero() -> Self {
        Self::from(0_i64)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl Add for Rational {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Rational::add(self, rhs)
    }
}

impl Sub for Rational {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul for Rational {
    type Output = Product;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

#[cfg(test)]
fn frac(numerator: i64, denominator: i64) -> Rational {
    Rational::new(numerator, denominator).unwrap()
}

#[test]
fn test_new_keeps_fields() {
    let r = frac(6, -4);
    assert_eq!(r.numerator(), 6);
    assert_eq!(r.denominator(), -4);
    assert_eq!(
        Rational::new(3, 0).unwrap_err(),
        RationalError::ZeroDenominator { numerator: 3 }
    );
}

#[test]
fn test_add_same_denominator_keeps_it() {
    let sum = frac(1, 2).add(frac(1, 2));
    assert_eq!((sum.numerator(), sum.denominator()), (2, 2));
}

#[test]
fn test_add_negative_denominator() {
    // lcm(-2, 3) = -6
    let sum = frac(1, -2).add(frac(1, 3));
    assert_eq!((sum.numerator(), sum.denominator()), (1, -6));
    assert_eq!(sum, -1.0 / 6.0);
}

#[test]
fn test_subtract_equal_operands_uses_lcm() {
    let diff = frac(3, -4).subtract(frac(3, -4));
    assert_eq!((diff.numerator(), diff.denominator()), (0, 4));
    let diff = frac(3, 4).subtract(frac(1, 4));
    assert_eq!((diff.numerator(), diff.denominator()), (2, 4));
}

#[test]
fn test_multiply_raw_fields() {
    let Product::Rational(p) = frac(2, 3).multiply(frac(-3, 4)) else {
        panic!("expected a fraction");
    };
    assert_eq!((p.numerator(), p.denominator()), (-6, 12));
    // Only a zero on the left short-circuits.
    assert!(!frac(2, 3).multiply(frac(0, 4)).is_integer());
}

#[test]
fn test_overflow() {
    let big = frac(i64::MAX, 1);
    assert_eq!(
        big.checked_add(frac(1, 1)).unwrap_err(),
        RationalError::Overflow {
            operation: Operation::Add
        }
    );
    assert_eq!(
        frac(1, i64::MAX)
            .checked_multiply(frac(1, 2))
            .unwrap_err(),
        RationalError::Overflow {
            operation: Operation::Multiply
        }
    );
    assert_eq!(
        frac(i64::MIN, 1).checked_subtract(frac(1, 2)).unwrap_err(),
        RationalError::Overflow {
            operation: Operation::Subtract
        }
    );
}

#[test]
#[should_panic(expected = "addition overflowed")]
fn test_add_panics_on_overflow() {
    let _ = frac(i64::MAX, 1).add(frac(i64::MAX, 1));
}

#[test]
fn test_simplify_keeps_sign_placement() {
    let r = frac(2, -4).simplify();
    assert_eq!((r.numerator(), r.denominator()), (1, -2));
    let r = frac(0, -5).simplify();
    assert_eq!((r.numerator(), r.denominator()), (0, -1));
    let r = frac(i64::MIN, i64::MIN).simplify();
    assert_eq!((r.numerator(), r.denominator()), (-1, -1));
}

#[test]
fn test_lcm_of_denominators() {
    assert_eq!(lcm(&frac(1, 4), &frac(1, 6)), 12);
    assert_eq!(lcm(&frac(1, -4), &frac(1, 6)), -12);
    assert_eq!(
        lcm(&frac(1, i64::MAX), &frac(1, i64::MAX - 1)),
        i128::from(i64::MAX) * i128::from(i64::MAX - 1)
    );
}

#[test]
fn test_exact_eq() {
    assert!(frac(1, 2).exact_eq(&frac(-2, -4)));
    assert!(!frac(1, 2).exact_eq(&frac(1, -2)));
    // These differ by roughly 2^-126 but share a rounded quotient.
    let a = frac(i64::MAX, i64::MAX - 1);
    let b = frac(i64::MAX - 1, i64::MAX - 2);
    assert!(a.equals(&b));
    assert!(!a.exact_eq(&b));
}

#[test]
fn test_to_primitive() {
    assert_eq!(frac(7, 2).to_i64(), Some(3));
    assert_eq!(frac(-7, 2).to_i64(), Some(-3));
    assert_eq!(frac(-7, 2).to_u64(), None);
    assert_eq!(frac(i64::MIN, -1).to_i64(), None);
    assert_eq!(ToPrimitive::to_f64(&frac(1, 4)), Some(0.25));
}

#[test]
fn test_zero() {
    assert!(Rational::zero().is_zero());
    assert!(frac(0, -3).is_zero());
    assert!(!frac(1, 3).is_zero());
    assert_eq!(Rational::zero().to_string(), "0");
}
