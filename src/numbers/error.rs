use std::fmt::{Display, Formatter, Result};

use thiserror::Error;

/// The arithmetic operation that produced an out-of-range result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Add => write!(f, "addition"),
            Self::Subtract => write!(f, "subtraction"),
            Self::Multiply => write!(f, "multiplication"),
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RationalError {
    /// Construction was attempted with a denominator of zero.
    #[error("denominator must be nonzero (numerator was {numerator})")]
    ZeroDenominator { numerator: i64 },
    /// The exact result needs a numerator or denominator outside of `i64`.
    #[error("{operation} overflowed the 64-bit numerator or denominator")]
    Overflow { operation: Operation },
}

#[test]
fn test_error_messages() {
    assert_eq!(
        RationalError::ZeroDenominator { numerator: 3 }.to_string(),
        "denominator must be nonzero (numerator was 3)"
    );
    assert_eq!(
        RationalError::Overflow {
            operation: Operation::Subtract
        }
        .to_string(),
        "subtraction overflowed the 64-bit numerator or denominator"
    );
}
