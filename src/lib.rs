#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![expect(clippy::must_use_candidate)]
#![expect(clippy::return_self_not_must_use)]
#![expect(clippy::missing_errors_doc)]
#![expect(clippy::cast_precision_loss)]
#![expect(clippy::cast_possible_truncation)]

pub mod numbers;
mod util;

pub use numbers::{lcm, Operation, Product, Rational, RationalError};
