pub mod error;
pub mod product;
pub mod rational;

pub use error::{Operation, RationalError};
pub use product::Product;
pub use rational::{lcm, Rational};
