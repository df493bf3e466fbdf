//! Domain layer: arithmetic operations and their errors
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading).

pub mod calculator;
pub mod error;

pub use calculator::{add, divide, multiply, power, subtract};
pub use error::{CalcError, CalcResult};
