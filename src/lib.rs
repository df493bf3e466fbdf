//! rscalc: a deliberately tiny arithmetic crate.
//!
//! The library core is a handful of pure `f64` operations; the surrounding
//! crate (CLI, config, logging) exists so the repository behaves like a real
//! project when used as a fixture for diff-aware CI tooling (changed-line
//! linting, test-impact selection, diff coverage). The CI orchestration
//! itself lives outside this crate.
//!
//! Division by zero is the single error path and surfaces as
//! [`CalcError::DivisionByZero`]; every other operation is total.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{add, divide, multiply, power, subtract};
pub use domain::{CalcError, CalcResult};
