//! tplbench fixtures
//!
//! Data the benchmarks render templates against. Everything here is built once per
//! process and only ever read afterwards.
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod chart;
mod greeting;

pub use chart::{Chart, chart};
pub use greeting::{GREETING_OUTPUT, Greeting, greeting};
