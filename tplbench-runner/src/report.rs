use std::{fmt::Display, time::Duration};

use tplbench_engines::{Engine, Scenario};

use crate::alloc::AllocStats;

/// Result of timing one engine on one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub engine: Engine,
    pub scenario: Scenario,
    pub iterations: u32,
    pub elapsed: Duration,
    pub allocations: AllocStats,
}

#[allow(clippy::cast_precision_loss)]
impl Measurement {
    pub fn nanos_per_iter(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / f64::from(self.iterations)
    }

    pub fn bytes_per_iter(&self) -> f64 {
        self.allocations.bytes as f64 / f64::from(self.iterations)
    }

    pub fn allocs_per_iter(&self) -> f64 {
        self.allocations.count as f64 / f64::from(self.iterations)
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = format!("{}/{}", self.scenario, self.engine);
        write!(
            f,
            "{name:<24}{:>10}{:>14.0} ns/op{:>10.0} B/op{:>8.0} allocs/op",
            self.iterations,
            self.nanos_per_iter(),
            self.bytes_per_iter(),
            self.allocs_per_iter(),
        )
    }
}
