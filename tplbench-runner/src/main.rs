#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

#[macro_use]
extern crate tracing;

mod alloc;
mod check;
mod config;
mod error;
mod report;
#[cfg(test)]
mod revision;

use std::{
    hint::black_box,
    process::{ExitCode, Termination},
    time::Instant,
};

use tplbench_engines::{Prepared, Scenario, TemplateSet};
use tracing_subscriber::EnvFilter;

use crate::{
    alloc::{AllocStats, CountingAllocator},
    check::SmokeCheck,
    config::Config,
    error::SetupError,
    report::Measurement,
};

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

const REVISION: &str = env!("TPLBENCH_REVISION");
const DIRTY: &str = env!("TPLBENCH_DIRTY");

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    info!(revision = REVISION, dirty = DIRTY, "Starting render-bench");
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => e.report(),
    }
}

fn run() -> Result<(), SetupError> {
    let config = Config::load()?;
    info!(
        iterations = config.iterations,
        warmup = config.warmup,
        template_dir = %config.template_dir.display(),
        "Loaded config"
    );
    let greeting = tplbench_fixtures::greeting();
    let chart = tplbench_fixtures::chart();
    let smoke_check = SmokeCheck::new()?;

    let mut measured = 0;
    for &scenario in &config.scenarios {
        for &engine in &config.engines {
            if !engine.supports(scenario) {
                warn!(%engine, %scenario, "Engine has no templates for this benchmark, skipping");
                continue;
            }
            let templates = TemplateSet::for_scenario(engine, scenario, &config.template_dir)?;
            let prepared = match scenario {
                Scenario::Simple => Prepared::new(engine, &templates, &greeting)?,
                Scenario::Complex => Prepared::new(engine, &templates, &chart)?,
            };
            smoke_check.check(engine, scenario, &prepared.render()?)?;

            let measurement = measure(&prepared, scenario, &config)?;
            info!(
                %engine,
                %scenario,
                iterations = measurement.iterations,
                micros_taken = measurement.elapsed.as_micros(),
                allocations = measurement.allocations.count,
                "Measured render loop"
            );
            println!("{measurement}");
            measured += 1;
        }
    }
    info!(measured, "Done!");
    Ok(())
}

fn measure(
    prepared: &Prepared,
    scenario: Scenario,
    config: &Config,
) -> Result<Measurement, SetupError> {
    for _ in 0..config.warmup {
        black_box(prepared.render()?);
    }
    let before = AllocStats::snapshot();
    let start = Instant::now();
    for _ in 0..config.iterations {
        black_box(prepared.render()?);
    }
    let elapsed = start.elapsed();
    let allocations = AllocStats::snapshot().since(before);
    Ok(Measurement {
        engine: prepared.engine(),
        scenario,
        iterations: config.iterations,
        elapsed,
        allocations,
    })
}
