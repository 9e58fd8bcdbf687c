use std::{
    path::PathBuf,
    process::{ExitCode, Termination},
};

use tplbench_engines::{Engine, Scenario};

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Could not parse environment variable {0} as UTF-8")]
    UnparsableEnv(String),
    #[error("Could not parse environment variable {0}: {1}")]
    FromStr(String, Box<dyn std::error::Error>),
    #[error("Could not read config file `{}`: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Template engine failed: {0}")]
    Engine(#[from] tplbench_engines::Error),
    #[error("Expected manifest is not valid YAML: {0}")]
    ExpectedManifest(yaml_rust2::ScanError),
    #[error("{engine} rendered unexpected output for the {scenario} benchmark: {output:?}")]
    UnexpectedOutput {
        engine: Engine,
        scenario: Scenario,
        output: String,
    },
    #[error("Iteration count must be at least 1")]
    NoIterations,
}

impl Termination for SetupError {
    fn report(self) -> ExitCode {
        error!(error = %self, "Benchmark setup failed");
        eprintln!("{self}");
        ExitCode::FAILURE
    }
}
