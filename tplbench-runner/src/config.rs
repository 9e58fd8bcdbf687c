use std::{env::VarError, path::PathBuf, str::FromStr};

use serde::Deserialize;
use tplbench_engines::{DEFAULT_TEMPLATE_DIR, Engine, Scenario};

use crate::SetupError;

/// `render-bench` settings. Every key is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Timed renders per engine and scenario
    pub iterations: u32,
    /// Untimed renders before timing starts
    pub warmup: u32,
    /// Holds one directory of manifest fragments per engine
    pub template_dir: PathBuf,
    pub engines: Vec<Engine>,
    pub scenarios: Vec<Scenario>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            warmup: 100,
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            engines: Engine::ALL.to_vec(),
            scenarios: Scenario::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Reads the file named by `TPLBENCH_CONFIG`, if any, then applies environment overrides.
    /// # Errors
    /// Errors if the file cannot be read or parsed, or an override does not parse.
    pub fn load() -> Result<Self, SetupError> {
        let mut config = match get_var_opt("TPLBENCH_CONFIG")? {
            Some(path) => {
                let path = PathBuf::from(path);
                debug!(path = %path.display(), "Reading config file");
                let text = std::fs::read_to_string(&path)
                    .map_err(|source| SetupError::ReadConfig { path, source })?;
                Self::from_toml(&text)?
            }
            None => Self::default(),
        };
        config.apply_overrides(get_var_opt)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Errors on malformed TOML, unknown keys, or unknown engine and scenario names.
    pub fn from_toml(text: &str) -> Result<Self, SetupError> {
        Ok(toml::from_str(text)?)
    }

    /// Applies `TPLBENCH_ITERATIONS` and `TPLBENCH_TEMPLATES`, looked up through `lookup`.
    /// # Errors
    /// Errors if `lookup` does, or the iteration count is not a number.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), SetupError>
    where
        F: Fn(&str) -> Result<Option<String>, SetupError>,
    {
        if let Some(iterations) = parse_opt("TPLBENCH_ITERATIONS", &lookup)? {
            self.iterations = iterations;
        }
        if let Some(dir) = lookup("TPLBENCH_TEMPLATES")? {
            self.template_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    /// # Errors
    /// Errors if no timed iterations are configured.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.iterations == 0 {
            return Err(SetupError::NoIterations);
        }
        Ok(())
    }
}

fn get_var_opt(name: &str) -> Result<Option<String>, SetupError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(SetupError::UnparsableEnv(name.to_owned())),
    }
}

fn parse_opt<T, F>(name: &str, lookup: &F) -> Result<Option<T>, SetupError>
where
    T: FromStr,
    T::Err: std::error::Error + 'static,
    F: Fn(&str) -> Result<Option<String>, SetupError>,
{
    lookup(name)?
        .map(|value| {
            value
                .parse()
                .map_err(|e| SetupError::FromStr(name.to_owned(), Box::new(e)))
        })
        .transpose()
}
