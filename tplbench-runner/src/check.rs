use tplbench_engines::{EXPECTED_MANIFEST, Engine, Scenario};
use tplbench_fixtures::GREETING_OUTPUT;
use yaml_rust2::{Yaml, YamlLoader};

use crate::SetupError;

/// Rejects output that cannot be right before any time is spent measuring it.
///
/// The greeting has one correct rendering. Manifests differ in whitespace between
/// engines, so they are compared as parsed YAML documents against the expected manifest.
pub struct SmokeCheck {
    manifest: Vec<Yaml>,
}

impl SmokeCheck {
    /// # Errors
    /// Errors if the expected manifest is not valid YAML.
    pub fn new() -> Result<Self, SetupError> {
        Self::with_manifest(EXPECTED_MANIFEST)
    }

    fn with_manifest(expected: &str) -> Result<Self, SetupError> {
        let manifest = YamlLoader::load_from_str(expected).map_err(SetupError::ExpectedManifest)?;
        Ok(Self { manifest })
    }

    /// # Errors
    /// Errors if `output` is not what `engine` should have rendered for `scenario`.
    pub fn check(
        &self,
        engine: Engine,
        scenario: Scenario,
        output: &str,
    ) -> Result<(), SetupError> {
        let valid = match scenario {
            Scenario::Simple => output == GREETING_OUTPUT,
            Scenario::Complex => match YamlLoader::load_from_str(output) {
                Ok(documents) => documents == self.manifest,
                Err(error) => {
                    debug!(%engine, %error, "Rendered manifest is not valid YAML");
                    false
                }
            },
        };
        if valid {
            Ok(())
        } else {
            Err(SetupError::UnexpectedOutput {
                engine,
                scenario,
                output: output.to_owned(),
            })
        }
    }
}
