use std::path::Path;

use crate::{Engine, Error, Scenario};

/// Directory holding the on-disk manifest fragments, one subdirectory per engine.
pub const DEFAULT_TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// The manifest every engine's fragments must produce from the chart fixture, up to
/// whitespace and quoting. Compare it as parsed YAML documents.
pub const EXPECTED_MANIFEST: &str = include_str!("../templates/expected/complex.yml");

/// Fragments making up the manifest. `root` pulls in the other three.
pub const FRAGMENTS: [&str; 4] = ["deployment", "service", "ingress", "root"];

const ROOT_FRAGMENT: &str = "root";
const SIMPLE_NAME: &str = "simple";

/// Every template an engine has to register, and the one rendering starts from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateSet {
    entry: String,
    templates: Vec<(String, String)>,
}

impl TemplateSet {
    /// The greeting template, spelled in each engine's syntax.
    #[must_use]
    pub fn simple(engine: Engine) -> Self {
        let source = match engine {
            Engine::Tera | Engine::MiniJinja => {
                "Hello {{ Name }}! {% for item in Items %}{{ item }} {% endfor %}"
            }
            Engine::Handlebars => "Hello {{Name}}! {{#each Items}}{{this}} {{/each}}",
            Engine::Liquid => "Hello {{Name}}! {% for item in Items %}{{item}} {% endfor %}",
        };
        Self::single(SIMPLE_NAME, source)
    }

    /// A set made of one template, which is also the entry.
    #[must_use]
    pub fn single(name: &str, source: &str) -> Self {
        Self {
            entry: name.to_owned(),
            templates: vec![(name.to_owned(), source.to_owned())],
        }
    }

    /// Reads the manifest fragments for `engine` from `dir/<engine>/`.
    /// # Errors
    /// Errors if the engine has no fragments, or any fragment cannot be read.
    pub fn complex(engine: Engine, dir: &Path) -> Result<Self, Error> {
        if !engine.supports(Scenario::Complex) {
            return Err(Error::Unsupported {
                engine,
                scenario: Scenario::Complex,
            });
        }
        let engine_dir = dir.join(engine.name());
        let mut templates = Vec::with_capacity(FRAGMENTS.len());
        for fragment in FRAGMENTS {
            let path = engine_dir.join(format!("{fragment}.{}", engine.extension()));
            debug!(%engine, path = %path.display(), "Loading template fragment");
            let source =
                std::fs::read_to_string(&path).map_err(|source| Error::Io { path, source })?;
            templates.push((engine.template_name(fragment), source));
        }
        Ok(Self {
            entry: engine.template_name(ROOT_FRAGMENT),
            templates,
        })
    }

    /// # Errors
    /// Errors as [`TemplateSet::complex`] does.
    pub fn for_scenario(engine: Engine, scenario: Scenario, dir: &Path) -> Result<Self, Error> {
        match scenario {
            Scenario::Simple => Ok(Self::simple(engine)),
            Scenario::Complex => Self::complex(engine, dir),
        }
    }

    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Source of the entry template.
    /// # Errors
    /// Errors if the entry template is not part of the set.
    pub fn entry_source(&self) -> Result<&str, Error> {
        self.templates
            .iter()
            .find(|(name, _)| *name == self.entry)
            .map(|(_, source)| source.as_str())
            .ok_or_else(|| Error::MissingEntry(self.entry.clone()))
    }

    /// Template names and sources, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates
            .iter()
            .map(|(name, source)| (name.as_str(), source.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_is_a_single_entry() {
        for engine in Engine::ALL {
            let set = TemplateSet::simple(engine);
            assert_eq!(set.len(), 1);
            assert_eq!(set.entry(), "simple");
            assert!(set.entry_source().unwrap().starts_with("Hello "));
        }
    }

    #[test]
    fn complex_loads_every_fragment() {
        let dir = Path::new(DEFAULT_TEMPLATE_DIR);
        let set = TemplateSet::complex(Engine::Tera, dir).unwrap();
        let names: Vec<&str> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            ["deployment.yml", "service.yml", "ingress.yml", "root.yml"]
        );
        assert_eq!(set.entry(), "root.yml");
        assert!(set.entry_source().unwrap().contains("deployment.yml"));

        let set = TemplateSet::complex(Engine::Handlebars, dir).unwrap();
        assert_eq!(set.entry(), "root");
        assert!(set.entry_source().unwrap().contains("{{> deployment}}"));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = Path::new(DEFAULT_TEMPLATE_DIR).join("does-not-exist");
        let err = TemplateSet::complex(Engine::MiniJinja, &dir).unwrap_err();
        match err {
            Error::Io { path, source } => {
                assert!(path.ends_with("minijinja/deployment.yml"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn liquid_manifest_is_unsupported() {
        let err = TemplateSet::for_scenario(
            Engine::Liquid,
            Scenario::Complex,
            Path::new(DEFAULT_TEMPLATE_DIR),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Unsupported {
                engine: Engine::Liquid,
                scenario: Scenario::Complex
            }
        ));
    }
}
