//! tplbench engines
//!
//! Puts tera, handlebars, minijinja and liquid behind one [`Prepared`] type so the
//! benchmarks can time the same fixture through each of them.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use tplbench_engines::{DEFAULT_TEMPLATE_DIR, Engine, Prepared, TemplateSet};
//!
//! let templates = TemplateSet::complex(Engine::Tera, Path::new(DEFAULT_TEMPLATE_DIR))?;
//! let prepared = Prepared::new(Engine::Tera, &templates, &tplbench_fixtures::chart())?;
//! assert!(prepared.render()?.starts_with("---"));
//! # Ok::<(), tplbench_engines::Error>(())
//! ```
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

#[macro_use]
extern crate tracing;

mod engine;
mod error;
mod handlebars_engine;
mod liquid_engine;
mod minijinja_engine;
mod prepared;
mod sources;
mod tera_engine;

pub use engine::{Engine, Scenario};
pub use error::Error;
pub use prepared::Prepared;
pub use sources::{DEFAULT_TEMPLATE_DIR, EXPECTED_MANIFEST, FRAGMENTS, TemplateSet};

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tplbench_fixtures::{GREETING_OUTPUT, chart, greeting};
    use yaml_rust2::{Yaml, YamlLoader};

    use super::*;

    fn render_manifest(engine: Engine) -> String {
        let templates = TemplateSet::complex(engine, Path::new(DEFAULT_TEMPLATE_DIR)).unwrap();
        Prepared::new(engine, &templates, &chart())
            .unwrap()
            .render()
            .unwrap()
    }

    fn documents(manifest: &str) -> Vec<Yaml> {
        YamlLoader::load_from_str(manifest)
            .unwrap_or_else(|e| panic!("invalid YAML ({e}) in:\n{manifest}"))
    }

    #[test]
    fn greeting_renders_identically() {
        let data = greeting();
        for engine in Engine::ALL {
            let prepared = Prepared::new(engine, &TemplateSet::simple(engine), &data).unwrap();
            assert_eq!(prepared.engine(), engine);
            for _ in 0..3 {
                assert_eq!(prepared.render().unwrap(), GREETING_OUTPUT, "{engine}");
            }
        }
    }

    #[test]
    fn manifest_matches_expected_documents() {
        let expected = documents(EXPECTED_MANIFEST);
        assert_eq!(expected.len(), 3);
        for engine in Engine::ALL {
            if !engine.supports(Scenario::Complex) {
                continue;
            }
            let manifest = render_manifest(engine);
            assert_eq!(documents(&manifest), expected, "{engine} rendered:\n{manifest}");
        }
    }

    #[test]
    fn manifest_has_expected_fields() {
        let docs = documents(&render_manifest(Engine::Tera));
        let deployment = &docs[0];
        assert_eq!(deployment["kind"].as_str(), Some("Deployment"));
        assert_eq!(deployment["spec"]["replicas"].as_i64(), Some(5));
        let container = &deployment["spec"]["template"]["spec"]["containers"][0];
        assert_eq!(
            container["image"].as_str(),
            Some("myregistry.com/my-web-app:v1.2.3")
        );
        assert_eq!(container["env"].as_vec().map(Vec::len), Some(4));
        assert_eq!(container["resources"]["limits"]["cpu"].as_str(), Some("1000m"));
        assert_eq!(container["volumeMounts"][2]["readOnly"], Yaml::BadValue);
        assert_eq!(docs[1]["spec"]["ports"][0]["nodePort"].as_i64(), Some(30080));
        let rules = docs[2]["spec"]["rules"].as_vec().unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(
            rules[0]["http"]["paths"][1]["path"].as_str(),
            Some("/api")
        );
    }

    #[test]
    fn booleans_render_as_yaml_booleans() {
        for engine in [Engine::Tera, Engine::Handlebars, Engine::MiniJinja] {
            let manifest = render_manifest(engine);
            assert!(!manifest.contains("True"), "{engine} rendered:\n{manifest}");
            let docs = documents(&manifest);
            let mounts = &docs[0]["spec"]["template"]["spec"]["containers"][0]["volumeMounts"];
            assert_eq!(mounts[0]["readOnly"], Yaml::Boolean(true), "{engine}");
            assert_eq!(mounts[1]["readOnly"].as_bool(), Some(true), "{engine}");
        }
    }

    #[test]
    fn disabled_sections_are_left_out() {
        let mut data = chart();
        data.values.service.enabled = false;
        data.values.ingress.enabled = false;
        for engine in [Engine::Tera, Engine::Handlebars, Engine::MiniJinja] {
            let templates =
                TemplateSet::complex(engine, Path::new(DEFAULT_TEMPLATE_DIR)).unwrap();
            let manifest = Prepared::new(engine, &templates, &data)
                .unwrap()
                .render()
                .unwrap();
            let docs = documents(&manifest);
            assert_eq!(docs.len(), 1, "{engine} rendered:\n{manifest}");
            assert_eq!(docs[0]["kind"].as_str(), Some("Deployment"));
        }
    }

    #[test]
    fn broken_template_fails_to_prepare() {
        let data = greeting();
        for engine in Engine::ALL {
            let source = match engine {
                Engine::Handlebars => "Hello {{#each Items}}",
                _ => "Hello {% for item in Items %}",
            };
            let templates = TemplateSet::single("broken", source);
            assert!(Prepared::new(engine, &templates, &data).is_err(), "{engine}");
        }
    }
}
