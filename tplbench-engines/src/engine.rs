use std::fmt::Display;

use serde::Deserialize;

/// A template engine taking part in the benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Tera,
    Handlebars,
    MiniJinja,
    Liquid,
}

impl Engine {
    pub const ALL: [Self; 4] = [Self::Tera, Self::Handlebars, Self::MiniJinja, Self::Liquid];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Tera => "tera",
            Self::Handlebars => "handlebars",
            Self::MiniJinja => "minijinja",
            Self::Liquid => "liquid",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|engine| engine.name() == name)
    }

    /// File extension of this engine's template fragments on disk.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Tera | Self::MiniJinja => "yml",
            Self::Handlebars => "hbs",
            Self::Liquid => "liquid",
        }
    }

    /// Name a fragment is registered under, which is also how other fragments refer to it.
    /// Handlebars partials are referenced by bare identifiers, so they drop the extension.
    #[must_use]
    pub fn template_name(&self, fragment: &str) -> String {
        match self {
            Self::Handlebars => fragment.to_owned(),
            _ => format!("{fragment}.{}", self.extension()),
        }
    }

    #[must_use]
    pub const fn supports(&self, scenario: Scenario) -> bool {
        match scenario {
            Scenario::Simple => true,
            // the liquid `for` tag has no key/value form for maps, which the manifest needs
            Scenario::Complex => !matches!(self, Self::Liquid),
        }
    }
}

impl Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which template and data a benchmark renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Greeting placeholder plus a loop over five items, compiled in.
    Simple,
    /// Deployment, service and ingress manifests assembled from fragments on disk.
    Complex,
}

impl Scenario {
    pub const ALL: [Self; 2] = [Self::Simple, Self::Complex];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Complex => "complex",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scenario| scenario.name() == name)
    }
}

impl Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
