use handlebars::Handlebars;
use serde::Serialize;
use serde_json::Value;

use crate::{Error, TemplateSet};

pub(crate) struct HandlebarsRenderer {
    registry: Handlebars<'static>,
    entry: String,
    data: Value,
}

impl HandlebarsRenderer {
    pub(crate) fn new<T: Serialize>(templates: &TemplateSet, data: &T) -> Result<Self, Error> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        // every registered template doubles as a partial, which is how `root` includes the rest
        for (name, source) in templates.iter() {
            registry.register_template_string(name, source)?;
        }
        Ok(Self {
            registry,
            entry: templates.entry().to_owned(),
            data: serde_json::to_value(data)?,
        })
    }

    pub(crate) fn render(&self) -> Result<String, Error> {
        Ok(self.registry.render(&self.entry, &self.data)?)
    }
}
