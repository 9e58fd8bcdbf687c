use serde::Serialize;
use tera::{Context, Tera};

use crate::{Error, TemplateSet};

pub(crate) struct TeraRenderer {
    tera: Tera,
    entry: String,
    context: Context,
}

impl TeraRenderer {
    pub(crate) fn new<T: Serialize>(templates: &TemplateSet, data: &T) -> Result<Self, Error> {
        let mut tera = Tera::default();
        // manifests are YAML, nothing to escape
        tera.autoescape_on(Vec::new());
        tera.add_raw_templates(templates.iter())?;
        let context = Context::from_serialize(data)?;
        Ok(Self {
            tera,
            entry: templates.entry().to_owned(),
            context,
        })
    }

    pub(crate) fn render(&self) -> Result<String, Error> {
        Ok(self.tera.render(&self.entry, &self.context)?)
    }
}
