use minijinja::{AutoEscape, Environment, Value};
use serde::Serialize;

use crate::{Error, TemplateSet};

pub(crate) struct MiniJinjaRenderer {
    env: Environment<'static>,
    entry: String,
    context: Value,
}

impl MiniJinjaRenderer {
    pub(crate) fn new<T: Serialize>(templates: &TemplateSet, data: &T) -> Result<Self, Error> {
        let mut env = Environment::new();
        // `.yml` would otherwise pick up JSON escaping
        env.set_auto_escape_callback(|_| AutoEscape::None);
        for (name, source) in templates.iter() {
            env.add_template_owned(name.to_owned(), source.to_owned())?;
        }
        Ok(Self {
            env,
            entry: templates.entry().to_owned(),
            context: Value::from_serialize(data),
        })
    }

    pub(crate) fn render(&self) -> Result<String, Error> {
        let template = self.env.get_template(&self.entry)?;
        Ok(template.render(&self.context)?)
    }
}
