use liquid::{Object, ParserBuilder, Template};
use serde::Serialize;

use crate::{Error, TemplateSet};

pub(crate) struct LiquidRenderer {
    template: Template,
    globals: Object,
}

impl LiquidRenderer {
    pub(crate) fn new<T: Serialize>(templates: &TemplateSet, data: &T) -> Result<Self, Error> {
        let parser = ParserBuilder::with_stdlib().build()?;
        let template = parser.parse(templates.entry_source()?)?;
        Ok(Self {
            template,
            globals: liquid::to_object(data)?,
        })
    }

    pub(crate) fn render(&self) -> Result<String, Error> {
        Ok(self.template.render(&self.globals)?)
    }
}
