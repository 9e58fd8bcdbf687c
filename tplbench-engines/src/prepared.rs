use std::time::Instant;

use serde::Serialize;

use crate::{
    Engine, Error, TemplateSet, handlebars_engine::HandlebarsRenderer,
    liquid_engine::LiquidRenderer, minijinja_engine::MiniJinjaRenderer, tera_engine::TeraRenderer,
};

enum Renderer {
    Tera(TeraRenderer),
    Handlebars(HandlebarsRenderer),
    MiniJinja(MiniJinjaRenderer),
    Liquid(LiquidRenderer),
}

/// Templates parsed and data converted into the engine's own context type, ready to be
/// rendered any number of times. Construct with [`Prepared::new`].
pub struct Prepared {
    engine: Engine,
    renderer: Renderer,
}

impl Prepared {
    /// Registers every template in `templates` with `engine` and converts `data` once.
    /// # Errors
    /// Errors if a template fails to parse, or `data` cannot be turned into a context.
    pub fn new<T: Serialize>(
        engine: Engine,
        templates: &TemplateSet,
        data: &T,
    ) -> Result<Self, Error> {
        let start = Instant::now();
        let renderer = match engine {
            Engine::Tera => Renderer::Tera(TeraRenderer::new(templates, data)?),
            Engine::Handlebars => Renderer::Handlebars(HandlebarsRenderer::new(templates, data)?),
            Engine::MiniJinja => Renderer::MiniJinja(MiniJinjaRenderer::new(templates, data)?),
            Engine::Liquid => Renderer::Liquid(LiquidRenderer::new(templates, data)?),
        };
        debug!(
            %engine,
            entry = templates.entry(),
            templates = templates.len(),
            micros_taken = start.elapsed().as_micros(),
            "Prepared templates"
        );
        Ok(Self { engine, renderer })
    }

    #[must_use]
    pub const fn engine(&self) -> Engine {
        self.engine
    }

    /// Renders the entry template into a new string. Calls are independent of each other.
    /// # Errors
    /// Errors if the engine fails while rendering.
    pub fn render(&self) -> Result<String, Error> {
        match &self.renderer {
            Renderer::Tera(renderer) => renderer.render(),
            Renderer::Handlebars(renderer) => renderer.render(),
            Renderer::MiniJinja(renderer) => renderer.render(),
            Renderer::Liquid(renderer) => renderer.render(),
        }
    }
}
