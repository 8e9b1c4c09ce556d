//! Renderer module — trait-based dispatch over the generated PHP files.

pub mod baker;
pub mod php;
pub mod shortcode;

use crate::config::Config;
use crate::model::{ComponentDoc, DocsJson, PropDoc};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("component <{tag}>: property `{prop}` has no `attr`")]
    MissingAttr { tag: String, prop: String },
}

/// Trait for rendering every component of a docs file into one PHP file.
pub trait Renderer {
    /// Heading printed above the generated code in dry/debug mode.
    fn title(&self) -> &str;

    /// Where this renderer's document is written.
    fn output_path<'a>(&self, config: &'a Config) -> &'a Path;

    /// Separator placed between two rendered components.
    fn separator(&self) -> &str {
        "\n\n"
    }

    fn render_component(&self, comp: &ComponentDoc, config: &Config)
        -> Result<String, RenderError>;
}

/// A rendered PHP document.
#[derive(Debug)]
pub struct Rendered {
    pub title: String,
    /// Concatenated per-component code, without the PHP open/close tags
    pub body: String,
}

impl Rendered {
    pub fn to_php(&self) -> String {
        format!("{}{}{}", php::PHP_HEAD, self.body, php::PHP_TAIL)
    }
}

/// The renderers in output order: shortcodes first, then page-builder maps.
pub fn all_renderers() -> Vec<Box<dyn Renderer>> {
    vec![
        Box::new(shortcode::ShortcodeRenderer),
        Box::new(baker::BakerRenderer),
    ]
}

/// Render every component. The first failing component aborts the document.
pub fn render_document(
    renderer: &dyn Renderer,
    docs: &DocsJson,
    config: &Config,
) -> Result<Rendered, RenderError> {
    let parts = docs
        .components
        .iter()
        .map(|comp| renderer.render_component(comp, config))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Rendered {
        title: renderer.title().to_string(),
        body: parts.join(renderer.separator()),
    })
}

/// The attribute name of `prop`, required by both renderers.
pub(crate) fn require_attr<'a>(comp: &ComponentDoc, prop: &'a PropDoc) -> Result<&'a str, RenderError> {
    prop.attr.as_deref().ok_or_else(|| RenderError::MissingAttr {
        tag: comp.tag.clone(),
        prop: prop.name.clone(),
    })
}
