//! WPBakery page-builder maps — one `vc_map()` registration per component.

use crate::config::Config;
use crate::model::{ComponentDoc, PropDoc, PropType};
use crate::naming::{to_snake_case, to_title_case};
use crate::render::php::{double_quoted, single_quoted};
use crate::render::{require_attr, RenderError, Renderer};
use std::path::Path;

/// Base class the page builder uses for elements with nested content.
const CONTAINER_BASE: &str = "WPBakeryShortCodesContainer";

/// Page-builder field widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Checkbox,
    Textfield,
}

impl Widget {
    pub fn as_str(self) -> &'static str {
        match self {
            Widget::Checkbox => "checkbox",
            Widget::Textfield => "textfield",
        }
    }
}

/// Map a property type to the widget used to edit it.
pub fn widget_for(prop_type: &PropType) -> Widget {
    match prop_type {
        PropType::Boolean => Widget::Checkbox,
        _ => Widget::Textfield,
    }
}

pub struct BakerRenderer;

impl Renderer for BakerRenderer {
    fn title(&self) -> &str {
        "WP Page Baker shortcode map php code"
    }

    fn output_path<'a>(&self, config: &'a Config) -> &'a Path {
        &config.baker_path
    }

    fn render_component(
        &self,
        comp: &ComponentDoc,
        config: &Config,
    ) -> Result<String, RenderError> {
        let esc = config.escape;
        let snake_tag = to_snake_case(&comp.tag);

        let params = comp
            .props
            .iter()
            .map(|prop| render_param(comp, prop, esc))
            .collect::<Result<Vec<_>, _>>()?;

        let mut out = String::new();
        out.push_str("vc_map(array(\n");
        out.push_str(&format!(
            "    \"name\" => __(\"{}\"),\n",
            double_quoted(&to_title_case(&comp.tag), esc)
        ));
        out.push_str(&format!("    \"base\" => \"{}\",\n", snake_tag));
        if !comp.docs.is_empty() {
            out.push_str(&format!(
                "    \"description\" => __(\"{}\"),\n",
                double_quoted(&comp.docs, esc)
            ));
        }
        out.push_str(&format!(
            "    \"category\" => __('{}'),\n",
            single_quoted(&config.category, esc)
        ));
        if comp.has_content() {
            out.push_str("    \"is_container\" => true,\n");
        }
        out.push_str("    \"params\" => array(");
        for param in &params {
            out.push('\n');
            out.push_str(param);
        }
        if !params.is_empty() {
            out.push_str("\n    ");
        }
        out.push_str("),\n");
        out.push_str("));");

        if comp.has_content() {
            out.push_str(&format!(
                "\n\nif (class_exists('{base}')) {{\n    class WPBakeryShortCode_{tag} extends {base} {{}}\n}}",
                base = CONTAINER_BASE,
                tag = snake_tag
            ));
        }
        Ok(out)
    }
}

fn render_param(comp: &ComponentDoc, prop: &PropDoc, esc: bool) -> Result<String, RenderError> {
    let attr = require_attr(comp, prop)?;
    let value = prop.default_literal().unwrap_or_else(|| "\"\"".to_string());

    let mut out = String::new();
    out.push_str("        array(\n");
    out.push_str(&format!(
        "            \"type\" => \"{}\",\n",
        widget_for(&prop.prop_type).as_str()
    ));
    out.push_str("            \"holder\" => \"div\",\n");
    out.push_str("            \"class\" => \"\",\n");
    out.push_str(&format!(
        "            \"heading\" => __(\"{}\"),\n",
        double_quoted(&to_title_case(attr), esc)
    ));
    out.push_str(&format!(
        "            \"param_name\" => \"{}\",\n",
        to_snake_case(attr)
    ));
    out.push_str(&format!("            \"value\" => __({}),\n", value));
    out.push_str(&format!(
        "            \"description\" => __(\"{}\"),\n",
        double_quoted(&prop.docs, esc)
    ));
    out.push_str("        ),");
    Ok(out)
}
