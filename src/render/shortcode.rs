//! WordPress shortcode handlers — one PHP function per component.
//!
//! ```php
//! function my_widget_function($atts = [], $content = null, $tag = '') {
//!     $size = $atts['size_val'];
//!     return "<my-widget size-val=\"{$size}\"></my-widget>";
//! }
//!
//! add_shortcode('my_widget', 'my_widget_function');
//! ```

use crate::config::Config;
use crate::model::ComponentDoc;
use crate::naming::to_snake_case;
use crate::render::{require_attr, RenderError, Renderer};
use std::path::Path;

/// Handler parameters, plus `$this`, which PHP never allows as a local.
const RESERVED_LOCALS: &[&str] = &["atts", "content", "tag", "this"];

/// PHP local bound to `prop_name`, kept clear of the handler's parameters.
fn local_var(prop_name: &str) -> String {
    if RESERVED_LOCALS.contains(&prop_name) {
        format!("attr_{}", prop_name)
    } else {
        prop_name.to_string()
    }
}

pub struct ShortcodeRenderer;

impl Renderer for ShortcodeRenderer {
    fn title(&self) -> &str {
        "WP Shortcodes"
    }

    fn output_path<'a>(&self, config: &'a Config) -> &'a Path {
        &config.shortcode_path
    }

    fn render_component(
        &self,
        comp: &ComponentDoc,
        config: &Config,
    ) -> Result<String, RenderError> {
        let snake_tag = to_snake_case(&comp.tag);
        let function = format!("{}_function", snake_tag);

        let mut decls = String::new();
        let mut attrs = String::new();
        for prop in &comp.props {
            let attr = require_attr(comp, prop)?;
            let lookup = format!("$atts['{}']", to_snake_case(attr));
            let value = if config.escape {
                format!("esc_attr({})", lookup)
            } else {
                lookup
            };
            let local = local_var(&prop.name);
            decls.push_str(&format!("    ${} = {};\n", local, value));
            attrs.push_str(&format!(" {}=\\\"{{${}}}\\\"", attr, local));
        }

        // Containers pass their nested shortcodes through to the element
        let inner = if comp.has_content() {
            "\" . do_shortcode($content) . \""
        } else {
            ""
        };

        let mut out = String::new();
        out.push_str(&format!(
            "function {}($atts = [], $content = null, $tag = '') {{\n",
            function
        ));
        out.push_str(&decls);
        out.push_str(&format!(
            "    return \"<{tag}{attrs}>{inner}</{tag}>\";\n",
            tag = comp.tag,
            attrs = attrs,
            inner = inner
        ));
        out.push_str("}\n\n");
        out.push_str(&format!(
            "add_shortcode('{}', '{}');",
            snake_tag, function
        ));
        Ok(out)
    }
}
