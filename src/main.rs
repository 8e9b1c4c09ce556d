//! wpgen — generate WordPress shortcodes and WPBakery page-builder maps from
//! web component docs JSON.
//!
//! ```text
//! wpgen docs.json                       # writes gen-shortcodes.php and gen-baker.php
//! wpgen docs.json -c Widgets --dry      # print both documents, write nothing
//! wpgen docs.json --sp sc.php --bp vc.php -y
//! ```

mod config;
mod loader;
mod model;
mod naming;
mod output;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use config::{
    sanitize_output_path, Config, DEFAULT_BAKER_PATH, DEFAULT_CATEGORY, DEFAULT_SHORTCODE_PATH,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "wpgen",
    about = "Generate WordPress shortcodes and WPBakery maps from component docs JSON"
)]
struct Cli {
    /// Component docs JSON file
    filename: PathBuf,

    /// WPBakery category for the generated elements
    #[arg(short = 'c', long, default_value = DEFAULT_CATEGORY)]
    category: String,

    /// Print the generated code instead of writing files
    #[arg(long, visible_alias = "dr")]
    dry: bool,

    /// Output path for the WPBakery maps
    #[arg(long, visible_alias = "bp", default_value = DEFAULT_BAKER_PATH)]
    baker_path: String,

    /// Output path for the shortcode handlers
    #[arg(long, visible_alias = "sp", default_value = DEFAULT_SHORTCODE_PATH)]
    shortcode_path: String,

    /// Overwrite existing files without asking
    #[arg(short = 'y', long)]
    yes: bool,

    /// Print the generated code and verbose logs
    #[arg(short = 'd', long)]
    debug: bool,

    /// Escape interpolated docs and labels for PHP string literals
    #[arg(short = 'e', long)]
    escape: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            category: self.category.clone(),
            shortcode_path: sanitize_output_path(&self.shortcode_path, DEFAULT_SHORTCODE_PATH),
            baker_path: sanitize_output_path(&self.baker_path, DEFAULT_BAKER_PATH),
            dry: self.dry,
            yes: self.yes,
            debug: self.debug,
            escape: self.escape,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = cli.config();
    tracing::debug!(?config, "resolved configuration");

    let docs = loader::load(&cli.filename)?;

    // Render everything before touching the filesystem
    let mut rendered = Vec::new();
    for renderer in render::all_renderers() {
        let doc = render::render_document(renderer.as_ref(), &docs, &config)
            .with_context(|| format!("failed to render {}", renderer.title()))?;
        rendered.push((renderer.output_path(&config).to_path_buf(), doc));
    }

    let mut writer = output::OutputWriter::new(&config, output::StdinConfirm, io::stdout());
    let outcomes = writer.emit(rendered.iter().map(|(path, doc)| (path.as_path(), doc)));
    tracing::debug!(?outcomes, "done");

    Ok(())
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the level.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}
