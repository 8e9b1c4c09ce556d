//! Input loading — read, parse and validate a component docs JSON file.

use crate::model::DocsJson;
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());

/// Load the docs file at `path`.
pub fn load(path: &Path) -> Result<DocsJson> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let docs = parse(&content).with_context(|| format!("failed to load {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        components = docs.components.len(),
        "loaded component docs"
    );
    Ok(docs)
}

/// Parse and validate docs JSON text.
pub fn parse(content: &str) -> Result<DocsJson> {
    let docs: DocsJson = serde_json::from_str(content).context("invalid docs JSON")?;
    for comp in &docs.components {
        if !RE_TAG.is_match(&comp.tag) {
            bail!(
                "invalid component tag {:?}: only letters, digits and dashes are allowed",
                comp.tag
            );
        }
    }
    Ok(docs)
}
