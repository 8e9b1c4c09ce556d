//! Generator configuration — built once from the CLI, read-only thereafter.

use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

pub const DEFAULT_CATEGORY: &str = "ParserGenerated";
pub const DEFAULT_BAKER_PATH: &str = "gen-baker.php";
pub const DEFAULT_SHORTCODE_PATH: &str = "gen-shortcodes.php";

// Characters that are unsafe in a file name on at least one platform.
static RE_UNSAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[/\\?<>:*|"\x00-\x1f\x7f]"#).unwrap());

/// Options shared by the renderers and the output writer.
#[derive(Debug, Clone)]
pub struct Config {
    /// Page-builder category for every generated map
    pub category: String,
    pub shortcode_path: PathBuf,
    pub baker_path: PathBuf,
    /// Print generated documents instead of writing them
    pub dry: bool,
    /// Overwrite existing files without asking
    pub yes: bool,
    /// Print generated documents in addition to writing them
    pub debug: bool,
    /// Escape interpolated text for the PHP literal it lands in
    pub escape: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            shortcode_path: PathBuf::from(DEFAULT_SHORTCODE_PATH),
            baker_path: PathBuf::from(DEFAULT_BAKER_PATH),
            dry: false,
            yes: false,
            debug: false,
            escape: false,
        }
    }
}

impl Config {
    /// Whether the generated documents should be echoed to the console.
    pub fn prints_documents(&self) -> bool {
        self.dry || self.debug
    }
}

/// Strip directory traversal and unsafe file name characters from `raw`.
///
/// Root, drive prefix, `.` and `..` components are dropped so the result is
/// always relative and never climbs above the working directory. Falls back
/// to `fallback` when nothing usable is left.
pub fn sanitize_output_path(raw: &str, fallback: &str) -> PathBuf {
    let mut clean = PathBuf::new();
    for component in Path::new(raw).components() {
        if let Component::Normal(part) = component {
            let part = part.to_string_lossy();
            let part = RE_UNSAFE.replace_all(&part, "");
            let part = part.trim();
            if part.is_empty() || part.chars().all(|c| c == '.') {
                continue;
            }
            clean.push(part);
        }
    }
    if clean.as_os_str().is_empty() {
        PathBuf::from(fallback)
    } else {
        clean
    }
}
