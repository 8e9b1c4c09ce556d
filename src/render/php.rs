//! PHP source helpers shared by the renderers.

pub const PHP_HEAD: &str = "<?php\n";
pub const PHP_TAIL: &str = "\n?>";

/// Text for the inside of a double-quoted PHP literal.
///
/// With `escape` off the text passes through untouched.
pub fn double_quoted(s: &str, escape: bool) -> String {
    if !escape {
        return s.to_string();
    }
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Text for the inside of a single-quoted PHP literal.
pub fn single_quoted(s: &str, escape: bool) -> String {
    if !escape {
        return s.to_string();
    }
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
