//! Tag and attribute name transforms.

/// "my-widget" → "my_widget". Used for PHP identifiers and shortcode names.
pub fn to_snake_case(name: &str) -> String {
    name.replace('-', "_")
}

/// "my-widget" → "My Widget". Used for human-facing labels.
///
/// Empty segments (leading, trailing or doubled dashes) pass through as
/// empty strings, so the segment count always matches the input.
pub fn to_title_case(name: &str) -> String {
    name.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
