// Command name normalization

/// Returns true for the bytes that separate words in a command name
fn is_separator(c: char) -> bool {
    c == '-' || c == '_'
}

/// Turn a command name into a single identifier token.
///
/// Dashes and underscores are removed and the letter following each run of
/// separators is uppercased, so `foo-bar` becomes `fooBar` and `foo--bar`
/// collapses to the same thing. A trailing separator is dropped and a leading
/// one leaves an empty prefix (`-foo` becomes `Foo`). Names without separators
/// are returned unchanged.
///
/// Only ASCII input is supported. Multi-byte characters pass through without
/// being uppercased.
pub fn normalize_command_name(source: &str) -> String {
    if !source.contains(is_separator) {
        return source.to_string();
    }

    let mut segments = source.split(is_separator);
    let mut output = String::with_capacity(source.len());

    if let Some(prefix) = segments.next() {
        output.push_str(prefix);
    }

    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            output.push(first.to_ascii_uppercase());
            output.push_str(chars.as_str());
        }
    }

    output
}
