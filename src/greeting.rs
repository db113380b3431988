/// Name used when the user enters nothing.
pub const DEFAULT_NAME: &str = "World";

/// Strips surrounding whitespace, counting the ASCII separators
/// U+001C..=U+001F as whitespace too.
pub fn normalize(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Returns a friendly greeting for the provided name.
///
/// Surrounding whitespace is trimmed, a blank name falls back to
/// [`DEFAULT_NAME`].
pub fn build_greeting(name: &str) -> String {
    let cleaned = match normalize(name) {
        "" => DEFAULT_NAME,
        trimmed => trimmed,
    };
    format!("Hello, {cleaned}!")
}
