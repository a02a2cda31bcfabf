use std::fmt::Display;

/// A state value that can be rendered for display and in full.
///
/// `Display` gives the short, human readable form.
pub trait PrimitiveType: Display {
    /// Renders the value according to `pattern`. Implementations are free to
    /// ignore the pattern.
    fn format(&self, pattern: &str) -> String;

    /// Renders the value without loss, so that it can be parsed back.
    fn to_full_string(&self) -> String;
}
