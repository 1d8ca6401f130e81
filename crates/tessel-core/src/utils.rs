//! Identifier helpers shared by the tracer and the generator.

/// ASCII identifier: a letter or `_`, then letters, digits or `_`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Identifier the host may use for an input or output.
///
/// Rejects the `gl_` prefix and doubled underscores, both reserved by the
/// target language.
pub fn is_declarable(name: &str) -> bool {
    is_identifier(name) && !name.starts_with("gl_") && !name.contains("__")
}

/// Matches generated local names (`v0`, `v17`).
pub fn is_local_name(name: &str) -> bool {
    match name.strip_prefix('v') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}
