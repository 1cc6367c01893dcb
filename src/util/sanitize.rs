//! Markup stripping for user-entered text.
//!
//! Applied to every field on each keystroke and again right before a value is
//! submitted. Rendering already escapes text, so this guards what reaches the
//! backend and whatever other consumers render from it.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

use std::sync::LazyLock;

use regex::Regex;

/// Upper bound for any single form field, in characters.
pub const MAX_FIELD_CHARS: usize = 200;

/// Script and style elements are dropped together with their content.
static EMBEDDED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>").expect("embedded block pattern")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

/// An unterminated tag opener such as `<img src=x onerror=...`.
static DANGLING_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<+([A-Za-z/!?])").expect("dangling opener pattern"));

/// Strip markup from `input` and cap it at [`MAX_FIELD_CHARS`].
///
/// Idempotent: once stripped, no `<` is followed by a `>` or a tag-opening
/// character, so a second pass finds nothing to remove.
pub fn sanitize(input: &str) -> String {
    let without_blocks = EMBEDDED_BLOCK.replace_all(input, "");
    let without_tags = TAG.replace_all(&without_blocks, "");
    let without_openers = DANGLING_OPENER.replace_all(&without_tags, "$1");
    without_openers.chars().take(MAX_FIELD_CHARS).collect()
}

/// [`sanitize`] for values that may be absent, such as `null` fields in
/// backend records; absent input becomes `""`.
pub fn sanitize_opt(input: Option<&str>) -> String {
    input.map(sanitize).unwrap_or_default()
}

/// Sanitize and trim, as used for credentials before they are submitted.
pub fn sanitize_trimmed(input: &str) -> String {
    sanitize(input.trim()).trim().to_owned()
}
