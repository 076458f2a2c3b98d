//! Text-tag interpolation: `{key}` placeholders resolved from the inventory.

use dialogue_graph::Inventory;

/// Substitute every balanced `{key}` in `input` with the decimal count of
/// `key` in the inventory.
///
/// The scan is a single left-to-right pass: substituted values are never
/// re-scanned for nested braces, and an unterminated `{` halts the scan so
/// the rest of the string passes through verbatim. Unknown keys substitute
/// as `0`, matching the inventory's default.
pub fn interpolate(input: &str, inventory: &Inventory) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('{') {
        match rest[open + 1..].find('}') {
            Some(len) => {
                out.push_str(&rest[..open]);
                let key = &rest[open + 1..open + 1 + len];
                out.push_str(&inventory.get(key).to_string());
                rest = &rest[open + 1 + len + 1..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}
