//! Builds the free-text query sent to the recommendation service.
//!
//! Only soft signals are folded into the text. Hard filters such as halal
//! travel as structured request fields, so this module never sees them.

use data_loader::SoftSignals;

/// Query token for the vegan signal.
pub const VEGAN_TOKEN: &str = "vegan";

/// Query token for the vegetarian signal.
pub const VEGETARIAN_TOKEN: &str = "vegetarian";

/// The ranking index may hold either spelling, so both are sent.
pub const GLUTEN_FREE_TOKENS: [&str; 2] = ["gluten free", "gluten_free"];

/// Combine user text with soft dietary signals into one query string.
///
/// ## Algorithm
/// 1. Trim `free_text`
/// 2. Append `vegan`, `vegetarian`, then both gluten-free spellings, each if set
/// 3. Join with single spaces
/// 4. Return `None` when nothing is left
///
/// `None` means "no text bias" on the wire, which the service treats
/// differently from an empty string.
pub fn build_query(free_text: &str, signals: &SoftSignals) -> Option<String> {
    let mut parts: Vec<&str> = Vec::with_capacity(5);

    let text = free_text.trim();
    if !text.is_empty() {
        parts.push(text);
    }
    if signals.vegan {
        parts.push(VEGAN_TOKEN);
    }
    if signals.vegetarian {
        parts.push(VEGETARIAN_TOKEN);
    }
    if signals.gluten_free {
        parts.extend(GLUTEN_FREE_TOKENS);
    }

    let query = parts.join(" ");
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}
