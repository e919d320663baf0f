//! Card color palette and contrast helpers.
//!
//! # Responsibility
//! - Hold the fixed palette cards are colored from.
//! - Pick varied-but-not-exhausting colors for new cards.
//! - Choose readable text color for a given card background.

use rand::Rng;

/// Fixed background palette for cards.
pub const CARD_COLORS: [&str; 14] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8",
    "#F7DC6F", "#BB8FCE", "#85C1E9", "#F8C471", "#82E0AA", "#F1948A", "#AED6F1",
];

/// Picks a palette color for the next card.
///
/// Deterministic-by-index with wraparound, nudged by a small random offset so
/// consecutive cards vary without ever exhausting the palette.
pub fn pick_card_color(rng: &mut impl Rng, existing_cards: usize) -> &'static str {
    let nudge = rng.gen_range(0..3);
    CARD_COLORS[(existing_cards + nudge) % CARD_COLORS.len()]
}

/// Returns black or white, whichever reads better on the given `#rrggbb`
/// background. Malformed input falls back to white rather than failing.
pub fn contrasting_text_color(hex: &str) -> &'static str {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) => {
            // Perceived luminance, ITU-R BT.601 weights.
            let luminance =
                (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
            if luminance > 0.5 {
                "#000000"
            } else {
                "#FFFFFF"
            }
        }
        None => "#FFFFFF",
    }
}

fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
