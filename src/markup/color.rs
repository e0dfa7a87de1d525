use crate::foundation::core::Argb;

/// Parse a color literal, returning `fallback` on any malformed input.
///
/// Accepted forms (case-insensitive): `0x`-prefixed hex, `#`-prefixed hex,
/// or a decimal integer. Hex digits beyond 32 bits are truncated; decimals
/// must fit a signed 32-bit value, so opaque colors are written negative
/// (`-16777216` is opaque black).
pub fn parse_color(token: &str, fallback: Argb) -> Argb {
    try_parse_color(token).unwrap_or(fallback)
}

/// Parse a color literal, `None` when it is malformed.
pub fn try_parse_color(token: &str) -> Option<Argb> {
    let upper = token.to_ascii_uppercase();

    if let Some(hex) = upper.strip_prefix("0X").or_else(|| upper.strip_prefix('#')) {
        return i64::from_str_radix(hex, 16).ok().map(|v| Argb(v as u32));
    }

    upper.parse::<i32>().ok().map(|v| Argb(v as u32))
}

#[cfg(test)]
#[path = "../../tests/unit/markup/color.rs"]
mod tests;
