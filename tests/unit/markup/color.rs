use super::*;

const FALLBACK: Argb = Argb(0x1234_5678);

#[test]
fn hex_prefixes_are_case_insensitive() {
    assert_eq!(parse_color("0xFF0000", FALLBACK), Argb(0xFF0000));
    assert_eq!(parse_color("0Xff0000", FALLBACK), Argb(0xFF0000));
    assert_eq!(parse_color("#00ff00", FALLBACK), Argb(0x00FF00));
    assert_eq!(parse_color("#FFFFFFFF", FALLBACK), Argb(0xFFFF_FFFF));
}

#[test]
fn decimal_is_signed_32_bit() {
    assert_eq!(parse_color("255", FALLBACK), Argb(255));
    assert_eq!(parse_color("+255", FALLBACK), Argb(255));
    assert_eq!(parse_color("-16777216", FALLBACK), Argb(0xFF00_0000));
    assert_eq!(parse_color("-1", FALLBACK), Argb(u32::MAX));
    assert_eq!(parse_color("2147483647", FALLBACK), Argb(0x7FFF_FFFF));
    assert_eq!(parse_color("-2147483648", FALLBACK), Argb(0x8000_0000));
    assert_eq!(parse_color("2147483648", FALLBACK), FALLBACK);
    assert_eq!(parse_color("4294967295", FALLBACK), FALLBACK);
    assert_eq!(parse_color("-2147483649", FALLBACK), FALLBACK);
}

#[test]
fn malformed_input_falls_back() {
    for bad in ["", "0x", "#", "#GG", "0xZZ", "red", " 12", "12px", "0x0x12"] {
        assert_eq!(parse_color(bad, FALLBACK), FALLBACK, "input {bad:?}");
        assert_eq!(try_parse_color(bad), None, "input {bad:?}");
    }
}

#[test]
fn hex_formatting_roundtrips() {
    for v in [0u32, 1, 0xFF, 0x00FF_00FF, 0x7FFF_FFFF, 0x8000_0000, u32::MAX] {
        assert_eq!(parse_color(&format!("0x{v:X}"), FALLBACK), Argb(v));
        assert_eq!(parse_color(&Argb(v).to_string(), FALLBACK), Argb(v));
    }
}

#[test]
fn oversized_hex_truncates_to_low_bits() {
    assert_eq!(parse_color("0x1FF000000", FALLBACK), Argb(0xFF00_0000));
}
