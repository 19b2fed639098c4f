use super::*;

#[test]
fn parses_all_hex_lengths() {
    assert_eq!(
        parse_hex_color("#fff"),
        Some(Rgba8 {
            r: 255,
            g: 255,
            b: 255,
            a: 255
        })
    );
    assert_eq!(
        parse_hex_color("#1a2b3c"),
        Some(Rgba8 {
            r: 0x1a,
            g: 0x2b,
            b: 0x3c,
            a: 255
        })
    );
    assert_eq!(
        parse_hex_color("0000ff80"),
        Some(Rgba8 {
            r: 0,
            g: 0,
            b: 255,
            a: 0x80
        })
    );
    assert_eq!(parse_hex_color("#abcd").map(|c| c.a), Some(0xdd));
}

#[test]
fn rejects_malformed_input() {
    assert_eq!(parse_hex_color(""), None);
    assert_eq!(parse_hex_color("#"), None);
    assert_eq!(parse_hex_color("#12345"), None);
    assert_eq!(parse_hex_color("#ggg"), None);
    assert_eq!(parse_hex_color("red"), None);
    assert!(!is_hex_color("#1234567"));
    assert!(is_hex_color("  #ABCDEF  "));
}
