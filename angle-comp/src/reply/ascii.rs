//! ASCII reply decoding
//!
//! Reply format: `<marker> <command> <amplitude> <phase> <offset>`
//!
//! Numeric fields come in two encodings, chosen by the first character:
//! - `+`/`-`: signed decimal, taken at face value (`-210503`)
//! - otherwise: unsigned hex holding a two's-complement pattern (`FFFCC9B9`),
//!   optionally prefixed with `0x`

use super::RawCorrection;
use crate::constants::{FIRST_FIELD_TOKEN, REPLY_TOKEN_COUNT, TOKEN_DELIMITER};
use crate::error::{Error, Field, Result};

/// Split a reply on single spaces.
///
/// Consecutive delimiters produce empty tokens. A single trailing delimiter
/// does not, and an empty reply has no tokens.
pub fn tokenize(reply: &str) -> Vec<&str> {
    if reply.is_empty() {
        return Vec::new();
    }
    let body = reply.strip_suffix(TOKEN_DELIMITER).unwrap_or(reply);
    body.split(TOKEN_DELIMITER).collect()
}

/// Parse one numeric token into its raw bit pattern.
pub fn parse_field(token: &str, field: Field) -> Result<u64> {
    let parsed = match token.as_bytes().first() {
        Some(b'+') | Some(b'-') => token.parse::<i64>().map(|v| v as u64).ok(),
        _ => {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            // from_str_radix would also take a sign here
            if digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                u64::from_str_radix(digits, 16).ok()
            } else {
                None
            }
        }
    };

    parsed.ok_or_else(|| Error::Parse {
        field,
        token: token.to_string(),
    })
}

/// Reinterpret the low 16 bits as a two's-complement value.
#[inline]
pub fn reinterpret_i16(bits: u64) -> i16 {
    bits as u16 as i16
}

/// Reinterpret the low 32 bits as a two's-complement value.
#[inline]
pub fn reinterpret_i32(bits: u64) -> i32 {
    bits as u32 as i32
}

/// Decode the three correction fields of an ASCII reply.
pub fn decode_ascii_reply(reply: &str) -> Result<RawCorrection> {
    let tokens = tokenize(reply);
    if tokens.len() != REPLY_TOKEN_COUNT {
        return Err(Error::Format {
            expected: REPLY_TOKEN_COUNT,
            actual: tokens.len(),
        });
    }

    let fields = &tokens[FIRST_FIELD_TOKEN..];
    let amplitude = parse_field(fields[0], Field::Amplitude)?;
    let phase = parse_field(fields[1], Field::Phase)?;
    let offset = parse_field(fields[2], Field::Offset)?;

    Ok(RawCorrection {
        amplitude: reinterpret_i16(amplitude),
        phase: reinterpret_i32(phase),
        offset: reinterpret_i16(offset),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_plain() {
        assert_eq!(
            tokenize("sRA MCAngleCompSin 765 FFFCC9B9 FFFFFF0B"),
            vec!["sRA", "MCAngleCompSin", "765", "FFFCC9B9", "FFFFFF0B"]
        );
    }

    #[test]
    fn test_tokenize_keeps_empty_tokens() {
        assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
        assert_eq!(tokenize(" a"), vec!["", "a"]);
    }

    #[test]
    fn test_tokenize_trailing_delimiter() {
        assert_eq!(tokenize("a b "), vec!["a", "b"]);
        assert_eq!(tokenize("a b  "), vec!["a", "b", ""]);
        assert_eq!(tokenize(" "), vec![""]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_parse_field_hex() {
        assert_eq!(parse_field("765", Field::Amplitude).unwrap(), 0x765);
        assert_eq!(parse_field("fffc", Field::Amplitude).unwrap(), 0xFFFC);
    }

    #[test]
    fn test_parse_field_hex_prefix() {
        assert_eq!(parse_field("0x765", Field::Amplitude).unwrap(), 0x765);
        assert_eq!(parse_field("0XFFFCC9B9", Field::Phase).unwrap(), 0xFFFC_C9B9);
        assert!(parse_field("0x", Field::Phase).is_err());
        assert!(parse_field("0x+5", Field::Phase).is_err());
    }

    #[test]
    fn test_decimal_fields_truncate_to_width() {
        let raw = decode_ascii_reply("sRA MCAngleCompSin +70000 +4294967297 -70000").unwrap();
        // 70000 = 0x11170, low 16 bits 0x1170
        assert_eq!(raw.amplitude, 4464);
        assert_eq!(raw.phase, 1);
        // -70000 low 16 bits 0xEE90
        assert_eq!(raw.offset, -4464);
    }

    #[test]
    fn test_parse_field_signed_decimal() {
        assert_eq!(parse_field("+1893", Field::Amplitude).unwrap(), 1893);
        assert_eq!(
            parse_field("-245", Field::Offset).unwrap(),
            (-245i64) as u64
        );
    }

    #[test]
    fn test_parse_field_rejects_garbage() {
        for token in ["", "XYZ", "+", "-12a", "12 3", "+0x10"] {
            let err = parse_field(token, Field::Phase).unwrap_err();
            match err {
                Error::Parse { field, token: t } => {
                    assert_eq!(field, Field::Phase);
                    assert_eq!(t, token);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_parse_field_hex_overflow() {
        assert!(parse_field("1FFFFFFFFFFFFFFFF", Field::Phase).is_err());
    }

    #[test]
    fn test_reinterpret_widths() {
        assert_eq!(reinterpret_i16(0xFFFC), -4);
        assert_eq!(reinterpret_i16(0xFFFF_FF0B), -245);
        assert_eq!(reinterpret_i16(0x7FFF), i16::MAX);
        assert_eq!(reinterpret_i32(0xFFFC_C9B9), -210503);
        assert_eq!(reinterpret_i32(0x1_0000_0001), 1);
    }

    #[test]
    fn test_decode_hex_reply() {
        let raw = decode_ascii_reply("sRA MCAngleCompSin 765 FFFCC9B9 FFFFFF0B").unwrap();
        assert_eq!(raw.amplitude, 1893);
        assert_eq!(raw.phase, -210503);
        assert_eq!(raw.offset, -245);
    }

    #[test]
    fn test_decode_mixed_encodings() {
        let raw = decode_ascii_reply("sRA MCAngleCompSin FFFC +100 -1").unwrap();
        assert_eq!(raw.amplitude, -4);
        assert_eq!(raw.phase, 100);
        assert_eq!(raw.offset, -1);
    }

    #[test]
    fn test_decode_wrong_token_count() {
        for reply in [
            "sRA MCAngleCompSin 765 FFFCC9B9",
            "sRA MCAngleCompSin 765 FFFCC9B9 FFFFFF0B 0",
            "sRA  MCAngleCompSin 765 FFFCC9B9 FFFFFF0B",
            "",
        ] {
            assert!(matches!(
                decode_ascii_reply(reply),
                Err(Error::Format { expected: 5, .. })
            ));
        }
    }

    #[test]
    fn test_decode_reports_offending_field() {
        let err = decode_ascii_reply("sRA MCAngleCompSin 765 FFFCC9B9 G0").unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                field: Field::Offset,
                ..
            }
        ));
    }
}
