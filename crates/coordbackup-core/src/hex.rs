// ── Canonical hex strings ──
//
// Every identifier and key in a backup is stored as lowercase, unseparated,
// left-zero-padded hex. String input goes through `normalize`; byte and
// integer input is encoded directly at the field's fixed width.

use crate::error::CoreError;

/// Byte width of an IEEE address or extended PAN ID.
pub const EUI64_LEN: usize = 8;

/// Byte width of a PAN ID or NWK short address.
pub const SHORT_ADDR_LEN: usize = 2;

/// Byte width of a network or link key.
pub const KEY_LEN: usize = 16;

fn is_separator(c: char) -> bool {
    matches!(c, '_' | '.' | ',' | ';' | ':' | ' ' | '\t' | '\r' | '\n')
}

/// Normalize loosely formatted hex into its canonical form.
///
/// The input is split on `_ . , ; : space tab CR LF`, one leading `0x` is
/// stripped from each field, the fields are joined, left-padded with `'0'`
/// to `pad` characters and lowercased. Only a lowercase `0x` prefix is
/// recognized. Input longer than `pad` is returned unpadded and untruncated.
///
/// ```
/// use coordbackup_core::hex::normalize;
///
/// assert_eq!(normalize("0x00 0x01 0x02 0x03 0x0a", 10), "000102030a");
/// assert_eq!(normalize("00:11:22:33:44:55:66:77", 16), "0011223344556677");
/// ```
pub fn normalize(input: &str, pad: usize) -> String {
    let joined: String = input
        .split(is_separator)
        .filter(|field| !field.is_empty())
        .map(|field| field.strip_prefix("0x").unwrap_or(field))
        .collect();

    let mut out = "0".repeat(pad.saturating_sub(joined.len()));
    out.push_str(&joined);
    out.to_lowercase()
}

/// Hex-encode the first `width` bytes of `bytes`.
///
/// Bytes past `width` are ignored. Fewer than `width` bytes is an error.
pub fn encode_fixed(field: &'static str, bytes: &[u8], width: usize) -> Result<String, CoreError> {
    let head = bytes.get(..width).ok_or(CoreError::ShortInput {
        field,
        expected: width,
        actual: bytes.len(),
    })?;
    Ok(hex::encode(head))
}

/// Decode a stored hex string back into bytes.
pub fn decode(field: &'static str, text: &str) -> Result<Vec<u8>, CoreError> {
    hex::decode(text).map_err(|source| CoreError::InvalidHex {
        field,
        value: text.to_owned(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn normalize_known_inputs() {
        let cases = [
            ("000102030A", "000102030a"),
            ("0x00 0x01 0x02 0x03 0x0a", "000102030a"),
            ("00 01 02 03 0A", "000102030a"),
            ("00:01:02:03:0A", "000102030a"),
            ("0x00:0x01:0x02:0x03:0x0A", "000102030a"),
            ("0x00: 0x01 : 0x02  : 0x03\t: 0x0A", "000102030a"),
            ("0x000102030A", "000102030a"),
            ("0x102030A", "000102030a"),
        ];
        for (input, expect) in cases {
            assert_eq!(normalize(input, 10), expect, "normalize({input:?})");
        }
    }

    #[test]
    fn normalize_is_idempotent_on_canonical_input() {
        let canonical = "0011223344556677";
        assert_eq!(normalize(canonical, 16), canonical);
        assert_eq!(normalize(&normalize(canonical, 16), 16), canonical);
    }

    #[test]
    fn normalize_ignores_every_separator_kind() {
        let octets = ["de", "ad", "be", "ef"];
        let bare = octets.concat();
        for sep in ["_", ".", ",", ";", ":", " ", "\t", "\r", "\n", " :: ", "\r\n", "_._"] {
            let joined = octets.join(sep);
            assert_eq!(normalize(&joined, 8), bare, "separator {sep:?}");
            let padded = format!("{sep}{joined}{sep}");
            assert_eq!(normalize(&padded, 8), bare, "surrounded by {sep:?}");
        }
    }

    #[test]
    fn prefix_is_stripped_per_field() {
        assert_eq!(normalize("0x00:0x01", 4), normalize("00:01", 4));
        assert_eq!(normalize("0x00:01", 4), "0001");
    }

    #[test]
    fn only_one_prefix_is_stripped() {
        assert_eq!(normalize("0x0x12", 4), "0x12");
    }

    #[test]
    fn uppercase_prefix_is_kept() {
        assert_eq!(normalize("0x00", 4), "0000");
        assert_eq!(normalize("0X00", 4), "0x00");
        assert_ne!(normalize("0X00", 4), normalize("0x00", 4));
    }

    #[test]
    fn short_input_is_left_padded() {
        assert_eq!(normalize("1", 4), "0001");
        assert_eq!(normalize("", 4), "0000");
        assert_eq!(normalize("::", 4), "0000");
    }

    #[test]
    fn long_input_is_not_truncated() {
        assert_eq!(normalize("ABCDEF", 4), "abcdef");
        assert_eq!(normalize("abcd", 4), "abcd");
    }

    #[test]
    fn encode_fixed_ignores_extra_bytes() {
        let out = encode_fixed("pan_id", &[0x1a, 0x62, 0xff, 0xff], SHORT_ADDR_LEN).unwrap();
        assert_eq!(out, "1a62");
    }

    #[test]
    fn encode_fixed_rejects_short_input() {
        let err = encode_fixed("coordinator_ieee", &[1, 2, 3], EUI64_LEN).unwrap_err();
        assert!(
            matches!(
                err,
                CoreError::ShortInput {
                    field: "coordinator_ieee",
                    expected: 8,
                    actual: 3
                }
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn decode_round_trips_canonical_text() {
        assert_eq!(decode("key", "00ff10").unwrap(), vec![0x00, 0xff, 0x10]);
    }

    #[test]
    fn decode_rejects_non_hex() {
        let err = decode("key", "0x12").unwrap_err();
        assert!(matches!(err, CoreError::InvalidHex { field: "key", .. }));
        assert!(decode("key", "abc").is_err());
    }
}
