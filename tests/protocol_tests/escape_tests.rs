//! Escape Tests
//!
//! Tests for value escaping and unescaping.

use proptest::prelude::*;
use ts3query::protocol::{decode, encode};
use ts3query::QueryError;

// =============================================================================
// Encode Tests
// =============================================================================

#[test]
fn test_encode_plain_text_unchanged() {
    assert_eq!(encode("foobarbaz"), "foobarbaz");
    assert_eq!(encode(""), "");
}

#[test]
fn test_encode_each_reserved_byte() {
    let cases = [
        ("\\", "\\\\"),
        ("/", "\\/"),
        (" ", "\\s"),
        ("|", "\\p"),
        ("\x07", "\\a"),
        ("\x08", "\\b"),
        ("\x0C", "\\f"),
        ("\n", "\\n"),
        ("\r", "\\r"),
        ("\t", "\\t"),
        ("\x0B", "\\v"),
    ];

    for (raw, wire) in cases {
        assert_eq!(encode(raw), wire, "encoding {:?}", raw);
    }
}

#[test]
fn test_encode_all_reserved_together() {
    assert_eq!(
        encode("foo\\/ |\x07\x08\x0C\n\r\t\x0B"),
        "foo\\\\\\/\\s\\p\\a\\b\\f\\n\\r\\t\\v"
    );
}

#[test]
fn test_encode_backslash_before_letter_is_not_rematched() {
    // A raw backslash followed by 's' must not turn into an escaped space
    assert_eq!(encode("\\s"), "\\\\s");
    assert_eq!(decode(&encode("\\s")).unwrap(), "\\s");
}

#[test]
fn test_encode_leaves_multibyte_characters() {
    assert_eq!(encode("Kanal ü/€"), "Kanal\\sü\\/€");
}

// =============================================================================
// Decode Tests
// =============================================================================

#[test]
fn test_decode_each_token() {
    let cases = [
        ("\\\\", "\\"),
        ("\\/", "/"),
        ("\\s", " "),
        ("\\p", "|"),
        ("\\a", "\x07"),
        ("\\b", "\x08"),
        ("\\f", "\x0C"),
        ("\\n", "\n"),
        ("\\r", "\r"),
        ("\\t", "\t"),
        ("\\v", "\x0B"),
    ];

    for (wire, raw) in cases {
        assert_eq!(decode(wire).unwrap(), raw, "decoding {:?}", wire);
    }
}

#[test]
fn test_decode_all_tokens_together() {
    assert_eq!(
        decode("foo\\\\\\/\\s\\p\\a\\b\\f\\n\\r\\t\\v").unwrap(),
        "foo\\/ |\x07\x08\x0C\n\r\t\x0B"
    );
}

#[test]
fn test_decode_is_greedy_left_to_right() {
    // "\\\\s" is an escaped backslash followed by a literal 's'
    assert_eq!(decode("\\\\s").unwrap(), "\\s");
}

#[test]
fn test_decode_trailing_lone_backslash_is_verbatim() {
    assert_eq!(decode("abc\\").unwrap(), "abc\\");
}

#[test]
fn test_decode_unknown_token_fails() {
    let err = decode("ab\\xcd").unwrap_err();
    match err {
        QueryError::InvalidEscape { position, found } => {
            assert_eq!(position, 2);
            assert_eq!(found, 'x');
        }
        other => panic!("Expected InvalidEscape, got {:?}", other),
    }
}

// =============================================================================
// Properties
// =============================================================================

fn reserved_heavy_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('\\'),
            Just('/'),
            Just(' '),
            Just('|'),
            Just('\x07'),
            Just('\x08'),
            Just('\x0C'),
            Just('\n'),
            Just('\r'),
            Just('\t'),
            Just('\x0B'),
            Just('s'),
            Just('p'),
            any::<char>().prop_filter("no NUL", |c| *c != '\0'),
        ],
        0..48,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(raw in "[^\\x00]{0,64}") {
        prop_assert_eq!(decode(&encode(&raw)).unwrap(), raw);
    }

    #[test]
    fn prop_decode_inverts_encode_reserved(raw in reserved_heavy_string()) {
        prop_assert_eq!(decode(&encode(&raw)).unwrap(), raw);
    }

    #[test]
    fn prop_encoded_has_no_separators(raw in reserved_heavy_string()) {
        let wire = encode(&raw);
        prop_assert!(!wire.contains(' '));
        prop_assert!(!wire.contains('|'));
        prop_assert!(!wire.contains('\n'));
    }
}
