//! JSON encoding of [`Configuration`].
//!
//! Output is pretty-printed with a two-space indent and leaves non-ASCII text
//! unescaped (`serde_json` only escapes control characters, quotes, and
//! backslashes), so `"打击"` is written verbatim rather than as `"\u6253\u51fb"`.
//!
//! Example of an encoded document:
//!
//! ```json
//! {
//!   "batch_rules": {
//!     "enabled": false,
//!     "prefix": "",
//!     "suffix": "打击"
//!   },
//!   "renames": {
//!     "Defend_R": "防御"
//!   }
//! }
//! ```

use serde::de::{Error as _, Unexpected};
use serde_json::Value;
use thiserror::Error;

use crate::domain::config::Configuration;

/// Errors produced while encoding or decoding the persisted document.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The text is not valid JSON or does not match the document schema.
    #[error("malformed rename configuration: {0}")]
    Parse(#[source] serde_json::Error),

    /// The document is valid JSON but is `null` rather than an object.
    #[error("rename configuration is empty (null document)")]
    NullDocument,

    /// Serialization failed.
    #[error("failed to serialize rename configuration: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Encodes `config` as pretty-printed JSON followed by a trailing newline.
///
/// # Errors
///
/// Returns [`FormatError::Serialize`] if `serde_json` rejects the value.  With
/// string-keyed maps this does not happen in practice.
pub fn encode_config(config: &Configuration) -> Result<String, FormatError> {
    let mut text = serde_json::to_string_pretty(config).map_err(FormatError::Serialize)?;
    text.push('\n');
    Ok(text)
}

/// UTF-8 byte-order mark written by some Windows editors.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes a persisted document from raw file bytes (or a `&str`).
///
/// A leading UTF-8 byte-order mark is skipped.  Missing or `null` sections
/// take their defaults; unknown keys are ignored.
///
/// # Errors
///
/// Returns [`FormatError::Parse`] for invalid UTF-8, invalid JSON, or a
/// non-object document, and [`FormatError::NullDocument`] for a bare `null`.
pub fn decode_config(input: impl AsRef<[u8]>) -> Result<Configuration, FormatError> {
    let bytes = input.as_ref();
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let value: Value = serde_json::from_slice(bytes).map_err(FormatError::Parse)?;

    let Value::Object(root) = &value else {
        if value.is_null() {
            return Err(FormatError::NullDocument);
        }
        return Err(not_an_object(&value, "a rename configuration object"));
    };
    // Derived struct visitors also accept sequences, so nested sections are
    // checked here too.
    match root.get("batch_rules") {
        None | Some(Value::Null) | Some(Value::Object(_)) => {}
        Some(other) => return Err(not_an_object(other, "a batch_rules object")),
    }

    serde_json::from_value(value).map_err(FormatError::Parse)
}

/// Builds the `Parse` error for a JSON value of the wrong shape.
fn not_an_object(value: &Value, expected: &'static str) -> FormatError {
    let unexpected = match value {
        Value::Array(_) => Unexpected::Seq,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::String(s) => Unexpected::Str(s),
        Value::Number(_) => Unexpected::Other("number"),
        Value::Null => Unexpected::Unit,
        Value::Object(_) => Unexpected::Map,
    };
    FormatError::Parse(serde_json::Error::invalid_type(unexpected, &expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::BatchRule;

    #[test]
    fn test_encode_leaves_cjk_unescaped() {
        // Arrange
        let cfg = Configuration::example();

        // Act
        let text = encode_config(&cfg).expect("encode");

        // Assert
        assert!(text.contains("\"完美打击\""), "got: {text}");
        assert!(!text.contains("\\u"), "non-ASCII must not be escaped: {text}");
    }

    #[test]
    fn test_encode_is_pretty_printed_with_two_space_indent() {
        let text = encode_config(&Configuration::default()).expect("encode");
        assert!(text.starts_with("{\n  \"batch_rules\": {\n    \"enabled\": false"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_decode_round_trips_example() {
        let cfg = Configuration::example();
        let decoded = decode_config(&encode_config(&cfg).expect("encode")).expect("decode");
        assert_eq!(decoded, cfg);
    }

    #[test]
    fn test_decode_preserves_batch_rule_fields() {
        let text = r#"{ "batch_rules": { "enabled": true, "prefix": "铁壁", "suffix": "" } }"#;
        let cfg = decode_config(text).expect("decode");
        assert_eq!(
            cfg.batch_rule,
            BatchRule {
                enabled: true,
                prefix: "铁壁".to_string(),
                suffix: String::new(),
            }
        );
    }

    #[test]
    fn test_decode_invalid_json_is_parse_error() {
        let result = decode_config("{ \"renames\": { \"Bash\": ");
        assert!(matches!(result, Err(FormatError::Parse(_))));
    }

    #[test]
    fn test_decode_empty_text_is_parse_error() {
        assert!(matches!(decode_config(""), Err(FormatError::Parse(_))));
    }

    #[test]
    fn test_decode_wrong_schema_is_parse_error() {
        assert!(matches!(decode_config("[1, 2, 3]"), Err(FormatError::Parse(_))));
        assert!(matches!(
            decode_config(r#"{ "renames": ["Bash"] }"#),
            Err(FormatError::Parse(_))
        ));
    }

    #[test]
    fn test_decode_array_document_is_parse_error() {
        // Arrange
        let empty = "[]";
        let positional = r#"[{ "enabled": true, "prefix": "X" }, { "Bash": "痛击" }]"#;

        // Act / Assert
        assert!(matches!(decode_config(empty), Err(FormatError::Parse(_))));
        assert!(matches!(decode_config(positional), Err(FormatError::Parse(_))));
    }

    #[test]
    fn test_decode_scalar_document_is_parse_error() {
        assert!(matches!(decode_config("42"), Err(FormatError::Parse(_))));
        assert!(matches!(decode_config("\"renames\""), Err(FormatError::Parse(_))));
    }

    #[test]
    fn test_decode_array_batch_rules_is_parse_error() {
        let text = r#"{ "batch_rules": [true, "x", ""] }"#;
        assert!(matches!(decode_config(text), Err(FormatError::Parse(_))));
    }

    #[test]
    fn test_decode_null_batch_rules_takes_default() {
        let cfg = decode_config(r#"{ "batch_rules": null }"#).expect("decode");
        assert_eq!(cfg.batch_rule, BatchRule::default());
    }

    #[test]
    fn test_decode_skips_utf8_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(r#"{ "renames": { "Bash": "痛击" } }"#.as_bytes());
        let cfg = decode_config(&bytes).expect("decode");
        assert_eq!(cfg.renames.get("Bash"), Some("痛击"));
    }

    #[test]
    fn test_decode_invalid_utf8_is_parse_error() {
        let bytes: &[u8] = b"{ \"renames\": { \"Bash\": \"\xFF\xFE\" } }";
        assert!(matches!(decode_config(bytes), Err(FormatError::Parse(_))));
    }

    #[test]
    fn test_decode_null_document_is_rejected() {
        assert!(matches!(decode_config("null"), Err(FormatError::NullDocument)));
    }
}
