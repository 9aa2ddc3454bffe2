//! Serialization normalizer
//!
//! Converts [`StoreValue`] trees into plain JSON so responses never carry
//! store-internal types:
//!
//! | kind         | output                                      |
//! |--------------|---------------------------------------------|
//! | `Identifier` | its string form                             |
//! | `Timestamp`  | RFC 3339 text, millisecond precision, `Z`   |
//! | `Scalar`     | unchanged                                   |
//! | `Mapping`    | object, keys in original order              |
//! | `Sequence`   | array, elements in original order           |
//!
//! Normalizing already-normalized JSON is a no-op.

use chrono::SecondsFormat;
use serde_json::{Map, Value};

use super::{Document, StoreValue};

/// Normalize a single value.
pub fn normalize(value: StoreValue) -> Value {
    match value {
        StoreValue::Identifier(id) => Value::String(id),
        StoreValue::Timestamp(ts) => {
            Value::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        StoreValue::Scalar(scalar) => scalar,
        StoreValue::Mapping(doc) => normalize_document(doc),
        StoreValue::Sequence(items) => Value::Array(items.into_iter().map(normalize).collect()),
    }
}

/// Normalize a whole document into a JSON object.
pub fn normalize_document(doc: Document) -> Value {
    let mut map = Map::with_capacity(doc.len());
    for (key, value) in doc {
        map.insert(key, normalize(value));
    }
    Value::Object(map)
}

/// Re-normalize JSON. Plain JSON only contains scalars, mappings and
/// sequences, so this returns its input unchanged.
pub fn normalize_json(value: Value) -> Value {
    normalize(StoreValue::from(value))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn sample() -> StoreValue {
        let created = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        let mut detail = Document::new();
        detail.insert("overview", StoreValue::text("text"));
        detail.insert(
            "seen",
            StoreValue::Sequence(vec![
                StoreValue::Timestamp(created),
                StoreValue::Identifier("65a1f0c2e4b0a1b2c3d4e5f6".into()),
            ]),
        );

        let mut doc = Document::new();
        doc.insert("_id", StoreValue::Identifier("65a1f0c2e4b0a1b2c3d4e5f7".into()));
        doc.insert("zeta", StoreValue::Scalar(json!(3)));
        doc.insert("alpha", StoreValue::boolean(false));
        doc.insert("detail", StoreValue::Mapping(detail));
        doc.insert("created_at", StoreValue::Timestamp(created));
        doc.insert("note", StoreValue::null());
        StoreValue::Mapping(doc)
    }

    #[test]
    fn converts_identifiers_and_timestamps() {
        let out = normalize(sample());

        assert_eq!(out["_id"], json!("65a1f0c2e4b0a1b2c3d4e5f7"));
        assert_eq!(out["created_at"], json!("2024-05-17T09:30:00.000Z"));
        assert_eq!(
            out["detail"]["seen"],
            json!(["2024-05-17T09:30:00.000Z", "65a1f0c2e4b0a1b2c3d4e5f6"])
        );
    }

    #[test]
    fn leaves_scalars_untouched() {
        let out = normalize(sample());

        assert_eq!(out["zeta"], json!(3));
        assert_eq!(out["alpha"], json!(false));
        assert_eq!(out["note"], Value::Null);
        assert_eq!(out["detail"]["overview"], json!("text"));
    }

    #[test]
    fn preserves_key_and_element_order() {
        let out = normalize(sample());
        let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["_id", "zeta", "alpha", "detail", "created_at", "note"]);
        assert_eq!(
            out["detail"]["seen"][1],
            json!("65a1f0c2e4b0a1b2c3d4e5f6")
        );
    }

    #[test]
    fn normalizing_twice_is_a_no_op() {
        let once = normalize(sample());
        let twice = normalize_json(once.clone());

        assert_eq!(once, twice);
        assert_eq!(
            serde_json::to_string(&once).unwrap(),
            serde_json::to_string(&twice).unwrap()
        );
    }

    #[test]
    fn passthrough_scalars_survive_untouched() {
        // Store-specific scalars arrive already rendered as extended JSON.
        let decimal = json!({"$numberDecimal": "1.50"});
        let out = normalize(StoreValue::Scalar(decimal.clone()));
        assert_eq!(out, decimal);
    }
}
