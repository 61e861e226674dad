//! # Query Layer
//!
//! The three query shapes shared by every contract:
//!
//! | Shape | Store call | Miss / failure |
//! |-------|------------|----------------|
//! | Point | `get_state` | `NotFound` |
//! | Range | `get_state_by_range` | `Store` |
//! | Selector | `get_query_result` | `Query` |
//!
//! Range and selector results serialize as `[{"Key": k, "Record": r}, ...]`
//! with each record embedded verbatim. Values that are not JSON are embedded
//! as JSON strings. The listing is always a well-formed
//! JSON array, `[]` when nothing matched.

use crate::errors::{ContractError, StoreError};
use crate::ports::{BoxedStateIterator, RecordStore};
use serde::Serialize;
use serde_json::value::{to_raw_value, RawValue};
use serde_json::{Map, Value};
use tracing::debug;

// =============================================================================
// SELECTOR
// =============================================================================

/// Field name carrying a record's declared type.
pub const DOC_TYPE_FIELD: &str = "docType";

/// Structured predicate evaluated by the store over a record's fields.
///
/// All constraints are string equalities and must hold together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    constraints: Vec<(String, String)>,
}

impl Selector {
    /// Selector matching records whose declared type is `doc_type`.
    pub fn of_type(doc_type: impl Into<String>) -> Self {
        Self {
            constraints: vec![(DOC_TYPE_FIELD.to_string(), doc_type.into())],
        }
    }

    /// Add a field equality constraint.
    #[must_use]
    pub fn field_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.constraints.push((field.into(), value.into()));
        self
    }

    /// Evaluate the selector against a decoded record.
    #[must_use]
    pub fn matches(&self, record: &Value) -> bool {
        self.constraints.iter().all(|(field, expected)| {
            record
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|actual| actual == expected)
        })
    }

    /// Query document in the `{"selector": {...}}` form accepted by document
    /// stores.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut fields = Map::new();
        for (field, value) in &self.constraints {
            fields.insert(field.clone(), Value::String(value.clone()));
        }
        let mut root = Map::new();
        root.insert("selector".to_string(), Value::Object(fields));
        Value::Object(root).to_string()
    }
}

// =============================================================================
// LISTINGS
// =============================================================================

/// Which part of each matched entry a listing carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// `{"Key": k, "Record": r}`
    KeysAndRecords,
    /// `{"Key": k}`
    KeysOnly,
}

#[derive(Serialize)]
struct QueryRecord {
    #[serde(rename = "Key")]
    key: String,
    #[serde(rename = "Record", skip_serializing_if = "Option::is_none")]
    record: Option<Box<RawValue>>,
}

/// Embed a stored value as-is, or as a JSON string when it is not JSON.
fn embed_record(key: &str, value: Vec<u8>) -> Result<Box<RawValue>, StoreError> {
    let text = match String::from_utf8(value) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    };
    match RawValue::from_string(text.clone()) {
        Ok(raw) => Ok(raw),
        Err(_) => {
            debug!(key, "Stored value is not JSON, embedding as text");
            Ok(to_raw_value(&text)?)
        }
    }
}

/// Drain a cursor into a serialized listing.
///
/// The cursor is owned here and dropped on every exit path.
fn collect_listing(
    iterator: BoxedStateIterator,
    projection: Projection,
) -> Result<Vec<u8>, StoreError> {
    let mut entries = Vec::new();
    for item in iterator {
        let kv = item?;
        let record = match projection {
            Projection::KeysAndRecords => Some(embed_record(&kv.key, kv.value)?),
            Projection::KeysOnly => None,
        };
        entries.push(QueryRecord {
            key: kv.key,
            record,
        });
    }
    Ok(serde_json::to_vec(&entries)?)
}

/// Point query: the raw record stored under `key`.
///
/// An empty stored value is treated as absent.
pub async fn point_lookup(
    store: &dyn RecordStore,
    key: &str,
    entity: &str,
) -> Result<Vec<u8>, ContractError> {
    match store.get_state(key).await? {
        Some(bytes) if !bytes.is_empty() => Ok(bytes),
        _ => Err(ContractError::NotFound(format!(
            "Invalid key. Expecting {entity}"
        ))),
    }
}

/// Range query over `[start, end)` in ascending key order.
pub async fn range_listing(
    store: &dyn RecordStore,
    start: &str,
    end: &str,
    projection: Projection,
) -> Result<Vec<u8>, ContractError> {
    let iterator = store.get_state_by_range(start, end).await?;
    let listing = collect_listing(iterator, projection)?;
    debug!(
        start,
        end,
        listing = %String::from_utf8_lossy(&listing),
        "Range query completed"
    );
    Ok(listing)
}

/// Selector query; any failure is reported as a query error.
pub async fn selector_listing(
    store: &dyn RecordStore,
    selector: &Selector,
) -> Result<Vec<u8>, ContractError> {
    let query = selector.to_query_string();
    debug!(query = %query, "Running selector query");

    let iterator = store
        .get_query_result(selector)
        .await
        .map_err(|e| ContractError::Query(e.to_string()))?;
    let listing = collect_listing(iterator, Projection::KeysAndRecords)
        .map_err(|e| ContractError::Query(e.to_string()))?;

    debug!(
        listing = %String::from_utf8_lossy(&listing),
        "Selector query completed"
    );
    Ok(listing)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::KeyValue;
    use serde_json::json;

    fn kv(key: &str, value: &str) -> Result<KeyValue, StoreError> {
        Ok(KeyValue {
            key: key.to_string(),
            value: value.as_bytes().to_vec(),
        })
    }

    #[test]
    fn test_selector_query_string() {
        let selector = Selector::of_type("lab").field_eq("armOwner", "owner01");
        let query: Value = serde_json::from_str(&selector.to_query_string()).unwrap();
        assert_eq!(query["selector"]["docType"], "lab");
        assert_eq!(query["selector"]["armOwner"], "owner01");
    }

    #[test]
    fn test_selector_matches_all_constraints() {
        let selector = Selector::of_type("lab").field_eq("armOwner", "owner01");
        assert!(selector.matches(&json!({"docType": "lab", "armOwner": "owner01"})));
        assert!(!selector.matches(&json!({"docType": "lab", "armOwner": "OWNER01"})));
        assert!(!selector.matches(&json!({"armOwner": "owner01"})));
    }

    #[test]
    fn test_listing_embeds_records_verbatim() {
        let iter: BoxedStateIterator = Box::new(
            vec![kv("ASSET1", r#"{"type":"box"}"#), kv("ASSET2", r#"{"type":"crate"}"#)]
                .into_iter(),
        );
        let listing = collect_listing(iter, Projection::KeysAndRecords).unwrap();
        assert_eq!(
            String::from_utf8(listing).unwrap(),
            r#"[{"Key":"ASSET1","Record":{"type":"box"}},{"Key":"ASSET2","Record":{"type":"crate"}}]"#
        );
    }

    #[test]
    fn test_listing_embeds_foreign_values_as_text() {
        let iter: BoxedStateIterator = Box::new(
            vec![kv("ASSET1", r#"{"type":"box"}"#), kv("ASSET2", "legacy-text")].into_iter(),
        );
        let listing = collect_listing(iter, Projection::KeysAndRecords).unwrap();
        assert_eq!(
            String::from_utf8(listing).unwrap(),
            r#"[{"Key":"ASSET1","Record":{"type":"box"}},{"Key":"ASSET2","Record":"legacy-text"}]"#
        );
    }

    #[test]
    fn test_keys_only_listing() {
        let iter: BoxedStateIterator = Box::new(vec![kv("ASSET1", "{}")].into_iter());
        let listing = collect_listing(iter, Projection::KeysOnly).unwrap();
        assert_eq!(String::from_utf8(listing).unwrap(), r#"[{"Key":"ASSET1"}]"#);
    }

    #[test]
    fn test_empty_listing_is_well_formed() {
        let iter: BoxedStateIterator = Box::new(Vec::<Result<KeyValue, StoreError>>::new().into_iter());
        let listing = collect_listing(iter, Projection::KeysAndRecords).unwrap();
        assert_eq!(listing, b"[]".to_vec());
    }

    #[test]
    fn test_listing_stops_on_cursor_error() {
        let iter: BoxedStateIterator = Box::new(
            vec![
                kv("ASSET1", "{}"),
                Err(StoreError::Query("cursor lost".to_string())),
            ]
            .into_iter(),
        );
        assert!(collect_listing(iter, Projection::KeysOnly).is_err());
    }
}
