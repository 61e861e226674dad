//! # Record Persistence
//!
//! Whole-record read-modify-write helpers. Every mutation reads the full
//! entity, changes it in memory and writes the full entity back.

use crate::errors::{ContractError, StoreError};
use crate::ports::RecordStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Read and decode the record under `key`.
///
/// Returns `None` when the key is absent or holds an empty value.
pub async fn read_record<T: DeserializeOwned>(
    store: &dyn RecordStore,
    key: &str,
) -> Result<Option<T>, ContractError> {
    match store.get_state(key).await? {
        Some(bytes) if !bytes.is_empty() => {
            let record = serde_json::from_slice(&bytes).map_err(StoreError::from)?;
            Ok(Some(record))
        }
        _ => Ok(None),
    }
}

/// Read the record under `key`, treating absence as the zero-valued record.
pub async fn read_or_default<T: DeserializeOwned + Default>(
    store: &dyn RecordStore,
    key: &str,
) -> Result<T, ContractError> {
    Ok(read_record(store, key).await?.unwrap_or_default())
}

/// Encode and write `record` under `key`, replacing any previous value.
///
/// Returns the bytes written.
pub async fn write_record<T: Serialize>(
    store: &dyn RecordStore,
    key: &str,
    record: &T,
) -> Result<Vec<u8>, ContractError> {
    let bytes = serde_json::to_vec(record).map_err(StoreError::from)?;
    store.put_state(key, bytes.clone()).await?;
    Ok(bytes)
}

/// Deserialize a field that older records may store as `null`.
///
/// Use with `#[serde(deserialize_with = "null_as_default")]` on list fields.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
