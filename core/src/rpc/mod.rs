pub mod net_info;
pub mod status;

use crate::rpc::net_info::NetInfoResponse;
use crate::rpc::status::StatusResponse;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::io::{Error, ErrorKind};

/// Leaf-level tolerance for node responses: a missing or wrongly-typed value
/// decodes to the field's default instead of failing the whole document.
/// Container-shape violations (`result` not an object, `peers` not an array)
/// still fail the decode.
pub fn ok_or_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + Default,
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

pub fn decode_net_info(bytes: &[u8]) -> Result<NetInfoResponse, Error> {
    serde_json::from_slice(bytes).map_err(|e| {
        Error::new(
            ErrorKind::InvalidData,
            format!("Failed to Parse NetInfo Response: {}", e),
        )
    })
}

pub fn decode_status(bytes: &[u8]) -> Result<StatusResponse, Error> {
    serde_json::from_slice(bytes).map_err(|e| {
        Error::new(
            ErrorKind::InvalidData,
            format!("Failed to Parse Status Response: {}", e),
        )
    })
}
