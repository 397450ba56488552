use crate::rpc::ok_or_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusNodeInfo {
    #[serde(default, deserialize_with = "ok_or_default")]
    pub network: String,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub moniker: String,
}

/// Block-height progress metadata for a node's local chain state. Heights
/// are decimal strings on the wire and stay strings here.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncInfo {
    #[serde(default, deserialize_with = "ok_or_default")]
    pub earliest_block_height: String,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub latest_block_height: String,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub earliest_block_time: String,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub latest_block_time: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResult {
    #[serde(default, deserialize_with = "ok_or_default")]
    pub node_info: StatusNodeInfo,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub sync_info: SyncInfo,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub result: StatusResult,
}
