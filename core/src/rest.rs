use crate::rpc::ok_or_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    #[serde(default, deserialize_with = "ok_or_default")]
    pub height: String,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub time: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, deserialize_with = "ok_or_default")]
    pub header: BlockHeader,
}

/// Response of `/cosmos/base/tendermint/v1beta1/blocks/latest`, used to
/// judge whether a candidate REST endpoint is serving fresh blocks.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestBlockResponse {
    #[serde(default, deserialize_with = "ok_or_default")]
    pub block: Block,
}
