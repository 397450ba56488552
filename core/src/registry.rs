use crate::rpc::ok_or_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    #[serde(default, deserialize_with = "ok_or_default")]
    pub address: String,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub provider: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apis {
    #[serde(default, deserialize_with = "ok_or_default")]
    pub rpc: Vec<ApiEndpoint>,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub rest: Vec<ApiEndpoint>,
}

/// Subset of the chain-registry `chain.json` document needed to seed a
/// crawl. Unknown fields are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    #[serde(default, deserialize_with = "ok_or_default")]
    pub chain_name: String,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub pretty_name: String,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub apis: Apis,
}
