use crate::rpc::ok_or_default;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerOther {
    #[serde(default, deserialize_with = "ok_or_default")]
    pub rpc_address: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerNodeInfo {
    #[serde(default, deserialize_with = "ok_or_default")]
    pub other: PeerOther,
}

/// One entry of a node's `net_info` peer list. Both leaves are optional from
/// the schema's perspective and decode to `""` when absent.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    #[serde(default, deserialize_with = "ok_or_default")]
    pub node_info: PeerNodeInfo,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub remote_ip: String,
}

impl Peer {
    pub fn rpc_address(&self) -> &str {
        &self.node_info.other.rpc_address
    }

    /// The crawlable HTTP URL for this peer. Nodes advertise their RPC
    /// endpoint as `tcp://0.0.0.0:26657`; the scheme becomes `http://` and
    /// the wildcard host is replaced with the observed remote address.
    pub fn dial_url(&self) -> String {
        self.rpc_address()
            .replace("tcp://", "http://")
            .replace("0.0.0.0", &self.remote_ip)
    }
}

fn parse_peers<'de, D>(deserializer: D) -> Result<Vec<Peer>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|v| Peer::deserialize(v).unwrap_or_default())
        .collect())
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetInfoResult {
    // peers must be present and an array, elements degrade individually
    #[serde(deserialize_with = "parse_peers")]
    pub peers: Vec<Peer>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetInfoResponse {
    pub result: NetInfoResult,
}
