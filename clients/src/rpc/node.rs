use crate::api::node::NodeAPI;
use crate::rpc::{get_bytes, get_client, get_url};
use async_trait::async_trait;
use cosmos_crawler_core::rpc::net_info::NetInfoResponse;
use cosmos_crawler_core::rpc::status::StatusResponse;
use cosmos_crawler_core::rpc::{decode_net_info, decode_status};
use reqwest::Client;
use std::io::Error;
use std::time::Duration;

/// Client for the Tendermint RPC surface of an arbitrary node. One client is
/// shared across the whole crawl; the target node is passed per call.
pub struct NodeClient {
    client: Client,
}

impl NodeClient {
    pub fn new(timeout: Duration) -> Self {
        NodeClient {
            client: get_client(timeout).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl NodeAPI for NodeClient {
    async fn get_net_info(&self, base_url: &str) -> Result<NetInfoResponse, Error> {
        let body = get_bytes(&self.client, &get_url(base_url, "net_info")).await?;
        decode_net_info(&body)
    }
    async fn get_status(&self, base_url: &str) -> Result<StatusResponse, Error> {
        let body = get_bytes(&self.client, &get_url(base_url, "status")).await?;
        decode_status(&body)
    }
}
