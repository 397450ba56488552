use crate::api::rest::RestAPI;
use crate::rpc::{get, get_client, get_url};
use async_trait::async_trait;
use cosmos_crawler_core::rest::LatestBlockResponse;
use log::debug;
use reqwest::Client;
use std::io::Error;
use std::time::Duration;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub const LATEST_BLOCK_PATH: &str = "cosmos/base/tendermint/v1beta1/blocks/latest";

/// Candidate REST bases for an RPC endpoint. Providers that name their RPC
/// host with `rpc` usually serve REST under `rest`, `lcd` or `api`; anything
/// else falls back to the default LCD port and plain TLS on the same host.
pub fn generate_rest_urls(rpc_url: &str) -> Vec<String> {
    if rpc_url.contains("rpc") {
        // only the first occurrence: hosts like rpc.rpcpool.com keep their name
        vec![
            rpc_url.replacen("rpc", "rest", 1),
            rpc_url.replacen("rpc", "lcd", 1),
            rpc_url.replacen("rpc", "api", 1),
        ]
    } else {
        let host = host_of(rpc_url);
        vec![
            format!("http://{}:1317", host),
            format!("https://{}:443", host),
        ]
    }
}

fn host_of(url: &str) -> &str {
    let without_scheme = url.split("://").nth(1).unwrap_or(url);
    let authority = without_scheme.split('/').next().unwrap_or(without_scheme);
    authority.split(':').next().unwrap_or(authority)
}

pub struct RestClient {
    client: Client,
}

impl RestClient {
    pub fn new(timeout: Duration) -> Self {
        RestClient {
            client: get_client(timeout).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl RestAPI for RestClient {
    async fn get_latest_block(&self, base_url: &str) -> Result<LatestBlockResponse, Error> {
        get::<LatestBlockResponse>(&self.client, &get_url(base_url, LATEST_BLOCK_PATH)).await
    }

    async fn is_healthy(&self, base_url: &str, window: Duration) -> bool {
        let resp = match self.get_latest_block(base_url).await {
            Ok(resp) => resp,
            Err(e) => {
                debug!("Error checking REST endpoint at {}: {}", base_url, e);
                return false;
            }
        };
        match OffsetDateTime::parse(&resp.block.header.time, &Rfc3339) {
            Ok(block_time) => {
                let age = OffsetDateTime::now_utc() - block_time;
                age.whole_seconds() < window.as_secs() as i64
            }
            Err(e) => {
                debug!("Bad block time from {}: {}", base_url, e);
                false
            }
        }
    }
}
