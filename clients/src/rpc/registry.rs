use crate::api::registry::RegistryAPI;
use crate::rpc::{get, get_client, get_url};
use async_trait::async_trait;
use cosmos_crawler_core::registry::ChainInfo;
use reqwest::Client;
use std::io::Error;
use std::time::Duration;

pub struct RegistryClient {
    client: Client,
    pub base_url: String,
}

impl RegistryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        RegistryClient {
            client: get_client(timeout).unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RegistryAPI for RegistryClient {
    async fn get_chain_info(&self, chain_name: &str) -> Result<ChainInfo, Error> {
        get::<ChainInfo>(
            &self.client,
            &get_url(&self.base_url, &format!("{}/chain.json", chain_name)),
        )
        .await
    }
}
