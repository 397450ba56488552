use async_trait::async_trait;
use cosmos_crawler_core::registry::ChainInfo;
use std::io::Error;

#[async_trait]
pub trait RegistryAPI {
    async fn get_chain_info(&self, chain_name: &str) -> Result<ChainInfo, Error>;
}
