use async_trait::async_trait;
use cosmos_crawler_core::rest::LatestBlockResponse;
use std::io::Error;
use std::time::Duration;

#[async_trait]
pub trait RestAPI {
    async fn get_latest_block(&self, base_url: &str) -> Result<LatestBlockResponse, Error>;
    async fn is_healthy(&self, base_url: &str, window: Duration) -> bool;
}
