use async_trait::async_trait;
use cosmos_crawler_core::rpc::net_info::NetInfoResponse;
use cosmos_crawler_core::rpc::status::StatusResponse;
use std::io::Error;

#[async_trait]
pub trait NodeAPI {
    async fn get_net_info(&self, base_url: &str) -> Result<NetInfoResponse, Error>;
    async fn get_status(&self, base_url: &str) -> Result<StatusResponse, Error>;
}
