use cosmos_crawler_clients::api::node::NodeAPI;
use cosmos_crawler_clients::api::registry::RegistryAPI;
use cosmos_crawler_clients::api::rest::RestAPI;
use cosmos_crawler_clients::rpc::node::NodeClient;
use cosmos_crawler_clients::rpc::registry::RegistryClient;
use cosmos_crawler_clients::rpc::rest::{generate_rest_urls, RestClient};
use cosmos_crawler_core::config::CrawlerConfig;
use cosmos_crawler_core::endpoints::{EndpointsFile, HealthyNodes};
use dashmap::DashSet;
use futures_util::future::{join_all, BoxFuture};
use log::{error, info};
use std::io::{Error, ErrorKind};
use std::path::Path;
use std::time::Duration;
use tokio::sync::Mutex;

/// Walks a chain's peer graph breadth-first from the registry's RPC seeds,
/// recording every node that answers `status` and then probing REST
/// candidates for each healthy RPC node.
pub struct NetworkCrawler {
    node_client: NodeClient,
    rest_client: RestClient,
    registry_client: RegistryClient,
    visited: DashSet<String>,
    healthy: Mutex<HealthyNodes>,
    config: CrawlerConfig,
}

impl NetworkCrawler {
    pub fn new(config: CrawlerConfig) -> Self {
        let timeout = Duration::from_secs(config.request_timeout);
        NetworkCrawler {
            node_client: NodeClient::new(timeout),
            rest_client: RestClient::new(timeout),
            registry_client: RegistryClient::new(&config.registry_url, timeout),
            visited: DashSet::new(),
            healthy: Mutex::new(HealthyNodes::default()),
            config,
        }
    }

    pub async fn run(&self, chain_name: &str) -> Result<HealthyNodes, Error> {
        let chain_info = self.registry_client.get_chain_info(chain_name).await?;
        if chain_info.apis.rpc.is_empty() {
            return Err(Error::new(
                ErrorKind::NotFound,
                format!("No registry RPC endpoints for {}", chain_name),
            ));
        }
        for api in &chain_info.apis.rpc {
            if !api.address.is_empty() {
                self.crawl_network(api.address.clone(), 0).await;
            }
        }
        self.find_rest_endpoints().await;
        Ok(self.healthy.lock().await.clone())
    }

    pub fn crawl_network(&self, base_url: String, depth: usize) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            if depth > self.config.max_depth {
                return;
            }
            let net_info = match self.node_client.get_net_info(&base_url).await {
                Ok(resp) => resp,
                Err(e) => {
                    error!("Error fetching {}/net_info: {}", base_url, e);
                    return;
                }
            };
            match self.node_client.get_status(&base_url).await {
                Ok(status) => {
                    let result = &status.result;
                    info!(
                        "Node: {} ({} on {})",
                        base_url, result.node_info.moniker, result.node_info.network
                    );
                    info!(
                        "Earliest Block Height: {}",
                        result.sync_info.earliest_block_height
                    );
                    info!(
                        "Earliest Block Time: {}",
                        result.sync_info.earliest_block_time
                    );
                    self.healthy
                        .lock()
                        .await
                        .rpc
                        .push(base_url.trim_end_matches('/').to_string());
                }
                Err(e) => {
                    error!("Error fetching {}/status: {}", base_url, e);
                }
            }
            let mut crawls = Vec::new();
            for peer in &net_info.result.peers {
                let rpc_address = peer.dial_url();
                if rpc_address.is_empty() || !self.visited.insert(rpc_address.clone()) {
                    continue;
                }
                crawls.push(async move {
                    info!("Crawling: {}", rpc_address);
                    self.crawl_network(rpc_address, depth + 1).await;
                });
            }
            join_all(crawls).await;
        })
    }

    pub async fn find_rest_endpoints(&self) {
        let window = Duration::from_secs(self.config.rest_freshness_window);
        let rpc_urls = self.healthy.lock().await.rpc.clone();
        for rpc_url in rpc_urls {
            for rest_url in generate_rest_urls(&rpc_url) {
                if self.rest_client.is_healthy(&rest_url, window).await {
                    self.healthy.lock().await.rest.push(rest_url);
                    break;
                }
            }
        }
    }
}

pub async fn crawl_chains(chains: &[String], config: CrawlerConfig) -> Result<(), Error> {
    let output_path = config.output_path.clone();
    let mut endpoints = EndpointsFile::load_or_default(Path::new(&output_path))?;
    for chain_name in chains {
        let crawler = NetworkCrawler::new(config.clone());
        let healthy = match crawler.run(chain_name).await {
            Ok(healthy) => healthy,
            Err(e) => {
                error!("No chain info found for {}: {}", chain_name, e);
                continue;
            }
        };
        info!(
            "Crawling complete for {}: {} rpc, {} rest",
            chain_name,
            healthy.rpc.len(),
            healthy.rest.len()
        );
        endpoints.insert(chain_name, healthy);
        endpoints.save(Path::new(&output_path))?;
    }
    Ok(())
}

pub fn show_endpoints(output_path: &str, chain: Option<&str>) -> Result<(), Error> {
    let endpoints = EndpointsFile::load(Path::new(output_path))?;
    for (chain_name, chain_endpoints) in &endpoints.chains {
        if let Some(chain) = chain {
            if chain != chain_name.as_str() {
                continue;
            }
        }
        println!("{}:", chain_name);
        for url in &chain_endpoints.endpoints.rpc {
            println!("  rpc:  {}", url);
        }
        for url in &chain_endpoints.endpoints.rest {
            println!("  rest: {}", url);
        }
    }
    Ok(())
}
