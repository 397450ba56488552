pub mod cli;
use clap::Parser;
use cli::{Cli, RootCommands};
use cosmos_crawler_cli::commands::{crawl_chains, show_endpoints};
use cosmos_crawler_core::config::CrawlerConfig;
use simple_logger::SimpleLogger;
use std::io::Error;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    SimpleLogger::new().env().init().unwrap_or_default();

    let mut config = match &cli.config {
        Some(path) => CrawlerConfig::load(Path::new(path))?,
        None => CrawlerConfig::default(),
    };
    match cli.action {
        RootCommands::Crawl {
            chain,
            depth,
            timeout,
            output,
        } => {
            if let Some(depth) = depth {
                config.max_depth = depth;
            }
            if let Some(timeout) = timeout {
                config.request_timeout = timeout;
            }
            if let Some(output) = output {
                config.output_path = output;
            }
            crawl_chains(&chain, config).await?;
        }
        RootCommands::ShowEndpoints { chain, output } => {
            let output = output.unwrap_or(config.output_path);
            show_endpoints(&output, chain.as_deref())?;
        }
    }
    Ok(())
}
