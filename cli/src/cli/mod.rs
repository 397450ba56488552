use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, value_name = "Path to a crawler config file")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub action: RootCommands,
}

#[derive(Debug, Subcommand)]
pub enum RootCommands {
    #[command(about = "Crawls the peer graph of one or more chains and records healthy endpoints", long_about = None)]
    Crawl {
        #[arg(short, long, required = true)]
        chain: Vec<String>,
        #[arg(short, long)]
        depth: Option<usize>,
        #[arg(short, long)]
        timeout: Option<u64>,
        #[arg(short, long)]
        output: Option<String>,
    },
    #[command(about = "Prints the healthy endpoints recorded in the endpoints file", long_about = None)]
    ShowEndpoints {
        #[arg(short, long)]
        chain: Option<String>,
        #[arg(short, long)]
        output: Option<String>,
    },
}
