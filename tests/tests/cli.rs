#[cfg(test)]
mod tests {
    use clap::Parser;
    use cosmos_crawler_cli::cli::{Cli, RootCommands};

    #[test]
    fn test_crawl_args() {
        let cli = Cli::try_parse_from([
            "cosmos_crawler",
            "crawl",
            "--chain",
            "cosmoshub",
            "--chain",
            "osmosis",
            "--depth",
            "2",
        ])
        .unwrap();
        match cli.action {
            RootCommands::Crawl {
                chain,
                depth,
                timeout,
                output,
            } => {
                assert_eq!(chain, vec!["cosmoshub".to_string(), "osmosis".to_string()]);
                assert_eq!(depth, Some(2));
                assert_eq!(timeout, None);
                assert_eq!(output, None);
            }
            _ => panic!("expected crawl subcommand"),
        }
    }

    #[test]
    fn test_crawl_requires_a_chain() {
        assert!(Cli::try_parse_from(["cosmos_crawler", "crawl"]).is_err());
    }

    #[test]
    fn test_show_endpoints_args() {
        let cli = Cli::try_parse_from([
            "cosmos_crawler",
            "show-endpoints",
            "--chain",
            "cosmoshub",
            "--output",
            "other.json",
        ])
        .unwrap();
        match cli.action {
            RootCommands::ShowEndpoints { chain, output } => {
                assert_eq!(chain.as_deref(), Some("cosmoshub"));
                assert_eq!(output.as_deref(), Some("other.json"));
            }
            _ => panic!("expected show-endpoints subcommand"),
        }
    }
}
