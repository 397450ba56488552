#[cfg(test)]
mod tests {
    use cosmos_crawler_clients::rpc::rest::generate_rest_urls;
    use cosmos_crawler_core::rest::LatestBlockResponse;

    #[test]
    fn test_rpc_named_hosts_substitute_rest_names() {
        let urls = generate_rest_urls("https://rpc.cosmos.network");
        assert_eq!(
            urls,
            vec![
                "https://rest.cosmos.network".to_string(),
                "https://lcd.cosmos.network".to_string(),
                "https://api.cosmos.network".to_string(),
            ]
        );
    }

    #[test]
    fn test_only_first_rpc_occurrence_is_rewritten() {
        let urls = generate_rest_urls("https://rpc.rpcpool.com");
        assert_eq!(
            urls,
            vec![
                "https://rest.rpcpool.com".to_string(),
                "https://lcd.rpcpool.com".to_string(),
                "https://api.rpcpool.com".to_string(),
            ]
        );
    }

    #[test]
    fn test_other_hosts_fall_back_to_default_ports() {
        let urls = generate_rest_urls("http://203.0.113.7:26657");
        assert_eq!(
            urls,
            vec![
                "http://203.0.113.7:1317".to_string(),
                "https://203.0.113.7:443".to_string(),
            ]
        );
    }

    #[test]
    fn test_latest_block_decode() {
        let json = r#"
    {
        "block_id": {"hash": "abcd"},
        "block": {
            "header": {
                "chain_id": "cosmoshub-4",
                "height": "21360000",
                "time": "2024-06-01T12:30:45.123456789Z"
            }
        }
    }
    "#;
        let resp: LatestBlockResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.block.header.height, "21360000");
        assert_eq!(resp.block.header.time, "2024-06-01T12:30:45.123456789Z");
    }

    #[test]
    fn test_latest_block_missing_header_defaults() {
        let resp: LatestBlockResponse = serde_json::from_str(r#"{"block":{}}"#).unwrap();
        assert_eq!(resp.block.header.time, "");
    }
}
