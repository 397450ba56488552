#[cfg(test)]
mod tests {
    use cosmos_crawler_core::rpc::decode_status;

    #[test]
    fn test_status_fields() {
        let json = r#"
    {
        "result": {
            "node_info": {
                "network": "cosmoshub-4",
                "moniker": "node1"
            },
            "sync_info": {
                "earliest_block_height": "1",
                "latest_block_height": "1000"
            }
        }
    }
    "#;
        let resp = decode_status(json.as_bytes()).unwrap();
        assert_eq!(resp.result.node_info.network, "cosmoshub-4");
        assert_eq!(resp.result.node_info.moniker, "node1");
        assert_eq!(resp.result.sync_info.earliest_block_height, "1");
        assert_eq!(resp.result.sync_info.latest_block_height, "1000");
    }

    #[test]
    fn test_block_times_are_optional() {
        let json = r#"
    {
        "result": {
            "node_info": {"network": "osmosis-1", "moniker": "osmo"},
            "sync_info": {
                "earliest_block_height": "100",
                "latest_block_height": "200",
                "earliest_block_time": "2024-01-01T00:00:00Z",
                "latest_block_time": "2024-06-01T12:30:45.123456789Z"
            }
        }
    }
    "#;
        let resp = decode_status(json.as_bytes()).unwrap();
        assert_eq!(
            resp.result.sync_info.earliest_block_time,
            "2024-01-01T00:00:00Z"
        );
        assert_eq!(
            resp.result.sync_info.latest_block_time,
            "2024-06-01T12:30:45.123456789Z"
        );
        let bare = decode_status(br#"{"result":{}}"#).unwrap();
        assert_eq!(bare.result.sync_info.earliest_block_time, "");
        assert_eq!(bare.result.sync_info.latest_block_time, "");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let resp = decode_status(br#"{"result":{}}"#).unwrap();
        assert_eq!(resp.result.node_info.network, "");
        assert_eq!(resp.result.node_info.moniker, "");
        assert_eq!(resp.result.sync_info.earliest_block_height, "");
        assert_eq!(resp.result.sync_info.latest_block_height, "");
    }

    #[test]
    fn test_wrongly_typed_sections_default_to_empty() {
        let resp =
            decode_status(br#"{"result":{"node_info":[1,2],"sync_info":"soon"}}"#).unwrap();
        assert_eq!(resp.result.node_info.moniker, "");
        assert_eq!(resp.result.sync_info.latest_block_height, "");
    }

    #[test]
    fn test_heights_stay_strings() {
        let json = br#"{"result":{"sync_info":{"earliest_block_height":"000123","latest_block_height":"18446744073709551616"}}}"#;
        let resp = decode_status(json).unwrap();
        assert_eq!(resp.result.sync_info.earliest_block_height, "000123");
        assert_eq!(
            resp.result.sync_info.latest_block_height,
            "18446744073709551616"
        );
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(decode_status(b"not json").is_err());
    }

    #[test]
    fn test_result_wrong_type_fails() {
        assert!(decode_status(br#"{"result":"x"}"#).is_err());
        assert!(decode_status(br#"{"result":null}"#).is_err());
    }
}
