pub mod node;
pub mod registry;
pub mod rest;

use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::io::{Error, ErrorKind};
use std::time::Duration;

fn _version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
fn _pkg_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

pub fn version() -> String {
    format!("{}: {}", _pkg_name(), _version())
}

#[test]
fn test_version() {
    println!("{}", version());
}

pub fn get_url(base_url: &str, request_uri: &str) -> String {
    format!(
        "{base_url}/{request_uri}",
        base_url = base_url.trim_end_matches('/'),
        request_uri = request_uri
    )
}

pub fn get_client(timeout: Duration) -> Result<Client, Error> {
    ClientBuilder::new()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::new(ErrorKind::Other, format!("{:?}", e)))
}

pub async fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>, Error> {
    match client.get(url).send().await {
        Ok(resp) => match resp.status() {
            reqwest::StatusCode::OK => resp
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(|e| Error::new(ErrorKind::InvalidData, e.to_string())),
            _ => Err(Error::new(
                ErrorKind::InvalidData,
                format!("Bad Status Code: {:?}, for URL {:?}", resp.status(), url),
            )),
        },
        Err(err) => Err(Error::new(ErrorKind::InvalidData, format!("{:?}", err))),
    }
}

pub async fn get<T>(client: &Client, url: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let body = get_bytes(client, url).await?;
    serde_json::from_slice(&body).map_err(|e| {
        Error::new(
            ErrorKind::InvalidData,
            format!("Failed to Parse Json from {}: {}", url, e),
        )
    })
}
