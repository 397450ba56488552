use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::Path;

/// Healthy endpoints discovered for one chain, in discovery order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthyNodes {
    #[serde(default)]
    pub rpc: Vec<String>,
    #[serde(default)]
    pub rest: Vec<String>,
}

impl HealthyNodes {
    pub fn next_rpc(&mut self) -> Result<String, Error> {
        Self::rotate(&mut self.rpc, "rpc")
    }

    pub fn next_rest(&mut self) -> Result<String, Error> {
        Self::rotate(&mut self.rest, "rest")
    }

    // round robin: take the front, requeue it at the back
    fn rotate(nodes: &mut Vec<String>, kind: &str) -> Result<String, Error> {
        if nodes.is_empty() {
            Err(Error::new(
                ErrorKind::NotFound,
                format!("No healthy {} nodes available", kind),
            ))
        } else {
            let node = nodes.remove(0);
            nodes.push(node.clone());
            Ok(node)
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainEndpoints {
    #[serde(default)]
    pub endpoints: HealthyNodes,
}

/// Persisted model of `endpoints.json`. Writing one chain's crawl result
/// replaces only that chain's entry and preserves the others.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointsFile {
    #[serde(default)]
    pub chains: HashMap<String, ChainEndpoints>,
}

impl EndpointsFile {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let bytes = std::fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            Error::new(
                ErrorKind::InvalidData,
                format!("Failed to Parse Endpoints File {}: {}", path.display(), e),
            )
        })
    }

    pub fn load_or_default(path: &Path) -> Result<Self, Error> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn insert(&mut self, chain_name: &str, nodes: HealthyNodes) {
        self.chains
            .insert(chain_name.to_string(), ChainEndpoints { endpoints: nodes });
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::new(ErrorKind::InvalidData, format!("{:?}", e)))?;
        std::fs::write(path, json)
    }
}
