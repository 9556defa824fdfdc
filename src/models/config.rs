//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the upstream land-registry search service.
    pub search_api_url: String,
    pub templates_dir: String,
    pub secret: String,
}
