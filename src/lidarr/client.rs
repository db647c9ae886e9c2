use reqwest::{Client, RequestBuilder};

/// HTTP client for a single Lidarr instance.
///
/// Wraps a shared `reqwest::Client` together with the API base URL and
/// the static API key, so the key is injected exactly once at
/// construction instead of living in global state.
pub struct LidarrClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl LidarrClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
        }
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http
            .get(format!("{}{}", self.base_url, path))
            .header("X-Api-Key", self.api_key.as_str())
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(format!("{}{}", self.base_url, path))
            .header("X-Api-Key", self.api_key.as_str())
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.http
            .put(format!("{}{}", self.base_url, path))
            .header("X-Api-Key", self.api_key.as_str())
    }
}
