use crate::probe::error::ProbeError;
use crate::probe::request::RetrievalRequest;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{info, warn};
use reqwest::Client;
use std::path::Path;
use tokio_util::io::StreamReader;

/// Base URL used when `CDSAPI_URL` and `~/.cdsapirc` do not specify one.
pub const DEFAULT_CDS_URL: &str = "https://cds.climate.copernicus.eu/api";

/// The retrieval-client seam. The prober only depends on this trait;
/// transport, authentication, and any timeout behavior live behind it.
#[async_trait]
pub trait Retrieve {
    /// Retrieves `request` from `dataset`, writing the artifact to `target`.
    async fn retrieve(
        &self,
        dataset: &str,
        request: &RetrievalRequest,
        target: &Path,
    ) -> Result<(), ProbeError>;
}

/// HTTP client for the Copernicus Climate Data Store download API.
pub struct CdsClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl CdsClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolves credentials the way the official CDS clients do: the
    /// `CDSAPI_URL` / `CDSAPI_KEY` environment variables first, then the
    /// `~/.cdsapirc` file.
    pub fn from_ambient() -> Result<Self, ProbeError> {
        if let Ok(key) = std::env::var("CDSAPI_KEY") {
            let url =
                std::env::var("CDSAPI_URL").unwrap_or_else(|_| DEFAULT_CDS_URL.to_string());
            return Ok(Self::new(url, key));
        }

        let rc_path = dirs::home_dir()
            .map(|home| home.join(".cdsapirc"))
            .ok_or(ProbeError::Credentials)?;
        if !rc_path.exists() {
            return Err(ProbeError::Credentials);
        }
        let contents = std::fs::read_to_string(&rc_path)
            .map_err(|e| ProbeError::CredentialsRead(rc_path.clone(), e))?;
        let (url, key) = parse_cdsapirc(&contents).ok_or(ProbeError::Credentials)?;
        Ok(Self::new(
            url.unwrap_or_else(|| DEFAULT_CDS_URL.to_string()),
            key,
        ))
    }
}

/// Extracts `url:` and `key:` entries from a `.cdsapirc` file. Returns
/// `None` when no key is present.
fn parse_cdsapirc(contents: &str) -> Option<(Option<String>, String)> {
    let mut url = None;
    let mut key = None;
    for line in contents.lines() {
        let Some((field, value)) = line.split_once(':') else {
            continue;
        };
        match field.trim() {
            "url" => url = Some(value.trim().to_string()),
            "key" => key = Some(value.trim().to_string()),
            _ => {}
        }
    }
    key.map(|key| (url, key))
}

#[async_trait]
impl Retrieve for CdsClient {
    async fn retrieve(
        &self,
        dataset: &str,
        request: &RetrievalRequest,
        target: &Path,
    ) -> Result<(), ProbeError> {
        let url = format!(
            "{}/resources/{}",
            self.base_url.trim_end_matches('/'),
            dataset
        );
        info!("Requesting {} from {}", dataset, url);

        let response = self
            .http
            .post(&url)
            .header("PRIVATE-TOKEN", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ProbeError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ProbeError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    ProbeError::NetworkRequest(url, e)
                });
            }
        };

        let stream = response
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));
        let mut reader = StreamReader::new(stream);
        let mut file = tokio::fs::File::create(target)
            .await
            .map_err(|e| ProbeError::ArtifactWrite(target.to_path_buf(), e))?;
        let bytes = tokio::io::copy(&mut reader, &mut file)
            .await
            .map_err(|e| ProbeError::ArtifactWrite(target.to_path_buf(), e))?;

        info!("Downloaded {} bytes to {}", bytes, target.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_and_key_from_cdsapirc() {
        let contents = "url: https://cds.climate.copernicus.eu/api\nkey: abcdef-123456\n";
        let (url, key) = parse_cdsapirc(contents).unwrap();
        assert_eq!(url.as_deref(), Some("https://cds.climate.copernicus.eu/api"));
        assert_eq!(key, "abcdef-123456");
    }

    #[test]
    fn key_alone_is_sufficient() {
        let (url, key) = parse_cdsapirc("key: only-a-key\n").unwrap();
        assert!(url.is_none());
        assert_eq!(key, "only-a-key");
    }

    #[test]
    fn missing_key_yields_none() {
        assert!(parse_cdsapirc("url: https://example.org/api\n").is_none());
        assert!(parse_cdsapirc("").is_none());
    }

    #[test]
    fn unrelated_lines_are_ignored() {
        let contents = "# comment\nverify: 1\nkey: k\n";
        let (_, key) = parse_cdsapirc(contents).unwrap();
        assert_eq!(key, "k");
    }
}
