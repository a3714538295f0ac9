//! Public TheAudioDB API client.
//!
//! This module provides the reqwest-backed [`ApiClient`] for the free
//! TheAudioDB v1 JSON API. No authentication is required beyond the API key
//! path segment.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::{self, DeserializeOwned, Unexpected};
use serde_json::Value;
use tracing::{debug, warn};

use super::client::{ApiClient, ApiResponse};
use crate::config::ApiConfig;
use crate::error::{AudioDbError, Result};
use crate::models::{Album, Artist, Track};

const USER_AGENT: &str = concat!("audiodb-view/", env!("CARGO_PKG_VERSION"));

/// Public TheAudioDB API client.
///
/// # Example
///
/// ```rust,no_run
/// use audiodb_view::{ApiClient, ApiConfig, AudioDbApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = AudioDbApi::new(ApiConfig::default())?;
///     let response = api.search_artist("Taylor Swift").await?;
///     println!("{} artists", response.items.unwrap_or_default().len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AudioDbApi {
    client: Client,
    root: Url,
}

impl AudioDbApi {
    /// Create a new client from `config`.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let root = Url::parse(&config.api_root()?)
            .map_err(|e| AudioDbError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout);
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { client, root })
    }

    /// Absolute URL for an endpoint such as `search.php`.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        self.root
            .join(endpoint)
            .map_err(|e| AudioDbError::InvalidUrl(format!("{}: {}", endpoint, e)))
    }

    /// Make a GET request with query parameters and pull the list stored
    /// under `key` out of the body.
    async fn get_api_with_params<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        key: &str,
    ) -> Result<ApiResponse<T>> {
        let url = self.endpoint_url(endpoint)?;
        debug!("GET {} with params: {:?}", url, params);

        let response = self.client.get(url).query(params).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("TheAudioDB returned {} for {}", status, endpoint);
            return Ok(ApiResponse::unsuccessful());
        }

        let data: Value = response.json().await?;
        parse_list(&data, key)
    }
}

/// Extract the list under `key`.
///
/// A null or missing field yields `items: None`. Records that fail to decode
/// are skipped; a field that is not a list at all is a parse error.
pub(crate) fn parse_list<T: DeserializeOwned>(data: &Value, key: &str) -> Result<ApiResponse<T>> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(ApiResponse::empty()),
        Some(Value::Array(entries)) => {
            let items = entries
                .iter()
                .filter_map(|entry| match serde_json::from_value::<T>(entry.clone()) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        warn!("Skipping malformed {} record: {}", key, e);
                        None
                    }
                })
                .collect();
            Ok(ApiResponse::ok(items))
        }
        Some(other) => {
            let found = match other {
                Value::Bool(b) => Unexpected::Bool(*b),
                Value::String(s) => Unexpected::Str(s),
                Value::Object(_) => Unexpected::Map,
                _ => Unexpected::Other("number"),
            };
            Err(AudioDbError::ParseError(de::Error::invalid_type(found, &"a list")))
        }
    }
}

#[async_trait]
impl ApiClient for AudioDbApi {
    async fn search_artist(&self, name: &str) -> Result<ApiResponse<Artist>> {
        self.get_api_with_params("search.php", &[("s", name)], "artists")
            .await
    }

    async fn search_albums(&self, artist_name: &str) -> Result<ApiResponse<Album>> {
        self.get_api_with_params("searchalbum.php", &[("s", artist_name)], "album")
            .await
    }

    async fn get_album_tracks(&self, album_id: &str) -> Result<ApiResponse<Track>> {
        self.get_api_with_params("track.php", &[("m", album_id)], "track")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response and hand back the request head.
    async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{}/api/v1/json", addr), handle)
    }

    fn api_for(base_url: &str) -> AudioDbApi {
        AudioDbApi::new(
            ApiConfig::default()
                .with_base_url(base_url)
                .without_system_proxy(),
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_url() {
        let api = AudioDbApi::new(ApiConfig::default()).unwrap();
        let url = api.endpoint_url("searchalbum.php").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.theaudiodb.com/api/v1/json/2/searchalbum.php"
        );
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let result = AudioDbApi::new(ApiConfig::default().with_base_url("not a url"));
        assert!(matches!(result, Err(AudioDbError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_list_null_and_missing() {
        let null: ApiResponse<Artist> = parse_list(&json!({ "artists": null }), "artists").unwrap();
        assert_eq!(null, ApiResponse::empty());

        let missing: ApiResponse<Artist> = parse_list(&json!({}), "artists").unwrap();
        assert_eq!(missing, ApiResponse::empty());
    }

    #[test]
    fn test_parse_list_skips_malformed_records() {
        let data = json!({
            "track": [
                { "idTrack": "1", "strTrack": "Welcome to New York", "intDuration": "212600" },
                { "strTrack": "missing id" },
                { "idTrack": "3", "strTrack": "Style" }
            ]
        });
        let response: ApiResponse<Track> = parse_list(&data, "track").unwrap();
        let items = response.items.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Welcome to New York");
        assert_eq!(items[1].id, "3");
    }

    #[test]
    fn test_parse_list_rejects_non_list() {
        let result = parse_list::<Album>(&json!({ "album": "nope" }), "album");
        match result {
            Err(AudioDbError::ParseError(e)) => {
                assert!(e.to_string().contains("expected a list"), "{}", e);
            }
            other => panic!("expected parse error, got {:?}", other),
        }

        let result = parse_list::<Album>(&json!({ "album": { "idAlbum": "1" } }), "album");
        assert!(matches!(result, Err(AudioDbError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_search_artist_over_http() {
        let body = r#"{"artists":[{"idArtist":"111239","strArtist":"Taylor Swift","strGenre":"Pop"}]}"#;
        let (base_url, server) = serve_once("200 OK", body).await;

        let response = api_for(&base_url).search_artist("Taylor Swift").await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /api/v1/json/2/search.php?s=Taylor+Swift "));
        assert!(response.success);
        let artists = response.items.unwrap();
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Taylor Swift");
    }

    #[tokio::test]
    async fn test_get_album_tracks_query() {
        let (base_url, server) = serve_once("200 OK", r#"{"track":null}"#).await;

        let response = api_for(&base_url).get_album_tracks("2115888").await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /api/v1/json/2/track.php?m=2115888 "));
        assert_eq!(response, ApiResponse::empty());
    }

    #[tokio::test]
    async fn test_server_error_is_unsuccessful() {
        let (base_url, server) = serve_once("500 Internal Server Error", "{}").await;

        let response = api_for(&base_url).search_albums("Taylor Swift").await.unwrap();
        server.await.unwrap();

        assert_eq!(response, ApiResponse::unsuccessful());
    }

    #[tokio::test]
    async fn test_invalid_json_is_transport_error() {
        let (base_url, server) = serve_once("200 OK", "<html>").await;

        let result = api_for(&base_url).search_albums("Taylor Swift").await;
        server.await.unwrap();

        assert!(matches!(result, Err(AudioDbError::RequestError(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = api_for(&format!("http://{}", addr)).search_artist("x").await;
        assert!(matches!(result, Err(AudioDbError::RequestError(_))));
    }
}
