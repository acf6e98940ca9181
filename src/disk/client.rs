use super::{DiskApiError, DiskResult};
use crate::config::DiskConfig;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// HTTP client bound to one session configuration
#[derive(Debug, Clone)]
pub struct DiskClient {
    http: reqwest::Client,
    config: DiskConfig,
}

/// Percent-encode a path-like query value
fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

impl DiskClient {
    pub fn new(config: DiskConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &DiskConfig {
        &self.config
    }

    /// Full URL for an API path such as `/resources?path=...`
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    fn default_headers(&self) -> DiskResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("OAuth {}", self.config.token()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn request(&self, method: Method, path: &str) -> DiskResult<Value> {
        self.request_with_headers(method, path, HeaderMap::new()).await
    }

    /// Issue a request; `extra` headers are applied after the defaults
    pub async fn request_with_headers(
        &self,
        method: Method,
        path: &str,
        extra: HeaderMap,
    ) -> DiskResult<Value> {
        let url = self.url_for(path);
        let mut headers = self.default_headers()?;
        for (name, value) in extra.iter() {
            headers.insert(name.clone(), value.clone());
        }

        debug!("{} {}", method, url);
        let response = self
            .http
            .request(method, &url)
            .headers(headers)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            warn!("Yandex.Disk API returned {} for {}", status, url);
            return Err(DiskApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
                body,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Disk totals: space used, trash size, system folders
    pub async fn get_disk_info(&self) -> DiskResult<Value> {
        self.request(Method::GET, "/").await
    }

    pub async fn get_metadata(&self, path: &str) -> DiskResult<Value> {
        self.request(Method::GET, &format!("/resources?path={}", encode(path)))
            .await
    }

    /// Flat listing of every file on the disk
    pub async fn list_files(&self, limit: u64, offset: u64) -> DiskResult<Value> {
        self.request(
            Method::GET,
            &format!("/resources/files?limit={}&offset={}", limit, offset),
        )
        .await
    }

    pub async fn create_folder(&self, path: &str) -> DiskResult<Value> {
        self.request(Method::PUT, &format!("/resources?path={}", encode(path)))
            .await
    }

    /// Returns an upload link; the file body itself goes to that link
    pub async fn get_upload_url(&self, path: &str, overwrite: bool) -> DiskResult<Value> {
        self.request(
            Method::GET,
            &format!(
                "/resources/upload?path={}&overwrite={}",
                encode(path),
                overwrite
            ),
        )
        .await
    }

    pub async fn get_download_url(&self, path: &str) -> DiskResult<Value> {
        self.request(
            Method::GET,
            &format!("/resources/download?path={}", encode(path)),
        )
        .await
    }

    /// Move to trash, or remove outright when `permanently` is set
    pub async fn delete_resource(&self, path: &str, permanently: bool) -> DiskResult<Value> {
        self.request(
            Method::DELETE,
            &format!(
                "/resources?path={}&permanently={}",
                encode(path),
                permanently
            ),
        )
        .await
    }

    pub async fn copy_resource(&self, from: &str, to: &str, overwrite: bool) -> DiskResult<Value> {
        self.request(
            Method::POST,
            &format!(
                "/resources/copy?from={}&path={}&overwrite={}",
                encode(from),
                encode(to),
                overwrite
            ),
        )
        .await
    }

    pub async fn move_resource(&self, from: &str, to: &str, overwrite: bool) -> DiskResult<Value> {
        self.request(
            Method::POST,
            &format!(
                "/resources/move?from={}&path={}&overwrite={}",
                encode(from),
                encode(to),
                overwrite
            ),
        )
        .await
    }

    pub async fn get_last_uploaded(&self, limit: u64) -> DiskResult<Value> {
        self.request(
            Method::GET,
            &format!("/resources/last-uploaded?limit={}", limit),
        )
        .await
    }
}
