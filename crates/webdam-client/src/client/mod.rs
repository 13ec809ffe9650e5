//! HTTP client for the Webdam REST API.
//!
//! Every operation follows the same template: ensure a usable access
//! token, issue the request with the default headers, check the status,
//! decode the JSON body into typed records. Transport and HTTP errors
//! propagate unchanged; nothing is retried.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::auth::{self, AuthState, TokenState};
use crate::config::{normalize_base_url, WebdamConfig, USER_AGENT};
use crate::error::Result;
use crate::models::{Asset, Folder, Notification};

/// Client for the Webdam DAM REST API.
///
/// All mutable state (token, expiry, refresh token) is scoped to the
/// instance, so independent instances never share a session. Concurrent
/// callers on one instance serialize through the internal token lock;
/// wrap the client in an [`Arc`](std::sync::Arc) to share it across
/// tasks.
pub struct WebdamClient {
    pub(crate) http: reqwest::Client,
    config: WebdamConfig,
    auth: Mutex<TokenState>,
}

impl fmt::Debug for WebdamClient {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("WebdamClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WebdamClient {
    /// Build a client with its own HTTP transport.
    pub fn new(config: WebdamConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Self::with_http_client(config, http)
    }

    /// Build a client on a caller-supplied [`reqwest::Client`].
    ///
    /// Useful for custom proxy or TLS settings. Keep in mind that the
    /// upload flow PUTs whole payloads to storage in one request, so a
    /// transport-wide timeout will bound the largest uploadable file.
    pub fn with_http_client(mut config: WebdamConfig, http: reqwest::Client) -> Result<Self> {
        config.base_url = normalize_base_url(&config.base_url)?;
        Ok(Self {
            http,
            config,
            auth: Mutex::new(TokenState::default()),
        })
    }

    /// Base URL this client was configured with.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Ensure a usable access token, authenticating or refreshing if
    /// needed, and return the resulting state snapshot.
    pub async fn ensure_authenticated(&self) -> Result<AuthState> {
        let mut state = self.auth.lock().await;
        auth::ensure_token(&self.http, &self.config, &mut state).await?;
        Ok(state.snapshot())
    }

    /// Read-only snapshot of the current token state. Validity is
    /// recomputed against the clock on every call.
    pub async fn auth_state(&self) -> AuthState {
        self.auth.lock().await.snapshot()
    }

    /// Inject an externally obtained access token.
    ///
    /// Marks the session as manually managed: once this token expires
    /// the client will renew it with the refresh-token grant when
    /// `refresh_token` was given, but it will never fall back to the
    /// password grant.
    pub async fn set_manual_token(
        &self,
        access_token: impl Into<String>,
        expires_at: i64,
        refresh_token: Option<String>,
    ) {
        self.auth
            .lock()
            .await
            .set_manual(access_token.into(), expires_at, refresh_token);
    }

    /// Account subscription details, untyped because the service mixes
    /// string and number scalars in this payload.
    pub async fn account_subscription_details(&self) -> Result<Value> {
        let response = self
            .authed_request(Method::GET, "/subscription")
            .await?
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch one folder, including any child folders the service inlines.
    pub async fn folder(&self, folder_id: &str) -> Result<Folder> {
        let path = format!("/folders/{folder_id}");
        let response = self
            .authed_request(Method::GET, &path)
            .await?
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// List the account's top-level folders.
    pub async fn top_level_folders(&self) -> Result<Vec<Folder>> {
        let response = self
            .authed_request(Method::GET, "/folders/0")
            .await?
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// List a folder's assets and child folders.
    pub async fn folder_assets(&self, folder_id: &str, query: &AssetQuery) -> Result<AssetList> {
        let path = format!("/folders/{folder_id}/assets");
        let response = self
            .authed_request(Method::GET, &path)
            .await?
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch one asset.
    pub async fn asset(&self, asset_id: &str) -> Result<Asset> {
        let path = format!("/assets/{asset_id}");
        let response = self
            .authed_request(Method::GET, &path)
            .await?
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch several assets in one call.
    ///
    /// An empty id list returns an empty vec without touching the
    /// network.
    pub async fn assets_by_id(&self, asset_ids: &[&str]) -> Result<Vec<Asset>> {
        if asset_ids.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .authed_request(Method::GET, "/assets/list")
            .await?
            .query(&[("ids", asset_ids.join(","))])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Search assets across the account.
    pub async fn search_assets(&self, query: &AssetQuery) -> Result<AssetList> {
        let response = self
            .authed_request(Method::GET, "/search")
            .await?
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Download an asset's binary contents.
    ///
    /// Returns raw bytes and the content type reported by the service.
    pub async fn download_asset(&self, asset_id: &str) -> Result<(Vec<u8>, Option<String>)> {
        let path = format!("/assets/{asset_id}/download");
        let response = self
            .authed_request(Method::GET, &path)
            .await?
            .send()
            .await?
            .error_for_status()?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        let bytes = response.bytes().await?;
        Ok((bytes.to_vec(), content_type))
    }

    /// Raw XMP metadata attached to an asset.
    pub async fn asset_xmp_metadata(&self, asset_id: &str) -> Result<Value> {
        let path = format!("/assets/{asset_id}/metadatas/xmp");
        let response = self
            .authed_request(Method::GET, &path)
            .await?
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Replace XMP metadata fields on an asset. `metadata` is the field
    /// map to store, keyed the way [`active_xmp_fields`] keys the schema.
    ///
    /// [`active_xmp_fields`]: WebdamClient::active_xmp_fields
    pub async fn edit_asset_xmp_metadata(&self, asset_id: &str, metadata: &Value) -> Result<Value> {
        let path = format!("/assets/{asset_id}/metadatas/xmp");
        let response = self
            .authed_request(Method::PUT, &path)
            .await?
            .json(metadata)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Active fields of the account's XMP metadata schema, keyed
    /// `xmp_{field}` with the field name lowercased.
    pub async fn active_xmp_fields(&self) -> Result<BTreeMap<String, XmpField>> {
        let response = self
            .authed_request(Method::GET, "/metadataschemas/xmp")
            .await?
            .query(&[("full", "1")])
            .send()
            .await?
            .error_for_status()?;
        let schema: XmpSchemaResponse = response.json().await?;

        let mut fields = BTreeMap::new();
        for row in schema.xmpschema {
            if row.status.as_deref() != Some("active") {
                continue;
            }
            let Some(field) = row.field else { continue };
            fields.insert(
                format!("xmp_{}", field.to_lowercase()),
                XmpField {
                    name: row.name,
                    label: row.label,
                    field_type: row.field_type,
                },
            );
        }
        Ok(fields)
    }

    /// Apply edits to an asset's core fields.
    ///
    /// A 409 from the service means required metadata fields are still
    /// unset for the asset's folder; that is reported as
    /// [`EditAssetOutcome::MetadataIncomplete`], not as an error.
    pub async fn edit_asset(&self, asset_id: &str, patch: &AssetPatch) -> Result<EditAssetOutcome> {
        let path = format!("/assets/{asset_id}");
        let response = self
            .authed_request(Method::PUT, &path)
            .await?
            .json(patch)
            .send()
            .await?;
        if response.status() == StatusCode::CONFLICT {
            return Ok(EditAssetOutcome::MetadataIncomplete);
        }
        let response = response.error_for_status()?;
        Ok(EditAssetOutcome::Updated(response.json().await?))
    }

    /// Queue assets for a packaged download.
    pub async fn queue_asset_download(&self, asset_ids: &[&str]) -> Result<Value> {
        let response = self
            .authed_request(Method::POST, "/assets/queuedownload")
            .await?
            .json(&serde_json::json!({ "assetIds": asset_ids }))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Poll a queued download by the key returned from
    /// [`queue_asset_download`](WebdamClient::queue_asset_download).
    pub async fn download_from_queue(&self, download_key: &str) -> Result<Value> {
        let path = format!("/downloadfromqueue/{download_key}");
        let response = self
            .authed_request(Method::GET, &path)
            .await?
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// List activity notifications for the authenticated account.
    pub async fn notifications(&self, query: &NotificationQuery) -> Result<NotificationList> {
        let response = self
            .authed_request(Method::GET, "/notifications")
            .await?
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Ensure a token and start a request with the default headers all
    /// authenticated calls carry.
    pub(crate) async fn authed_request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder> {
        let token = {
            let mut state = self.auth.lock().await;
            auth::ensure_token(&self.http, &self.config, &mut state).await?
        };
        Ok(self
            .http
            .request(method, format!("{}{path}", self.config.base_url))
            .bearer_auth(token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json"))
    }
}

/// Sort field accepted by the asset listing and search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Filename,
    Filesize,
    Datecreated,
    Datemodified,
}

/// Sort direction accepted by the asset listing and search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Query parameters for [`WebdamClient::folder_assets`] and
/// [`WebdamClient::search_assets`]. Unset fields are omitted from the
/// query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetQuery {
    /// Free-text search terms; only meaningful for the search endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortby: Option<SortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortdir: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Comma-separated asset type filter, e.g. `"image,audiovideo"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
}

/// Query parameters for [`WebdamClient::notifications`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Envelope returned by the folder-assets listing and search endpoints.
///
/// `folders` and `items` are mapped to typed records; the other envelope
/// keys pass through untouched, keeping whatever scalar types the
/// service used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<Folder>,
    pub items: Vec<Asset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<Value>,
}

/// Envelope returned by the notifications endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<Value>,
    pub items: Vec<Notification>,
}

/// Editable core fields for [`WebdamClient::edit_asset`]. Unset fields
/// are left out of the request body and untouched on the asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folderid: Option<String>,
}

/// Outcome of [`WebdamClient::edit_asset`].
#[derive(Debug, Clone, PartialEq)]
pub enum EditAssetOutcome {
    /// The edit was accepted; the service returned the updated asset.
    Updated(Asset),
    /// The service rejected the edit with 409 because required metadata
    /// fields are not yet filled in.
    MetadataIncomplete,
}

/// One active field of the account's XMP metadata schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmpField {
    pub name: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmpSchemaResponse {
    #[serde(default)]
    xmpschema: Vec<XmpSchemaRow>,
}

#[derive(Debug, Deserialize)]
struct XmpSchemaRow {
    field: Option<String>,
    name: Option<String>,
    label: Option<String>,
    #[serde(rename = "type")]
    field_type: Option<String>,
    status: Option<String>,
}
