//! Three-step presigned upload flow for new assets.
//!
//! The DAM issues a presigned storage URL and a process id, the payload
//! is PUT straight to storage, and the process id is confirmed to mint
//! the asset record. The pipeline is strictly sequential: a failure at
//! the presign or storage step aborts the whole operation, and nothing
//! is retried or resumed.

use reqwest::{header, Method, StatusCode};
use serde::Deserialize;

use crate::client::WebdamClient;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct GenerateUploadResponse {
    #[serde(rename = "presignedUrl")]
    presigned_url: Option<String>,
    #[serde(rename = "processId")]
    process_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FinishUploadResponse {
    id: String,
}

impl WebdamClient {
    /// Upload `bytes` as a new asset in `folder_id` and return the id
    /// of the created asset.
    ///
    /// The storage PUT goes to a time-limited, credential-free URL, so
    /// no auth header is attached to it. Storage reports success with
    /// status 100 or 200 exactly; anything else fails the upload.
    pub async fn upload_asset(
        &self,
        bytes: &[u8],
        content_type: &str,
        filename: &str,
        folder_id: &str,
    ) -> Result<String> {
        let ticket = self
            .generate_upload(bytes.len(), filename, content_type, folder_id)
            .await?;

        let presigned_url = ticket
            .presigned_url
            .ok_or_else(|| Error::Upload("could not obtain presigned URL".to_string()))?;
        let process_id = ticket
            .process_id
            .ok_or_else(|| Error::Upload("presign response did not include a process id".to_string()))?;

        tracing::debug!(filename, "uploading asset payload to presigned URL");
        let response = self
            .http
            .put(&presigned_url)
            .header(header::CONTENT_TYPE, content_type)
            .body(bytes.to_vec())
            .send()
            .await?;
        let status = response.status();
        if !matches!(status, StatusCode::CONTINUE | StatusCode::OK) {
            return Err(Error::Upload(format!(
                "upload not confirmed (HTTP {})",
                status.as_u16()
            )));
        }

        self.finish_upload(&process_id).await
    }

    async fn generate_upload(
        &self,
        filesize: usize,
        filename: &str,
        content_type: &str,
        folder_id: &str,
    ) -> Result<GenerateUploadResponse> {
        let filesize = filesize.to_string();
        let response = self
            .authed_request(Method::GET, "/ws/awss3/generateupload")
            .await?
            .query(&[
                ("filesize", filesize.as_str()),
                ("filename", filename),
                ("contenttype", content_type),
                ("folderid", folder_id),
            ])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn finish_upload(&self, process_id: &str) -> Result<String> {
        let path = format!("/ws/awss3/finishupload/{process_id}");
        let response = self
            .authed_request(Method::PUT, &path)
            .await?
            .send()
            .await?
            .error_for_status()?;
        let confirmed: FinishUploadResponse = response.json().await?;
        tracing::debug!(asset_id = %confirmed.id, "upload confirmed");
        Ok(confirmed.id)
    }
}
