//! webdam-client - Async client for the Webdam DAM REST API
//!
//! Wraps the service's OAuth2 password/refresh-token authentication, its
//! folder, asset, search, and metadata endpoints, and the three-step
//! presigned upload flow behind one [`WebdamClient`]. JSON responses
//! decode into the typed records in [`models`].
//!
//! ```no_run
//! use webdam_client::{WebdamClient, WebdamConfig};
//!
//! # async fn run() -> webdam_client::Result<()> {
//! let client = WebdamClient::new(WebdamConfig::new(
//!     "user", "password", "client-id", "client-secret",
//! ))?;
//! for folder in client.top_level_folders().await? {
//!     println!("{:?}", folder.name);
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
mod upload;
mod util;

#[cfg(test)]
mod testutil;

pub use auth::AuthState;
pub use client::{
    AssetList, AssetPatch, AssetQuery, EditAssetOutcome, NotificationList, NotificationQuery,
    SortBy, SortDirection, WebdamClient, XmpField,
};
pub use config::{WebdamConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::{Asset, Folder, Group, Lightbox, MiniFolder, MiniUser, Notification, User};
