//! Typed records for the Webdam API's JSON payloads.
//!
//! Decoding is tolerant: absent keys stay `None` (or empty), unknown
//! keys are ignored. Encoding omits absent fields, so a decoded record
//! re-encodes to an equivalent payload.

mod asset;
mod folder;
mod group;
mod lightbox;
mod notification;
mod user;

pub use asset::Asset;
pub use folder::{Folder, MiniFolder};
pub use group::Group;
pub use lightbox::Lightbox;
pub use notification::Notification;
pub use user::{MiniUser, User};
