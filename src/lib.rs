#[macro_use]
extern crate lazy_static;

pub mod notification;
pub mod privacy;
pub mod theme;
pub mod user;
pub mod utils;

/// Fields the server sent that the portal does not render. They are kept
/// as-is so that a loaded entity can be submitted back without loss.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

