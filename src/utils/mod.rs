pub mod data_url;
pub mod error_message;
pub mod media_url;
pub mod toggle;
