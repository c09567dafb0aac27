pub mod toast_service;
