pub mod api;
pub mod configuration;
pub mod controller;
pub mod form;
pub mod panel;
pub mod theme_override;
