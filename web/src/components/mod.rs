pub mod fields;
pub mod save_button;
pub mod sidebar;
pub mod spinner;
pub mod toast_zone;
