//! Switch-style form fields carry `0`/`1` while the API speaks booleans.

pub const TOGGLE_OFF: u8 = 0;
pub const TOGGLE_ON: u8 = 1;

pub fn to_toggle(value: bool) -> u8 {
    if value {
        TOGGLE_ON
    } else {
        TOGGLE_OFF
    }
}

/// Any non-zero toggle value reads as enabled.
pub fn to_bool(toggle: u8) -> bool {
    toggle != TOGGLE_OFF
}
