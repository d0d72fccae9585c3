//! Responsive layout breakpoints, as minimum viewport widths in CSS pixels.

pub const MOBILE_MIN_WIDTH: u32 = 375;
pub const TABLET_MIN_WIDTH: u32 = 744;
pub const DESKTOP_MIN_WIDTH: u32 = 1200;
