//! Static configuration tables.

pub mod breakpoints;
pub mod routes;
pub mod upload;

pub use breakpoints::{DESKTOP_MIN_WIDTH, MOBILE_MIN_WIDTH, TABLET_MIN_WIDTH};
pub use routes::Route;
pub use upload::{
    BANNER_IMAGE_PRESET, CATEGORIES, ImageCompressionPreset, MAX_IMAGE_FILE_SIZE_BYTES,
    MAX_SUB_IMAGE_COUNT, PROFILE_IMAGE_PRESET, SUB_IMAGE_PRESET,
};
