//! Upload limits and image compression presets.

use crate::domain::Category;

/// Largest image accepted for upload (5 MiB)
pub const MAX_IMAGE_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Sub images per activity, banner excluded
pub const MAX_SUB_IMAGE_COUNT: usize = 4;

/// Categories offered in forms and filters, in display order
pub const CATEGORIES: [Category; 6] = Category::ALL;

/// Target of client-side image compression before upload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageCompressionPreset {
    /// Output size ceiling in megabytes
    pub max_size_mb: f32,
    /// Longest edge in pixels
    pub max_width_or_height: u32,
    /// Encoder quality, 0.0..=1.0
    pub initial_quality: f32,
}

pub const BANNER_IMAGE_PRESET: ImageCompressionPreset = ImageCompressionPreset {
    max_size_mb: 1.0,
    max_width_or_height: 1920,
    initial_quality: 0.8,
};

pub const SUB_IMAGE_PRESET: ImageCompressionPreset = ImageCompressionPreset {
    max_size_mb: 0.5,
    max_width_or_height: 1280,
    initial_quality: 0.8,
};

pub const PROFILE_IMAGE_PRESET: ImageCompressionPreset = ImageCompressionPreset {
    max_size_mb: 0.2,
    max_width_or_height: 512,
    initial_quality: 0.7,
};
