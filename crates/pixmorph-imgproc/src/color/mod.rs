mod gray;
pub use gray::{gray_from_rgb, grayscale, rgb_from_gray};
