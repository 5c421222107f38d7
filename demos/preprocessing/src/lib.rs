//! Resources inlined into the binary at build time
//!
//! - [`IMAGE`]: the bytes of `res/image.png`
//! - [`TEXT`]: the contents of `res/text.txt`
//! - [`read_image_info`]: header-level PNG inspection of the inlined image

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod png;

pub use png::{ImageInfo, PngError, read_image_info};

/// `res/image.png`, embedded at compile time.
pub const IMAGE: &[u8] = include_bytes!("../res/image.png");

/// `res/text.txt`, embedded at compile time.
pub const TEXT: &str = include_str!("../res/text.txt");
