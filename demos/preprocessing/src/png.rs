//! PNG header inspection.
//!
//! Only the signature and the leading `IHDR` chunk are read and validated;
//! pixel data is never decoded.

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
const IHDR_TYPE: &[u8; 4] = b"IHDR";
const IHDR_LEN: u32 = 13;

/// Image properties from the `IHDR` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PngError {
    #[error("input too short for a PNG header: {len} bytes")]
    TooShort { len: usize },
    #[error("not a PNG file: bad signature")]
    BadSignature,
    #[error("first chunk is not a valid IHDR")]
    MissingHeader,
    #[error("IHDR checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    BadChecksum { stored: u32, computed: u32 },
    #[error("invalid image dimension {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
    #[error("unsupported PNG header: {0}")]
    Unsupported(&'static str),
}

/// Read the image size and format from PNG bytes.
///
/// # Errors
/// - [`PngError::TooShort`] if the input ends before the end of the `IHDR` chunk
/// - [`PngError::BadSignature`] if the 8-byte PNG signature does not match
/// - [`PngError::MissingHeader`] if the first chunk is not a 13-byte `IHDR`
/// - [`PngError::BadChecksum`] if the `IHDR` CRC does not match its contents
/// - [`PngError::InvalidDimension`] if width or height is zero or above `i32::MAX`
/// - [`PngError::Unsupported`] for invalid bit depth, color type, compression,
///   filter or interlace values
pub fn read_image_info(bytes: &[u8]) -> Result<ImageInfo, PngError> {
    let too_short = PngError::TooShort { len: bytes.len() };

    let (signature, rest) = bytes.split_first_chunk::<8>().ok_or(too_short.clone())?;
    if *signature != SIGNATURE {
        return Err(PngError::BadSignature);
    }

    let (length, rest) = rest.split_first_chunk::<4>().ok_or(too_short.clone())?;
    let (kind, rest) = rest.split_first_chunk::<4>().ok_or(too_short.clone())?;
    if u32::from_be_bytes(*length) != IHDR_LEN || kind != IHDR_TYPE {
        return Err(PngError::MissingHeader);
    }

    let (data, rest) = rest.split_first_chunk::<13>().ok_or(too_short.clone())?;
    let (crc, _) = rest.split_first_chunk::<4>().ok_or(too_short)?;

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(kind);
    hasher.update(data);
    let computed = hasher.finalize();
    let stored = u32::from_be_bytes(*crc);
    if stored != computed {
        return Err(PngError::BadChecksum { stored, computed });
    }

    let [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression, filter, interlace] =
        *data;

    let width = u32::from_be_bytes([w0, w1, w2, w3]);
    let height = u32::from_be_bytes([h0, h1, h2, h3]);
    if !valid_dimension(width) || !valid_dimension(height) {
        return Err(PngError::InvalidDimension { width, height });
    }

    check_depth_and_color(bit_depth, color_type)?;
    if compression != 0 {
        return Err(PngError::Unsupported("compression method"));
    }
    if filter != 0 {
        return Err(PngError::Unsupported("filter method"));
    }
    if interlace > 1 {
        return Err(PngError::Unsupported("interlace method"));
    }

    tracing::debug!(width, height, bit_depth, color_type, "read PNG header");
    Ok(ImageInfo {
        width,
        height,
        bit_depth,
        color_type,
    })
}

fn valid_dimension(value: u32) -> bool {
    value != 0 && i32::try_from(value).is_ok()
}

fn check_depth_and_color(bit_depth: u8, color_type: u8) -> Result<(), PngError> {
    let allowed: &[u8] = match color_type {
        0 => &[1, 2, 4, 8, 16],
        3 => &[1, 2, 4, 8],
        2 | 4 | 6 => &[8, 16],
        _ => return Err(PngError::Unsupported("color type")),
    };
    if allowed.contains(&bit_depth) {
        Ok(())
    } else {
        Err(PngError::Unsupported("bit depth for color type"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Header {
        width: u32,
        height: u32,
        fields: [u8; 5],
    }

    impl Header {
        const fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                fields: [8, 6, 0, 0, 0],
            }
        }

        const fn fields(mut self, fields: [u8; 5]) -> Self {
            self.fields = fields;
            self
        }

        /// Signature plus a complete `IHDR` chunk with a correct CRC.
        fn encode(&self) -> Vec<u8> {
            let mut chunk = IHDR_TYPE.to_vec();
            chunk.extend_from_slice(&self.width.to_be_bytes());
            chunk.extend_from_slice(&self.height.to_be_bytes());
            chunk.extend_from_slice(&self.fields);

            let mut bytes = SIGNATURE.to_vec();
            bytes.extend_from_slice(&IHDR_LEN.to_be_bytes());
            bytes.extend_from_slice(&chunk);
            bytes.extend_from_slice(&crc32fast::hash(&chunk).to_be_bytes());
            bytes
        }
    }

    #[test]
    fn reads_dimensions() {
        let bytes = Header::new(640, 480).encode();
        assert_eq!(bytes.len(), 33);
        let info = read_image_info(&bytes).unwrap();
        assert_eq!(
            info,
            ImageInfo {
                width: 640,
                height: 480,
                bit_depth: 8,
                color_type: 6,
            }
        );
    }

    #[test]
    fn rejects_short_input() {
        assert_eq!(read_image_info(b"\x89PN"), Err(PngError::TooShort { len: 3 }));

        let mut truncated = Header::new(1, 1).encode();
        truncated.truncate(20);
        assert_eq!(
            read_image_info(&truncated),
            Err(PngError::TooShort { len: 20 })
        );
    }

    #[test]
    fn rejects_missing_crc_bytes() {
        let mut bytes = Header::new(24, 16).encode();
        bytes.truncate(29);
        assert_eq!(read_image_info(&bytes), Err(PngError::TooShort { len: 29 }));
    }

    #[test]
    fn rejects_bad_crc() {
        let mut bytes = Header::new(24, 16).encode();
        bytes[29..33].copy_from_slice(&[0, 0, 0, 0]);
        assert!(matches!(
            read_image_info(&bytes),
            Err(PngError::BadChecksum { stored: 0, .. })
        ));
    }

    #[test]
    fn rejects_bad_signature() {
        let mut bytes = Header::new(1, 1).encode();
        bytes[1] = b'J';
        assert_eq!(read_image_info(&bytes), Err(PngError::BadSignature));
    }

    #[test]
    fn rejects_other_first_chunk() {
        let mut bytes = Header::new(1, 1).encode();
        bytes[12..16].copy_from_slice(b"IDAT");
        assert_eq!(read_image_info(&bytes), Err(PngError::MissingHeader));
    }

    #[test]
    fn rejects_zero_dimension() {
        assert_eq!(
            read_image_info(&Header::new(0, 5).encode()),
            Err(PngError::InvalidDimension { width: 0, height: 5 })
        );
    }

    #[test]
    fn rejects_dimension_above_i32_max() {
        assert_eq!(
            read_image_info(&Header::new(u32::MAX, 5).encode()),
            Err(PngError::InvalidDimension {
                width: u32::MAX,
                height: 5
            })
        );
        let limit = u32::try_from(i32::MAX).unwrap();
        assert!(read_image_info(&Header::new(limit, 1).encode()).is_ok());
        assert!(read_image_info(&Header::new(1, limit + 1).encode()).is_err());
    }

    #[test]
    fn rejects_invalid_depth_for_color_type() {
        let rgb_depth_3 = Header::new(24, 16).fields([3, 2, 0, 0, 0]).encode();
        assert_eq!(
            read_image_info(&rgb_depth_3),
            Err(PngError::Unsupported("bit depth for color type"))
        );
        let palette_16 = Header::new(24, 16).fields([16, 3, 0, 0, 0]).encode();
        assert!(read_image_info(&palette_16).is_err());
        let gray_1 = Header::new(24, 16).fields([1, 0, 0, 0, 0]).encode();
        assert!(read_image_info(&gray_1).is_ok());
    }

    #[test]
    fn rejects_unknown_color_type() {
        let bytes = Header::new(24, 16).fields([8, 5, 0, 0, 0]).encode();
        assert_eq!(
            read_image_info(&bytes),
            Err(PngError::Unsupported("color type"))
        );
    }

    #[test]
    fn rejects_unknown_methods() {
        let compression = Header::new(1, 1).fields([8, 6, 1, 0, 0]).encode();
        assert_eq!(
            read_image_info(&compression),
            Err(PngError::Unsupported("compression method"))
        );
        let filter = Header::new(1, 1).fields([8, 6, 0, 1, 0]).encode();
        assert_eq!(
            read_image_info(&filter),
            Err(PngError::Unsupported("filter method"))
        );
        let interlace = Header::new(1, 1).fields([8, 6, 0, 0, 2]).encode();
        assert_eq!(
            read_image_info(&interlace),
            Err(PngError::Unsupported("interlace method"))
        );
        let adam7 = Header::new(1, 1).fields([8, 6, 0, 0, 1]).encode();
        assert!(read_image_info(&adam7).is_ok());
    }
}
