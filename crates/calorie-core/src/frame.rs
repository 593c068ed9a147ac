//! Camera frame conversion.
//!
//! Cameras hand out frames as NV21: a full-resolution luma plane followed by
//! a half-resolution plane of interleaved V/U chroma pairs. This module turns
//! such a frame into an [`RgbImage`] and encodes images as JPEG.

use std::io::Cursor;

use image::{RgbImage, codecs::jpeg::JpegEncoder};

/// Errors raised while converting or encoding frames.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum FrameError {
    /// Width or height is zero or odd.
    #[display("invalid frame dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Frame width in pixels.
        width: u32,
        /// Frame height in pixels.
        height: u32,
    },
    /// A buffer does not have the length the dimensions require.
    #[display("invalid buffer length: expected {expected} bytes, got {actual}")]
    BufferSize {
        /// Required length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// JPEG encoding failed.
    #[display("failed to encode JPEG: {_0}")]
    #[from]
    Encode(#[error(source)] image::ImageError),
}

/// A frame in NV21 layout.
///
/// # Examples
///
/// ```
/// use calorie_core::Nv21Frame;
///
/// // A 2x2 mid-grey frame: four luma bytes and one V/U pair.
/// let frame = Nv21Frame::new(2, 2, vec![128, 128, 128, 128, 128, 128]).unwrap();
/// let image = frame.to_rgb_image();
/// assert_eq!(image.get_pixel(0, 0).0, [128, 128, 128]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nv21Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Nv21Frame {
    /// Wraps an NV21 buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidDimensions`] unless both dimensions are
    /// even and non-zero, and [`FrameError::BufferSize`] unless `data` holds
    /// exactly `width * height * 3 / 2` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, FrameError> {
        let expected = Self::buffer_len(width, height)?;
        if data.len() != expected {
            return Err(FrameError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds a frame from separate Y, U and V planes.
    ///
    /// `u` and `v` are quarter-size planes (one sample per 2x2 block). They are
    /// interleaved V first, as NV21 requires.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or any plane has the
    /// wrong length.
    pub fn from_planes(
        width: u32,
        height: u32,
        y: &[u8],
        u: &[u8],
        v: &[u8],
    ) -> Result<Self, FrameError> {
        let luma_len = Self::buffer_len(width, height)? * 2 / 3;
        let chroma_len = luma_len / 4;
        for (plane, expected) in [(y, luma_len), (u, chroma_len), (v, chroma_len)] {
            if plane.len() != expected {
                return Err(FrameError::BufferSize {
                    expected,
                    actual: plane.len(),
                });
            }
        }

        let mut data = Vec::with_capacity(luma_len + chroma_len * 2);
        data.extend_from_slice(y);
        for (v, u) in v.iter().zip(u) {
            data.push(*v);
            data.push(*u);
        }
        Self::new(width, height, data)
    }

    fn buffer_len(width: u32, height: u32) -> Result<usize, FrameError> {
        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            return Err(FrameError::InvalidDimensions { width, height });
        }
        let pixels = usize::try_from(u64::from(width) * u64::from(height))
            .map_err(|_| FrameError::InvalidDimensions { width, height })?;
        Ok(pixels * 3 / 2)
    }

    /// Frame width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw NV21 bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Converts the frame to RGB using full-range BT.601 coefficients.
    #[must_use]
    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.width as usize;
        let (luma, chroma) = self.data.split_at(width * self.height as usize);

        RgbImage::from_fn(self.width, self.height, |x, y| {
            let (x, y) = (x as usize, y as usize);
            let luma = f32::from(luma[y * width + x]);
            let pair = (y / 2) * width + (x / 2) * 2;
            let v = f32::from(chroma[pair]) - 128.0;
            let u = f32::from(chroma[pair + 1]) - 128.0;

            let r = luma + 1.402 * v;
            let g = luma - 0.344_136 * u - 0.714_136 * v;
            let b = luma + 1.772 * u;
            image::Rgb([clamp_channel(r), clamp_channel(g), clamp_channel(b)])
        })
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Encodes `image` as JPEG with `quality` in `1..=100`.
///
/// # Errors
///
/// Returns [`FrameError::Encode`] if the encoder fails.
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, FrameError> {
    let mut bytes = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100)).encode_image(image)?;
    Ok(bytes.into_inner())
}
