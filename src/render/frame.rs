use crate::foundation::core::Resolution;
use crate::foundation::error::{FaceError, FaceResult};
use crate::foundation::math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};

/// A rectangular RGBA8 image at the working resolution.
///
/// Pixels are **premultiplied alpha**, tightly packed, row-major. Sprite layers are shared
/// immutably once loaded; composited frames are owned by the animation that produced them.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// A fully transparent buffer.
    pub fn transparent(resolution: Resolution) -> FaceResult<Self> {
        Ok(Self {
            width: resolution.width,
            height: resolution.height,
            data: vec![0; resolution.rgba8_len()?],
        })
    }

    /// A buffer filled with a single premultiplied color.
    pub fn filled(resolution: Resolution, premul: [u8; 4]) -> FaceResult<Self> {
        let mut buf = Self::transparent(resolution)?;
        for px in buf.data.chunks_exact_mut(4) {
            px.copy_from_slice(&premul);
        }
        Ok(buf)
    }

    /// Wrap premultiplied RGBA8 bytes.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> FaceResult<Self> {
        let resolution = Resolution::new(width, height)?;
        let expected = resolution.rgba8_len()?;
        if data.len() != expected {
            return Err(FaceError::validation(format!(
                "rgba8 buffer for {resolution} must be {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap straight-alpha RGBA8 bytes, premultiplying them.
    pub fn from_straight_rgba8(width: u32, height: u32, mut data: Vec<u8>) -> FaceResult<Self> {
        premultiply_rgba8_in_place(&mut data);
        Self::from_premul_rgba8(width, height, data)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions of this buffer.
    pub fn resolution(&self) -> Resolution {
        Resolution {
            width: self.width,
            height: self.height,
        }
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Premultiplied pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy of the pixels converted to straight alpha, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        unpremultiply_rgba8_in_place(&mut out);
        out
    }

    pub(crate) fn clear(&mut self) {
        self.data.fill(0);
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
