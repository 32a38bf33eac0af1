use anyhow::Context;

use crate::foundation::core::Resolution;
use crate::foundation::error::FaceResult;
use crate::foundation::math::premultiply_rgba8_in_place;
use crate::render::frame::PixelBuffer;

/// Resampling filter used when fitting sprites to the working resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    /// Nearest neighbour.
    Nearest,
    /// Bilinear.
    Triangle,
    /// Bicubic (Catmull-Rom).
    #[default]
    CatmullRom,
    /// Gaussian.
    Gaussian,
    /// Lanczos with window 3.
    Lanczos3,
}

impl ResizeFilter {
    fn to_image_filter(self) -> image::imageops::FilterType {
        use image::imageops::FilterType;
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Decode encoded image bytes, fit them to `resolution` and convert to premultiplied RGBA8.
///
/// Images already at `resolution` are not resampled. Pixels are premultiplied before
/// resampling so the color of fully transparent texels cannot bleed into sprite edges.
pub fn decode_sprite(
    bytes: &[u8],
    resolution: Resolution,
    filter: ResizeFilter,
) -> FaceResult<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let (src_w, src_h) = (dyn_img.width(), dyn_img.height());
    let mut premul = dyn_img.into_rgba8().into_raw();
    premultiply_rgba8_in_place(&mut premul);

    if (src_w, src_h) == (resolution.width, resolution.height) {
        return PixelBuffer::from_premul_rgba8(src_w, src_h, premul);
    }

    let src = image::RgbaImage::from_raw(src_w, src_h, premul)
        .context("wrap premultiplied pixels for resampling")?;
    let mut data = image::imageops::resize(
        &src,
        resolution.width,
        resolution.height,
        filter.to_image_filter(),
    )
    .into_raw();
    // Ringing filters can push color above alpha.
    for px in data.chunks_exact_mut(4) {
        let a = px[3];
        for c in &mut px[..3] {
            *c = (*c).min(a);
        }
    }
    PixelBuffer::from_premul_rgba8(resolution.width, resolution.height, data)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
