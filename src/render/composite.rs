use crate::foundation::core::Resolution;
use crate::foundation::error::{FaceError, FaceResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::frame::PixelBuffer;

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff "over" for one premultiplied pixel.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> FaceResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(FaceError::validation(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite `layers` bottom-to-top onto a transparent buffer of `resolution`.
pub fn composite(layers: &[&PixelBuffer], resolution: Resolution) -> FaceResult<PixelBuffer> {
    let mut out = PixelBuffer::transparent(resolution)?;
    composite_into(&mut out, layers)?;
    Ok(out)
}

/// Like [`composite`], reusing the allocation of `dst`.
///
/// All layers are checked against the size of `dst` before any pixel is written, so a mismatch
/// leaves `dst` untouched.
pub fn composite_into(dst: &mut PixelBuffer, layers: &[&PixelBuffer]) -> FaceResult<()> {
    let expected = dst.resolution();
    if let Some(bad) = layers.iter().find(|l| l.resolution() != expected) {
        return Err(FaceError::dimension_mismatch(expected, bad.resolution()));
    }

    dst.clear();
    for layer in layers {
        over_in_place(dst.data_mut(), layer.data())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
