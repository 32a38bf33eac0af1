use super::*;

fn res(width: u32, height: u32) -> Resolution {
    Resolution::new(width, height).unwrap()
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [0, 0, 0, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_half_alpha_blends_and_accumulates_alpha() {
    let dst = [0, 0, 200, 255];
    let src = [64, 0, 0, 128];
    let out = over(dst, src);
    assert_eq!(out[0], 64);
    assert_eq!(out[2], ((200u16 * 127 + 127) / 255) as u8);
    assert_eq!(out[3], 255);
}

#[test]
fn opaque_background_under_transparent_overlay_is_unchanged() {
    let r = res(3, 2);
    let background = PixelBuffer::filled(r, [12, 34, 56, 255]).unwrap();
    let overlay = PixelBuffer::transparent(r).unwrap();
    let out = composite(&[&background, &overlay], r).unwrap();
    assert_eq!(out, background);
}

#[test]
fn layer_order_is_significant() {
    let r = res(1, 1);
    let red = PixelBuffer::filled(r, [255, 0, 0, 255]).unwrap();
    let blue = PixelBuffer::filled(r, [0, 0, 255, 255]).unwrap();
    assert_eq!(
        composite(&[&red, &blue], r).unwrap().pixel(0, 0),
        Some([0, 0, 255, 255])
    );
    assert_eq!(
        composite(&[&blue, &red], r).unwrap().pixel(0, 0),
        Some([255, 0, 0, 255])
    );
}

#[test]
fn empty_stack_is_fully_transparent() {
    let out = composite(&[], res(2, 2)).unwrap();
    assert!(out.data().iter().all(|&b| b == 0));
}

#[test]
fn mismatched_layer_fails_and_leaves_dst_untouched() {
    let r = res(2, 2);
    let background = PixelBuffer::filled(r, [1, 2, 3, 255]).unwrap();
    let wrong = PixelBuffer::transparent(res(3, 2)).unwrap();

    let err = composite(&[&background, &wrong], r).unwrap_err();
    assert!(matches!(
        err,
        FaceError::DimensionMismatch { expected, actual }
            if expected == r && actual == res(3, 2)
    ));

    let mut dst = background.clone();
    assert!(composite_into(&mut dst, &[&wrong]).is_err());
    assert_eq!(dst, background);
}

#[test]
fn composite_into_discards_previous_contents() {
    let r = res(1, 1);
    let mut dst = PixelBuffer::filled(r, [255, 255, 255, 255]).unwrap();
    let half = PixelBuffer::filled(r, [0, 0, 64, 128]).unwrap();
    composite_into(&mut dst, &[&half]).unwrap();
    assert_eq!(dst.pixel(0, 0), Some([0, 0, 64, 128]));
}
