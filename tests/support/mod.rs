#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

pub fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "facerig_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Encode an image whose pixel at `(x, y)` is `paint(x, y)` (straight RGBA).
pub fn png_bytes(width: u32, height: u32, paint: impl Fn(u32, u32) -> [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, |x, y| image::Rgba(paint(x, y)));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

/// Write every sprite of the built-in avatar into `dir`, `size`x`size` pixels each.
///
/// The background is opaque; every other sprite paints a distinct color over one horizontal band
/// and is transparent elsewhere, so variants are distinguishable after compositing.
pub fn write_default_avatar(dir: &Path, size: u32) {
    let band = |row: u32, color: [u8; 3]| {
        move |_x: u32, y: u32| {
            if y * 4 / size == row {
                [color[0], color[1], color[2], 255]
            } else {
                [0, 0, 0, 0]
            }
        }
    };

    let sprites: Vec<(&str, Vec<u8>)> = vec![
        ("background.png", png_bytes(size, size, |_, _| [20, 30, 40, 255])),
        ("idle_face.png", png_bytes(size, size, band(0, [250, 200, 180]))),
        ("idle_mouth.png", png_bytes(size, size, band(1, [120, 0, 0]))),
        ("lol_mouth.png", png_bytes(size, size, band(1, [255, 80, 80]))),
        ("mad_mouth.png", png_bytes(size, size, band(1, [60, 0, 0]))),
        ("idle_eyes.png", png_bytes(size, size, band(2, [0, 0, 255]))),
        ("idle_blink.png", png_bytes(size, size, band(2, [0, 0, 60]))),
        ("mad_eyes.png", png_bytes(size, size, band(2, [255, 0, 0]))),
        ("lol_eyes.png", png_bytes(size, size, band(2, [0, 255, 0]))),
    ];
    for (name, bytes) in sprites {
        std::fs::write(dir.join(name), bytes).unwrap();
    }
}
