use super::*;
use crate::test_support::{png_bytes, temp_dir};

fn res() -> Resolution {
    Resolution::new(4, 4).unwrap()
}

#[test]
fn normalize_path_slash_normalization() {
    assert_eq!(normalize_rel_path("a/b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("./a//b.png").unwrap(), "a/b.png");
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./.").is_err());
    assert!(normalize_rel_path("C:\\sprites\\face.png").is_err());
}

#[test]
fn normalize_path_errors_name_the_sprite() {
    for bad in ["/abs.png", "", "mouth/../../x.png"] {
        let err = normalize_rel_path(bad).unwrap_err();
        assert!(
            err.to_string().contains(&format!("'{bad}'")),
            "{bad:?}: {err}"
        );
    }
}

#[test]
fn load_same_sprite_only_decodes_once() {
    let tmp = temp_dir("store_decode_once");
    std::fs::write(tmp.join("face.png"), png_bytes(8, 8, |_, _| [1, 2, 3, 255])).unwrap();

    let mut store = SpriteStore::new(&tmp, res(), ResizeFilter::Nearest);
    assert!(store.is_empty());
    let a = store.load("face.png").unwrap();
    let b = store.load("./face.png").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(store.decode_count("face.png"), 1);
    assert_eq!(store.len(), 1);
    assert_eq!(a.resolution(), res());
    assert_eq!(a.pixel(3, 3), Some([1, 2, 3, 255]));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn missing_sprite_is_a_resource_load_error() {
    let tmp = temp_dir("store_missing");
    let mut store = SpriteStore::new(&tmp, res(), ResizeFilter::default());
    let err = store.load("nope.png").unwrap_err();
    let FaceError::ResourceLoad { path, .. } = err else {
        panic!("expected resource load error, got {err:?}");
    };
    assert!(path.ends_with("nope.png"));
    assert_eq!(store.decode_count("nope.png"), 0);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn corrupt_sprite_is_a_resource_load_error() {
    let tmp = temp_dir("store_corrupt");
    std::fs::write(tmp.join("bad.png"), b"not an image").unwrap();
    let mut store = SpriteStore::new(&tmp, res(), ResizeFilter::default());
    assert!(matches!(
        store.load("bad.png"),
        Err(FaceError::ResourceLoad { .. })
    ));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn traversal_is_rejected_before_touching_disk() {
    let mut store = SpriteStore::new(".", res(), ResizeFilter::default());
    assert!(matches!(
        store.load("../secret.png"),
        Err(FaceError::Validation(_))
    ));
}
