use super::*;

#[test]
fn resolution_rejects_zero_dimensions() {
    assert!(Resolution::new(0, 10).is_err());
    assert!(Resolution::new(10, 0).is_err());
    let r = Resolution::new(3, 2).unwrap();
    assert_eq!(r.rgba8_len().unwrap(), 24);
}

#[test]
fn resolution_parses_width_by_height() {
    let r: Resolution = "1280x720".parse().unwrap();
    assert_eq!(
        r,
        Resolution {
            width: 1280,
            height: 720
        }
    );
    assert_eq!(r.to_string(), "1280x720");
    assert_eq!(" 64X32 ".parse::<Resolution>().unwrap().height, 32);

    assert!("1280".parse::<Resolution>().is_err());
    assert!("axb".parse::<Resolution>().is_err());
    assert!("0x10".parse::<Resolution>().is_err());
}
