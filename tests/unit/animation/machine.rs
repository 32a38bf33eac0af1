use super::*;
use crate::scene::config::Timings;
use crate::test_support::rig;

#[test]
fn kind_parses_known_names_and_aliases() {
    assert_eq!("idle".parse::<AnimationKind>().unwrap(), AnimationKind::Idle);
    assert_eq!("angry".parse::<AnimationKind>().unwrap(), AnimationKind::Angry);
    assert_eq!("mad".parse::<AnimationKind>().unwrap(), AnimationKind::Angry);
    assert_eq!(" Laugh ".parse::<AnimationKind>().unwrap(), AnimationKind::Laugh);

    let err = "sleepy".parse::<AnimationKind>().unwrap_err();
    assert!(matches!(err, FaceError::UnknownState(name) if name == "sleepy"));
}

#[test]
fn kind_display_and_serde_agree() {
    for kind in AnimationKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{kind}\""));
        assert_eq!(kind.as_str().parse::<AnimationKind>().unwrap(), kind);
    }
    let mad: AnimationKind = serde_json::from_str("\"mad\"").unwrap();
    assert_eq!(mad, AnimationKind::Angry);
}

#[test]
fn kind_index_roundtrips() {
    for kind in AnimationKind::ALL {
        assert_eq!(AnimationKind::from_index(kind.index() as u8), Some(kind));
    }
    assert_eq!(AnimationKind::from_index(3), None);
    assert_eq!(AnimationKind::default(), AnimationKind::Idle);
}

#[test]
fn animation_dispatches_to_variant() {
    let t = Timings::default();
    let mut anims: Vec<Animation> = vec![
        IdleAnimation::new(rig(2, 2), &t).unwrap().into(),
        AngryAnimation::new(rig(1, 1)).into(),
        LaughAnimation::new(rig(2, 1), &t).unwrap().into(),
    ];
    for (anim, kind) in anims.iter_mut().zip(AnimationKind::ALL) {
        assert_eq!(anim.kind(), kind);
        assert!(anim.current_frame().is_none());
        anim.advance(false).unwrap();
        anim.advance(false).unwrap();
        assert_eq!(anim.tick(), 2);
        assert_eq!(anim.renders(), 1);
        assert!(anim.current_frame().is_some());
        assert_eq!(anim.rig().resolution(), crate::test_support::RES);
    }
}
