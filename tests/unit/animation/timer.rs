use super::*;

#[test]
fn first_flip_waits_for_variant_zero_hold() {
    let mut t = FeatureTimer::new(2, vec![3, 1]).unwrap();
    assert_eq!(t.next_change(), 3);
    assert!(!t.poll(1));
    assert!(!t.poll(2));
    assert!(t.poll(3));
    assert_eq!(t.index(), 1);
    assert_eq!(t.next_change(), 4);
}

#[test]
fn due_tick_is_inclusive() {
    let t = FeatureTimer::new(2, vec![5]).unwrap();
    assert!(!t.is_due(4));
    assert!(t.is_due(5));
    assert!(t.is_due(6));
}

#[test]
fn holds_table_wraps_for_extra_variants() {
    let mut t = FeatureTimer::new(3, vec![2, 7]).unwrap();
    assert_eq!(t.hold(0), 2);
    assert_eq!(t.hold(1), 7);
    assert_eq!(t.hold(2), 2);
    assert!(t.poll(2));
    assert!(t.poll(9));
    assert_eq!(t.index(), 2);
    assert!(t.poll(11));
    assert_eq!(t.index(), 0);
}

#[test]
fn rested_timer_fires_on_first_poll() {
    let mut t = FeatureTimer::rested(2, vec![4]).unwrap();
    assert!(t.is_due(0));
    assert!(t.poll(10));
    assert_eq!(t.next_change(), 14);
}

#[test]
fn rest_returns_to_variant_zero() {
    let mut t = FeatureTimer::rested(3, vec![4]).unwrap();
    assert!(!t.rest());
    t.poll(0);
    assert_eq!(t.index(), 1);
    assert!(t.rest());
    assert_eq!(t.index(), 0);
    assert!(t.is_due(0));
}

#[test]
fn single_variant_never_reports_change() {
    let mut t = FeatureTimer::new(1, vec![1]).unwrap();
    assert!(!t.poll(1));
    assert_eq!(t.index(), 0);
    assert_eq!(t.next_change(), 2);

    let mut absent = FeatureTimer::new(0, vec![1]).unwrap();
    assert!(!absent.poll(5));
}

#[test]
fn zero_or_missing_holds_are_rejected() {
    assert!(FeatureTimer::new(2, vec![]).is_err());
    assert!(FeatureTimer::new(2, vec![3, 0]).is_err());
}
