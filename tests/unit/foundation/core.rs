use super::*;

#[test]
fn negative_ticks_are_rejected() {
    assert_eq!(Tick::from_signed(7).unwrap(), Tick(7));
    assert!(matches!(
        Tick::from_signed(-1),
        Err(TweenlineError::InvalidRange(_))
    ));
}

#[test]
fn tick_since_saturates() {
    assert_eq!(Tick(10).since(Tick(4)), 6);
    assert_eq!(Tick(4).since(Tick(10)), 0);
}

#[test]
fn rgb_channels_must_be_bytes() {
    assert_eq!(
        Rgb::from_channels([0, 128, 255]).unwrap(),
        Rgb::new(0, 128, 255)
    );
    assert!(Rgb::from_channels([256, 0, 0]).is_err());
    assert!(Rgb::from_channels([0, -1, 0]).is_err());
}

#[test]
fn rgb_from_clamped_saturates() {
    assert_eq!(Rgb::from_clamped([-4, 300, 17]), Rgb::new(0, 255, 17));
}

#[test]
fn bounds_reject_negative_dimensions() {
    let b = Bounds::new(-10, 20, 360, 240).unwrap();
    assert_eq!((b.x, b.y, b.width, b.height), (-10, 20, 360, 240));
    assert!(Bounds::new(0, 0, -1, 10).is_err());
    assert!(Bounds::new(0, 0, 10, -1).is_err());
}
