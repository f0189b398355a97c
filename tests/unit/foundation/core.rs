use super::*;

#[test]
fn fps_validation() {
    assert!(Fps::new(50, 1).is_ok());
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn frames_covering_rounds_partial_frames_up() {
    let fps = Fps::new(50, 1).unwrap();
    assert_eq!(fps.frames_covering(Duration::from_secs(34)), 1700);
    assert_eq!(fps.frames_covering(Duration::from_millis(10)), 1);
    assert_eq!(fps.frames_covering(Duration::from_millis(21)), 2);
    assert_eq!(fps.frames_covering(Duration::ZERO), 0);
}

#[test]
fn frame_time_uses_rational_fps() {
    let fps = Fps::new(30_000, 1001).unwrap();
    assert_eq!(fps.frame_time(FrameIndex(0)), Duration::ZERO);
    assert_eq!(fps.frame_time(FrameIndex(30_000)), Duration::from_secs(1001));
}

#[test]
fn canvas_validation() {
    assert!(Canvas::default().validate().is_ok());
    assert!(
        Canvas {
            width: 0,
            height: 2
        }
        .validate()
        .is_err()
    );
    assert!(
        Canvas {
            width: 11,
            height: 10
        }
        .validate()
        .is_err()
    );
}

#[test]
fn samples_round_trip_at_whole_seconds() {
    assert_eq!(duration_to_samples(Duration::from_secs(2), 48_000), 96_000);
    assert_eq!(samples_to_duration(96_000, 48_000), Duration::from_secs(2));
}

#[test]
fn premul_of_opaque_is_identity() {
    assert_eq!(Rgba8::rgb(1, 2, 3).to_premul_array(), [1, 2, 3, 255]);
    let half = Rgba8 {
        r: 255,
        g: 0,
        b: 0,
        a: 128,
    };
    assert_eq!(half.to_premul_array(), [128, 0, 0, 128]);
}

#[test]
fn secs_to_duration_rejects_negative() {
    assert!(secs_to_duration(-1.0).is_err());
    assert!(secs_to_duration(f64::NAN).is_err());
    assert_eq!(secs_to_duration(1.5).unwrap(), Duration::from_millis(1500));
}
