use std::time::Duration;
use tunnel_core::{Ease, Repeat, Tween, TweenSpec};

fn secs(s: f32) -> Duration {
    Duration::from_secs_f32(s)
}

fn one_second(repeat: Repeat, yoyo: bool) -> TweenSpec {
    TweenSpec {
        from: 0.0,
        to: 1.0,
        duration: secs(1.0),
        ease: Ease::Linear,
        repeat,
        yoyo,
    }
}

#[test]
fn fly_through_is_halfway_after_five_seconds() {
    let tween = Tween::new(TweenSpec::fly_through());
    assert!((tween.value_at(secs(5.0)) - 0.5).abs() < 1e-4);
    assert_eq!(tween.value_at(Duration::ZERO), 0.0);
}

#[test]
fn fly_through_restarts_after_each_lap() {
    let mut tween = Tween::new(TweenSpec::fly_through());
    let v = tween.advance(secs(12.0)).unwrap();
    assert!((v - 0.2).abs() < 1e-4, "{v}");
    // still running well past many laps
    let v = tween.advance(secs(1000.0)).unwrap();
    assert!((0.0..1.0).contains(&v));
    assert!(!tween.is_finished());
}

#[test]
fn advance_accumulates_small_steps() {
    let mut tween = Tween::new(TweenSpec::fly_through());
    let mut last = 0.0;
    for _ in 0..60 {
        last = tween.advance(secs(1.0 / 60.0)).unwrap();
    }
    assert!((last - 0.1).abs() < 1e-3, "{last}");
    assert!((tween.elapsed().as_secs_f32() - 1.0).abs() < 1e-3);
}

#[test]
fn finite_tween_lands_on_target_then_stops() {
    let mut tween = Tween::new(one_second(Repeat::Count(1), false));
    assert!((tween.advance(secs(1.5)).unwrap() - 0.5).abs() < 1e-4);
    assert_eq!(tween.advance(secs(1.0)), Some(1.0));
    assert!(tween.is_finished());
    assert_eq!(tween.advance(secs(1.0)), None);
    assert_eq!(tween.elapsed(), secs(2.0));
}

#[test]
fn yoyo_plays_backwards_on_odd_cycles() {
    let tween = Tween::new(one_second(Repeat::Infinite, true));
    assert!((tween.value_at(secs(0.25)) - 0.25).abs() < 1e-4);
    assert!((tween.value_at(secs(1.25)) - 0.75).abs() < 1e-4);
    assert!((tween.value_at(secs(2.25)) - 0.25).abs() < 1e-4);
}

#[test]
fn finished_yoyo_rests_on_its_start_value() {
    let mut tween = Tween::new(one_second(Repeat::Count(1), true));
    assert_eq!(tween.advance(secs(5.0)), Some(0.0));
}

#[test]
fn value_range_maps_onto_from_and_to() {
    let tween = Tween::new(TweenSpec {
        from: 10.0,
        to: -10.0,
        ..one_second(Repeat::Count(0), false)
    });
    assert!((tween.value_at(secs(0.5))).abs() < 1e-4);
    assert_eq!(tween.value_at(secs(3.0)), -10.0);
}

#[test]
fn zero_duration_jumps_to_target() {
    let tween = Tween::new(TweenSpec {
        duration: Duration::ZERO,
        ..one_second(Repeat::Count(0), false)
    });
    assert_eq!(tween.value_at(Duration::ZERO), 1.0);
}

#[test]
fn eases_fix_their_endpoints() {
    let all = [
        Ease::Linear,
        Ease::QuadIn,
        Ease::QuadOut,
        Ease::QuadInOut,
        Ease::CubicInOut,
        Ease::SineInOut,
    ];
    for ease in all {
        assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?}");
    }
    assert!((Ease::QuadInOut.apply(0.5) - 0.5).abs() < 1e-6);
    assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-6);
    assert!(Ease::QuadIn.apply(0.5) < 0.5);
    assert!(Ease::QuadOut.apply(0.5) > 0.5);
}
